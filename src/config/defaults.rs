pub(crate) const MIN_AUTO_ADVANCE_SECS: f32 = 1.0;
pub(crate) const MAX_AUTO_ADVANCE_SECS: f32 = 3600.0;
pub(crate) const MIN_VOLUME: f32 = 0.0;
pub(crate) const MAX_VOLUME: f32 = 2.0;
pub(crate) const MIN_FRAME_INTERVAL_MS: u64 = 10;

pub(crate) fn default_headline() -> String {
    "L'interdiction".to_string()
}

pub(crate) fn default_window_width() -> f32 {
    900.0
}

pub(crate) fn default_window_height() -> f32 {
    760.0
}

pub(crate) fn default_audio_dir() -> String {
    "assets/audio".to_string()
}

pub(crate) fn default_auto_advance_secs() -> f32 {
    10.0
}

pub(crate) fn default_volume() -> f32 {
    1.0
}

pub(crate) fn default_share_url() -> String {
    "https://ayati-link.vercel.app".to_string()
}

pub(crate) fn default_frame_interval_ms() -> u64 {
    100
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_key_toggle_play_pause() -> String {
    "space".to_string()
}

pub(crate) fn default_key_next_verse() -> String {
    "right".to_string()
}

pub(crate) fn default_key_previous_verse() -> String {
    "left".to_string()
}

pub(crate) fn default_key_toggle_mute() -> String {
    "m".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "t".to_string()
}

pub(crate) fn default_key_open_scanner() -> String {
    "s".to_string()
}

pub(crate) fn default_key_toggle_share_code() -> String {
    "c".to_string()
}

pub(crate) fn default_key_safe_quit() -> String {
    "q".to_string()
}
