use serde::Deserialize;

/// High-level app configuration, flattened from the TOML tables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub headline: String,
    pub window_width: f32,
    pub window_height: f32,
    pub verses_path: Option<String>,
    pub audio_dir: String,
    pub auto_advance_secs: f32,
    pub volume: f32,
    pub share_url: String,
    pub share_include_verse: bool,
    pub camera_index: u32,
    pub frame_interval_ms: u64,
    pub scanner_image_source: Option<String>,
    pub log_level: LogLevel,
    pub key_toggle_play_pause: String,
    pub key_next_verse: String,
    pub key_previous_verse: String,
    pub key_toggle_mute: String,
    pub key_toggle_theme: String,
    pub key_open_scanner: String,
    pub key_toggle_share_code: String,
    pub key_safe_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            headline: crate::config::defaults::default_headline(),
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            verses_path: None,
            audio_dir: crate::config::defaults::default_audio_dir(),
            auto_advance_secs: crate::config::defaults::default_auto_advance_secs(),
            volume: crate::config::defaults::default_volume(),
            share_url: crate::config::defaults::default_share_url(),
            share_include_verse: false,
            camera_index: 0,
            frame_interval_ms: crate::config::defaults::default_frame_interval_ms(),
            scanner_image_source: None,
            log_level: crate::config::defaults::default_log_level(),
            key_toggle_play_pause: crate::config::defaults::default_key_toggle_play_pause(),
            key_next_verse: crate::config::defaults::default_key_next_verse(),
            key_previous_verse: crate::config::defaults::default_key_previous_verse(),
            key_toggle_mute: crate::config::defaults::default_key_toggle_mute(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_open_scanner: crate::config::defaults::default_key_open_scanner(),
            key_toggle_share_code: crate::config::defaults::default_key_toggle_share_code(),
            key_safe_quit: crate::config::defaults::default_key_safe_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    Day,
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
