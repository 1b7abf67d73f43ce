use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `config.toml`: one table per concern.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    content: ContentConfig,
    #[serde(default)]
    playback: PlaybackConfig,
    #[serde(default)]
    share: ShareConfig,
    #[serde(default)]
    scanner: ScannerConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    keys: KeysConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            headline: tables.appearance.headline,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            verses_path: non_empty(tables.content.verses_path),
            audio_dir: tables.playback.audio_dir,
            auto_advance_secs: finite_or_default(
                tables.playback.auto_advance_secs,
                defaults::default_auto_advance_secs(),
            )
            .clamp(defaults::MIN_AUTO_ADVANCE_SECS, defaults::MAX_AUTO_ADVANCE_SECS),
            volume: finite_or_default(tables.playback.volume, defaults::default_volume())
                .clamp(defaults::MIN_VOLUME, defaults::MAX_VOLUME),
            share_url: tables.share.url,
            share_include_verse: tables.share.include_verse,
            camera_index: tables.scanner.camera_index,
            frame_interval_ms: tables
                .scanner
                .frame_interval_ms
                .max(defaults::MIN_FRAME_INTERVAL_MS),
            scanner_image_source: non_empty(tables.scanner.image_source),
            log_level: tables.logging.log_level,
            key_toggle_play_pause: tables.keys.toggle_play_pause,
            key_next_verse: tables.keys.next_verse,
            key_previous_verse: tables.keys.previous_verse,
            key_toggle_mute: tables.keys.toggle_mute,
            key_toggle_theme: tables.keys.toggle_theme,
            key_open_scanner: tables.keys.open_scanner,
            key_toggle_share_code: tables.keys.toggle_share_code,
            key_safe_quit: tables.keys.safe_quit,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn finite_or_default(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_headline")]
    headline: String,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            headline: defaults::default_headline(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ContentConfig {
    #[serde(default)]
    verses_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct PlaybackConfig {
    #[serde(default = "defaults::default_audio_dir")]
    audio_dir: String,
    #[serde(default = "defaults::default_auto_advance_secs")]
    auto_advance_secs: f32,
    #[serde(default = "defaults::default_volume")]
    volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            audio_dir: defaults::default_audio_dir(),
            auto_advance_secs: defaults::default_auto_advance_secs(),
            volume: defaults::default_volume(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ShareConfig {
    #[serde(default = "defaults::default_share_url")]
    url: String,
    #[serde(default)]
    include_verse: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        ShareConfig {
            url: defaults::default_share_url(),
            include_verse: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ScannerConfig {
    #[serde(default)]
    camera_index: u32,
    #[serde(default = "defaults::default_frame_interval_ms")]
    frame_interval_ms: u64,
    #[serde(default)]
    image_source: Option<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            camera_index: 0,
            frame_interval_ms: defaults::default_frame_interval_ms(),
            image_source: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_toggle_play_pause")]
    toggle_play_pause: String,
    #[serde(default = "defaults::default_key_next_verse")]
    next_verse: String,
    #[serde(default = "defaults::default_key_previous_verse")]
    previous_verse: String,
    #[serde(default = "defaults::default_key_toggle_mute")]
    toggle_mute: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_open_scanner")]
    open_scanner: String,
    #[serde(default = "defaults::default_key_toggle_share_code")]
    toggle_share_code: String,
    #[serde(default = "defaults::default_key_safe_quit")]
    safe_quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            toggle_play_pause: defaults::default_key_toggle_play_pause(),
            next_verse: defaults::default_key_next_verse(),
            previous_verse: defaults::default_key_previous_verse(),
            toggle_mute: defaults::default_key_toggle_mute(),
            toggle_theme: defaults::default_key_toggle_theme(),
            open_scanner: defaults::default_key_open_scanner(),
            toggle_share_code: defaults::default_key_toggle_share_code(),
            safe_quit: defaults::default_key_safe_quit(),
        }
    }
}
