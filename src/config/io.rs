use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Parsing config tables")?;
    Ok(tables.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = parse_config(
            r#"
[appearance]
theme = "night"

[playback]
auto_advance_secs = 4.5

[share]
include_verse = true

[logging]
log_level = "warn"
"#,
        )
        .unwrap();
        assert_eq!(cfg.theme, ThemeMode::Night);
        assert_eq!(cfg.auto_advance_secs, 4.5);
        assert!(cfg.share_include_verse);
        assert_eq!(cfg.log_level, LogLevel::Warn);
        assert_eq!(cfg.audio_dir, "assets/audio");
        assert_eq!(cfg.key_toggle_play_pause, "space");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let cfg = parse_config(
            r#"
[playback]
auto_advance_secs = 0.1
volume = 9.0

[scanner]
frame_interval_ms = 0
image_source = "  "
"#,
        )
        .unwrap();
        assert_eq!(cfg.auto_advance_secs, 1.0);
        assert_eq!(cfg.volume, 2.0);
        assert_eq!(cfg.frame_interval_ms, 10);
        assert_eq!(cfg.scanner_image_source, None);
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(parse_config("[playback\nvolume = ").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("/nonexistent/ayati-link/config.toml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
