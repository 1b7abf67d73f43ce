//! Reader settings, read from `conf/config.toml` (or `--config <path>`).
//!
//! The file is split into one table per concern. Missing keys take their
//! defaults and out-of-range values are clamped, so a broken file never keeps
//! the window from opening.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, LogLevel, ThemeMode};
