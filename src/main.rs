//! Entry point for the Ayati Link verse reader.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration (default `conf/config.toml`).
//! - Load the verse dataset.
//! - Launch the GUI application with the loaded verses and config.

mod app;
mod audio;
mod cancellation;
mod config;
mod qr;
mod theme;
mod verses;

use crate::app::run_app;
use crate::config::load_config;
use crate::verses::load_verses;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

const DEFAULT_CONFIG_PATH: &str = "conf/config.toml";

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Returns true once per Ctrl+C press.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::AcqRel)
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    config_path: Option<PathBuf>,
    start_verse: Option<i64>,
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = load_config(&config_path);
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        config = %config_path.display(),
        level = %config.log_level,
        "Starting Ayati Link"
    );

    let verses = load_verses(config.verses_path.as_deref().map(std::path::Path::new));
    info!(
        verses = verses.len(),
        audio_dir = %config.audio_dir,
        auto_advance_secs = config.auto_advance_secs,
        "Loaded verse dataset"
    );

    if let Err(err) = ctrlc::set_handler(|| {
        SIGINT_REQUESTED.store(true, Ordering::Release);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }

    run_app(verses, config, args.start_verse).context("Failed to start the GUI")?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("Missing value for --config"))?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--verse" => {
                let raw = args
                    .next()
                    .ok_or_else(|| anyhow!("Missing value for --verse"))?;
                let index = raw
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("Invalid verse index: {raw}"))?;
                parsed.start_verse = Some(index);
            }
            other => {
                return Err(anyhow!(
                    "Unexpected argument {other}\nUsage: ayati-link [--config <path>] [--verse <index>]"
                ));
            }
        }
    }
    Ok(parsed)
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with logging.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
