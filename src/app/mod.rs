mod messages;
mod state;
mod update;
mod view;

use crate::config::AppConfig;
use crate::verses::VerseStore;
use iced::{Size, Theme, window};
use state::App;

/// Launch the reader window over `verses`, optionally opening at `start_verse`.
pub fn run_app(
    verses: VerseStore,
    config: AppConfig,
    start_verse: Option<i64>,
) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };

    iced::application("Ayati Link", App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|app: &App| Theme::from(app.ui_theme()))
        .run_with(move || App::bootstrap(verses, config, start_verse))
}
