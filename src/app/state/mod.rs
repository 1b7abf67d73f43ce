mod constants;
mod playback;
mod ui;

use crate::audio::AudioPlayer;
use crate::config::{AppConfig, ThemeMode};
use crate::verses::{Verse, VerseStore};
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use playback::{PlaybackState, checked_target};
pub(in crate::app) use ui::{ScannerState, ShareState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) verses: VerseStore,
    pub(super) playback: PlaybackState,
    pub(super) audio: AudioPlayer,
    pub(super) theme: ThemeMode,
    pub(super) share: ShareState,
    pub(super) scanner: ScannerState,
}

impl App {
    pub fn bootstrap(
        verses: VerseStore,
        config: AppConfig,
        start_verse: Option<i64>,
    ) -> (Self, Task<Message>) {
        let start = match start_verse {
            Some(target) => checked_target(target, verses.len()).unwrap_or_else(|| {
                warn!(target, verses = verses.len(), "Ignoring out-of-range start verse");
                0
            }),
            None => 0,
        };

        let mut app = App {
            audio: AudioPlayer::new(config.volume),
            theme: config.theme,
            playback: PlaybackState::new(start),
            verses,
            share: ShareState::default(),
            scanner: ScannerState::default(),
            config,
        };
        app.load_current_audio();
        info!(
            verse = app.playback.current,
            verses = app.verse_count(),
            theme = %app.theme,
            "Initialized app state"
        );

        (app, Task::none())
    }

    pub(super) fn verse_count(&self) -> usize {
        self.verses.len()
    }

    pub(super) fn current_verse(&self) -> &Verse {
        self.verses.verse(self.playback.current)
    }

    pub(super) fn current_audio_path(&self) -> PathBuf {
        self.verses
            .audio_path(Path::new(&self.config.audio_dir), self.playback.current)
    }

    /// Point the audio player at the current verse's narration.
    pub(super) fn load_current_audio(&mut self) {
        let path = self.current_audio_path();
        self.audio.set_source(path);
    }

    pub(super) fn auto_advance_interval(&self) -> Duration {
        Duration::from_secs_f32(self.config.auto_advance_secs)
    }

    pub(super) fn share_url(&self) -> String {
        crate::qr::share_url(
            &self.config.share_url,
            self.config.share_include_verse,
            self.playback.current,
        )
    }

    pub(super) fn ui_theme(&self) -> crate::theme::Theme {
        self.theme.into()
    }
}

#[cfg(test)]
impl App {
    /// App over `verse_count` synthetic verses with default config.
    pub(in crate::app) fn for_tests(verse_count: usize) -> Self {
        let verses = (0..verse_count)
            .map(|i| Verse {
                surah: format!("Sourate {i}"),
                verse_number: i as u32 + 1,
                arabic: format!("آية {i}"),
                french: format!("Verset {i}"),
                audio_file: format!("{i:03}.mp3"),
            })
            .collect();
        let store = VerseStore::from_verses(verses).expect("non-empty store");
        let (app, _task) = App::bootstrap(store, AppConfig::default(), None);
        app
    }
}
