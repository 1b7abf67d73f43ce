//! Light/dark palettes for the reader window and its overlays.

use crate::config::ThemeMode;
use iced::{Color, Theme as IcedTheme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Tint laid over the page background.
    pub fn backdrop(self) -> Color {
        match self {
            Theme::Light => Color::from_rgba(1.0, 1.0, 1.0, 0.3),
            Theme::Dark => Color::from_rgba(0.0, 0.0, 0.0, 0.7),
        }
    }

    /// Dim layer behind modal overlays.
    pub fn scrim(self) -> Color {
        Color::from_rgba(0.0, 0.0, 0.0, 0.8)
    }

    pub fn error_text(self) -> Color {
        match self {
            Theme::Light => Color::from_rgb(0.8, 0.1, 0.1),
            Theme::Dark => Color::from_rgb(1.0, 0.45, 0.45),
        }
    }
}

impl From<ThemeMode> for Theme {
    fn from(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Night => Theme::Dark,
            ThemeMode::Day => Theme::Light,
        }
    }
}

impl From<Theme> for IcedTheme {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => IcedTheme::Light,
            Theme::Dark => IcedTheme::Dark,
        }
    }
}
