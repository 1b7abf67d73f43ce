use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    NextVerse,
    PreviousVerse,
    TogglePlayPause,
    ToggleMute,
    ToggleTheme,
    AutoAdvance(Instant),
    JumpToVerse(i64),
    ToggleShareCode,
    CloseShareCode,
    OpenScanner,
    CloseScanner,
    PollScanner,
    CloseOverlays,
    KeyPressed { key: Key, modifiers: Modifiers },
    PollSystemSignals,
    SafeQuit,
}
