mod appearance;
mod core;
mod navigation;
mod playback;
mod qr;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    /// Reset the audio source to the narration of verse `index`.
    LoadAudio {
        index: usize,
    },
    PlayAudio,
    PauseAudio,
    SetMuted(bool),
    RenderShareCode,
    StartScanner,
    StopScanner,
    QuitSafely,
}
