use super::super::state::App;
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_play_pause(&mut self, effects: &mut Vec<Effect>) {
        self.playback.playing = !self.playback.playing;
        if self.playback.playing {
            info!(
                verse = self.playback.current,
                interval_secs = self.config.auto_advance_secs,
                "Starting playback and auto-advance"
            );
            effects.push(Effect::PlayAudio);
        } else {
            info!(verse = self.playback.current, "Pausing playback");
            effects.push(Effect::PauseAudio);
        }
    }

    pub(super) fn handle_toggle_mute(&mut self, effects: &mut Vec<Effect>) {
        self.playback.muted = !self.playback.muted;
        debug!(muted = self.playback.muted, "Toggled mute");
        effects.push(Effect::SetMuted(self.playback.muted));
    }

    pub(super) fn handle_auto_advance(&mut self, effects: &mut Vec<Effect>) {
        // A tick can still be queued right after pausing.
        if !self.playback.playing {
            return;
        }
        debug!(verse = self.playback.current, "Auto-advance tick");
        self.handle_next_verse(effects);
    }
}
