use super::super::state::{App, checked_target};
use super::Effect;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_next_verse(&mut self, effects: &mut Vec<Effect>) {
        let next = self.playback.next_index(self.verse_count());
        self.go_to_verse(next, effects);
    }

    pub(super) fn handle_previous_verse(&mut self, effects: &mut Vec<Effect>) {
        let previous = self.playback.previous_index(self.verse_count());
        self.go_to_verse(previous, effects);
    }

    pub(super) fn handle_jump_to_verse(&mut self, target: i64, effects: &mut Vec<Effect>) {
        match checked_target(target, self.verse_count()) {
            Some(index) => {
                info!(index, "Jumping to verse");
                self.go_to_verse(index, effects);
            }
            None => debug!(target, verses = self.verse_count(), "Ignoring jump target"),
        }
    }

    /// Single index-update path: every verse change resets the audio source
    /// and, while playing, starts the new narration right away.
    pub(super) fn go_to_verse(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if index >= self.verse_count() || index == self.playback.current {
            return;
        }
        self.playback.current = index;
        debug!(
            verse = index,
            playing = self.playback.playing,
            "Navigated to verse"
        );
        effects.push(Effect::LoadAudio { index });
        if self.playback.playing {
            effects.push(Effect::PlayAudio);
        }
    }
}
