use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextVerse => self.handle_next_verse(&mut effects),
            Message::PreviousVerse => self.handle_previous_verse(&mut effects),
            Message::TogglePlayPause => self.handle_toggle_play_pause(&mut effects),
            Message::ToggleMute => self.handle_toggle_mute(&mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::AutoAdvance(_) => self.handle_auto_advance(&mut effects),
            Message::JumpToVerse(target) => self.handle_jump_to_verse(target, &mut effects),
            Message::ToggleShareCode => self.handle_toggle_share_code(&mut effects),
            Message::CloseShareCode => self.handle_close_share_code(),
            Message::OpenScanner => self.handle_open_scanner(&mut effects),
            Message::CloseScanner => self.handle_close_scanner(&mut effects),
            Message::PollScanner => self.handle_poll_scanner(&mut effects),
            Message::CloseOverlays => self.handle_close_overlays(&mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
            Message::SafeQuit => effects.push(Effect::QuitSafely),
        }

        effects
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            tracing::info!("Received Ctrl+C; quitting safely");
            effects.push(Effect::QuitSafely);
        }
    }

    fn handle_close_overlays(&mut self, effects: &mut Vec<Effect>) {
        if self.scanner.visible {
            self.handle_close_scanner(effects);
        }
        if self.share.visible {
            self.handle_close_share_code();
        }
    }
}
