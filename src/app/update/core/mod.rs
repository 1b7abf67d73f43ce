mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::{App, SCANNER_POLL_INTERVAL, SIGNAL_POLL_INTERVAL};
use iced::event;
use iced::time;
use iced::{Subscription, Task};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(SIGNAL_POLL_INTERVAL).map(|_| Message::PollSystemSignals),
        ];

        if app.auto_advance_active() {
            subscriptions.push(time::every(app.auto_advance_interval()).map(Message::AutoAdvance));
        }
        if app.scanner.is_active() {
            subscriptions.push(time::every(SCANNER_POLL_INTERVAL).map(|_| Message::PollScanner));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    /// The auto-advance timer runs exactly while playing.
    pub(in crate::app) fn auto_advance_active(&self) -> bool {
        self.playback.playing
    }
}
