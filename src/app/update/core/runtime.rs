use super::super::super::messages::Message;
use super::super::super::state::{App, CAMERA_ERROR_MESSAGE};
use super::super::Effect;
use crate::qr::{ScannerSession, open_frame_source, render_qr};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::image::Handle;
use iced::window;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadAudio { index } => {
                let path = self
                    .verses
                    .audio_path(Path::new(&self.config.audio_dir), index);
                self.audio.set_source(path);
                Task::none()
            }
            Effect::PlayAudio => {
                // Playback failure is logged only; the playing flag stays set.
                if let Err(err) = self.audio.play() {
                    warn!("Audio playback failed: {err:#}");
                }
                Task::none()
            }
            Effect::PauseAudio => {
                self.audio.pause();
                Task::none()
            }
            Effect::SetMuted(muted) => {
                self.audio.set_muted(muted);
                Task::none()
            }
            Effect::RenderShareCode => {
                match render_qr(&self.share.url) {
                    Ok(qr) => {
                        debug!(size = qr.size, "Rendered share code");
                        self.share.image = Some(Handle::from_rgba(qr.size, qr.size, qr.rgba));
                    }
                    Err(err) => {
                        warn!("Error generating QR code: {err:#}");
                        self.share.image = None;
                    }
                }
                Task::none()
            }
            Effect::StartScanner => {
                if self.scanner.session.is_some() {
                    return Task::none();
                }
                let image_source = self.config.scanner_image_source.clone().map(PathBuf::from);
                let camera_index = self.config.camera_index;
                let interval = Duration::from_millis(self.config.frame_interval_ms);
                match ScannerSession::start(
                    move || open_frame_source(image_source, camera_index),
                    interval,
                ) {
                    Ok(session) => self.scanner.session = Some(session),
                    Err(err) => {
                        warn!("Unable to start scanner: {err:#}");
                        self.scanner.error = Some(CAMERA_ERROR_MESSAGE.to_string());
                    }
                }
                Task::none()
            }
            Effect::StopScanner => {
                if let Some(session) = self.scanner.session.take() {
                    session.stop();
                }
                Task::none()
            }
            Effect::QuitSafely => {
                info!("Shutting down");
                if let Some(session) = self.scanner.session.take() {
                    session.stop();
                }
                self.audio.stop();
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
