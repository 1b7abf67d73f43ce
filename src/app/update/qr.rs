use super::super::state::{App, CAMERA_ERROR_MESSAGE};
use super::Effect;
use crate::qr::{ScanEvent, verse_param};
use iced::widget::image::Handle;
use tracing::{debug, info, trace, warn};

impl App {
    pub(super) fn handle_toggle_share_code(&mut self, effects: &mut Vec<Effect>) {
        if self.share.visible {
            self.handle_close_share_code();
            return;
        }
        if self.scanner.visible {
            self.handle_close_scanner(effects);
        }
        self.share.url = self.share_url();
        self.share.visible = true;
        debug!(url = %self.share.url, "Showing share code");
        effects.push(Effect::RenderShareCode);
    }

    pub(super) fn handle_close_share_code(&mut self) {
        self.share.visible = false;
    }

    pub(super) fn handle_open_scanner(&mut self, effects: &mut Vec<Effect>) {
        if self.scanner.is_active() {
            return;
        }
        if self.share.visible {
            self.handle_close_share_code();
        }
        self.scanner.visible = true;
        self.scanner.error = None;
        self.scanner.preview = None;
        info!("Opening QR scanner");
        effects.push(Effect::StartScanner);
    }

    pub(super) fn handle_close_scanner(&mut self, effects: &mut Vec<Effect>) {
        self.scanner.visible = false;
        self.scanner.error = None;
        self.scanner.preview = None;
        effects.push(Effect::StopScanner);
    }

    pub(super) fn handle_poll_scanner(&mut self, effects: &mut Vec<Effect>) {
        let Some(session) = self.scanner.session.as_ref() else {
            return;
        };
        let events: Vec<ScanEvent> = std::iter::from_fn(|| session.poll()).collect();

        for event in events {
            match event {
                ScanEvent::Frame(frame) => match frame.to_rgba() {
                    Some(rgba) => {
                        self.scanner.preview =
                            Some(Handle::from_rgba(frame.width(), frame.height(), rgba));
                    }
                    None => trace!("Skipping malformed preview frame"),
                },
                ScanEvent::Decoded(content) => {
                    self.handle_qr_result(&content, effects);
                    break;
                }
                ScanEvent::SourceUnavailable(reason) => {
                    warn!(%reason, "Scanner source unavailable");
                    self.scanner.error = Some(CAMERA_ERROR_MESSAGE.to_string());
                    self.scanner.preview = None;
                    effects.push(Effect::StopScanner);
                    break;
                }
            }
        }
    }

    /// A decoded payload always closes the scanner; only a valid in-range
    /// `verse=` parameter moves the reader.
    pub(super) fn handle_qr_result(&mut self, content: &str, effects: &mut Vec<Effect>) {
        info!(%content, "QR code scanned");
        self.scanner.visible = false;
        self.scanner.preview = None;
        effects.push(Effect::StopScanner);
        match verse_param(content) {
            Some(target) => self.handle_jump_to_verse(target, effects),
            None => debug!("Scanned payload carries no verse parameter"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::qr::{FrameSource, LumaFrame, ScannerSession, open_frame_source, render_qr};
    use anyhow::{Result, anyhow};
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::{Duration, Instant};

    /// Blank frames until `show_code` is set, then a QR code of `payload`.
    struct AimedSource {
        payload: String,
        show_code: Arc<AtomicBool>,
    }

    impl FrameSource for AimedSource {
        fn grab(&mut self) -> Result<LumaFrame> {
            if !self.show_code.load(Ordering::SeqCst) {
                return Ok(LumaFrame::new(32, 32, vec![255; 32 * 32]));
            }
            let qr = render_qr(&self.payload)?;
            let luma = qr.rgba.chunks_exact(4).map(|px| px[0]).collect();
            Ok(LumaFrame::new(qr.size, qr.size, luma))
        }

        fn release(&mut self) -> Result<()> {
            Ok(())
        }
    }

    fn poll_until_settled(app: &mut App) -> Vec<Effect> {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let effects = app.reduce(Message::PollScanner);
            if !effects.is_empty() || Instant::now() > deadline {
                return effects;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    fn write_qr_png(content: &str, tag: &str) -> PathBuf {
        let qr = render_qr(content).expect("render");
        let luma: Vec<u8> = qr.rgba.chunks_exact(4).map(|px| px[0]).collect();
        let img = image::GrayImage::from_raw(qr.size, qr.size, luma).expect("buffer");
        let path = std::env::temp_dir().join(format!(
            "ayati-link-scan-{tag}-{}.png",
            std::process::id()
        ));
        img.save(&path).expect("write png");
        path
    }

    #[test]
    fn scanned_verse_url_jumps_and_closes_scanner() {
        let mut app = App::for_tests(3);
        app.scanner.visible = true;
        let mut effects = Vec::new();

        app.handle_qr_result("https://x/y?verse=2", &mut effects);

        assert!(!app.scanner.visible);
        assert_eq!(app.playback.current, 2);
        assert_eq!(
            effects,
            vec![Effect::StopScanner, Effect::LoadAudio { index: 2 }]
        );
    }

    #[test]
    fn out_of_range_or_missing_verse_only_closes() {
        let mut app = App::for_tests(1);
        app.scanner.visible = true;
        let mut effects = Vec::new();
        app.handle_qr_result("https://x/y?verse=2", &mut effects);
        assert_eq!(app.playback.current, 0);
        assert_eq!(effects, vec![Effect::StopScanner]);

        let mut app = App::for_tests(3);
        let mut effects = Vec::new();
        app.handle_qr_result("hello", &mut effects);
        assert_eq!(app.playback.current, 0);
        assert_eq!(effects, vec![Effect::StopScanner]);
    }

    #[test]
    fn opening_scanner_hides_share_and_starts_once() {
        let mut app = App::for_tests(2);
        app.reduce(Message::ToggleShareCode);
        assert!(app.share.visible);

        let effects = app.reduce(Message::OpenScanner);

        assert!(!app.share.visible);
        assert!(app.scanner.visible);
        assert_eq!(effects, vec![Effect::StartScanner]);
    }

    #[test]
    fn closing_scanner_stops_session() {
        let mut app = App::for_tests(2);
        app.reduce(Message::OpenScanner);

        let effects = app.reduce(Message::CloseScanner);

        assert!(!app.scanner.visible);
        assert_eq!(effects, vec![Effect::StopScanner]);
    }

    #[test]
    fn share_toggle_builds_url_for_current_verse() {
        let mut app = App::for_tests(3);
        app.config.share_url = "https://example.org/app".to_string();
        app.config.share_include_verse = true;
        app.playback.current = 1;

        let effects = app.reduce(Message::ToggleShareCode);
        assert!(app.share.visible);
        assert_eq!(app.share.url, "https://example.org/app?verse=1");
        assert_eq!(effects, vec![Effect::RenderShareCode]);

        assert!(app.reduce(Message::ToggleShareCode).is_empty());
        assert!(!app.share.visible);
    }

    #[test]
    fn escape_closes_every_overlay() {
        let mut app = App::for_tests(2);
        app.reduce(Message::OpenScanner);

        let effects = app.reduce(Message::CloseOverlays);

        assert!(!app.scanner.visible);
        assert!(!app.share.visible);
        assert_eq!(effects, vec![Effect::StopScanner]);
    }

    #[test]
    fn unavailable_source_shows_camera_error() {
        let mut app = App::for_tests(2);
        app.scanner.visible = true;
        app.scanner.session = Some(
            ScannerSession::start(
                || Err(anyhow!("no device")),
                Duration::from_millis(5),
            )
            .expect("start"),
        );

        let effects = poll_until_settled(&mut app);

        assert_eq!(effects, vec![Effect::StopScanner]);
        assert_eq!(app.scanner.error.as_deref(), Some(CAMERA_ERROR_MESSAGE));
        assert!(app.scanner.visible);
    }

    #[test]
    fn scanning_image_file_navigates() {
        let path = write_qr_png("https://ayati-link.vercel.app/?verse=1", "nav");
        let mut app = App::for_tests(3);
        app.scanner.visible = true;
        let source = path.clone();
        app.scanner.session = Some(
            ScannerSession::start(
                move || open_frame_source(Some(source), 0),
                Duration::from_millis(5),
            )
            .expect("start"),
        );

        let effects = poll_until_settled(&mut app);
        let _ = std::fs::remove_file(&path);

        assert_eq!(app.playback.current, 1);
        assert!(!app.scanner.visible);
        assert_eq!(
            effects,
            vec![Effect::StopScanner, Effect::LoadAudio { index: 1 }]
        );
    }

    #[test]
    fn hex_verse_payload_jumps_to_decoded_value() {
        let mut app = App::for_tests(3);
        app.scanner.visible = true;
        let mut effects = Vec::new();

        app.handle_qr_result("https://x/y?verse=0x2", &mut effects);

        assert_eq!(app.playback.current, 2);
        assert_eq!(
            effects,
            vec![Effect::StopScanner, Effect::LoadAudio { index: 2 }]
        );
    }

    #[test]
    fn preview_frames_show_until_a_code_is_decoded() {
        let show_code = Arc::new(AtomicBool::new(false));
        let source = AimedSource {
            payload: "https://x/y?verse=1".to_string(),
            show_code: Arc::clone(&show_code),
        };
        let mut app = App::for_tests(3);
        app.scanner.visible = true;
        app.scanner.session = Some(
            ScannerSession::start(
                move || Ok(Box::new(source) as Box<dyn FrameSource>),
                Duration::from_millis(5),
            )
            .expect("start"),
        );

        let deadline = Instant::now() + Duration::from_secs(5);
        while app.scanner.preview.is_none() && Instant::now() < deadline {
            assert!(app.reduce(Message::PollScanner).is_empty());
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(app.scanner.preview.is_some());
        assert!(app.scanner.visible);

        show_code.store(true, Ordering::SeqCst);
        let effects = poll_until_settled(&mut app);

        assert!(!app.scanner.visible);
        assert!(app.scanner.preview.is_none());
        assert_eq!(app.playback.current, 1);
        assert_eq!(
            effects,
            vec![Effect::StopScanner, Effect::LoadAudio { index: 1 }]
        );
    }
}
