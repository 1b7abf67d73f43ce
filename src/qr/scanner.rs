//! Background QR scanning.
//!
//! A `ScannerSession` owns one worker thread that opens a frame source,
//! decodes frames at a fixed interval and reports at most one payload. Grabbed
//! frames are also forwarded, throttled, as a live preview. The UI polls the
//! session; stopping or dropping it cancels and joins the worker,
//! and the worker releases the source on every exit path.

use super::source::FrameSource;
use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace, warn};

/// Minimum spacing between preview frames sent to the UI.
const PREVIEW_INTERVAL: Duration = Duration::from_millis(200);

/// 8-bit greyscale frame, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl LumaFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Opaque RGBA copy for display, or `None` for a malformed frame.
    pub fn to_rgba(&self) -> Option<Vec<u8>> {
        if !self.is_well_formed() {
            return None;
        }
        let count = self.width as usize * self.height as usize;
        Some(
            self.pixels[..count]
                .iter()
                .flat_map(|&luma| [luma, luma, luma, 0xff])
                .collect(),
        )
    }

    fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pixels.len() >= self.width as usize * self.height as usize
    }

    fn luma(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width as usize + x]
    }
}

/// Decode the first readable QR code in `frame`. Frames without a code are
/// normal and yield `None`.
pub fn decode_frame(frame: &LumaFrame) -> Option<String> {
    if !frame.is_well_formed() {
        return None;
    }
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        frame.width as usize,
        frame.height as usize,
        |x, y| frame.luma(x, y),
    );
    prepared
        .detect_grids()
        .into_iter()
        .find_map(|grid| match grid.decode() {
            Ok((_, content)) => Some(content),
            Err(err) => {
                trace!("QR grid found but not decodable: {err}");
                None
            }
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Latest camera image, for the preview.
    Frame(LumaFrame),
    Decoded(String),
    SourceUnavailable(String),
}

pub struct ScannerSession {
    cancel: CancellationToken,
    events: Receiver<ScanEvent>,
    worker: Option<JoinHandle<()>>,
}

impl ScannerSession {
    pub fn start<F>(open: F, frame_interval: Duration) -> Result<Self>
    where
        F: FnOnce() -> Result<Box<dyn FrameSource>> + Send + 'static,
    {
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::channel();
        let worker_cancel = cancel.clone();
        let worker = thread::Builder::new()
            .name("qr-scanner".to_string())
            .spawn(move || run_scanner(open, frame_interval, worker_cancel, tx))
            .context("Spawning scanner worker")?;
        info!(
            interval_ms = frame_interval.as_millis(),
            "Scanner session started"
        );
        Ok(Self {
            cancel,
            events: rx,
            worker: Some(worker),
        })
    }

    /// Next pending event, if any. Never blocks.
    pub fn poll(&self) -> Option<ScanEvent> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.events.try_recv().ok()
    }

    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.cancel.cancel();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Scanner worker panicked");
            }
            while self.events.try_recv().is_ok() {}
            debug!("Scanner session stopped");
        }
    }
}

impl Drop for ScannerSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Releases the wrapped source when the worker exits, including by panic.
struct ReleaseOnExit(Box<dyn FrameSource>);

impl Drop for ReleaseOnExit {
    fn drop(&mut self) {
        match self.0.release() {
            Ok(()) => debug!("Scanner source released"),
            Err(err) => warn!("Error stopping scanner: {err:#}"),
        }
    }
}

fn run_scanner<F>(open: F, frame_interval: Duration, cancel: CancellationToken, tx: Sender<ScanEvent>)
where
    F: FnOnce() -> Result<Box<dyn FrameSource>>,
{
    let mut source = match open() {
        Ok(source) => ReleaseOnExit(source),
        Err(err) => {
            warn!("Unable to open scanner source: {err:#}");
            let _ = tx.send(ScanEvent::SourceUnavailable(format!("{err:#}")));
            return;
        }
    };

    let mut frames = 0u64;
    let mut last_preview: Option<Instant> = None;
    while !cancel.is_cancelled() {
        match source.0.grab() {
            Ok(frame) => {
                frames += 1;
                if let Some(content) = decode_frame(&frame) {
                    info!(frames, "Decoded QR payload");
                    if !cancel.is_cancelled() {
                        let _ = tx.send(ScanEvent::Decoded(content));
                    }
                    break;
                }
                let preview_due =
                    last_preview.is_none_or(|sent| sent.elapsed() >= PREVIEW_INTERVAL);
                if preview_due && !cancel.is_cancelled() {
                    last_preview = Some(Instant::now());
                    let _ = tx.send(ScanEvent::Frame(frame));
                }
            }
            Err(err) => trace!("Frame grab failed: {err:#}"),
        }
        if !cancel.sleep_unless_cancelled(frame_interval) {
            break;
        }
    }
    debug!(frames, "Scanner loop finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::render_qr;
    use anyhow::anyhow;
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Instant;

    const INTERVAL: Duration = Duration::from_millis(5);

    struct ScriptedSource {
        frames: VecDeque<LumaFrame>,
        grabs: Arc<AtomicUsize>,
        released: Arc<AtomicBool>,
    }

    impl FrameSource for ScriptedSource {
        fn grab(&mut self) -> Result<LumaFrame> {
            self.grabs.fetch_add(1, Ordering::SeqCst);
            Ok(self.frames.pop_front().unwrap_or_else(blank_frame))
        }

        fn release(&mut self) -> Result<()> {
            self.released.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    struct SourceCounters {
        grabs: Arc<AtomicUsize>,
        released: Arc<AtomicBool>,
    }

    fn blank_frame() -> LumaFrame {
        LumaFrame::new(64, 64, vec![255; 64 * 64])
    }

    fn qr_frame(content: &str) -> LumaFrame {
        let image = render_qr(content).unwrap();
        let luma = image.rgba.chunks_exact(4).map(|px| px[0]).collect();
        LumaFrame::new(image.size, image.size, luma)
    }

    fn start_scripted(frames: Vec<LumaFrame>) -> (ScannerSession, SourceCounters) {
        let grabs = Arc::new(AtomicUsize::new(0));
        let released = Arc::new(AtomicBool::new(false));
        let source = ScriptedSource {
            frames: frames.into(),
            grabs: Arc::clone(&grabs),
            released: Arc::clone(&released),
        };
        let session = ScannerSession::start(
            move || Ok(Box::new(source) as Box<dyn FrameSource>),
            INTERVAL,
        )
        .unwrap();
        (session, SourceCounters { grabs, released })
    }

    /// First decode or failure event, skipping preview frames.
    fn wait_for_outcome(session: &ScannerSession) -> Option<ScanEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            match session.poll() {
                Some(ScanEvent::Frame(_)) => continue,
                Some(event) => return Some(event),
                None => thread::sleep(Duration::from_millis(2)),
            }
        }
        None
    }

    fn wait_until(flag: &AtomicBool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if flag.load(Ordering::SeqCst) {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn reports_first_payload_once_and_releases_source() {
        let url = "https://x/y?verse=2";
        let (session, counters) =
            start_scripted(vec![blank_frame(), blank_frame(), qr_frame(url), qr_frame(url)]);

        assert_eq!(
            wait_for_outcome(&session),
            Some(ScanEvent::Decoded(url.to_string()))
        );
        assert!(wait_until(&counters.released));
        assert_eq!(session.poll(), None);
        assert_eq!(counters.grabs.load(Ordering::SeqCst), 3);
        session.stop();
    }

    #[test]
    fn open_failure_reports_unavailable_source() {
        let session = ScannerSession::start(
            || Err(anyhow!("permission denied")),
            INTERVAL,
        )
        .unwrap();
        match wait_for_outcome(&session) {
            Some(ScanEvent::SourceUnavailable(message)) => {
                assert!(message.contains("permission denied"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        session.stop();
    }

    #[test]
    fn stop_releases_source_and_halts_grabbing() {
        let (session, counters) = start_scripted(Vec::new());
        thread::sleep(Duration::from_millis(30));
        session.stop();

        assert!(counters.released.load(Ordering::SeqCst));
        let grabs_after_stop = counters.grabs.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(30));
        assert_eq!(counters.grabs.load(Ordering::SeqCst), grabs_after_stop);
    }

    #[test]
    fn forwards_throttled_preview_frames() {
        let (session, counters) = start_scripted(Vec::new());
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut previews = Vec::new();
        while previews.is_empty() && Instant::now() < deadline {
            if let Some(ScanEvent::Frame(frame)) = session.poll() {
                previews.push(frame);
            }
            thread::sleep(Duration::from_millis(2));
        }
        let first_at = Instant::now();
        thread::sleep(Duration::from_millis(60));
        while let Some(event) = session.poll() {
            if let ScanEvent::Frame(frame) = event {
                previews.push(frame);
            }
        }
        let elapsed = first_at.elapsed();
        session.stop();

        assert_eq!(previews.first(), Some(&blank_frame()));
        let allowed = (elapsed.as_millis() / PREVIEW_INTERVAL.as_millis()) as usize + 1;
        assert!(previews.len() <= allowed, "{} previews in {elapsed:?}", previews.len());
        assert!(counters.grabs.load(Ordering::SeqCst) > previews.len());
    }

    #[test]
    fn preview_frame_converts_to_opaque_rgba() {
        let frame = LumaFrame::new(2, 1, vec![0, 200]);
        assert_eq!(frame.to_rgba(), Some(vec![0, 0, 0, 255, 200, 200, 200, 255]));
        assert_eq!(LumaFrame::new(4, 4, vec![0; 3]).to_rgba(), None);
    }

    #[test]
    fn dropping_session_releases_source() {
        let (session, counters) = start_scripted(Vec::new());
        drop(session);
        assert!(counters.released.load(Ordering::SeqCst));
    }

    #[test]
    fn blank_and_malformed_frames_decode_to_nothing() {
        assert_eq!(decode_frame(&blank_frame()), None);
        assert_eq!(decode_frame(&LumaFrame::new(10, 10, vec![0; 3])), None);
        assert_eq!(decode_frame(&LumaFrame::new(0, 0, Vec::new())), None);
    }
}
