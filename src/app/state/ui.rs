use crate::qr::ScannerSession;
use iced::widget::image::Handle;

/// Share overlay: the rendered QR code for the share URL.
#[derive(Default)]
pub struct ShareState {
    pub(in crate::app) visible: bool,
    pub(in crate::app) url: String,
    pub(in crate::app) image: Option<Handle>,
}

/// Scanner overlay and the session backing it while active.
#[derive(Default)]
pub struct ScannerState {
    pub(in crate::app) visible: bool,
    pub(in crate::app) session: Option<ScannerSession>,
    pub(in crate::app) error: Option<String>,
    /// Most recent frame from the source, shown while aiming.
    pub(in crate::app) preview: Option<Handle>,
}

impl ScannerState {
    pub(in crate::app) fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
