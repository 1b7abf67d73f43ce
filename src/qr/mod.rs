//! QR code support: rendering the share URL and scanning payloads.

mod payload;
mod render;
mod scanner;
mod source;

pub use payload::{share_url, verse_param};
pub use render::{QR_IMAGE_SIZE_PX, render_qr};
pub use scanner::{ScanEvent, ScannerSession};
pub use source::open_frame_source;

#[cfg(test)]
pub use scanner::{LumaFrame, decode_frame};
#[cfg(test)]
pub use source::FrameSource;
