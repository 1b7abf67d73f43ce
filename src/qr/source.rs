//! Frame sources for the scanner: a camera (behind the `camera` feature) or a
//! still image on disk.

use super::scanner::LumaFrame;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Something the scanner can pull greyscale frames from.
pub trait FrameSource {
    fn grab(&mut self) -> Result<LumaFrame>;

    /// Release the underlying device. Called once when the scan loop exits.
    fn release(&mut self) -> Result<()>;
}

/// Open the configured source: an image file when one is set, otherwise the
/// camera at `camera_index`.
pub fn open_frame_source(
    image_source: Option<PathBuf>,
    camera_index: u32,
) -> Result<Box<dyn FrameSource>> {
    if let Some(path) = image_source {
        return Ok(Box::new(StillImageSource::open(path)?));
    }
    open_camera(camera_index)
}

#[cfg(feature = "camera")]
fn open_camera(camera_index: u32) -> Result<Box<dyn FrameSource>> {
    Ok(Box::new(camera::CameraSource::open(camera_index)?))
}

#[cfg(not(feature = "camera"))]
fn open_camera(camera_index: u32) -> Result<Box<dyn FrameSource>> {
    anyhow::bail!(
        "camera {camera_index} unavailable: built without the `camera` feature and no scanner.image_source configured"
    )
}

/// Re-reads one image file on every grab so an external capture tool can
/// keep replacing it.
struct StillImageSource {
    path: PathBuf,
}

impl StillImageSource {
    fn open(path: PathBuf) -> Result<Self> {
        read_luma(&path)?;
        info!(path = %path.display(), "Scanning from image file");
        Ok(Self { path })
    }
}

impl FrameSource for StillImageSource {
    fn grab(&mut self) -> Result<LumaFrame> {
        read_luma(&self.path)
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}

fn read_luma(path: &Path) -> Result<LumaFrame> {
    let image = image::open(path)
        .with_context(|| format!("Reading scan image {}", path.display()))?
        .to_luma8();
    let (width, height) = image.dimensions();
    Ok(LumaFrame::new(width, height, image.into_raw()))
}

#[cfg(feature = "camera")]
mod camera {
    use super::{FrameSource, LumaFrame};
    use anyhow::{Context, Result};
    use nokhwa::Camera;
    use nokhwa::pixel_format::LumaFormat;
    use nokhwa::utils::{CameraIndex, RequestedFormat, RequestedFormatType};
    use tracing::info;

    pub(super) struct CameraSource {
        camera: Camera,
    }

    impl CameraSource {
        pub(super) fn open(index: u32) -> Result<Self> {
            let requested =
                RequestedFormat::new::<LumaFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
            let mut camera =
                Camera::new(CameraIndex::Index(index), requested).context("Opening camera")?;
            camera.open_stream().context("Starting camera stream")?;
            info!(index, "Camera stream opened");
            Ok(Self { camera })
        }
    }

    impl FrameSource for CameraSource {
        fn grab(&mut self) -> Result<LumaFrame> {
            let buffer = self.camera.frame().context("Capturing frame")?;
            let image = buffer
                .decode_image::<LumaFormat>()
                .context("Decoding camera frame")?;
            let (width, height) = image.dimensions();
            Ok(LumaFrame::new(width, height, image.into_raw()))
        }

        fn release(&mut self) -> Result<()> {
            if self.camera.is_stream_open() {
                self.camera.stop_stream().context("Stopping camera stream")?;
            }
            Ok(())
        }
    }
}
