use anyhow::{Context, Result};
use qrcode::{Color, QrCode};

/// Edge length of the rendered share image.
pub const QR_IMAGE_SIZE_PX: u32 = 250;
const QUIET_ZONE_MODULES: usize = 1;
const DARK_RGBA: [u8; 4] = [0x00, 0x00, 0x00, 0xff];
const LIGHT_RGBA: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Square RGBA image of a QR code.
#[derive(Debug, Clone)]
pub struct QrImage {
    pub size: u32,
    pub rgba: Vec<u8>,
}

#[cfg(test)]
impl QrImage {
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        let offset = ((y * self.size + x) * 4) as usize;
        self.rgba[offset] == DARK_RGBA[0]
    }
}

/// Render `content` as a fixed-size black-on-white QR code.
pub fn render_qr(content: &str) -> Result<QrImage> {
    let code = QrCode::new(content.as_bytes()).context("Encoding QR payload")?;
    let modules = code.width();
    let colors = code.to_colors();
    let span = modules + QUIET_ZONE_MODULES * 2;
    let size = QR_IMAGE_SIZE_PX as usize;

    let mut rgba = Vec::with_capacity(size * size * 4);
    for py in 0..size {
        let my = py * span / size;
        for px in 0..size {
            let mx = px * span / size;
            let dark = module_at(&colors, modules, mx, my) == Color::Dark;
            rgba.extend_from_slice(if dark { &DARK_RGBA } else { &LIGHT_RGBA });
        }
    }

    Ok(QrImage {
        size: QR_IMAGE_SIZE_PX,
        rgba,
    })
}

/// Module colour in quiet-zone coordinates.
fn module_at(colors: &[Color], modules: usize, x: usize, y: usize) -> Color {
    let inside = |v: usize| (QUIET_ZONE_MODULES..QUIET_ZONE_MODULES + modules).contains(&v);
    if inside(x) && inside(y) {
        colors[(y - QUIET_ZONE_MODULES) * modules + (x - QUIET_ZONE_MODULES)]
    } else {
        Color::Light
    }
}
