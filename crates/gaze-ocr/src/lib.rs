mod capture;
mod com;
mod ocr;
mod preprocess;

pub use capture::{MonitorBounds, capture_region, device_region};
pub use com::ComGuard;
pub use ocr::{language_tags, recognize_png};
pub use preprocess::{invert, should_invert};

use anyhow::{Context, Result, bail};

/// Owned pixel buffer of one capture, tightly packed rows.
///
/// Exclusively owned by the pipeline run that produced it; OCR (or its
/// inverted derivative) consumes it and the buffer is dropped with the run.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    pub channels: u8,
    pub data: Vec<u8>,
}

impl CapturedImage {
    /// Zero-size result for degenerate capture geometry.
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            channels: 4,
            data: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels: 4,
            data,
        }
    }

    /// Encode as PNG for the OCR backend.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

        let color = match self.channels {
            3 => ExtendedColorType::Rgb8,
            4 => ExtendedColorType::Rgba8,
            other => bail!("unsupported channel count: {other}"),
        };

        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(&self.data, self.width, self.height, color)
            .context("failed to encode PNG")?;
        Ok(buffer)
    }
}
