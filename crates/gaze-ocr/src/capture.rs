use anyhow::{Context, Result};
use gaze_types::{CaptureRegion, Rect};
use xcap::Monitor;

use crate::CapturedImage;

/// Device-pixel bounds of one monitor.
#[derive(Debug, Clone, Copy)]
pub struct MonitorBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Convert a logical rectangle to a device-pixel region clipped to the
/// monitor. `None` means nothing is left to capture.
pub fn device_region(rect: Rect, scale: f64, bounds: MonitorBounds) -> Option<CaptureRegion> {
    if scale <= 0.0 {
        return None;
    }

    let left = (rect.x * scale).round() as i64;
    let top = (rect.y * scale).round() as i64;
    let right = ((rect.x + rect.width) * scale).round() as i64;
    let bottom = ((rect.y + rect.height) * scale).round() as i64;

    let left = left.max(bounds.x as i64);
    let top = top.max(bounds.y as i64);
    let right = right.min(bounds.x as i64 + bounds.width as i64);
    let bottom = bottom.min(bounds.y as i64 + bounds.height as i64);

    if right <= left || bottom <= top {
        return None;
    }

    Some(CaptureRegion {
        x: left as i32,
        y: top as i32,
        width: (right - left) as u32,
        height: (bottom - top) as u32,
    })
}

fn bounds_of(monitor: &Monitor) -> MonitorBounds {
    MonitorBounds {
        x: monitor.x(),
        y: monitor.y(),
        width: monitor.width(),
        height: monitor.height(),
    }
}

fn contains_center(monitor: &Monitor, rect: Rect) -> bool {
    let scale = monitor.scale_factor() as f64;
    let cx = ((rect.x + rect.width / 2.0) * scale).round() as i32;
    let cy = ((rect.y + rect.height / 2.0) * scale).round() as i32;
    cx >= monitor.x()
        && cx < monitor.x() + monitor.width() as i32
        && cy >= monitor.y()
        && cy < monitor.y() + monitor.height() as i32
}

/// Capture a logical rectangle from the monitor that hosts it.
///
/// The rectangle is scaled to device pixels with that monitor's scale
/// factor before any pixels are read. Degenerate geometry yields an empty
/// image so callers can short-circuit. No display resource outlives the
/// call.
pub fn capture_region(rect: Rect) -> Result<CapturedImage> {
    let monitors = Monitor::all().context("Failed to get monitors")?;

    let monitor = monitors
        .iter()
        .find(|m| contains_center(m, rect))
        .or(monitors.first())
        .context("No monitor found")?;

    let Some(region) = device_region(rect, monitor.scale_factor() as f64, bounds_of(monitor))
    else {
        return Ok(CapturedImage::empty());
    };

    let image = monitor.capture_image().context("Failed to capture screen")?;

    let cropped = xcap::image::imageops::crop_imm(
        &image,
        (region.x - monitor.x()) as u32,
        (region.y - monitor.y()) as u32,
        region.width,
        region.height,
    )
    .to_image();

    Ok(CapturedImage::from_rgba(
        cropped.width(),
        cropped.height(),
        cropped.into_raw(),
    ))
}
