//! Polarity heuristics for captured text regions.
//!
//! Most OCR backends do poorly on light text over a dark background, so a
//! capture that samples darker than mid-gray is inverted before recognition.

use crate::CapturedImage;

/// Mean sampled brightness below this means dark-background text.
const BRIGHTNESS_THRESHOLD: f64 = 128.0;

/// Captures smaller than this carry too little signal to judge polarity.
const MIN_DIMENSION: u32 = 10;

/// Decide polarity from a coarse sampling grid rather than every pixel, so
/// the cost stays bounded on large captures.
pub fn should_invert(image: &CapturedImage) -> bool {
    if image.width < MIN_DIMENSION || image.height < MIN_DIMENSION || image.channels < 3 {
        return false;
    }

    let step = (image.width.min(image.height) / 20).max(1) as usize;
    let bpp = image.channels as usize;
    let row_len = image.width as usize * bpp;

    let mut total: u64 = 0;
    let mut samples: u64 = 0;
    for y in (0..image.height as usize).step_by(step) {
        for x in (0..image.width as usize).step_by(step) {
            let i = y * row_len + x * bpp;
            total += image.data[i] as u64 + image.data[i + 1] as u64 + image.data[i + 2] as u64;
            samples += 1;
        }
    }

    if samples == 0 {
        return false;
    }

    total as f64 / (samples as f64 * 3.0) < BRIGHTNESS_THRESHOLD
}

/// Invert the color channels of every pixel; the alpha channel, if present,
/// is left alone. Buffers with fewer than three channels come back
/// unchanged.
pub fn invert(image: &CapturedImage) -> CapturedImage {
    if image.channels < 3 {
        return image.clone();
    }

    let bpp = image.channels as usize;
    let mut data = image.data.clone();
    for pixel in data.chunks_exact_mut(bpp) {
        pixel[0] = 255 - pixel[0];
        pixel[1] = 255 - pixel[1];
        pixel[2] = 255 - pixel[2];
    }

    CapturedImage {
        width: image.width,
        height: image.height,
        channels: image.channels,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> CapturedImage {
        let data = rgba
            .iter()
            .copied()
            .cycle()
            .take((width * height * 4) as usize)
            .collect();
        CapturedImage {
            width,
            height,
            channels: 4,
            data,
        }
    }

    #[test]
    fn all_white_is_not_inverted() {
        assert!(!should_invert(&solid(64, 64, [255, 255, 255, 255])));
    }

    #[test]
    fn all_black_is_inverted() {
        assert!(should_invert(&solid(64, 64, [0, 0, 0, 255])));
    }

    #[test]
    fn tiny_images_are_never_inverted() {
        assert!(!should_invert(&solid(9, 64, [0, 0, 0, 255])));
        assert!(!should_invert(&solid(64, 9, [0, 0, 0, 255])));
    }

    #[test]
    fn mid_gray_sits_on_the_light_side() {
        assert!(!should_invert(&solid(32, 32, [128, 128, 128, 255])));
        assert!(should_invert(&solid(32, 32, [127, 127, 127, 255])));
    }

    #[test]
    fn inversion_is_an_involution() {
        let image = CapturedImage {
            width: 3,
            height: 2,
            channels: 3,
            data: vec![
                0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 250, 251, 252,
            ],
        };
        let twice = invert(&invert(&image));
        assert_eq!(twice.data, image.data);
    }

    #[test]
    fn inversion_leaves_alpha_untouched() {
        let image = solid(4, 4, [10, 20, 30, 200]);
        let inverted = invert(&image);
        for pixel in inverted.data.chunks_exact(4) {
            assert_eq!(pixel, &[245, 235, 225, 200][..]);
        }
    }

    #[test]
    fn fewer_than_three_channels_is_a_no_op() {
        let gray = CapturedImage {
            width: 16,
            height: 16,
            channels: 1,
            data: vec![7; 256],
        };
        assert!(!should_invert(&gray));
        assert_eq!(invert(&gray).data, gray.data);
    }

    #[test]
    fn sampling_grid_covers_uneven_images() {
        // 100x40 -> step 2; dark half dominates the mean.
        let mut data = vec![0u8; 100 * 40 * 4];
        for pixel in data.chunks_exact_mut(4).take(100 * 10) {
            pixel.copy_from_slice(&[255, 255, 255, 255]);
        }
        let image = CapturedImage {
            width: 100,
            height: 40,
            channels: 4,
            data,
        };
        assert!(should_invert(&image));
    }
}
