//! Content-bounds scanning for smart crop.
//!
//! Smart crop trims the transparent border a background removal pass leaves
//! behind. The scanner walks the full RGBA buffer once, finds the tight
//! bounding box of every pixel with non-zero alpha, pads it, and then
//! decides whether emitting a crop is worthwhile at all.
//!
//! "No content" and "not worth cropping" are normal outcomes, not errors:
//! both mean the caller passes the original image through unchanged.

use thiserror::Error;

use crate::decode::{DecodedImage, CHANNELS};
use crate::geometry::PixelRect;

/// Default padding added around the detected content, in pixels.
pub const DEFAULT_PADDING: u32 = 10;

/// Minimum width/height of an emitted crop. Anything at or below this is a
/// degenerate sliver not worth returning.
pub const MIN_CROP_DIMENSION: u32 = 10;

/// Errors for malformed scanner input.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Width or height is zero, or the buffer length disagrees with them.
    #[error("Invalid dimensions: {width}x{height} with {buffer_len} bytes")]
    InvalidDimensions {
        width: u32,
        height: u32,
        buffer_len: usize,
    },

    /// The buffer is not 4-channel RGBA.
    #[error("Unsupported pixel format: expected 4 channels, got {0}")]
    UnsupportedFormat(usize),
}

/// Result of a content-bounds scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Content found and a crop to this rectangle is worthwhile.
    Crop(PixelRect),
    /// Every pixel is fully transparent; return the original unchanged.
    NoContent,
    /// Content found, but the padded box is a degenerate sliver or covers
    /// the whole image; return the original unchanged.
    NotWorthCropping,
}

impl ScanOutcome {
    /// The crop rectangle, if one was emitted.
    pub fn rect(&self) -> Option<PixelRect> {
        match self {
            ScanOutcome::Crop(rect) => Some(*rect),
            _ => None,
        }
    }
}

/// Scan an RGBA buffer for the padded bounding box of non-transparent
/// content.
///
/// The scan visits every pixel in row-major order; there is no early exit,
/// since content can sit anywhere in the buffer. A pixel counts as content
/// when its alpha byte is greater than zero.
///
/// After the scan the box is expanded by `padding` on all sides, clamped to
/// the image bounds, and the worth-cropping policy is applied: the crop must
/// be strictly larger than [`MIN_CROP_DIMENSION`] in both axes and strictly
/// smaller than the image in at least one.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data, row-major, no row padding
/// * `width` / `height` - Buffer dimensions in pixels
/// * `channels` - Bytes per pixel; must be 4
/// * `padding` - Pixels of margin to keep around the content
///
/// # Errors
///
/// Returns [`ScanError::InvalidDimensions`] if `width`/`height` is zero or
/// `pixels.len() != width * height * channels`, and
/// [`ScanError::UnsupportedFormat`] for non-RGBA input.
pub fn scan_content_bounds(
    pixels: &[u8],
    width: u32,
    height: u32,
    channels: usize,
    padding: u32,
) -> Result<ScanOutcome, ScanError> {
    if channels != CHANNELS {
        return Err(ScanError::UnsupportedFormat(channels));
    }
    let expected_len = (width as usize) * (height as usize) * channels;
    if width == 0 || height == 0 || pixels.len() != expected_len {
        return Err(ScanError::InvalidDimensions {
            width,
            height,
            buffer_len: pixels.len(),
        });
    }

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;

    let mut idx = 3; // First alpha byte
    for y in 0..height {
        for x in 0..width {
            if pixels[idx] > 0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
            idx += CHANNELS;
        }
    }

    // A single content pixel leaves min == max, which is still content.
    // Only a scan that never updated the extremes means a blank image.
    if min_x > max_x || min_y > max_y {
        return Ok(ScanOutcome::NoContent);
    }

    // Pad on all sides, clamped to the image
    let min_x = min_x.saturating_sub(padding);
    let min_y = min_y.saturating_sub(padding);
    let max_x = (max_x + padding).min(width - 1);
    let max_y = (max_y + padding).min(height - 1);

    let crop_width = max_x - min_x + 1;
    let crop_height = max_y - min_y + 1;

    // Worth-cropping policy: no degenerate slivers, no full-frame no-ops
    if crop_width > MIN_CROP_DIMENSION
        && crop_height > MIN_CROP_DIMENSION
        && (crop_width < width || crop_height < height)
    {
        Ok(ScanOutcome::Crop(PixelRect::new(
            min_x,
            min_y,
            crop_width,
            crop_height,
        )))
    } else {
        Ok(ScanOutcome::NotWorthCropping)
    }
}

/// Scan a decoded image with the given padding.
pub fn scan_image(image: &DecodedImage, padding: u32) -> Result<ScanOutcome, ScanError> {
    scan_content_bounds(&image.pixels, image.width, image.height, CHANNELS, padding)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::extract::extract_region;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (30u32..=100, 30u32..=100)
    }

    /// A transparent canvas with an opaque axis-aligned block of content.
    fn image_with_block(
        width: u32,
        height: u32,
        block: PixelRect,
    ) -> DecodedImage {
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        for y in block.y..block.bottom().min(height) {
            for x in block.x..block.right().min(width) {
                let idx = ((y * width + x) * 4) as usize;
                pixels[idx..idx + 4].copy_from_slice(&[255, 255, 255, 255]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    proptest! {
        /// Property: Any emitted crop lies within the image bounds.
        #[test]
        fn prop_crop_within_bounds(
            (width, height) in dimensions_strategy(),
            bx in 0u32..=20, by in 0u32..=20,
            bw in 1u32..=20, bh in 1u32..=20,
            padding in 0u32..=15,
        ) {
            let img = image_with_block(width, height, PixelRect::new(bx, by, bw, bh));
            let outcome = scan_image(&img, padding).unwrap();

            if let ScanOutcome::Crop(rect) = outcome {
                prop_assert!(rect.fits_within(width, height));
                prop_assert!(!rect.is_empty());
            }
        }

        /// Property: The emitted crop always contains the content block.
        #[test]
        fn prop_crop_contains_content(
            (width, height) in dimensions_strategy(),
            bx in 5u32..=15, by in 5u32..=15,
            bw in 5u32..=15, bh in 5u32..=15,
            padding in 0u32..=10,
        ) {
            let img = image_with_block(width, height, PixelRect::new(bx, by, bw, bh));
            let outcome = scan_image(&img, padding).unwrap();

            if let ScanOutcome::Crop(rect) = outcome {
                prop_assert!(rect.x <= bx);
                prop_assert!(rect.y <= by);
                prop_assert!(rect.right() >= (bx + bw).min(width));
                prop_assert!(rect.bottom() >= (by + bh).min(height));
            }
        }

        /// Property: Re-scanning the scanner's own output emits no further
        /// crop; one application is a fixed point up to padding.
        #[test]
        fn prop_scan_is_idempotent(
            (width, height) in (60u32..=100, 60u32..=100),
            bx in 20u32..=30, by in 20u32..=30,
            bw in 12u32..=20, bh in 12u32..=20,
            padding in 0u32..=10,
        ) {
            let img = image_with_block(width, height, PixelRect::new(bx, by, bw, bh));

            if let ScanOutcome::Crop(rect) = scan_image(&img, padding).unwrap() {
                let cropped = extract_region(&img, &rect).unwrap();
                let second = scan_image(&cropped, padding).unwrap();
                // Padding already consumed any margin; either the whole
                // cropped frame is content-box or there is nothing to gain.
                prop_assert!(matches!(second, ScanOutcome::NotWorthCropping));
            }
        }

        /// Property: A fully opaque image never reports NoContent.
        #[test]
        fn prop_opaque_never_no_content(
            (width, height) in dimensions_strategy(),
            padding in 0u32..=20,
        ) {
            let pixels = vec![255u8; (width * height * 4) as usize];
            let outcome = scan_content_bounds(&pixels, width, height, 4, padding).unwrap();
            prop_assert_eq!(outcome, ScanOutcome::NotWorthCropping);
        }

        /// Property: Scanning is deterministic.
        #[test]
        fn prop_scan_deterministic(
            (width, height) in dimensions_strategy(),
            bx in 0u32..=20, by in 0u32..=20,
            bw in 1u32..=20, bh in 1u32..=20,
        ) {
            let img = image_with_block(width, height, PixelRect::new(bx, by, bw, bh));
            let a = scan_image(&img, DEFAULT_PADDING).unwrap();
            let b = scan_image(&img, DEFAULT_PADDING).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
