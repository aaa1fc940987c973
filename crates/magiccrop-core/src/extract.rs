//! Region extraction and the smart-crop pipeline.
//!
//! Extraction is the single pixel-space crop primitive: both the manual
//! crop confirm path and smart crop funnel their rectangles through
//! [`extract_region`], so the two features cannot drift apart.

use thiserror::Error;

use crate::bounds::{scan_image, ScanError, ScanOutcome};
use crate::decode::{DecodedImage, CHANNELS};
use crate::geometry::PixelRect;

/// Errors for region extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The rectangle is zero-area or extends past the image bounds.
    #[error("Invalid crop region: {x},{y} {width}x{height} in {image_width}x{image_height} image")]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },
}

/// Result of a smart-crop attempt.
#[derive(Debug, Clone)]
pub enum SmartCrop {
    /// Content was found and trimmed; here is the cropped image.
    Cropped(DecodedImage),
    /// Nothing to trim; the caller returns the original bytes unchanged.
    Unchanged,
}

/// Extract a sub-rectangle from an image.
///
/// The rectangle is in natural pixel space. Rows are copied as whole
/// slices, so this is a straight memcpy per output row.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidRegion`] for a zero-area rectangle or one
/// that extends past the image bounds. Callers converting from displayed
/// space must do so through `DisplayRect::to_pixel_rect` before calling.
pub fn extract_region(
    image: &DecodedImage,
    rect: &PixelRect,
) -> Result<DecodedImage, ExtractError> {
    if rect.is_empty() || !rect.fits_within(image.width, image.height) {
        return Err(ExtractError::InvalidRegion {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            image_width: image.width,
            image_height: image.height,
        });
    }

    let row_bytes = rect.width as usize * CHANNELS;
    let src_stride = image.width as usize * CHANNELS;
    let mut output = Vec::with_capacity(rect.height as usize * row_bytes);

    for y in 0..rect.height {
        let src_y = (rect.y + y) as usize;
        let src_start = src_y * src_stride + rect.x as usize * CHANNELS;
        output.extend_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    Ok(DecodedImage::new(rect.width, rect.height, output))
}

/// Trim the transparent border around an image's content.
///
/// Composes the content-bounds scanner with [`extract_region`]. When the
/// scanner reports no content or a crop that is not worthwhile, the result
/// is [`SmartCrop::Unchanged`] and the original image must be passed
/// through untouched, never an empty or repackaged copy.
///
/// # Errors
///
/// Propagates [`ScanError`] for malformed buffers.
pub fn smart_crop(image: &DecodedImage, padding: u32) -> Result<SmartCrop, ScanError> {
    match scan_image(image, padding)? {
        // The scanner only emits in-bounds, non-empty rects, so extraction
        // succeeds; a failure would mean nothing to trim.
        ScanOutcome::Crop(rect) => match extract_region(image, &rect) {
            Ok(cropped) => Ok(SmartCrop::Cropped(cropped)),
            Err(_) => Ok(SmartCrop::Unchanged),
        },
        ScanOutcome::NoContent | ScanOutcome::NotWorthCropping => Ok(SmartCrop::Unchanged),
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
