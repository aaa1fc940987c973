//! Alpha-mask application and background compositing.
//!
//! Background removal itself runs in an external segmentation model; what
//! comes back is a single-channel mask the size of the image. This module
//! owns the two pixel operations around it: stamping the mask into the
//! image's alpha channel, and flattening a transparent image onto a solid
//! background color.

use thiserror::Error;

use crate::decode::{DecodedImage, CHANNELS};

/// Mask values above this become fully opaque; everything else becomes
/// fully transparent. The segmentation output is noisy near edges, and a
/// hard threshold avoids translucent fringes in the export.
pub const MASK_THRESHOLD: u8 = 128;

/// Errors for mask application.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaskError {
    /// The mask length doesn't match the image's pixel count.
    #[error("Mask size mismatch: image has {pixel_count} pixels, mask has {mask_len} values")]
    SizeMismatch { pixel_count: usize, mask_len: usize },
}

/// Apply a single-channel segmentation mask to an image's alpha channel.
///
/// The mask is row-major, one byte per pixel. Values above
/// [`MASK_THRESHOLD`] keep the pixel (alpha 255); the rest are cleared
/// (alpha 0). Color channels are left untouched.
///
/// # Errors
///
/// Returns [`MaskError::SizeMismatch`] when the mask doesn't cover the
/// image one byte per pixel.
pub fn apply_alpha_mask(image: &DecodedImage, mask: &[u8]) -> Result<DecodedImage, MaskError> {
    let pixel_count = image.pixel_count() as usize;
    if mask.len() != pixel_count {
        return Err(MaskError::SizeMismatch {
            pixel_count,
            mask_len: mask.len(),
        });
    }

    let mut pixels = image.pixels.clone();
    for (i, &m) in mask.iter().enumerate() {
        pixels[i * CHANNELS + 3] = if m > MASK_THRESHOLD { 255 } else { 0 };
    }

    Ok(DecodedImage::new(image.width, image.height, pixels))
}

/// Flatten an image onto a solid background color.
///
/// Standard source-over blend against an opaque `[r, g, b]` backdrop; the
/// result is fully opaque. Used by the recolor-background feature after
/// background removal has punched out the subject.
pub fn flatten_onto_color(image: &DecodedImage, color: [u8; 3]) -> DecodedImage {
    let mut pixels = Vec::with_capacity(image.pixels.len());

    for px in image.pixels.chunks_exact(CHANNELS) {
        let alpha = px[3] as u16;
        let inv = 255 - alpha;
        for c in 0..3 {
            let blended = (px[c] as u16 * alpha + color[c] as u16 * inv + 127) / 255;
            pixels.push(blended as u8);
        }
        pixels.push(255);
    }

    DecodedImage::new(image.width, image.height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
