//! PNG encoding for download and the smart-crop response body.
//!
//! PNG is the only export format: it is lossless and carries the alpha
//! channel that background removal produces.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::{DecodedImage, CHANNELS};

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGBA pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes on success, or an error if encoding fails.
///
/// # Example
///
/// ```
/// use magiccrop_core::encode::encode_png;
///
/// let pixels = vec![128u8; 100 * 100 * 4];
/// let png = encode_png(&pixels, 100, 100).unwrap();
///
/// // Verify PNG signature
/// assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel data length
    let expected_len = (width as usize) * (height as usize) * CHANNELS;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());

    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(pixels, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Encode a decoded image to PNG bytes.
pub fn encode_png_image(image: &DecodedImage) -> Result<Vec<u8>, EncodeError> {
    encode_png(&image.pixels, image.width, image.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let width = 100;
        let height = 100;
        let pixels = vec![128u8; width * height * 4];

        let result = encode_png(&pixels, width as u32, height as u32);
        assert!(result.is_ok());

        let png_bytes = result.unwrap();
        assert_eq!(&png_bytes[0..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_preserves_alpha() {
        // Transparent image must survive an encode/decode round trip
        let pixels = vec![0u8; 10 * 10 * 4];
        let png = encode_png(&pixels, 10, 10).unwrap();

        let decoded = crate::decode::decode_image(&png).unwrap();
        assert_eq!(decoded.alpha_at(0, 0), 0);
        assert_eq!(decoded.alpha_at(9, 9), 0);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_short() {
        let pixels = vec![128u8; 99 * 100 * 4]; // One row short

        let result = encode_png(&pixels, 100, 100);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_invalid_pixel_data_long() {
        let pixels = vec![128u8; 101 * 100 * 4]; // One row extra

        let result = encode_png(&pixels, 100, 100);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_png_zero_width() {
        let result = encode_png(&[], 0, 100);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_zero_height() {
        let result = encode_png(&[], 100, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_small_image() {
        // 1x1 pixel image
        let pixels = vec![255, 0, 0, 255]; // Opaque red pixel

        let result = encode_png(&pixels, 1, 1);
        assert!(result.is_ok());

        let png_bytes = result.unwrap();
        assert_eq!(&png_bytes[0..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_image_wrapper() {
        let img = DecodedImage::new(4, 4, vec![200u8; 4 * 4 * 4]);
        let png = encode_png_image(&img).unwrap();
        assert_eq!(&png[0..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_non_square() {
        let pixels = vec![128u8; 200 * 50 * 4];
        assert!(encode_png(&pixels, 200, 50).is_ok());

        let pixels = vec![128u8; 50 * 200 * 4];
        assert!(encode_png(&pixels, 50, 200).is_ok());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
