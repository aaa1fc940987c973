//! PNG/JPEG decoding to RGBA buffers.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, DecodedImage};

/// Decode an encoded image (PNG or JPEG) from bytes.
///
/// The container format is guessed from the byte content, not from a file
/// extension, since uploads arrive as anonymous blobs. The result is always
/// converted to RGBA8; opaque formats get a fully-opaque alpha channel.
///
/// # Arguments
///
/// * `bytes` - Raw encoded file bytes
///
/// # Returns
///
/// A `DecodedImage` with RGBA pixel data.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognizable
/// image, or `DecodeError::CorruptedFile` if decoding fails partway.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let cursor = Cursor::new(bytes);
    let reader = ImageReader::new(cursor)
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let rgba_img = img.into_rgba8();
    Ok(DecodedImage::from_rgba_image(rgba_img))
}
