//! Image decoding WASM bindings.
//!
//! This module exposes the magiccrop-core image decoding functions to
//! JavaScript, providing format-sniffing decode, resizing, and history
//! thumbnail generation.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a PNG or JPEG image from bytes
//! - [`resize`] - Resize an image to exact dimensions
//! - [`resize_to_fit`] - Resize an image to fit within a max edge, preserving aspect ratio
//! - [`generate_thumbnail`] - Generate a thumbnail for the history strip
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, generate_thumbnail } from '@magiccrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const thumb = generate_thumbnail(image);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{filter_from_u8, JsDecodedImage};
use magiccrop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes.
///
/// The format is sniffed from the byte content, not from a file extension,
/// so the same entry point serves uploads, fetched storage objects, and
/// segmentation results.
///
/// # Arguments
///
/// * `bytes` - The raw image file bytes as a `Uint8Array`
///
/// # Returns
///
/// A `JsDecodedImage` containing the decoded RGBA pixel data, or an error if
/// decoding fails.
///
/// # Errors
///
/// Returns an error if:
/// - The bytes are not a recognized image format
/// - The file is corrupted or truncated
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height} image`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions.
///
/// This function resizes the image to the specified width and height, regardless
/// of the original aspect ratio. If you want to preserve aspect ratio, use
/// `resize_to_fit` instead.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Resize algorithm: 0=Nearest (fastest), 1=Bilinear (default), 2=Lanczos3 (best quality)
///
/// # Returns
///
/// A new `JsDecodedImage` with the resized pixel data, or an error if resizing fails.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
#[wasm_bindgen]
pub fn resize(
    image: &JsDecodedImage,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();
    let filter_type = filter_from_u8(filter);

    decode::resize(&decoded, width, height, filter_type)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to fit within a maximum edge size, preserving aspect ratio.
///
/// The image is scaled so that its longest edge equals `max_edge` pixels, while
/// the shorter edge is scaled proportionally to maintain the original aspect ratio.
///
/// If the image is already smaller than `max_edge` in both dimensions, it is
/// returned unchanged (no upscaling).
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `max_edge` - Maximum size for the longest edge in pixels
/// * `filter` - Resize algorithm: 0=Nearest (fastest), 1=Bilinear (default), 2=Lanczos3 (best quality)
///
/// # Returns
///
/// A new `JsDecodedImage` with the resized pixel data, or an error if resizing fails.
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsDecodedImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();
    let filter_type = filter_from_u8(filter);

    decode::resize_to_fit(&decoded, max_edge, filter_type)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a thumbnail for the upload-history strip.
///
/// Uses bilinear filtering and fits the image within a 100px square,
/// preserving aspect ratio.
///
/// # Arguments
///
/// * `image` - The source image
///
/// # Returns
///
/// A new `JsDecodedImage` with the thumbnail pixel data, or an error if
/// generation fails.
///
/// # Example
///
/// ```typescript
/// const thumb = generate_thumbnail(image);
/// // thumb.width and thumb.height are at most 100
/// ```
#[wasm_bindgen]
pub fn generate_thumbnail(image: &JsDecodedImage) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();

    decode::generate_thumbnail(&decoded, decode::THUMBNAIL_EDGE)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
