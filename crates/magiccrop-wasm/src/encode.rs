//! Image encoding WASM bindings.
//!
//! This module exposes PNG encoding to JavaScript for the download feature
//! and the smart-crop result. PNG is the only export format because it
//! carries the alpha channel produced by background removal.

use crate::types::JsDecodedImage;
use magiccrop_core::encode;
use wasm_bindgen::prelude::*;

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
/// A `Uint8Array` of PNG bytes, suitable for a `Blob` and a download link.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The pixel data length doesn't match width * height * 4
///
/// # Example
///
/// ```typescript
/// const png = encode_png(imageData.data, canvas.width, canvas.height);
/// const blob = new Blob([png], { type: 'image/png' });
/// ```
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a decoded image to PNG bytes.
///
/// Convenience wrapper over [`encode_png`] for images already held in WASM
/// memory, avoiding a round trip of the pixel buffer through JavaScript.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    let decoded = image.to_decoded();
    encode::encode_png_image(&decoded).map_err(|e| JsValue::from_str(&e.to_string()))
}
