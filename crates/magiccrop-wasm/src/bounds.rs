//! Smart-crop WASM bindings.
//!
//! This module exposes the content-bounds scanner and the one-shot smart
//! crop to JavaScript. The scanner returns the crop rectangle for callers
//! that want to drive the canvas themselves; `smart_crop` does the whole
//! scan-and-extract in WASM memory and returns the cropped image.

use crate::types::JsDecodedImage;
use magiccrop_core::bounds;
use magiccrop_core::extract::{self, SmartCrop};
use magiccrop_core::geometry::PixelRect;
use wasm_bindgen::prelude::*;
use web_sys::console;

/// Default padding kept around detected content, in pixels.
#[wasm_bindgen]
pub fn default_padding() -> u32 {
    bounds::DEFAULT_PADDING
}

/// Scan RGBA pixel data for the padded bounding box of non-transparent
/// content.
///
/// # Arguments
///
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `padding` - Pixels of margin to keep around the content
///
/// # Returns
///
/// The crop rectangle as `{ x, y, width, height }`, or `undefined` when
/// the image has no content or a crop would not be worthwhile (the caller
/// keeps the original in both cases).
///
/// # Errors
///
/// Returns an error if the buffer length doesn't match the dimensions.
///
/// # Example
///
/// ```typescript
/// const rect = scan_content_bounds(imageData.data, w, h, default_padding());
/// if (rect !== undefined) {
///   ctx.drawImage(img, rect.x, rect.y, rect.width, rect.height, 0, 0, rect.width, rect.height);
/// }
/// ```
#[wasm_bindgen]
pub fn scan_content_bounds(
    pixels: &[u8],
    width: u32,
    height: u32,
    padding: u32,
) -> Result<JsValue, JsValue> {
    let outcome = bounds::scan_content_bounds(pixels, width, height, 4, padding)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let rect: Option<PixelRect> = outcome.rect();
    serde_wasm_bindgen::to_value(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Trim the transparent border around an image's content.
///
/// Runs the content-bounds scan and the extraction in one call, entirely in
/// WASM memory.
///
/// # Arguments
///
/// * `image` - The source image (typically the background-removed result)
/// * `padding` - Pixels of margin to keep around the content
///
/// # Returns
///
/// The cropped `JsDecodedImage`, or `undefined` when there is nothing to
/// trim. In that case the caller must keep using the original image.
///
/// # Errors
///
/// Returns an error for a malformed pixel buffer.
///
/// # Example
///
/// ```typescript
/// const cropped = smart_crop(image, default_padding());
/// const result = cropped ?? image;
/// ```
#[wasm_bindgen]
pub fn smart_crop(image: &JsDecodedImage, padding: u32) -> Result<Option<JsDecodedImage>, JsValue> {
    let decoded = image.to_decoded();

    match extract::smart_crop(&decoded, padding).map_err(|e| JsValue::from_str(&e.to_string()))? {
        SmartCrop::Cropped(cropped) => Ok(Some(JsDecodedImage::from_decoded(cropped))),
        SmartCrop::Unchanged => {
            console::log_1(&"smart_crop: no trimmable border, returning original".into());
            Ok(None)
        }
    }
}
