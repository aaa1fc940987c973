//! Compositing WASM bindings.
//!
//! Exposes the two pixel operations around background removal: applying the
//! segmentation mask to the alpha channel, and flattening a transparent
//! image onto a solid background color for the recolor feature.

use crate::types::JsDecodedImage;
use magiccrop_core::composite;
use wasm_bindgen::prelude::*;

/// Apply a single-channel segmentation mask to an image's alpha channel.
///
/// Mask values above 128 keep the pixel fully opaque; everything else
/// becomes fully transparent. Color channels are untouched.
///
/// # Arguments
///
/// * `image` - The original image
/// * `mask` - One byte per pixel, row-major, same dimensions as the image
///
/// # Returns
///
/// A new `JsDecodedImage` with the mask stamped into the alpha channel.
///
/// # Errors
///
/// Returns an error when the mask length doesn't match the pixel count.
///
/// # Example
///
/// ```typescript
/// const mask = await runSegmentation(image); // Uint8Array, w*h bytes
/// const removed = apply_alpha_mask(image, mask);
/// ```
#[wasm_bindgen]
pub fn apply_alpha_mask(image: &JsDecodedImage, mask: &[u8]) -> Result<JsDecodedImage, JsValue> {
    let decoded = image.to_decoded();

    composite::apply_alpha_mask(&decoded, mask)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Flatten an image onto a solid background color.
///
/// Standard source-over blend; the result is fully opaque. Run after
/// background removal to recolor the background.
///
/// # Arguments
///
/// * `image` - The (typically background-removed) image
/// * `r` / `g` / `b` - The new background color
#[wasm_bindgen]
pub fn flatten_onto_color(image: &JsDecodedImage, r: u8, g: u8, b: u8) -> JsDecodedImage {
    let decoded = image.to_decoded();
    JsDecodedImage::from_decoded(composite::flatten_onto_color(&decoded, [r, g, b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_onto_color_opaque_output() {
        let img = JsDecodedImage::new(2, 1, vec![100, 100, 100, 0, 200, 200, 200, 255]);
        let result = flatten_onto_color(&img, 10, 20, 30);

        let pixels = result.pixels();
        // Transparent pixel takes the background color
        assert_eq!(&pixels[0..4], &[10, 20, 30, 255]);
        // Opaque pixel is unchanged
        assert_eq!(&pixels[4..8], &[200, 200, 200, 255]);
    }
}
