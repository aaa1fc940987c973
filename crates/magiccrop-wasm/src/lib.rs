//! Magiccrop WASM - WebAssembly bindings for Magiccrop
//!
//! This crate provides WASM bindings to expose the magiccrop-core
//! functionality to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (PNG/JPEG decode, resize, thumbnails)
//! - `encode` - Image encoding bindings (PNG export)
//! - `bounds` - Smart-crop bindings (content-bounds scan, one-shot trim)
//! - `cropbox` - Interactive crop-box session for manual cropping
//! - `composite` - Alpha-mask application and background recolor
//! - `session` - Undo/redo edit history
//! - `storage` - Upload naming and history filtering
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, smart_crop } from '@magiccrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Decode an uploaded file
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod bounds;
mod composite;
mod cropbox;
mod decode;
mod encode;
mod session;
mod storage;
mod types;

// Re-export public types
pub use bounds::{default_padding, scan_content_bounds, smart_crop};
pub use composite::{apply_alpha_mask, flatten_onto_color};
pub use cropbox::CropBoxSession;
pub use decode::{decode_image, generate_thumbnail, resize, resize_to_fit};
pub use encode::{encode_png, encode_png_from_image};
pub use session::EditSession;
pub use storage::{filter_recent_uploads, object_name};
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
