//! Image decoding pipeline for Magiccrop.
//!
//! This module provides functionality for:
//! - Decoding uploaded PNG/JPEG blobs to RGBA buffers
//! - Image resizing for history-strip thumbnails
//!
//! # Architecture
//!
//! The decoding pipeline is designed to be used from the editing page via
//! WASM bindings. All operations are synchronous and single-threaded within
//! WASM; everything downstream (bounds scan, crop extraction, compositing)
//! consumes the RGBA buffers produced here.

mod image;
mod resize;
mod types;

pub use image::decode_image;
pub use resize::{generate_thumbnail, resize, resize_to_fit, THUMBNAIL_EDGE};
pub use types::{DecodeError, DecodedImage, FilterType, CHANNELS};
