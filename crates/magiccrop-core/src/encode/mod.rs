//! Image encoding pipeline for Magiccrop.
//!
//! This module provides functionality for:
//! - Encoding RGBA buffers to PNG for download and smart-crop output
//!
//! # Architecture
//!
//! The encoding pipeline is designed to be used from the editing page via
//! WASM bindings. All operations are synchronous and single-threaded within
//! WASM.

mod png;

pub use png::{encode_png, encode_png_image, EncodeError};
