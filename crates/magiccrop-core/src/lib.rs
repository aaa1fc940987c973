//! Magiccrop Core - Image editing library
//!
//! This crate provides the core image editing functionality for Magiccrop,
//! including image decoding, content-bounds scanning for smart crop, the
//! interactive crop-box controller, alpha-mask compositing for background
//! removal, and PNG export.

pub mod bounds;
pub mod composite;
pub mod cropbox;
pub mod decode;
pub mod encode;
pub mod extract;
pub mod geometry;
pub mod session;
pub mod storage;

pub use bounds::{scan_content_bounds, scan_image, ScanOutcome, DEFAULT_PADDING};
pub use cropbox::{CropBoxController, CropBoxError, CropState, Handle};
pub use extract::{extract_region, smart_crop, SmartCrop};
pub use geometry::{DisplayRect, PixelRect};
