//! Image resizing functions for thumbnail generation.
//!
//! Provides resize operations using the `image` crate's algorithms.
//! All functions return new `DecodedImage` instances without modifying the
//! input.

use super::{DecodeError, DecodedImage, FilterType};

/// Default edge length for history-strip thumbnails.
pub const THUMBNAIL_EDGE: u32 = 100;

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Returns
///
/// A new `DecodedImage` with the specified dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgba_image = image
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgba_image(resized))
}

/// Resize an image to fit within a maximum edge length while preserving
/// aspect ratio.
///
/// The image is scaled so that its longest edge equals `max_edge`. If the
/// image is already smaller than `max_edge`, it is returned unchanged.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if `max_edge` is zero.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    let (src_width, src_height) = (image.width, image.height);

    // If already fits, just clone
    if src_width <= max_edge && src_height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = calculate_fit_dimensions(src_width, src_height, max_edge);

    resize(image, new_width, new_height, filter)
}

/// Generate a thumbnail for the edit-history strip.
///
/// Uses bilinear interpolation for speed. The resulting image will fit
/// within a `size x size` bounding box while preserving aspect ratio.
pub fn generate_thumbnail(image: &DecodedImage, size: u32) -> Result<DecodedImage, DecodeError> {
    resize_to_fit(image, size, FilterType::Bilinear)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_width = max_edge;
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (new_width, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_height = max_edge;
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), new_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
                pixels.push(255); // A
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 4);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_to_fit_landscape() {
        let img = create_test_image(600, 400);
        let resized = resize_to_fit(&img, 100, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 67); // 400 * (100/600) ≈ 67
    }

    #[test]
    fn test_resize_to_fit_portrait() {
        let img = create_test_image(400, 600);
        let resized = resize_to_fit(&img, 100, FilterType::Bilinear).unwrap();

        assert_eq!(resized.height, 100);
        assert_eq!(resized.width, 67);
    }

    #[test]
    fn test_resize_to_fit_already_smaller() {
        let img = create_test_image(80, 50);
        let resized = resize_to_fit(&img, THUMBNAIL_EDGE, FilterType::Bilinear).unwrap();

        // Small images are not upscaled
        assert_eq!(resized.width, 80);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_to_fit_zero_max_edge_error() {
        let img = create_test_image(100, 50);
        assert!(resize_to_fit(&img, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_generate_thumbnail() {
        let img = create_test_image(600, 400);
        let thumb = generate_thumbnail(&img, THUMBNAIL_EDGE).unwrap();

        assert!(thumb.width <= THUMBNAIL_EDGE);
        assert!(thumb.height <= THUMBNAIL_EDGE);
        assert!(thumb.width == THUMBNAIL_EDGE || thumb.height == THUMBNAIL_EDGE);
    }

    #[test]
    fn test_calculate_fit_dimensions_square() {
        let (w, h) = calculate_fit_dimensions(4000, 4000, 100);
        assert_eq!(w, 100);
        assert_eq!(h, 100);
    }

    #[test]
    fn test_calculate_fit_dimensions_zero_input() {
        let (w, h) = calculate_fit_dimensions(0, 0, 100);
        assert_eq!(w, 0);
        assert_eq!(h, 0);
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}
