//! Rectangle types and coordinate-space conversion.
//!
//! The editor works in two coordinate spaces that must never be mixed
//! implicitly:
//!
//! - **Natural pixel space**: coordinates into the decoded image buffer
//!   ([`PixelRect`], integer pixels).
//! - **Displayed space**: coordinates of the rendered image element on
//!   screen, post CSS/layout scaling ([`DisplayRect`], fractional pixels).
//!
//! The only sanctioned path between the two is
//! [`DisplayRect::to_pixel_rect`], which takes explicit scale factors.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in natural pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelRect {
    /// Create a new pixel rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// True if the rectangle encloses no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if the rectangle lies entirely within an image of the given
    /// dimensions.
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.right() <= image_width && self.bottom() <= image_height
    }
}

/// An axis-aligned rectangle in displayed (on-screen) space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DisplayRect {
    /// Create a new display rectangle.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// True if a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// Convert to natural pixel space using explicit per-axis scale factors.
    ///
    /// `scale_x` is `natural_width / displayed_width` and `scale_y` is
    /// `natural_height / displayed_height`. Each component is rounded to
    /// the nearest pixel, so a displayed box `(x, y, w, h)` maps to exactly
    /// `(round(x*sx), round(y*sy), round(w*sx), round(h*sy))`.
    pub fn to_pixel_rect(&self, scale_x: f64, scale_y: f64) -> PixelRect {
        PixelRect {
            x: (self.x * scale_x).round().max(0.0) as u32,
            y: (self.y * scale_y).round().max(0.0) as u32,
            width: (self.width * scale_x).round().max(0.0) as u32,
            height: (self.height * scale_y).round().max(0.0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_rect_edges() {
        let r = PixelRect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert!(!r.is_empty());
    }

    #[test]
    fn test_pixel_rect_empty() {
        assert!(PixelRect::new(0, 0, 0, 10).is_empty());
        assert!(PixelRect::new(0, 0, 10, 0).is_empty());
        assert!(!PixelRect::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn test_pixel_rect_fits_within() {
        let r = PixelRect::new(10, 10, 90, 90);
        assert!(r.fits_within(100, 100));
        assert!(!r.fits_within(99, 100));
        assert!(!r.fits_within(100, 99));
    }

    #[test]
    fn test_display_rect_contains() {
        let r = DisplayRect::new(10.0, 10.0, 50.0, 50.0);
        assert!(r.contains(10.0, 10.0)); // Edges inclusive
        assert!(r.contains(35.0, 35.0));
        assert!(r.contains(60.0, 60.0));
        assert!(!r.contains(9.9, 35.0));
        assert!(!r.contains(35.0, 60.1));
    }

    #[test]
    fn test_to_pixel_rect_identity_scale() {
        let r = DisplayRect::new(10.0, 20.0, 30.0, 40.0);
        let px = r.to_pixel_rect(1.0, 1.0);
        assert_eq!(px, PixelRect::new(10, 20, 30, 40));
    }

    #[test]
    fn test_to_pixel_rect_scaled() {
        // Displayed at half size: natural = 2x displayed
        let r = DisplayRect::new(10.0, 20.0, 105.5, 40.25);
        let px = r.to_pixel_rect(2.0, 2.0);
        assert_eq!(px.x, 20);
        assert_eq!(px.y, 40);
        assert_eq!(px.width, 211);
        assert_eq!(px.height, 81); // 80.5 rounds to 81
    }

    #[test]
    fn test_to_pixel_rect_rounds_each_component() {
        // Rounding happens per component, not on derived edges
        let r = DisplayRect::new(0.4, 0.6, 10.4, 10.6);
        let px = r.to_pixel_rect(1.0, 1.0);
        assert_eq!(px, PixelRect::new(0, 1, 10, 11));
    }
}
