//! Interactive crop-box controller for manual cropping.
//!
//! Translates a pointer-event stream into a consistent crop rectangle with
//! a move handle and eight resize handles. All geometry here is in
//! displayed space; only [`CropBoxController::confirm`] converts to natural
//! pixel space, through explicit scale factors.
//!
//! # State machine
//!
//! - `Idle`: not cropping.
//! - `Active`: crop box displayed, no drag in progress.
//! - `Dragging(handle)`: one handle is being dragged. A single drag session
//!   owns the state; pointer-downs while dragging are ignored, so
//!   interleaved pointer sources cannot start a second drag.
//!
//! # Hit-testing precedence
//!
//! Handle zones overlap when the box is small. Hit-testing is deterministic:
//! corners are checked first, then edge midpoints, then the box interior
//! (which selects `Move`). A pointer outside every zone starts no drag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{DisplayRect, PixelRect};

/// Half-width of the square hit zone centered on each handle, in displayed
/// pixels.
pub const HANDLE_HIT_RADIUS: f64 = 10.0;

/// Minimum crop-box width/height in displayed pixels.
pub const MIN_BOX_SIZE: f64 = 10.0;

/// A draggable control on the crop box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    /// Translate the whole box.
    Move,
    /// Top edge.
    N,
    /// Bottom edge.
    S,
    /// Right edge.
    E,
    /// Left edge.
    W,
    /// Top-right corner.
    Ne,
    /// Top-left corner.
    Nw,
    /// Bottom-right corner.
    Se,
    /// Bottom-left corner.
    Sw,
}

impl Handle {
    /// CSS-style name, used for cursor selection in the UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Handle::Move => "move",
            Handle::N => "n",
            Handle::S => "s",
            Handle::E => "e",
            Handle::W => "w",
            Handle::Ne => "ne",
            Handle::Nw => "nw",
            Handle::Se => "se",
            Handle::Sw => "sw",
        }
    }
}

/// Controller state, exposed for rendering decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropState {
    Idle,
    Active,
    Dragging(Handle),
}

/// Errors for crop confirmation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CropBoxError {
    /// The box is zero-area or extends outside the displayed image.
    #[error("Invalid crop box: zero-area or out of displayed bounds")]
    InvalidCropBox,

    /// No displayed image (or its natural dimensions) is available.
    #[error("No image reference available for cropping")]
    MissingImageReference,
}

/// Pointer-driven crop rectangle over a displayed image.
#[derive(Debug, Clone)]
pub struct CropBoxController {
    display_width: f64,
    display_height: f64,
    rect: DisplayRect,
    active_handle: Option<Handle>,
    drag_anchor: Option<(f64, f64)>,
    cropping: bool,
}

impl Default for CropBoxController {
    fn default() -> Self {
        Self::new()
    }
}

impl CropBoxController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self {
            display_width: 0.0,
            display_height: 0.0,
            rect: DisplayRect::default(),
            active_handle: None,
            drag_anchor: None,
            cropping: false,
        }
    }

    /// Current state.
    pub fn state(&self) -> CropState {
        if !self.cropping {
            CropState::Idle
        } else if let Some(handle) = self.active_handle {
            CropState::Dragging(handle)
        } else {
            CropState::Active
        }
    }

    /// The crop box, if one is displayed.
    pub fn rect(&self) -> Option<DisplayRect> {
        self.cropping.then_some(self.rect)
    }

    /// Start cropping: the box is initialized to the full displayed image
    /// rect (the rendered element's bounding box, not the natural size).
    ///
    /// # Errors
    ///
    /// Returns [`CropBoxError::MissingImageReference`] when no displayed
    /// image geometry is available (non-positive dimensions).
    pub fn begin(&mut self, display_width: f64, display_height: f64) -> Result<(), CropBoxError> {
        if !(display_width > 0.0) || !(display_height > 0.0) {
            return Err(CropBoxError::MissingImageReference);
        }
        self.display_width = display_width;
        self.display_height = display_height;
        self.rect = DisplayRect::new(0.0, 0.0, display_width, display_height);
        self.active_handle = None;
        self.drag_anchor = None;
        self.cropping = true;
        Ok(())
    }

    /// Hit-test a pointer position against the handle zones.
    ///
    /// Precedence is corners, then edge midpoints, then the interior.
    /// Returns `None` outside every zone.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<Handle> {
        if !self.cropping {
            return None;
        }
        let r = &self.rect;

        let near = |px: f64, py: f64| {
            (x - px).abs() <= HANDLE_HIT_RADIUS && (y - py).abs() <= HANDLE_HIT_RADIUS
        };

        // Corners
        if near(r.x, r.y) {
            return Some(Handle::Nw);
        }
        if near(r.right(), r.y) {
            return Some(Handle::Ne);
        }
        if near(r.x, r.bottom()) {
            return Some(Handle::Sw);
        }
        if near(r.right(), r.bottom()) {
            return Some(Handle::Se);
        }

        // Edge midpoints
        if near(r.center_x(), r.y) {
            return Some(Handle::N);
        }
        if near(r.center_x(), r.bottom()) {
            return Some(Handle::S);
        }
        if near(r.x, r.center_y()) {
            return Some(Handle::W);
        }
        if near(r.right(), r.center_y()) {
            return Some(Handle::E);
        }

        // Interior
        if r.contains(x, y) {
            return Some(Handle::Move);
        }

        None
    }

    /// Pointer pressed: start a drag if a handle zone was hit.
    ///
    /// Ignored while Idle or while another drag is in progress.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !self.cropping || self.active_handle.is_some() {
            return;
        }
        if let Some(handle) = self.hit_test(x, y) {
            self.active_handle = Some(handle);
            self.drag_anchor = Some((x, y));
        }
    }

    /// Pointer moved: recompute the box for the active handle.
    ///
    /// No-op unless a drag is in progress.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(handle) = self.active_handle else {
            return;
        };
        let Some((ax, ay)) = self.drag_anchor else {
            return;
        };

        match handle {
            Handle::Move => {
                // Translate by the pointer delta, keeping the whole box
                // inside the displayed image.
                let dx = x - ax;
                let dy = y - ay;
                self.rect.x = (self.rect.x + dx).clamp(0.0, self.display_width - self.rect.width);
                self.rect.y =
                    (self.rect.y + dy).clamp(0.0, self.display_height - self.rect.height);
            }
            _ => self.resize_edges(handle, x, y),
        }

        self.drag_anchor = Some((x, y));
    }

    /// Pointer released: the drag ends, the box is retained.
    pub fn pointer_up(&mut self) {
        self.active_handle = None;
        self.drag_anchor = None;
    }

    /// Cancel cropping: discard the box, no image mutation.
    pub fn cancel(&mut self) {
        self.cropping = false;
        self.active_handle = None;
        self.drag_anchor = None;
        self.rect = DisplayRect::default();
    }

    /// Confirm the crop: convert the displayed box to natural pixel space
    /// and return the rectangle to extract. The controller returns to Idle.
    ///
    /// The caller must extract this exact rectangle from the current image
    /// and, if present, from the background-removed variant, keeping both
    /// synchronized.
    ///
    /// # Errors
    ///
    /// - [`CropBoxError::MissingImageReference`] when the natural dimensions
    ///   are unavailable (zero). This is an explicit failure, never a
    ///   silent no-op.
    /// - [`CropBoxError::InvalidCropBox`] when there is no box, or the box
    ///   is zero-area or out of the displayed bounds.
    pub fn confirm(
        &mut self,
        natural_width: u32,
        natural_height: u32,
    ) -> Result<PixelRect, CropBoxError> {
        if natural_width == 0 || natural_height == 0 {
            return Err(CropBoxError::MissingImageReference);
        }
        if !self.cropping {
            return Err(CropBoxError::InvalidCropBox);
        }

        let r = self.rect;
        let in_bounds = r.x >= 0.0
            && r.y >= 0.0
            && r.right() <= self.display_width
            && r.bottom() <= self.display_height;
        if r.width <= 0.0 || r.height <= 0.0 || !in_bounds {
            return Err(CropBoxError::InvalidCropBox);
        }

        let scale_x = natural_width as f64 / self.display_width;
        let scale_y = natural_height as f64 / self.display_height;
        let mut pixel_rect = r.to_pixel_rect(scale_x, scale_y);

        // Per-component rounding can push the far edge one pixel out
        pixel_rect.x = pixel_rect.x.min(natural_width - 1);
        pixel_rect.y = pixel_rect.y.min(natural_height - 1);
        pixel_rect.width = pixel_rect.width.min(natural_width - pixel_rect.x);
        pixel_rect.height = pixel_rect.height.min(natural_height - pixel_rect.y);

        if pixel_rect.is_empty() {
            return Err(CropBoxError::InvalidCropBox);
        }

        self.cancel();
        Ok(pixel_rect)
    }

    /// Move the edge(s) owned by `handle` toward the pointer. The opposite
    /// edge never moves; width/height never drop below [`MIN_BOX_SIZE`].
    fn resize_edges(&mut self, handle: Handle, x: f64, y: f64) {
        let r = &mut self.rect;

        let moves_w = matches!(handle, Handle::W | Handle::Nw | Handle::Sw);
        let moves_e = matches!(handle, Handle::E | Handle::Ne | Handle::Se);
        let moves_n = matches!(handle, Handle::N | Handle::Nw | Handle::Ne);
        let moves_s = matches!(handle, Handle::S | Handle::Sw | Handle::Se);

        if moves_w {
            let new_left = x.clamp(0.0, r.right() - MIN_BOX_SIZE);
            r.width = r.right() - new_left;
            r.x = new_left;
        }
        if moves_e {
            let new_right = x.clamp(r.x + MIN_BOX_SIZE, self.display_width);
            r.width = new_right - r.x;
        }
        if moves_n {
            let new_top = y.clamp(0.0, r.bottom() - MIN_BOX_SIZE);
            r.height = r.bottom() - new_top;
            r.y = new_top;
        }
        if moves_s {
            let new_bottom = y.clamp(r.y + MIN_BOX_SIZE, self.display_height);
            r.height = new_bottom - r.y;
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
