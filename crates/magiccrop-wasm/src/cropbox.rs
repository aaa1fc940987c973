//! Interactive crop-box WASM bindings.
//!
//! Wraps the core [`CropBoxController`] as a stateful class the editing page
//! holds for the lifetime of a crop gesture. Pointer events are forwarded in
//! displayed coordinates (relative to the rendered image element); `confirm`
//! hands back the rectangle in natural pixel space for the canvas to
//! extract.
//!
//! # Example
//!
//! ```typescript
//! const session = new CropBoxSession();
//! session.begin(imgEl.clientWidth, imgEl.clientHeight);
//!
//! overlay.onpointerdown = (e) => session.pointer_down(e.offsetX, e.offsetY);
//! overlay.onpointermove = (e) => session.pointer_move(e.offsetX, e.offsetY);
//! overlay.onpointerup = () => session.pointer_up();
//!
//! // On confirm:
//! const rect = session.confirm(imgEl.naturalWidth, imgEl.naturalHeight);
//! ctx.drawImage(imgEl, rect.x, rect.y, rect.width, rect.height, 0, 0, rect.width, rect.height);
//! ```

use magiccrop_core::cropbox::{CropBoxController, CropState};
use wasm_bindgen::prelude::*;

/// A crop gesture in progress over a displayed image.
#[wasm_bindgen]
pub struct CropBoxSession {
    controller: CropBoxController,
}

impl Default for CropBoxSession {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CropBoxSession {
    /// Create an idle session.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CropBoxSession {
        CropBoxSession {
            controller: CropBoxController::new(),
        }
    }

    /// Start cropping over an image rendered at the given displayed size.
    ///
    /// The crop box is initialized to cover the whole displayed image.
    ///
    /// # Errors
    ///
    /// Returns an error when no displayed image is available (non-positive
    /// dimensions), so the page can surface "no image to crop" instead of
    /// silently doing nothing.
    pub fn begin(&mut self, display_width: f64, display_height: f64) -> Result<(), JsValue> {
        self.controller
            .begin(display_width, display_height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current state: `"idle"`, `"active"`, or the dragged handle's name
    /// (`"move"`, `"n"`, `"se"`, ...).
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        match self.controller.state() {
            CropState::Idle => "idle".to_string(),
            CropState::Active => "active".to_string(),
            CropState::Dragging(handle) => handle.as_str().to_string(),
        }
    }

    /// The crop box in displayed coordinates as `{ x, y, width, height }`,
    /// or `undefined` when idle. Used by the overlay renderer.
    pub fn rect(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.controller.rect())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Name of the handle under the pointer, or `undefined`. Used to pick
    /// the CSS cursor before any button is pressed.
    pub fn handle_at(&self, x: f64, y: f64) -> Option<String> {
        self.controller
            .hit_test(x, y)
            .map(|h| h.as_str().to_string())
    }

    /// Forward a pointerdown in displayed coordinates.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.controller.pointer_down(x, y);
    }

    /// Forward a pointermove in displayed coordinates.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.controller.pointer_move(x, y);
    }

    /// Forward a pointerup; the box is retained.
    pub fn pointer_up(&mut self) {
        self.controller.pointer_up();
    }

    /// Abandon the crop without touching the image.
    pub fn cancel(&mut self) {
        self.controller.cancel();
    }

    /// Convert the displayed box to natural pixel space and end the session.
    ///
    /// # Arguments
    ///
    /// * `natural_width` / `natural_height` - The image's natural size
    ///   (`imgEl.naturalWidth` / `imgEl.naturalHeight`)
    ///
    /// # Returns
    ///
    /// The crop rectangle as `{ x, y, width, height }` in natural pixels.
    /// The caller extracts this rectangle from the displayed image and, when
    /// background removal has run, from the removed-background variant too.
    ///
    /// # Errors
    ///
    /// Returns an error when the natural dimensions are zero (image not
    /// loaded) or the crop box is invalid.
    pub fn confirm(&mut self, natural_width: u32, natural_height: u32) -> Result<JsValue, JsValue> {
        let rect = self
            .controller
            .confirm(natural_width, natural_height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&rect).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}
