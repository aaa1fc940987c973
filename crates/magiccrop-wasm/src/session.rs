//! Edit-session WASM bindings.
//!
//! Exposes the core undo/redo history as a class the editing page holds for
//! the lifetime of an open image. States are opaque strings on the JS side
//! (object URLs or data URLs); pixel data never passes through here.

use magiccrop_core::session;
use wasm_bindgen::prelude::*;

/// Undo/redo history over image-state URLs.
///
/// # Example
///
/// ```typescript
/// const session = new EditSession(originalUrl);
/// session.push(afterRemoveBgUrl);
/// imgEl.src = session.undo() ?? session.current;
/// ```
#[wasm_bindgen]
pub struct EditSession {
    inner: session::EditSession,
}

#[wasm_bindgen]
impl EditSession {
    /// Start a session from the initially loaded image state.
    #[wasm_bindgen(constructor)]
    pub fn new(initial: String) -> EditSession {
        EditSession {
            inner: session::EditSession::new(initial),
        }
    }

    /// The currently displayed state.
    #[wasm_bindgen(getter)]
    pub fn current(&self) -> String {
        self.inner.current().to_string()
    }

    /// Record a new state after an edit; any redo tail is discarded.
    pub fn push(&mut self, state: String) {
        self.inner.push(state);
    }

    /// Step back one state. Returns the new current state, or `undefined`
    /// at the oldest state.
    pub fn undo(&mut self) -> Option<String> {
        self.inner.undo().map(str::to_string)
    }

    /// Step forward one state. Returns the new current state, or
    /// `undefined` at the newest state.
    pub fn redo(&mut self) -> Option<String> {
        self.inner.redo().map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(getter)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    /// Whether background removal has produced a variant for this session.
    #[wasm_bindgen(getter)]
    pub fn has_removed_background(&self) -> bool {
        self.inner.has_removed_background()
    }

    /// The background-removed variant, or `undefined`.
    pub fn removed_background(&self) -> Option<String> {
        self.inner.removed_background().map(str::to_string)
    }

    /// Record (or replace) the background-removed variant. Call again after
    /// a crop so the pair stays synchronized.
    pub fn set_removed_background(&mut self, state: String) {
        self.inner.set_removed_background(state);
    }

    /// Drop the background-removed variant.
    pub fn clear_removed_background(&mut self) {
        self.inner.clear_removed_background();
    }

    /// Restart from a fresh initial state, discarding all history.
    pub fn reset(&mut self, initial: String) {
        self.inner.reset(initial);
    }
}
