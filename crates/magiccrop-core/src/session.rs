//! Edit-session history with undo/redo.
//!
//! The session tracks image states by opaque string keys (object URLs or
//! data URLs on the web side); pixel buffers never live here. History is a
//! linear stack with a cursor: pushing a new state while undone truncates
//! the redo tail, the usual editor behavior.

/// Linear undo/redo history over opaque image-state keys.
///
/// Construction goes through [`EditSession::new`] so the history is never
/// empty; `current()` always has an entry to return.
#[derive(Debug, Clone)]
pub struct EditSession {
    history: Vec<String>,
    current_index: usize,
    /// Key of the background-removed variant, kept in lockstep with crops
    /// so a later recolor still lines up with the visible image.
    removed_background: Option<String>,
}

impl EditSession {
    /// Start a session from the initially loaded image state.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
            current_index: 0,
            removed_background: None,
        }
    }

    /// The currently displayed state.
    pub fn current(&self) -> &str {
        &self.history[self.current_index]
    }

    /// Record a new state after an edit. Any redo tail is discarded.
    pub fn push(&mut self, state: impl Into<String>) {
        self.history.truncate(self.current_index + 1);
        self.history.push(state.into());
        self.current_index = self.history.len() - 1;
    }

    /// Step back one state. Returns the new current state, or `None` when
    /// already at the oldest state.
    pub fn undo(&mut self) -> Option<&str> {
        if self.current_index == 0 {
            return None;
        }
        self.current_index -= 1;
        Some(self.current())
    }

    /// Step forward one state. Returns the new current state, or `None`
    /// when already at the newest state.
    pub fn redo(&mut self) -> Option<&str> {
        if self.current_index + 1 >= self.history.len() {
            return None;
        }
        self.current_index += 1;
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_index + 1 < self.history.len()
    }

    /// Number of recorded states, including the initial one.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Whether background removal has produced a variant for this session.
    pub fn has_removed_background(&self) -> bool {
        self.removed_background.is_some()
    }

    /// The background-removed variant, if one exists.
    pub fn removed_background(&self) -> Option<&str> {
        self.removed_background.as_deref()
    }

    /// Record (or replace) the background-removed variant. Cropping must
    /// call this with the cropped variant to keep the pair synchronized.
    pub fn set_removed_background(&mut self, state: impl Into<String>) {
        self.removed_background = Some(state.into());
    }

    /// Drop the background-removed variant (e.g. after loading a new image).
    pub fn clear_removed_background(&mut self) {
        self.removed_background = None;
    }

    /// Restart the session from a fresh initial state, discarding all
    /// history and the removed-background variant.
    pub fn reset(&mut self, initial: impl Into<String>) {
        self.history.clear();
        self.history.push(initial.into());
        self.current_index = 0;
        self.removed_background = None;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
