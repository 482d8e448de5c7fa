//! Drag arithmetic.
//!
//! Everything here is pure: offsets in, decisions out. The tracker in
//! `effects` turns the decisions into style writes.

/// Which animation a finished drag triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// Offset at or under the threshold: return to rest.
    SettleBack,
    /// Offset past the threshold: slide out and notify.
    Dismiss,
}

/// Translation to display for a signed offset, or `None` when the element
/// should not move (no movement or upward drag).
///
/// # Example
///
/// ```rust
/// use swipedown::core::visual_translation;
///
/// assert_eq!(visual_translation(150.0, 400.0), Some(150.0));
/// assert_eq!(visual_translation(500.0, 400.0), Some(400.0));
/// assert_eq!(visual_translation(-20.0, 400.0), None);
/// assert_eq!(visual_translation(0.0, 400.0), None);
/// ```
pub fn visual_translation(offset: f64, max_drag_distance: f64) -> Option<f64> {
    if offset > 0.0 {
        Some(offset.min(max_drag_distance))
    } else {
        None
    }
}

/// The offset as currently shown on screen, always in `[0, max_drag_distance]`.
pub fn displayed_offset(offset: f64, max_drag_distance: f64) -> f64 {
    visual_translation(offset, max_drag_distance).unwrap_or(0.0)
}

/// Strictly greater than the threshold dismisses.
pub fn release_for(offset: f64, dismiss_threshold: f64) -> Release {
    if offset > dismiss_threshold {
        Release::Dismiss
    } else {
        Release::SettleBack
    }
}

/// Mutable per-gesture bookkeeping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragState {
    pub start_position: f64,
    /// Signed displacement since the drag started. Only meaningful while
    /// `dragging`.
    pub current_offset: f64,
    pub dragging: bool,
    pub animating: bool,
    pub disabled: bool,
}

impl DragState {
    /// Start tracking from `y`.
    pub fn begin(&mut self, y: f64) {
        self.dragging = true;
        self.animating = false;
        self.start_position = y;
        self.current_offset = 0.0;
    }

    /// Record the finger at `y` and return the signed offset.
    pub fn update(&mut self, y: f64) -> f64 {
        self.current_offset = y - self.start_position;
        self.current_offset
    }

    /// Stop dragging and decide what happens next.
    pub fn release(&mut self, dismiss_threshold: f64) -> Release {
        self.dragging = false;
        self.animating = true;
        release_for(self.current_offset, dismiss_threshold)
    }

    /// Move and end are honoured only while this holds.
    pub fn accepts_input(&self) -> bool {
        self.dragging && !self.disabled
    }
}
