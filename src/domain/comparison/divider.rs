// SPDX-License-Identifier: MPL-2.0
//! Divider drag state.
//!
//! Converts horizontal pointer or touch coordinates into a divider percentage
//! and tracks whether a drag is in progress.

use crate::domain::ui::DividerPercent;

/// Horizontal extent of the comparison container, in the same coordinate
/// space as the pointer positions fed to [`Divider`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f32,
    pub width: f32,
}

impl Span {
    #[must_use]
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Returns whether the span can map coordinates (laid out, non-empty).
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }
}

/// Maps a horizontal coordinate to a divider percentage.
///
/// Returns `None` when the container has no usable geometry yet or the
/// coordinate is not finite; callers treat that as a no-op.
#[must_use]
pub fn percent_at(x: f32, span: Span) -> Option<DividerPercent> {
    if !span.is_usable() || !x.is_finite() {
        return None;
    }
    Some(DividerPercent::new((x - span.left) * 100.0 / span.width))
}

/// Divider position plus drag tracking.
#[derive(Debug, Clone, Default)]
pub struct Divider {
    position: DividerPercent,
    dragging: bool,
}

impl Divider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current divider position.
    #[must_use]
    pub fn position(&self) -> DividerPercent {
        self.position
    }

    /// Whether a pointer or touch drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Starts a drag and moves the divider under the pointer.
    ///
    /// Returns `false` without starting a drag when the geometry is unusable.
    pub fn press(&mut self, x: f32, span: Span) -> bool {
        let Some(position) = percent_at(x, span) else {
            return false;
        };
        self.dragging = true;
        self.position = position;
        true
    }

    /// Follows the pointer while a drag is active.
    ///
    /// Returns the new position, or `None` if nothing changed.
    pub fn drag_to(&mut self, x: f32, span: Span) -> Option<DividerPercent> {
        if !self.dragging {
            return None;
        }
        let position = percent_at(x, span)?;
        self.position = position;
        Some(position)
    }

    /// Ends the drag. Safe to call when no drag is active.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Sets the position directly (animation, keyboard).
    pub fn set(&mut self, position: DividerPercent) {
        self.position = position;
    }

    /// Moves the divider by `delta` percentage points.
    pub fn nudge(&mut self, delta: f32) -> DividerPercent {
        self.position = self.position.offset_by(delta);
        self.position
    }
}
