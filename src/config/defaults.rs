// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slider**: Container height and page layout
//! - **Auto-demo**: Sweep step, tick interval, pause, and visibility trigger
//! - **Keyboard**: Divider nudge step

use crate::domain::ui::newtypes::demo_bounds;

// ==========================================================================
// Slider Defaults
// ==========================================================================

/// Default container height in logical pixels.
pub const DEFAULT_SLIDER_HEIGHT: f32 = 384.0;

/// Minimum container height.
pub const MIN_SLIDER_HEIGHT: f32 = 120.0;

/// Maximum container height.
pub const MAX_SLIDER_HEIGHT: f32 = 4096.0;

/// Default empty space above the slider in the showcase page.
pub const DEFAULT_LEAD_IN: f32 = 0.0;

/// Maximum lead-in space.
pub const MAX_LEAD_IN: f32 = 10_000.0;

// ==========================================================================
// Auto-demo Defaults
// ==========================================================================

/// Whether the reveal animation plays on first viewport entry.
pub const DEFAULT_AUTO_DEMO: bool = true;

/// Percentage points moved per animation tick.
pub const DEFAULT_DEMO_STEP_PERCENT: f32 = demo_bounds::DEFAULT_STEP_PERCENT;

/// Animation tick interval in milliseconds.
pub const DEFAULT_DEMO_TICK_MS: u64 = demo_bounds::DEFAULT_TICK_MS;

/// Hold time at the right edge in milliseconds.
pub const DEFAULT_DEMO_PAUSE_MS: u64 = demo_bounds::DEFAULT_PAUSE_MS;

/// Fraction of the widget that must be visible to trigger the demo.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.3;

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Divider movement per arrow key press, in percentage points.
pub const KEYBOARD_NUDGE_PERCENT: f32 = 5.0;

const _: () = {
    assert!(MIN_SLIDER_HEIGHT > 0.0);
    assert!(DEFAULT_SLIDER_HEIGHT >= MIN_SLIDER_HEIGHT);
    assert!(DEFAULT_SLIDER_HEIGHT <= MAX_SLIDER_HEIGHT);
    assert!(DEFAULT_VISIBILITY_THRESHOLD > 0.0 && DEFAULT_VISIBILITY_THRESHOLD <= 1.0);
    assert!(KEYBOARD_NUDGE_PERCENT > 0.0);
};
