// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Divider Bounds
// =============================================================================

/// Divider percentage bounds (0% to 100%).
pub mod divider_bounds {
    /// Left edge of the container.
    pub const MIN_PERCENT: f32 = 0.0;
    /// Right edge of the container.
    pub const MAX_PERCENT: f32 = 100.0;
    /// Starting position of every widget.
    pub const DEFAULT_PERCENT: f32 = 50.0;
}

// =============================================================================
// DividerPercent
// =============================================================================

/// Horizontal divider position as a percentage of the container width.
///
/// Always within 0%–100%; out-of-range and non-finite inputs are clamped
/// rather than rejected.
///
/// # Example
///
/// ```
/// use iced_compare::domain::ui::DividerPercent;
///
/// assert_eq!(DividerPercent::new(140.0).value(), 100.0);
/// assert_eq!(DividerPercent::new(-3.0).value(), 0.0);
/// assert_eq!(DividerPercent::default().value(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DividerPercent(f32);

impl DividerPercent {
    /// Left edge.
    pub const MIN: Self = Self(divider_bounds::MIN_PERCENT);
    /// Right edge.
    pub const MAX: Self = Self(divider_bounds::MAX_PERCENT);
    /// Center, where every widget starts.
    pub const CENTER: Self = Self(divider_bounds::DEFAULT_PERCENT);

    /// Creates a new divider percentage, clamping the value to the valid range.
    ///
    /// NaN maps to the left edge.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::MIN;
        }
        Self(percent.clamp(divider_bounds::MIN_PERCENT, divider_bounds::MAX_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the position as a fraction of the width (e.g., 50% → 0.5).
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / 100.0
    }

    /// Moves the divider by `delta` percentage points.
    #[must_use]
    pub fn offset_by(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns whether the divider sits on the left edge.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= divider_bounds::MIN_PERCENT
    }

    /// Returns whether the divider sits on the right edge.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= divider_bounds::MAX_PERCENT
    }
}

impl Default for DividerPercent {
    fn default() -> Self {
        Self::CENTER
    }
}

// =============================================================================
// Demo Timing
// =============================================================================

/// Bounds for the auto-demo timing values.
pub mod demo_bounds {
    /// Smallest sweep step per tick, in percentage points.
    pub const MIN_STEP_PERCENT: f32 = 0.5;
    /// Largest sweep step per tick, in percentage points.
    pub const MAX_STEP_PERCENT: f32 = 25.0;
    /// Default sweep step per tick.
    pub const DEFAULT_STEP_PERCENT: f32 = 2.0;

    /// Fastest tick interval in milliseconds.
    pub const MIN_TICK_MS: u64 = 10;
    /// Slowest tick interval in milliseconds.
    pub const MAX_TICK_MS: u64 = 500;
    /// Default tick interval in milliseconds.
    pub const DEFAULT_TICK_MS: u64 = 30;

    /// Longest pause at the right edge in milliseconds.
    pub const MAX_PAUSE_MS: u64 = 10_000;
    /// Default pause at the right edge in milliseconds.
    pub const DEFAULT_PAUSE_MS: u64 = 1_000;
}

/// Timing of the auto-demo sweep, always within [`demo_bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoTiming {
    step_percent: f32,
    tick: Duration,
    pause: Duration,
}

impl DemoTiming {
    /// Creates a timing, clamping every value to its valid range.
    #[must_use]
    pub fn new(step_percent: f32, tick_ms: u64, pause_ms: u64) -> Self {
        let step_percent = if step_percent.is_nan() {
            demo_bounds::DEFAULT_STEP_PERCENT
        } else {
            step_percent.clamp(demo_bounds::MIN_STEP_PERCENT, demo_bounds::MAX_STEP_PERCENT)
        };
        Self {
            step_percent,
            tick: Duration::from_millis(
                tick_ms.clamp(demo_bounds::MIN_TICK_MS, demo_bounds::MAX_TICK_MS),
            ),
            pause: Duration::from_millis(pause_ms.min(demo_bounds::MAX_PAUSE_MS)),
        }
    }

    /// Percentage points moved per tick.
    #[must_use]
    pub fn step_percent(self) -> f32 {
        self.step_percent
    }

    /// Interval between two ticks.
    #[must_use]
    pub fn tick(self) -> Duration {
        self.tick
    }

    /// Hold time at the right edge.
    #[must_use]
    pub fn pause(self) -> Duration {
        self.pause
    }
}

impl Default for DemoTiming {
    fn default() -> Self {
        Self::new(
            demo_bounds::DEFAULT_STEP_PERCENT,
            demo_bounds::DEFAULT_TICK_MS,
            demo_bounds::DEFAULT_PAUSE_MS,
        )
    }
}

// =============================================================================
// VisibilityThreshold
// =============================================================================

/// Fraction of the widget that must be on screen before it counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    /// Default threshold (30% visible).
    pub const DEFAULT: f32 = 0.3;

    /// Creates a threshold clamped to (0, 1].
    #[must_use]
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self(fraction.clamp(0.01, 1.0))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether `visible_fraction` reaches the threshold.
    #[must_use]
    pub fn is_met_by(self, visible_fraction: f32) -> bool {
        visible_fraction >= self.0
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
