// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! - [`comparison`] - The before/after comparison slider widget
//! - [`styles`] - Centralized container and overlay styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Colors used by the slider canvas
//! - [`theming`] - Light/Dark/System theme mode management

pub mod comparison;
pub mod design_tokens;
pub mod styles;
pub mod theme;
pub mod theming;
