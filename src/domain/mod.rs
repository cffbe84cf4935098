// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core comparison logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and rules.
//! It has no dependencies on external crates (except `std`) so the slider
//! behavior can be tested without a window or a renderer.
//!
//! # Modules
//!
//! - [`comparison`]: Divider dragging ([`Divider`](comparison::Divider)),
//!   the auto-demo state machine ([`AutoDemo`](comparison::AutoDemo)) and
//!   viewport visibility ([`visible_fraction`](comparison::visible_fraction))
//! - [`ui`]: UI value objects ([`DividerPercent`](ui::DividerPercent),
//!   [`DemoTiming`](ui::DemoTiming), [`VisibilityThreshold`](ui::VisibilityThreshold))

pub mod comparison;
pub mod ui;
