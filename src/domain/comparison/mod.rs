// SPDX-License-Identifier: MPL-2.0
//! Comparison slider behavior, independent of any GUI toolkit.

pub mod auto_demo;
pub mod divider;
pub mod visibility;

pub use auto_demo::{AutoDemo, Phase};
pub use divider::{percent_at, Divider, Span};
pub use visibility::{visible_fraction, Extent};
