// SPDX-License-Identifier: MPL-2.0
//! `iced_compare` is a before/after image comparison slider built with the
//! Iced GUI framework.
//!
//! The slider itself lives in [`ui::comparison`] and can be embedded in any
//! Iced application. Its behavior (divider clamping, the one-time reveal
//! animation, viewport checks) is kept in [`domain`] free of GUI types. The
//! [`app`] module is the showcase window shipped as the `iced_compare` binary.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
