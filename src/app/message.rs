// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::comparison::{self, Side};
use iced::Size;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. Comparison messages are
/// forwarded unchanged while the widget is mounted.
#[derive(Debug, Clone)]
pub enum Message {
    Comparison(comparison::Message),
    /// Mount or unmount the comparison widget.
    ToggleSlider,
    /// Open the file picker for one side.
    PickImage(Side),
    /// Result from the file picker; `None` when cancelled.
    ImagePicked { side: Side, path: Option<PathBuf> },
    /// The page was scrolled. `offset` and `height` describe the visible band.
    Scrolled { offset: f32, height: f32 },
    WindowResized(Size),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    pub before: Option<PathBuf>,
    pub after: Option<PathBuf>,
    pub before_label: Option<String>,
    pub after_label: Option<String>,
    /// Slider height in logical pixels; wins over the settings file.
    pub height: Option<f32>,
    /// Set by `--no-auto-demo`.
    pub no_auto_demo: bool,
    /// Empty space above the slider; wins over the settings file.
    pub lead_in: Option<f32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_COMPARE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
