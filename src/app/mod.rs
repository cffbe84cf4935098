// SPDX-License-Identifier: MPL-2.0
//! Application root state for the showcase window.
//!
//! The `App` hosts one comparison widget inside a scrollable page, so that
//! scrolling the slider into view drives its auto-demo the same way a web page
//! would. It owns the settings, the localization bundle and the image paths,
//! and mounts or unmounts the widget on request.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::comparison::{visible_fraction, Extent};
use crate::i18n::fluent::I18n;
use crate::ui::comparison::{self, Side, SliderConfig};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: f32 = 768.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    before: Option<PathBuf>,
    after: Option<PathBuf>,
    before_label: Option<String>,
    after_label: Option<String>,
    height: f32,
    auto_demo: bool,
    lead_in: f32,
    config: Config,
    comparison: Option<comparison::State>,
    /// Whether the user hid the widget from the toolbar.
    hidden: bool,
    scroll_offset: f32,
    viewport_height: f32,
    /// i18n key of a startup warning shown in the toolbar.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("before", &self.before)
            .field("after", &self.after)
            .field("mounted", &self.comparison.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an Fn boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Vertical extent of the slider inside the scrollable page.
#[must_use]
pub fn slider_extent(lead_in: f32, height: f32) -> Extent {
    let mut top = spacing::LG;
    if lead_in > 0.0 {
        top += lead_in + spacing::LG;
    }
    Extent { top, height }
}

impl App {
    /// Loads the settings, merges the command line over them and mounts the
    /// widget when both images are known.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = &config_warning {
            tracing::warn!(%key, "using default settings");
        }
        let (mut app, task) = Self::with_config(flags, config);
        app.notice = config_warning;
        (app, task)
    }

    fn with_config(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            before: flags.before,
            after: flags.after,
            before_label: flags.before_label,
            after_label: flags.after_label,
            height: flags
                .height
                .map_or_else(|| config.slider_height(), config::clamp_height),
            auto_demo: config.auto_demo_enabled() && !flags.no_auto_demo,
            lead_in: flags
                .lead_in
                .map_or_else(|| config.lead_in(), config::clamp_lead_in),
            config,
            comparison: None,
            hidden: false,
            scroll_offset: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT - sizing::TOOLBAR_HEIGHT,
            notice: None,
        };

        let task = app.mount();
        (app, task)
    }

    /// Widget configuration for the current paths, or `None` if a side is missing.
    fn slider_config(&self) -> Option<SliderConfig> {
        let (before, after) = (self.before.clone()?, self.after.clone()?);
        Some(SliderConfig {
            before_label: self.before_label.clone(),
            after_label: self.after_label.clone(),
            height: self.height,
            auto_demo: self.auto_demo,
            timing: self.config.demo_timing(),
            visibility_threshold: self.config.visibility_threshold(),
            ..SliderConfig::new(before, after)
        })
    }

    /// Mounts a fresh widget if possible. Any previous instance is dropped.
    fn mount(&mut self) -> Task<Message> {
        if self.hidden {
            return Task::none();
        }
        let Some(slider_config) = self.slider_config() else {
            self.comparison = None;
            return Task::none();
        };
        tracing::info!(
            before = %slider_config.before.display(),
            after = %slider_config.after.display(),
            "mounting comparison"
        );
        let (state, load) = comparison::State::new(slider_config);
        self.comparison = Some(state);
        self.report_visibility();
        load.map(Message::Comparison)
    }

    fn unmount(&mut self) {
        if self.comparison.take().is_some() {
            tracing::info!("comparison unmounted");
        }
    }

    /// Fraction of the slider inside the visible band of the page.
    fn visible_fraction(&self) -> f32 {
        visible_fraction(
            slider_extent(self.lead_in, self.height),
            Extent {
                top: self.scroll_offset,
                height: self.viewport_height,
            },
        )
    }

    fn report_visibility(&mut self) {
        let fraction = self.visible_fraction();
        if let Some(state) = self.comparison.as_mut() {
            state.update(comparison::Message::VisibilityChanged(fraction));
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    /// Read access to the mounted widget, if any.
    #[must_use]
    pub fn comparison(&self) -> Option<&comparison::State> {
        self.comparison.as_ref()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Comparison(msg) => {
                // Late messages for an unmounted widget are dropped here.
                if let Some(state) = self.comparison.as_mut() {
                    state.update(msg);
                }
                Task::none()
            }
            Message::ToggleSlider => {
                if self.comparison.is_some() {
                    self.hidden = true;
                    self.unmount();
                    Task::none()
                } else {
                    self.hidden = false;
                    self.mount()
                }
            }
            Message::PickImage(side) => {
                let title = match side {
                    Side::Before => self.i18n.tr("picker-choose-before"),
                    Side::After => self.i18n.tr("picker-choose-after"),
                };
                Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .set_title(title)
                            .add_filter("Images", crate::media::IMAGE_EXTENSIONS)
                            .pick_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    move |path| Message::ImagePicked { side, path },
                )
            }
            Message::ImagePicked { side, path } => {
                let Some(path) = path else {
                    // User cancelled the dialog
                    return Task::none();
                };
                match side {
                    Side::Before => self.before = Some(path),
                    Side::After => self.after = Some(path),
                }
                self.mount()
            }
            Message::Scrolled { offset, height } => {
                self.scroll_offset = offset.max(0.0);
                self.viewport_height = height.max(0.0);
                self.report_visibility();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport_height = (size.height - sizing::TOOLBAR_HEIGHT).max(0.0);
                self.report_visibility();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        let widget = self
            .comparison
            .as_ref()
            .map_or_else(Subscription::none, |state| {
                state.subscription().map(Message::Comparison)
            });
        Subscription::batch([subscription::window_events(), widget])
    }
}
