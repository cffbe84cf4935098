// SPDX-License-Identifier: MPL-2.0
//! Before/after comparison slider component.
//!
//! Follows the Elm-style "state down, messages up" pattern: the host owns a
//! [`State`], forwards [`Message`]s to [`State::update`], renders
//! [`State::view`] and batches [`State::subscription`] into its own.
//!
//! Every external resource the widget needs is expressed as a subscription
//! derived from its state (the window-wide release listener while dragging,
//! the animation timer while the demo runs, keyboard control while mounted).
//! Dropping the `State` therefore unregisters all of them; nothing keeps
//! firing after the widget is gone.

mod canvas;
mod view;

pub use canvas::{cover_rect, ComparisonCanvas};

use crate::domain::comparison::{AutoDemo, Divider, Span};
use crate::domain::ui::{DemoTiming, DividerPercent, VisibilityThreshold};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use iced::{event, keyboard, mouse, time, touch, Element, Subscription, Task};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Source of the mount identifiers handed to each new [`State`].
static NEXT_MOUNT_ID: AtomicU64 = AtomicU64::new(1);

/// Which of the two stacked images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Base layer, fills the whole container.
    Before,
    /// Overlay layer, visible left of the divider.
    After,
}

/// Immutable widget configuration supplied by the host.
#[derive(Debug, Clone)]
pub struct SliderConfig {
    pub before: PathBuf,
    pub after: PathBuf,
    /// Falls back to the localized "Before" when `None`.
    pub before_label: Option<String>,
    /// Falls back to the localized "After" when `None`.
    pub after_label: Option<String>,
    pub height: f32,
    pub auto_demo: bool,
    pub timing: DemoTiming,
    pub visibility_threshold: VisibilityThreshold,
}

impl SliderConfig {
    /// Configuration with every optional value at its default.
    #[must_use]
    pub fn new(before: impl Into<PathBuf>, after: impl Into<PathBuf>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            before_label: None,
            after_label: None,
            height: crate::config::DEFAULT_SLIDER_HEIGHT,
            auto_demo: crate::config::DEFAULT_AUTO_DEMO,
            timing: DemoTiming::default(),
            visibility_threshold: VisibilityThreshold::default(),
        }
    }
}

/// Load status of one layer.
#[derive(Debug, Clone)]
pub enum LayerStatus {
    Loading,
    Ready(ImageData),
    Failed(Error),
}

/// Messages handled by the comparison component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer or finger went down inside the container.
    /// `x` is relative to the container's left edge.
    PointerPressed { x: f32, width: f32 },
    /// Pointer or finger moved; only honored while dragging.
    PointerMoved { x: f32, width: f32 },
    /// Pointer or finger went up inside the container.
    PointerReleased,
    /// Pointer left the container.
    PointerLeft,
    /// Release detected anywhere in the window.
    GlobalRelease,
    /// Animation timer.
    Tick(Instant),
    /// Fraction (0.0–1.0) of the container currently inside the viewport.
    VisibilityChanged(f32),
    /// Keyboard move by a number of percentage points.
    Nudge(f32),
    /// Keyboard jump to an absolute position.
    JumpTo(DividerPercent),
    /// Decoding finished for one layer of the widget mounted as `mount`.
    ImageLoaded {
        mount: u64,
        side: Side,
        result: Result<ImageData, Error>,
    },
}

/// Comparison widget state. One instance per mounted widget.
#[derive(Debug)]
pub struct State {
    mount: u64,
    config: SliderConfig,
    before: LayerStatus,
    after: LayerStatus,
    divider: Divider,
    demo: AutoDemo,
}

impl State {
    /// Mounts a new widget. Returns the state and the task decoding both images.
    pub fn new(config: SliderConfig) -> (Self, Task<Message>) {
        let mount = NEXT_MOUNT_ID.fetch_add(1, Ordering::Relaxed);
        let demo = AutoDemo::new(config.auto_demo, config.timing);
        let state = Self {
            mount,
            config,
            before: LayerStatus::Loading,
            after: LayerStatus::Loading,
            divider: Divider::new(),
            demo,
        };
        let task = Task::batch([state.load_task(Side::Before), state.load_task(Side::After)]);
        tracing::debug!(mount, "comparison widget mounted");
        (state, task)
    }

    fn load_task(&self, side: Side) -> Task<Message> {
        let mount = self.mount;
        let path = match side {
            Side::Before => self.config.before.clone(),
            Side::After => self.config.after.clone(),
        };
        // Decoding is CPU-bound; keep it off the async workers.
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || media::load_image(path))
                    .await
                    .map_err(|e| Error::Image(e.to_string()))?
            },
            move |result| Message::ImageLoaded { mount, side, result },
        )
    }

    /// Identifier tagging the image results that belong to this instance.
    #[must_use]
    pub fn mount_id(&self) -> u64 {
        self.mount
    }

    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    #[must_use]
    pub fn position(&self) -> DividerPercent {
        self.divider.position()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.divider.is_dragging()
    }

    #[must_use]
    pub fn demo(&self) -> &AutoDemo {
        &self.demo
    }

    #[must_use]
    pub fn layer(&self, side: Side) -> &LayerStatus {
        match side {
            Side::Before => &self.before,
            Side::After => &self.after,
        }
    }

    /// Label shown for a layer, falling back to the localized default.
    #[must_use]
    pub fn label(&self, side: Side, i18n: &I18n) -> String {
        let custom = match side {
            Side::Before => self.config.before_label.as_ref(),
            Side::After => self.config.after_label.as_ref(),
        };
        custom.cloned().unwrap_or_else(|| match side {
            Side::Before => i18n.tr("label-before"),
            Side::After => i18n.tr("label-after"),
        })
    }

    /// Any manual input wins over the demo.
    fn take_over_from_demo(&mut self) {
        if self.demo.cancel() {
            tracing::debug!(mount = self.mount, "auto-demo interrupted by user input");
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::PointerPressed { x, width } => {
                if self.divider.press(x, Span::new(0.0, width)) {
                    self.take_over_from_demo();
                    tracing::trace!(position = self.position().value(), "drag started");
                }
            }
            Message::PointerMoved { x, width } => {
                if self.divider.is_dragging() {
                    self.take_over_from_demo();
                    self.divider.drag_to(x, Span::new(0.0, width));
                }
            }
            Message::PointerReleased | Message::PointerLeft | Message::GlobalRelease => {
                if self.divider.is_dragging() {
                    tracing::trace!(position = self.position().value(), "drag ended");
                }
                self.divider.release();
            }
            Message::Tick(now) => {
                let was_running = self.demo.is_running();
                if let Some(position) = self.demo.tick(now, self.divider.position()) {
                    self.divider.set(position);
                }
                if was_running && !self.demo.is_running() {
                    tracing::debug!(mount = self.mount, "auto-demo finished");
                }
            }
            Message::VisibilityChanged(fraction) => {
                if self.config.visibility_threshold.is_met_by(fraction) {
                    if let Some(start) = self.demo.trigger() {
                        self.divider.set(start);
                        tracing::debug!(mount = self.mount, fraction, "auto-demo started");
                    }
                }
            }
            Message::Nudge(delta) => {
                self.take_over_from_demo();
                self.divider.nudge(delta);
            }
            Message::JumpTo(position) => {
                self.take_over_from_demo();
                self.divider.set(position);
            }
            Message::ImageLoaded {
                mount,
                side,
                result,
            } => {
                if mount != self.mount {
                    tracing::debug!(mount, "dropping image decoded for an unmounted widget");
                    return;
                }
                let status = match result {
                    Ok(image) => {
                        tracing::debug!(?side, width = image.width, height = image.height, "layer ready");
                        LayerStatus::Ready(image)
                    }
                    Err(err) => {
                        tracing::warn!(?side, error = %err, "failed to load layer image");
                        LayerStatus::Failed(err)
                    }
                };
                match side {
                    Side::Before => self.before = status,
                    Side::After => self.after = status,
                }
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let release = if self.divider.is_dragging() {
            event::listen_with(|event, _status, _window| match event {
                iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                | iced::Event::Touch(
                    touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. },
                ) => Some(Message::GlobalRelease),
                _ => None,
            })
        } else {
            Subscription::none()
        };

        let ticks = if self.demo.is_running() {
            time::every(self.demo.timing().tick()).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let keys = event::listen_with(|event, status, _window| {
            if status == event::Status::Captured {
                return None;
            }
            let iced::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
                return None;
            };
            let step = crate::config::KEYBOARD_NUDGE_PERCENT;
            match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Message::Nudge(-step)),
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Message::Nudge(step)),
                keyboard::Key::Named(keyboard::key::Named::Home) => {
                    Some(Message::JumpTo(DividerPercent::MIN))
                }
                keyboard::Key::Named(keyboard::key::Named::End) => {
                    Some(Message::JumpTo(DividerPercent::MAX))
                }
                _ => None,
            }
        });

        Subscription::batch([release, ticks, keys])
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        view::view(self, i18n)
    }
}
