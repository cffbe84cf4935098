// SPDX-License-Identifier: MPL-2.0
//! Window-level event subscriptions.

use super::Message;
use iced::{event, window, Subscription};

/// Window resizes change the height of the visible band, which feeds the
/// viewport check of the comparison widget.
pub fn window_events() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
