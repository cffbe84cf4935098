// SPDX-License-Identifier: MPL-2.0
//! Canvas program that paints the two layers, the divider and its grip,
//! and turns pointer and touch input into [`Message`]s.

use super::Message;
use crate::domain::ui::DividerPercent;
use crate::media::ImageData;
use crate::ui::design_tokens::{border, sizing};
use crate::ui::theme;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, touch, Point, Rectangle, Size};

/// Everything the canvas needs for one frame.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonCanvas<'a> {
    pub before: Option<&'a ImageData>,
    pub after: Option<&'a ImageData>,
    pub position: DividerPercent,
    pub dragging: bool,
}

/// Rectangle that scales `image` to cover `target` while preserving its
/// aspect ratio, centered. Parts outside `target` are cropped by the caller.
#[must_use]
pub fn cover_rect(image: Size, target: Size) -> Rectangle {
    if image.width <= 0.0 || image.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, target);
    }
    let scale = (target.width / image.width).max(target.height / image.height);
    let size = Size::new(image.width * scale, image.height * scale);
    Rectangle::new(
        Point::new(
            (target.width - size.width) / 2.0,
            (target.height - size.height) / 2.0,
        ),
        size,
    )
}

fn draw_layer(frame: &mut Frame, image: Option<&ImageData>, area: Size) {
    match image {
        Some(image) => {
            frame.draw_image(
                cover_rect(image.size(), area),
                canvas::Image::new(image.handle.clone()),
            );
        }
        None => frame.fill_rectangle(Point::ORIGIN, area, theme::placeholder_surface_color()),
    }
}

fn draw_grip(frame: &mut Frame, center: Point) {
    let circle = Path::circle(center, sizing::GRIP_DIAMETER / 2.0);
    frame.fill(&circle, theme::grip_fill_color());
    frame.stroke(
        &circle,
        Stroke::default()
            .with_width(border::WIDTH_MD)
            .with_color(theme::grip_border_color()),
    );

    let bar = Size::new(sizing::GRIP_BAR_WIDTH, sizing::GRIP_BAR_HEIGHT);
    let top = center.y - bar.height / 2.0;
    let offset = sizing::GRIP_BAR_GAP / 2.0;
    for left in [center.x - offset - bar.width, center.x + offset] {
        frame.fill_rectangle(Point::new(left, top), bar, theme::grip_bar_color());
    }
}

impl ComparisonCanvas<'_> {
    /// Maps one input event to a widget message.
    ///
    /// Positions come from `cursor`, which enclosing scrollables have already
    /// translated into the same space as `bounds`; raw event positions are
    /// window coordinates.
    pub fn interpret(
        &self,
        finger: &mut Option<touch::Finger>,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Message> {
        let width = bounds.width;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                Some(Message::PointerPressed { x: position.x, width })
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if self.dragging => {
                match cursor.position_in(bounds) {
                    Some(position) => Some(Message::PointerMoved { x: position.x, width }),
                    None => Some(Message::PointerLeft),
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.dragging =>
            {
                Some(Message::PointerReleased)
            }
            // Cursor left the window.
            iced::Event::Mouse(mouse::Event::CursorLeft) if self.dragging => {
                Some(Message::PointerLeft)
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, .. }) => {
                if finger.is_some() {
                    return None;
                }
                let position = cursor.position_in(bounds)?;
                *finger = Some(*id);
                Some(Message::PointerPressed { x: position.x, width })
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, .. }) if *finger == Some(*id) => {
                // Touch drags keep following the finger past the edges; the
                // divider clamps.
                let position = cursor.position()?;
                Some(Message::PointerMoved {
                    x: position.x - bounds.x,
                    width,
                })
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) if *finger == Some(*id) => {
                *finger = None;
                Some(Message::PointerReleased)
            }
            _ => None,
        }
    }
}

impl canvas::Program<Message> for ComparisonCanvas<'_> {
    /// Finger currently driving a touch drag.
    type State = Option<touch::Finger>;

    fn update(
        &self,
        finger: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = self.interpret(finger, event, bounds, cursor)?;
        Some(match message {
            Message::PointerLeft => Action::publish(message),
            _ => Action::publish(message).and_capture(),
        })
    }

    fn draw(
        &self,
        _finger: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let size = bounds.size();
        let mut frame = Frame::new(renderer, size);

        frame.with_clip(Rectangle::new(Point::ORIGIN, size), |frame| {
            draw_layer(frame, self.before, size);
        });

        let split = size.width * self.position.as_fraction();
        if split > 0.0 {
            // Drawn at full size then clipped so the overlay never stretches.
            frame.with_clip(
                Rectangle::new(Point::ORIGIN, Size::new(split, size.height)),
                |frame| draw_layer(frame, self.after, size),
            );
        }

        let half = sizing::HANDLE_WIDTH / 2.0;
        frame.fill_rectangle(
            Point::new(split - half - 1.0, 0.0),
            Size::new(sizing::HANDLE_WIDTH + 2.0, size.height),
            theme::handle_shadow_color(),
        );
        frame.fill_rectangle(
            Point::new(split - half, 0.0),
            Size::new(sizing::HANDLE_WIDTH, size.height),
            theme::handle_color(),
        );
        draw_grip(&mut frame, Point::new(split, size.height / 2.0));

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _finger: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.dragging || cursor.is_over(bounds) {
            mouse::Interaction::ResizingHorizontally
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rectangle = Rectangle {
        x: 100.0,
        y: 100.0,
        width: 400.0,
        height: 300.0,
    };

    fn canvas(dragging: bool) -> ComparisonCanvas<'static> {
        ComparisonCanvas {
            before: None,
            after: None,
            position: DividerPercent::CENTER,
            dragging,
        }
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn left_press() -> iced::Event {
        iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
    }

    fn cursor_moved(x: f32, y: f32) -> iced::Event {
        iced::Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })
    }

    fn finger(id: u64, kind: fn(touch::Finger, Point) -> touch::Event, x: f32, y: f32) -> iced::Event {
        iced::Event::Touch(kind(touch::Finger(id), Point::new(x, y)))
    }

    fn pressed(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerPressed { id, position }
    }

    fn moved(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerMoved { id, position }
    }

    fn lifted(id: touch::Finger, position: Point) -> touch::Event {
        touch::Event::FingerLifted { id, position }
    }

    #[test]
    fn press_inside_reports_container_relative_x() {
        let message = canvas(false).interpret(&mut None, &left_press(), BOUNDS, at(200.0, 250.0));
        assert!(matches!(
            message,
            Some(Message::PointerPressed { x, width }) if x == 100.0 && width == 400.0
        ));
    }

    #[test]
    fn press_outside_is_ignored() {
        let message = canvas(false).interpret(&mut None, &left_press(), BOUNDS, at(50.0, 250.0));
        assert!(message.is_none());
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let message =
            canvas(false).interpret(&mut None, &cursor_moved(200.0, 250.0), BOUNDS, at(200.0, 250.0));
        assert!(message.is_none());
    }

    #[test]
    fn move_inside_while_dragging_follows_cursor() {
        let message =
            canvas(true).interpret(&mut None, &cursor_moved(300.0, 250.0), BOUNDS, at(300.0, 250.0));
        assert!(matches!(message, Some(Message::PointerMoved { x, .. }) if x == 200.0));
    }

    #[test]
    fn leaving_the_container_while_dragging_ends_the_drag() {
        let message =
            canvas(true).interpret(&mut None, &cursor_moved(700.0, 250.0), BOUNDS, at(700.0, 250.0));
        assert!(matches!(message, Some(Message::PointerLeft)));
    }

    #[test]
    fn leaving_the_window_while_dragging_ends_the_drag() {
        let event = iced::Event::Mouse(mouse::Event::CursorLeft);
        let message = canvas(true).interpret(&mut None, &event, BOUNDS, mouse::Cursor::Unavailable);
        assert!(matches!(message, Some(Message::PointerLeft)));
    }

    #[test]
    fn touch_hit_test_uses_translated_cursor() {
        // Page scrolled: the raw finger position is outside the layout bounds,
        // the translated cursor is inside.
        let mut tracked = None;
        let event = finger(1, pressed, 150.0, 20.0);
        let message = canvas(false).interpret(&mut tracked, &event, BOUNDS, at(150.0, 200.0));
        assert!(matches!(message, Some(Message::PointerPressed { x, .. }) if x == 50.0));
        assert_eq!(tracked, Some(touch::Finger(1)));

        // And the reverse: raw position inside, translated cursor outside.
        let mut untracked = None;
        let event = finger(2, pressed, 150.0, 200.0);
        let message = canvas(false).interpret(&mut untracked, &event, BOUNDS, at(150.0, 900.0));
        assert!(message.is_none());
        assert!(untracked.is_none());
    }

    #[test]
    fn second_finger_is_ignored_while_one_is_tracked() {
        let mut tracked = Some(touch::Finger(1));
        let press = finger(2, pressed, 200.0, 200.0);
        assert!(canvas(true)
            .interpret(&mut tracked, &press, BOUNDS, at(200.0, 200.0))
            .is_none());

        let drag = finger(2, moved, 300.0, 200.0);
        assert!(canvas(true)
            .interpret(&mut tracked, &drag, BOUNDS, at(300.0, 200.0))
            .is_none());
        assert_eq!(tracked, Some(touch::Finger(1)));
    }

    #[test]
    fn lifting_the_tracked_finger_releases_and_clears() {
        let mut tracked = Some(touch::Finger(7));
        let drag = finger(7, moved, 300.0, 200.0);
        assert!(matches!(
            canvas(true).interpret(&mut tracked, &drag, BOUNDS, at(300.0, 200.0)),
            Some(Message::PointerMoved { x, .. }) if x == 200.0
        ));

        let lift = finger(7, lifted, 300.0, 200.0);
        let message = canvas(true).interpret(&mut tracked, &lift, BOUNDS, at(300.0, 200.0));
        assert!(matches!(message, Some(Message::PointerReleased)));
        assert!(tracked.is_none());
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn cover_rect_fills_wide_target_and_crops_height() {
        let rect = cover_rect(Size::new(100.0, 100.0), Size::new(400.0, 200.0));
        assert!(approx(rect.width, 400.0));
        assert!(approx(rect.height, 400.0));
        assert!(approx(rect.x, 0.0));
        assert!(approx(rect.y, -100.0));
    }

    #[test]
    fn cover_rect_fills_tall_target_and_crops_width() {
        let rect = cover_rect(Size::new(200.0, 100.0), Size::new(100.0, 100.0));
        assert!(approx(rect.height, 100.0));
        assert!(approx(rect.width, 200.0));
        assert!(approx(rect.x, -50.0));
        assert!(approx(rect.y, 0.0));
    }

    #[test]
    fn cover_rect_preserves_aspect_ratio() {
        let image = Size::new(1920.0, 1080.0);
        let rect = cover_rect(image, Size::new(640.0, 640.0));
        assert!(approx(rect.width / rect.height, image.width / image.height));
        assert!(rect.width >= 640.0 && rect.height >= 640.0);
    }

    #[test]
    fn cover_rect_with_empty_image_fills_target() {
        let target = Size::new(300.0, 150.0);
        let rect = cover_rect(Size::new(0.0, 0.0), target);
        assert_eq!(rect, Rectangle::new(Point::ORIGIN, target));
    }
}
