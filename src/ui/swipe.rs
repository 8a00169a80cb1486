use iced::alignment;
use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Program};
use iced::{Color, Pixels, Point, Rectangle, Renderer, Theme};

use crate::Message;

/// Transparent canvas laid over the photo that forwards swipe coordinates.
///
/// Touch fingers and left-button drags both count as swipes. Only the
/// x-coordinates are forwarded; interpretation happens in `SwipeTracker`.
pub struct SwipeArea {
    /// Draw the "swipe" hint along the bottom edge
    pub show_hint: bool,
}

impl Program<Message> for SwipeArea {
    type State = DragState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        if !self.show_hint {
            return vec![];
        }

        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_text(canvas::Text {
            content: "‹ swipe ›".to_string(),
            position: Point::new(bounds.width / 2.0, bounds.height - 14.0),
            color: Color::from_rgba(1.0, 1.0, 1.0, 0.5),
            size: Pixels(14.0),
            horizontal_alignment: alignment::Horizontal::Center,
            vertical_alignment: alignment::Vertical::Center,
            ..canvas::Text::default()
        });
        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Finger down inside the photo - start tracking
            canvas::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                if bounds.contains(position) {
                    state.is_dragging = true;
                    return (canvas::event::Status::Captured, Some(Message::SwipeStart(position.x)));
                }
            }

            canvas::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                if state.is_dragging {
                    state.is_dragging = false;
                    return (canvas::event::Status::Captured, Some(Message::SwipeEnd(position.x)));
                }
            }

            canvas::Event::Touch(touch::Event::FingerLost { .. }) => {
                if state.is_dragging {
                    state.is_dragging = false;
                    return (canvas::event::Status::Captured, Some(Message::SwipeCancel));
                }
            }

            // Mouse drag behaves like a swipe on desktop
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position_over(bounds) {
                    state.is_dragging = true;
                    return (canvas::event::Status::Captured, Some(Message::SwipeStart(position.x)));
                }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if state.is_dragging {
                    state.is_dragging = false;
                    let message = match cursor.position() {
                        Some(position) => Message::SwipeEnd(position.x),
                        None => Message::SwipeCancel,
                    };
                    return (canvas::event::Status::Captured, Some(message));
                }
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }
}

/// State for drag interactions
#[derive(Debug, Clone, Default)]
pub struct DragState {
    pub is_dragging: bool,
}
