// SPDX-License-Identifier: MPL-2.0
//! Interactive image pane.
//!
//! A canvas program that draws the current page aspect-fit inside its bounds,
//! translated by the pan offset and scaled about the pane center, and turns
//! raw pointer input into [`Gesture`]s.

use crate::domain::viewer::Offset;
use crate::media::PageImage;
use crate::ui::design_tokens::{opacity, palette, sizing};
use crate::ui::state::{Gesture, GestureState};
use crate::ui::viewer::component::Message;
use iced::widget::canvas::{self, Canvas};
use iced::{keyboard, mouse, touch, Color, Element, Length, Point, Rectangle, Size, Theme, Vector};
use std::time::Instant;

/// Approximate pixel height of one wheel line on touchpads reporting pixels.
const PIXELS_PER_LINE: f32 = 50.0;

/// Smallest scale handed to the renderer.
const MIN_DRAW_SCALE: f32 = 0.01;

/// Vertical drop of the shadow under the photo.
const SHADOW_OFFSET: f32 = 4.0;

/// What the pane draws this frame.
#[derive(Debug, Clone, Copy)]
pub struct ImagePane<'a> {
    pub image: Option<&'a PageImage>,
    pub scale: f32,
    pub offset: Offset,
    pub opacity: f32,
}

pub fn view<'a>(
    image: Option<&'a PageImage>,
    scale: f32,
    offset: Offset,
    opacity: f32,
) -> Element<'a, Message> {
    Canvas::new(ImagePane {
        image,
        scale,
        offset,
        opacity,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// Largest size with `aspect_ratio` that fits in `available` minus `padding`
/// on every side.
#[must_use]
pub fn fit_size(available: Size, aspect_ratio: f32, padding: f32) -> Size {
    let width = (available.width - 2.0 * padding).max(0.0);
    let height = (available.height - 2.0 * padding).max(0.0);

    if aspect_ratio <= 0.0 || width == 0.0 || height == 0.0 {
        return Size::ZERO;
    }

    if width / height > aspect_ratio {
        Size::new(height * aspect_ratio, height)
    } else {
        Size::new(width, width / aspect_ratio)
    }
}

/// Where the center of the drawn image ends up: the offset is applied
/// before scaling, so it grows with the zoom.
#[must_use]
pub fn displayed_center(pane_center: Point, scale: f32, offset: Offset) -> Point {
    pane_center + Vector::new(offset.x * scale, offset.y * scale)
}

impl canvas::Program<Message> for ImagePane<'_> {
    type State = GestureState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        let now = Instant::now();
        let gesture = match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                state.press(position, now)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => state.move_to(*position),
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                state.release()
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                cursor.position_over(bounds)?;
                let lines = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => *y,
                    mouse::ScrollDelta::Pixels { y, .. } => *y / PIXELS_PER_LINE,
                };
                state.wheel(lines)
            }
            iced::Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                // Left uncaptured.
                return state
                    .modifier_changed(modifiers.command())
                    .map(|gesture| Action::publish(Message::Gesture(gesture)));
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                state.finger_pressed(*id, *position, now)
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                state.finger_moved(*id, *position)
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => state.finger_lifted(*id),
            _ => None,
        };

        gesture.map(|gesture| Action::publish(Message::Gesture(gesture)).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let Some(image) = self.image else {
            return Vec::new();
        };
        let Some(aspect_ratio) = image.aspect_ratio() else {
            return Vec::new();
        };

        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let scale = self.scale.max(MIN_DRAW_SCALE);
        let fitted = fit_size(bounds.size(), aspect_ratio, sizing::IMAGE_PADDING);
        let size = Size::new(fitted.width * scale, fitted.height * scale);
        let center = displayed_center(frame.center(), scale, self.offset);
        let top_left = center - Vector::new(size.width / 2.0, size.height / 2.0);

        frame.fill_rectangle(
            top_left + Vector::new(0.0, SHADOW_OFFSET),
            size,
            Color {
                a: opacity::IMAGE_SHADOW * self.opacity,
                ..palette::BLACK
            },
        );
        frame.draw_image(
            Rectangle::new(top_left, size),
            canvas::Image::new(image.handle.clone()).opacity(self.opacity),
        );

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) && self.scale > 1.0 {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}
