// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Pointer and touch input is handled by the image pane itself; only
//! keyboard shortcuts and animation frames are subscribed to here.

use super::Message;
use crate::ui::viewer;
use iced::{event, keyboard, window, Subscription};

/// Forwards key presses that no widget captured.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }),
            event::Status::Ignored,
        ) => Some(Message::KeyPressed { key, modifiers }),
        _ => None,
    })
}

/// Frame ticks, only while the viewer is easing toward its target.
pub fn create_frame_subscription(viewer: &viewer::State) -> Subscription<Message> {
    if viewer.needs_frames() {
        window::frames().map(Message::Tick)
    } else {
        Subscription::none()
    }
}
