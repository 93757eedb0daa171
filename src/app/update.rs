// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::error::Error;
use crate::ui::viewer;
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub viewer: &'a mut viewer::State,
    pub warning: &'a mut Option<String>,
}

pub fn handle_message(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Viewer(viewer_message) => handle_viewer_message(ctx, viewer_message),
        Message::Tick(now) => handle_viewer_message(ctx, viewer::Message::Tick(now)),
        Message::KeyPressed { key, modifiers } => match viewer::key_message(&key, modifiers) {
            Some(viewer_message) => handle_viewer_message(ctx, viewer_message),
            None => Task::none(),
        },
        Message::WindowOpened => handle_viewer_message(ctx, viewer::Message::Appeared),
        Message::DismissWarning => {
            *ctx.warning = None;
            Task::none()
        }
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    let now = match message {
        viewer::Message::Tick(now) => now,
        _ => Instant::now(),
    };

    match ctx.viewer.handle(message, now) {
        viewer::Effect::None => {}
        viewer::Effect::Transitioned(next) => {
            tracing::debug!(
                scale = next.scale,
                x = next.offset.x,
                y = next.offset.y,
                page = %next.page_index,
                drawer_open = next.is_drawer_open,
                "viewer transition"
            );
        }
        viewer::Effect::Rejected(err) => {
            let key = err.i18n_key();
            let err = Error::from(err);
            tracing::warn!(key, %err, "page selection ignored");
        }
    }

    Task::none()
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use crate::domain::viewer::{PageId, Pages};
    use crate::media::PageImages;
    use iced::keyboard::{Key, Modifiers};
    use std::path::PathBuf;

    fn viewer_state() -> viewer::State {
        viewer::State::new(
            Pages::default(),
            PageImages::default(),
            PathBuf::new(),
            &ViewerConfig::default(),
        )
    }

    #[test]
    fn key_press_is_routed_to_viewer() {
        let mut viewer = viewer_state();
        let mut warning = None;
        let mut ctx = UpdateContext {
            viewer: &mut viewer,
            warning: &mut warning,
        };

        let _ = handle_message(
            &mut ctx,
            Message::KeyPressed {
                key: Key::Character("+".into()),
                modifiers: Modifiers::empty(),
            },
        );
        assert_eq!(viewer.viewer().scale, 2.0);
    }

    #[test]
    fn rejected_page_keeps_state() {
        let mut viewer = viewer_state();
        let mut warning = None;
        let mut ctx = UpdateContext {
            viewer: &mut viewer,
            warning: &mut warning,
        };

        let _ = handle_message(
            &mut ctx,
            Message::Viewer(viewer::Message::SelectPage(PageId::new(0))),
        );
        assert_eq!(viewer.viewer().page_index, PageId::FIRST);
    }
}
