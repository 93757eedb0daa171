// SPDX-License-Identifier: MPL-2.0
//! Thumbnail drawer on the right edge of the viewer.
//!
//! The drawer slides between a peeking handle and its full width. Slide
//! progress comes from the viewer component as a value in `[0, 1]`.

use crate::domain::viewer::{Page, PageId, Pages};
use crate::i18n::fluent::I18n;
use crate::media::PageImages;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::widget::{button, container, image, scrollable, tooltip, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub pages: &'a Pages,
    pub images: &'a PageImages,
    pub current: PageId,
    pub is_open: bool,
    /// 0.0 closed, 1.0 open.
    pub progress: f32,
}

/// Width of the drawer on screen for a given slide progress.
#[must_use]
pub fn visible_width(progress: f32) -> f32 {
    let open = sizing::DRAWER_WIDTH - sizing::DRAWER_OPEN_INSET;
    let closed = sizing::DRAWER_PEEK_WIDTH;
    closed + (open - closed) * progress.clamp(0.0, 1.0)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let (chevron, hint) = if ctx.is_open {
        ("›", ctx.i18n.tr("drawer-close"))
    } else {
        ("‹", ctx.i18n.tr("drawer-open"))
    };

    let handle = tooltip(
        button(Text::new(chevron).size(typography::ICON))
            .on_press(Message::ToggleDrawer)
            .height(Length::Fixed(sizing::DRAWER_HANDLE_HEIGHT))
            .padding([0.0, spacing::XS])
            .style(styles::button::control),
        container(Text::new(hint).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(styles::container::material(radius::MD)),
        tooltip::Position::Left,
    );

    let thumbnails = ctx.pages.iter().fold(
        Column::new().spacing(spacing::SM).padding(spacing::XS),
        |column, page| {
            column.push(thumbnail(
                page,
                ctx.images,
                page.id == ctx.current,
                ctx.progress,
            ))
        },
    );

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(
            container(handle).center_x(Length::Fixed(sizing::DRAWER_PEEK_WIDTH)),
        )
        .push(
            container(scrollable(thumbnails))
                .width(Length::Fill)
                .clip(true),
        );

    container(row)
        .width(Length::Fixed(visible_width(ctx.progress)))
        .padding([spacing::XS, 0.0])
        .clip(true)
        .style(styles::container::material(radius::LG))
        .into()
}

fn thumbnail<'a>(
    page: &'a Page,
    images: &'a PageImages,
    selected: bool,
    opacity: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match images.thumbnail(page) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .opacity(opacity)
            .into(),
        None => Text::new(page.image_name.as_str())
            .size(typography::CAPTION)
            .width(Length::Fixed(sizing::THUMBNAIL_WIDTH))
            .into(),
    };

    button(content)
        .on_press(Message::SelectPage(page.id))
        .padding(spacing::XXS)
        .style(styles::button::thumbnail(selected))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_drawer_only_shows_the_handle() {
        assert_eq!(visible_width(0.0), sizing::DRAWER_PEEK_WIDTH);
    }

    #[test]
    fn open_drawer_keeps_inset_off_screen() {
        assert_eq!(
            visible_width(1.0),
            sizing::DRAWER_WIDTH - sizing::DRAWER_OPEN_INSET
        );
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(visible_width(-1.0), visible_width(0.0));
        assert_eq!(visible_width(1.2), visible_width(1.0));
    }
}
