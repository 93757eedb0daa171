// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::{self, ViewEnv};
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: &'a viewer::State,
    pub warning: Option<&'a str>,
}

/// Renders the viewer, with the settings warning banner above it if any.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewer_content = ctx
        .viewer
        .view(ViewEnv { i18n: ctx.i18n })
        .map(Message::Viewer);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.warning {
        column = column.push(warning_banner(ctx.i18n, key));
    }
    column = column.push(viewer_content);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn warning_banner<'a>(i18n: &'a I18n, key: &str) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(i18n.tr(key))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::BODY))
                .on_press(Message::DismissWarning)
                .style(styles::button::control),
        );

    container(row)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .style(styles::container::material(radius::NONE))
        .into()
}
