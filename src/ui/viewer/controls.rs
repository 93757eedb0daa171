// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: zoom out, reset and zoom in buttons.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use iced::{
    alignment::Vertical,
    widget::{button, container, Row, Text},
    Element,
};

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let zoom_out_button = control_button(ctx.i18n.tr("controls-zoom-out"), Message::ZoomOut);
    let reset_button = control_button(ctx.i18n.tr("controls-reset"), Message::Reset);
    let zoom_in_button = control_button(ctx.i18n.tr("controls-zoom-in"), Message::ZoomIn);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(zoom_out_button)
        .push(reset_button)
        .push(zoom_in_button);

    container(row)
        .padding(spacing::XS)
        .style(styles::container::material(radius::FULL))
        .into()
}

fn control_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::control)
        .into()
}
