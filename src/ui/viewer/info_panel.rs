// SPDX-License-Identifier: MPL-2.0
//! Info panel showing the live scale, offset and page position.

use crate::domain::viewer::{Offset, PageId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::Message;
use fluent_bundle::FluentValue;
use iced::widget::{button, container, tooltip, Column, Row, Text};
use iced::{alignment::Vertical, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub visible: bool,
    pub scale: f32,
    pub offset: Offset,
    pub page: PageId,
    pub page_count: usize,
}

/// Formats a value the way the panel shows it.
#[must_use]
pub fn format_value(value: f32) -> String {
    // Avoid "-0.00" while the offset eases back to zero.
    let value = if value.abs() < 0.005 { 0.0 } else { value };
    format!("{value:.2}")
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let toggle = tooltip(
        button(Text::new("i").size(typography::BODY))
            .on_press(Message::ToggleInfoPanel)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::control),
        container(Text::new(ctx.i18n.tr("info-toggle-tooltip")).size(typography::CAPTION))
            .padding(spacing::XS)
            .style(styles::container::material(radius::MD)),
        tooltip::Position::Bottom,
    );

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(toggle);

    if ctx.visible {
        let scale = ctx
            .i18n
            .tr_with_args("info-scale", &[("scale", FluentValue::from(format_value(ctx.scale)))]);
        let offset = ctx.i18n.tr_with_args(
            "info-offset",
            &[
                ("x", FluentValue::from(format_value(ctx.offset.x))),
                ("y", FluentValue::from(format_value(ctx.offset.y))),
            ],
        );
        let page = ctx.i18n.tr_with_args(
            "info-page",
            &[
                ("index", FluentValue::from(ctx.page.to_string())),
                ("count", FluentValue::from(ctx.page_count.to_string())),
            ],
        );

        let values = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(scale).size(typography::CAPTION))
            .push(Text::new(offset).size(typography::CAPTION))
            .push(Text::new(page).size(typography::CAPTION));
        row = row.push(values);
    }

    container(row)
        .padding(spacing::XS)
        .style(styles::container::material(radius::LG))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_uses_two_decimals() {
        assert_eq!(format_value(2.5), "2.50");
        assert_eq!(format_value(-12.5), "-12.50");
    }

    #[test]
    fn format_value_hides_negative_zero() {
        assert_eq!(format_value(-0.001), "0.00");
    }
}
