// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Chrome buttons sitting on a material panel: no fill until hovered.
pub fn control(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let tint = if theme.extended_palette().is_dark {
        WHITE
    } else {
        BLACK
    };

    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..tint })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Drawer thumbnail; the current page gets a brand-colored frame.
pub fn thumbnail(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let border_color = match (selected, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => Color::TRANSPARENT,
        };

        button::Style {
            background: None,
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                color: border_color,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_is_transparent_at_rest() {
        let style = control(&Theme::Dark, button::Status::Active);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected a color background");
        };
        assert_eq!(color.a, opacity::TRANSPARENT);
    }

    #[test]
    fn control_highlights_on_hover() {
        let style = control(&Theme::Light, button::Status::Hovered);
        let Some(Background::Color(color)) = style.background else {
            panic!("expected a color background");
        };
        assert_eq!(color.a, opacity::OVERLAY_SUBTLE);
    }

    #[test]
    fn selected_thumbnail_has_brand_border() {
        let style = thumbnail(true)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, palette::PRIMARY_500);

        let style = thumbnail(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }
}
