// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent panel floating over the photo (control bar, drawer, info panel).
///
/// The tint follows the active Iced `Theme` background so the chrome stays
/// readable in both light and dark modes.
pub fn material(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;

        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::MATERIAL,
                ..base
            })),
            text_color: Some(palette.background.base.text),
            border: Border {
                radius: rad.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_is_translucent_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let style = material(8.0)(&theme);
            let Some(Background::Color(color)) = style.background else {
                panic!("expected a color background");
            };
            assert_eq!(color.a, opacity::MATERIAL);
        }
    }
}
