// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the viewer's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_pinch::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a material background
let material = Color {
    a: opacity::MATERIAL,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Frosted panels over the photo (control bar, drawer, info panel).
    pub const MATERIAL: f32 = 0.55;

    /// Drop shadow under the photo.
    pub const IMAGE_SHADOW: f32 = 0.2;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Glyph size of the control bar buttons.
    pub const CONTROL_ICON: f32 = 36.0;

    /// Height of the drawer handle chevron.
    pub const DRAWER_HANDLE_HEIGHT: f32 = 40.0;

    /// Full width of the slid-out drawer.
    pub const DRAWER_WIDTH: f32 = 260.0;

    /// Width still visible when the drawer is closed (the handle).
    pub const DRAWER_PEEK_WIDTH: f32 = 45.0;

    /// Gap between an open drawer and the window edge.
    pub const DRAWER_OPEN_INSET: f32 = 20.0;

    /// Width of a drawer thumbnail.
    pub const THUMBNAIL_WIDTH: f32 = 80.0;

    /// Margin between the photo and the window edges when unzoomed.
    pub const IMAGE_PADDING: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Control bar glyphs.
    pub const ICON: f32 = super::sizing::CONTROL_ICON;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Info panel values
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::MATERIAL > 0.0 && opacity::MATERIAL < 1.0);

    // Drawer validation
    assert!(sizing::DRAWER_PEEK_WIDTH < sizing::DRAWER_WIDTH);
    assert!(sizing::THUMBNAIL_WIDTH < sizing::DRAWER_WIDTH);

    // Typography validation
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
