// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens for the console, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors, including the neon accents used for kinds and statuses
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (toasts, overlays, sidebar)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use issue2md_console::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::VOID
};

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
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Void surfaces
    pub const VOID: Color = Color::from_rgb(0.039, 0.039, 0.059); // #0a0a0f
    pub const VOID_BORDER: Color = Color::from_rgb(0.165, 0.165, 0.208); // #2a2a35

    // Neon accents
    pub const NEON_CYAN: Color = Color::from_rgb(0.0, 0.961, 1.0); // #00f5ff
    pub const NEON_GREEN: Color = Color::from_rgb(0.0, 1.0, 0.624); // #00ff9f
    pub const NEON_PINK: Color = Color::from_rgb(1.0, 0.0, 0.431); // #ff006e
    pub const NEON_AMBER: Color = Color::from_rgb(1.0, 0.667, 0.0); // #ffaa00
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Tinted fill behind kind icons and primary actions
    pub const TINT: f32 = 0.1;

    /// Accent borders
    pub const ACCENT_BORDER: f32 = 0.3;

    /// Modal backdrop
    pub const BACKDROP: f32 = 0.8;
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
    // Icon box
    pub const ICON_BOX: f32 = 40.0;

    // Component widths
    pub const SIDEBAR_WIDTH: f32 = 220.0;
    pub const TOAST_WIDTH: f32 = 380.0;

    /// Height of the toast countdown bar
    pub const PROGRESS_BAR_HEIGHT: f32 = 2.0;

    // Overlay max widths (small to extra-large)
    pub const OVERLAY_SM: f32 = 448.0;
    pub const OVERLAY_MD: f32 = 672.0;
    pub const OVERLAY_LG: f32 = 896.0;
    pub const OVERLAY_XL: f32 = 1152.0;

    /// Max height of an overlay body before it scrolls
    pub const OVERLAY_BODY_MAX_HEIGHT: f32 = 520.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale:
    //! - Titles: Large headings (pages, dialogs)
    //! - Body: Primary content text
    //! - Caption: Secondary, supporting text

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, stat values
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Dialog headers, section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Badges, timestamps
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Cards, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
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

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::OVERLAY_SM < sizing::OVERLAY_MD);
    assert!(sizing::OVERLAY_MD < sizing::OVERLAY_LG);
    assert!(sizing::OVERLAY_LG < sizing::OVERLAY_XL);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn neon_accents_are_saturated() {
        for color in [
            palette::NEON_CYAN,
            palette::NEON_GREEN,
            palette::NEON_PINK,
            palette::NEON_AMBER,
        ] {
            let max = color.r.max(color.g).max(color.b);
            assert!((max - 1.0).abs() < f32::EPSILON);
        }
    }
}
