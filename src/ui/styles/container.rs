// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for stat tiles, list panels and settings sections.
///
/// Derived from the active theme background so cards stay readable in both
/// light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Navigation sidebar.
pub fn sidebar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Small tinted box holding a glyph or badge text.
pub fn tinted_box(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..accent
        })),
        border: Border {
            color: Color {
                a: opacity::ACCENT_BORDER,
                ..accent
            },
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

/// Solid bar segment (progress fills and separators).
pub fn bar(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Muted caption text color for the current theme.
#[must_use]
pub fn muted_text(theme: &Theme) -> Color {
    if theme.extended_palette().is_dark {
        palette::GRAY_400
    } else {
        palette::GRAY_700
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tinted_box_uses_accent_for_text_and_border() {
        let style = tinted_box(palette::NEON_AMBER)(&Theme::Dark);
        assert_eq!(style.text_color, Some(palette::NEON_AMBER));
        assert_eq!(style.border.color.r, palette::NEON_AMBER.r);
        assert!(style.border.color.a < 1.0);
    }

    #[test]
    fn card_has_border() {
        let style = card(&Theme::Light);
        assert!(style.border.width > 0.0);
        assert!(style.background.is_some());
    }
}
