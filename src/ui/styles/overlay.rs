// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for modal backdrops, dialog cards and their headers.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Translucent backdrop covering the window behind a modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..palette::VOID
        })),
        ..Default::default()
    }
}

/// Dialog card surface.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::LG,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dialog header strip, slightly elevated from the card body.
pub fn header(theme: &Theme) -> container::Style {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert!(color.a > 0.0 && color.a < 1.0);
            }
            other => panic!("expected color background, got {other:?}"),
        }
    }
}
