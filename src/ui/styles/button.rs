// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn tinted(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Outlined button filled with a faint tint of `accent`.
///
/// Used for primary toast actions, confirm buttons and the current nav item.
pub fn accent(accent: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match status {
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            button::Status::Pressed => opacity::ACCENT_BORDER,
            button::Status::Active | button::Status::Disabled => opacity::TINT,
        };
        let text_color = if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            accent
        };

        button::Style {
            background: Some(Background::Color(tinted(accent, fill))),
            text_color,
            border: Border {
                color: tinted(accent, opacity::ACCENT_BORDER),
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Secondary outlined button that adapts to the theme's text color.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_400,
        button::Status::Active | button::Status::Disabled => palette::VOID_BORDER,
    };
    let text_color = match status {
        button::Status::Disabled => palette::GRAY_400,
        _ => base.text,
    };

    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless icon button (dismiss and close crosses).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette::GRAY_400,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(tinted(
                palette::GRAY_400,
                opacity::OVERLAY_SUBTLE,
            ))),
            text_color: base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: tinted(base.text, opacity::OVERLAY_MEDIUM),
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Flat list row (issue rows, activity entries, documents).
pub fn row(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(tinted(
            palette::NEON_CYAN,
            opacity::TINT / 2.0,
        ))),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation item style depending on whether it is the current screen.
pub fn nav_item(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            accent(palette::NEON_CYAN)(theme, status)
        } else {
            let mut style = row(theme, status);
            style.text_color = match status {
                button::Status::Hovered | button::Status::Pressed => theme.palette().text,
                _ => palette::GRAY_400,
            };
            style
        }
    }
}
