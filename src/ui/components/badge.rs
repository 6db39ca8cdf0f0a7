// SPDX-License-Identifier: MPL-2.0
//! Small tinted label for statuses and issue labels.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{Color, Element};

/// Renders `label` inside a box tinted with `color`.
pub fn badge<'a, Message: 'a>(label: impl Into<String>, color: Color) -> Element<'a, Message> {
    Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding([2.0, spacing::XS])
        .style(styles::container::tinted_box(color))
        .into()
}

/// Accent used for an issue label.
#[must_use]
pub fn label_color(label: &str) -> Color {
    match label {
        "feature" | "ui" => palette::NEON_CYAN,
        "bug" | "high-priority" | "security" => palette::NEON_PINK,
        "enhancement" | "bug-fix" => palette::NEON_GREEN,
        "docs" | "performance" => palette::NEON_AMBER,
        _ => palette::GRAY_400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_get_accents() {
        assert_eq!(label_color("bug"), palette::NEON_PINK);
        assert_eq!(label_color("feature"), palette::NEON_CYAN);
        assert_eq!(label_color("unheard-of"), palette::GRAY_400);
    }
}
