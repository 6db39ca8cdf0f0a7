// SPDX-License-Identifier: MPL-2.0
//! Placeholder shown when a list has nothing to display.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::empty_state::EmptyState;
//!
//! EmptyState::new("∅")
//!     .title("No matching issues")
//!     .message("Try another search term.")
//!     .action("Clear search", Message::ClearSearch)
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct EmptyState<Message> {
    glyph: &'static str,
    accent: Color,
    title: Option<String>,
    message: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> EmptyState<Message> {
    pub fn new(glyph: &'static str) -> Self {
        Self {
            glyph,
            accent: palette::NEON_CYAN,
            title: None,
            message: None,
            action: None,
        }
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = self.accent;

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(
                Text::new(self.glyph)
                    .size(typography::TITLE_LG)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            );

        if let Some(title) = self.title {
            content = content.push(Text::new(title).size(typography::TITLE_SM));
        }

        if let Some(message) = self.message {
            content = content.push(Text::new(message).size(typography::BODY_SM).style(
                |theme: &Theme| text::Style {
                    color: Some(styles::container::muted_text(theme)),
                },
            ));
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(message)
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::accent(accent)),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Clear,
    }

    #[test]
    fn builder_sets_fields() {
        let state = EmptyState::new("∅")
            .title("Nothing")
            .message("Try again")
            .action("Clear", TestMessage::Clear);

        assert_eq!(state.title.as_deref(), Some("Nothing"));
        assert_eq!(state.message.as_deref(), Some("Try again"));
        assert!(matches!(state.action, Some((_, TestMessage::Clear))));
        let _element = state.view();
    }
}
