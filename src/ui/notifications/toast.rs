// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are small cards with a kind-colored accent, an optional action row
//! and, for expiring notifications, a countdown bar along the bottom edge.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::ui::design_tokens::{border, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Resolution of the countdown bar, in portions.
const PROGRESS_STEPS: f32 = 1000.0;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast.
    ///
    /// `remaining` is the fraction of lifetime left, `None` for persistent
    /// notifications (no countdown bar).
    pub fn view<A>(notification: &Notification<A>, remaining: Option<f32>) -> Element<'_, Message> {
        let kind = notification.kind();
        let accent_color = kind.color();
        let id = notification.id();

        let icon = Container::new(Text::new(kind.glyph()).size(typography::BODY))
            .width(Length::Fixed(sizing::ICON_BOX))
            .height(Length::Fixed(sizing::ICON_BOX))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::tinted_box(accent_color));

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);
        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent_color),
                    }),
            );
        }
        if let Some(message) = notification.message() {
            body = body.push(
                Text::new(message)
                    .size(typography::BODY_SM)
                    .style(|theme: &Theme| text::Style {
                        color: Some(styles::container::muted_text(theme)),
                    }),
            );
        }

        if !notification.actions().is_empty() {
            let actions = notification.actions().iter().enumerate().fold(
                Row::new().spacing(spacing::XS),
                |row, (index, action)| {
                    let label = Text::new(action.label()).size(typography::CAPTION);
                    let button = button(label)
                        .on_press(Message::Invoke { id, index })
                        .padding([spacing::XXS, spacing::SM]);
                    let button = if action.is_primary() {
                        button.style(styles::button::accent(accent_color))
                    } else {
                        button.style(styles::button::secondary)
                    };
                    row.push(button)
                },
            );
            body = body.push(Space::new().height(spacing::XXS)).push(actions);
        }

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Message::Dismiss(id))
            .padding([0.0, spacing::XS])
            .style(styles::button::ghost);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Top)
            .push(icon)
            .push(body)
            .push(dismiss_button);

        let mut card = Column::new().push(Container::new(content).padding(spacing::MD));
        if let Some(fraction) = remaining {
            card = card.push(progress_bar(fraction, accent_color));
        }

        Container::new(card)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .clip(true)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders every live notification of `manager`.
    ///
    /// Toasts are stacked in the top-right corner, newest at the bottom.
    pub fn view_overlay<A>(manager: &Manager<A>, now: Instant) -> Element<'_, Message> {
        if manager.is_empty() {
            return Space::new().width(Length::Shrink).height(Length::Shrink).into();
        }

        let toasts = manager.entries().map(|notification| {
            Self::view(
                notification,
                manager.remaining_fraction(notification.id(), now),
            )
        });

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

/// Countdown bar: a filled segment proportional to `fraction` over a track.
fn progress_bar<'a>(fraction: f32, accent: Color) -> Element<'a, Message> {
    let (filled, rest) = bar_portions(fraction);
    let height = Length::Fixed(sizing::PROGRESS_BAR_HEIGHT);
    let track = Color {
        a: 0.15,
        ..palette::GRAY_400
    };

    let mut row = Row::new().width(Length::Fill).height(height);
    if filled > 0 {
        row = row.push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(height)
                .style(styles::container::bar(accent)),
        );
    }
    if rest > 0 {
        row = row.push(
            container(Space::new())
                .width(Length::FillPortion(rest))
                .height(height)
                .style(styles::container::bar(track)),
        );
    }
    row.into()
}

/// Splits the bar into (filled, remaining) portions.
fn bar_portions(fraction: f32) -> (u16, u16) {
    let filled = (fraction.clamp(0.0, 1.0) * PROGRESS_STEPS).round() as u16;
    (filled, PROGRESS_STEPS as u16 - filled)
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(iced::Background::Color(palette.background.base.color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = Kind::Warning.color();
        let style = toast_container_style(&Theme::Dark, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn bar_portions_follow_fraction() {
        assert_eq!(bar_portions(1.0), (1000, 0));
        assert_eq!(bar_portions(0.25), (250, 750));
        assert_eq!(bar_portions(0.0), (0, 1000));
    }

    #[test]
    fn bar_portions_clamp_out_of_range() {
        assert_eq!(bar_portions(1.5), (1000, 0));
        assert_eq!(bar_portions(-0.5), (0, 1000));
    }
}
