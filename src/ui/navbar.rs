// SPDX-License-Identifier: MPL-2.0
//! Navigation sidebar for app-level navigation.
//!
//! Lists the screens, highlights the current one and shows how many toasts
//! and overlays are live.

use crate::app::i18n::fluent::I18n;
use crate::app::Screen;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text, Column, Container, Row, Space, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    pub live_notifications: usize,
    pub open_overlays: usize,
}

/// Messages emitted by the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Navigate(target) if target != current => Event::Navigate(target),
        Message::Navigate(_) => Event::None,
    }
}

/// Render the sidebar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(ctx.i18n.tr("app-name"))
                .size(typography::TITLE_MD)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::NEON_CYAN),
                }),
        )
        .push(
            Text::new(ctx.i18n.tr("app-tagline"))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(styles::container::muted_text(theme)),
                }),
        );

    let items = Screen::ALL
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, screen| {
            let label = Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(Text::new(screen.glyph()).size(typography::BODY))
                .push(Text::new(ctx.i18n.tr(screen.i18n_key())).size(typography::BODY));
            column.push(
                button(label)
                    .on_press(Message::Navigate(screen))
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::nav_item(screen == ctx.current)),
            )
        });

    let toasts = ctx.live_notifications.to_string();
    let overlays = ctx.open_overlays.to_string();
    let status = Text::new(ctx.i18n.tr_with_args(
        "sidebar-stack-status",
        &[("toasts", toasts.as_str()), ("overlays", overlays.as_str())],
    ))
    .size(typography::CAPTION)
    .style(|theme: &Theme| text::Style {
        color: Some(styles::container::muted_text(theme)),
    });

    let content = Column::new()
        .spacing(spacing::LG)
        .height(Length::Fill)
        .push(brand)
        .push(items)
        .push(Space::new().height(Length::Fill))
        .push(status);

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::sidebar)
        .into()
}
