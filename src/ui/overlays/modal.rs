// SPDX-License-Identifier: MPL-2.0
//! Modal rendering for the overlay stack.
//!
//! Each overlay becomes one full-window layer: a translucent backdrop that
//! reports presses, with the card centered on top. Layers are stacked in
//! opening order so the newest overlay is drawn last.
//!
//! The header row is drawn only when the overlay has a title or a close
//! button. An untitled, non-closable overlay shows its body alone.

use super::manager::{Manager, Message};
use super::overlay::{Overlay, OverlayId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, container, mouse_area, opaque, scrollable, Column, Container, Row, Space,
    Stack, Text,
};
use iced::{alignment, Element, Length};

/// Layers every open overlay of `manager` over `base`.
///
/// `render` turns an overlay's id and content descriptor into widgets; `on_message`
/// lifts modal messages into the host's message type.
pub fn view<'a, V, M, R, F>(
    base: Element<'a, M>,
    manager: &'a Manager<V>,
    render: R,
    on_message: F,
) -> Element<'a, M>
where
    M: Clone + 'a,
    R: Fn(OverlayId, &'a V) -> Element<'a, M>,
    F: Fn(Message) -> M,
{
    if manager.is_empty() {
        return base;
    }

    manager
        .entries()
        .fold(Stack::new().push(base), |stack, overlay| {
            stack.push(layer(overlay, &render, &on_message))
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn layer<'a, V, M, R, F>(overlay: &'a Overlay<V>, render: &R, on_message: &F) -> Element<'a, M>
where
    M: Clone + 'a,
    R: Fn(OverlayId, &'a V) -> Element<'a, M>,
    F: Fn(Message) -> M,
{
    let id = overlay.id();

    let content: Element<'a, M> = match overlay.view() {
        Some(view) => render(id, view),
        None => Space::new().into(),
    };
    let body = container(scrollable(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG),
    ));

    let mut column = Column::new();
    if has_header(overlay) {
        column = column.push(header(overlay, on_message));
    }

    let card = match overlay.size().max_width() {
        Some(max_width) => {
            Container::new(column.push(body.max_height(sizing::OVERLAY_BODY_MAX_HEIGHT)))
                .width(Length::Fill)
                .max_width(max_width)
        }
        None => Container::new(column.push(body.height(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill),
    }
    .style(styles::overlay::card);

    opaque(
        mouse_area(
            center(opaque(card))
                .padding(spacing::LG)
                .style(styles::overlay::backdrop),
        )
        .on_press(on_message(Message::BackdropPressed(id))),
    )
}

/// Whether the overlay gets a header row.
fn has_header<V>(overlay: &Overlay<V>) -> bool {
    overlay.title().is_some() || overlay.is_closable()
}

fn header<'a, V, M, F>(overlay: &'a Overlay<V>, on_message: &F) -> Element<'a, M>
where
    M: Clone + 'a,
    F: Fn(Message) -> M,
{
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(overlay.title().unwrap_or_default())
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        );
    if overlay.is_closable() {
        header = header.push(
            button(Text::new("×").size(typography::TITLE_SM))
                .on_press(on_message(Message::ClosePressed(overlay.id())))
                .padding([0.0, spacing::XS])
                .style(styles::button::ghost),
        );
    }
    Container::new(header)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::overlay::header)
        .into()
}
