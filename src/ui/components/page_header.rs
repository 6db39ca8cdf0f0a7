// SPDX-License-Identifier: MPL-2.0
//! Screen title row with an optional trailing control.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub fn page_header<'a, Message: 'a>(
    title: String,
    subtitle: String,
    trailing: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(
            Text::new(subtitle)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(styles::container::muted_text(theme)),
                }),
        );

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(heading);
    if let Some(trailing) = trailing {
        row = row.push(trailing);
    }
    row.into()
}
