// SPDX-License-Identifier: MPL-2.0
//! Dashboard screen: headline statistics and the recent activity feed.

use crate::app::i18n::fluent::I18n;
use crate::format::{self, RelativeTime};
use crate::mock::{self, Activity, Stat, Trend};
use crate::ui::components::page_header::page_header;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use chrono::{DateTime, Utc};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the dashboard.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Wall-clock time used for relative timestamps.
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Refresh,
    OpenActivity(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Refreshed,
    OpenIssue(u32),
}

/// Dashboard state: only remembers when the feed was last refreshed.
#[derive(Debug, Clone)]
pub struct State {
    refreshed_at: DateTime<Utc>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            refreshed_at: Utc::now(),
        }
    }
}

impl State {
    #[must_use]
    pub fn refreshed_at(&self) -> DateTime<Utc> {
        self.refreshed_at
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Refresh => {
                self.refreshed_at = Utc::now();
                Event::Refreshed
            }
            Message::OpenActivity(issue) => Event::OpenIssue(issue),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let refresh = button(Text::new(ctx.i18n.tr("dashboard-refresh")).size(typography::BODY_SM))
            .on_press(Message::Refresh)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::accent(palette::NEON_CYAN));

        let header = page_header(
            ctx.i18n.tr("dashboard-title"),
            ctx.i18n.tr("dashboard-subtitle"),
            Some(refresh.into()),
        );

        let stats = mock::STATS
            .iter()
            .fold(Row::new().spacing(spacing::MD), |row, stat| {
                row.push(stat_card(stat, ctx.i18n))
            });

        let activity = mock::RECENT_ACTIVITY.iter().fold(
            Column::new().spacing(spacing::XS),
            |column, entry| column.push(activity_row(entry, ctx.i18n, self.refreshed_at, ctx.now)),
        );

        let activity_panel = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(ctx.i18n.tr("dashboard-activity-title")).size(typography::TITLE_SM))
                .push(activity),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card);

        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(stats)
            .push(activity_panel)
            .into()
    }
}

fn stat_card<'a>(stat: &'a Stat, i18n: &I18n) -> Element<'a, Message> {
    let accent = stat.color;
    let (arrow, trend_color) = match stat.trend {
        Trend::Up => ("↗", palette::NEON_GREEN),
        Trend::Down => ("↘", palette::NEON_PINK),
    };

    let icon = Container::new(Text::new("■").size(typography::BODY))
        .width(Length::Fixed(sizing::ICON_BOX))
        .height(Length::Fixed(sizing::ICON_BOX))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tinted_box(accent));

    let change = Text::new(format!("{arrow} {}", stat.change))
        .size(typography::CAPTION)
        .style(move |_theme: &Theme| text::Style {
            color: Some(trend_color),
        });

    let top = Row::new()
        .align_y(alignment::Vertical::Top)
        .push(icon)
        .push(Container::new(change).width(Length::Fill).align_x(alignment::Horizontal::Right));

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr(stat.label_key))
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(styles::container::muted_text(theme)),
                }),
        )
        .push(Text::new(format::format_number(stat.value)).size(typography::TITLE_LG));

    Container::new(Column::new().spacing(spacing::MD).push(top).push(body))
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn activity_row<'a>(
    entry: &'a Activity,
    i18n: &I18n,
    refreshed_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Element<'a, Message> {
    let accent = entry.status.color();
    let happened_at = format::minutes_before(refreshed_at, entry.minutes_ago);
    let ago = RelativeTime::between(happened_at, now);

    let glyph = Container::new(Text::new(entry.status.glyph()).size(typography::BODY_SM))
        .width(Length::Fixed(sizing::ICON_BOX * 0.8))
        .height(Length::Fixed(sizing::ICON_BOX * 0.8))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tinted_box(accent));

    let description = Row::new()
        .spacing(spacing::XS)
        .push(
            Text::new(format!("#{}", entry.issue))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::NEON_CYAN),
                }),
        )
        .push(Text::new("/").size(typography::BODY_SM))
        .push(Text::new(i18n.tr(entry.kind.i18n_key())).size(typography::BODY_SM));

    let when = Text::new(i18n.tr_count(ago.i18n_key(), ago.count()))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(styles::container::muted_text(theme)),
        });

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(Column::new().spacing(spacing::XXS).push(description).push(when));

    button(content)
        .on_press(Message::OpenActivity(entry.issue))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::row)
        .into()
}
