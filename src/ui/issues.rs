// SPDX-License-Identifier: MPL-2.0
//! Issues screen: searchable issue table with conversion and export actions.

use crate::app::i18n::fluent::I18n;
use crate::mock::{self, Issue, IssueStatus};
use crate::ui::components::badge::{badge, label_color};
use crate::ui::components::empty_state::EmptyState;
use crate::ui::components::page_header::page_header;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Contextual data needed to render the issues screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    QueryChanged(String),
    ClearSearch,
    StatusFilter(Option<IssueStatus>),
    Open(u32),
    Convert(u32),
    Export,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenIssue(u32),
    Convert(u32),
    /// Export the currently visible issues.
    Export(Vec<u32>),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
    status: Option<IssueStatus>,
}

impl State {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn status_filter(&self) -> Option<IssueStatus> {
        self.status
    }

    /// Issues matching the current search and status filter.
    pub fn visible(&self) -> impl Iterator<Item = &'static Issue> + '_ {
        mock::filter_issues(&self.query, self.status)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Event::None
            }
            Message::ClearSearch => {
                self.query.clear();
                self.status = None;
                Event::None
            }
            Message::StatusFilter(status) => {
                self.status = status;
                Event::None
            }
            Message::Open(number) => Event::OpenIssue(number),
            Message::Convert(number) => Event::Convert(number),
            Message::Export => Event::Export(self.visible().map(|issue| issue.number).collect()),
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let export = button(Text::new(i18n.tr("issues-export")).size(typography::BODY_SM))
            .on_press(Message::Export)
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::accent(palette::NEON_CYAN));

        let header = page_header(
            i18n.tr("issues-title"),
            i18n.tr("issues-subtitle"),
            Some(export.into()),
        );

        let search = text_input(&i18n.tr("issues-search-placeholder"), &self.query)
            .on_input(Message::QueryChanged)
            .padding(spacing::XS)
            .size(typography::BODY_SM)
            .width(Length::FillPortion(2));

        let filters = std::iter::once(None)
            .chain(IssueStatus::ALL.into_iter().map(Some))
            .fold(Row::new().spacing(spacing::XS), |row, status| {
                let label = match status {
                    None => i18n.tr("issues-filter-all"),
                    Some(status) => i18n.tr(status.i18n_key()),
                };
                let selected = self.status == status;
                row.push(
                    button(Text::new(label).size(typography::CAPTION))
                        .on_press(Message::StatusFilter(status))
                        .padding([spacing::XXS, spacing::SM])
                        .style(styles::button::nav_item(selected)),
                )
            });

        let toolbar = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(search)
            .push(filters);

        let visible: Vec<&'static Issue> = self.visible().collect();
        let shown = visible.len().to_string();
        let total = mock::ISSUES.len().to_string();
        let footer = Text::new(i18n.tr_with_args(
            "issues-shown",
            &[("shown", shown.as_str()), ("total", total.as_str())],
        ))
        .size(typography::CAPTION)
        .style(|theme: &Theme| text::Style {
            color: Some(styles::container::muted_text(theme)),
        });

        let table: Element<'a, Message> = if visible.is_empty() {
            EmptyState::new("∅")
                .title(i18n.tr("issues-empty-title"))
                .message(i18n.tr("issues-empty-message"))
                .action(i18n.tr("issues-clear-search"), Message::ClearSearch)
                .view()
        } else {
            visible
                .into_iter()
                .fold(Column::new(), |column, issue| {
                    column
                        .push(issue_row(issue, i18n))
                        .push(rule::horizontal(1))
                })
                .into()
        };

        let panel = Container::new(Column::new().spacing(spacing::SM).push(table).push(footer))
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::card);

        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(toolbar)
            .push(panel)
            .into()
    }
}

fn issue_row<'a>(issue: &'static Issue, i18n: &I18n) -> Element<'a, Message> {
    let labels = issue
        .labels
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, label| {
            row.push(badge(*label, label_color(label)))
        });

    let summary = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(format!("#{}", issue.number))
                .size(typography::BODY)
                .width(Length::Fixed(56.0))
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::NEON_CYAN),
                }),
        )
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .width(Length::Fill)
                .push(Text::new(issue.title).size(typography::BODY))
                .push(labels),
        )
        .push(
            Text::new(issue.author)
                .size(typography::BODY_SM)
                .width(Length::Fixed(96.0)),
        )
        .push(
            Container::new(badge(i18n.tr(issue.status.i18n_key()), issue.status.color()))
                .width(Length::Fixed(96.0)),
        )
        .push(
            Text::new(issue.created)
                .size(typography::CAPTION)
                .width(Length::Fixed(84.0)),
        )
        .push(
            Text::new(format!("💬 {}", issue.comments))
                .size(typography::CAPTION)
                .width(Length::Fixed(48.0)),
        );

    let open = button(summary)
        .on_press(Message::Open(issue.number))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::row);

    let convert = button(Text::new(i18n.tr("issues-convert")).size(typography::CAPTION))
        .on_press(Message::Convert(issue.number))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(open)
        .push(convert)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_filters_visible_issues() {
        let mut state = State::default();
        state.update(Message::QueryChanged("search".into()));
        let numbers: Vec<u32> = state.visible().map(|i| i.number).collect();
        assert_eq!(numbers, [1841]);
    }

    #[test]
    fn clear_search_resets_filters() {
        let mut state = State::default();
        state.update(Message::QueryChanged("nothing matches this".into()));
        state.update(Message::StatusFilter(Some(IssueStatus::Merged)));
        state.update(Message::ClearSearch);

        assert!(state.query().is_empty());
        assert_eq!(state.status_filter(), None);
        assert_eq!(state.visible().count(), mock::ISSUES.len());
    }

    #[test]
    fn export_lists_visible_issues() {
        let mut state = State::default();
        state.update(Message::StatusFilter(Some(IssueStatus::Closed)));
        assert_eq!(state.update(Message::Export), Event::Export(vec![1844, 1840]));
    }

    #[test]
    fn row_actions_become_events() {
        let mut state = State::default();
        assert_eq!(state.update(Message::Open(1847)), Event::OpenIssue(1847));
        assert_eq!(state.update(Message::Convert(1844)), Event::Convert(1844));
    }

    #[test]
    fn view_renders_with_and_without_results() {
        let i18n = I18n::default();
        let mut state = State::default();
        let _ = state.view(ViewContext { i18n: &i18n });
        state.update(Message::QueryChanged("zzz".into()));
        let _ = state.view(ViewContext { i18n: &i18n });
    }
}
