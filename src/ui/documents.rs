// SPDX-License-Identifier: MPL-2.0
//! Documents screen: grid of generated markdown files and folders.
//!
//! Deletion only removes the card from this session's list; the sample
//! table in [`crate::mock`] is never touched.

use crate::app::i18n::fluent::I18n;
use crate::format;
use crate::mock::{self, Document, DocumentKind};
use crate::ui::components::empty_state::EmptyState;
use crate::ui::components::page_header::page_header;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Cards per grid row.
const COLUMNS: usize = 4;

/// Longest name shown on a card before it is shortened.
const NAME_MAX_CHARS: usize = 28;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    QueryChanged(String),
    Open(u32),
    Download(u32),
    Delete(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Preview(u32),
    OpenFolder(u32),
    Download(u32),
    /// The user asked to delete a document; the host confirms first.
    DeleteRequested(u32),
}

#[derive(Debug, Clone)]
pub struct State {
    query: String,
    documents: Vec<&'static Document>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            query: String::new(),
            documents: mock::DOCUMENTS.iter().collect(),
        }
    }
}

impl State {
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u32) -> Option<&'static Document> {
        self.documents.iter().copied().find(|doc| doc.id == id)
    }

    /// Removes a document from the list, returning it if it was present.
    pub fn remove(&mut self, id: u32) -> Option<&'static Document> {
        let index = self.documents.iter().position(|doc| doc.id == id)?;
        Some(self.documents.remove(index))
    }

    /// Documents whose name contains the search query (case-insensitive).
    pub fn visible(&self) -> impl Iterator<Item = &'static Document> + '_ {
        let query = self.query.trim().to_lowercase();
        self.documents
            .iter()
            .copied()
            .filter(move |doc| query.is_empty() || doc.name.to_lowercase().contains(&query))
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Event::None
            }
            Message::Open(id) => match self.get(id) {
                Some(doc) if doc.is_folder() => Event::OpenFolder(id),
                Some(_) => Event::Preview(id),
                None => Event::None,
            },
            Message::Download(id) if self.get(id).is_some() => Event::Download(id),
            Message::Delete(id) if self.get(id).is_some() => Event::DeleteRequested(id),
            Message::Download(_) | Message::Delete(_) => Event::None,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let count = self.documents.len().to_string();
        let header = page_header(
            i18n.tr("documents-title"),
            i18n.tr_with_args("documents-subtitle", &[("count", count.as_str())]),
            None,
        );

        let search = text_input(&i18n.tr("documents-search-placeholder"), &self.query)
            .on_input(Message::QueryChanged)
            .padding(spacing::XS)
            .size(typography::BODY_SM);

        let visible: Vec<&'static Document> = self.visible().collect();
        let grid: Element<'a, Message> = if visible.is_empty() {
            EmptyState::new("▤")
                .accent(palette::NEON_AMBER)
                .title(i18n.tr("documents-empty-title"))
                .message(i18n.tr("documents-empty-message"))
                .view()
        } else {
            visible
                .chunks(COLUMNS)
                .fold(Column::new().spacing(spacing::MD), |column, chunk| {
                    let row = chunk
                        .iter()
                        .fold(Row::new().spacing(spacing::MD), |row, doc| {
                            row.push(document_card(*doc, i18n))
                        });
                    // Pad the last row so cards keep their width.
                    let row = (chunk.len()..COLUMNS).fold(row, |row, _| {
                        row.push(Space::new().width(Length::FillPortion(1)))
                    });
                    column.push(row)
                })
                .into()
        };

        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(search)
            .push(grid)
            .into()
    }
}

fn document_card<'a>(doc: &'static Document, i18n: &I18n) -> Element<'a, Message> {
    let (glyph, accent, detail) = match doc.kind {
        DocumentKind::Folder { items } => (
            "▣",
            palette::NEON_AMBER,
            i18n.tr_count("documents-folder-items", i64::from(items)),
        ),
        DocumentKind::Markdown { size_bytes } => (
            "▤",
            palette::NEON_CYAN,
            format::format_file_size(size_bytes),
        ),
    };

    let icon = Container::new(Text::new(glyph).size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::ICON_BOX))
        .height(Length::Fixed(sizing::ICON_BOX))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::tinted_box(accent));

    let muted = |theme: &Theme| text::Style {
        color: Some(styles::container::muted_text(theme)),
    };

    let summary = Column::new()
        .spacing(spacing::XS)
        .push(icon)
        .push(Text::new(format::truncate(doc.name, NAME_MAX_CHARS)).size(typography::BODY))
        .push(Text::new(detail).size(typography::CAPTION).style(muted))
        .push(Text::new(doc.modified).size(typography::CAPTION).style(muted));

    let open = button(summary)
        .on_press(Message::Open(doc.id))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(styles::button::row);

    let mut actions = Row::new().spacing(spacing::XS);
    if !doc.is_folder() {
        actions = actions.push(small_button(
            i18n.tr("documents-download"),
            Message::Download(doc.id),
            None,
        ));
    }
    actions = actions.push(small_button(
        i18n.tr("documents-delete"),
        Message::Delete(doc.id),
        Some(palette::NEON_PINK),
    ));

    Container::new(Column::new().spacing(spacing::XS).push(open).push(actions))
        .width(Length::FillPortion(1))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

fn small_button<'a>(label: String, message: Message, accent: Option<Color>) -> Element<'a, Message> {
    let base = button(Text::new(label).size(typography::CAPTION))
        .on_press(message)
        .padding([spacing::XXS, spacing::SM]);
    match accent {
        Some(color) => base.style(styles::button::accent(color)).into(),
        None => base.style(styles::button::secondary).into(),
    }
}
