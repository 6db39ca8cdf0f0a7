// SPDX-License-Identifier: MPL-2.0
//! Dialog contents rendered inside overlays.
//!
//! A [`Dialog`] is the content descriptor stored in the overlay stack. It knows
//! how it should be framed ([`Dialog::into_config`]) and how to draw its body
//! ([`view`]). Dialogs keep no state; every button becomes a [`Message`] that
//! the application handles.

use crate::app::i18n::fluent::I18n;
use crate::mock::{self, Document, DocumentKind, Issue};
use crate::ui::components::badge::{badge, label_color};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::overlays::{OverlayConfig, OverlayId, Size};
use crate::ui::settings::size_key;
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Space, Text};
use iced::{Element, Font, Length, Theme};

/// An action that needs explicit confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmRequest {
    DeleteDocument(u32),
    ResetSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    IssueDetail(u32),
    DocumentPreview(u32),
    Confirm(ConfirmRequest),
    /// Placeholder content used by the overlay playground.
    Sample(Size),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Close(OverlayId),
    Confirm {
        id: OverlayId,
        request: ConfirmRequest,
    },
    ConvertIssue(u32),
    CopyIssueMarkdown(u32),
    CopyMarkdown(u32),
    DownloadDocument(u32),
    /// Opens another sample overlay on top of the current one.
    OpenStacked(Size),
}

impl Dialog {
    /// Wraps the dialog in an overlay configuration with its title and flags.
    ///
    /// Deleting a document can only be answered with the dialog's buttons:
    /// backdrop clicks and Escape are ignored.
    #[must_use]
    pub fn into_config(self, i18n: &I18n) -> OverlayConfig<Dialog> {
        let config = OverlayConfig::new(self);
        match self {
            Dialog::IssueDetail(number) => {
                let number = number.to_string();
                config
                    .title(i18n.tr_with_args("dialog-issue-title", &[("number", number.as_str())]))
                    .size(Size::Large)
            }
            Dialog::DocumentPreview(id) => config
                .title(
                    mock::find_document(id)
                        .map(|doc| doc.name.to_string())
                        .unwrap_or_default(),
                )
                .size(Size::Large),
            Dialog::Confirm(ConfirmRequest::DeleteDocument(_)) => config
                .title(i18n.tr("dialog-delete-title"))
                .size(Size::Small)
                .close_on_backdrop(false)
                .close_on_escape(false),
            Dialog::Confirm(ConfirmRequest::ResetSettings) => config
                .title(i18n.tr("dialog-reset-title"))
                .size(Size::Small),
            Dialog::Sample(size) => config
                .title(i18n.tr_with_args(
                    "dialog-sample-title",
                    &[("size", i18n.tr(size_key(size)).as_str())],
                ))
                .size(size),
        }
    }
}

/// Renders the body of `dialog`, shown in the overlay identified by `id`.
pub fn view<'a>(id: OverlayId, dialog: &Dialog, i18n: &I18n) -> Element<'a, Message> {
    match *dialog {
        Dialog::IssueDetail(number) => match mock::find_issue(number) {
            Some(issue) => issue_detail(issue, i18n),
            None => not_found(i18n),
        },
        Dialog::DocumentPreview(doc_id) => match mock::find_document(doc_id) {
            Some(doc) => document_preview(doc, i18n),
            None => not_found(i18n),
        },
        Dialog::Confirm(request) => confirm(id, request, i18n),
        Dialog::Sample(size) => sample(id, size, i18n),
    }
}

fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(styles::container::muted_text(theme)),
    }
}

fn not_found<'a>(i18n: &I18n) -> Element<'a, Message> {
    Text::new(i18n.tr("dialog-not-found"))
        .size(typography::BODY)
        .style(muted)
        .into()
}

fn issue_detail<'a>(issue: &'static Issue, i18n: &I18n) -> Element<'a, Message> {
    let meta = Row::new()
        .spacing(spacing::SM)
        .push(badge(i18n.tr(issue.status.i18n_key()), issue.status.color()))
        .push(
            Text::new(i18n.tr_with_args(
                "dialog-issue-meta",
                &[("author", issue.author), ("created", issue.created)],
            ))
            .size(typography::BODY_SM)
            .style(muted),
        );

    let labels = issue
        .labels
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, label| {
            row.push(badge(*label, label_color(label)))
        });

    let body = Container::new(Text::new(issue.body).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("dialog-copy-markdown")).size(typography::BODY_SM))
                .on_press(Message::CopyIssueMarkdown(issue.number))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("issues-convert")).size(typography::BODY_SM))
                .on_press(Message::ConvertIssue(issue.number))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent(palette::NEON_CYAN)),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(Text::new(issue.title).size(typography::TITLE_MD))
        .push(meta)
        .push(labels)
        .push(body)
        .push(actions)
        .into()
}

fn document_preview<'a>(doc: &'static Document, i18n: &I18n) -> Element<'a, Message> {
    let size = match doc.kind {
        DocumentKind::Markdown { size_bytes } => crate::format::format_file_size(size_bytes),
        DocumentKind::Folder { items } => {
            i18n.tr_count("documents-folder-items", i64::from(items))
        }
    };

    let meta = Text::new(i18n.tr_with_args(
        "dialog-document-meta",
        &[("modified", doc.modified), ("size", size.as_str())],
    ))
    .size(typography::BODY_SM)
    .style(muted);

    let source = Container::new(
        Text::new(mock::document_markdown(doc))
            .font(Font::MONOSPACE)
            .size(typography::BODY_SM),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::card);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("dialog-copy-markdown")).size(typography::BODY_SM))
                .on_press(Message::CopyMarkdown(doc.id))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("documents-download")).size(typography::BODY_SM))
                .on_press(Message::DownloadDocument(doc.id))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent(palette::NEON_CYAN)),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(meta)
        .push(source)
        .push(actions)
        .into()
}

fn confirm<'a>(id: OverlayId, request: ConfirmRequest, i18n: &I18n) -> Element<'a, Message> {
    let (message, confirm_label, accent) = match request {
        ConfirmRequest::DeleteDocument(doc_id) => {
            let name = mock::find_document(doc_id)
                .map(|doc| doc.name)
                .unwrap_or_default();
            (
                i18n.tr_with_args("dialog-delete-message", &[("name", name)]),
                i18n.tr("documents-delete"),
                palette::NEON_PINK,
            )
        }
        ConfirmRequest::ResetSettings => (
            i18n.tr("dialog-reset-message"),
            i18n.tr("settings-reset"),
            palette::NEON_AMBER,
        ),
    };

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(i18n.tr("dialog-cancel")).size(typography::BODY_SM))
                .on_press(Message::Close(id))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(confirm_label).size(typography::BODY_SM))
                .on_press(Message::Confirm { id, request })
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent(accent)),
        );

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(message).size(typography::BODY))
        .push(buttons)
        .into()
}

fn sample<'a>(id: OverlayId, size: Size, i18n: &I18n) -> Element<'a, Message> {
    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(
            button(Text::new(i18n.tr("dialog-open-stacked")).size(typography::BODY_SM))
                .on_press(Message::OpenStacked(Size::Small))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        )
        .push(
            button(Text::new(i18n.tr("dialog-close")).size(typography::BODY_SM))
                .on_press(Message::Close(id))
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::accent(palette::NEON_CYAN)),
        );

    let size_label = i18n.tr(size_key(size));
    Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(i18n.tr_with_args(
                "dialog-sample-message",
                &[("size", size_label.as_str()), ("id", id.to_string().as_str())],
            ))
            .size(typography::BODY),
        )
        .push(buttons)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::overlays::Manager;

    #[test]
    fn delete_confirmation_ignores_backdrop_and_escape() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let id = manager.open(Dialog::Confirm(ConfirmRequest::DeleteDocument(2)).into_config(&i18n));

        let overlay = manager.get(id).expect("overlay is open");
        assert_eq!(overlay.size(), Size::Small);
        assert!(!overlay.closes_on_backdrop());
        assert!(!overlay.closes_on_escape());
        assert!(overlay.is_closable());
    }

    #[test]
    fn previews_use_large_cards() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let issue = manager.open(Dialog::IssueDetail(1847).into_config(&i18n));
        let doc = manager.open(Dialog::DocumentPreview(2).into_config(&i18n));

        assert_eq!(manager.get(issue).map(|o| o.size()), Some(Size::Large));
        assert_eq!(
            manager.get(doc).and_then(|o| o.title()),
            Some("development-guide.md")
        );
    }

    #[test]
    fn sample_uses_requested_size() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let id = manager.open(Dialog::Sample(Size::Full).into_config(&i18n));
        let overlay = manager.get(id).expect("overlay is open");
        assert_eq!(overlay.size(), Size::Full);
        assert!(overlay.closes_on_escape());
    }

    #[test]
    fn every_dialog_renders() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let dialogs = [
            Dialog::IssueDetail(1847),
            Dialog::IssueDetail(1),
            Dialog::DocumentPreview(4),
            Dialog::DocumentPreview(1),
            Dialog::Confirm(ConfirmRequest::DeleteDocument(4)),
            Dialog::Confirm(ConfirmRequest::ResetSettings),
            Dialog::Sample(Size::Medium),
        ];
        for dialog in dialogs {
            let id = manager.open(dialog.into_config(&i18n));
            let _ = view(id, &dialog, &i18n);
        }
    }
}
