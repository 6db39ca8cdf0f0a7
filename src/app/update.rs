// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Screens report what happened through their `Event`s; the handlers here turn
//! those events into changes to the notification and overlay stacks.

use super::{config, Message, Screen};
use crate::app::config::Config;
use crate::app::i18n::fluent::I18n;
use crate::mock::{self, IssueStatus};
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::dialogs::{self, ConfirmRequest, Dialog};
use crate::ui::documents::{self, Event as DocumentsEvent};
use crate::ui::issues::{self, Event as IssuesEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Action, NotificationId, NotificationMessage, Options};
use crate::ui::overlays::{self, OverlayId, OverlayMessage};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::Instant;

/// A running (simulated) export and the toast that reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Export {
    pub toast: NotificationId,
    pub count: usize,
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub dashboard: &'a mut dashboard::State,
    pub issues: &'a mut issues::State,
    pub documents: &'a mut documents::State,
    pub settings: &'a mut settings::State,
    pub notifications: &'a mut notifications::Manager<Message>,
    pub overlays: &'a mut overlays::Manager<Dialog>,
    pub export: &'a mut Option<Export>,
}

impl UpdateContext<'_> {
    fn open_dialog(&mut self, dialog: Dialog) -> OverlayId {
        self.overlays.open(dialog.into_config(self.i18n))
    }
}

/// Handles sidebar messages.
pub fn handle_sidebar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if *ctx.screen != target {
        tracing::debug!(from = ?ctx.screen, to = ?target, "switching screen");
        *ctx.screen = target;
    }
    Task::none()
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match ctx.dashboard.update(message) {
        DashboardEvent::None => {}
        DashboardEvent::Refreshed => {
            ctx.notifications.info(
                ctx.i18n.tr("notification-refreshed-title"),
                ctx.i18n.tr("notification-refreshed-message"),
                Options::new(),
            );
        }
        DashboardEvent::OpenIssue(number) => {
            ctx.open_dialog(Dialog::IssueDetail(number));
        }
    }
    Task::none()
}

pub fn handle_issues_message(ctx: &mut UpdateContext<'_>, message: issues::Message) -> Task<Message> {
    match ctx.issues.update(message) {
        IssuesEvent::None => {}
        IssuesEvent::OpenIssue(number) => {
            ctx.open_dialog(Dialog::IssueDetail(number));
        }
        IssuesEvent::Convert(number) => convert_issue(ctx, number),
        IssuesEvent::Export(numbers) => start_export(ctx, numbers.len()),
    }
    Task::none()
}

pub fn handle_documents_message(
    ctx: &mut UpdateContext<'_>,
    message: documents::Message,
) -> Task<Message> {
    match ctx.documents.update(message) {
        DocumentsEvent::None => {}
        DocumentsEvent::Preview(id) => {
            ctx.open_dialog(Dialog::DocumentPreview(id));
        }
        DocumentsEvent::OpenFolder(id) => {
            let name = ctx.documents.get(id).map(|doc| doc.name).unwrap_or_default();
            ctx.notifications.info(
                ctx.i18n.tr_with_args("notification-folder-title", &[("name", name)]),
                ctx.i18n.tr("notification-folder-message"),
                Options::new(),
            );
        }
        DocumentsEvent::Download(id) => download_document(ctx, id),
        DocumentsEvent::DeleteRequested(id) => {
            ctx.open_dialog(Dialog::Confirm(ConfirmRequest::DeleteDocument(id)));
        }
    }
    Task::none()
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => {}
        SettingsEvent::LanguageChanged(locale) => {
            if !ctx.i18n.set_locale(locale.clone()) {
                tracing::warn!(%locale, "locale not available");
            }
        }
        SettingsEvent::ThemeModeChanged(mode) => *ctx.theme_mode = mode,
        SettingsEvent::DurationsChanged(durations) => ctx.notifications.set_defaults(durations),
        SettingsEvent::SaveRequested => save_settings(ctx),
        SettingsEvent::ResetRequested => {
            ctx.open_dialog(Dialog::Confirm(ConfirmRequest::ResetSettings));
        }
        SettingsEvent::Notify(kind) => {
            let kind_name = ctx.i18n.tr(settings::kind_key(kind));
            ctx.notifications.notify(
                kind,
                kind_name.clone(),
                ctx.i18n.tr_with_args(
                    "notification-playground-message",
                    &[("kind", kind_name.as_str())],
                ),
                Options::new(),
            );
        }
        SettingsEvent::DismissAll => {
            ctx.notifications.dismiss_all();
            if ctx.export.take().is_some() {
                tracing::debug!("export toast dismissed with all notifications");
            }
        }
        SettingsEvent::OpenOverlay(size) => {
            ctx.open_dialog(Dialog::Sample(size));
        }
    }
    Task::none()
}

pub fn handle_dialog_message(ctx: &mut UpdateContext<'_>, message: dialogs::Message) -> Task<Message> {
    match message {
        dialogs::Message::Close(id) => {
            ctx.overlays.close(id);
        }
        dialogs::Message::Confirm { id, request } => {
            ctx.overlays.close(id);
            confirm(ctx, request);
        }
        dialogs::Message::ConvertIssue(number) => convert_issue(ctx, number),
        dialogs::Message::CopyIssueMarkdown(number) => {
            let Some(issue) = mock::find_issue(number) else {
                return Task::none();
            };
            let label = format!("#{number}");
            ctx.notifications.success(
                ctx.i18n.tr("notification-copied-title"),
                ctx.i18n
                    .tr_with_args("notification-copied-message", &[("name", label.as_str())]),
                Options::new(),
            );
            return iced::clipboard::write(mock::issue_markdown(issue));
        }
        dialogs::Message::CopyMarkdown(id) => {
            let Some(doc) = mock::find_document(id) else {
                return Task::none();
            };
            ctx.notifications.success(
                ctx.i18n.tr("notification-copied-title"),
                ctx.i18n.tr_with_args("notification-copied-message", &[("name", doc.name)]),
                Options::new(),
            );
            return iced::clipboard::write(mock::document_markdown(doc));
        }
        dialogs::Message::DownloadDocument(id) => download_document(ctx, id),
        dialogs::Message::OpenStacked(size) => {
            ctx.open_dialog(Dialog::Sample(size));
        }
    }
    Task::none()
}

/// Routes toast widget messages. An invoked action's effect is fed back into
/// the update loop.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: NotificationMessage,
) -> Task<Message> {
    if let NotificationMessage::Dismiss(id) = message {
        if ctx.export.is_some_and(|export| export.toast == id) {
            tracing::debug!("export toast dismissed, export no longer tracked");
            *ctx.export = None;
        }
    }

    match ctx.notifications.handle_message(message) {
        Some(effect) => Task::done(effect),
        None => Task::none(),
    }
}

pub fn handle_overlay_message(ctx: &mut UpdateContext<'_>, message: OverlayMessage) -> Task<Message> {
    ctx.overlays.handle_message(message);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    ctx.notifications.tick(now);
    Task::none()
}

pub fn handle_export_status(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(export) = *ctx.export {
        let count = export.count.to_string();
        ctx.notifications.info(
            ctx.i18n.tr("notification-export-status-title"),
            ctx.i18n
                .tr_with_args("notification-export-status-message", &[("count", count.as_str())]),
            Options::new(),
        );
    }
    Task::none()
}

pub fn handle_export_cancelled(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(export) = ctx.export.take() {
        tracing::info!(count = export.count, "export cancelled");
        ctx.notifications.warning(
            ctx.i18n.tr("notification-export-cancelled-title"),
            ctx.i18n.tr("notification-export-cancelled-message"),
            Options::new(),
        );
    }
    Task::none()
}

pub fn handle_retry_save(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    save_settings(ctx);
    Task::none()
}

pub fn handle_show_issue(ctx: &mut UpdateContext<'_>, number: u32) -> Task<Message> {
    ctx.open_dialog(Dialog::IssueDetail(number));
    Task::none()
}

fn convert_issue(ctx: &mut UpdateContext<'_>, number: u32) {
    let label = format!("#{number}");
    let Some(issue) = mock::find_issue(number) else {
        ctx.notifications.error(
            ctx.i18n.tr("notification-convert-failed-title"),
            ctx.i18n
                .tr_with_args("notification-convert-missing-message", &[("issue", label.as_str())]),
            Options::new(),
        );
        return;
    };

    if issue.status == IssueStatus::Closed {
        ctx.notifications.warning(
            ctx.i18n.tr("notification-convert-closed-title"),
            ctx.i18n
                .tr_with_args("notification-convert-closed-message", &[("issue", label.as_str())]),
            Options::new(),
        );
        return;
    }

    tracing::info!(number, "issue converted");
    ctx.notifications.success(
        ctx.i18n.tr("notification-converted-title"),
        ctx.i18n
            .tr_with_args("notification-converted-message", &[("issue", label.as_str())]),
        Options::new()
            .action(
                Action::new(
                    ctx.i18n.tr("notification-action-view-documents"),
                    Message::SwitchScreen(Screen::Documents),
                )
                .primary(),
            )
            .action(Action::new(
                ctx.i18n.tr("notification-action-details"),
                Message::ShowIssue(number),
            )),
    );
}

fn start_export(ctx: &mut UpdateContext<'_>, count: usize) {
    // An export whose toast is gone is no longer running.
    let notifications = &*ctx.notifications;
    if ctx
        .export
        .is_some_and(|export| notifications.get(export.toast).is_some())
    {
        ctx.notifications.warning(
            ctx.i18n.tr("notification-export-busy-title"),
            ctx.i18n.tr("notification-export-busy-message"),
            Options::new(),
        );
        return;
    }
    if count == 0 {
        ctx.notifications.warning(
            ctx.i18n.tr("notification-export-empty-title"),
            ctx.i18n.tr("notification-export-empty-message"),
            Options::new(),
        );
        return;
    }

    let count_text = count.to_string();
    let toast = ctx.notifications.info(
        ctx.i18n.tr("notification-export-started-title"),
        ctx.i18n
            .tr_with_args("notification-export-started-message", &[("count", count_text.as_str())]),
        Options::new()
            .persistent()
            .action(
                Action::new(
                    ctx.i18n.tr("notification-action-status"),
                    Message::ExportStatusRequested,
                )
                .keep_open()
                .primary(),
            )
            .action(Action::new(
                ctx.i18n.tr("notification-action-cancel"),
                Message::ExportCancelled,
            )),
    );
    tracing::info!(count, "export started");
    *ctx.export = Some(Export { toast, count });
}

fn download_document(ctx: &mut UpdateContext<'_>, id: u32) {
    let Some(doc) = mock::find_document(id) else {
        return;
    };
    ctx.notifications.info(
        ctx.i18n.tr("notification-download-title"),
        ctx.i18n
            .tr_with_args("notification-download-message", &[("name", doc.name)]),
        Options::new(),
    );
}

fn confirm(ctx: &mut UpdateContext<'_>, request: ConfirmRequest) {
    match request {
        ConfirmRequest::DeleteDocument(id) => {
            if let Some(doc) = ctx.documents.remove(id) {
                tracing::info!(id, name = doc.name, "document deleted");
                ctx.notifications.success(
                    ctx.i18n.tr("notification-deleted-title"),
                    ctx.i18n
                        .tr_with_args("notification-deleted-message", &[("name", doc.name)]),
                    Options::new(),
                );
            }
        }
        ConfirmRequest::ResetSettings => {
            ctx.settings.reset();
            *ctx.theme_mode = ctx.settings.theme_mode();
            ctx.notifications.set_defaults(ctx.settings.durations());
            ctx.notifications.info(
                ctx.i18n.tr("notification-reset-title"),
                ctx.i18n.tr("notification-reset-message"),
                Options::new(),
            );
        }
    }
}

/// Writes the settings draft to disk and reports the outcome in a toast.
fn save_settings(ctx: &mut UpdateContext<'_>) {
    ctx.settings.apply_to(ctx.config);
    match config::save(ctx.config) {
        Ok(()) => {
            ctx.notifications.success(
                ctx.i18n.tr("notification-config-saved-title"),
                ctx.i18n.tr("notification-config-saved-message"),
                Options::new(),
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "config save failed");
            let reason = err.to_string();
            ctx.notifications.error(
                ctx.i18n.tr("notification-config-save-error-title"),
                ctx.i18n.tr_with_args(
                    "notification-config-save-error-message",
                    &[("reason", reason.as_str())],
                ),
                Options::new().action(
                    Action::new(ctx.i18n.tr("notification-action-retry"), Message::RetrySave)
                        .primary(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;
    use crate::ui::overlays::Size;
    use unic_langid::langid;

    struct Harness {
        i18n: I18n,
        config: Config,
        screen: Screen,
        theme_mode: ThemeMode,
        dashboard: dashboard::State,
        issues: issues::State,
        documents: documents::State,
        settings: settings::State,
        notifications: notifications::Manager<Message>,
        overlays: overlays::Manager<Dialog>,
        export: Option<Export>,
    }

    impl Harness {
        fn new() -> Self {
            let config = Config::default();
            Self {
                i18n: I18n::new(Some("en-US".into()), &config),
                settings: settings::State::new(&config, langid!("en-US")),
                config,
                screen: Screen::default(),
                theme_mode: ThemeMode::System,
                dashboard: dashboard::State::default(),
                issues: issues::State::default(),
                documents: documents::State::default(),
                notifications: notifications::Manager::new(),
                overlays: overlays::Manager::new(),
                export: None,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                config: &mut self.config,
                screen: &mut self.screen,
                theme_mode: &mut self.theme_mode,
                dashboard: &mut self.dashboard,
                issues: &mut self.issues,
                documents: &mut self.documents,
                settings: &mut self.settings,
                notifications: &mut self.notifications,
                overlays: &mut self.overlays,
                export: &mut self.export,
            }
        }

        fn last_toast(&self) -> (Kind, usize) {
            let last = self
                .notifications
                .entries()
                .last()
                .expect("a notification was pushed");
            (last.kind(), last.actions().len())
        }
    }

    #[test]
    fn converting_open_issue_offers_navigation() {
        let mut h = Harness::new();
        convert_issue(&mut h.ctx(), 1847);
        assert_eq!(h.last_toast(), (Kind::Success, 2));

        let last = h.notifications.entries().last().expect("toast");
        assert!(matches!(
            last.actions()[0].effect(),
            Message::SwitchScreen(Screen::Documents)
        ));
    }

    #[test]
    fn converting_closed_issue_warns() {
        let mut h = Harness::new();
        convert_issue(&mut h.ctx(), 1844);
        assert_eq!(h.last_toast(), (Kind::Warning, 0));
    }

    #[test]
    fn converting_unknown_issue_errors() {
        let mut h = Harness::new();
        convert_issue(&mut h.ctx(), 1);
        assert_eq!(h.last_toast().0, Kind::Error);
    }

    #[test]
    fn export_toast_is_persistent_and_cancellable() {
        let mut h = Harness::new();
        start_export(&mut h.ctx(), 3);

        let export = h.export.expect("export running");
        assert_eq!(export.count, 3);
        let toast = h.notifications.get(export.toast).expect("toast live");
        assert!(toast.is_persistent());
        assert!(!toast.actions()[0].dismiss_on_invoke());
        assert!(toast.actions()[1].dismiss_on_invoke());

        // Status keeps the export toast and adds an info toast.
        let _ = handle_notification_message(
            &mut h.ctx(),
            NotificationMessage::Invoke {
                id: export.toast,
                index: 0,
            },
        );
        assert!(h.notifications.get(export.toast).is_some());

        // Cancel dismisses it; the effect is delivered as a task.
        let _ = handle_notification_message(
            &mut h.ctx(),
            NotificationMessage::Invoke {
                id: export.toast,
                index: 1,
            },
        );
        assert!(h.notifications.get(export.toast).is_none());
        let _ = handle_export_cancelled(&mut h.ctx());
        assert!(h.export.is_none());
        assert_eq!(h.last_toast().0, Kind::Warning);
    }

    #[test]
    fn second_export_is_refused() {
        let mut h = Harness::new();
        start_export(&mut h.ctx(), 2);
        start_export(&mut h.ctx(), 5);
        assert_eq!(h.export.map(|e| e.count), Some(2));
        assert_eq!(h.last_toast().0, Kind::Warning);
    }

    #[test]
    fn dismissing_export_toast_forgets_export() {
        let mut h = Harness::new();
        start_export(&mut h.ctx(), 2);
        let toast = h.export.expect("running").toast;
        let _ = handle_notification_message(&mut h.ctx(), NotificationMessage::Dismiss(toast));
        assert!(h.export.is_none());
    }

    #[test]
    fn dismiss_all_forgets_export() {
        let mut h = Harness::new();
        start_export(&mut h.ctx(), 3);
        assert!(h.export.is_some());

        let _ = handle_settings_message(&mut h.ctx(), settings::Message::DismissAll);
        assert!(h.notifications.is_empty());
        assert!(h.export.is_none());

        start_export(&mut h.ctx(), 2);
        assert_eq!(h.export.map(|export| export.count), Some(2));
        assert_eq!(h.last_toast(), (Kind::Info, 2));
    }

    #[test]
    fn delete_goes_through_confirmation() {
        let mut h = Harness::new();
        let _ = handle_documents_message(&mut h.ctx(), documents::Message::Delete(4));
        let overlay = h.overlays.topmost().expect("confirmation open");
        assert_eq!(
            overlay.view(),
            Some(&Dialog::Confirm(ConfirmRequest::DeleteDocument(4)))
        );
        let id = overlay.id();

        // Escape does not close it.
        assert!(h.overlays.handle_escape().is_none());
        assert_eq!(h.overlays.len(), 1);

        let _ = handle_dialog_message(
            &mut h.ctx(),
            dialogs::Message::Confirm {
                id,
                request: ConfirmRequest::DeleteDocument(4),
            },
        );
        assert!(h.overlays.is_empty());
        assert!(h.documents.get(4).is_none());
        assert_eq!(h.last_toast().0, Kind::Success);
    }

    #[test]
    fn reset_restores_defaults_after_confirmation() {
        let mut h = Harness::new();
        let _ = handle_settings_message(
            &mut h.ctx(),
            settings::Message::ThemeModeSelected(ThemeMode::Dark),
        );
        let _ = handle_settings_message(&mut h.ctx(), settings::Message::DurationChanged(9000));
        assert_eq!(h.theme_mode, ThemeMode::Dark);
        assert_eq!(h.notifications.defaults().standard.as_millis(), 9000);

        confirm(&mut h.ctx(), ConfirmRequest::ResetSettings);
        assert_eq!(h.theme_mode, ThemeMode::System);
        assert_eq!(h.notifications.defaults().standard.as_millis(), 3000);
    }

    #[test]
    fn stacked_samples_close_topmost_first() {
        let mut h = Harness::new();
        let _ = handle_settings_message(&mut h.ctx(), settings::Message::OpenOverlay(Size::Large));
        let _ = handle_dialog_message(&mut h.ctx(), dialogs::Message::OpenStacked(Size::Small));
        assert_eq!(h.overlays.len(), 2);

        let _ = handle_overlay_message(&mut h.ctx(), OverlayMessage::EscapePressed);
        assert_eq!(h.overlays.len(), 1);
        assert_eq!(
            h.overlays.topmost().and_then(|o| o.view()),
            Some(&Dialog::Sample(Size::Large))
        );
    }

    #[test]
    fn playground_and_dismiss_all() {
        let mut h = Harness::new();
        for kind in [Kind::Success, Kind::Error, Kind::Warning, Kind::Info] {
            let _ = handle_settings_message(&mut h.ctx(), settings::Message::Notify(kind));
        }
        assert_eq!(h.notifications.len(), 4);
        let _ = handle_settings_message(&mut h.ctx(), settings::Message::DismissAll);
        assert!(h.notifications.is_empty());
    }

    #[test]
    fn sidebar_switches_screen() {
        let mut h = Harness::new();
        let _ = handle_sidebar_message(&mut h.ctx(), navbar::Message::Navigate(Screen::Issues));
        assert_eq!(h.screen, Screen::Issues);
    }
}
