// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the sidebar and current screen, the overlay stack,
//! then the toast column.

use super::{Message, Screen};
use crate::app::i18n::fluent::I18n;
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::design_tokens::spacing;
use crate::ui::dialogs::{self, Dialog};
use crate::ui::documents::{self, ViewContext as DocumentsViewContext};
use crate::ui::issues::{self, ViewContext as IssuesViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::overlays::{self, modal};
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use chrono::{DateTime, Utc};
use iced::{
    widget::{scrollable, Container, Row, Stack},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub dashboard: &'a dashboard::State,
    pub issues: &'a issues::State,
    pub documents: &'a documents::State,
    pub settings: &'a settings::State,
    pub notifications: &'a notifications::Manager<Message>,
    pub overlays: &'a overlays::Manager<Dialog>,
    /// Wall clock for relative timestamps.
    pub clock: DateTime<Utc>,
    /// Monotonic clock for toast progress bars.
    pub now: Instant,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let page: Element<'_, Message> = match ctx.screen {
        Screen::Dashboard => ctx
            .dashboard
            .view(DashboardViewContext {
                i18n,
                now: ctx.clock,
            })
            .map(Message::Dashboard),
        Screen::Issues => ctx
            .issues
            .view(IssuesViewContext { i18n })
            .map(Message::Issues),
        Screen::Documents => ctx
            .documents
            .view(DocumentsViewContext { i18n })
            .map(Message::Documents),
        Screen::Settings => ctx
            .settings
            .view(SettingsViewContext {
                i18n,
                live_notifications: ctx.notifications.len(),
            })
            .map(Message::Settings),
    };

    let sidebar = navbar::view(NavbarViewContext {
        i18n,
        current: ctx.screen,
        live_notifications: ctx.notifications.len(),
        open_overlays: ctx.overlays.len(),
    })
    .map(Message::Sidebar);

    let content = scrollable(
        Container::new(page)
            .width(Length::Fill)
            .padding(spacing::LG),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let base: Element<'_, Message> = Row::new()
        .push(sidebar)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    let with_overlays = modal::view(
        base,
        ctx.overlays,
        |id, dialog| dialogs::view(id, dialog, i18n).map(Message::Dialog),
        Message::Overlay,
    );

    Stack::new()
        .push(with_overlays)
        .push(Toast::view_overlay(ctx.notifications, ctx.now).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
