// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens and the two
//! stacks.
//!
//! The `App` struct owns the notification and overlay managers, the screen
//! states, localization and the loaded configuration. Screens never touch the
//! managers directly: their events are translated in [`update`].

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::ui::dashboard;
use crate::ui::dialogs::Dialog;
use crate::ui::documents;
use crate::ui::issues;
use crate::ui::notifications::{self, Options};
use crate::ui::overlays;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use chrono::{DateTime, Utc};
use config::Config;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    theme_mode: ThemeMode,
    dashboard: dashboard::State,
    issues: issues::State,
    documents: documents::State,
    settings: settings::State,
    /// Toast stack; actions carry top-level messages as their effect.
    notifications: notifications::Manager<Message>,
    /// Modal stack.
    overlays: overlays::Manager<Dialog>,
    export: Option<update::Export>,
    /// Monotonic time of the last tick, used for progress bars.
    now: Instant,
    /// Wall-clock time of the last tick, used for relative timestamps.
    clock: DateTime<Utc>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.notifications.len())
            .field("overlays", &self.overlays.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 900;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let i18n = I18n::new(None, &config);
        Self::with_config(config, i18n)
    }
}

impl App {
    fn with_config(config: Config, i18n: I18n) -> Self {
        let settings = settings::State::new(&config, i18n.current_locale().clone());
        Self {
            theme_mode: config.general.theme_mode,
            notifications: notifications::Manager::with_defaults(config.notifications.durations()),
            overlays: overlays::Manager::new(),
            screen: Screen::default(),
            dashboard: dashboard::State::default(),
            issues: issues::State::default(),
            documents: documents::State::default(),
            settings,
            export: None,
            now: Instant::now(),
            clock: Utc::now(),
            config,
            i18n,
        }
    }

    /// Loads configuration and translations, reporting a broken config file
    /// with a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::with_config(config, i18n);

        if let Some(key) = config_warning {
            app.notifications.warning(
                app.i18n.tr(&format!("{key}-title")),
                app.i18n.tr(&format!("{key}-message")),
                Options::new(),
            );
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = ?app.theme_mode,
            "application started"
        );
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let screen = self.i18n.tr(self.screen.i18n_key());
        format!("{screen} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.notifications.has_pending_timers()),
            subscription::create_escape_subscription(!self.overlays.is_empty()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let is_tick = matches!(message, Message::Tick(_));
        if let Message::Tick(now) = message {
            self.now = now;
            self.clock = Utc::now();
        }

        let mut ctx = update::UpdateContext {
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
        };

        let task = match message {
            Message::Sidebar(message) => update::handle_sidebar_message(&mut ctx, message),
            Message::Dashboard(message) => update::handle_dashboard_message(&mut ctx, message),
            Message::Issues(message) => update::handle_issues_message(&mut ctx, message),
            Message::Documents(message) => update::handle_documents_message(&mut ctx, message),
            Message::Settings(message) => update::handle_settings_message(&mut ctx, message),
            Message::Dialog(message) => update::handle_dialog_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, message)
            }
            Message::Overlay(message) => update::handle_overlay_message(&mut ctx, message),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::ExportStatusRequested => update::handle_export_status(&mut ctx),
            Message::ExportCancelled => update::handle_export_cancelled(&mut ctx),
            Message::RetrySave => update::handle_retry_save(&mut ctx),
            Message::ShowIssue(number) => update::handle_show_issue(&mut ctx, number),
        };

        // Toasts pushed by this message must render with a full progress bar.
        if !is_tick {
            self.now = Instant::now();
            self.clock = Utc::now();
        }
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            dashboard: &self.dashboard,
            issues: &self.issues,
            documents: &self.documents,
            settings: &self.settings,
            notifications: &self.notifications,
            overlays: &self.overlays,
            clock: self.clock,
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::NotificationMessage;
    use crate::ui::overlays::OverlayMessage;
    use std::time::Duration;

    #[test]
    fn default_app_starts_on_dashboard_with_empty_stacks() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Dashboard);
        assert!(app.notifications.is_empty());
        assert!(app.overlays.is_empty());
        assert!(app.title().contains(&app.i18n.tr("window-title")));
    }

    #[test]
    fn toast_action_switches_screen_through_update() {
        let mut app = App::default();
        let _ = app.update(Message::Issues(issues::Message::Convert(1847)));
        let toast = app.notifications.entries().last().expect("toast").id();

        let _ = app.update(Message::Notification(NotificationMessage::Invoke {
            id: toast,
            index: 0,
        }));
        assert!(app.notifications.get(toast).is_none());

        // The effect arrives as its own message.
        let _ = app.update(Message::SwitchScreen(Screen::Documents));
        assert_eq!(app.screen, Screen::Documents);
    }

    #[test]
    fn clock_advances_on_any_message() {
        let mut app = App::default();
        let stale = Utc::now() - chrono::Duration::hours(2);
        app.clock = stale;

        let _ = app.update(Message::SwitchScreen(Screen::Issues));
        assert!(app.clock > stale + chrono::Duration::hours(1));
        assert_eq!(app.screen, Screen::Issues);
    }

    #[test]
    fn tick_expires_toasts_and_stops_timers() {
        let mut app = App::default();
        let _ = app.update(Message::Dashboard(dashboard::Message::Refresh));
        assert!(app.notifications.has_pending_timers());

        let later = Instant::now() + Duration::from_secs(10);
        let _ = app.update(Message::Tick(later));
        assert!(app.notifications.is_empty());
        assert!(!app.notifications.has_pending_timers());
    }

    #[test]
    fn escape_closes_only_topmost_overlay() {
        let mut app = App::default();
        let _ = app.update(Message::Dashboard(dashboard::Message::OpenActivity(1842)));
        let _ = app.update(Message::Documents(documents::Message::Open(2)));
        assert_eq!(app.overlays.len(), 2);

        let _ = app.update(Message::Overlay(OverlayMessage::EscapePressed));
        assert_eq!(app.overlays.len(), 1);
        assert_eq!(
            app.overlays.topmost().and_then(|o| o.view()),
            Some(&Dialog::IssueDetail(1842))
        );
    }

    #[test]
    fn view_renders_every_screen_with_stacks() {
        let mut app = App::default();
        let _ = app.update(Message::Settings(settings::Message::Notify(
            notifications::Kind::Error,
        )));
        let _ = app.update(Message::Settings(settings::Message::OpenOverlay(
            overlays::Size::Full,
        )));
        for screen in Screen::ALL {
            let _ = app.update(Message::SwitchScreen(screen));
            let _element = app.view();
        }
    }
}
