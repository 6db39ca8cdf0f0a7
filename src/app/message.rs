// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::dashboard;
use crate::ui::dialogs;
use crate::ui::documents;
use crate::ui::issues;
use crate::ui::navbar;
use crate::ui::notifications::NotificationMessage;
use crate::ui::overlays::OverlayMessage;
use crate::ui::settings;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
///
/// Toast actions carry a `Message` as their effect, so the variants below
/// `Tick` double as the effects a toast button can trigger.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(navbar::Message),
    Dashboard(dashboard::Message),
    Issues(issues::Message),
    Documents(documents::Message),
    Settings(settings::Message),
    Dialog(dialogs::Message),
    Notification(NotificationMessage),
    Overlay(OverlayMessage),
    /// Periodic tick driving toast expiry.
    Tick(Instant),
    SwitchScreen(Screen),
    /// Show the progress of the running export.
    ExportStatusRequested,
    /// Abort the running export.
    ExportCancelled,
    /// Try writing the configuration again after a failed save.
    RetrySave,
    /// Re-open the detail overlay of a converted issue.
    ShowIssue(u32),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ISSUE2MD_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional log filter directive; `RUST_LOG` still wins.
    pub log_level: Option<String>,
}
