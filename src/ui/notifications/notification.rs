// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` entry, its `Kind`, the optional
//! action row and the `Options` accepted by the producer calls.

use crate::ui::design_tokens::palette;
use crate::ui::entry::EntryId;
use iced::Color;
use std::time::{Duration, Instant};

/// Tag type for notification identifiers.
#[derive(Debug)]
pub enum NotificationTag {}

/// Unique identifier for a notification.
pub type NotificationId = EntryId<NotificationTag>;

/// Default lifetime for success, warning and info notifications.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Default lifetime for error notifications.
pub const DEFAULT_ERROR_DURATION: Duration = Duration::from_millis(5000);

/// Kind of notification. Only affects icon and styling, never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::NEON_GREEN,
            Kind::Error => palette::NEON_PINK,
            Kind::Warning => palette::NEON_AMBER,
            Kind::Info => palette::NEON_CYAN,
        }
    }

    /// Glyph shown in the toast's icon box.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✓",
            Kind::Error => "✕",
            Kind::Warning => "!",
            Kind::Info => "i",
        }
    }
}

/// Default durations applied when a producer does not pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultDurations {
    pub standard: Duration,
    pub error: Duration,
}

impl DefaultDurations {
    #[must_use]
    pub fn for_kind(&self, kind: Kind) -> Duration {
        match kind {
            Kind::Error => self.error,
            Kind::Success | Kind::Warning | Kind::Info => self.standard,
        }
    }
}

impl Default for DefaultDurations {
    fn default() -> Self {
        Self {
            standard: DEFAULT_DURATION,
            error: DEFAULT_ERROR_DURATION,
        }
    }
}

/// A button in the toast's action row.
///
/// `effect` is handed back to the host when the action is invoked.
#[derive(Debug, Clone)]
pub struct Action<A> {
    label: String,
    effect: A,
    dismiss_on_invoke: bool,
    primary: bool,
}

impl<A> Action<A> {
    /// Creates an action that dismisses its notification when invoked.
    pub fn new(label: impl Into<String>, effect: A) -> Self {
        Self {
            label: label.into(),
            effect,
            dismiss_on_invoke: true,
            primary: false,
        }
    }

    /// Keeps the notification on screen after the action is invoked.
    #[must_use]
    pub fn keep_open(mut self) -> Self {
        self.dismiss_on_invoke = false;
        self
    }

    /// Renders the action with the kind's accent color.
    #[must_use]
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn effect(&self) -> &A {
        &self.effect
    }

    #[must_use]
    pub fn dismiss_on_invoke(&self) -> bool {
        self.dismiss_on_invoke
    }

    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.primary
    }
}

/// Optional knobs for a producer call.
#[derive(Debug, Clone)]
pub struct Options<A> {
    pub(super) duration: Option<Duration>,
    pub(super) actions: Vec<Action<A>>,
}

impl<A> Options<A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            duration: None,
            actions: Vec::new(),
        }
    }

    /// Overrides the kind's default duration. `Duration::ZERO` never expires.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shorthand for a notification that stays until dismissed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn action(mut self, action: Action<A>) -> Self {
        self.actions.push(action);
        self
    }
}

impl<A> Default for Options<A> {
    fn default() -> Self {
        Self::new()
    }
}

/// A live notification held by the manager.
#[derive(Debug, Clone)]
pub struct Notification<A> {
    id: NotificationId,
    kind: Kind,
    title: Option<String>,
    message: Option<String>,
    duration: Duration,
    actions: Vec<Action<A>>,
    created_at: Instant,
}

impl<A> Notification<A> {
    pub(super) fn new(
        id: NotificationId,
        kind: Kind,
        title: Option<String>,
        message: Option<String>,
        duration: Duration,
        actions: Vec<Action<A>>,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            message,
            duration,
            actions,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Total lifetime; zero for persistent notifications.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }

    #[must_use]
    pub fn actions(&self) -> &[Action<A>] {
        &self.actions
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

/// Normalizes producer text: empty strings count as absent.
pub(super) fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            Kind::Success.color(),
            Kind::Error.color(),
            Kind::Warning.color(),
            Kind::Info.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn error_defaults_to_five_seconds_others_three() {
        let defaults = DefaultDurations::default();
        assert_eq!(defaults.for_kind(Kind::Error), Duration::from_millis(5000));
        assert_eq!(defaults.for_kind(Kind::Success), Duration::from_millis(3000));
        assert_eq!(defaults.for_kind(Kind::Warning), Duration::from_millis(3000));
        assert_eq!(defaults.for_kind(Kind::Info), Duration::from_millis(3000));
    }

    #[test]
    fn actions_dismiss_by_default() {
        let action = Action::new("Retry", 7_u8);
        assert!(action.dismiss_on_invoke());
        assert!(!action.is_primary());
        assert_eq!(*action.effect(), 7);

        let sticky = Action::new("Undo", 1_u8).keep_open().primary();
        assert!(!sticky.dismiss_on_invoke());
        assert!(sticky.is_primary());
    }

    #[test]
    fn persistent_options_use_zero_duration() {
        let options = Options::<()>::new().persistent();
        assert_eq!(options.duration, Some(Duration::ZERO));
    }

    #[test]
    fn blank_text_is_treated_as_absent() {
        assert_eq!(non_empty(String::new()), None);
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty("Disk full".to_string()), Some("Disk full".into()));
    }
}
