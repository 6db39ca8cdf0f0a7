// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the ordered list of live notifications together with
//! their expiry countdowns. Entries are displayed in insertion order, newest
//! last. A notification with a non-zero duration is removed by the first
//! [`Manager::tick`] at or after its deadline; removing it earlier cancels the
//! countdown.

use super::notification::{
    non_empty, Action, DefaultDurations, Kind, Notification, NotificationId, NotificationTag,
    Options,
};
use crate::ui::entry::{Countdowns, IdSource};
use std::time::Instant;

/// Messages emitted by the toast widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Invoke the action at `index` in the notification's action row.
    Invoke { id: NotificationId, index: usize },
}

/// Manages the notification stack.
///
/// `A` is the effect type carried by toast actions, usually the host's own
/// message type.
#[derive(Debug)]
pub struct Manager<A> {
    entries: Vec<Notification<A>>,
    ids: IdSource<NotificationTag>,
    countdowns: Countdowns<NotificationTag>,
    defaults: DefaultDurations,
}

impl<A> Default for Manager<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            ids: IdSource::new(),
            countdowns: Countdowns::new(),
            defaults: DefaultDurations::default(),
        }
    }
}

impl<A> Manager<A> {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with custom default durations.
    #[must_use]
    pub fn with_defaults(defaults: DefaultDurations) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Changes the defaults used by future notifications.
    ///
    /// Live notifications keep the duration they were created with.
    pub fn set_defaults(&mut self, defaults: DefaultDurations) {
        self.defaults = defaults;
    }

    #[must_use]
    pub fn defaults(&self) -> DefaultDurations {
        self.defaults
    }

    /// Appends a new notification and returns its ID.
    pub fn notify(
        &mut self,
        kind: Kind,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Options<A>,
    ) -> NotificationId {
        self.notify_at(Instant::now(), kind, title, message, options)
    }

    /// Same as [`Manager::notify`] with an explicit creation instant.
    pub fn notify_at(
        &mut self,
        now: Instant,
        kind: Kind,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Options<A>,
    ) -> NotificationId {
        let id = self.ids.next_id();
        let duration = options
            .duration
            .unwrap_or_else(|| self.defaults.for_kind(kind));

        self.countdowns.schedule(id, now, duration);
        self.entries.push(Notification::new(
            id,
            kind,
            non_empty(title.into()),
            non_empty(message.into()),
            duration,
            options.actions,
            now,
        ));

        tracing::debug!(
            %id,
            ?kind,
            duration_ms = duration.as_millis() as u64,
            live = self.entries.len(),
            "notification pushed"
        );
        id
    }

    pub fn success(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Options<A>,
    ) -> NotificationId {
        self.notify(Kind::Success, title, message, options)
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Options<A>,
    ) -> NotificationId {
        self.notify(Kind::Error, title, message, options)
    }

    pub fn warning(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Options<A>,
    ) -> NotificationId {
        self.notify(Kind::Warning, title, message, options)
    }

    pub fn info(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        options: Options<A>,
    ) -> NotificationId {
        self.notify(Kind::Info, title, message, options)
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Unknown IDs
    /// are treated as already dismissed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.countdowns.cancel(id);

        if let Some(pos) = self.entries.iter().position(|n| n.id() == id) {
            self.entries.remove(pos);
            tracing::debug!(%id, live = self.entries.len(), "notification dismissed");
            true
        } else {
            false
        }
    }

    /// Clears every notification and cancels all pending countdowns.
    pub fn dismiss_all(&mut self) {
        self.countdowns.cancel_all();
        if !self.entries.is_empty() {
            tracing::debug!(count = self.entries.len(), "all notifications dismissed");
        }
        self.entries.clear();
    }

    /// Removes every notification whose countdown expired at `now`.
    ///
    /// Returns the number of notifications removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        self.countdowns
            .take_expired(now)
            .into_iter()
            .filter(|id| self.dismiss(*id))
            .count()
    }

    /// Handles a toast message.
    ///
    /// Returns the effect of an invoked action so the caller can dispatch it.
    pub fn handle_message(&mut self, message: Message) -> Option<A>
    where
        A: Clone,
    {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
                None
            }
            Message::Invoke { id, index } => {
                let action = self.get(id)?.actions().get(index)?;
                let effect = action.effect().clone();
                let dismiss = action.dismiss_on_invoke();
                if dismiss {
                    self.dismiss(id);
                }
                Some(effect)
            }
        }
    }

    /// Returns the live notifications in display order (oldest first).
    pub fn entries(&self) -> impl Iterator<Item = &Notification<A>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification<A>> {
        self.entries.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether any countdown is pending (drives the tick subscription).
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.countdowns.is_empty()
    }

    /// Fraction of lifetime left for `id`, `None` for persistent or unknown entries.
    #[must_use]
    pub fn remaining_fraction(&self, id: NotificationId, now: Instant) -> Option<f32> {
        self.countdowns
            .get(id)
            .map(|countdown| countdown.remaining_fraction(now))
    }

    /// Convenience for hosts that only need a plain dismissable action.
    pub fn notify_with_action(
        &mut self,
        kind: Kind,
        title: impl Into<String>,
        message: impl Into<String>,
        action: Action<A>,
    ) -> NotificationId {
        self.notify(kind, title, message, Options::new().action(action))
    }
}
