// SPDX-License-Identifier: MPL-2.0
//! Identifiers and countdowns shared by the notification and overlay stacks.
//!
//! Each stack owns an [`IdSource`] handing out [`EntryId`]s that are never
//! reused for the lifetime of the stack, and (for notifications) a
//! [`Countdowns`] registry tracking auto-expiry deadlines. Removing an entry
//! must cancel its countdown so that a later tick cannot remove anything else.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::time::{Duration, Instant};

/// Opaque identifier for an entry of one stack.
///
/// The `K` tag keeps notification ids and overlay ids apart at compile time.
pub struct EntryId<K> {
    raw: u64,
    _kind: PhantomData<fn() -> K>,
}

impl<K> EntryId<K> {
    const fn from_raw(raw: u64) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.raw
    }
}

impl<K> Clone for EntryId<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for EntryId<K> {}

impl<K> PartialEq for EntryId<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K> Eq for EntryId<K> {}

impl<K> PartialOrd for EntryId<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<K> Ord for EntryId<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<K> Hash for EntryId<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<K> fmt::Debug for EntryId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({self})")
    }
}

/// Short base-36 rendering, e.g. `1a`.
impl<K> fmt::Display for EntryId<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

        let mut value = self.raw;
        let mut buf = [0u8; 13];
        let mut pos = buf.len();
        loop {
            pos -= 1;
            buf[pos] = DIGITS[(value % 36) as usize];
            value /= 36;
            if value == 0 {
                break;
            }
        }
        // Only ASCII digits were written.
        f.write_str(std::str::from_utf8(&buf[pos..]).unwrap_or("?"))
    }
}

/// Monotonic identifier source owned by a single stack.
pub struct IdSource<K> {
    last: u64,
    _kind: PhantomData<fn() -> K>,
}

impl<K> IdSource<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: 0,
            _kind: PhantomData,
        }
    }

    /// Returns a fresh identifier. Identifiers start at 1 and are never reused.
    pub fn next_id(&mut self) -> EntryId<K> {
        self.last += 1;
        EntryId::from_raw(self.last)
    }
}

impl<K> Default for IdSource<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for IdSource<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdSource").field("last", &self.last).finish()
    }
}

/// A single auto-expiry deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started_at: Instant,
    duration: Duration,
}

impl Countdown {
    #[must_use]
    pub fn new(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Expiry instant; `None` when it lies beyond what `Instant` can hold,
    /// in which case the countdown never expires.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.started_at.checked_add(self.duration)
    }

    /// Time left before expiry, zero once expired.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.deadline() {
            Some(deadline) => deadline.saturating_duration_since(now),
            None => self.duration.saturating_sub(now.saturating_duration_since(self.started_at)),
        }
    }

    /// Linear decay from `1.0` at start to `0.0` at the deadline.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let fraction = self.remaining(now).as_secs_f64() / self.duration.as_secs_f64();
        fraction.clamp(0.0, 1.0) as f32
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|deadline| now >= deadline)
    }
}

/// Pending countdowns keyed by entry.
pub struct Countdowns<K> {
    pending: HashMap<EntryId<K>, Countdown>,
}

impl<K> Countdowns<K> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Schedules a countdown for `id`, replacing any previous one.
    ///
    /// A zero duration means "never expires" and schedules nothing; returns
    /// whether a countdown is now pending.
    pub fn schedule(&mut self, id: EntryId<K>, started_at: Instant, duration: Duration) -> bool {
        if duration.is_zero() {
            self.pending.remove(&id);
            return false;
        }
        self.pending.insert(id, Countdown::new(started_at, duration));
        true
    }

    /// Cancels the countdown for `id`. Returns `true` if one was pending.
    pub fn cancel(&mut self, id: EntryId<K>) -> bool {
        self.pending.remove(&id).is_some()
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    #[must_use]
    pub fn get(&self, id: EntryId<K>) -> Option<&Countdown> {
        self.pending.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().filter_map(Countdown::deadline).min()
    }

    /// Removes and returns every countdown expired at `now`, ordered by
    /// deadline then by id.
    pub fn take_expired(&mut self, now: Instant) -> Vec<EntryId<K>> {
        let mut expired: Vec<(Instant, EntryId<K>)> = self
            .pending
            .iter()
            .filter(|(_, countdown)| countdown.is_expired(now))
            .filter_map(|(id, countdown)| Some((countdown.deadline()?, *id)))
            .collect();
        expired.sort();

        for (_, id) in &expired {
            self.pending.remove(id);
        }
        expired.into_iter().map(|(_, id)| id).collect()
    }
}

impl<K> Default for Countdowns<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Countdowns<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdowns")
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Tag {}

    #[test]
    fn ids_are_monotonic_and_unique() {
        let mut source = IdSource::<Tag>::new();
        let a = source.next_id();
        let b = source.next_id();
        let c = source.next_id();

        assert!(a < b && b < c);
        assert_ne!(a, b);
        assert_eq!(a.raw(), 1);
    }

    #[test]
    fn separate_sources_do_not_share_state() {
        let mut first = IdSource::<Tag>::new();
        let mut second = IdSource::<Tag>::new();
        first.next_id();
        first.next_id();

        assert_eq!(second.next_id().raw(), 1);
    }

    #[test]
    fn display_is_short_base36() {
        assert_eq!(EntryId::<Tag>::from_raw(0).to_string(), "0");
        assert_eq!(EntryId::<Tag>::from_raw(35).to_string(), "z");
        assert_eq!(EntryId::<Tag>::from_raw(36).to_string(), "10");
        assert_eq!(EntryId::<Tag>::from_raw(u64::MAX).to_string(), "3w5e11264sgsf");
    }

    #[test]
    fn countdown_fraction_decays_linearly() {
        let start = Instant::now();
        let countdown = Countdown::new(start, Duration::from_millis(1000));

        assert_eq!(countdown.remaining_fraction(start), 1.0);
        let half = countdown.remaining_fraction(start + Duration::from_millis(500));
        assert!((half - 0.5).abs() < 1e-6);
        assert_eq!(
            countdown.remaining_fraction(start + Duration::from_millis(1000)),
            0.0
        );
        assert_eq!(
            countdown.remaining_fraction(start + Duration::from_secs(5)),
            0.0
        );
    }

    #[test]
    fn countdown_expires_exactly_at_deadline() {
        let start = Instant::now();
        let countdown = Countdown::new(start, Duration::from_millis(3000));

        assert!(!countdown.is_expired(start + Duration::from_millis(2999)));
        assert!(countdown.is_expired(start + Duration::from_millis(3000)));
    }

    #[test]
    fn zero_duration_is_never_scheduled() {
        let mut source = IdSource::<Tag>::new();
        let mut countdowns = Countdowns::new();
        let id = source.next_id();

        assert!(!countdowns.schedule(id, Instant::now(), Duration::ZERO));
        assert!(countdowns.is_empty());
    }

    #[test]
    fn take_expired_returns_in_deadline_order_and_removes() {
        let mut source = IdSource::<Tag>::new();
        let mut countdowns = Countdowns::new();
        let start = Instant::now();

        let slow = source.next_id();
        let fast = source.next_id();
        let never = source.next_id();
        countdowns.schedule(slow, start, Duration::from_millis(200));
        countdowns.schedule(fast, start, Duration::from_millis(100));
        countdowns.schedule(never, start, Duration::from_secs(60));

        let expired = countdowns.take_expired(start + Duration::from_millis(250));
        assert_eq!(expired, vec![fast, slow]);
        assert_eq!(countdowns.len(), 1);
        assert!(countdowns
            .take_expired(start + Duration::from_millis(250))
            .is_empty());
    }

    #[test]
    fn cancelled_countdown_never_fires() {
        let mut source = IdSource::<Tag>::new();
        let mut countdowns = Countdowns::new();
        let start = Instant::now();
        let id = source.next_id();
        countdowns.schedule(id, start, Duration::from_millis(10));

        assert!(countdowns.cancel(id));
        assert!(!countdowns.cancel(id));
        assert!(countdowns.take_expired(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn next_deadline_tracks_earliest() {
        let mut source = IdSource::<Tag>::new();
        let mut countdowns = Countdowns::new();
        let start = Instant::now();
        countdowns.schedule(source.next_id(), start, Duration::from_millis(500));
        countdowns.schedule(source.next_id(), start, Duration::from_millis(300));

        assert_eq!(
            countdowns.next_deadline(),
            Some(start + Duration::from_millis(300))
        );
        countdowns.cancel_all();
        assert_eq!(countdowns.next_deadline(), None);
    }

    #[test]
    fn unrepresentable_deadline_never_expires() {
        let start = Instant::now();
        let countdown = Countdown::new(start, Duration::MAX);

        assert_eq!(countdown.deadline(), None);
        assert!(!countdown.is_expired(start + Duration::from_secs(86_400)));
        assert!(countdown.remaining_fraction(start) > 0.99);

        let mut source = IdSource::<Tag>::new();
        let mut countdowns = Countdowns::new();
        let id = source.next_id();
        assert!(countdowns.schedule(id, start, Duration::MAX));
        assert!(countdowns.take_expired(start + Duration::from_secs(3600)).is_empty());
        assert_eq!(countdowns.next_deadline(), None);
        assert!(countdowns.cancel(id));
    }
}
