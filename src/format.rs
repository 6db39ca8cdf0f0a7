// SPDX-License-Identifier: MPL-2.0
//! Display formatting helpers for counts, sizes, long text and timestamps.

use chrono::{DateTime, TimeDelta, Utc};

/// Formats an integer with comma thousands separators (`2847` → `2,847`).
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a byte count with binary units, one decimal below 10.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if size < 10.0 {
        format!("{size:.1} {}", UNITS[unit])
    } else {
        format!("{size:.0} {}", UNITS[unit])
    }
}

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

/// Largest whole unit elapsed between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Months(i64),
    Years(i64),
}

impl RelativeTime {
    /// Measures how long ago `then` was at `now`. Future instants count as zero seconds.
    #[must_use]
    pub fn between(then: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let seconds = (now - then).num_seconds().max(0);

        const INTERVALS: [(i64, fn(i64) -> RelativeTime); 5] = [
            (31_536_000, RelativeTime::Years),
            (2_592_000, RelativeTime::Months),
            (86_400, RelativeTime::Days),
            (3_600, RelativeTime::Hours),
            (60, RelativeTime::Minutes),
        ];

        INTERVALS
            .iter()
            .find(|(unit, _)| seconds >= *unit)
            .map(|(unit, make)| make(seconds / unit))
            .unwrap_or(RelativeTime::Seconds(seconds))
    }

    /// Localization key taking a `count` argument.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RelativeTime::Seconds(_) => "time-seconds-ago",
            RelativeTime::Minutes(_) => "time-minutes-ago",
            RelativeTime::Hours(_) => "time-hours-ago",
            RelativeTime::Days(_) => "time-days-ago",
            RelativeTime::Months(_) => "time-months-ago",
            RelativeTime::Years(_) => "time-years-ago",
        }
    }

    #[must_use]
    pub fn count(self) -> i64 {
        match self {
            RelativeTime::Seconds(n)
            | RelativeTime::Minutes(n)
            | RelativeTime::Hours(n)
            | RelativeTime::Days(n)
            | RelativeTime::Months(n)
            | RelativeTime::Years(n) => n,
        }
    }
}

/// Instant `minutes` before `now`.
#[must_use]
pub fn minutes_before(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    now - TimeDelta::minutes(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_736_150_000 + seconds, 0).unwrap()
    }

    #[test]
    fn number_gets_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(2847), "2,847");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn file_size_picks_unit() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(46_080), "45 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("a longer sentence", 8), "a longer...");
        assert_eq!(truncate("实现转换功能", 2), "实现...");
    }

    #[test]
    fn relative_time_uses_largest_unit() {
        let now = at(100_000);
        assert_eq!(RelativeTime::between(at(99_990), now), RelativeTime::Seconds(10));
        assert_eq!(RelativeTime::between(at(99_880), now), RelativeTime::Minutes(2));
        assert_eq!(RelativeTime::between(at(100_000 - 7_200), now), RelativeTime::Hours(2));
        assert_eq!(RelativeTime::between(at(0), now), RelativeTime::Days(1));
    }

    #[test]
    fn future_instant_is_now() {
        let now = at(0);
        assert_eq!(RelativeTime::between(at(60), now), RelativeTime::Seconds(0));
    }

    #[test]
    fn minutes_before_subtracts() {
        let now = at(600);
        let then = minutes_before(now, 5);
        assert_eq!(RelativeTime::between(then, now), RelativeTime::Minutes(5));
    }
}
