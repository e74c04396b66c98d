use jiff::{Timestamp, civil, tz::TimeZone};
use std::cell::Cell;
use std::rc::Rc;

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

const DATE_FORMAT: &str = "%B %-d, %Y";

/// Clock used for relative dates. Pinned clocks let tests and previews
/// render stable output.
#[derive(Clone, Default)]
pub struct TimeSource {
    pinned: Option<Rc<Cell<Timestamp>>>,
}

impl TimeSource {
    /// The real clock.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pinned(time: Timestamp) -> Self {
        Self {
            pinned: Some(Rc::new(Cell::new(time))),
        }
    }

    pub fn now(&self) -> Timestamp {
        match &self.pinned {
            Some(time) => time.get(),
            None => Timestamp::now(),
        }
    }

    /// Move a pinned clock forward. No effect on the real clock.
    pub fn advance(&self, duration: jiff::SignedDuration) {
        if let Some(time) = &self.pinned {
            if let Ok(next) = time.get().checked_add(duration) {
                time.set(next);
            }
        }
    }

    pub fn set(&self, time: Timestamp) {
        if let Some(pinned) = &self.pinned {
            pinned.set(time);
        }
    }
}

/// Parse a post date as sent by the API (RFC 3339) or found in feeds
/// (RFC 2822). Offset-less values are read as UTC.
pub fn parse_post_date(raw: &str) -> Option<Timestamp> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(timestamp) = raw.parse::<Timestamp>() {
        return Some(timestamp);
    }
    if let Ok(zoned) = jiff::fmt::rfc2822::parse(raw) {
        return Some(zoned.timestamp());
    }
    if let Ok(datetime) = raw.parse::<civil::DateTime>() {
        return datetime.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp());
    }
    if let Ok(date) = raw.parse::<civil::Date>() {
        return date.to_zoned(TimeZone::UTC).ok().map(|z| z.timestamp());
    }
    None
}

/// "January 5, 2025" in `tz`, or `raw` itself when it cannot be parsed.
pub fn format_date(raw: &str, tz: &TimeZone) -> String {
    match parse_post_date(raw) {
        Some(timestamp) => timestamp
            .to_zoned(tz.clone())
            .strftime(DATE_FORMAT)
            .to_string(),
        None => raw.to_string(),
    }
}

/// Relative age of `raw` at `now`, empty when the date cannot be parsed.
pub fn elapsed(raw: &str, now: Timestamp) -> String {
    parse_post_date(raw)
        .map(|date| elapsed_since(date, now))
        .unwrap_or_default()
}

pub fn elapsed_since(date: Timestamp, now: Timestamp) -> String {
    let diff_ms = now.as_millisecond() - date.as_millisecond();
    if diff_ms < MS_PER_MINUTE {
        return "Just now".to_string();
    }

    let days = diff_ms / MS_PER_DAY;
    match days {
        0 => {
            let hours = diff_ms / MS_PER_HOUR;
            if hours == 0 {
                count_ago(diff_ms / MS_PER_MINUTE, "minute")
            } else {
                count_ago(hours, "hour")
            }
        }
        1 => "1 day ago".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => count_ago(days / 7, "week"),
        30..=364 => count_ago(days / 30, "month"),
        _ => count_ago(days / 365, "year"),
    }
}

fn count_ago(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
