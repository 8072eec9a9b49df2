//! Display helpers for chapter and entry timestamps.
//!
//! All helpers take the viewer's timezone (or a zoned "now") explicitly so
//! output is deterministic.

use crate::model::entry::JournalEntry;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const MINUTES_PER_DAY: f64 = 1440.0;
/// Distances below 42 hours still read as a single day.
const ONE_DAY_LIMIT_MINUTES: f64 = 2520.0;

/// Sidebar label for a chapter's `updated_at`.
///
/// - same calendar day as `now` -> `today`
/// - previous calendar day -> `yesterday`
/// - less than a week away -> `N days ago` / `in N days`
/// - otherwise -> `Mar 4`
pub fn format_relative_time<Tz>(at: DateTime<Utc>, now: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = at.with_timezone(&now.timezone());
    let today = now.date_naive();
    let day = local.date_naive();
    if day == today {
        return "today".to_string();
    }
    if today.pred_opt() == Some(day) {
        return "yesterday".to_string();
    }

    let elapsed = now.signed_duration_since(at);
    if elapsed.num_days() < 7 {
        return describe_distance(elapsed.num_minutes());
    }

    local.format("%b %-d").to_string()
}

/// Timeline label for an entry, e.g. `9:05 AM`.
pub fn format_entry_time<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%-I:%M %p").to_string()
}

/// Chapter header label, e.g. `March 4, 2026`.
pub fn format_chapter_date<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%B %-d, %Y").to_string()
}

/// Entry time, suffixed with ` · voice note` for transcribed entries.
pub fn entry_caption<Tz>(entry: &JournalEntry, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let time = format_entry_time(entry.created_at, tz);
    if entry.is_voice() {
        format!("{time} · voice note")
    } else {
        time
    }
}

fn describe_distance(elapsed_minutes: i64) -> String {
    let minutes = elapsed_minutes.unsigned_abs() as f64;
    let phrase = if minutes < MINUTES_PER_DAY {
        let hours = ((minutes / 60.0).round() as u64).max(1);
        if hours == 1 {
            "about 1 hour".to_string()
        } else {
            format!("about {hours} hours")
        }
    } else if minutes < ONE_DAY_LIMIT_MINUTES {
        "1 day".to_string()
    } else {
        let days = ((minutes / MINUTES_PER_DAY).round() as u64).max(2);
        format!("{days} days")
    };

    if elapsed_minutes >= 0 {
        format!("{phrase} ago")
    } else {
        format!("in {phrase}")
    }
}

#[cfg(test)]
mod tests {
    use super::{
        entry_caption, format_chapter_date, format_entry_time, format_relative_time,
    };
    use crate::model::entry::{JournalEntry, NewEntry};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn relative_time_uses_calendar_days_for_today_and_yesterday() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        assert_eq!(format_relative_time(now - Duration::hours(8), now), "today");
        assert_eq!(
            format_relative_time(now - Duration::hours(10), now),
            "yesterday"
        );
    }

    #[test]
    fn relative_time_within_week_counts_days() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 9, 0, 0).unwrap();
        assert_eq!(
            format_relative_time(now - Duration::days(3), now),
            "3 days ago"
        );
        assert_eq!(format_relative_time(now + Duration::days(2), now), "in 2 days");
    }

    #[test]
    fn relative_time_reads_one_day_until_forty_two_hours() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 1, 0, 0).unwrap();
        assert_eq!(
            format_relative_time(now - Duration::hours(37), now),
            "1 day ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::hours(41) - Duration::minutes(59), now),
            "1 day ago"
        );
        assert_eq!(
            format_relative_time(now - Duration::hours(42), now),
            "2 days ago"
        );
    }

    #[test]
    fn relative_time_older_than_week_uses_short_date() {
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap();
        assert_eq!(
            format_relative_time(Utc.with_ymd_and_hms(2026, 3, 4, 18, 0, 0).unwrap(), now),
            "Mar 4"
        );
    }

    #[test]
    fn entry_and_chapter_labels() {
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 21, 5, 0).unwrap();
        assert_eq!(format_entry_time(at, &Utc), "9:05 PM");
        assert_eq!(format_chapter_date(at, &Utc), "March 4, 2026");
    }

    #[test]
    fn voice_entries_get_caption_suffix() {
        let at = Utc.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap();
        let voice = JournalEntry::from_payload(NewEntry::voice("hello"), at);
        let text = JournalEntry::from_payload(NewEntry::text("hello"), at);
        assert_eq!(entry_caption(&voice, &Utc), "9:30 AM · voice note");
        assert_eq!(entry_caption(&text, &Utc), "9:30 AM");
    }
}
