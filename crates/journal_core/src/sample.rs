//! Sample chapters for first launch and demos.

use crate::model::chapter::Chapter;
use crate::model::entry::{JournalEntry, NewEntry};
use chrono::{DateTime, Duration, Utc};

/// Builds the three starter chapters, timestamped relative to `now`.
///
/// Order matches sidebar order: the first chapter is the one a seeded store
/// selects.
pub fn sample_chapters(now: DateTime<Utc>) -> Vec<Chapter> {
    let mut morning = Chapter::new("Morning Reflections", now - Duration::days(2));
    morning.updated_at = now;
    morning.entries = vec![
        JournalEntry::from_payload(
            NewEntry::text(
                "The morning light filtered through the curtains, casting long shadows across the room. I found myself thinking about the nature of time, how it moves so slowly in moments of anticipation, yet rushes past when we least expect it.",
            ),
            now - Duration::hours(2),
        ),
        JournalEntry::from_payload(
            NewEntry::text(
                "There's something profound about the quiet hours before the world fully wakes. In this stillness, thoughts feel more authentic, less filtered by the expectations of the day.",
            ),
            now - Duration::hours(1),
        ),
    ];

    let mut creative = Chapter::new("Creative Projects", now - Duration::days(5));
    creative.updated_at = now - Duration::days(1);
    creative.entries = vec![JournalEntry::from_payload(
        NewEntry::text(
            "Started sketching ideas for the new project today. The initial concepts feel rough, unformed, but that's always how it begins. Trust the process.",
        ),
        now - Duration::days(1),
    )];

    let mut travel = Chapter::new("Travel Notes", now - Duration::days(14));
    travel.updated_at = now - Duration::days(7);

    vec![morning, creative, travel]
}
