//! Date and reading-time helpers

use chrono::{DateTime, TimeZone};

/// Words per minute used for the reading-time estimate
const WORDS_PER_MINUTE: usize = 200;

/// Format a date in full format (like "January 1, 2024")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Estimate reading time from the body word count
pub fn reading_time(content: &str) -> String {
    let word_count = content.split_whitespace().count();
    let minutes = word_count.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}
