//! Day-count heuristic for free-text package durations.
//!
//! Takes the first run of decimal digits as the number of days and
//! defaults to a single day when the text has no digits at all. It does
//! not understand units: "5 days 4 nights" is 5 because 5 comes first,
//! and "Per day" is 1 only through the no-digits default.

use regex::Regex;
use std::sync::OnceLock;

fn first_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("digit pattern compiles"))
}

/// Parse a day count out of a duration description. Always at least 1.
pub fn parse_duration_days(text: &str) -> u32 {
    first_number()
        .find(text)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|days| *days > 0)
        .unwrap_or(1)
}
