use chrono::{Local, NaiveDate, SecondsFormat, Utc};

/// The display format tasks carry, e.g. `24 Aug 2022`.
const TASK_DATE_FMT: &str = "%d %b %Y";

/// Today in task display format (`7 Aug 2026`, no zero padding).
pub fn today_str() -> String {
    Local::now().format("%-d %b %Y").to_string()
}

/// Parse a task display date. Accepts both `6 Jan 2022` and `06 Jan 2022`.
pub fn parse_task_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), TASK_DATE_FMT).ok()
}

/// Sort key for a task date string. Unparseable dates order first so they
/// surface at the top of an ascending date sort instead of vanishing.
pub fn date_sort_key(s: &str) -> NaiveDate {
    parse_task_date(s).unwrap_or(NaiveDate::MIN)
}

/// Current instant as an RFC 3339 UTC timestamp (`2023-10-12T14:30:00Z`),
/// the format activity entries and comments carry.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
