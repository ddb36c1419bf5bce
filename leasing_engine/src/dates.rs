//! Date and timestamp helpers.
//!
//! All timestamps are stored as RFC-3339 UTC strings with millisecond precision;
//! date-only business fields (delivery dates in task notes) use `YYYY-MM-DD`.
//! Contract deadlines use calendar arithmetic: instalments start one calendar
//! month after the request or akad date, checklist tasks are due 14 days after
//! bootstrap.

use anyhow::Context;
use chrono::{DateTime, Days, Months, SecondsFormat, Utc};

/// UTC timestamp -> RFC-3339 string with millisecond precision ("...Z").
pub fn to_rfc3339_millis(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// RFC-3339 with offset -> UTC.
pub fn parse_ts_to_utc(s: &str) -> anyhow::Result<DateTime<Utc>> {
    let dt = DateTime::parse_from_rfc3339(s).with_context(|| format!("bad rfc3339: {s}"))?;
    Ok(dt.with_timezone(&Utc))
}

/// UTC timestamp -> `YYYY-MM-DD`.
pub fn format_ymd(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Add whole calendar months, clamping to the end of the target month
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(dt: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    // Overflow is only possible near chrono's year bound; keep the input then.
    dt.checked_add_months(Months::new(months)).unwrap_or(dt)
}

/// Add whole days.
pub fn add_days(dt: DateTime<Utc>, days: u64) -> DateTime<Utc> {
    dt.checked_add_days(Days::new(days)).unwrap_or(dt)
}
