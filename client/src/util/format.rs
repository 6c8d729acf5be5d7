//! Display formatting for timestamps and headline counters.
//!
//! Timestamps are rendered in UTC so server-rendered and hydrated markup agree.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

fn to_datetime(ms: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000).ok()
}

/// `YYYY-MM-DD` for an epoch-millisecond instant.
pub fn format_date(ms: i64) -> String {
    to_datetime(ms)
        .and_then(|dt| dt.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| ms.to_string())
}

/// `YYYY-MM-DD HH:MM` for an epoch-millisecond instant.
pub fn format_timestamp(ms: i64) -> String {
    to_datetime(ms)
        .and_then(|dt| {
            dt.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
                .ok()
        })
        .unwrap_or_else(|| ms.to_string())
}

/// Group digits in threes: `45678` -> `45,678`.
pub fn format_count(value: u64) -> String {
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
