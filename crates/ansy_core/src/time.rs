//! Timestamp parsing and formatting helpers.
//!
//! Recordings and sync files carry ISO-8601-style timestamps, but the
//! recorders are not consistent about timezone suffixes or the date/time
//! separator, so parsing accepts several layouts.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Accepted naive (zone-less) layouts, tried in order. `%.f` also matches
/// an absent fractional part.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse an ISO-8601-style timestamp into an absolute instant.
///
/// Accepts RFC 3339 strings as well as naive `YYYY-MM-DD HH:MM:SS[.fff]`
/// forms with either a space or `T` separator; naive values are taken as
/// UTC. Returns `None` if no layout matches.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// Format an instant for tabular output, millisecond precision.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339() {
        let ts = parse_timestamp("2022-03-01T10:00:00.250+00:00").unwrap();
        assert_eq!(ts.timestamp_millis() % 1000, 250);
    }

    #[test]
    fn parses_naive_with_space_separator() {
        let ts = parse_timestamp("2022-03-01 10:00:00.250").unwrap();
        assert_eq!(ts, parse_timestamp("2022-03-01T10:00:00.250").unwrap());
    }

    #[test]
    fn parses_without_fraction() {
        let ts = parse_timestamp("2022-03-01 10:00:00").unwrap();
        assert_eq!(ts.timestamp_millis() % 1000, 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not a timestamp").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn format_round_trips() {
        let ts = parse_timestamp("2022-03-01 10:00:00.530").unwrap();
        let formatted = format_timestamp(ts);
        assert_eq!(formatted, "2022-03-01 10:00:00.530");
        assert_eq!(parse_timestamp(&formatted).unwrap(), ts);
    }
}
