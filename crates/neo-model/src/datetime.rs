//! Timestamp handling for close-approach times.
//!
//! The approach data encodes calendar dates in a compact form such as
//! `1900-Jan-01 00:00` (English month abbreviations, no seconds). Output
//! uses the numeric `YYYY-MM-DD HH:MM` layout at the same minute
//! resolution, so formatting truncates rather than rounds.

use chrono::NaiveDateTime;

use crate::error::{ModelError, Result};

/// Input layout of the approach source, e.g. `1969-Jul-16 13:32`.
pub const APPROACH_TIME_INPUT: &str = "%Y-%b-%d %H:%M";

/// Output layout, minute resolution, e.g. `1969-07-16 13:32`.
pub const APPROACH_TIME_OUTPUT: &str = "%Y-%m-%d %H:%M";

/// Parse a compact calendar-date string into a timestamp.
pub fn parse_approach_time(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), APPROACH_TIME_INPUT)
        .map_err(|err| ModelError::validation("time", format!("{raw:?}: {err}")))
}

/// Render a timestamp at minute resolution in `YYYY-MM-DD HH:MM` form.
pub fn format_approach_time(time: &NaiveDateTime) -> String {
    time.format(APPROACH_TIME_OUTPUT).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Timelike};

    use super::*;

    #[test]
    fn parses_compact_calendar_date() {
        let time = parse_approach_time("1900-Jan-01 00:00").unwrap();
        assert_eq!(
            time.date(),
            NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
        );
        assert_eq!(time.hour(), 0);
        assert_eq!(time.minute(), 0);
    }

    #[test]
    fn formats_at_minute_resolution() {
        let time = parse_approach_time("1969-Jul-16 13:32").unwrap();
        assert_eq!(format_approach_time(&time), "1969-07-16 13:32");
    }

    #[test]
    fn truncates_seconds_instead_of_rounding() {
        let time = NaiveDate::from_ymd_opt(2020, 2, 29)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_approach_time(&time), "2020-02-29 23:59");
    }

    #[test]
    fn rejects_unparsable_input() {
        let err = parse_approach_time("2020-13-01 00:00").unwrap_err();
        assert!(matches!(err, ModelError::Validation { field: "time", .. }));
    }
}
