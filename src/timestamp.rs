//! Timestamp prefix shared by the file and console tracers.

use chrono::{DateTime, Local, TimeZone};

/// strftime pattern of the bracketed prefix, `[YYYY-MM-DD HH:MM:SS] `.
pub const TIMESTAMP_FORMAT: &str = "[%Y-%m-%d %H:%M:%S] ";

/// Prefix for a line written now, in local time.
pub fn local_prefix() -> String {
    prefix_for(&Local::now())
}

pub fn prefix_for<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Prepends the current local timestamp to an already labelled message.
pub fn stamp(message: &str) -> String {
    let mut line = local_prefix();
    line.push_str(message);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_prefix_layout() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(7, 5, 42))
            .unwrap()
            .and_utc();
        assert_eq!(prefix_for::<Utc>(&at), "[2024-03-09 07:05:42] ");
    }

    #[test]
    fn test_stamp_keeps_message_verbatim() {
        let line = stamp("Debug: no newline");
        assert!(line.starts_with('['));
        assert_eq!(&line[20..22], "] ");
        assert!(line.ends_with("Debug: no newline"));
        assert!(!line.ends_with('\n'));
    }
}
