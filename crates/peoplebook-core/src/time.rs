use chrono::{NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Normalizes a date of birth to `YYYY-MM-DD`; blank input stays blank.
pub fn parse_dob(input: &str) -> Result<String, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| TimeParseError::InvalidDateFormat)?;
    Ok(date.format("%Y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::{now_millis, parse_dob, TimeParseError};

    #[test]
    fn parse_dob_accepts_iso_dates() {
        assert_eq!(parse_dob(" 1990-04-01 ").unwrap(), "1990-04-01");
    }

    #[test]
    fn parse_dob_keeps_blank_values() {
        assert_eq!(parse_dob("  ").unwrap(), "");
    }

    #[test]
    fn parse_dob_rejects_other_formats() {
        assert_eq!(parse_dob("01/04/1990"), Err(TimeParseError::InvalidDateFormat));
        assert!(parse_dob("1990-02-30").is_err());
    }

    #[test]
    fn now_millis_is_after_2020() {
        assert!(now_millis() > 1_577_836_800_000);
    }
}
