use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Parse a reference date given on the command line
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    if trimmed.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(trimmed, "%Y%m%d")
    {
        return Ok(d);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| AppError::InvalidDate {
        input: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compact_form() {
        assert_eq!(
            parse_date("20260211").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
        );
    }

    #[test]
    fn parses_dashed_form() {
        assert_eq!(
            parse_date(" 2026-02-11 ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
        );
    }

    #[test]
    fn rejects_garbage() {
        let err = parse_date("yesterday").unwrap_err();
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn rejects_impossible_day() {
        assert!(parse_date("2026-02-30").is_err());
    }
}
