use time::Month;

use crate::error::AppError;

pub const INVALID_MONTH: &str = "Invalid month. Please provide a month between 1 and 12.";

fn parse_month(raw: &str) -> Result<Month, AppError> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .ok_or_else(|| AppError::validation(INVALID_MONTH))
}

/// Month for the aggregation endpoints: must be present and in 1..=12.
pub fn required_month(raw: Option<&str>) -> Result<Month, AppError> {
    match raw {
        Some(v) if !v.trim().is_empty() => parse_month(v),
        _ => Err(AppError::validation(INVALID_MONTH)),
    }
}

/// Month filter for listings; an empty value means no filter.
pub fn optional_month(raw: Option<&str>) -> Result<Option<Month>, AppError> {
    match raw {
        Some(v) if !v.trim().is_empty() => parse_month(v).map(Some),
        _ => Ok(None),
    }
}

/// Integer parameter that must be >= 1, with a default when absent or empty.
pub fn positive_int(raw: Option<&str>, name: &str, default: i64) -> Result<i64, AppError> {
    let Some(v) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(default);
    };
    match v.parse::<i64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::validation(format!(
            "Invalid {name}. Please provide an integer of at least 1."
        ))),
    }
}
