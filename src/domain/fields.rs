//! Parsers for the positional text fields carried by every invocation.
//!
//! Every failure names the field and echoes the offending text so the caller
//! can tell which argument to fix.

use crate::error::{RecordError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Combined date and time, e.g. `15/03/2024:10:30:00`.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y:%H:%M:%S";
/// Date only, e.g. `15/03/2024`.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Fails unless `args` holds exactly `expected` entries.
pub fn expect_arity(operation: &str, args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(RecordError::ValidationError(format!(
            "Invalid number of arguments for {operation}: expected {expected}, got {}",
            args.len()
        )));
    }
    Ok(())
}

pub fn parse_i64(field: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|e| RecordError::ValidationError(format!("Invalid {field} '{raw}': {e}")))
}

/// Parses a finite float. `NaN` and infinities are rejected because they do
/// not survive a JSON round trip.
pub fn parse_f64(field: &str, raw: &str) -> Result<f64> {
    let value = raw
        .parse::<f64>()
        .map_err(|e| RecordError::ValidationError(format!("Invalid {field} '{raw}': {e}")))?;
    if !value.is_finite() {
        return Err(RecordError::ValidationError(format!(
            "Invalid {field} '{raw}': value must be finite"
        )));
    }
    Ok(value)
}

pub fn parse_date_time(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
        .map(|dt| dt.and_utc())
        .map_err(|e| {
            RecordError::ValidationError(format!(
                "Invalid {field} '{raw}': expected DD/MM/YYYY:HH:MM:SS ({e})"
            ))
        })
}

/// Parses a date-only field; the time component is fixed at midnight UTC.
pub fn parse_date(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| {
            RecordError::ValidationError(format!(
                "Invalid {field} '{raw}': expected DD/MM/YYYY ({e})"
            ))
        })
}
