//! Request validation for employee writes
//!
//! Checks run in a fixed order and the first failure wins: presence of every
//! required field, then the text fields, then salary, then the date.
//! Nothing here touches the store.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::EmployeeInput;

/// Fields every create/update payload must carry
pub const REQUIRED_FIELDS: [&str; 6] = [
    "first_name",
    "last_name",
    "group_name",
    "role",
    "expected_salary",
    "expected_date_of_defense",
];

/// Date-time layouts accepted without an offset (read as UTC)
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts accepted (midnight UTC)
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Why a request was rejected before reaching the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Field '{0}' must be a text value")]
    InvalidField(&'static str),

    #[error("Expected salary must be a number")]
    InvalidSalary,

    #[error("Expected date of defense must be a valid date")]
    InvalidDate,

    #[error("Invalid employee id")]
    InvalidId,
}

/// Validate a raw create/update body into an [`EmployeeInput`].
///
/// A field counts as missing when it is absent, `null`, `false`, `0` or `""`.
/// A body that is not a JSON object has no fields at all.
pub fn validate_employee(payload: &Value) -> Result<EmployeeInput, ValidationError> {
    let empty = Map::new();
    let fields = payload.as_object().unwrap_or(&empty);

    let [first_name, last_name, group_name, role, salary, date] =
        REQUIRED_FIELDS.map(|name| fields.get(name).filter(|value| is_truthy(value)));

    let (
        Some(first_name),
        Some(last_name),
        Some(group_name),
        Some(role),
        Some(salary),
        Some(date),
    ) = (first_name, last_name, group_name, role, salary, date)
    else {
        return Err(ValidationError::MissingFields);
    };

    let first_name = text("first_name", first_name)?;
    let last_name = text("last_name", last_name)?;
    let group_name = text("group_name", group_name)?;
    let role = text("role", role)?;

    let expected_salary = parse_salary(salary).ok_or(ValidationError::InvalidSalary)?;
    let expected_date_of_defense = parse_date(date).ok_or(ValidationError::InvalidDate)?;

    Ok(EmployeeInput {
        first_name,
        last_name,
        group_name,
        role,
        expected_salary,
        expected_date_of_defense,
    })
}

/// Validate the `:id` path segment
pub fn validate_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse().map_err(|_| ValidationError::InvalidId)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn text(name: &'static str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(ValidationError::InvalidField(name)),
    }
}

/// Parse a salary given as a JSON number or a numeric string.
///
/// Values outside `Decimal` range (magnitude above ~7.9e28, or more than 28
/// fractional digits) are rejected.
pub fn parse_salary(value: &Value) -> Option<Decimal> {
    let raw = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    // rust_decimal tolerates digit separators, JSON numbers never carry them
    if raw.is_empty() || raw.contains('_') {
        return None;
    }
    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .ok()
}

/// Parse a date given as a date/date-time string or epoch milliseconds
pub fn parse_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s.trim()),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
