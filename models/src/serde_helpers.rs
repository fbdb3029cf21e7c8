// models/src/serde_helpers.rs
// Lenient decoding for the date-time and time-of-day fields of creation
// payloads. Output always uses chrono's default ISO-8601 encoding.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::errors::{ValidationError, ValidationResult};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Parses a date-time without offset. A value carrying an RFC 3339 offset is
/// accepted and reduced to its local wall-clock reading; a bare date means
/// midnight of that day.
pub fn parse_datetime(value: &str) -> ValidationResult<NaiveDateTime> {
    let value = value.trim();
    if let Some(parsed) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Ok(parsed);
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.naive_local())
        .map_err(|_| ValidationError::InvalidDateTime(value.to_string()))
}

pub fn parse_time(value: &str) -> ValidationResult<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidTime(value.to_string()))
}

pub fn deserialize_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_datetime(&raw).map_err(D::Error::custom)
}

pub fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_time(&raw).map_err(D::Error::custom)
}

/// Accepts a JSON integer, or a float with no fractional part, that fits in
/// `u8`. Anything else is a decode error.
pub fn deserialize_whole_u8<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    let whole = match (number.as_u64(), number.as_i64(), number.as_f64()) {
        (Some(n), _, _) => i128::from(n),
        (None, Some(n), _) => i128::from(n),
        (None, None, Some(f)) if f.fract() == 0.0 && f.abs() < 1e18 => f as i128,
        _ => return Err(D::Error::custom(format!("expected an integer, got {number}"))),
    };
    u8::try_from(whole)
        .map_err(|_| D::Error::custom(format!("integer {whole} is out of range for an age")))
}

/// Treats an explicit JSON `null` the same as an omitted field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
