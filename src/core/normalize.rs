//! Event normalizer
//!
//! Turns loosely typed store documents into `CheckIn`s. Records whose mood
//! or timestamp cannot be resolved are dropped and counted, never raised.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

use crate::core::types::{CheckIn, RawCheckIn};
use crate::utils::Timezone;

const MOOD_FIELDS: [&str; 2] = ["mood", "moodLabel"];
const TIMESTAMP_FIELDS: [&str; 2] = ["createdAt", "created_at"];

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Output of a normalization pass
#[derive(Debug, Default, Clone)]
pub(crate) struct Normalized {
    pub(crate) events: Vec<CheckIn>,
    pub(crate) dropped: usize,
}

/// Normalize a list of raw records, preserving input order
pub(crate) fn normalize(records: &[RawCheckIn], timezone: Timezone) -> Normalized {
    let mut out = Normalized {
        events: Vec::with_capacity(records.len()),
        dropped: 0,
    };
    for (idx, record) in records.iter().enumerate() {
        match normalize_record(record, timezone) {
            Some(event) => out.events.push(event),
            None => {
                tracing::debug!(index = idx, "dropping malformed check-in record");
                out.dropped += 1;
            }
        }
    }
    out
}

fn normalize_record(record: &RawCheckIn, timezone: Timezone) -> Option<CheckIn> {
    let doc = record.as_object()?;

    let mood = MOOD_FIELDS
        .iter()
        .find_map(|f| doc.get(*f).and_then(Value::as_str))
        .map(str::trim)
        .filter(|m| !m.is_empty())?;

    let instant = TIMESTAMP_FIELDS
        .iter()
        .find_map(|f| doc.get(*f).filter(|v| !v.is_null()))
        .and_then(|v| resolve_instant(v, timezone))?;

    Some(CheckIn {
        mood: mood.to_string(),
        created_at: timezone.to_fixed_offset(instant),
    })
}

/// Resolve a stored timestamp into an instant
pub(crate) fn resolve_instant(value: &Value, timezone: Timezone) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp_str(s.trim(), timezone),
        Value::Number(n) => {
            if let Some(ms) = n.as_i64() {
                DateTime::from_timestamp_millis(ms)
            } else {
                let ms = n.as_f64().filter(|f| f.is_finite())?;
                if ms.abs() > i64::MAX as f64 {
                    return None;
                }
                DateTime::from_timestamp_millis(ms.trunc() as i64)
            }
        }
        Value::Object(map) => {
            let seconds = map
                .get("seconds")
                .or_else(|| map.get("_seconds"))
                .and_then(Value::as_i64)?;
            let nanos = match map.get("nanoseconds").or_else(|| map.get("_nanoseconds")) {
                None | Some(Value::Null) => 0,
                Some(v) => u32::try_from(v.as_u64()?).ok()?,
            };
            DateTime::from_timestamp(seconds, nanos)
        }
        Value::Null | Value::Bool(_) | Value::Array(_) => None,
    }
}

fn parse_timestamp_str(s: &str, timezone: Timezone) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return timezone.from_local(naive);
        }
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    timezone.from_local(date.and_time(NaiveTime::MIN))
}

/// Article-qualified JSON type name for error messages
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
