//! Absent-aware access into decoded JSON and the date/time sub-parsers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::Value;

use crate::error::CoreError;
use crate::vocabulary::Vocabulary;

static NULL: Value = Value::Null;

/// Read-only view over one JSON object.
///
/// Every accessor returns the absent form (`None`, an empty iterator, or an
/// all-absent nested view) when the key is missing, `null`, or of the wrong
/// kind. A view over a non-object behaves as an object with no keys.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Fields<'a> {
    value: &'a Value,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// View over a top-level payload that must be an object.
    pub(crate) fn expect_object(
        value: &'a Value,
        context: &'static str,
    ) -> Result<Self, CoreError> {
        match value {
            Value::Object(_) => Ok(Self::new(value)),
            other => Err(shape_error(context, "object", other)),
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.get(key).filter(|v| !v.is_null())
    }

    /// Nested object, or an empty view when absent.
    pub(crate) fn nested(&self, key: &str) -> Fields<'a> {
        Fields::new(self.get(key).unwrap_or(&NULL))
    }

    /// Like [`nested`](Self::nested), but a present non-object value is a
    /// shape error.
    pub(crate) fn expect_nested(
        &self,
        key: &str,
        context: &'static str,
    ) -> Result<Fields<'a>, CoreError> {
        match self.get(key) {
            None => Ok(Fields::new(&NULL)),
            Some(value) => Self::expect_object(value, context),
        }
    }

    /// Nested object, or `None` when absent or not an object.
    pub(crate) fn object(&self, key: &str) -> Option<Fields<'a>> {
        self.get(key).filter(|v| v.is_object()).map(Fields::new)
    }

    /// Elements of a nested list, in order. Absent lists are empty.
    pub(crate) fn list(&self, key: &str) -> impl Iterator<Item = Fields<'a>> + 'a {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .map(Fields::new)
    }

    /// Like [`list`](Self::list), but a present non-list value is a shape error.
    pub(crate) fn expect_list(
        &self,
        key: &str,
        context: &'static str,
    ) -> Result<impl Iterator<Item = Fields<'a>> + 'a, CoreError> {
        let items: &'a [Value] = match self.get(key) {
            None => &[],
            Some(Value::Array(items)) => items,
            Some(other) => return Err(shape_error(context, "array", other)),
        };
        Ok(items.iter().map(Fields::new))
    }

    pub(crate) fn str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    pub(crate) fn string(&self, key: &str) -> Option<String> {
        self.str(key).map(str::to_owned)
    }

    /// Unsigned integer. The API sends some counters as numeric strings.
    pub(crate) fn uint<T: TryFrom<u64>>(&self, key: &str) -> Option<T> {
        let raw = match self.get(key)? {
            Value::Number(n) => n.as_u64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        T::try_from(raw).ok()
    }

    pub(crate) fn float(&self, key: &str) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub(crate) fn boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Permissive vocabulary conversion.
    pub(crate) fn symbol<V: Vocabulary>(&self, key: &str) -> Option<V> {
        let raw = self.get(key)?;
        let symbol = V::try_from_wire(raw);
        if symbol.is_none() {
            tracing::trace!(field = key, value = %raw, category = V::CATEGORY, "unknown symbol, treating as absent");
        }
        symbol
    }

    pub(crate) fn strings(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn date(&self, key: &str) -> Option<NaiveDate> {
        parse_date(self.str(key))
    }

    pub(crate) fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        parse_timestamp(self.str(key))
    }

    pub(crate) fn clock_time(&self, key: &str) -> Option<NaiveTime> {
        parse_clock_time(self.str(key))
    }

    /// Hard-required unsigned id.
    pub(crate) fn require_uint(&self, key: &'static str) -> Result<u64, CoreError> {
        self.uint(key).ok_or(CoreError::MissingField(key))
    }

    /// Hard-required string.
    pub(crate) fn require_string(&self, key: &'static str) -> Result<String, CoreError> {
        self.string(key).ok_or(CoreError::MissingField(key))
    }
}

fn shape_error(context: &'static str, expected: &'static str, found: &Value) -> CoreError {
    CoreError::Shape {
        context,
        expected,
        found: kind_of(found),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a `YYYY-MM-DD`, `YYYY-MM` or `YYYY` date.
///
/// The precision is picked by counting `-` separators. Missing month and day
/// default to `1`. Absent, empty and malformed input all yield `None`.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = non_empty(raw)?;
    let parsed = match raw.matches('-').count() {
        0 => raw
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        1 => NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok(),
        2 => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
        _ => None,
    };
    if parsed.is_none() {
        tracing::debug!(value = raw, "unparseable date, treating as absent");
    }
    parsed
}

/// Parse an ISO-8601 timestamp such as `2022-11-03T10:15:45+00:00`.
///
/// Timestamps without an offset are taken as UTC.
pub fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = non_empty(raw)?;
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.and_utc()));
    match parsed {
        Ok(dt) => Some(dt),
        Err(e) => {
            tracing::debug!(value = raw, error = %e, "unparseable timestamp, treating as absent");
            None
        }
    }
}

/// Parse an `HH:MM` clock time.
pub fn parse_clock_time(raw: Option<&str>) -> Option<NaiveTime> {
    let raw = non_empty(raw)?;
    match NaiveTime::parse_from_str(raw, "%H:%M") {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::debug!(value = raw, error = %e, "unparseable clock time, treating as absent");
            None
        }
    }
}
