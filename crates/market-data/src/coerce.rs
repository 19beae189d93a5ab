//! Best-effort conversion of loosely typed provider JSON.
//!
//! Both providers emit numbers inconsistently: quoted floats, bare integers,
//! `null` for zero-volume periods, or fields that are simply absent. A strict
//! decode would reject a whole response over one bad field, so each field is
//! first captured as a [`RawValue`] and then coerced on its own. Every coercion
//! here is total: a value of the wrong shape becomes `0`, `0.0` or `""`.
//!
//! Request-level failures (transport, invalid JSON, missing payload) are not
//! handled here; see [`crate::errors::MarketDataError`].

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Number, Value};

/// A JSON field as it arrived from the provider, before any coercion.
///
/// Deserializes from any JSON value without failing, so response structs can
/// declare `#[serde(default)] field: RawValue` and survive whatever the provider
/// sends for that key.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawValue {
    /// The key was not present.
    #[default]
    Missing,
    /// The key was present with a JSON `null`.
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    /// An array or object where a scalar was expected.
    Composite(Value),
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawValue::Null,
            Value::Bool(b) => RawValue::Bool(b),
            Value::Number(n) => RawValue::Number(n),
            Value::String(s) => RawValue::Text(s),
            other => RawValue::Composite(other),
        }
    }
}

impl From<Option<&Value>> for RawValue {
    fn from(value: Option<&Value>) -> Self {
        value.cloned().map_or(RawValue::Missing, RawValue::from)
    }
}

/// Returns the value if it is already numeric, `0.0` otherwise.
///
/// Numeric strings are *not* parsed; use [`parse_float_text`] for providers
/// that quote their numbers.
pub fn coerce_float(value: &RawValue) -> f64 {
    match value {
        RawValue::Number(n) => n.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Returns the integer value if numeric (floats truncate toward zero), `0` otherwise.
pub fn coerce_int(value: &RawValue) -> i64 {
    match value {
        RawValue::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        _ => 0,
    }
}

/// Renders a scalar as text the way it appeared in the payload.
///
/// `null`, missing and composite values have no text form.
pub fn render_text(value: &RawValue) -> Option<Cow<'_, str>> {
    match value {
        RawValue::Text(s) => Some(Cow::Borrowed(s.as_str())),
        RawValue::Number(n) => Some(Cow::Owned(n.to_string())),
        RawValue::Bool(true) => Some(Cow::Borrowed("true")),
        RawValue::Bool(false) => Some(Cow::Borrowed("false")),
        RawValue::Missing | RawValue::Null | RawValue::Composite(_) => None,
    }
}

/// Renders the value as text and parses it as a float. `0.0` on any failure.
pub fn parse_float_text(value: &RawValue) -> f64 {
    render_text(value)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Renders the value as text and parses it as an integer. `0` on any failure.
pub fn parse_int_text(value: &RawValue) -> i64 {
    render_text(value)
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Parses a percent string such as `"1.6900%"`.
///
/// The final character is dropped unconditionally before parsing. Empty or
/// unparseable input yields `0.0`.
pub fn parse_percent_text(value: &RawValue) -> f64 {
    let Some(text) = render_text(value) else {
        return 0.0;
    };
    let mut chars = text.chars();
    if chars.next_back().is_none() {
        return 0.0;
    }
    chars.as_str().parse::<f64>().unwrap_or(0.0)
}

/// Stringifies whatever value is present. `null` and missing become `""`.
pub fn coerce_string(value: &RawValue) -> String {
    match value {
        RawValue::Missing | RawValue::Null => String::new(),
        RawValue::Composite(v) => v.to_string(),
        other => render_text(other).map(Cow::into_owned).unwrap_or_default(),
    }
}

/// Decodes `value` into `T`, falling back to `T::default()` if the shape is wrong.
///
/// Used for per-record decoding where a malformed record should degrade to
/// zeroed fields rather than fail the request.
pub fn decode_lenient<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_default()
}
