//! Form-style request decoding.
//!
//! Browser forms post every field as text, so scalar leaves are converted
//! before the typed decode. Amount text keeps its leading numeric prefix the
//! way `parseFloat` reads it, count text keeps its leading integer and flag
//! text becomes a checkbox state. Anything unreadable counts as zero.

use crate::financial::PropertyFeature;
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// Keys whose string values carry meaning and are left untouched.
const VERBATIM_KEYS: &[&str] = &["schema"];

/// Integer fields. Fractional input is truncated toward zero.
const COUNT_KEYS: &[&str] = &["totalUnits"];

pub(crate) fn decode<T: DeserializeOwned>(payload: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(coerce(payload))
}

fn coerce(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(coerce_object(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(coerce).collect()),
        Value::String(text) => amount_value(parse_float_prefix(&text)),
        other => other,
    }
}

fn coerce_object(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| {
            let value = coerce_field(&key, value);
            (key, value)
        })
        .collect()
}

fn coerce_field(key: &str, value: Value) -> Value {
    if matches!(value, Value::Object(_) | Value::Array(_)) {
        return coerce(value);
    }
    if VERBATIM_KEYS.contains(&key) {
        value
    } else if COUNT_KEYS.contains(&key) {
        Value::Number(Number::from(coerce_count(&value)))
    } else if is_flag_key(key) {
        Value::Bool(coerce_flag(&value))
    } else {
        coerce(value)
    }
}

fn is_flag_key(key: &str) -> bool {
    PropertyFeature::ordered()
        .into_iter()
        .any(|feature| feature.key() == key)
}

fn coerce_count(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| {
                number
                    .as_f64()
                    .filter(|amount| amount.is_finite())
                    .map(|amount| amount.trunc() as i64)
            })
            .unwrap_or_default(),
        Value::String(text) => parse_int_prefix(text),
        _ => 0,
    }
}

fn coerce_flag(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|amount| amount != 0.0),
        Value::String(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "on" | "yes" | "1"
        ),
        _ => false,
    }
}

fn amount_value(amount: f64) -> Value {
    Number::from_f64(amount)
        .map(Value::Number)
        .unwrap_or_else(|| Value::Number(Number::from(0)))
}

/// Longest leading decimal literal of `text`, or 0 when there is none.
/// `"4,5"` reads as 4 and `"1200 $"` as 1200.
fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end]
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or_default()
}

/// Leading integer of `text` the way `parseInt` reads it, or 0.
fn parse_int_prefix(text: &str) -> i64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(&bytes[sign..]);

    if digits == 0 {
        return 0;
    }
    text[..sign + digits].parse::<i64>().unwrap_or_default()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
