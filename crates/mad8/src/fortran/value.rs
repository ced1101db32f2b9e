use serde::Serialize;

use super::number::parse_real;

/// A single value decoded from a fixed-width field
///
/// Real descriptors never fail. Anything that does not convert to a number is
/// kept as the [Value::Raw] text of the field so that the caller decides what
/// to do with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Character field, untrimmed
    Text(String),
    /// Integer field
    Integer(i64),
    /// Logical field
    Logical(bool),
    /// Real field that converted successfully
    Real(f64),
    /// Real field that could not be converted, untrimmed
    Raw(String),
}

impl Value {
    /// The number held by a successfully converted real
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// The text held by character fields and unconverted reals
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) | Value::Raw(text) => Some(text),
            _ => None,
        }
    }
}

/// Convert a value to a real number if possible, or return it unchanged
///
/// The "soft float" rule applied to every real field:
/// - [Value::Real] is returned as-is
/// - [Value::Integer] becomes the equivalent [Value::Real]
/// - [Value::Text] and [Value::Raw] become [Value::Real] if the trimmed text
///   is a number, and are otherwise returned untouched
/// - [Value::Logical] is returned as-is
///
/// Applying this twice always gives the same result as applying it once.
///
/// ```rust
/// # use madtools_mad8::fortran::{try_float, Value};
/// let value = try_float(Value::Text(" 0.5E+01 ".to_string()));
/// assert_eq!(value, Value::Real(5.0));
///
/// let value = try_float(Value::Text("QF1".to_string()));
/// assert_eq!(value, Value::Text("QF1".to_string()));
/// ```
pub fn try_float(value: Value) -> Value {
    match value {
        Value::Integer(number) => Value::Real(number as f64),
        Value::Text(text) => match parse_real(&text, None) {
            Some(number) => Value::Real(number),
            None => Value::Text(text),
        },
        Value::Raw(text) => match parse_real(&text, None) {
            Some(number) => Value::Real(number),
            None => Value::Raw(text),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> Vec<Value> {
        vec![
            Value::Text("  DRIF".to_string()),
            Value::Text(" 0.2E+01".to_string()),
            Value::Raw("                ".to_string()),
            Value::Raw(" 0.1-100".to_string()),
            Value::Integer(42),
            Value::Logical(true),
            Value::Real(-3.5),
        ]
    }

    #[test]
    fn soft_conversion() {
        let converted: Vec<Value> = samples().into_iter().map(try_float).collect();
        assert_eq!(converted[0], Value::Text("  DRIF".to_string()));
        assert_eq!(converted[1], Value::Real(2.0));
        assert_eq!(converted[2], Value::Raw("                ".to_string()));
        assert_eq!(converted[3], Value::Real(0.1e-100));
        assert_eq!(converted[4], Value::Real(42.0));
        assert_eq!(converted[5], Value::Logical(true));
        assert_eq!(converted[6], Value::Real(-3.5));
    }

    #[test]
    fn idempotent() {
        for value in samples() {
            let once = try_float(value);
            let twice = try_float(once.clone());
            assert_eq!(once, twice);
        }
    }
}
