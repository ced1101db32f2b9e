use std::fmt;

use serde::Serialize;

/// A borrowed table entry
///
/// Absent entries are values that could not be read as numbers, kept distinct
/// from zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Cell<'a> {
    /// Text column, i.e. `KEYWORD`, `NAME` and `NOTE`
    Text(&'a str),
    /// Numeric column
    Real(f64),
    /// Missing numeric value
    Absent,
}

impl Cell<'_> {
    /// The number held by a numeric cell
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Real(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<Option<f64>> for Cell<'_> {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) => Cell::Real(value),
            None => Cell::Absent,
        }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{text}"),
            Cell::Real(value) => write!(f, "{value:e}"),
            Cell::Absent => Ok(()),
        }
    }
}

/// A single file-level metadata value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Scalar {
    /// Text value, trimmed
    Text(String),
    /// Integer value
    Integer(i64),
    /// Logical value
    Logical(bool),
    /// Real value
    Real(f64),
    /// Missing value, e.g. ring radii of a linear machine
    Absent,
}

impl From<Option<f64>> for Scalar {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) => Scalar::Real(value),
            None => Scalar::Absent,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{text}"),
            Scalar::Integer(value) => write!(f, "{value}"),
            Scalar::Logical(value) => write!(f, "{value}"),
            Scalar::Real(value) => write!(f, "{value:e}"),
            Scalar::Absent => write!(f, "none"),
        }
    }
}
