// Line decoders split among files for organisation
mod element;
mod header;
mod rmat;
mod survey;
mod twiss;

// Internal re-exports for convenience
pub(crate) use element::*;
pub(crate) use header::*;
pub(crate) use rmat::*;
pub(crate) use survey::*;
pub(crate) use twiss::*;

use std::sync::OnceLock;

use log::debug;

use crate::error::{Error, Result};
use crate::fortran::{Format, Value};

/// Every fortran format used by MAD8 output files
pub(in crate::parsers) struct Formats {
    /// Header line 1
    pub header: Format,
    /// Header line 2
    pub title: Format,
    /// Element record line 1
    pub element: Format,
    /// Lines of 3, 4, 5, 6 and 7 exponent values
    pub e3: Format,
    pub e4: Format,
    pub e5: Format,
    pub e6: Format,
    pub e7: Format,
}

// Only ever build the formats once on first use
static FORMATS: OnceLock<Formats> = OnceLock::new();

pub(in crate::parsers) fn formats() -> &'static Formats {
    FORMATS.get_or_init(|| {
        let format = |f: &str| Format::parse(f).expect("invalid built-in fortran format");
        Formats {
            header: format("(5A8,I8,L8,I8)"),
            title: format("(A80)"),
            element: format("(A4,A16,F12.6,4E16.9,A19,E16.9)"),
            e3: format("(3E16.9)"),
            e4: format("(4E16.9)"),
            e5: format("(5E16.9)"),
            e6: format("(6E16.9)"),
            e7: format("(7E16.9)"),
        }
    })
}

/// Reals from decoded values, anything else becomes `None`
pub(in crate::parsers) fn soft_reals(values: Vec<Value>) -> Vec<Option<f64>> {
    values
        .into_iter()
        .map(|value| match value {
            Value::Real(number) => Some(number),
            other => {
                debug!("Skipping non-numeric value {other:?}");
                None
            }
        })
        .collect()
}

/// Turn a list of values into a fixed-size array
pub(in crate::parsers) fn fixed<T, const N: usize>(values: Vec<T>) -> Result<[T; N]> {
    let found = values.len();
    values
        .try_into()
        .map_err(|_| Error::UnexpectedLength { expected: N, found })
}

/// Decode each line with its format and concatenate the values
pub(in crate::parsers) fn read_lines(lines: &[String], formats: &[&Format]) -> Result<Vec<Value>> {
    if lines.len() < formats.len() {
        return Err(Error::UnexpectedLength {
            expected: formats.len(),
            found: lines.len(),
        });
    }

    let mut values = Vec::new();
    for (line, format) in lines.iter().zip(formats) {
        values.extend(format.read(line)?);
    }
    Ok(values)
}
