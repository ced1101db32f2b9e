// crate modules
use crate::error::{Error, Result};

// nom parser combinators
use nom::bytes::complete::take;
use nom::character::complete::{self, char, one_of, space0};
use nom::combinator::{all_consuming, opt};
use nom::multi::separated_list1;
use nom::sequence::{delimited, preceded, terminated};
use nom::IResult;

use super::number::parse_real;
use super::Value;

/// Style of a real edit descriptor
///
/// Only recorded for reference. Reading is the same for every style, the
/// exponent letter (or its absence) in the field decides how it converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealStyle {
    /// `Fw.d`
    Fixed,
    /// `Ew.d`
    Exponent,
    /// `Dw.d`
    Double,
    /// `Gw.d`
    General,
}

/// A single fortran edit descriptor with an explicit width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descriptor {
    /// `Aw` character field
    Char { width: usize },
    /// `Iw` integer field
    Integer { width: usize },
    /// `Lw` logical field
    Logical { width: usize },
    /// `Fw.d`, `Ew.d`, `Dw.d`, `Gw.d` real fields
    Real {
        width: usize,
        decimals: u32,
        style: RealStyle,
    },
    /// `nX` skipped characters
    Skip { width: usize },
}

impl Descriptor {
    /// Number of characters taken up by the field
    pub fn width(&self) -> usize {
        match self {
            Descriptor::Char { width }
            | Descriptor::Integer { width }
            | Descriptor::Logical { width }
            | Descriptor::Real { width, .. }
            | Descriptor::Skip { width } => *width,
        }
    }

    /// Decode the text of one field, `None` for skipped fields
    fn decode(&self, field: &str) -> Result<Option<Value>> {
        let value = match self {
            Descriptor::Char { .. } => Value::Text(field.to_string()),
            Descriptor::Integer { .. } => Value::Integer(decode_integer(field)?),
            Descriptor::Logical { .. } => Value::Logical(decode_logical(field)?),
            Descriptor::Real { decimals, .. } => match parse_real(field, Some(*decimals)) {
                Some(number) => Value::Real(number),
                None => Value::Raw(field.to_string()),
            },
            Descriptor::Skip { .. } => return Ok(None),
        };
        Ok(Some(value))
    }
}

/// A fortran format, i.e. an ordered list of edit descriptors
///
/// This is the equivalent of a formatted fortran `READ`. Every descriptor must
/// have an explicit width, since the file layout is entirely positional.
///
/// ```rust
/// # use madtools_mad8::fortran::{Format, Value};
/// let format = Format::parse("(A4,2E16.9)").unwrap();
/// assert_eq!(format.width(), 36);
///
/// let values = format
///     .read("DRIF 0.100000000E+01                ")
///     .unwrap();
///
/// assert_eq!(values[0], Value::Text("DRIF".to_string()));
/// assert_eq!(values[1], Value::Real(1.0));
/// assert_eq!(values[2], Value::Raw("                ".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    descriptors: Vec<Descriptor>,
}

impl Format {
    /// Create a format from a list of descriptors
    pub fn new(descriptors: Vec<Descriptor>) -> Self {
        Self { descriptors }
    }

    /// Parse a descriptor list such as `(5A8,I8,L8,I8)`
    ///
    /// Repeat counts are expanded and the surrounding brackets are optional.
    pub fn parse(format: &str) -> Result<Self> {
        match all_consuming(descriptor_list)(format.trim()) {
            Ok((_, descriptors)) => Ok(Self { descriptors }),
            Err(_) => Err(Error::InvalidFormat(format.to_string())),
        }
    }

    /// The expanded list of descriptors
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    /// Total width of a line in characters
    pub fn width(&self) -> usize {
        self.descriptors.iter().map(Descriptor::width).sum()
    }

    /// Number of values produced by a read
    pub fn n_values(&self) -> usize {
        self.descriptors
            .iter()
            .filter(|d| !matches!(d, Descriptor::Skip { .. }))
            .count()
    }

    /// Decode a line into one [Value] per (non-skip) descriptor
    ///
    /// Any line ending is ignored. The line must hold at least as many
    /// characters as the total width of the format. Anything beyond is ignored.
    pub fn read(&self, line: &str) -> Result<Vec<Value>> {
        let line = line.trim_end_matches(['\n', '\r']);

        let expected = self.width();
        let found = line.chars().count();
        if found < expected {
            return Err(Error::LineTooShort { expected, found });
        }

        let mut values = Vec::with_capacity(self.n_values());
        let mut remaining = line;
        for descriptor in &self.descriptors {
            let (i, field) = field(remaining, descriptor.width())?;
            remaining = i;
            if let Some(value) = descriptor.decode(field)? {
                values.push(value);
            }
        }

        Ok(values)
    }
}

/// Take exactly `width` characters
fn field(i: &str, width: usize) -> IResult<&str, &str> {
    take(width)(i)
}

fn decode_integer(field: &str) -> Result<i64> {
    let text = field.trim();
    if text.is_empty() {
        return Ok(0);
    }

    text.trim_start_matches('+')
        .parse()
        .map_err(|_| Error::InvalidField {
            kind: "integer",
            text: field.to_string(),
        })
}

fn decode_logical(field: &str) -> Result<bool> {
    match field.trim().trim_start_matches('.').chars().next() {
        None => Ok(false),
        Some('T' | 't') => Ok(true),
        Some('F' | 'f') => Ok(false),
        Some(_) => Err(Error::InvalidField {
            kind: "logical",
            text: field.to_string(),
        }),
    }
}

// ! Format string parsers

/// Comma separated descriptors with optional brackets
fn descriptor_list(i: &str) -> IResult<&str, Vec<Descriptor>> {
    let (i, _) = opt(terminated(char('('), space0))(i)?;
    let (i, groups) = separated_list1(delimited(space0, char(','), space0), descriptor)(i)?;
    let (i, _) = opt(preceded(space0, char(')')))(i)?;
    Ok((i, groups.into_iter().flatten().collect()))
}

/// A single descriptor with an optional repeat count, e.g. `4E16.9`
fn descriptor(i: &str) -> IResult<&str, Vec<Descriptor>> {
    let (i, repeat) = opt(complete::u32)(i)?;
    let (i, kind) = one_of("AaIiLlFfEeDdGgXx")(i)?;
    let (i, width) = opt(complete::u32)(i)?;
    let (i, decimals) = opt(preceded(char('.'), complete::u32))(i)?;

    let repeat = repeat.unwrap_or(1) as usize;
    let real = |width: u32, style| Descriptor::Real {
        width: width as usize,
        decimals: decimals.unwrap_or(0),
        style,
    };

    let descriptor = match (kind.to_ascii_uppercase(), width) {
        // nX, where the count is the number of characters skipped
        ('X', None) => return Ok((i, vec![Descriptor::Skip { width: repeat }])),
        ('A', Some(w)) => Descriptor::Char { width: w as usize },
        ('I', Some(w)) => Descriptor::Integer { width: w as usize },
        ('L', Some(w)) => Descriptor::Logical { width: w as usize },
        ('F', Some(w)) => real(w, RealStyle::Fixed),
        ('E', Some(w)) => real(w, RealStyle::Exponent),
        ('D', Some(w)) => real(w, RealStyle::Double),
        ('G', Some(w)) => real(w, RealStyle::General),
        _ => {
            return Err(nom::Err::Error(nom::error::Error::new(
                i,
                nom::error::ErrorKind::Verify,
            )))
        }
    };

    Ok((i, vec![descriptor; repeat]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_record_format() {
        let format = Format::parse("(A4,A16,F12.6,4E16.9,A19,E16.9)").unwrap();
        assert_eq!(format.n_values(), 9);
        assert_eq!(format.width(), 131);
        assert_eq!(
            format.descriptors()[2],
            Descriptor::Real {
                width: 12,
                decimals: 6,
                style: RealStyle::Fixed
            }
        );
        assert_eq!(format.descriptors()[7], Descriptor::Char { width: 19 });
    }

    #[test]
    fn parse_without_brackets() {
        let format = Format::parse("3E16.9").unwrap();
        assert_eq!(format.n_values(), 3);
        assert_eq!(format.width(), 48);
    }

    #[test]
    fn parse_with_skips_and_spaces() {
        let format = Format::parse("( I4 , 2X , L2 )").unwrap();
        assert_eq!(
            format.descriptors(),
            &[
                Descriptor::Integer { width: 4 },
                Descriptor::Skip { width: 2 },
                Descriptor::Logical { width: 2 },
            ]
        );
        assert_eq!(format.n_values(), 2);
    }

    #[test]
    fn invalid_formats() {
        assert!(Format::parse("(A)").is_err());
        assert!(Format::parse("(Q8)").is_err());
        assert!(Format::parse("(E16.9,").is_err());
        assert!(Format::parse("").is_err());
    }

    #[test]
    fn read_header_line() {
        let format = Format::parse("(5A8,I8,L8,I8)").unwrap();
        let line = "MAD 8.51TWISS   16/10/2612.00.00LHC            1       F      12";
        let values = format.read(line).unwrap();
        assert_eq!(values.len(), 8);
        assert_eq!(values[1], Value::Text("TWISS   ".to_string()));
        assert_eq!(values[5], Value::Integer(1));
        assert_eq!(values[6], Value::Logical(false));
        assert_eq!(values[7], Value::Integer(12));
    }

    #[test]
    fn read_short_line_is_fatal() {
        let format = Format::parse("(3E16.9)").unwrap();
        let result = format.read("  0.100000000E+01  0.200000000E+01");
        assert!(matches!(
            result,
            Err(Error::LineTooShort {
                expected: 48,
                found: 34
            })
        ));
    }

    #[test]
    fn read_ignores_line_endings_and_overflow() {
        let format = Format::parse("(I4)").unwrap();
        assert_eq!(format.read("  12\r\n").unwrap(), vec![Value::Integer(12)]);
        assert_eq!(format.read("  12 extra").unwrap(), vec![Value::Integer(12)]);
        assert!(format.read("  1\n").is_err());
    }

    #[test]
    fn read_bad_integer_and_logical() {
        let format = Format::parse("(I4)").unwrap();
        assert!(matches!(
            format.read("  x1"),
            Err(Error::InvalidField {
                kind: "integer",
                ..
            })
        ));
        assert_eq!(format.read("    ").unwrap(), vec![Value::Integer(0)]);

        let format = Format::parse("(L4)").unwrap();
        assert_eq!(format.read(".TRU").unwrap(), vec![Value::Logical(true)]);
        assert!(format.read("   y").is_err());
    }

    #[test]
    fn fields_are_positional() {
        let format = Format::parse("(A4,2E16.9)").unwrap();

        // one character too many shifts the exponent out of the field
        let values = format.read("DRIF  0.100000000E+01                ").unwrap();
        assert_eq!(values[1], Value::Real(0.1));

        let values = format.read("DRIF 0.100000000E+01                ").unwrap();
        assert_eq!(values[1], Value::Real(1.0));
        assert_eq!(values[2], Value::Raw(" ".repeat(16)));
    }

    #[test]
    fn real_styles_read_alike() {
        let line = "  0.250000000D+01";
        for style in ["F17.9", "E17.9", "D17.9", "G17.9"] {
            let format = Format::parse(style).unwrap();
            assert_eq!(format.read(line).unwrap(), vec![Value::Real(2.5)], "{style}");
        }
    }

    #[test]
    fn soft_real_fields() {
        let format = Format::parse("(2E8.3,F8.3)").unwrap();
        let values = format.read("   1.0E1  ??????    1234").unwrap();
        assert_eq!(values[0], Value::Real(10.0));
        assert_eq!(values[1], Value::Raw("  ??????".to_string()));
        assert_eq!(values[2], Value::Real(1.234));
    }
}
