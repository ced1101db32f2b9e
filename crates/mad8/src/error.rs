//! Result and Error types for the MAD8 reader

use crate::FileType;

/// Type alias for `Result<T, mad8::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `madtools-mad8`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failure in file I/O")]
    Io(#[from] std::io::Error),

    /// Failure writing a table as CSV
    #[error("failed CSV operation")]
    Csv(#[from] csv::Error),

    /// Failure to serialise to a JSON string
    #[error("failed serde JSON operation")]
    Json(#[from] serde_json::Error),

    /// Reader ran out of lines before the header record count was satisfied
    #[error("unexpected end of file")]
    EndOfFile,

    /// Line is shorter than the fixed widths of its format
    #[error("line too short for format (expected {expected:?} characters, found {found:?})")]
    LineTooShort { expected: usize, found: usize },

    /// An integer or logical field that can not be decoded
    #[error("failed to decode {kind} field from \"{text}\"")]
    InvalidField { kind: &'static str, text: String },

    /// Fortran edit descriptor list that could not be understood
    #[error("invalid fortran format \"{0}\"")]
    InvalidFormat(String),

    /// Generic error type for nom parser results
    #[error("parser failed")]
    ParseError(String),

    /// Unexpected number of decoded values
    #[error("unexpected number of values (expected {expected:?}, found {found:?})")]
    UnexpectedLength { expected: usize, found: usize },

    /// The header names a data type that MAD8 never writes
    #[error("unknown file type \"{0}\"")]
    UnknownFileType(String),

    /// The header names a data type that is known but can not be read
    #[error("{0} files are not supported")]
    UnsupportedFileType(FileType),

    /// A typed reader was pointed at a different kind of file
    #[error("expected a {expected} file, found {found}")]
    UnexpectedFileType { expected: FileType, found: FileType },

    /// Element keyword missing from the layout table
    #[error("unknown element keyword \"{0}\"")]
    UnknownKeyword(String),

    /// Record count in the header is negative
    #[error("invalid record count {0} in header")]
    NegativeRecordCount(i64),

    /// Transport matrix entries must all be numbers
    #[error("failed to decode RMAT value {index} from \"{text}\"")]
    InvalidRmatValue { index: usize, text: String },
}

impl From<nom::Err<nom::error::Error<&str>>> for Error {
    fn from(err: nom::Err<nom::error::Error<&str>>) -> Self {
        Self::ParseError(format!("{err:?}"))
    }
}
