//! Result and Error types for derived optics

use madtools_mad8::FileType;

/// Type alias for `Result<T, optics::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for `madtools-optics`
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Optics functions are only available from TWISS tables
    #[error("optics need a TWISS table, found {0}")]
    NotTwiss(FileType),

    /// Not enough rows to work with
    #[error("too few rows (expected at least {expected:?}, found {found:?})")]
    TooFewRows { expected: usize, found: usize },
}
