//! Fixed-width field reader
//!
//! MAD8 writes everything with formatted fortran `WRITE` statements, so every
//! value sits in a known column range. A [Format] is built from the same edit
//! descriptors used to write the file and decodes a line into a list of
//! [Value]s.
//!
//! | Descriptor | Value                                 |
//! | ---------- | ------------------------------------- |
//! | `Aw`       | [Value::Text]                         |
//! | `Iw`       | [Value::Integer]                      |
//! | `Lw`       | [Value::Logical]                      |
//! | `Fw.d` etc | [Value::Real], or [Value::Raw] if not a number |
//! | `nX`       | nothing                               |
//!
//! Real fields never fail to decode. Blank or malformed text is returned as
//! [Value::Raw] and the caller applies its own recovery.

mod format;
mod number;
mod value;

pub use format::{Descriptor, Format, RealStyle};
pub use value::{try_float, Value};
