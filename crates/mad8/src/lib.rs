//! Module for reading MAD8 output files
//!
//! MAD8 writes its optics results as fixed-column fortran records when the
//! `TAPE` or `RTAPE` options are given. Every file has the same shape:
//!
//! - two [Header] lines, the second field naming the [FileType]
//! - `NPOS` element records, each the two common [Element] lines followed by
//!   lines specific to the file type
//! - an optional trailer of summary values
//!
//! | File type | Record payload | Trailer          |
//! | --------- | -------------- | ---------------- |
//! | TWISS     | [Twiss]        | [TwissSummary]   |
//! | SURVEY    | [Survey]       | [SurveySummary]  |
//! | RMAT      | [Rmat]         | none             |
//! | CHROM     | not supported  | not supported    |
//!
//! Which of the common parameters are written for an element depends on its
//! [Keyword]. Anything not in the layout for that keyword is `0.0`.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use madtools_mad8::{read_twiss, Cell};
//! // Read all file data into the core data structure
//! let table = read_twiss("/path/to/twiss.tape").unwrap();
//!
//! // Find the optics at the end of a named element
//! let row = table.get_element("QF").expect("QF not found");
//! let betx = row.twiss().and_then(|t| t.betx);
//!
//! // Or work with whole columns
//! let s: Vec<Cell> = table.column("SUML");
//! ```
//!
//! The lower-level [fortran] module exposes the fixed-width field reader used
//! for every line.

mod core;
mod error;
pub mod fortran;
mod parsers;
mod reader;
mod table;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use table::Table;

#[doc(inline)]
pub use reader::{file_type, read, read_rmat, read_survey, read_twiss};

#[doc(inline)]
pub use core::*;
