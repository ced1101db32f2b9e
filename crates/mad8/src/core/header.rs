use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// Kinds of file written by MAD8
///
/// The data type is the second field of the header and decides how every
/// record that follows is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileType {
    /// Optics functions, `TWISS` command with `TAPE`
    Twiss,
    /// Global coordinates, `SURVEY` command with `TAPE`
    Survey,
    /// Transport matrices, `TWISS` command with `RTAPE`
    Rmat,
    /// Chromatic functions, recognised but not supported
    Chrom,
}

impl FileType {
    /// Tag used in the file header
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Twiss => "TWISS",
            FileType::Survey => "SURVEY",
            FileType::Rmat => "RMAT",
            FileType::Chrom => "CHROM",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "TWISS" => Ok(FileType::Twiss),
            "SURVEY" => Ok(FileType::Survey),
            "RMAT" => Ok(FileType::Rmat),
            "CHROM" => Ok(FileType::Chrom),
            other => Err(Error::UnknownFileType(other.to_string())),
        }
    }
}

/// MAD8 file header information
///
/// The first two lines of every file. For example:
///
/// ```text
/// MAD 8.51TWISS   16/10/2612.00.00FODO           1       F       5
/// FODO cell example
/// ```
///
/// This would parse to the [Header] as:
///
/// ```json
/// Header {
///     program: "MAD 8.51",
///     data_type: "TWISS",
///     date: "16/10/26",
///     time: "12.00.00",
///     job: "FODO",
///     superperiod: 1,
///     symmetric: false,
///     npos: 5,
///     title: "FODO cell example",
/// }
/// ```
///
/// The data type is left as the raw tag so that the header can always be read,
/// see [Header::file_type()] for the resolved [FileType].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Header {
    /// Program version, `PROGVRSN`
    pub program: String,
    /// Data type tag, `DATAVRSN`
    pub data_type: String,
    /// Run date, `DATE`
    pub date: String,
    /// Run time, `TIME`
    pub time: String,
    /// Job name, `JOBNAME`
    pub job: String,
    /// Number of superperiods, `SUPER`
    pub superperiod: i64,
    /// Symmetry flag, `SYMM`
    pub symmetric: bool,
    /// Number of element records, `NPOS`
    pub npos: usize,
    /// Title line, `TITLE`
    pub title: String,
}

impl Header {
    /// Resolve the data type tag
    ///
    /// Tags other than TWISS, SURVEY, RMAT and CHROM are an
    /// [Error::UnknownFileType].
    ///
    /// ```rust
    /// # use madtools_mad8::{FileType, Header};
    /// let mut header = Header::default();
    ///
    /// header.data_type = "SURVEY".to_string();
    /// assert_eq!(header.file_type().unwrap(), FileType::Survey);
    ///
    /// header.data_type = "FOOBAR".to_string();
    /// assert!(header.file_type().is_err());
    /// ```
    pub fn file_type(&self) -> Result<FileType> {
        self.data_type.parse()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Header")?;
        writeln!(f, "  Program    {}", self.program)?;
        writeln!(f, "  Data type  {}", self.data_type)?;
        writeln!(f, "  Date       {} {}", self.date, self.time)?;
        writeln!(f, "  Job        {}", self.job)?;
        writeln!(f, "  Super      {}", self.superperiod)?;
        writeln!(f, "  Symmetric  {}", self.symmetric)?;
        writeln!(f, "  Records    {}", self.npos)?;
        write!(f, "  Title      {}", self.title)
    }
}
