mod header;
mod rmat;
mod survey;
mod twiss;

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use log::{debug, info, trace};

use crate::error::{Error, Result};
use crate::parsers::*;
use crate::{FileType, Header, Payload, Row, Table, Trailer};

use rmat::RmatFormat;
use survey::SurveyFormat;
use twiss::TwissFormat;

/// Layout of the lines that follow the header for one kind of file
///
/// Every record starts with the two common element lines, followed by
/// `PAYLOAD_LINES` lines specific to the file type. Any trailer comes after
/// the last record.
pub(crate) trait FileFormat {
    const FILE_TYPE: FileType;
    const PAYLOAD_LINES: usize;
    const TRAILER_LINES: usize = 0;

    fn payload(lines: &[String]) -> Result<Payload>;

    fn trailer(_lines: &[String]) -> Result<Option<Trailer>> {
        Ok(None)
    }
}

/// Internal reader for MAD8 files
pub(crate) struct Reader<R: BufRead> {
    lines: Lines<R>,
    cached_line: String,
}

impl Reader<BufReader<File>> {
    /// Create a new reader for the path provided
    pub(crate) fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::from_buffer(BufReader::new(file)))
    }
}

// ! Internal API
impl<R: BufRead> Reader<R> {
    pub(crate) fn from_buffer(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            cached_line: String::new(),
        }
    }

    // Advances to the next line, saving it to the cache and returning a ref
    pub(crate) fn next_line(&mut self) -> Result<&str> {
        self.cached_line = self.lines.next().ok_or(Error::EndOfFile)??;
        Ok(self.cached_line.as_str())
    }

    // Collects the next n lines
    pub(crate) fn next_lines(&mut self, n: usize) -> Result<Vec<String>> {
        (0..n)
            .map(|_| self.next_line().map(str::to_string))
            .collect()
    }

    /// Parse a complete file of any supported type
    pub(crate) fn read(&mut self) -> Result<Table> {
        let header = self.parse_header()?;
        self.read_body(header)
    }

    /// Parse everything after the header
    pub(crate) fn read_body(&mut self, header: Header) -> Result<Table> {
        match header.file_type()? {
            FileType::Twiss => self.read_records::<TwissFormat>(header),
            FileType::Survey => self.read_records::<SurveyFormat>(header),
            FileType::Rmat => self.read_records::<RmatFormat>(header),
            FileType::Chrom => Err(Error::UnsupportedFileType(FileType::Chrom)),
        }
    }

    fn read_records<F: FileFormat>(&mut self, header: Header) -> Result<Table> {
        debug!("Reading {} {} records", header.npos, F::FILE_TYPE);

        let mut rows = Vec::new();
        for i in 0..header.npos {
            let first = self.next_line()?.to_string();
            let element = element(&first, self.next_line()?)?;
            let payload = F::payload(&self.next_lines(F::PAYLOAD_LINES)?)?;
            trace!("Record {i}: {}", element.name);
            rows.push(Row { element, payload });
        }

        let trailer = match F::TRAILER_LINES {
            0 => None,
            n => F::trailer(&self.next_lines(n)?)?,
        };

        debug!("Read {} rows", rows.len());
        Ok(Table {
            file_type: F::FILE_TYPE,
            header,
            trailer,
            rows,
        })
    }
}

/// Read any supported MAD8 file into a [Table]
///
/// The file type is taken from the header. Unrecognised types are an
/// [Error::UnknownFileType], and CHROM files are an
/// [Error::UnsupportedFileType].
///
/// ```rust, no_run
/// # use madtools_mad8::read;
/// let table = read("/path/to/twiss.tape").unwrap();
/// println!("{}", table.header);
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<Table> {
    Table::from_file(path)
}

/// Read only the header of a file and resolve its [FileType]
///
/// ```rust, no_run
/// # use madtools_mad8::{file_type, FileType};
/// let kind = file_type("/path/to/survey.tape").unwrap();
/// assert_eq!(kind, FileType::Survey);
/// ```
pub fn file_type<P: AsRef<Path>>(path: P) -> Result<FileType> {
    Reader::new(path)?.parse_header()?.file_type()
}

/// Read a TWISS file, failing for any other type
pub fn read_twiss<P: AsRef<Path>>(path: P) -> Result<Table> {
    read_expecting(path, FileType::Twiss)
}

/// Read a SURVEY file, failing for any other type
pub fn read_survey<P: AsRef<Path>>(path: P) -> Result<Table> {
    read_expecting(path, FileType::Survey)
}

/// Read an RMAT file, failing for any other type
pub fn read_rmat<P: AsRef<Path>>(path: P) -> Result<Table> {
    read_expecting(path, FileType::Rmat)
}

fn read_expecting<P: AsRef<Path>>(path: P, expected: FileType) -> Result<Table> {
    info!("Reading {} as {expected}", path.as_ref().display());
    let mut reader = Reader::new(path)?;
    let header = reader.parse_header()?;

    let found = header.file_type()?;
    if found != expected {
        return Err(Error::UnexpectedFileType { expected, found });
    }

    reader.read_body(header)
}
