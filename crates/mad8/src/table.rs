// Crate types
use crate::error::Result;
use crate::reader::Reader;
use crate::{Cell, FileType, Header, Row, Scalar, Survey, Trailer, Twiss, COMMON_COLUMNS, RMAT_COLUMNS};

// Other libraries
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

/// Data structure to store MAD8 file content
///
/// This [Table] is the primary data structure containing the parsed file data.
///
/// Every row is one element record, with the common [Element](crate::Element)
/// parameters merged with the data specific to the file type:
///
/// | File type | Payload        | Trailer                      |
/// | --------- | -------------- | ---------------------------- |
/// | TWISS     | [Twiss]        | [TwissSummary](crate::TwissSummary)   |
/// | SURVEY    | [Survey]       | [SurveySummary](crate::SurveySummary) |
/// | RMAT      | [Rmat](crate::Rmat) | none                    |
///
/// The header and trailer values are also available as a flat list of
/// [Table::metadata()] using the MAD8 key names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Kind of file the table was read from
    pub file_type: FileType,
    /// Header information and metadata
    pub header: Header,
    /// Summary values after the last record, if the file type has any
    pub trailer: Option<Trailer>,
    /// Element records in file order
    pub rows: Vec<Row>,
}

impl Table {
    /// Read a MAD8 TWISS, SURVEY or RMAT file
    ///
    /// Parses the file at `path` into the [Table] data structure for
    /// post-processing.
    ///
    /// The `path` may be a [&str], [String], [Path], etc..
    ///
    /// Example
    /// ```rust, no_run
    /// # use madtools_mad8::Table;
    /// let table = Table::from_file("path/to/twiss.tape").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Reading {}", path.as_ref().display());
        Reader::new(path)?.read()
    }

    /// Read MAD8 file content from any buffered source
    ///
    /// ```rust
    /// # use madtools_mad8::{FileType, Table};
    /// let text = format!(
    ///     "{}\n{:<80}\n",
    ///     "MAD 8.51RMAT    16/10/2612.00.00EMPTY          1       F       0",
    ///     "An empty RMAT file",
    /// );
    ///
    /// let table = Table::from_reader(text.as_bytes()).unwrap();
    /// assert_eq!(table.file_type, FileType::Rmat);
    /// assert!(table.is_empty());
    /// ```
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Reader::from_buffer(reader).read()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the file had no element records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in table order
    ///
    /// The common element columns followed by the payload columns for the
    /// file type.
    pub fn columns(&self) -> Vec<&'static str> {
        let payload: &[&'static str] = match self.file_type {
            FileType::Twiss => &Twiss::COLUMNS,
            FileType::Survey => &Survey::COLUMNS,
            FileType::Rmat => &RMAT_COLUMNS,
            FileType::Chrom => &[],
        };

        // payload columns replace any common column of the same name
        COMMON_COLUMNS
            .iter()
            .filter(|c| !payload.contains(*c))
            .chain(payload)
            .copied()
            .collect()
    }

    /// Every value in a column, one per row
    ///
    /// Returns an empty list if the column does not exist.
    pub fn column(&self, name: &str) -> Vec<Cell<'_>> {
        self.rows.iter().filter_map(|row| row.get(name)).collect()
    }

    /// Find the first row for an element name
    ///
    /// If the element exists it is returned as `Some(&Row)`, otherwise `None`.
    pub fn get_element(&self, name: &str) -> Option<&Row> {
        self.rows.iter().find(|row| row.element.name == name)
    }

    /// File-level values in file order, keyed by the MAD8 names
    ///
    /// Header values (`PROGVRSN`, `DATAVRSN`, `DATE`, `TIME`, `JOBNAME`,
    /// `SUPER`, `SYMM`, `NPOS`, `TITLE`) followed by the trailer values of
    /// TWISS and SURVEY files. Values that could not be read, or ring radii of
    /// a linear machine, are [Scalar::Absent].
    pub fn metadata(&self) -> Vec<(&'static str, Scalar)> {
        let h = &self.header;
        let mut metadata = vec![
            ("PROGVRSN", Scalar::Text(h.program.clone())),
            ("DATAVRSN", Scalar::Text(h.data_type.clone())),
            ("DATE", Scalar::Text(h.date.clone())),
            ("TIME", Scalar::Text(h.time.clone())),
            ("JOBNAME", Scalar::Text(h.job.clone())),
            ("SUPER", Scalar::Integer(h.superperiod)),
            ("SYMM", Scalar::Logical(h.symmetric)),
            ("NPOS", Scalar::Integer(h.npos as i64)),
            ("TITLE", Scalar::Text(h.title.clone())),
        ];

        let entries: Vec<(&'static str, Option<f64>)> = match &self.trailer {
            Some(Trailer::Twiss(summary)) => summary.entries().to_vec(),
            Some(Trailer::Survey(summary)) => summary.entries().to_vec(),
            None => Vec::new(),
        };

        metadata.extend(entries.into_iter().map(|(k, v)| (k, Scalar::from(v))));
        metadata
    }

    /// Write every row as CSV, with the column names as the first record
    ///
    /// Absent values are left as empty fields.
    pub fn to_csv<W: Write>(&self, writer: W) -> Result<()> {
        let columns = self.columns();
        let mut writer = csv::Writer::from_writer(writer);

        writer.write_record(&columns)?;
        for row in &self.rows {
            writer.write_record(columns.iter().map(|c| match row.get(c) {
                Some(cell) => cell.to_string(),
                None => String::new(),
            }))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the table to a CSV file at `path`
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        info!("Writing {}", path.as_ref().display());
        self.to_csv(File::create(path)?)
    }

    /// Serialise the whole table to a pretty JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Element, Keyword, Payload, SurveySummary};

    fn survey_table(circular: bool) -> Table {
        let row = |name: &str, x: f64| Row {
            element: Element {
                keyword: Some(Keyword::Drift),
                name: name.to_string(),
                l: 1.0,
                ..Default::default()
            },
            payload: Payload::Survey(Survey {
                x: Some(x),
                suml: Some(x),
                ..Default::default()
            }),
        };

        Table {
            file_type: FileType::Survey,
            header: Header {
                data_type: "SURVEY".to_string(),
                npos: 2,
                ..Default::default()
            },
            trailer: Some(Trailer::Survey(SurveySummary {
                c: Some(2.0),
                circular,
                ..Default::default()
            })),
            rows: vec![row("D1", 1.0), row("D2", 2.0)],
        }
    }

    #[test]
    fn payload_columns_replace_common() {
        let columns = survey_table(true).columns();
        assert_eq!(columns.len(), COMMON_COLUMNS.len() + Survey::COLUMNS.len());
        assert_eq!(columns[0], "KEYWORD");
        assert_eq!(columns.last(), Some(&"PSI"));
        assert_eq!(columns.iter().filter(|c| **c == "L").count(), 1);
    }

    #[test]
    fn column_lookup() {
        let table = survey_table(true);

        assert_eq!(table.column("X"), vec![Cell::Real(1.0), Cell::Real(2.0)]);
        assert_eq!(table.column("Y"), vec![Cell::Absent, Cell::Absent]);
        assert_eq!(table.column("NAME"), vec![Cell::Text("D1"), Cell::Text("D2")]);
        assert!(table.column("BETX").is_empty());

        assert!(table.get_element("D2").is_some());
        assert!(table.get_element("D3").is_none());
    }

    #[test]
    fn linear_metadata() {
        let metadata = survey_table(false).metadata();
        let value = |key: &str| {
            metadata
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        };

        assert_eq!(metadata.len(), 9 + 6);
        assert_eq!(value("DATAVRSN"), Some(Scalar::Text("SURVEY".to_string())));
        assert_eq!(value("NPOS"), Some(Scalar::Integer(2)));
        assert_eq!(value("RMIN"), Some(Scalar::Absent));
        assert_eq!(value("C"), Some(Scalar::Real(2.0)));
        assert_eq!(value("GAMTR"), None);
    }

    #[test]
    fn csv_records() {
        let mut buffer = Vec::new();
        survey_table(true).to_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("KEYWORD,NAME,ANGLE,"));
        assert!(lines[0].ends_with(",X,Y,Z,SUML,THETA,PHI,PSI"));
        assert!(lines[1].starts_with("DRIF,D1,0e0,"));
        assert!(lines[2].ends_with(",2e0,,,2e0,,,"));
    }

    #[test]
    fn json_round_trip_fields() {
        let json = survey_table(true).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file_type"], "Survey");
        assert_eq!(value["rows"][1]["element"]["name"], "D2");
        assert_eq!(value["trailer"]["Survey"]["circular"], true);
    }
}
