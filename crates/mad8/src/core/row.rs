use serde::Serialize;

use crate::core::{Element, Rmat, Survey, SurveySummary, Twiss, TwissSummary};
use crate::Cell;

/// File-type specific data attached to every element record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Payload {
    /// Optics functions
    Twiss(Twiss),
    /// Global coordinates
    Survey(Survey),
    /// Transport matrix
    Rmat(Rmat),
}

impl Payload {
    /// Look up a payload column by name
    pub fn get(&self, column: &str) -> Option<Cell<'_>> {
        match self {
            Payload::Twiss(twiss) => twiss.get(column).map(Cell::from),
            Payload::Survey(survey) => survey.get(column).map(Cell::from),
            Payload::Rmat(rmat) => rmat.get(column).map(Cell::Real),
        }
    }
}

/// Summary data closing the file, where the file type has any
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Trailer {
    /// Tunes, chromaticities and maxima
    Twiss(TwissSummary),
    /// Machine centre and size
    Survey(SurveySummary),
}

/// A single row of a [Table](crate::Table)
///
/// The common [Element] data merged with the payload for the file type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Common element data
    pub element: Element,
    /// File-type specific data
    pub payload: Payload,
}

impl Row {
    /// Look up any column by name
    ///
    /// Payload columns take precedence over the common element columns.
    pub fn get(&self, column: &str) -> Option<Cell<'_>> {
        self.payload
            .get(column)
            .or_else(|| self.element.get(column))
    }

    /// Optics functions, if this is a TWISS row
    pub fn twiss(&self) -> Option<&Twiss> {
        match &self.payload {
            Payload::Twiss(twiss) => Some(twiss),
            _ => None,
        }
    }

    /// Coordinates, if this is a SURVEY row
    pub fn survey(&self) -> Option<&Survey> {
        match &self.payload {
            Payload::Survey(survey) => Some(survey),
            _ => None,
        }
    }

    /// Transport matrix, if this is an RMAT row
    pub fn rmat(&self) -> Option<&Rmat> {
        match &self.payload {
            Payload::Rmat(rmat) => Some(rmat),
            _ => None,
        }
    }
}
