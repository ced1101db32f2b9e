use crate::error::Result;
use crate::parsers::*;
use crate::{FileType, Payload, Trailer};

use super::FileFormat;

/// SURVEY files, two coordinate lines per record and a two line summary
pub(super) struct SurveyFormat;

impl FileFormat for SurveyFormat {
    const FILE_TYPE: FileType = FileType::Survey;
    const PAYLOAD_LINES: usize = 2;
    const TRAILER_LINES: usize = 2;

    fn payload(lines: &[String]) -> Result<Payload> {
        Ok(Payload::Survey(survey(lines)?))
    }

    fn trailer(lines: &[String]) -> Result<Option<Trailer>> {
        Ok(Some(Trailer::Survey(survey_trailer(lines)?)))
    }
}
