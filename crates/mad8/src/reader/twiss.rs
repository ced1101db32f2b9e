use crate::error::Result;
use crate::parsers::*;
use crate::{FileType, Payload, Trailer};

use super::FileFormat;

/// TWISS files, three optics lines per record and a three line summary
pub(super) struct TwissFormat;

impl FileFormat for TwissFormat {
    const FILE_TYPE: FileType = FileType::Twiss;
    const PAYLOAD_LINES: usize = 3;
    const TRAILER_LINES: usize = 3;

    fn payload(lines: &[String]) -> Result<Payload> {
        Ok(Payload::Twiss(twiss(lines)?))
    }

    fn trailer(lines: &[String]) -> Result<Option<Trailer>> {
        Ok(Some(Trailer::Twiss(twiss_trailer(lines)?)))
    }
}
