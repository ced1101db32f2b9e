use crate::error::Result;
use crate::parsers::*;
use crate::{FileType, Payload};

use super::FileFormat;

/// RMAT files, six matrix lines per record and no trailer
pub(super) struct RmatFormat;

impl FileFormat for RmatFormat {
    const FILE_TYPE: FileType = FileType::Rmat;
    const PAYLOAD_LINES: usize = 6;

    fn payload(lines: &[String]) -> Result<Payload> {
        Ok(Payload::Rmat(rmat(lines)?))
    }
}
