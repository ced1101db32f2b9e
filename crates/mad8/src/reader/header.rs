use std::io::BufRead;

use log::debug;

use crate::error::Result;
use crate::parsers::*;
use crate::Header;

use super::Reader;

// ! Header lines
impl<R: BufRead> Reader<R> {
    pub(crate) fn parse_header(&mut self) -> Result<Header> {
        debug!("----------------------");
        debug!(" Parsing Header lines ");
        debug!("----------------------");

        let first = self.next_line()?.to_string();
        let header = header(&first, self.next_line()?)?;

        debug!("Program     = {:?}", header.program);
        debug!("Data type   = {:?}", header.data_type);
        debug!("Date        = {:?} {:?}", header.date, header.time);
        debug!("Job         = {:?}", header.job);
        debug!("Super       = {}", header.superperiod);
        debug!("Symmetric   = {}", header.symmetric);
        debug!("NPOS        = {}", header.npos);
        debug!("Title       = {:?}", header.title);

        Ok(header)
    }
}
