use crate::error::{Error, Result};
use crate::fortran::Value;
use crate::Header;

use super::formats;

/// Decode the two header lines present at the top of every file
///
/// ```text
/// (5A8,I8,L8,I8)  PROGVRSN DATAVRSN DATE TIME JOBNAME SUPER SYMM NPOS
/// (A80)           TITLE
/// ```
pub(crate) fn header(first: &str, second: &str) -> Result<Header> {
    let values = formats().header.read(first)?;

    let [Value::Text(program), Value::Text(data_type), Value::Text(date), Value::Text(time), Value::Text(job), Value::Integer(superperiod), Value::Logical(symmetric), Value::Integer(npos)] =
        values.as_slice()
    else {
        return Err(Error::ParseError(format!(
            "unexpected header values {values:?}"
        )));
    };

    if *npos < 0 {
        return Err(Error::NegativeRecordCount(*npos));
    }

    let title = match formats().title.read(second)?.first() {
        Some(Value::Text(title)) => title.trim().to_string(),
        _ => String::new(),
    };

    Ok(Header {
        program: program.trim().to_string(),
        data_type: data_type.trim().to_string(),
        date: date.trim().to_string(),
        time: time.trim().to_string(),
        job: job.trim().to_string(),
        superperiod: *superperiod,
        symmetric: *symmetric,
        npos: *npos as usize,
        title,
    })
}
