use crate::error::Result;
use crate::{Twiss, TwissSummary};

use super::{fixed, formats, read_lines, soft_reals};

/// Decode the three optics lines of a TWISS record
///
/// ```text
/// (5E16.9)  ALFX BETX MUX DX DPX
/// (5E16.9)  ALFY BETY MUY DY DPY
/// (5E16.9)  X PX Y PY SUML
/// ```
pub(crate) fn twiss(lines: &[String]) -> Result<Twiss> {
    let f = formats();
    let values = read_lines(lines, &[&f.e5, &f.e5, &f.e5])?;
    let values: [Option<f64>; 15] = fixed(soft_reals(values))?;
    Ok(Twiss::from(values))
}

/// Decode the three summary lines closing a TWISS file
///
/// ```text
/// (3E16.9)  DELTAP GAMTR C
/// (5E16.9)  COSMUX QX QX' BXMAX DXMAX
/// (5E16.9)  COSMUY QY QY' BYMAX DYMAX
/// ```
pub(crate) fn twiss_trailer(lines: &[String]) -> Result<TwissSummary> {
    let f = formats();
    let values = read_lines(lines, &[&f.e3, &f.e5, &f.e5])?;
    let values: [Option<f64>; 13] = fixed(soft_reals(values))?;
    Ok(TwissSummary::from(values))
}
