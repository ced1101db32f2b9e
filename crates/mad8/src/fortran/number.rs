// nom parser combinators
use nom::character::complete::{digit1, one_of};
use nom::combinator::{all_consuming, recognize};
use nom::number::complete::double;
use nom::IResult;

// external crates
use log::trace;

/// Parse a fortran real number from the text of a fixed-width field
///
/// Blank or malformed text gives `None`. Otherwise handles:
/// - Explicit exponents, including the `D` double precision marker
/// - Exponents where fortran drops the `E` to fit the width, `1.234567890-100`
/// - Implied decimal places when the field has no decimal point
///
/// ```text
/// "  0.123456789E+01"  ->  1.23456789
/// "  0.123456789D+01"  ->  1.23456789
/// "  1.234567890-100"  ->  1.23456789e-100
/// "     1234" (F.3)    ->  1.234
/// ```
pub(crate) fn parse_real(text: &str, decimals: Option<u32>) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let text = text.replace(['D', 'd'], "E");
    let explicit: IResult<&str, f64> = all_consuming(double)(text.as_str());
    let value = match explicit {
        Ok((_, value)) => value,
        Err(_) => all_consuming(implied_exponent)(text.as_str()).ok()?.1,
    };

    match decimals {
        Some(d) if !text.contains('.') && d > 0 => Some(value / 10f64.powi(d as i32)),
        _ => Some(value),
    }
}

/// Mantissa directly followed by a signed exponent without the `E`
fn implied_exponent(i: &str) -> IResult<&str, f64> {
    let (i, mantissa) = recognize(double)(i)?;
    let (i, sign) = one_of("-+")(i)?;
    let (i, exponent) = digit1(i)?;
    trace!("Implied exponent in \"{mantissa}{sign}{exponent}\"");

    match format!("{mantissa}E{sign}{exponent}").parse::<f64>() {
        Ok(value) => Ok((i, value)),
        Err(_) => Err(nom::Err::Error(nom::error::Error::new(
            i,
            nom::error::ErrorKind::Float,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_exponents() {
        assert_eq!(parse_real("  0.123456789E+01", None), Some(1.23456789));
        assert_eq!(parse_real(" -0.500000000E-02", None), Some(-0.005));
        assert_eq!(parse_real("  0.250000000D+01", None), Some(2.5));
        assert_eq!(parse_real("1.5e3", None), Some(1500.0));
    }

    #[test]
    fn implied_exponents() {
        assert_eq!(parse_real("  1.234567890-100", None), Some(1.23456789e-100));
        assert_eq!(parse_real(" -0.100000000+101", None), Some(-0.1e101));
    }

    #[test]
    fn implied_decimal_places() {
        assert_eq!(parse_real("    1234", Some(3)), Some(1.234));
        assert_eq!(parse_real("   1.234", Some(6)), Some(1.234));
        assert_eq!(parse_real("    1234", None), Some(1234.0));
    }

    #[test]
    fn soft_failures() {
        assert_eq!(parse_real("", None), None);
        assert_eq!(parse_real("                ", None), None);
        assert_eq!(parse_real("  ****************", None), None);
        assert_eq!(parse_real("1.0E+01abc", None), None);
    }
}
