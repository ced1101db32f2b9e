use crate::error::{Error, Result};
use crate::fortran::Value;
use crate::Rmat;

use super::{fixed, formats, read_lines};

/// Decode the six matrix lines of an RMAT record
///
/// ```text
/// (6E16.9)  R11 ... R16
///   ...
/// (6E16.9)  R51 ... R56
/// (7E16.9)  R61 ... R66 SUML
/// ```
///
/// Every value must be a number, there is no sensible default for a matrix
/// entry.
pub(crate) fn rmat(lines: &[String]) -> Result<Rmat> {
    let f = formats();
    let values = read_lines(lines, &[&f.e6, &f.e6, &f.e6, &f.e6, &f.e6, &f.e7])?;

    let values = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| match value {
            Value::Real(number) => Ok(number),
            other => Err(Error::InvalidRmatValue {
                index,
                text: other.as_str().unwrap_or_default().to_string(),
            }),
        })
        .collect::<Result<Vec<f64>>>()?;

    let values: [f64; 37] = fixed(values)?;
    Ok(Rmat::from(&values))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_matrix_lines(suml: &str) -> Vec<String> {
        let mut lines: Vec<String> = (0..6)
            .map(|i| {
                (0..6)
                    .map(|j| if i == j { " 0.100000000E+01" } else { " 0.000000000E+00" })
                    .collect()
            })
            .collect();
        lines[5].push_str(suml);
        lines
    }

    #[test]
    fn unit_matrix() {
        let rmat = rmat(&unit_matrix_lines(" 0.450000000E+02")).unwrap();

        assert_eq!(rmat.matrix, nalgebra::Matrix6::identity());
        assert_eq!(rmat.suml, 45.0);
    }

    #[test]
    fn seventh_value_is_length() {
        let mut lines = unit_matrix_lines(" 0.120000000E+02");
        lines[0].replace_range(80..96, " 0.250000000E+01");

        let rmat = rmat(&lines).unwrap();
        assert_eq!(rmat.r(1, 6), Some(2.5));
        assert_eq!(rmat.r(6, 6), Some(1.0));
        assert_eq!(rmat.get("R66"), Some(1.0));
        assert_eq!(rmat.get("SUML"), Some(12.0));
    }

    #[test]
    fn length_required_on_last_line() {
        let lines = unit_matrix_lines("");
        assert!(matches!(rmat(&lines), Err(Error::LineTooShort { .. })));
    }

    #[test]
    fn non_numeric_entry_is_fatal() {
        let mut lines = unit_matrix_lines(" 0.450000000E+02");
        lines[2].replace_range(16..32, "     not-a-float");

        assert!(matches!(
            rmat(&lines),
            Err(Error::InvalidRmatValue { index: 13, text }) if text == "     not-a-float"
        ));
    }
}
