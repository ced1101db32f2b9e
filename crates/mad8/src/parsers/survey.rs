use log::warn;

use crate::error::{Error, Result};
use crate::fortran::{try_float, Value};
use crate::{Survey, SurveySummary};

use super::{fixed, formats, read_lines, soft_reals};

/// Decode the two coordinate lines of a SURVEY record
///
/// ```text
/// (4E16.9)  X Y Z SUML
/// (3E16.9)  THETA PHI PSI
/// ```
///
/// Missing trailing angles are `None`.
pub(crate) fn survey(lines: &[String]) -> Result<Survey> {
    let f = formats();
    let lines: Vec<String> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match i {
            1 => padded(line, f.e3.width()),
            _ => line.clone(),
        })
        .collect();

    let values = read_lines(&lines, &[&f.e4, &f.e3])?;
    let values: [Option<f64>; 7] = fixed(soft_reals(values))?;
    Ok(Survey::from(values))
}

/// Decode the two summary lines closing a SURVEY file
///
/// ```text
/// (3E16.9)  X Y Z
/// (3E16.9)  RMIN RMAX C
/// ```
///
/// Linear machines have no ring radii and fewer than three values are written
/// on the second line, the last of which is the length of the line. The raw
/// tokens are counted before any fixed-width decoding because blank slots
/// would otherwise be indistinguishable from absent radii.
pub(crate) fn survey_trailer(lines: &[String]) -> Result<SurveySummary> {
    let [centre, radii, ..] = lines else {
        return Err(Error::UnexpectedLength {
            expected: 2,
            found: lines.len(),
        });
    };

    let circular = radii.split_whitespace().count() >= 3;
    if !circular {
        warn!("Linear machine, ring radii not available");
    }

    let width = formats().e3.width();
    let lines = [padded(centre, width), padded(radii, width)];

    let values = read_lines(&lines, &[&formats().e3, &formats().e3])?;
    let [x, y, z, rmin, rmax, c]: [Option<f64>; 6] = fixed(soft_reals(values))?;

    // the length is the last value written, wherever it ended up
    let (rmin, rmax, c) = if circular {
        (rmin, rmax, c)
    } else {
        let length = radii
            .split_whitespace()
            .next_back()
            .and_then(|token| try_float(Value::Text(token.to_string())).as_f64());
        (None, None, length)
    };

    Ok(SurveySummary {
        x,
        y,
        z,
        rmin,
        rmax,
        c,
        circular,
    })
}

/// Pad a line with blanks, trailing blank slots are not always written out
fn padded(line: &str, width: usize) -> String {
    format!("{:<width$}", line.trim_end_matches(['\n', '\r']))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn coordinate_lines() {
        let survey = survey(&lines(&[
            " 0.100000000E+01 0.000000000E+00-0.250000000E+01 0.750000000E+01",
            " 0.125000000E+00 0.000000000E+00-0.500000000E-01",
        ]))
        .unwrap();

        assert_eq!(survey.x, Some(1.0));
        assert_eq!(survey.y, Some(0.0));
        assert_eq!(survey.z, Some(-2.5));
        assert_eq!(survey.suml, Some(7.5));
        assert_eq!(survey.theta, Some(0.125));
        assert_eq!(survey.phi, Some(0.0));
        assert_eq!(survey.psi, Some(-0.05));
    }

    #[test]
    fn short_orientation_line() {
        let survey = survey(&lines(&[
            " 0.100000000E+01 0.000000000E+00-0.250000000E+01 0.750000000E+01",
            " 0.125000000E+00 0.000000000E+00",
        ]))
        .unwrap();

        assert_eq!(survey.suml, Some(7.5));
        assert_eq!(survey.theta, Some(0.125));
        assert_eq!(survey.phi, Some(0.0));
        assert_eq!(survey.psi, None);
    }

    #[test]
    fn short_position_line_is_fatal() {
        let result = survey(&lines(&[
            " 0.100000000E+01 0.000000000E+00",
            " 0.125000000E+00 0.000000000E+00-0.500000000E-01",
        ]));
        assert!(matches!(
            result,
            Err(Error::LineTooShort {
                expected: 64,
                found: 32
            })
        ));
    }

    #[test]
    fn circular_trailer() {
        let summary = survey_trailer(&lines(&[
            " 0.000000000E+00 0.000000000E+00 0.500000000E+01",
            " 0.120000000E+02 0.150000000E+02 0.900000000E+02",
        ]))
        .unwrap();

        assert!(summary.circular);
        assert_eq!(summary.z, Some(5.0));
        assert_eq!(summary.rmin, Some(12.0));
        assert_eq!(summary.rmax, Some(15.0));
        assert_eq!(summary.c, Some(90.0));
    }

    #[test]
    fn linear_trailer() {
        let summary = survey_trailer(&lines(&[
            " 0.000000000E+00 0.000000000E+00 0.000000000E+00",
            "                 0.000000000E+00 0.150000000E+03",
        ]))
        .unwrap();

        assert!(!summary.circular);
        assert_eq!(summary.x, Some(0.0));
        assert_eq!(summary.rmin, None);
        assert_eq!(summary.rmax, None);
        assert_eq!(summary.c, Some(150.0));
    }

    #[rstest]
    #[case(" 0.000000000E+00 0.150000000E+03")] // left aligned
    #[case(" 0.150000000E+03")] // length only
    #[case("                                 0.150000000E+03")] // length slot
    fn linear_length_is_last_value(#[case] radii: &str) {
        let summary = survey_trailer(&lines(&[
            " 0.000000000E+00 0.000000000E+00 0.000000000E+00",
            radii,
        ]))
        .unwrap();

        assert!(!summary.circular);
        assert_eq!(summary.rmin, None);
        assert_eq!(summary.rmax, None);
        assert_eq!(summary.c, Some(150.0));
    }

    #[test]
    fn missing_trailer_line() {
        let result = survey_trailer(&lines(&[
            " 0.000000000E+00 0.000000000E+00 0.000000000E+00",
        ]));
        assert!(matches!(
            result,
            Err(Error::UnexpectedLength {
                expected: 2,
                found: 1
            })
        ));
    }
}
