use madtools_mad8::{FileType, Table, Twiss};
use serde::Serialize;

use crate::error::{Error, Result};

/// Twiss gamma from alpha and beta
///
/// ```rust
/// # use madtools_optics::twiss_gamma;
/// assert_eq!(twiss_gamma(0.0, 2.0), 0.5);
/// assert_eq!(twiss_gamma(-1.0, 4.0), 0.5);
/// ```
pub fn twiss_gamma(alpha: f64, beta: f64) -> f64 {
    (1.0 + alpha.powi(2)) / beta
}

/// Twiss gamma in both planes, `GAMX` and `GAMY`
///
/// `None` where the alpha or beta the value depends on could not be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TwissGamma {
    /// Horizontal gamma (1/m)
    pub x: Option<f64>,
    /// Vertical gamma (1/m)
    pub y: Option<f64>,
}

impl From<&Twiss> for TwissGamma {
    fn from(twiss: &Twiss) -> Self {
        Self {
            x: optional_gamma(twiss.alfx, twiss.betx),
            y: optional_gamma(twiss.alfy, twiss.bety),
        }
    }
}

pub(crate) fn optional_gamma(alpha: Option<f64>, beta: Option<f64>) -> Option<f64> {
    Some(twiss_gamma(alpha?, beta?))
}

/// Optics functions of every row, failing for anything but a TWISS table
pub(crate) fn optics(table: &Table) -> Result<Vec<&Twiss>> {
    if table.file_type != FileType::Twiss {
        return Err(Error::NotTwiss(table.file_type));
    }
    Ok(table.rows.iter().filter_map(|row| row.twiss()).collect())
}

/// Twiss gamma for every row of a TWISS table
pub fn twiss_gammas(table: &Table) -> Result<Vec<TwissGamma>> {
    Ok(optics(table)?.into_iter().map(TwissGamma::from).collect())
}

/// Longitudinal position `S` of every row, the cumulative length at the exit
pub fn s_positions(table: &Table) -> Result<Vec<Option<f64>>> {
    Ok(optics(table)?.into_iter().map(|t| t.suml).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use madtools_mad8::{Element, Header, Payload, Row};

    fn table(file_type: FileType, optics: Vec<Twiss>) -> Table {
        Table {
            file_type,
            header: Header::default(),
            trailer: None,
            rows: optics
                .into_iter()
                .map(|twiss| Row {
                    element: Element::default(),
                    payload: Payload::Twiss(twiss),
                })
                .collect(),
        }
    }

    #[test]
    fn gammas_per_row() {
        let table = table(
            FileType::Twiss,
            vec![
                Twiss {
                    alfx: Some(1.0),
                    betx: Some(4.0),
                    alfy: Some(0.0),
                    bety: Some(0.5),
                    suml: Some(0.0),
                    ..Default::default()
                },
                Twiss {
                    alfx: Some(-3.0),
                    betx: Some(5.0),
                    alfy: None,
                    bety: Some(1.0),
                    suml: Some(2.5),
                    ..Default::default()
                },
            ],
        );

        let gammas = twiss_gammas(&table).unwrap();
        assert_eq!(gammas[0], TwissGamma { x: Some(0.5), y: Some(2.0) });
        assert_eq!(gammas[1], TwissGamma { x: Some(2.0), y: None });

        assert_eq!(s_positions(&table).unwrap(), vec![Some(0.0), Some(2.5)]);
    }

    #[test]
    fn only_twiss_tables() {
        let table = table(FileType::Survey, vec![]);
        assert!(matches!(
            twiss_gammas(&table),
            Err(Error::NotTwiss(FileType::Survey))
        ));
        assert!(s_positions(&table).is_err());
    }
}
