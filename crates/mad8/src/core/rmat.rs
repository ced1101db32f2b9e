use nalgebra::Matrix6;
use serde::Serialize;

/// Payload column names for RMAT files, in file order
pub const RMAT_COLUMNS: [&str; 37] = [
    "R11", "R12", "R13", "R14", "R15", "R16", //
    "R21", "R22", "R23", "R24", "R25", "R26", //
    "R31", "R32", "R33", "R34", "R35", "R36", //
    "R41", "R42", "R43", "R44", "R45", "R46", //
    "R51", "R52", "R53", "R54", "R55", "R56", //
    "R61", "R62", "R63", "R64", "R65", "R66", //
    "SUML",
];

/// Linear transport matrix from the start of the line to an element exit
///
/// Written as six lines after the common element lines. The first five hold
/// six values, the last holds seven where the final value is the cumulative
/// length rather than a matrix entry.
///
/// `Rij` is `matrix[(i - 1, j - 1)]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rmat {
    /// 6x6 transport matrix
    pub matrix: Matrix6<f64>,
    /// Cumulative length (m)
    pub suml: f64,
}

impl Rmat {
    /// Matrix entry by 1-based index, i.e. `r(1, 6)` for R16
    pub fn r(&self, i: usize, j: usize) -> Option<f64> {
        if (1..=6).contains(&i) && (1..=6).contains(&j) {
            Some(self.matrix[(i - 1, j - 1)])
        } else {
            None
        }
    }

    /// Look up a value by column name, `None` if not an RMAT column
    pub fn get(&self, column: &str) -> Option<f64> {
        if column == "SUML" {
            return Some(self.suml);
        }

        let index = RMAT_COLUMNS.iter().position(|c| *c == column)?;
        self.r(index / 6 + 1, index % 6 + 1)
    }
}

impl From<&[f64; 37]> for Rmat {
    /// Row-major matrix entries followed by the cumulative length
    fn from(values: &[f64; 37]) -> Self {
        Self {
            matrix: Matrix6::from_row_slice(&values[..36]),
            suml: values[36],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_entries() {
        let mut values = [0.0; 37];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as f64;
        }
        let rmat = Rmat::from(&values);

        assert_eq!(rmat.r(1, 1), Some(0.0));
        assert_eq!(rmat.r(1, 6), Some(5.0));
        assert_eq!(rmat.r(2, 1), Some(6.0));
        assert_eq!(rmat.r(6, 6), Some(35.0));
        assert_eq!(rmat.r(7, 1), None);
        assert_eq!(rmat.suml, 36.0);

        assert_eq!(rmat.get("R34"), Some(15.0));
        assert_eq!(rmat.get("SUML"), Some(36.0));
        assert_eq!(rmat.get("R67"), None);
    }
}
