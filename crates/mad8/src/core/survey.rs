use serde::Serialize;

/// Global position and orientation at the exit of an element
///
/// Two lines follow the common element lines in a SURVEY file: the position
/// and cumulative length, then the three orientation angles.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Survey {
    /// Global x (m)
    pub x: Option<f64>,
    /// Global y (m)
    pub y: Option<f64>,
    /// Global z (m)
    pub z: Option<f64>,
    /// Cumulative length (m)
    pub suml: Option<f64>,
    /// Azimuthal angle (rad)
    pub theta: Option<f64>,
    /// Elevation angle (rad)
    pub phi: Option<f64>,
    /// Roll angle (rad)
    pub psi: Option<f64>,
}

impl Survey {
    /// Payload column names, in file order
    pub const COLUMNS: [&'static str; 7] = ["X", "Y", "Z", "SUML", "THETA", "PHI", "PSI"];

    /// All values in column order
    pub fn values(&self) -> [Option<f64>; 7] {
        [
            self.x, self.y, self.z, self.suml, self.theta, self.phi, self.psi,
        ]
    }

    /// Look up a value by column name, `None` if not a SURVEY column
    pub fn get(&self, column: &str) -> Option<Option<f64>> {
        let index = Self::COLUMNS.iter().position(|c| *c == column)?;
        Some(self.values()[index])
    }
}

impl From<[Option<f64>; 7]> for Survey {
    fn from(values: [Option<f64>; 7]) -> Self {
        let [x, y, z, suml, theta, phi, psi] = values;
        Self {
            x,
            y,
            z,
            suml,
            theta,
            phi,
            psi,
        }
    }
}

/// Summary values at the end of a SURVEY file
///
/// Linear machines have no ring radii, so `rmin` and `rmax` are `None` and
/// `c` is the length of the line rather than a circumference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SurveySummary {
    /// Machine centre x (m)
    pub x: Option<f64>,
    /// Machine centre y (m)
    pub y: Option<f64>,
    /// Machine centre z (m)
    pub z: Option<f64>,
    /// Minimum ring radius (m), `None` for linear machines
    pub rmin: Option<f64>,
    /// Maximum ring radius (m), `None` for linear machines
    pub rmax: Option<f64>,
    /// Circumference, or length of a linear machine (m)
    pub c: Option<f64>,
    /// Ring (`true`) or line (`false`)
    pub circular: bool,
}

impl SurveySummary {
    /// Key/value pairs in file order
    pub fn entries(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("X", self.x),
            ("Y", self.y),
            ("Z", self.z),
            ("RMIN", self.rmin),
            ("RMAX", self.rmax),
            ("C", self.c),
        ]
    }
}
