use serde::Serialize;

/// Optics functions at the exit of an element
///
/// Three lines of five values follow the common element lines in a TWISS
/// file. Values that could not be read as numbers are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Twiss {
    /// Horizontal alpha
    pub alfx: Option<f64>,
    /// Horizontal beta (m)
    pub betx: Option<f64>,
    /// Horizontal phase advance (2π)
    pub mux: Option<f64>,
    /// Horizontal dispersion (m)
    pub dx: Option<f64>,
    /// Horizontal dispersion derivative
    pub dpx: Option<f64>,
    /// Vertical alpha
    pub alfy: Option<f64>,
    /// Vertical beta (m)
    pub bety: Option<f64>,
    /// Vertical phase advance (2π)
    pub muy: Option<f64>,
    /// Vertical dispersion (m)
    pub dy: Option<f64>,
    /// Vertical dispersion derivative
    pub dpy: Option<f64>,
    /// Closed orbit x (m)
    pub x: Option<f64>,
    /// Closed orbit px
    pub px: Option<f64>,
    /// Closed orbit y (m)
    pub y: Option<f64>,
    /// Closed orbit py
    pub py: Option<f64>,
    /// Cumulative length (m)
    pub suml: Option<f64>,
}

impl Twiss {
    /// Payload column names, in file order
    pub const COLUMNS: [&'static str; 15] = [
        "ALFX", "BETX", "MUX", "DX", "DPX", "ALFY", "BETY", "MUY", "DY", "DPY", "X", "PX", "Y",
        "PY", "SUML",
    ];

    /// All values in column order
    pub fn values(&self) -> [Option<f64>; 15] {
        [
            self.alfx, self.betx, self.mux, self.dx, self.dpx, self.alfy, self.bety, self.muy,
            self.dy, self.dpy, self.x, self.px, self.y, self.py, self.suml,
        ]
    }

    /// Look up a value by column name, `None` if not a TWISS column
    pub fn get(&self, column: &str) -> Option<Option<f64>> {
        let index = Self::COLUMNS.iter().position(|c| *c == column)?;
        Some(self.values()[index])
    }
}

impl From<[Option<f64>; 15]> for Twiss {
    fn from(values: [Option<f64>; 15]) -> Self {
        let [alfx, betx, mux, dx, dpx, alfy, bety, muy, dy, dpy, x, px, y, py, suml] = values;
        Self {
            alfx,
            betx,
            mux,
            dx,
            dpx,
            alfy,
            bety,
            muy,
            dy,
            dpy,
            x,
            px,
            y,
            py,
            suml,
        }
    }
}

/// Summary values at the end of a TWISS file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TwissSummary {
    /// Momentum deviation, `DELTAP`
    pub deltap: Option<f64>,
    /// Transition gamma, `GAMTR`
    pub gamtr: Option<f64>,
    /// Circumference or length (m), `C`
    pub c: Option<f64>,
    /// Cosine of horizontal phase advance, `COSMUX`
    pub cosmux: Option<f64>,
    /// Horizontal tune, `QX`
    pub qx: Option<f64>,
    /// Horizontal tune derivative, `QX'`
    pub qx_prime: Option<f64>,
    /// Maximum horizontal beta (m), `BXMAX`
    pub bxmax: Option<f64>,
    /// Maximum horizontal dispersion (m), `DXMAX`
    pub dxmax: Option<f64>,
    /// Cosine of vertical phase advance, `COSMUY`
    pub cosmuy: Option<f64>,
    /// Vertical tune, `QY`
    pub qy: Option<f64>,
    /// Vertical tune derivative, `QY'`
    pub qy_prime: Option<f64>,
    /// Maximum vertical beta (m), `BYMAX`
    pub bymax: Option<f64>,
    /// Maximum vertical dispersion (m), `DYMAX`
    pub dymax: Option<f64>,
}

impl TwissSummary {
    /// Key/value pairs in file order
    pub fn entries(&self) -> [(&'static str, Option<f64>); 13] {
        [
            ("DELTAP", self.deltap),
            ("GAMTR", self.gamtr),
            ("C", self.c),
            ("COSMUX", self.cosmux),
            ("QX", self.qx),
            ("QX'", self.qx_prime),
            ("BXMAX", self.bxmax),
            ("DXMAX", self.dxmax),
            ("COSMUY", self.cosmuy),
            ("QY", self.qy),
            ("QY'", self.qy_prime),
            ("BYMAX", self.bymax),
            ("DYMAX", self.dymax),
        ]
    }
}

impl From<[Option<f64>; 13]> for TwissSummary {
    fn from(values: [Option<f64>; 13]) -> Self {
        let [deltap, gamtr, c, cosmux, qx, qx_prime, bxmax, dxmax, cosmuy, qy, qy_prime, bymax, dymax] =
            values;
        Self {
            deltap,
            gamtr,
            c,
            cosmux,
            qx,
            qx_prime,
            bxmax,
            dxmax,
            cosmuy,
            qy,
            qy_prime,
            bymax,
            dymax,
        }
    }
}
