use std::fmt;
use std::str::FromStr;

use log::{trace, warn};
use serde::Serialize;

use crate::core::Keyword;
use crate::fortran::Value;
use crate::Cell;

/// Names of the columns shared by every file type, in table order
pub const COMMON_COLUMNS: [&str; 32] = [
    "KEYWORD", "NAME", "ANGLE", "APER", "E", "E1", "E2", "EFIELD", "FREQ", "H1", "H2", "HKICK",
    "K0L", "K1", "K1L", "K2", "K2L", "K3", "K3L", "KS", "L", "LAG", "NOTE", "T0", "T1", "T2", "T3",
    "TILT", "VKICK", "VOLT", "XSIZE", "YSIZE",
];

/// Element parameters that a keyword layout may fill
///
/// Everything is numeric except the [Parameter::Note].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Angle,
    Aper,
    E,
    E1,
    E2,
    Efield,
    Freq,
    H1,
    H2,
    Hkick,
    K0l,
    K1,
    K1l,
    K2,
    K2l,
    K3,
    K3l,
    Ks,
    L,
    Lag,
    Note,
    T0,
    T1,
    T2,
    T3,
    Tilt,
    Vkick,
    Volt,
    Xsize,
    Ysize,
}

impl Parameter {
    /// Every parameter, in table order
    pub const ALL: [Parameter; 30] = [
        Parameter::Angle,
        Parameter::Aper,
        Parameter::E,
        Parameter::E1,
        Parameter::E2,
        Parameter::Efield,
        Parameter::Freq,
        Parameter::H1,
        Parameter::H2,
        Parameter::Hkick,
        Parameter::K0l,
        Parameter::K1,
        Parameter::K1l,
        Parameter::K2,
        Parameter::K2l,
        Parameter::K3,
        Parameter::K3l,
        Parameter::Ks,
        Parameter::L,
        Parameter::Lag,
        Parameter::Note,
        Parameter::T0,
        Parameter::T1,
        Parameter::T2,
        Parameter::T3,
        Parameter::Tilt,
        Parameter::Vkick,
        Parameter::Volt,
        Parameter::Xsize,
        Parameter::Ysize,
    ];

    /// Column name as used by MAD8
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Angle => "ANGLE",
            Parameter::Aper => "APER",
            Parameter::E => "E",
            Parameter::E1 => "E1",
            Parameter::E2 => "E2",
            Parameter::Efield => "EFIELD",
            Parameter::Freq => "FREQ",
            Parameter::H1 => "H1",
            Parameter::H2 => "H2",
            Parameter::Hkick => "HKICK",
            Parameter::K0l => "K0L",
            Parameter::K1 => "K1",
            Parameter::K1l => "K1L",
            Parameter::K2 => "K2",
            Parameter::K2l => "K2L",
            Parameter::K3 => "K3",
            Parameter::K3l => "K3L",
            Parameter::Ks => "KS",
            Parameter::L => "L",
            Parameter::Lag => "LAG",
            Parameter::Note => "NOTE",
            Parameter::T0 => "T0",
            Parameter::T1 => "T1",
            Parameter::T2 => "T2",
            Parameter::T3 => "T3",
            Parameter::Tilt => "TILT",
            Parameter::Vkick => "VKICK",
            Parameter::Volt => "VOLT",
            Parameter::Xsize => "XSIZE",
            Parameter::Ysize => "YSIZE",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(())
    }
}

/// Common data for a single lattice element record
///
/// Every record of every file type starts with the same two lines describing
/// the element. Which of the parameters are actually written depends on the
/// element [Keyword], and anything not in the keyword layout stays at its
/// default of `0.0` (or an empty string for the note).
///
/// A blank keyword marks a placeholder record, e.g. the start of the beam
/// line, in which case `keyword` is `None` and only the name is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    /// Element type, `None` for a blank placeholder
    pub keyword: Option<Keyword>,
    /// Element name
    pub name: String,
    pub angle: f64,
    pub aper: f64,
    pub e: f64,
    pub e1: f64,
    pub e2: f64,
    pub efield: f64,
    pub freq: f64,
    pub h1: f64,
    pub h2: f64,
    pub hkick: f64,
    pub k0l: f64,
    pub k1: f64,
    pub k1l: f64,
    pub k2: f64,
    pub k2l: f64,
    pub k3: f64,
    pub k3l: f64,
    pub ks: f64,
    pub l: f64,
    pub lag: f64,
    /// Free text attached to the element
    pub note: String,
    pub t0: f64,
    pub t1: f64,
    pub t2: f64,
    pub t3: f64,
    pub tilt: f64,
    pub vkick: f64,
    pub volt: f64,
    pub xsize: f64,
    pub ysize: f64,
}

impl Element {
    /// Keyword tag as written in the file, empty for placeholders
    pub fn keyword_str(&self) -> &'static str {
        self.keyword.map(|k| k.as_str()).unwrap_or_default()
    }

    /// Value of a numeric parameter, `None` for the note
    pub fn numeric(&self, parameter: Parameter) -> Option<f64> {
        let value = match parameter {
            Parameter::Angle => self.angle,
            Parameter::Aper => self.aper,
            Parameter::E => self.e,
            Parameter::E1 => self.e1,
            Parameter::E2 => self.e2,
            Parameter::Efield => self.efield,
            Parameter::Freq => self.freq,
            Parameter::H1 => self.h1,
            Parameter::H2 => self.h2,
            Parameter::Hkick => self.hkick,
            Parameter::K0l => self.k0l,
            Parameter::K1 => self.k1,
            Parameter::K1l => self.k1l,
            Parameter::K2 => self.k2,
            Parameter::K2l => self.k2l,
            Parameter::K3 => self.k3,
            Parameter::K3l => self.k3l,
            Parameter::Ks => self.ks,
            Parameter::L => self.l,
            Parameter::Lag => self.lag,
            Parameter::Note => return None,
            Parameter::T0 => self.t0,
            Parameter::T1 => self.t1,
            Parameter::T2 => self.t2,
            Parameter::T3 => self.t3,
            Parameter::Tilt => self.tilt,
            Parameter::Vkick => self.vkick,
            Parameter::Volt => self.volt,
            Parameter::Xsize => self.xsize,
            Parameter::Ysize => self.ysize,
        };
        Some(value)
    }

    fn numeric_mut(&mut self, parameter: Parameter) -> Option<&mut f64> {
        let value = match parameter {
            Parameter::Angle => &mut self.angle,
            Parameter::Aper => &mut self.aper,
            Parameter::E => &mut self.e,
            Parameter::E1 => &mut self.e1,
            Parameter::E2 => &mut self.e2,
            Parameter::Efield => &mut self.efield,
            Parameter::Freq => &mut self.freq,
            Parameter::H1 => &mut self.h1,
            Parameter::H2 => &mut self.h2,
            Parameter::Hkick => &mut self.hkick,
            Parameter::K0l => &mut self.k0l,
            Parameter::K1 => &mut self.k1,
            Parameter::K1l => &mut self.k1l,
            Parameter::K2 => &mut self.k2,
            Parameter::K2l => &mut self.k2l,
            Parameter::K3 => &mut self.k3,
            Parameter::K3l => &mut self.k3l,
            Parameter::Ks => &mut self.ks,
            Parameter::L => &mut self.l,
            Parameter::Lag => &mut self.lag,
            Parameter::Note => return None,
            Parameter::T0 => &mut self.t0,
            Parameter::T1 => &mut self.t1,
            Parameter::T2 => &mut self.t2,
            Parameter::T3 => &mut self.t3,
            Parameter::Tilt => &mut self.tilt,
            Parameter::Vkick => &mut self.vkick,
            Parameter::Volt => &mut self.volt,
            Parameter::Xsize => &mut self.xsize,
            Parameter::Ysize => &mut self.ysize,
        };
        Some(value)
    }

    /// Overwrite a parameter from a decoded slot
    ///
    /// Numeric slots that did not convert leave the parameter untouched.
    pub(crate) fn set(&mut self, parameter: Parameter, slot: &Value) {
        if parameter == Parameter::Note {
            self.note = slot.as_str().unwrap_or_default().trim().to_string();
            return;
        }

        if let Value::Real(value) = slot {
            if let Some(target) = self.numeric_mut(parameter) {
                *target = *value;
            }
            return;
        }

        let text = slot.as_str().unwrap_or_default();
        if text.trim().is_empty() {
            trace!("{}: blank {parameter}, kept default", self.name);
        } else {
            warn!("{}: {parameter} \"{text}\" is not a number", self.name);
        }
    }

    /// Look up a common column by name
    ///
    /// Returns `None` for anything that is not one of the [COMMON_COLUMNS].
    pub fn get(&self, column: &str) -> Option<Cell<'_>> {
        match column {
            "KEYWORD" => Some(Cell::Text(self.keyword_str())),
            "NAME" => Some(Cell::Text(&self.name)),
            "NOTE" => Some(Cell::Text(&self.note)),
            _ => column
                .parse::<Parameter>()
                .ok()
                .and_then(|p| self.numeric(p))
                .map(Cell::Real),
        }
    }
}
