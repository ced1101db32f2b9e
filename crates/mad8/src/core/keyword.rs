use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::core::Parameter::{self, *};
use crate::error::Error;

/// Position of each parameter in the 12-slot record data vector
pub type Layout = &'static [(Parameter, usize)];

// Layouts shared between several keywords
const DRIFT: Layout = &[(L, 0), (Aper, 9), (Note, 10), (E, 11)];
const BEND: Layout = &[
    (L, 0),
    (Angle, 1),
    (K1, 2),
    (K2, 3),
    (Tilt, 4),
    (E1, 5),
    (E2, 6),
    (H1, 7),
    (H2, 8),
    (Aper, 9),
    (Note, 10),
    (E, 11),
];
const QUADRUPOLE: Layout = &[(L, 0), (K1, 2), (Tilt, 4), (Aper, 9), (Note, 10), (E, 11)];
const SEXTUPOLE: Layout = &[(L, 0), (K2, 3), (Tilt, 4), (Aper, 9), (Note, 10), (E, 11)];
const OCTUPOLE: Layout = &[(L, 0), (Tilt, 4), (K3, 5), (Aper, 9), (Note, 10), (E, 11)];
const MULTIPOLE: Layout = &[
    (K0l, 1),
    (K1l, 2),
    (K2l, 3),
    (T0, 4),
    (K3l, 5),
    (T1, 6),
    (T2, 7),
    (T3, 8),
    (Aper, 9),
    (Note, 10),
    (E, 11),
];
const SOLENOID: Layout = &[(L, 0), (Ks, 5), (Aper, 9), (Note, 10), (E, 11)];
const CAVITY: Layout = &[
    (L, 0),
    (Freq, 5),
    (Volt, 6),
    (Lag, 7),
    (Aper, 9),
    (Note, 10),
    (E, 11),
];
const SEPARATOR: Layout = &[(L, 0), (Tilt, 4), (Efield, 5), (Aper, 9), (Note, 10), (E, 11)];
const KICKER: Layout = &[(L, 0), (Hkick, 4), (Vkick, 5), (Aper, 9), (Note, 10), (E, 11)];
const HKICKER: Layout = &[(L, 0), (Hkick, 4), (Aper, 9), (Note, 10), (E, 11)];
const VKICKER: Layout = &[(L, 0), (Vkick, 5), (Aper, 9), (Note, 10), (E, 11)];
const ROTATION: Layout = &[(L, 0), (Angle, 5), (Aper, 9), (Note, 10), (E, 11)];
const COLLIMATOR: Layout = &[(L, 0), (Xsize, 4), (Ysize, 5), (Aper, 9), (Note, 10), (E, 11)];
const MARKER: Layout = &[(L, 0), (Note, 10), (E, 11)];
const MATRIX: Layout = &[(L, 0), (Aper, 9), (E, 11)];

/// Lattice element types
///
/// The 4-character tag at the start of every element record. This is a closed
/// set, and anything else in a file is an [Error::UnknownKeyword].
///
/// Each keyword writes a different selection of parameters into the record
/// data, given by its [Keyword::layout()].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    /// `DRIF`
    Drift,
    /// `RBEN`
    Rbend,
    /// `SBEN`
    Sbend,
    /// `QUAD`
    Quadrupole,
    /// `SEXT`
    Sextupole,
    /// `OCTU`
    Octupole,
    /// `MULT`
    Multipole,
    /// `SOLE`
    Solenoid,
    /// `RFCA`, also `RFCAVITY`
    RfCavity,
    /// `ELSE`, also `ELSEPARATOR`
    ElSeparator,
    /// `KICK`
    Kicker,
    /// `HKIC`
    HKicker,
    /// `VKIC`
    VKicker,
    /// `SROT`
    SRotation,
    /// `YROT`
    YRotation,
    /// `MONI`
    Monitor,
    /// `HMON`, also `HMONITOR`
    HMonitor,
    /// `VMON`, also `VMONITOR`
    VMonitor,
    /// `ECOL`
    ECollimator,
    /// `RCOL`
    RCollimator,
    /// `MARK`
    Marker,
    /// `INST`
    Instrument,
    /// `WIRE`
    Wire,
    /// `IMON`
    IMonitor,
    /// `PROF`
    Profile,
    /// `BLMO`
    BlMonitor,
    /// `LCAV`
    LCavity,
    /// `MATR`
    Matrix,
}

impl Keyword {
    /// Every known keyword
    pub const ALL: [Keyword; 28] = [
        Keyword::Drift,
        Keyword::Rbend,
        Keyword::Sbend,
        Keyword::Quadrupole,
        Keyword::Sextupole,
        Keyword::Octupole,
        Keyword::Multipole,
        Keyword::Solenoid,
        Keyword::RfCavity,
        Keyword::ElSeparator,
        Keyword::Kicker,
        Keyword::HKicker,
        Keyword::VKicker,
        Keyword::SRotation,
        Keyword::YRotation,
        Keyword::Monitor,
        Keyword::HMonitor,
        Keyword::VMonitor,
        Keyword::ECollimator,
        Keyword::RCollimator,
        Keyword::Marker,
        Keyword::Instrument,
        Keyword::Wire,
        Keyword::IMonitor,
        Keyword::Profile,
        Keyword::BlMonitor,
        Keyword::LCavity,
        Keyword::Matrix,
    ];

    /// The 4-character tag written by MAD8
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Drift => "DRIF",
            Keyword::Rbend => "RBEN",
            Keyword::Sbend => "SBEN",
            Keyword::Quadrupole => "QUAD",
            Keyword::Sextupole => "SEXT",
            Keyword::Octupole => "OCTU",
            Keyword::Multipole => "MULT",
            Keyword::Solenoid => "SOLE",
            Keyword::RfCavity => "RFCA",
            Keyword::ElSeparator => "ELSE",
            Keyword::Kicker => "KICK",
            Keyword::HKicker => "HKIC",
            Keyword::VKicker => "VKIC",
            Keyword::SRotation => "SROT",
            Keyword::YRotation => "YROT",
            Keyword::Monitor => "MONI",
            Keyword::HMonitor => "HMON",
            Keyword::VMonitor => "VMON",
            Keyword::ECollimator => "ECOL",
            Keyword::RCollimator => "RCOL",
            Keyword::Marker => "MARK",
            Keyword::Instrument => "INST",
            Keyword::Wire => "WIRE",
            Keyword::IMonitor => "IMON",
            Keyword::Profile => "PROF",
            Keyword::BlMonitor => "BLMO",
            Keyword::LCavity => "LCAV",
            Keyword::Matrix => "MATR",
        }
    }

    /// Parameters written by this element type and their data slots
    ///
    /// Slots index the 12 values of a record:
    ///
    /// | Slot  | Source                         |
    /// | ----- | ------------------------------ |
    /// | 0     | line 1, `F12.6` value          |
    /// | 1-3   | line 1, first three `E16.9`    |
    /// | 4-8   | line 2, all five `E16.9`       |
    /// | 9     | line 1, fourth `E16.9`         |
    /// | 10    | line 1, `A19` note             |
    /// | 11    | line 1, final `E16.9`          |
    ///
    /// ```rust
    /// # use madtools_mad8::{Keyword, Parameter};
    /// let layout = Keyword::Quadrupole.layout();
    /// assert!(layout.contains(&(Parameter::K1, 2)));
    /// assert!(layout.contains(&(Parameter::L, 0)));
    /// ```
    pub fn layout(&self) -> Layout {
        match self {
            Keyword::Drift => DRIFT,
            Keyword::Rbend | Keyword::Sbend => BEND,
            Keyword::Quadrupole => QUADRUPOLE,
            Keyword::Sextupole => SEXTUPOLE,
            Keyword::Octupole => OCTUPOLE,
            Keyword::Multipole => MULTIPOLE,
            Keyword::Solenoid => SOLENOID,
            Keyword::RfCavity | Keyword::LCavity => CAVITY,
            Keyword::ElSeparator => SEPARATOR,
            Keyword::Kicker => KICKER,
            Keyword::HKicker => HKICKER,
            Keyword::VKicker => VKICKER,
            Keyword::SRotation | Keyword::YRotation => ROTATION,
            Keyword::Monitor | Keyword::HMonitor | Keyword::VMonitor => DRIFT,
            Keyword::ECollimator | Keyword::RCollimator => COLLIMATOR,
            Keyword::Marker
            | Keyword::Instrument
            | Keyword::Wire
            | Keyword::IMonitor
            | Keyword::Profile
            | Keyword::BlMonitor => MARKER,
            Keyword::Matrix => MATRIX,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Keyword {
    type Err = Error;

    /// Case-sensitive match on the trimmed tag, accepting the long spellings
    /// of the few keywords that do not fit in four characters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let keyword = match s.trim() {
            "RFCAVITY" => Keyword::RfCavity,
            "ELSEPARATOR" => Keyword::ElSeparator,
            "HMONITOR" => Keyword::HMonitor,
            "VMONITOR" => Keyword::VMonitor,
            tag => Keyword::ALL
                .into_iter()
                .find(|k| k.as_str() == tag)
                .ok_or_else(|| Error::UnknownKeyword(tag.to_string()))?,
        };
        Ok(keyword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for keyword in Keyword::ALL {
            assert_eq!(keyword.as_str().len(), 4);
            assert_eq!(keyword.as_str().parse::<Keyword>().unwrap(), keyword);
        }
    }

    #[test]
    fn long_spellings() {
        assert_eq!("RFCAVITY".parse::<Keyword>().unwrap(), Keyword::RfCavity);
        assert_eq!("ELSEPARATOR".parse::<Keyword>().unwrap(), Keyword::ElSeparator);
        assert_eq!("HMONITOR".parse::<Keyword>().unwrap(), Keyword::HMonitor);
        assert_eq!("VMONITOR".parse::<Keyword>().unwrap(), Keyword::VMonitor);
    }

    #[test]
    fn unknown_keyword() {
        let err = "WIGG".parse::<Keyword>().unwrap_err();
        assert!(matches!(err, Error::UnknownKeyword(tag) if tag == "WIGG"));
        assert!("drif".parse::<Keyword>().is_err());
    }

    #[test]
    fn layouts_stay_in_bounds() {
        for keyword in Keyword::ALL {
            let layout = keyword.layout();
            assert!(layout.iter().all(|(_, slot)| *slot < 12));
            // only the note lives in slot 10
            for (parameter, slot) in layout {
                assert_eq!(*slot == 10, *parameter == Parameter::Note);
            }
        }
    }
}
