use log::{debug, warn};
use madtools_mad8::Table;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::twiss::{optics, optional_gamma};

/// Electron rest mass (GeV)
pub const MASS_ELECTRON_GEV: f64 = 0.511e-3;

/// Beam parameters needed for beam sizes
///
/// Emittances are normalised, the geometric emittance at each element is
/// found from the element energy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Emittance {
    /// Normalised horizontal emittance (m rad)
    pub norm_x: f64,
    /// Normalised vertical emittance (m rad)
    pub norm_y: f64,
    /// Relative energy spread
    pub energy_spread: f64,
}

/// RMS beam size and divergence at the exit of an element
///
/// `None` where any optics function the value depends on could not be read,
/// or the element energy is not positive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BeamSize {
    /// Horizontal size (m), `SIGMAX`
    pub sigma_x: Option<f64>,
    /// Vertical size (m), `SIGMAY`
    pub sigma_y: Option<f64>,
    /// Horizontal divergence (rad), `SIGMAXP`
    pub sigma_xp: Option<f64>,
    /// Vertical divergence (rad), `SIGMAYP`
    pub sigma_yp: Option<f64>,
}

/// Element energies with the first row fixed up
///
/// MAD8 writes a zero energy for the initial placeholder record. A zero first
/// energy is replaced by the energy of the second row, which is only wrong if
/// the first element changes the energy.
pub fn corrected_energies(table: &Table) -> Result<Vec<f64>> {
    if table.rows.len() < 2 {
        return Err(Error::TooFewRows {
            expected: 2,
            found: table.rows.len(),
        });
    }

    let mut energies: Vec<f64> = table.rows.iter().map(|row| row.element.e).collect();
    if energies[0] == 0.0 {
        debug!("Initial energy taken from {}", table.rows[1].element.name);
        energies[0] = energies[1];
    }

    Ok(energies)
}

/// Beam size and divergence for every row of a TWISS table
///
/// ```text
/// emit   = emit_norm / (E / m_e)
/// sigma  = sqrt(emit * beta  + (D  * espread)^2)
/// sigma' = sqrt(emit * gamma + (D' * espread)^2)
/// ```
pub fn beam_sizes(table: &Table, emittance: &Emittance) -> Result<Vec<BeamSize>> {
    let optics = optics(table)?;
    let energies = corrected_energies(table)?;
    let spread = emittance.energy_spread;

    let sigma = |emit: f64, focus: Option<f64>, dispersion: Option<f64>| -> Option<f64> {
        Some((emit * focus? + (dispersion? * spread).powi(2)).sqrt())
    };

    let sizes = optics
        .into_iter()
        .zip(energies)
        .zip(&table.rows)
        .map(|((twiss, energy), row)| {
            if energy <= 0.0 {
                warn!("{}: no beam size for energy {energy}", row.element.name);
                return BeamSize::default();
            }

            let relgamma = energy / MASS_ELECTRON_GEV;
            let emit_x = emittance.norm_x / relgamma;
            let emit_y = emittance.norm_y / relgamma;

            BeamSize {
                sigma_x: sigma(emit_x, twiss.betx, twiss.dx),
                sigma_y: sigma(emit_y, twiss.bety, twiss.dy),
                sigma_xp: sigma(emit_x, optional_gamma(twiss.alfx, twiss.betx), twiss.dpx),
                sigma_yp: sigma(emit_y, optional_gamma(twiss.alfy, twiss.bety), twiss.dpy),
            }
        })
        .collect();

    Ok(sizes)
}
