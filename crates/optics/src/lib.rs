//! Derived beam optics from MAD8 TWISS tables
//!
//! Quantities MAD8 does not write out but that follow directly from the
//! optics functions of a [Table](madtools_mad8::Table).
//!
//! | Function               | Columns                              |
//! | ---------------------- | ------------------------------------ |
//! | [twiss_gammas()]       | `GAMX`, `GAMY`                       |
//! | [s_positions()]        | `S`                                  |
//! | [corrected_energies()] | `E` with the initial row fixed       |
//! | [beam_sizes()]         | `SIGMAX`, `SIGMAY`, `SIGMAXP`, `SIGMAYP` |
//!
//! Every function needs a TWISS table and fails with [Error::NotTwiss]
//! otherwise.
//!
//! # Quickstart example
//!
//! ```rust, no_run
//! # use madtools_mad8::read_twiss;
//! # use madtools_optics::{beam_sizes, Emittance};
//! let table = read_twiss("/path/to/twiss.tape").unwrap();
//!
//! let emittance = Emittance {
//!     norm_x: 1e-6,
//!     norm_y: 1e-8,
//!     energy_spread: 1e-3,
//! };
//!
//! for (row, size) in table.rows.iter().zip(beam_sizes(&table, &emittance).unwrap()) {
//!     println!("{:<16} {:?}", row.element.name, size.sigma_x);
//! }
//! ```

mod beam;
mod error;
mod twiss;

#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use beam::{beam_sizes, corrected_energies, BeamSize, Emittance, MASS_ELECTRON_GEV};

#[doc(inline)]
pub use twiss::{s_positions, twiss_gamma, twiss_gammas, TwissGamma};
