//! `madtools` is a small modular toolkit for reading MAD8 optics output
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[cfg(feature = "mad8")]
#[cfg_attr(docsrs, doc(cfg(feature = "mad8")))]
#[doc(inline)]
pub use madtools_mad8 as mad8;

#[cfg(feature = "optics")]
#[cfg_attr(docsrs, doc(cfg(feature = "optics")))]
#[doc(inline)]
pub use madtools_optics as optics;
