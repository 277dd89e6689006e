#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fundamental physical constants used throughout the library.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared mathematical utilities (scalars and phasors).
pub mod math;
/// Material property models (relative permittivity and permeability).
pub mod materials;
/// Transfer and propagation matrix primitives.
pub mod transfer;
/// The one-dimensional photonic crystal model and cascade solver.
pub mod crystal;
/// Frequency sweep builders and post-processing helpers.
pub mod sweep;
/// Error types shared between submodules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;

pub use crystal::{ModelError, PhotonicCrystal1d};
