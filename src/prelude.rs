//! Convenience re-exports for building photonic-crystal experiments.

pub use crate::constants::*;
pub use crate::crystal::{Amplitudes, ModelError, PhotonicCrystal1d, PowerCoefficients};
pub use crate::errors::PhotonicTmmError;
pub use crate::materials::RelativeMaterial;
pub use crate::math::{phasor, CScalar, Scalar};
pub use crate::sweep::{
    angular_freq_linspace, angular_freq_logspace, linspace, logspace_hz, mag, mag_db, phase_deg,
    phase_rad, sweep_map, sweep_power, SpectrumPoint,
};
pub use crate::transfer::{Interface, LayerKind, PropagationTable, TransferTable, WaveMatrix};
pub use crate::units::{Impedance, Ohm, Quantity, Unit};
