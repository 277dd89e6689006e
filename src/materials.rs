//! Material property models and abstractions.

use crate::constants::{VACUUM_PERMEABILITY, VACUUM_PERMITTIVITY};
use crate::math::Scalar;
use crate::units::Impedance;

/// Linear, isotropic, lossless material described by its relative constants.
///
/// Both constants are dimensionless multipliers of the vacuum values. The
/// model only supports real, positive constants; absorption (complex
/// permittivity) is out of scope.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeMaterial {
    /// Relative permittivity εᵣ.
    pub epsilon_r: Scalar,
    /// Relative permeability μᵣ.
    pub mu_r: Scalar,
}

impl RelativeMaterial {
    /// Creates a material from explicit relative constants.
    #[must_use]
    pub const fn new(epsilon_r: Scalar, mu_r: Scalar) -> Self {
        Self { epsilon_r, mu_r }
    }

    /// Free space: εᵣ = μᵣ = 1.
    #[must_use]
    pub const fn vacuum() -> Self {
        Self::new(1.0, 1.0)
    }

    /// Non-magnetic dielectric (μᵣ = 1).
    #[must_use]
    pub const fn dielectric(epsilon_r: Scalar) -> Self {
        Self::new(epsilon_r, 1.0)
    }

    /// Computes the wave impedance √(μ₀μᵣ / ε₀εᵣ).
    #[must_use]
    pub fn wave_impedance(&self) -> Impedance<Scalar> {
        let value = ((VACUUM_PERMEABILITY * self.mu_r) / (VACUUM_PERMITTIVITY * self.epsilon_r))
            .sqrt();
        Impedance::new(value)
    }

    /// Wavenumber k = ω √(ε₀μ₀εᵣμᵣ) at angular frequency `omega` (rad/s).
    #[must_use]
    pub fn wavenumber(&self, omega: Scalar) -> Scalar {
        omega * (VACUUM_PERMITTIVITY * VACUUM_PERMEABILITY * self.epsilon_r * self.mu_r).sqrt()
    }

    /// True when both constants are finite and strictly positive, the only
    /// regime in which the lossless impedance above is real.
    #[must_use]
    pub fn is_lossless_passive(&self) -> bool {
        self.epsilon_r.is_finite()
            && self.mu_r.is_finite()
            && self.epsilon_r > 0.0
            && self.mu_r > 0.0
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::SPEED_OF_LIGHT;

    #[test]
    fn vacuum_impedance_matches_reference() {
        let z0 = RelativeMaterial::vacuum().wave_impedance();
        assert_relative_eq!(z0.value(), 376.730_313_668, epsilon = 1.0e-6);
        let printed = format!("{z0}");
        assert!(
            printed.ends_with('Ω'),
            "expected impedance string to include ohm symbol, got {printed}"
        );
    }

    #[test]
    fn vacuum_wavenumber_matches_omega_over_c() {
        let omega = 2.0 * std::f64::consts::PI * 1.0e9;
        let k = RelativeMaterial::vacuum().wavenumber(omega);
        assert_relative_eq!(k, omega / SPEED_OF_LIGHT, max_relative = 1.0e-9);
    }

    #[test]
    fn dielectric_impedance_scales_inversely_with_index() {
        // n = √εᵣ = 2 halves the impedance relative to vacuum.
        let z = RelativeMaterial::dielectric(4.0).wave_impedance();
        let z0 = RelativeMaterial::vacuum().wave_impedance();
        assert_relative_eq!(z.value(), z0.value() / 2.0, max_relative = 1.0e-12);
    }

    #[test]
    fn passivity_check_rejects_nonpositive_constants() {
        assert!(RelativeMaterial::dielectric(2.0).is_lossless_passive());
        assert!(!RelativeMaterial::dielectric(0.0).is_lossless_passive());
        assert!(!RelativeMaterial::new(1.0, -1.0).is_lossless_passive());
        assert!(!RelativeMaterial::dielectric(Scalar::NAN).is_lossless_passive());
    }
}
