//! One-dimensional photonic crystal model and the transfer-matrix cascade.
//!
//! The crystal is a strict two-material alternating stack of `layer_count`
//! layers starting with material 1, surrounded on both sides by a
//! semi-infinite environment medium. The stack geometry and materials are
//! fixed at construction; the environment and the angular frequency are set
//! afterwards (and may be reset arbitrarily often, e.g. during a band sweep)
//! before querying reflection/transmission.

use crate::materials::RelativeMaterial;
use crate::math::{CScalar as C, Scalar};
use crate::transfer::{Interface, LayerKind, PropagationTable, TransferTable};

/// Errors raised while configuring or querying a [`PhotonicCrystal1d`].
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Raised when a query runs before a required parameter has been set.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    /// Raised when a supplied parameter is outside the lossless model's domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Complex reflection and transmission amplitudes at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Amplitudes {
    /// Complex reflection amplitude.
    pub r: C,
    /// Complex transmission amplitude.
    pub t: C,
}

impl Amplitudes {
    /// Power reflectance |r|².
    #[must_use]
    pub fn reflectance(&self) -> Scalar {
        self.r.norm_sqr()
    }

    /// Power coefficients derived via energy conservation (`T = 1 − R`).
    /// Exact only for the lossless model implemented here.
    #[must_use]
    pub fn to_power(&self) -> PowerCoefficients {
        let reflectance = self.reflectance();
        PowerCoefficients {
            reflectance,
            transmittance: 1.0 - reflectance,
        }
    }
}

/// Power reflectance and transmittance at a single frequency.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCoefficients {
    /// Power reflectance R = |r|².
    pub reflectance: Scalar,
    /// Power transmittance T = 1 − R.
    pub transmittance: Scalar,
}

/// Environment medium together with the interface matrices derived from it.
/// Replaced wholesale on every [`PhotonicCrystal1d::set_environment`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct EnvironmentState {
    material: RelativeMaterial,
    transfer: TransferTable,
}

/// Angular frequency together with the propagation matrices derived from it.
/// Replaced wholesale on every [`PhotonicCrystal1d::set_frequency`].
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrequencyState {
    omega: Scalar,
    propagation: PropagationTable,
}

/// A one-dimensional photonic crystal of two alternating lossless materials.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotonicCrystal1d {
    layer_count: usize,
    thickness1_m: Scalar,
    thickness2_m: Scalar,
    material1: RelativeMaterial,
    material2: RelativeMaterial,
    last: LayerKind,
    environment: Option<EnvironmentState>,
    frequency: Option<FrequencyState>,
}

fn require_positive(value: Scalar, what: &str) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter(format!(
            "{what} must be finite and positive, got {value}"
        )))
    }
}

fn require_passive(material: RelativeMaterial, what: &str) -> Result<(), ModelError> {
    if material.is_lossless_passive() {
        Ok(())
    } else {
        Err(ModelError::InvalidParameter(format!(
            "{what} must have finite, positive εᵣ and μᵣ, got εᵣ={}, μᵣ={}",
            material.epsilon_r, material.mu_r
        )))
    }
}

impl PhotonicCrystal1d {
    /// Creates a crystal of `layer_count` alternating layers (layers, not
    /// periods: `layer_count = 3` means 1-2-1). Thicknesses are in meters and
    /// shared by every layer of the same type.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] when `layer_count` is zero, a
    /// thickness is not positive, or a material is not lossless-passive.
    pub fn new(
        layer_count: usize,
        thickness1_m: Scalar,
        thickness2_m: Scalar,
        material1: RelativeMaterial,
        material2: RelativeMaterial,
    ) -> Result<Self, ModelError> {
        if layer_count == 0 {
            return Err(ModelError::InvalidParameter(
                "layer count must be at least 1".into(),
            ));
        }
        require_positive(thickness1_m, "thickness of layer 1")?;
        require_positive(thickness2_m, "thickness of layer 2")?;
        require_passive(material1, "material 1")?;
        require_passive(material2, "material 2")?;

        let last = if layer_count % 2 == 0 {
            LayerKind::Two
        } else {
            LayerKind::One
        };

        Ok(Self {
            layer_count,
            thickness1_m,
            thickness2_m,
            material1,
            material2,
            last,
            environment: None,
            frequency: None,
        })
    }

    /// Sets the surrounding medium and rebuilds all four interface matrices.
    /// Any previously stored environment state is overwritten in full.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidParameter`] when the medium is not
    /// lossless-passive.
    pub fn set_environment(&mut self, environment: RelativeMaterial) -> Result<(), ModelError> {
        require_passive(environment, "environment medium")?;
        let z1 = self.material1.wave_impedance().value();
        let z2 = self.material2.wave_impedance().value();
        let env_z = environment.wave_impedance().value();
        self.environment = Some(EnvironmentState {
            material: environment,
            transfer: TransferTable::build(z1, z2, env_z, self.last),
        });
        Ok(())
    }

    /// Sets the angular frequency (rad/s) and rebuilds both propagation
    /// matrices. Any previously stored frequency state is overwritten in full.
    pub fn set_frequency(&mut self, omega: Scalar) {
        let phase1 = self.material1.wavenumber(omega) * self.thickness1_m;
        let phase2 = self.material2.wavenumber(omega) * self.thickness2_m;
        self.frequency = Some(FrequencyState {
            omega,
            propagation: PropagationTable::build(phase1, phase2),
        });
    }

    /// Runs the transfer-matrix cascade and returns the complex reflection
    /// and transmission amplitudes at the current frequency.
    ///
    /// The walk starts at the far-side boundary (`last→env`) and proceeds
    /// backward through the stack toward the source side, accumulating one
    /// propagation matrix and one interface matrix per layer, closing with
    /// the first layer and the `env→first` interface.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingParameter`] when the environment or the angular
    /// frequency has not been set.
    ///
    /// # Panics
    ///
    /// Panics if the walk terminates off-parity; that indicates a defect in
    /// the parity bookkeeping itself, not bad caller input.
    pub fn amplitudes(&self) -> Result<Amplitudes, ModelError> {
        let env = self
            .environment
            .as_ref()
            .ok_or(ModelError::MissingParameter("environment medium"))?;
        let freq = self
            .frequency
            .as_ref()
            .ok_or(ModelError::MissingParameter("angular frequency"))?;

        let mut q = env.transfer[Interface::LastToEnv];
        let mut kind = self.last;
        for _ in 0..self.layer_count - 1 {
            q = q.cascade(&freq.propagation[kind]);
            q = q.cascade(&env.transfer[kind.crossing()]);
            kind = kind.other();
        }
        assert_eq!(
            kind,
            LayerKind::One,
            "cascade walk ended off-parity; layer bookkeeping is broken"
        );
        q = q.cascade(&freq.propagation[LayerKind::One]);
        q = q.cascade(&env.transfer[Interface::EnvToFirst]);

        let r = -q.c / q.d;
        let t = q.a - (q.b * q.c) / q.d;
        Ok(Amplitudes { r, t })
    }

    /// Power reflectance and transmittance at the current frequency.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Self::amplitudes`].
    pub fn power(&self) -> Result<PowerCoefficients, ModelError> {
        Ok(self.amplitudes()?.to_power())
    }

    /// Prints the currently stored environment and frequency to stdout.
    /// Unset parameters are reported as such; never panics.
    pub fn show_parameters(&self) {
        println!("Current parameters:");
        match self.environment {
            Some(env) => {
                println!("  environment εᵣ: {}", env.material.epsilon_r);
                println!("  environment μᵣ: {}", env.material.mu_r);
            }
            None => println!("  environment: unset"),
        }
        match self.frequency {
            Some(freq) => println!("  angular frequency: {:.2e} rad/s", freq.omega),
            None => println!("  angular frequency: unset"),
        }
    }

    /// Number of layers in the stack.
    #[must_use]
    pub const fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Thickness in meters of the given layer type.
    #[must_use]
    pub const fn thickness_m(&self, kind: LayerKind) -> Scalar {
        match kind {
            LayerKind::One => self.thickness1_m,
            LayerKind::Two => self.thickness2_m,
        }
    }

    /// Material of the given layer type.
    #[must_use]
    pub const fn material(&self, kind: LayerKind) -> RelativeMaterial {
        match kind {
            LayerKind::One => self.material1,
            LayerKind::Two => self.material2,
        }
    }

    /// Type of the layer adjacent to the far-side environment, fixed by the
    /// parity of the layer count.
    #[must_use]
    pub const fn last_layer(&self) -> LayerKind {
        self.last
    }

    /// Currently stored environment medium, if set.
    #[must_use]
    pub fn environment(&self) -> Option<RelativeMaterial> {
        self.environment.map(|env| env.material)
    }

    /// Currently stored angular frequency (rad/s), if set.
    #[must_use]
    pub fn angular_frequency(&self) -> Option<Scalar> {
        self.frequency.map(|freq| freq.omega)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::angular_frequency;

    fn reference_crystal() -> PhotonicCrystal1d {
        // The N=30 stack of the original experiment: 15 cm / 5 cm layers of
        // εᵣ = 2 and εᵣ = 4 dielectric.
        PhotonicCrystal1d::new(
            30,
            0.15,
            0.05,
            RelativeMaterial::dielectric(2.0),
            RelativeMaterial::dielectric(4.0),
        )
        .unwrap()
    }

    #[test]
    fn construction_rejects_bad_parameters() {
        let m1 = RelativeMaterial::dielectric(2.0);
        let m2 = RelativeMaterial::dielectric(4.0);
        assert!(matches!(
            PhotonicCrystal1d::new(0, 0.1, 0.1, m1, m2),
            Err(ModelError::InvalidParameter(_))
        ));
        assert!(matches!(
            PhotonicCrystal1d::new(4, -0.1, 0.1, m1, m2),
            Err(ModelError::InvalidParameter(_))
        ));
        assert!(matches!(
            PhotonicCrystal1d::new(4, 0.1, 0.0, m1, m2),
            Err(ModelError::InvalidParameter(_))
        ));
        assert!(matches!(
            PhotonicCrystal1d::new(4, 0.1, 0.1, RelativeMaterial::dielectric(-2.0), m2),
            Err(ModelError::InvalidParameter(_))
        ));
    }

    #[test]
    fn queries_fail_before_initialization() {
        let mut crystal = reference_crystal();
        assert!(matches!(
            crystal.amplitudes(),
            Err(ModelError::MissingParameter("environment medium"))
        ));
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        assert!(matches!(
            crystal.power(),
            Err(ModelError::MissingParameter("angular frequency"))
        ));
        crystal.set_frequency(angular_frequency(3.1e9));
        assert!(crystal.power().is_ok());
    }

    #[test]
    fn set_environment_rejects_unphysical_medium() {
        let mut crystal = reference_crystal();
        assert!(crystal
            .set_environment(RelativeMaterial::dielectric(-1.0))
            .is_err());
        assert!(crystal.environment().is_none());
    }

    #[test]
    fn matched_medium_is_transparent() {
        let mut crystal = PhotonicCrystal1d::new(
            1,
            0.15,
            0.05,
            RelativeMaterial::vacuum(),
            RelativeMaterial::vacuum(),
        )
        .unwrap();
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        for ghz in [0.5, 1.0, 2.7, 3.38, 9.0] {
            crystal.set_frequency(angular_frequency(ghz * 1.0e9));
            let power = crystal.power().unwrap();
            assert_relative_eq!(power.reflectance, 0.0, epsilon = 1.0e-12);
            assert_relative_eq!(power.transmittance, 1.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn golden_reference_frequencies() {
        // Regression baseline for the reference stack in vacuum. The band
        // gap sits near 3.38 GHz (R ≈ 0.996); 3.1 GHz is deep in a passband.
        let mut crystal = reference_crystal();
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();

        let cases = [
            (3.10e9, 0.018_219_659_248_293),
            (3.38e9, 0.995_818_378_847_038),
            (3.60e9, 0.340_771_169_938_738),
        ];
        for (hz, expected_r) in cases {
            crystal.set_frequency(angular_frequency(hz));
            let power = crystal.power().unwrap();
            assert_relative_eq!(power.reflectance, expected_r, epsilon = 1.0e-9);
            assert_relative_eq!(
                power.reflectance + power.transmittance,
                1.0,
                epsilon = 1.0e-12
            );
            assert!(power.reflectance >= 0.0 && power.reflectance <= 1.0);
            assert!(power.transmittance >= 0.0 && power.transmittance <= 1.0);
        }
    }

    #[test]
    fn transmittance_equals_transmitted_power() {
        // With the same environment on both sides, T must also equal |t|².
        let mut crystal = reference_crystal();
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        for ghz in [1.7, 2.4, 3.1, 3.38, 3.6] {
            crystal.set_frequency(angular_frequency(ghz * 1.0e9));
            let amplitudes = crystal.amplitudes().unwrap();
            let power = amplitudes.to_power();
            assert_relative_eq!(
                power.transmittance,
                amplitudes.t.norm_sqr(),
                epsilon = 1.0e-9
            );
        }
    }

    #[test]
    fn quarter_wave_slab_matches_closed_form() {
        // Single εᵣ = 4 slab in vacuum at quarter-wave thickness:
        // R = ((1 − n²)/(1 + n²))² = (3/5)² = 0.36 for n = 2.
        let omega = angular_frequency(1.0e9);
        let material = RelativeMaterial::dielectric(4.0);
        let quarter_wave = std::f64::consts::FRAC_PI_2 / material.wavenumber(omega);
        let mut crystal =
            PhotonicCrystal1d::new(1, quarter_wave, 0.05, material, material).unwrap();
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        crystal.set_frequency(omega);
        let power = crystal.power().unwrap();
        assert_relative_eq!(power.reflectance, 0.36, epsilon = 1.0e-12);

        // At half-wave thickness the same slab is transparent.
        let mut crystal =
            PhotonicCrystal1d::new(1, 2.0 * quarter_wave, 0.05, material, material).unwrap();
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        crystal.set_frequency(omega);
        let power = crystal.power().unwrap();
        assert_relative_eq!(power.reflectance, 0.0, epsilon = 1.0e-12);
    }

    #[test]
    fn parity_bookkeeping_for_even_and_odd_stacks() {
        let m1 = RelativeMaterial::dielectric(2.0);
        let m2 = RelativeMaterial::dielectric(4.0);
        let omega = angular_frequency(3.0e9);
        for (count, expected_last) in [(1, LayerKind::One), (2, LayerKind::Two)] {
            let mut crystal = PhotonicCrystal1d::new(count, 0.15, 0.05, m1, m2).unwrap();
            assert_eq!(crystal.last_layer(), expected_last);
            crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
            crystal.set_frequency(omega);
            let power = crystal.power().unwrap();
            assert_relative_eq!(
                power.reflectance + power.transmittance,
                1.0,
                epsilon = 1.0e-12
            );
        }
        // Adjacent even/odd counts differ in closing parity but both cascade.
        for count in 29..=30 {
            let mut crystal = PhotonicCrystal1d::new(count, 0.15, 0.05, m1, m2).unwrap();
            crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
            crystal.set_frequency(omega);
            assert!(crystal.power().is_ok());
        }
    }

    #[test]
    fn repeated_setup_is_bit_identical() {
        let mut crystal = reference_crystal();
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        crystal.set_frequency(angular_frequency(3.38e9));
        let first = crystal.amplitudes().unwrap();

        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        crystal.set_frequency(angular_frequency(3.38e9));
        let second = crystal.amplitudes().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn show_parameters_handles_all_states() {
        let mut crystal = reference_crystal();
        crystal.show_parameters();
        crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
        crystal.set_frequency(angular_frequency(3.1e9));
        crystal.show_parameters();
    }

    #[test]
    fn accessors_report_construction_state() {
        let crystal = reference_crystal();
        assert_eq!(crystal.layer_count(), 30);
        assert_eq!(crystal.thickness_m(LayerKind::One), 0.15);
        assert_eq!(crystal.thickness_m(LayerKind::Two), 0.05);
        assert_eq!(crystal.material(LayerKind::Two).epsilon_r, 4.0);
        assert!(crystal.environment().is_none());
        assert!(crystal.angular_frequency().is_none());
    }
}
