//! Shared numerical primitives.

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Primary complex scalar type used for phasors and wave amplitudes.
pub type CScalar = num_complex::Complex<Scalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    CScalar::from_polar(1.0, theta)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn phasor_lies_on_unit_circle() {
        let p = phasor(1.234);
        assert_relative_eq!(p.norm(), 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(p.arg(), 1.234, epsilon = 1.0e-12);
    }

    #[test]
    fn opposite_phases_conjugate() {
        let p = phasor(0.7);
        let q = phasor(-0.7);
        assert_relative_eq!(p.re, q.re, epsilon = 1.0e-12);
        assert_relative_eq!(p.im, -q.im, epsilon = 1.0e-12);
    }
}
