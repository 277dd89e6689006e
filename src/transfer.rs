//! Transfer and propagation matrix primitives for the layered-stack cascade.

use std::ops::Index;

use crate::math::{phasor, CScalar as C, Scalar};

/// 2×2 complex matrix relating forward/backward wave amplitudes.
///
/// Row-major elements named like an ABCD chain matrix:
/// `[[a, b], [c, d]]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveMatrix {
    /// Top-left element.
    pub a: C,
    /// Top-right element.
    pub b: C,
    /// Bottom-left element.
    pub c: C,
    /// Bottom-right element.
    pub d: C,
}

impl WaveMatrix {
    /// Identity matrix: `[[1, 0], [0, 1]]`.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: C::new(1.0, 0.0),
            b: C::new(0.0, 0.0),
            c: C::new(0.0, 0.0),
            d: C::new(1.0, 0.0),
        }
    }

    /// Constructs a matrix from explicit elements.
    #[must_use]
    pub const fn from_elements(a: C, b: C, c: C, d: C) -> Self {
        Self { a, b, c, d }
    }

    /// Impedance-matching matrix for an interface with impedance ratio `delta`:
    /// `0.5 · [[1+δ, 1−δ], [1−δ, 1+δ]]`.
    #[must_use]
    pub fn interface(delta: Scalar) -> Self {
        let p = C::new(0.5 * (1.0 + delta), 0.0);
        let m = C::new(0.5 * (1.0 - delta), 0.0);
        Self::from_elements(p, m, m, p)
    }

    /// Diagonal phase-accumulation matrix `diag(e^{+jφ}, e^{-jφ})` for a
    /// single traversal of a layer with phase thickness `phase = k·d`.
    #[must_use]
    pub fn propagation(phase: Scalar) -> Self {
        let zero = C::new(0.0, 0.0);
        Self::from_elements(phasor(phase), zero, zero, phasor(-phase))
    }

    /// Cascades this matrix with `rhs` (i.e., self followed by rhs).
    #[must_use]
    pub fn cascade(&self, rhs: &Self) -> Self {
        // Matrix multiplication [[a b],[c d]] * [[a' b'],[c' d']]
        Self {
            a: self.a * rhs.a + self.b * rhs.c,
            b: self.a * rhs.b + self.b * rhs.d,
            c: self.c * rhs.a + self.d * rhs.c,
            d: self.c * rhs.b + self.d * rhs.d,
        }
    }

    /// Determinant `ad - bc`.
    #[must_use]
    pub fn determinant(&self) -> C {
        self.a * self.d - self.b * self.c
    }
}

/// The four interface crossings that occur in a two-material stack.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interface {
    /// Source-side environment into the first (type-1) layer.
    EnvToFirst = 0,
    /// Type-1 layer into a type-2 layer.
    OneToTwo = 1,
    /// Type-2 layer into a type-1 layer.
    TwoToOne = 2,
    /// Last layer into the far-side environment.
    LastToEnv = 3,
}

/// The two layer types of the alternating stack.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// Material-1 layer.
    One = 0,
    /// Material-2 layer.
    Two = 1,
}

impl LayerKind {
    /// The other layer type.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Interface crossed when the backward walk leaves a layer of this type.
    #[must_use]
    pub const fn crossing(self) -> Interface {
        match self {
            Self::One => Interface::TwoToOne,
            Self::Two => Interface::OneToTwo,
        }
    }
}

/// Fixed table of the four interface matrices, rebuilt in full whenever the
/// environment changes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferTable([WaveMatrix; 4]);

impl TransferTable {
    /// Builds all four interface matrices from the three wave impedances.
    ///
    /// The first three ratios follow the source-over-destination convention
    /// (`env→1` uses Z₁/Zₑ, `1→2` uses Z₂/Z₁, `2→1` uses Z₁/Z₂); the closing
    /// `last→env` matrix uses the inverted ratio Zₑ/Z_last. The asymmetry is
    /// load-bearing: energy conservation of the cascade depends on it.
    #[must_use]
    pub fn build(z1: Scalar, z2: Scalar, env_z: Scalar, last: LayerKind) -> Self {
        let z_last = match last {
            LayerKind::One => z1,
            LayerKind::Two => z2,
        };
        Self([
            WaveMatrix::interface(z1 / env_z),
            WaveMatrix::interface(z2 / z1),
            WaveMatrix::interface(z1 / z2),
            WaveMatrix::interface(env_z / z_last),
        ])
    }
}

impl Index<Interface> for TransferTable {
    type Output = WaveMatrix;

    fn index(&self, interface: Interface) -> &WaveMatrix {
        &self.0[interface as usize]
    }
}

/// Fixed table of the two per-layer propagation matrices, rebuilt in full
/// whenever the angular frequency changes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropagationTable([WaveMatrix; 2]);

impl PropagationTable {
    /// Builds both propagation matrices from the layers' phase thicknesses
    /// `k·d`.
    #[must_use]
    pub fn build(phase1: Scalar, phase2: Scalar) -> Self {
        Self([
            WaveMatrix::propagation(phase1),
            WaveMatrix::propagation(phase2),
        ])
    }
}

impl Index<LayerKind> for PropagationTable {
    type Output = WaveMatrix;

    fn index(&self, kind: LayerKind) -> &WaveMatrix {
        &self.0[kind as usize]
    }
}
