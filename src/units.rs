//! Strongly typed unit helpers and quantity abstractions.

use std::fmt;
use std::marker::PhantomData;

/// Marker trait for physical units carried by [`Quantity`].
pub trait Unit {
    /// Unit symbol appended when formatting (e.g. `"Ω"`).
    const SYMBOL: &'static str;
}

/// Ohm (Ω), the SI unit of impedance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ohm;

impl Unit for Ohm {
    const SYMBOL: &'static str = "Ω";
}

/// A scalar value tagged with its physical unit at the type level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<T, U: Unit> {
    value: T,
    _unit: PhantomData<U>,
}

impl<T: Copy, U: Unit> Quantity<T, U> {
    /// Wraps a raw value in its unit.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _unit: PhantomData,
        }
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }
}

impl<T: fmt::Display, U: Unit> fmt::Display for Quantity<T, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, U::SYMBOL)
    }
}

/// Impedance in ohms.
pub type Impedance<T> = Quantity<T, Ohm>;
