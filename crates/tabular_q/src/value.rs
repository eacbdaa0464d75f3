//! Numeric types that can be stored in a Q-table.

use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, Sub};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point type usable as a Q-value.
///
/// Implemented for `f32` and `f64`. Hyperparameters are kept as `f64` in
/// [`LearnerConfig`](crate::LearnerConfig) and converted with [`QValue::from_f64`].
pub trait QValue:
    sealed::Sealed
    + Copy
    + PartialOrd
    + Debug
    + Display
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Send
    + Sync
    + 'static
{
    /// The additive identity, used to initialize every table cell.
    fn zero() -> Self;

    /// Converts a hyperparameter into this type.
    fn from_f64(value: f64) -> Self;

    /// Widens this value to `f64`.
    fn to_f64(self) -> f64;
}

impl QValue for f32 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl QValue for f64 {
    fn zero() -> Self {
        0.0
    }

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}
