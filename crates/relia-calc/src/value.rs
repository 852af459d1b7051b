//! The minimal arithmetic inclusion-exclusion needs.

use std::ops::{Add, Mul, Neg};

/// A value inclusion-exclusion can sum, multiply and negate.
pub trait ProbabilityValue:
    Clone + Add<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Sum of every value in one pass.
    fn sum_all<I: IntoIterator<Item = Self>>(values: I) -> Self {
        values.into_iter().fold(Self::zero(), |acc, v| acc + v)
    }

    /// Product of every value in one pass.
    fn product_all<I: IntoIterator<Item = Self>>(values: I) -> Self {
        values.into_iter().fold(Self::one(), |acc, v| acc * v)
    }
}

impl ProbabilityValue for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn sum_all<I: IntoIterator<Item = Self>>(values: I) -> Self {
        values.into_iter().sum()
    }

    fn product_all<I: IntoIterator<Item = Self>>(values: I) -> Self {
        values.into_iter().product()
    }
}
