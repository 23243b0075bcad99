//! Numeric sign guards and range checks.

use std::fmt::Display;

use crate::error::{Error, Result};

mod private {
    pub trait Sealed {}
}

/// Numeric primitives accepted by the sign guards.
///
/// Implemented for the signed integer and floating-point types; unsigned
/// integers are excluded because the type system already proves them
/// non-negative.
pub trait Numeric: private::Sealed + Copy + PartialOrd {
    /// The zero of the type, the boundary both sign guards test against.
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Numeric for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_numeric!(
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    f32 => 0.0,
    f64 => 0.0,
);

/// Checks that a numeric argument is zero or greater. Returns the input.
pub fn not_negative<T: Numeric>(value: T, name: &str) -> Result<T> {
    if value < T::ZERO {
        return Err(Error::new(format!("argument '{name}' must not be negative")));
    }
    Ok(value)
}

/// Checks that a numeric argument is strictly greater than zero.
pub fn not_negative_or_zero<T: Numeric>(value: T, name: &str) -> Result<T> {
    if value <= T::ZERO {
        return Err(Error::new(format!(
            "argument '{name}' must not be negative or zero"
        )));
    }
    Ok(value)
}

/// Returns whether `low < value < high`.
///
/// None of the range predicates validate `low <= high`; an inverted range
/// is simply never satisfied.
pub fn is_in_range_exclusive<T: PartialOrd>(low: T, high: T, value: T) -> bool {
    value > low && value < high
}

/// Returns whether `low <= value <= high`.
pub fn is_in_range_inclusive<T: PartialOrd>(low: T, high: T, value: T) -> bool {
    value >= low && value <= high
}

/// Returns whether `low < value <= high`.
pub fn is_in_range_excluding_low<T: PartialOrd>(low: T, high: T, value: T) -> bool {
    value > low && value <= high
}

/// Returns whether `low <= value < high`.
pub fn is_in_range_excluding_high<T: PartialOrd>(low: T, high: T, value: T) -> bool {
    value >= low && value < high
}

/// Checks that `low <= value < high`. Returns the value.
///
/// `low <= high` is deliberately not validated; with an inverted range the
/// guard is unsatisfiable.
pub fn in_range_excluding_high<T>(low: T, high: T, value: T, name: &str) -> Result<T>
where
    T: PartialOrd + Display,
{
    if value < low || value >= high {
        return Err(Error::new(format!(
            "argument '{name}' must be greater than or equal to {low} and less than {high}"
        )));
    }
    Ok(value)
}
