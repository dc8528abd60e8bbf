//! Scaling thresholds for safe sums of squares.
//!
//! Blue's constants as defined in Anderson, "Algorithm 978: Safe Scaling in
//! the Level 1 BLAS" (ACM TOMS 44, 2017). Squares of values in
//! `[blue_min, blue_max]` neither overflow nor lose precision to underflow.
//! Values above `blue_max` are multiplied by `blue_scaling_max` before
//! squaring, values below `blue_min` by `blue_scaling_min`.

use crate::traits::FloatScalar;

#[inline]
fn floor_half(a: i32) -> i32 {
    a.div_euclid(2)
}

#[inline]
fn ceil_half(a: i32) -> i32 {
    -(-a).div_euclid(2)
}

#[inline]
fn radix_pow<T: FloatScalar>(e: i32) -> T {
    // Powers of the radix are exact; powi never rounds here.
    let radix = T::from(T::RADIX).unwrap_or_else(T::one);
    radix.powi(e)
}

/// Lower threshold `tsml`: smallest value whose square does not underflow.
#[inline]
pub fn blue_min<T: FloatScalar>() -> T {
    radix_pow(ceil_half(T::MIN_EXP - 1))
}

/// Upper threshold `tbig`: largest value whose square does not overflow.
#[inline]
pub fn blue_max<T: FloatScalar>() -> T {
    radix_pow(floor_half(T::MAX_EXP - T::DIGITS + 1))
}

/// Scaling factor `ssml` applied to values below [`blue_min`].
#[inline]
pub fn blue_scaling_min<T: FloatScalar>() -> T {
    radix_pow(-floor_half(T::MIN_EXP - T::DIGITS))
}

/// Scaling factor `sbig` applied to values above [`blue_max`].
#[inline]
pub fn blue_scaling_max<T: FloatScalar>() -> T {
    radix_pow(-ceil_half(T::MAX_EXP + T::DIGITS - 1))
}

/// Smallest positive number such that its reciprocal does not overflow.
#[inline]
pub fn safe_min<T: FloatScalar>() -> T {
    let tiny = T::min_positive_value();
    let inv_huge = T::one() / T::max_value();
    if inv_huge > tiny {
        inv_huge
    } else {
        tiny
    }
}

/// Reciprocal of [`safe_min`].
#[inline]
pub fn safe_max<T: FloatScalar>() -> T {
    T::one() / safe_min::<T>()
}
