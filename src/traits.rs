use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

#[cfg(feature = "complex")]
use num_complex::Complex;

use crate::view::{Dense, DenseMut};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Floating-point model parameters of a real type.
///
/// Mirrors the C `<float.h>` constants: `RADIX`, `DIGITS` (mantissa digits
/// in base `RADIX`), and the exponent range `[MIN_EXP, MAX_EXP]` such that
/// `RADIX^(MIN_EXP - 1)` is the smallest normal number.
pub trait MachineParams {
    const RADIX: i32;
    const DIGITS: i32;
    const MIN_EXP: i32;
    const MAX_EXP: i32;
}

impl MachineParams for f32 {
    const RADIX: i32 = f32::RADIX as i32;
    const DIGITS: i32 = f32::MANTISSA_DIGITS as i32;
    const MIN_EXP: i32 = f32::MIN_EXP;
    const MAX_EXP: i32 = f32::MAX_EXP;
}

impl MachineParams for f64 {
    const RADIX: i32 = f64::RADIX as i32;
    const DIGITS: i32 = f64::MANTISSA_DIGITS as i32;
    const MIN_EXP: i32 = f64::MIN_EXP;
    const MAX_EXP: i32 = f64::MAX_EXP;
}

/// Trait for real floating-point elements.
///
/// Real parts, magnitudes, scaling factors and norms all live in this type.
/// Implies `LinalgScalar<Real = Self>` since real floats are their own real type.
pub trait FloatScalar: Scalar + Float + LinalgScalar<Real = Self> + MachineParams {}

impl<T: Scalar + Float + LinalgScalar<Real = T> + MachineParams> FloatScalar for T {}

/// Trait for matrix elements the kernels operate on.
///
/// Covers real floats (`f32`, `f64`) and complex numbers (`Complex<f32>`,
/// `Complex<f64>`). Kernels are written once against this trait; for real
/// types `conj` is the identity and `im` is zero.
///
/// The `'static` bound lets the dispatch gate compare `TypeId`s.
pub trait LinalgScalar: Scalar + 'static {
    /// The real component type (`Self` for reals, `T` for `Complex<T>`).
    type Real: FloatScalar;

    /// 2-norm absolute value: `sqrt(re² + im²)` without intermediate
    /// overflow. Returns NaN if any component is NaN.
    fn modulus(self) -> Self::Real;

    /// Complex conjugate (identity for reals).
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Imaginary part (zero for reals).
    fn im(self) -> Self::Real;

    /// True if any component is NaN.
    fn has_nan(self) -> bool;

    /// Promote a real value into `Self`.
    fn from_real(r: Self::Real) -> Self;
}

// Real floats: trivial delegation.
macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                type Real = $t;

                #[inline] fn modulus(self) -> $t { Float::abs(self) }
                #[inline] fn conj(self) -> $t { self }
                #[inline] fn re(self) -> $t { self }
                #[inline] fn im(self) -> $t { 0.0 }
                #[inline] fn has_nan(self) -> bool { Float::is_nan(self) }
                #[inline] fn from_real(r: $t) -> $t { r }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

#[cfg(feature = "complex")]
impl<T: FloatScalar> LinalgScalar for Complex<T> {
    type Real = T;

    #[inline]
    fn modulus(self) -> T {
        // hypot(inf, NaN) is inf; NaN must win here.
        if self.has_nan() {
            return T::nan();
        }
        self.norm()
    }

    #[inline]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }

    #[inline]
    fn re(self) -> T {
        self.re
    }

    #[inline]
    fn im(self) -> T {
        self.im
    }

    #[inline]
    fn has_nan(self) -> bool {
        Float::is_nan(self.re) || Float::is_nan(self.im)
    }

    #[inline]
    fn from_real(r: T) -> Self {
        Complex::new(r, T::zero())
    }
}

/// Read-only access to a matrix-like type.
///
/// This is the capability set every kernel consumes: shape queries and
/// element access. Types backed by a flat column- or row-major buffer also
/// report it through [`as_dense`](MatrixRef::as_dense), which makes them
/// eligible for a native backend.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Flat storage description, if the matrix has one.
    #[inline]
    fn as_dense(&self) -> Option<Dense<'_, T>> {
        None
    }
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling in-place
/// kernels (rank-k updates, Cholesky, triangular solves) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Mutable flat storage description, if the matrix has one.
    #[inline]
    fn as_dense_mut(&mut self) -> Option<DenseMut<'_, T>> {
        None
    }
}

/// Read-only access to a vector-like type.
pub trait VectorRef<T> {
    fn len(&self) -> usize;
    fn get(&self, i: usize) -> &T;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Mutable access to a vector-like type.
pub trait VectorMut<T>: VectorRef<T> {
    fn get_mut(&mut self, i: usize) -> &mut T;
}

impl<T> VectorRef<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self[i]
    }
}

impl<T> VectorMut<T> for [T] {
    #[inline]
    fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self[i]
    }
}

impl<T, const N: usize> VectorRef<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self[i]
    }
}

impl<T, const N: usize> VectorMut<T> for [T; N] {
    #[inline]
    fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self[i]
    }
}

#[cfg(feature = "alloc")]
impl<T> VectorRef<T> for alloc::vec::Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        alloc::vec::Vec::len(self)
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self[i]
    }
}

#[cfg(feature = "alloc")]
impl<T> VectorMut<T> for alloc::vec::Vec<T> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_parts() {
        assert_eq!(LinalgScalar::modulus(-3.0_f64), 3.0);
        assert_eq!(LinalgScalar::im(2.5_f32), 0.0);
        assert!(LinalgScalar::has_nan(f64::NAN));
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_modulus_propagates_nan() {
        let z = Complex::new(f64::INFINITY, f64::NAN);
        assert!(z.modulus().is_nan());
        let w = Complex::new(3.0_f64, -4.0);
        assert_eq!(w.modulus(), 5.0);
        assert_eq!(LinalgScalar::conj(w), Complex::new(3.0, 4.0));
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_modulus_no_overflow() {
        let z = Complex::new(1e300_f64, 1e300);
        assert!(z.modulus().is_finite());
    }

    #[test]
    fn vector_ref_on_slices() {
        let v = [1.0_f64, 2.0, 3.0];
        fn sum<V: VectorRef<f64> + ?Sized>(v: &V) -> f64 {
            (0..v.len()).map(|i| *v.get(i)).sum()
        }
        assert_eq!(sum(&v), 6.0);
        assert_eq!(sum(&v[1..]), 5.0);
    }
}
