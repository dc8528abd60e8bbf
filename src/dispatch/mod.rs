//! Native backend dispatch.
//!
//! ## Dispatch strategy
//!
//! TypeId-based dispatch at monomorphization time: the rank-k kernels ask
//! [`herk_native`] / [`syrk_native`] whether a call can be forwarded to a
//! [`Backend`]. A call is eligible when
//!
//! - the element type is one the backend implements (`f32`, `f64`,
//!   `Complex<f32>`, `Complex<f64>`; complex only for `herk`),
//! - both operands expose flat storage through `as_dense`,
//! - both share the same [`Layout`],
//! - `n`, `k` and both leading dimensions are within
//!   [`Backend::max_dim`], and
//! - the triangle is `Upper` or `Lower` (a BLAS never fills both).
//!
//! Ineligible calls return `false` and the caller runs its generic
//! algorithm. For every other type the check folds to a constant and the
//! native branch is dead-code-eliminated.
//!
//! ## Backends
//!
//! | Backend | Availability | Implementation |
//! |---------|--------------|----------------|
//! | [`Portable`] | always | pure-Rust kernels over flat slices |
//! | `Cblas` | feature `cblas` | `extern "C"` calls into a system CBLAS |
//!
//! [`default_backend`] returns the backend [`herk`](crate::blas::herk) and
//! [`syrk`](crate::blas::syrk) forward to, if any.

#[cfg(feature = "cblas")]
mod cblas;
mod portable;

#[cfg(feature = "cblas")]
pub use cblas::Cblas;
pub use portable::Portable;

use core::any::TypeId;

#[cfg(feature = "complex")]
use num_complex::Complex;

use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};
use crate::types::{Layout, Op, Uplo};
use crate::view::{Dense, DenseMut};

/// A dense BLAS provider for the rank-k updates.
///
/// Arguments follow the CBLAS convention: `C` is `n x n`, `op(A)` is
/// `n x k`, and `lda` / `ldc` are leading dimensions in `layout`. Only the
/// `uplo` triangle of `C` is referenced; `uplo` is never
/// [`Uplo::General`]. Arguments are validated before a backend is called.
///
/// With `beta == 0`, `C` is overwritten without being read.
#[allow(clippy::too_many_arguments)]
pub trait Backend {
    /// Short identifier used in trace events.
    fn name(&self) -> &'static str;

    /// Largest dimension or leading dimension the backend accepts.
    ///
    /// Calls exceeding it are ineligible and run the generic kernels.
    fn max_dim(&self) -> usize {
        usize::MAX
    }

    /// `C := alpha * op(A) * op(A)ᵀ + beta * C`, single precision.
    fn ssyrk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f32,
        a: &[f32],
        lda: usize,
        beta: f32,
        c: &mut [f32],
        ldc: usize,
    );

    /// `C := alpha * op(A) * op(A)ᵀ + beta * C`, double precision.
    fn dsyrk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    );

    /// `C := alpha * op(A) * op(A)ᴴ + beta * C`, single-precision complex.
    #[cfg(feature = "complex")]
    fn cherk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f32,
        a: &[Complex<f32>],
        lda: usize,
        beta: f32,
        c: &mut [Complex<f32>],
        ldc: usize,
    );

    /// `C := alpha * op(A) * op(A)ᴴ + beta * C`, double-precision complex.
    #[cfg(feature = "complex")]
    fn zherk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[Complex<f64>],
        lda: usize,
        beta: f64,
        c: &mut [Complex<f64>],
        ldc: usize,
    );
}

/// The backend the rank-k kernels forward eligible calls to.
///
/// `Cblas` with the `cblas` feature, otherwise `None` (always generic).
#[inline]
pub fn default_backend() -> Option<&'static dyn Backend> {
    #[cfg(feature = "cblas")]
    {
        Some(&Cblas)
    }
    #[cfg(not(feature = "cblas"))]
    {
        None
    }
}

// ── Eligibility ─────────────────────────────────────────────────────

/// Flat descriptions of `A` and `C` if both have one, in the same layout,
/// with every size the backend sees at most `max_dim`.
#[inline]
fn flat_operands<'a, 'c, T, A, C>(
    uplo: Uplo,
    k: usize,
    max_dim: usize,
    a: &'a A,
    c: &'c mut C,
) -> Option<(Dense<'a, T>, DenseMut<'c, T>)>
where
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    if uplo == Uplo::General {
        return None;
    }
    let da = a.as_dense()?;
    let dc = c.as_dense_mut()?;
    if da.layout != dc.layout {
        return None;
    }
    if [dc.nrows, k, da.ld, dc.ld].iter().any(|&d| d > max_dim) {
        return None;
    }
    Some((da, dc))
}

#[inline(always)]
fn is<T: 'static, U: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

// Safety (all three casts): callers first check `is::<T, U>()`, so `T`
// and `U` are the same type and the reinterpretation is the identity.

#[inline(always)]
unsafe fn cast_slice<T, U>(s: &[T]) -> &[U] {
    &*(s as *const [T] as *const [U])
}

#[inline(always)]
unsafe fn cast_slice_mut<T, U>(s: &mut [T]) -> &mut [U] {
    &mut *(s as *mut [T] as *mut [U])
}

#[inline(always)]
unsafe fn cast<T: Copy, U: Copy>(x: T) -> U {
    *(&x as *const T as *const U)
}

/// Forward `C := alpha * op(A) * op(A)ᴴ + beta * C` to `backend` if eligible.
///
/// `op` is `NoTrans` or `ConjTrans` and the shapes are already validated.
/// Returns `false`, leaving `C` untouched, when the call is not eligible.
pub fn herk_native<T, A, C, B>(
    backend: &B,
    uplo: Uplo,
    op: Op,
    alpha: T::Real,
    a: &A,
    beta: T::Real,
    c: &mut C,
) -> bool
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
    B: Backend + ?Sized,
{
    let k = if op == Op::NoTrans { a.ncols() } else { a.nrows() };
    let Some((da, dc)) = flat_operands(uplo, k, backend.max_dim(), a, c) else {
        return false;
    };
    let (layout, n, lda, ldc) = (da.layout, dc.nrows, da.ld, dc.ld);

    unsafe {
        if is::<T, f64>() && is::<T::Real, f64>() {
            let op = if op == Op::NoTrans { Op::NoTrans } else { Op::Trans };
            backend.dsyrk(
                layout,
                uplo,
                op,
                n,
                k,
                cast(alpha),
                cast_slice(da.data),
                lda,
                cast(beta),
                cast_slice_mut(dc.data),
                ldc,
            );
            return true;
        }
        if is::<T, f32>() && is::<T::Real, f32>() {
            let op = if op == Op::NoTrans { Op::NoTrans } else { Op::Trans };
            backend.ssyrk(
                layout,
                uplo,
                op,
                n,
                k,
                cast(alpha),
                cast_slice(da.data),
                lda,
                cast(beta),
                cast_slice_mut(dc.data),
                ldc,
            );
            return true;
        }
        #[cfg(feature = "complex")]
        {
            if is::<T, Complex<f64>>() && is::<T::Real, f64>() {
                backend.zherk(
                    layout,
                    uplo,
                    op,
                    n,
                    k,
                    cast(alpha),
                    cast_slice(da.data),
                    lda,
                    cast(beta),
                    cast_slice_mut(dc.data),
                    ldc,
                );
                return true;
            }
            if is::<T, Complex<f32>>() && is::<T::Real, f32>() {
                backend.cherk(
                    layout,
                    uplo,
                    op,
                    n,
                    k,
                    cast(alpha),
                    cast_slice(da.data),
                    lda,
                    cast(beta),
                    cast_slice_mut(dc.data),
                    ldc,
                );
                return true;
            }
        }
    }
    false
}

/// Forward `C := alpha * op(A) * op(A)ᵀ + beta * C` to `backend` if eligible.
///
/// Real element types only; `op` is `NoTrans` or `Trans`.
pub fn syrk_native<T, A, C, B>(
    backend: &B,
    uplo: Uplo,
    op: Op,
    alpha: T,
    a: &A,
    beta: T,
    c: &mut C,
) -> bool
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
    B: Backend + ?Sized,
{
    if !(is::<T, f64>() || is::<T, f32>()) {
        return false;
    }
    let k = if op == Op::NoTrans { a.ncols() } else { a.nrows() };
    let Some((da, dc)) = flat_operands(uplo, k, backend.max_dim(), a, c) else {
        return false;
    };
    let (layout, n, lda, ldc) = (da.layout, dc.nrows, da.ld, dc.ld);

    unsafe {
        if is::<T, f64>() {
            backend.dsyrk(
                layout,
                uplo,
                op,
                n,
                k,
                cast(alpha),
                cast_slice(da.data),
                lda,
                cast(beta),
                cast_slice_mut(dc.data),
                ldc,
            );
        } else {
            backend.ssyrk(
                layout,
                uplo,
                op,
                n,
                k,
                cast(alpha),
                cast_slice(da.data),
                lda,
                cast(beta),
                cast_slice_mut(dc.data),
                ldc,
            );
        }
    }
    true
}
