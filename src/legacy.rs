//! Flat-slice entry points in the classic BLAS/LAPACK calling convention.
//!
//! Each routine takes raw dimensions, leading dimensions and increments,
//! validates them, wraps the slices in views and calls the generic kernel.
//! Invalid arguments produce [`Error::InvalidArgument`] instead of a panic.
//!
//! ```
//! use genla::{Layout, Op, Uplo};
//! use genla::legacy;
//!
//! // C (2x2, ld 2) := A·Aᵀ with A = [1; 2] stored with ld 3.
//! let a = [1.0_f64, 2.0, 99.0];
//! let mut c = [0.0_f64; 4];
//! legacy::herk(Layout::ColMajor, Uplo::Lower, Op::NoTrans, 2, 1, 1.0, &a, 3, 0.0, &mut c, 2).unwrap();
//! assert_eq!(c, [1.0, 2.0, 0.0, 4.0]);
//! ```

use crate::error::Error;
use crate::traits::LinalgScalar;
use crate::types::{Layout, Norm, Op, Uplo};
use crate::view::{MatrixView, MatrixViewMut, VectorView, VectorViewMut};

#[inline]
fn dense_len(layout: Layout, m: usize, n: usize, ld: usize) -> usize {
    if m == 0 || n == 0 {
        0
    } else {
        layout.index(m - 1, n - 1, ld) + 1
    }
}

#[inline]
fn strided_len(n: usize, inc: isize) -> usize {
    if n == 0 {
        0
    } else {
        (n - 1) * inc.unsigned_abs() + 1
    }
}

// ── View constructors ───────────────────────────────────────────────

/// `m x n` column-major matrix with leading dimension `lda`.
pub fn colmajor_matrix<T>(a: &[T], m: usize, n: usize, lda: usize) -> Result<MatrixView<'_, T>, Error> {
    error_if!(lda < m.max(1), "colmajor_matrix");
    error_if!(a.len() < dense_len(Layout::ColMajor, m, n, lda), "colmajor_matrix");
    Ok(MatrixView::new(a, m, n, Layout::ColMajor, lda))
}

/// Mutable counterpart of [`colmajor_matrix`].
pub fn colmajor_matrix_mut<T>(
    a: &mut [T],
    m: usize,
    n: usize,
    lda: usize,
) -> Result<MatrixViewMut<'_, T>, Error> {
    error_if!(lda < m.max(1), "colmajor_matrix");
    error_if!(a.len() < dense_len(Layout::ColMajor, m, n, lda), "colmajor_matrix");
    Ok(MatrixViewMut::new(a, m, n, Layout::ColMajor, lda))
}

/// `m x n` row-major matrix with leading dimension `lda`.
pub fn rowmajor_matrix<T>(a: &[T], m: usize, n: usize, lda: usize) -> Result<MatrixView<'_, T>, Error> {
    error_if!(lda < n.max(1), "rowmajor_matrix");
    error_if!(a.len() < dense_len(Layout::RowMajor, m, n, lda), "rowmajor_matrix");
    Ok(MatrixView::new(a, m, n, Layout::RowMajor, lda))
}

/// Mutable counterpart of [`rowmajor_matrix`].
pub fn rowmajor_matrix_mut<T>(
    a: &mut [T],
    m: usize,
    n: usize,
    lda: usize,
) -> Result<MatrixViewMut<'_, T>, Error> {
    error_if!(lda < n.max(1), "rowmajor_matrix");
    error_if!(a.len() < dense_len(Layout::RowMajor, m, n, lda), "rowmajor_matrix");
    Ok(MatrixViewMut::new(a, m, n, Layout::RowMajor, lda))
}

fn matrix<T>(layout: Layout, a: &[T], m: usize, n: usize, lda: usize) -> Result<MatrixView<'_, T>, Error> {
    match layout {
        Layout::ColMajor => colmajor_matrix(a, m, n, lda),
        Layout::RowMajor => rowmajor_matrix(a, m, n, lda),
    }
}

fn matrix_mut<T>(
    layout: Layout,
    a: &mut [T],
    m: usize,
    n: usize,
    lda: usize,
) -> Result<MatrixViewMut<'_, T>, Error> {
    match layout {
        Layout::ColMajor => colmajor_matrix_mut(a, m, n, lda),
        Layout::RowMajor => rowmajor_matrix_mut(a, m, n, lda),
    }
}

/// `n` elements of `x` spaced `inc` apart.
///
/// A negative `inc` walks backwards from `x[(n - 1) * |inc|]`, as in BLAS.
/// `inc == 0` is rejected.
pub fn vector<T>(x: &[T], n: usize, inc: isize) -> Result<VectorView<'_, T>, Error> {
    error_if!(inc == 0, "vector");
    error_if!(x.len() < strided_len(n, inc), "vector");
    VectorView::new(x, n, inc)
}

/// Mutable counterpart of [`vector`].
pub fn vector_mut<T>(x: &mut [T], n: usize, inc: isize) -> Result<VectorViewMut<'_, T>, Error> {
    error_if!(inc == 0, "vector");
    error_if!(x.len() < strided_len(n, inc), "vector");
    VectorViewMut::new(x, n, inc)
}

// ── Kernels ─────────────────────────────────────────────────────────

/// [`blas::herk`](crate::blas::herk) on flat storage.
///
/// `A` is `n x k` (`NoTrans`) or `k x n` (`ConjTrans`) in `layout` with
/// leading dimension `lda`; `C` is `n x n` with leading dimension `ldc`.
#[allow(clippy::too_many_arguments)]
pub fn herk<T: LinalgScalar>(
    layout: Layout,
    uplo: Uplo,
    op: Op,
    n: usize,
    k: usize,
    alpha: T::Real,
    a: &[T],
    lda: usize,
    beta: T::Real,
    c: &mut [T],
    ldc: usize,
) -> Result<(), Error> {
    error_if!(op == Op::Trans, "herk");
    let (am, an) = if op == Op::NoTrans { (n, k) } else { (k, n) };
    let a = matrix(layout, a, am, an, lda)?;
    let mut c = matrix_mut(layout, c, n, n, ldc)?;
    crate::blas::herk(uplo, op, alpha, &a, beta, &mut c)
}

/// [`lapack::lanhe`](crate::lapack::lanhe) on flat column-major storage.
///
/// `work` is only read for the one and infinity norms and may be empty
/// otherwise.
pub fn lanhe<T: LinalgScalar>(
    norm: Norm,
    uplo: Uplo,
    n: usize,
    a: &[T],
    lda: usize,
    work: &mut [T::Real],
) -> Result<T::Real, Error> {
    let a = colmajor_matrix(a, n, n, lda)?;
    match norm {
        Norm::One | Norm::Inf => crate::lapack::lanhe_work(norm, uplo, &a, work),
        _ => crate::lapack::lanhe(norm, uplo, &a),
    }
}

/// [`blas::swap`](crate::blas::swap) on flat storage with BLAS increments.
pub fn swap<T>(n: usize, x: &mut [T], incx: isize, y: &mut [T], incy: isize) -> Result<(), Error> {
    let mut x = vector_mut(x, n, incx)?;
    let mut y = vector_mut(y, n, incy)?;
    crate::blas::swap(&mut x, &mut y)
}
