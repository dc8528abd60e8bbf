#[cfg(feature = "complex")]
use num_complex::Complex;

use super::Backend;
use crate::traits::LinalgScalar;
use crate::types::{Layout, Op, Uplo};

/// Pure-Rust backend working directly on flat slices.
///
/// Follows the CBLAS argument contract exactly, which makes it a drop-in
/// stand-in for a native library in tests and on targets without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

/// Rank-k update of the `uplo` triangle of flat `C`.
///
/// `hermitian` selects `op(A)·op(A)ᴴ` with a real diagonal; otherwise
/// `op(A)·op(A)ᵀ`.
#[allow(clippy::too_many_arguments)]
fn rank_k<T: LinalgScalar>(
    layout: Layout,
    uplo: Uplo,
    op: Op,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    beta: T,
    c: &mut [T],
    ldc: usize,
    hermitian: bool,
) {
    let zero = T::zero();
    let rows = |j: usize| match uplo {
        Uplo::Lower => (j, n),
        _ => (0, j + 1),
    };

    // Scale C by beta
    for j in 0..n {
        let (lo, hi) = rows(j);
        for i in lo..hi {
            let idx = layout.index(i, j, ldc);
            let v = if beta == zero { zero } else { c[idx] * beta };
            c[idx] = if hermitian && i == j { T::from_real(v.re()) } else { v };
        }
    }

    if alpha == zero || k == 0 {
        return;
    }

    // Element (i, l) of op(A), before any conjugation.
    let at = |i: usize, l: usize| -> T {
        if op == Op::NoTrans {
            a[layout.index(i, l, lda)]
        } else {
            a[layout.index(l, i, lda)]
        }
    };
    let conj_left = hermitian && op != Op::NoTrans;
    let conj_right = hermitian && op == Op::NoTrans;

    for j in 0..n {
        let (lo, hi) = rows(j);
        for i in lo..hi {
            let mut dot = zero;
            for l in 0..k {
                let x = if conj_left { at(i, l).conj() } else { at(i, l) };
                let y = if conj_right { at(j, l).conj() } else { at(j, l) };
                dot = dot + x * y;
            }
            let idx = layout.index(i, j, ldc);
            c[idx] = if hermitian && i == j {
                T::from_real(c[idx].re() + (alpha * dot).re())
            } else {
                c[idx] + alpha * dot
            };
        }
    }
}

impl Backend for Portable {
    fn name(&self) -> &'static str {
        "portable"
    }

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
    ) {
        rank_k(layout, uplo, op, n, k, alpha, a, lda, beta, c, ldc, false);
    }

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
    ) {
        rank_k(layout, uplo, op, n, k, alpha, a, lda, beta, c, ldc, false);
    }

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
    ) {
        let (alpha, beta) = (Complex::from(alpha), Complex::from(beta));
        rank_k(layout, uplo, op, n, k, alpha, a, lda, beta, c, ldc, true);
    }

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
    ) {
        let (alpha, beta) = (Complex::from(alpha), Complex::from(beta));
        rank_k(layout, uplo, op, n, k, alpha, a, lda, beta, c, ldc, true);
    }
}
