use num_traits::Zero;

use crate::dispatch::{default_backend, herk_native, Backend};
use crate::error::Error;
use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};
use crate::types::{Op, Uplo};

/// Hermitian rank-k update.
///
/// - [`Op::NoTrans`]: `C := α·A·Aᴴ + β·C`, `A` is `n x k`.
/// - [`Op::ConjTrans`]: `C := α·Aᴴ·A + β·C`, `A` is `k x n`.
///
/// `α` and `β` are real, so the result is Hermitian. Only the `uplo`
/// triangle of `C` is read and written, and its diagonal comes out real.
/// With [`Uplo::General`] the upper triangle is computed and then mirrored
/// into the lower one by conjugation. With `β = 0`, `C` is overwritten
/// without being read.
///
/// The call is forwarded to the [default backend](crate::dispatch::default_backend)
/// when it is eligible and computed generically otherwise; both paths agree
/// up to rounding.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `op` is [`Op::Trans`], `C` is not square,
/// or `C` does not match the `n` implied by `A` and `op`. `C` is left
/// untouched.
///
/// ```
/// use genla::{DynMatrix, Op, Uplo};
/// use genla::blas::herk;
///
/// let a = DynMatrix::from_rows(2, 1, &[1.0_f64, 1.0]);
/// let mut c = DynMatrix::zeros(2, 2, 0.0);
/// herk(Uplo::Upper, Op::NoTrans, 1.0, &a, 0.0, &mut c).unwrap();
/// assert_eq!((c[(0, 0)], c[(0, 1)], c[(1, 1)]), (1.0, 1.0, 1.0));
/// assert_eq!(c[(1, 0)], 0.0);
/// ```
pub fn herk<T, A, C>(
    uplo: Uplo,
    op: Op,
    alpha: T::Real,
    a: &A,
    beta: T::Real,
    c: &mut C,
) -> Result<(), Error>
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check(op, a, c)?;
    if let Some(backend) = default_backend() {
        if herk_native(backend, uplo, op, alpha, a, beta, c) {
            trace!(routine = "herk", backend = backend.name(), path = "native");
            return Ok(());
        }
    }
    trace!(routine = "herk", path = "generic");
    kernel(uplo, op, alpha, a, beta, c);
    Ok(())
}

/// [`herk`] with an explicit backend for eligible calls.
pub fn herk_with<T, A, C, B>(
    backend: &B,
    uplo: Uplo,
    op: Op,
    alpha: T::Real,
    a: &A,
    beta: T::Real,
    c: &mut C,
) -> Result<(), Error>
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
    B: Backend + ?Sized,
{
    check(op, a, c)?;
    if herk_native(backend, uplo, op, alpha, a, beta, c) {
        trace!(routine = "herk", backend = backend.name(), path = "native");
        return Ok(());
    }
    trace!(routine = "herk", path = "generic");
    kernel(uplo, op, alpha, a, beta, c);
    Ok(())
}

/// [`herk`] that never dispatches.
pub fn herk_generic<T, A, C>(
    uplo: Uplo,
    op: Op,
    alpha: T::Real,
    a: &A,
    beta: T::Real,
    c: &mut C,
) -> Result<(), Error>
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check(op, a, c)?;
    kernel(uplo, op, alpha, a, beta, c);
    Ok(())
}

fn check<T, A, C>(op: Op, a: &A, c: &C) -> Result<(), Error>
where
    A: MatrixRef<T> + ?Sized,
    C: MatrixRef<T> + ?Sized,
{
    error_if!(op == Op::Trans, "herk");
    let n = if op == Op::NoTrans { a.nrows() } else { a.ncols() };
    error_if!(c.nrows() != c.ncols(), "herk");
    error_if!(c.nrows() != n, "herk");
    Ok(())
}

fn kernel<T, A, C>(uplo: Uplo, op: Op, alpha: T::Real, a: &A, beta: T::Real, c: &mut C)
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    let n = c.nrows();
    let k = if op == Op::NoTrans { a.ncols() } else { a.nrows() };
    let rzero = <T::Real as Zero>::zero();
    let alpha_t = T::from_real(alpha);
    let beta_t = T::from_real(beta);
    let lower = uplo == Uplo::Lower;

    // Rows of column j inside the stored triangle, diagonal excluded.
    let off = |j: usize| if lower { (j + 1, n) } else { (0, j) };

    if op == Op::NoTrans {
        for j in 0..n {
            let (lo, hi) = off(j);
            for i in lo..hi {
                let v = c.get_mut(i, j);
                *v = if beta == rzero { T::zero() } else { *v * beta_t };
            }
            let cjj = c.get(j, j).re();
            let mut d = if beta == rzero { rzero } else { beta * cjj };
            for l in 0..k {
                let alpha_conj_ajl = alpha_t * a.get(j, l).conj();
                for i in lo..hi {
                    let ail = *a.get(i, l);
                    let v = c.get_mut(i, j);
                    *v = *v + ail * alpha_conj_ajl;
                }
                d = d + (*a.get(j, l) * alpha_conj_ajl).re();
            }
            *c.get_mut(j, j) = T::from_real(d);
        }
    } else {
        for j in 0..n {
            let (lo, hi) = off(j);
            for i in lo..hi {
                let mut sum = T::zero();
                for l in 0..k {
                    sum = sum + a.get(l, i).conj() * *a.get(l, j);
                }
                let v = c.get_mut(i, j);
                *v = if beta == rzero {
                    alpha_t * sum
                } else {
                    alpha_t * sum + beta_t * *v
                };
            }
            let mut sum = rzero;
            for l in 0..k {
                let (re, im) = (a.get(l, j).re(), a.get(l, j).im());
                sum = sum + re * re + im * im;
            }
            let cjj = c.get(j, j).re();
            let d = if beta == rzero {
                alpha * sum
            } else {
                alpha * sum + beta * cjj
            };
            *c.get_mut(j, j) = T::from_real(d);
        }
    }

    if uplo == Uplo::General {
        for j in 0..n {
            for i in j + 1..n {
                let v = c.get(j, i).conj();
                *c.get_mut(i, j) = v;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::Portable;
    use crate::dynmatrix::DynMatrix;

    #[test]
    fn rank_one_upper() {
        let a = DynMatrix::from_rows(2, 1, &[1.0_f64, 1.0]);
        let mut c = DynMatrix::zeros(2, 2, 0.0_f64);
        herk_generic(Uplo::Upper, Op::NoTrans, 1.0, &a, 0.0, &mut c).unwrap();
        assert_eq!(c.as_slice(), &[1.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn beta_zero_overwrites_nan() {
        let a = DynMatrix::from_rows(2, 1, &[1.0_f64, 2.0]);
        let mut c = DynMatrix::fill(2, 2, f64::NAN);
        herk_generic(Uplo::Lower, Op::NoTrans, 1.0, &a, 0.0, &mut c).unwrap();
        assert_eq!((c[(0, 0)], c[(1, 0)], c[(1, 1)]), (1.0, 2.0, 4.0));
        assert!(c[(0, 1)].is_nan());
    }

    #[test]
    fn conj_trans_matches_no_trans_of_adjoint() {
        let a = DynMatrix::from_rows(3, 2, &[1.0_f64, -2.0, 0.5, 3.0, 2.0, 1.0]);
        let at = a.adjoint();
        for uplo in [Uplo::Upper, Uplo::Lower, Uplo::General] {
            let mut c1 = DynMatrix::fill(2, 2, 1.0_f64);
            let mut c2 = c1.clone();
            herk_generic(uplo, Op::ConjTrans, 2.0, &a, 0.5, &mut c1).unwrap();
            herk_generic(uplo, Op::NoTrans, 2.0, &at, 0.5, &mut c2).unwrap();
            for (x, y) in c1.as_slice().iter().zip(c2.as_slice()) {
                assert!((x - y).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn general_fills_both_triangles() {
        let a = DynMatrix::from_rows(3, 2, &[1.0_f64, -2.0, 0.5, 3.0, 2.0, 1.0]);
        let mut c = DynMatrix::zeros(3, 3, 0.0_f64);
        herk_generic(Uplo::General, Op::NoTrans, 1.0, &a, 0.0, &mut c).unwrap();
        let full = a.matmul(&a.adjoint());
        assert_eq!(c, full);
    }

    #[test]
    fn portable_backend_matches_generic() {
        let a = DynMatrix::from_rows(4, 3, &[
            1.0_f64, -2.0, 0.5, 3.0, 2.0, 1.0, -1.5, 0.25, 4.0, 2.0, -3.0, 1.0,
        ]);
        for uplo in [Uplo::Upper, Uplo::Lower] {
            for (op, n) in [(Op::NoTrans, 4), (Op::ConjTrans, 3)] {
                let start = DynMatrix::from_fn(n, n, |i, j| (i + 2 * j) as f64);
                let mut c1 = start.clone();
                let mut c2 = start.clone();
                herk_generic(uplo, op, 1.5, &a, -0.5, &mut c1).unwrap();
                herk_with(&Portable, uplo, op, 1.5, &a, -0.5, &mut c2).unwrap();
                for (x, y) in c1.as_slice().iter().zip(c2.as_slice()) {
                    assert!((x - y).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn argument_errors_leave_c_untouched() {
        let a = DynMatrix::from_rows(2, 1, &[1.0_f64, 1.0]);
        let mut c = DynMatrix::fill(3, 3, 7.0_f64);
        let err = herk(Uplo::Upper, Op::NoTrans, 1.0, &a, 0.0, &mut c).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                condition: "c.nrows() != n",
                routine: "herk"
            }
        );
        let mut rect = DynMatrix::fill(2, 3, 7.0_f64);
        assert!(herk(Uplo::Upper, Op::NoTrans, 1.0, &a, 0.0, &mut rect).is_err());
        let mut sq = DynMatrix::fill(2, 2, 7.0_f64);
        assert!(herk(Uplo::Upper, Op::Trans, 1.0, &a, 0.0, &mut sq).is_err());
        assert!(c.as_slice().iter().chain(rect.as_slice()).chain(sq.as_slice()).all(|&v| v == 7.0));
    }

    #[test]
    fn empty_is_a_no_op() {
        let a = DynMatrix::zeros(0, 3, 0.0_f64);
        let mut c = DynMatrix::zeros(0, 0, 0.0_f64);
        herk(Uplo::Lower, Op::NoTrans, 1.0, &a, 1.0, &mut c).unwrap();
    }
}
