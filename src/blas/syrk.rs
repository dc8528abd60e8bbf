use crate::dispatch::{default_backend, syrk_native, Backend};
use crate::error::Error;
use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};
use crate::types::{Op, Uplo};

/// Symmetric rank-k update.
///
/// - [`Op::NoTrans`]: `C := α·A·Aᵀ + β·C`, `A` is `n x k`.
/// - [`Op::Trans`]: `C := α·Aᵀ·A + β·C`, `A` is `k x n`.
///
/// No conjugation takes place, so for complex data the result is complex
/// symmetric, not Hermitian. Triangle handling, `β = 0` and dispatch follow
/// [`herk`](crate::blas::herk); only real element types are forwarded to a
/// backend.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `op` is [`Op::ConjTrans`], `C` is not
/// square, or `C` does not match `A`.
///
/// ```
/// use genla::{DynMatrix, Op, Uplo};
/// use genla::blas::syrk;
///
/// let a = DynMatrix::from_rows(1, 2, &[1.0_f64, 2.0]);
/// let mut c = DynMatrix::zeros(2, 2, 0.0);
/// syrk(Uplo::General, Op::Trans, 1.0, &a, 0.0, &mut c).unwrap();
/// assert_eq!(c.as_slice(), &[1.0, 2.0, 2.0, 4.0]);
/// ```
pub fn syrk<T, A, C>(uplo: Uplo, op: Op, alpha: T, a: &A, beta: T, c: &mut C) -> Result<(), Error>
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    check(op, a, c)?;
    if let Some(backend) = default_backend() {
        if syrk_native(backend, uplo, op, alpha, a, beta, c) {
            trace!(routine = "syrk", backend = backend.name(), path = "native");
            return Ok(());
        }
    }
    trace!(routine = "syrk", path = "generic");
    kernel(uplo, op, alpha, a, beta, c);
    Ok(())
}

/// [`syrk`] with an explicit backend for eligible calls.
pub fn syrk_with<T, A, C, B>(
    backend: &B,
    uplo: Uplo,
    op: Op,
    alpha: T,
    a: &A,
    beta: T,
    c: &mut C,
) -> Result<(), Error>
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
    B: Backend + ?Sized,
{
    check(op, a, c)?;
    if syrk_native(backend, uplo, op, alpha, a, beta, c) {
        trace!(routine = "syrk", backend = backend.name(), path = "native");
        return Ok(());
    }
    trace!(routine = "syrk", path = "generic");
    kernel(uplo, op, alpha, a, beta, c);
    Ok(())
}

/// [`syrk`] that never dispatches.
pub fn syrk_generic<T, A, C>(
    uplo: Uplo,
    op: Op,
    alpha: T,
    a: &A,
    beta: T,
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
    error_if!(op == Op::ConjTrans, "syrk");
    let n = if op == Op::NoTrans { a.nrows() } else { a.ncols() };
    error_if!(c.nrows() != c.ncols(), "syrk");
    error_if!(c.nrows() != n, "syrk");
    Ok(())
}

fn kernel<T, A, C>(uplo: Uplo, op: Op, alpha: T, a: &A, beta: T, c: &mut C)
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    C: MatrixMut<T> + ?Sized,
{
    let n = c.nrows();
    let k = if op == Op::NoTrans { a.ncols() } else { a.nrows() };
    let zero = T::zero();

    // Rows of column j inside the stored triangle, diagonal included.
    let rows = |j: usize| if uplo == Uplo::Lower { (j, n) } else { (0, j + 1) };

    if op == Op::NoTrans {
        for j in 0..n {
            let (lo, hi) = rows(j);
            for i in lo..hi {
                let v = c.get_mut(i, j);
                *v = if beta == zero { zero } else { *v * beta };
            }
            for l in 0..k {
                let alpha_ajl = alpha * *a.get(j, l);
                for i in lo..hi {
                    let ail = *a.get(i, l);
                    let v = c.get_mut(i, j);
                    *v = *v + ail * alpha_ajl;
                }
            }
        }
    } else {
        for j in 0..n {
            let (lo, hi) = rows(j);
            for i in lo..hi {
                let mut sum = zero;
                for l in 0..k {
                    sum = sum + *a.get(l, i) * *a.get(l, j);
                }
                let v = c.get_mut(i, j);
                *v = if beta == zero {
                    alpha * sum
                } else {
                    alpha * sum + beta * *v
                };
            }
        }
    }

    if uplo == Uplo::General {
        for j in 0..n {
            for i in j + 1..n {
                let v = *c.get(j, i);
                *c.get_mut(i, j) = v;
            }
        }
    }
}
