use num_traits::{Float, Zero};

use crate::error::Error;
use crate::traits::{LinalgScalar, MatrixMut};
use crate::types::Uplo;

/// Cholesky factorization of a Hermitian positive definite matrix, in place.
///
/// Computes `A = Uᴴ·U` ([`Uplo::Upper`]) or `A = L·Lᴴ` ([`Uplo::Lower`]).
/// Only the `uplo` triangle is read; on success it holds the factor, with a
/// real positive diagonal, and the other triangle is untouched.
///
/// If the leading minor ending at column `j` is not positive definite
/// (a non-positive or NaN pivot), returns
/// [`Error::NotPositiveDefinite(j)`](Error::NotPositiveDefinite). Columns
/// before `j` then hold the partial factor.
///
/// ```
/// use genla::{DynMatrix, Uplo};
/// use genla::lapack::potrf;
///
/// let mut a = DynMatrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 5.0]);
/// potrf(Uplo::Lower, &mut a).unwrap();
/// assert_eq!(a[(0, 0)], 2.0);
/// assert_eq!(a[(1, 0)], 1.0);
/// assert_eq!(a[(1, 1)], 2.0);
/// ```
pub fn potrf<T, M>(uplo: Uplo, a: &mut M) -> Result<(), Error>
where
    T: LinalgScalar,
    M: MatrixMut<T> + ?Sized,
{
    error_if!(uplo == Uplo::General, "potrf");
    error_if!(a.nrows() != a.ncols(), "potrf");

    let n = a.nrows();
    let zero = <T::Real as Zero>::zero();
    match uplo {
        Uplo::Lower => {
            for j in 0..n {
                for k in 0..j {
                    let ljk_conj = a.get(j, k).conj();
                    for i in j..n {
                        let aik = *a.get(i, k);
                        let v = a.get_mut(i, j);
                        *v = *v - aik * ljk_conj;
                    }
                }
                let d = a.get(j, j).re();
                if d <= zero || d.is_nan() {
                    return Err(Error::NotPositiveDefinite(j));
                }
                let ljj = T::from_real(d.sqrt());
                *a.get_mut(j, j) = ljj;
                for i in j + 1..n {
                    let v = a.get_mut(i, j);
                    *v = *v / ljj;
                }
            }
        }
        _ => {
            // Row j of U is the conjugate of column j of L.
            for j in 0..n {
                for k in 0..j {
                    let ukj_conj = a.get(k, j).conj();
                    for i in j..n {
                        let aki = *a.get(k, i);
                        let v = a.get_mut(j, i);
                        *v = *v - ukj_conj * aki;
                    }
                }
                let d = a.get(j, j).re();
                if d <= zero || d.is_nan() {
                    return Err(Error::NotPositiveDefinite(j));
                }
                let ujj = T::from_real(d.sqrt());
                *a.get_mut(j, j) = ujj;
                for i in j + 1..n {
                    let v = a.get_mut(j, i);
                    *v = *v / ujj;
                }
            }
        }
    }
    Ok(())
}
