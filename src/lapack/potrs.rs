use crate::blas::trsm;
use crate::error::Error;
use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};
use crate::types::{Diag, Op, Side, Uplo};

/// Solve `A·X = B` using the Cholesky factor computed by [`potrf`].
///
/// `a` holds `U` (`A = Uᴴ·U`) or `L` (`A = L·Lᴴ`) in its `uplo` triangle;
/// `b` is overwritten with `X`.
///
/// [`potrf`]: crate::lapack::potrf
///
/// ```
/// use genla::{DynMatrix, Uplo};
/// use genla::lapack::{potrf, potrs};
///
/// let mut a = DynMatrix::from_rows(2, 2, &[4.0_f64, 2.0, 2.0, 3.0]);
/// let mut b = DynMatrix::from_rows(2, 1, &[8.0, 7.0]);
/// potrf(Uplo::Upper, &mut a).unwrap();
/// potrs(Uplo::Upper, &a, &mut b).unwrap();
/// assert!((b[(0, 0)] - 1.25).abs() < 1e-12);
/// assert!((b[(1, 0)] - 1.5).abs() < 1e-12);
/// ```
pub fn potrs<T, A, B>(uplo: Uplo, a: &A, b: &mut B) -> Result<(), Error>
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    B: MatrixMut<T> + ?Sized,
{
    error_if!(uplo == Uplo::General, "potrs");
    error_if!(a.nrows() != a.ncols(), "potrs");
    error_if!(b.nrows() != a.ncols(), "potrs");

    let one = T::one();
    let (first, second) = match uplo {
        Uplo::Lower => (Op::NoTrans, Op::ConjTrans),
        _ => (Op::ConjTrans, Op::NoTrans),
    };
    trsm(Side::Left, uplo, first, Diag::NonUnit, one, a, b)?;
    trsm(Side::Left, uplo, second, Diag::NonUnit, one, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynmatrix::DynMatrix;
    use crate::lapack::potrf;

    #[test]
    fn solves_both_triangles() {
        let a = DynMatrix::from_rows(3, 3, &[4.0_f64, 2.0, 1.0, 2.0, 10.0, 3.5, 1.0, 3.5, 4.5]);
        let x = DynMatrix::from_rows(3, 2, &[1.0, 2.0, -1.0, 0.5, 3.0, -2.0]);
        let b0 = a.matmul(&x);
        for uplo in [Uplo::Upper, Uplo::Lower] {
            let mut f = a.clone();
            potrf(uplo, &mut f).unwrap();
            let mut b = b0.clone();
            potrs(uplo, &f, &mut b).unwrap();
            for (u, v) in b.as_slice().iter().zip(x.as_slice()) {
                assert!((u - v).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn shape_mismatch() {
        let a = DynMatrix::eye(3, 0.0_f64);
        let mut b = DynMatrix::zeros(2, 1, 0.0_f64);
        assert_eq!(potrs(Uplo::Lower, &a, &mut b).unwrap_err().routine(), Some("potrs"));
    }
}
