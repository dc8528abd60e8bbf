use crate::error::Error;
use crate::lapack::lanhe::{fro_norm, max_norm, one_norm};
use crate::traits::{LinalgScalar, MatrixRef, VectorMut};
use crate::types::{Norm, Uplo};

/// Norm of a symmetric matrix stored in one triangle.
///
/// Same contract as [`lanhe`](crate::lapack::lanhe), except the diagonal is
/// measured with the full [`modulus`](LinalgScalar::modulus). For real
/// matrices the two coincide.
pub fn lansy<T, M>(norm: Norm, uplo: Uplo, a: &M) -> Result<T::Real, Error>
where
    T: LinalgScalar,
    M: MatrixRef<T> + ?Sized,
{
    error_if!(uplo == Uplo::General, "lansy");
    error_if!(norm == Norm::One || norm == Norm::Inf, "lansy");
    error_if!(a.nrows() != a.ncols(), "lansy");
    Ok(match norm {
        Norm::Max => max_norm(uplo, a, T::modulus),
        _ => fro_norm(uplo, a, T::modulus),
    })
}

/// Norm of a symmetric matrix stored in one triangle, any [`Norm`].
///
/// `work` must hold at least `n` reals.
pub fn lansy_work<T, M, W>(norm: Norm, uplo: Uplo, a: &M, work: &mut W) -> Result<T::Real, Error>
where
    T: LinalgScalar,
    M: MatrixRef<T> + ?Sized,
    W: VectorMut<T::Real> + ?Sized,
{
    error_if!(uplo == Uplo::General, "lansy");
    error_if!(a.nrows() != a.ncols(), "lansy");
    error_if!(work.len() < a.nrows(), "lansy");
    Ok(match norm {
        Norm::Max => max_norm(uplo, a, T::modulus),
        Norm::Fro => fro_norm(uplo, a, T::modulus),
        Norm::One | Norm::Inf => one_norm(uplo, a, work, T::modulus),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynmatrix::DynMatrix;
    use crate::lapack::lanhe;

    #[test]
    fn real_matrices_match_lanhe() {
        let a = DynMatrix::from_rows(2, 2, &[1.0_f64, -2.0, -2.0, 3.0]);
        for norm in [Norm::Max, Norm::Fro] {
            assert_eq!(
                lansy(norm, Uplo::Lower, &a).unwrap(),
                lanhe(norm, Uplo::Lower, &a).unwrap()
            );
        }
        let mut work = [0.0; 2];
        assert_eq!(lansy_work(Norm::Inf, Uplo::Upper, &a, &mut work[..]).unwrap(), 5.0);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn complex_diagonal_uses_modulus() {
        use num_complex::Complex;
        let a = DynMatrix::from_rows(1, 1, &[Complex::new(3.0_f64, 4.0)]);
        assert_eq!(lansy(Norm::Max, Uplo::Upper, &a).unwrap(), 5.0);
        assert_eq!(lanhe(Norm::Max, Uplo::Upper, &a).unwrap(), 3.0);
    }

    #[test]
    fn general_rejected() {
        let a = DynMatrix::eye(2, 0.0_f64);
        assert_eq!(
            lansy(Norm::Max, Uplo::General, &a).unwrap_err().routine(),
            Some("lansy")
        );
    }
}
