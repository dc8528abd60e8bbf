use num_traits::{Float, One, Zero};

use crate::constants::safe_max;
use crate::error::Error;
use crate::lapack::lassq::{lassq, lassq_with};
use crate::traits::{LinalgScalar, MatrixRef, VectorMut};
use crate::types::{Norm, Uplo};
use crate::view::{ColumnRange, Diagonal};

/// Norm of a Hermitian matrix stored in one triangle.
///
/// Handles [`Norm::Max`] and [`Norm::Fro`]; the one and infinity norms need
/// a work vector, see [`lanhe_work`]. Only the `uplo` triangle of `a` is
/// read, and the imaginary parts of the diagonal are ignored.
///
/// `Max` returns the first NaN it meets. `n = 0` gives zero.
///
/// ```
/// use genla::{DynMatrix, Norm, Uplo, Complex};
/// use genla::lapack::lanhe;
///
/// let z = |re, im| Complex::new(re, im);
/// // Lower entry (1, 0) is never read.
/// let a = DynMatrix::from_rows(2, 2, &[
///     z(2.0, 0.0), z(1.0, 1.0),
///     z(99.0, 0.0), z(3.0, 0.0),
/// ]);
/// let fro = lanhe(Norm::Fro, Uplo::Upper, &a).unwrap();
/// assert!((fro - 17.0_f64.sqrt()).abs() < 1e-14);
/// ```
pub fn lanhe<T, M>(norm: Norm, uplo: Uplo, a: &M) -> Result<T::Real, Error>
where
    T: LinalgScalar,
    M: MatrixRef<T> + ?Sized,
{
    error_if!(uplo == Uplo::General, "lanhe");
    error_if!(norm == Norm::One || norm == Norm::Inf, "lanhe");
    error_if!(a.nrows() != a.ncols(), "lanhe");
    Ok(match norm {
        Norm::Max => max_norm(uplo, a, hermitian_diag::<T>),
        _ => fro_norm(uplo, a, hermitian_diag::<T>),
    })
}

/// Norm of a Hermitian matrix stored in one triangle, any [`Norm`].
///
/// `work` must hold at least `n` reals; it is overwritten for the one and
/// infinity norms (which coincide for Hermitian matrices) and untouched
/// otherwise.
pub fn lanhe_work<T, M, W>(norm: Norm, uplo: Uplo, a: &M, work: &mut W) -> Result<T::Real, Error>
where
    T: LinalgScalar,
    M: MatrixRef<T> + ?Sized,
    W: VectorMut<T::Real> + ?Sized,
{
    error_if!(uplo == Uplo::General, "lanhe");
    error_if!(a.nrows() != a.ncols(), "lanhe");
    error_if!(work.len() < a.nrows(), "lanhe");
    Ok(match norm {
        Norm::Max => max_norm(uplo, a, hermitian_diag::<T>),
        Norm::Fro => fro_norm(uplo, a, hermitian_diag::<T>),
        Norm::One | Norm::Inf => one_norm(uplo, a, work, hermitian_diag::<T>),
    })
}

#[inline(always)]
fn hermitian_diag<T: LinalgScalar>(x: T) -> T::Real {
    Float::abs(x.re())
}

// ── Shared triangle reductions ──────────────────────────────────────
//
// `diag_abs` is the magnitude used on the diagonal: `|re|` for Hermitian
// data, the full modulus for symmetric data.

pub(super) fn max_norm<T, M, F>(uplo: Uplo, a: &M, diag_abs: F) -> T::Real
where
    T: LinalgScalar,
    M: MatrixRef<T> + ?Sized,
    F: Fn(T) -> T::Real,
{
    let n = a.nrows();
    let mut norm = <T::Real as Zero>::zero();
    for j in 0..n {
        let (lo, hi) = match uplo {
            Uplo::Lower => (j + 1, n),
            _ => (0, j),
        };
        let d = diag_abs(*a.get(j, j));
        if d > norm {
            norm = d;
        } else if Float::is_nan(d) {
            return d;
        }
        for i in lo..hi {
            let x = *a.get(i, j);
            if x.has_nan() {
                return <T::Real as Float>::nan();
            }
            let v = x.modulus();
            if v > norm {
                norm = v;
            }
        }
    }
    norm
}

pub(super) fn fro_norm<T, M, F>(uplo: Uplo, a: &M, diag_abs: F) -> T::Real
where
    T: LinalgScalar,
    M: MatrixRef<T> + ?Sized,
    F: Fn(T) -> T::Real,
{
    let n = a.nrows();
    let one = <T::Real as One>::one();
    let mut scale = <T::Real as Zero>::zero();
    let mut sumsq = one;
    if n == 0 {
        return scale;
    }

    // Strictly off-diagonal part, counted once.
    for j in 0..n {
        let (lo, hi) = match uplo {
            Uplo::Lower => (j + 1, n),
            _ => (0, j),
        };
        if lo < hi {
            lassq(&ColumnRange::new(a, j, lo, hi), &mut scale, &mut sumsq);
        }
    }

    // Account for the unstored triangle.
    if sumsq < safe_max::<T::Real>() {
        sumsq = sumsq + sumsq;
    } else {
        scale = scale * (one + one).sqrt();
    }

    lassq_with(&Diagonal::new(a), &mut scale, &mut sumsq, diag_abs);
    scale * sumsq.sqrt()
}

pub(super) fn one_norm<T, M, W, F>(uplo: Uplo, a: &M, work: &mut W, diag_abs: F) -> T::Real
where
    T: LinalgScalar,
    M: MatrixRef<T> + ?Sized,
    W: VectorMut<T::Real> + ?Sized,
    F: Fn(T) -> T::Real,
{
    let n = a.nrows();
    let zero = <T::Real as Zero>::zero();
    let mut norm = zero;
    for i in 0..n {
        *work.get_mut(i) = zero;
    }

    match uplo {
        Uplo::Lower => {
            // Column j is complete once its own entries are added.
            for j in 0..n {
                let mut sum = *work.get(j) + diag_abs(*a.get(j, j));
                for i in j + 1..n {
                    let v = a.get(i, j).modulus();
                    sum = sum + v;
                    *work.get_mut(i) = *work.get(i) + v;
                }
                if sum > norm {
                    norm = sum;
                } else if Float::is_nan(sum) {
                    return sum;
                }
            }
        }
        _ => {
            for j in 0..n {
                let mut sum = zero;
                for i in 0..j {
                    let v = a.get(i, j).modulus();
                    sum = sum + v;
                    *work.get_mut(i) = *work.get(i) + v;
                }
                *work.get_mut(j) = sum + diag_abs(*a.get(j, j));
            }
            for i in 0..n {
                let sum = *work.get(i);
                if sum > norm {
                    norm = sum;
                } else if Float::is_nan(sum) {
                    return sum;
                }
            }
        }
    }
    norm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynmatrix::DynMatrix;
    use crate::view::BandView;

    fn sym3() -> DynMatrix<f64> {
        // Full symmetric matrix; each test reads only one triangle.
        DynMatrix::from_rows(3, 3, &[4.0, -1.0, 2.0, -1.0, 5.0, -3.0, 2.0, -3.0, 6.0])
    }

    #[test]
    fn max_norm_reads_one_triangle() {
        let mut a = sym3();
        a[(2, 0)] = 100.0;
        assert_eq!(lanhe(Norm::Max, Uplo::Upper, &a).unwrap(), 6.0);
        assert_eq!(lanhe(Norm::Max, Uplo::Lower, &a).unwrap(), 100.0);
    }

    #[test]
    fn fro_matches_direct_sum() {
        let a = sym3();
        let direct: f64 = a.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt();
        for uplo in [Uplo::Upper, Uplo::Lower] {
            let f = lanhe(Norm::Fro, uplo, &a).unwrap();
            assert!((f - direct).abs() < 1e-13 * direct);
        }
    }

    #[test]
    fn one_and_inf_norms_agree() {
        let a = sym3();
        let mut work = [0.0; 3];
        // Column sums: 7, 9, 11.
        for uplo in [Uplo::Upper, Uplo::Lower] {
            assert_eq!(lanhe_work(Norm::One, uplo, &a, &mut work[..]).unwrap(), 11.0);
            assert_eq!(lanhe_work(Norm::Inf, uplo, &a, &mut work[..]).unwrap(), 11.0);
        }
    }

    #[test]
    fn work_variant_covers_max_and_fro() {
        let a = sym3();
        let mut work = [7.0; 3];
        let m = lanhe_work(Norm::Max, Uplo::Lower, &a, &mut work[..]).unwrap();
        assert_eq!(m, 6.0);
        assert_eq!(work, [7.0; 3]);
        let f = lanhe_work(Norm::Fro, Uplo::Upper, &a, &mut work[..]).unwrap();
        assert_eq!(f, lanhe(Norm::Fro, Uplo::Upper, &a).unwrap());
    }

    #[test]
    fn empty_matrix() {
        let a = DynMatrix::zeros(0, 0, 0.0_f64);
        let mut work: [f64; 0] = [];
        for norm in [Norm::Max, Norm::Fro] {
            assert_eq!(lanhe(norm, Uplo::Upper, &a).unwrap(), 0.0);
        }
        assert_eq!(lanhe_work(Norm::One, Uplo::Lower, &a, &mut work[..]).unwrap(), 0.0);
    }

    #[test]
    fn nan_short_circuits() {
        let mut a = sym3();
        a[(0, 1)] = f64::NAN;
        let mut work = [0.0; 3];
        assert!(lanhe(Norm::Max, Uplo::Upper, &a).unwrap().is_nan());
        assert!(lanhe(Norm::Fro, Uplo::Upper, &a).unwrap().is_nan());
        assert!(lanhe_work(Norm::One, Uplo::Upper, &a, &mut work[..]).unwrap().is_nan());
        // The NaN sits outside the lower triangle.
        assert_eq!(lanhe(Norm::Max, Uplo::Lower, &a).unwrap(), 6.0);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn max_stops_at_complex_nan() {
        use crate::lapack::lansy;
        use num_complex::Complex;
        // Infinite real part with a NaN imaginary part; a larger entry follows.
        let z = |re: f64, im: f64| Complex::new(re, im);
        let mut a = DynMatrix::fill(3, 3, z(1.0, 0.0));
        a[(0, 1)] = z(f64::INFINITY, f64::NAN);
        a[(1, 2)] = z(1e300, 0.0);
        assert!(lanhe(Norm::Max, Uplo::Upper, &a).unwrap().is_nan());
        assert!(lansy(Norm::Max, Uplo::Upper, &a).unwrap().is_nan());
        assert_eq!(lanhe(Norm::Max, Uplo::Lower, &a).unwrap(), 1.0);
    }

    #[test]
    fn argument_errors() {
        let a = sym3();
        let mut short = [0.0; 2];
        assert!(lanhe(Norm::Fro, Uplo::General, &a).is_err());
        assert!(lanhe(Norm::One, Uplo::Upper, &a).is_err());
        assert!(lanhe_work(Norm::Inf, Uplo::Upper, &a, &mut short[..]).is_err());
        let rect = DynMatrix::zeros(2, 3, 0.0_f64);
        assert_eq!(lanhe(Norm::Max, Uplo::Upper, &rect).unwrap_err().routine(), Some("lanhe"));
    }

    #[test]
    fn fro_of_huge_entries_is_finite() {
        let a = DynMatrix::from_rows(2, 2, &[1e300_f64, 1e300, 1e300, 1e300]);
        let f = lanhe(Norm::Fro, Uplo::Upper, &a).unwrap();
        assert!(f.is_finite());
        assert!((f / 2e300 - 1.0).abs() < 1e-14);
    }

    #[test]
    fn works_on_band_storage() {
        // Symmetric tridiagonal, upper band: diag [2, 2, 2], super [1, 1].
        let ab = [0.0_f64, 2.0, 1.0, 2.0, 1.0, 2.0];
        let a = BandView::new(&ab, 3, 3, 0, 1, 2);
        let mut work = [0.0; 3];
        assert_eq!(lanhe_work(Norm::One, Uplo::Upper, &a, &mut work[..]).unwrap(), 4.0);
        let f = lanhe(Norm::Fro, Uplo::Upper, &a).unwrap();
        assert!((f - 16.0_f64.sqrt()).abs() < 1e-14);
    }
}
