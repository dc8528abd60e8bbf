use num_traits::{Float, One, Zero};

use crate::constants::safe_min;
use crate::error::Error;
use crate::traits::{LinalgScalar, MatrixMut};
use crate::types::MatrixType;

/// Multiply `A` by the real ratio `a / b` without over- or underflow.
///
/// The product is formed in steps of at most `safe_min` or `safe_max`, so
/// the result is exact whenever `a / b · A` itself is representable, even
/// when the ratio is not. `matrix_type` selects the part of `A` that is
/// scaled; the rest is left untouched.
///
/// Rejects `b == 0` and NaN `a` or `b` before touching `A`.
///
/// ```
/// use genla::{DynMatrix, MatrixType};
/// use genla::lapack::lascl;
///
/// let mut a = DynMatrix::fill(2, 2, 1e-300_f64);
/// // The ratio 1e10 / 1e-300 overflows; the scaled matrix does not.
/// lascl(MatrixType::Upper, 1e-300, 1e10, &mut a).unwrap();
/// assert!((a[(0, 1)] / 1e10 - 1.0).abs() < 1e-14);
/// assert_eq!(a[(1, 0)], 1e-300);
/// ```
pub fn lascl<T, M>(matrix_type: MatrixType, b: T::Real, a: T::Real, m: &mut M) -> Result<(), Error>
where
    T: LinalgScalar,
    M: MatrixMut<T> + ?Sized,
{
    let zero = <T::Real as Zero>::zero();
    error_if!(b == zero, "lascl");
    error_if!(b.is_nan(), "lascl");
    error_if!(a.is_nan(), "lascl");

    let (rows, cols) = (m.nrows(), m.ncols());
    if rows == 0 || cols == 0 {
        return Ok(());
    }

    let one = <T::Real as One>::one();
    let small = safe_min::<T::Real>();
    let big = one / small;

    let mut from = b;
    let mut to = a;
    loop {
        let from1 = from * small;
        let (mul, done) = if from1 == from {
            // `from` is infinite: the ratio is zero or NaN either way.
            (to / from, true)
        } else {
            let to1 = to / big;
            if to1 == to {
                // `to` is zero or infinite.
                from = one;
                (to, true)
            } else if from1.abs() > to.abs() && to != zero {
                from = from1;
                (small, false)
            } else if to1.abs() > from.abs() {
                to = to1;
                (big, false)
            } else {
                (to / from, true)
            }
        };

        if mul == one {
            return Ok(());
        }
        let mul = T::from_real(mul);
        for j in 0..cols {
            let (lo, hi) = matrix_type.col_rows(j, rows);
            for i in lo..hi {
                let v = m.get_mut(i, j);
                *v = *v * mul;
            }
        }

        if done {
            return Ok(());
        }
    }
}
