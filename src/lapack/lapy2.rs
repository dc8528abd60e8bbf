use crate::traits::FloatScalar;

/// `sqrt(x² + y²)` without unnecessary overflow or underflow.
///
/// A NaN argument is returned as is.
///
/// ```
/// use genla::lapack::lapy2;
///
/// assert_eq!(lapy2(3.0_f64, -4.0), 5.0);
/// assert!((lapy2(3e300_f64, 4e300) / 5e300 - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn lapy2<R: FloatScalar>(x: R, y: R) -> R {
    if x.is_nan() {
        return x;
    }
    if y.is_nan() {
        return y;
    }
    let (xa, ya) = (x.abs(), y.abs());
    let (w, z) = if xa > ya { (xa, ya) } else { (ya, xa) };
    if z == R::zero() || w.is_infinite() {
        w
    } else {
        let q = z / w;
        w * (R::one() + q * q).sqrt()
    }
}
