use crate::error::Error;
use crate::traits::VectorMut;

/// Exchange the elements of two vectors of equal length.
///
/// Any [`VectorMut`] works on either side, including strided and reversed
/// views.
///
/// ```
/// use genla::blas::swap;
/// use genla::view::VectorViewMut;
///
/// let mut x = [1.0_f64, 2.0, 3.0];
/// let mut buf = [0.0_f64, -1.0, 0.0, -2.0, 0.0, -3.0];
/// // Every other element, walked backwards.
/// let mut y = VectorViewMut::new(&mut buf, 3, -2).unwrap();
/// swap(&mut x[..], &mut y).unwrap();
/// assert_eq!(x, [0.0, 0.0, 0.0]);
/// assert_eq!(buf, [3.0, -1.0, 2.0, -2.0, 1.0, -3.0]);
/// ```
pub fn swap<T, X, Y>(x: &mut X, y: &mut Y) -> Result<(), Error>
where
    X: VectorMut<T> + ?Sized,
    Y: VectorMut<T> + ?Sized,
{
    error_if!(x.len() != y.len(), "swap");
    for i in 0..x.len() {
        let xi = x.get_mut(i);
        let yi = y.get_mut(i);
        core::mem::swap(xi, yi);
    }
    Ok(())
}
