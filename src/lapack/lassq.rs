use num_traits::{Float, One, Zero};

use crate::constants::{blue_max, blue_min, blue_scaling_max, blue_scaling_min};
use crate::traits::{FloatScalar, LinalgScalar, VectorRef};

/// Update a sum of squares kept in scaled form.
///
/// On return
///
/// ```text
/// scale_out² · sumsq_out = Σ |xᵢ|² + scale_in² · sumsq_in
/// ```
///
/// without overflow or harmful underflow in any intermediate step. `|·|` is
/// [`LinalgScalar::modulus`]. Start a fresh reduction with `scale = 0`,
/// `sumsq = 1` and read the result as `scale · sqrt(sumsq)`.
///
/// Repeated calls threading the same `(scale, sumsq)` pair are equivalent to
/// one call over the concatenated inputs, so a matrix can be reduced column
/// by column.
///
/// A NaN `scale` or `sumsq` on entry makes the call a no-op.
///
/// ```
/// use genla::lapack::lassq;
///
/// let (mut scale, mut sumsq) = (0.0_f64, 1.0_f64);
/// lassq(&[1e200, 1e200][..], &mut scale, &mut sumsq);
/// let norm = scale * sumsq.sqrt();
/// assert!((norm / (2.0_f64.sqrt() * 1e200) - 1.0).abs() < 1e-14);
/// ```
#[inline]
pub fn lassq<T, V>(x: &V, scale: &mut T::Real, sumsq: &mut T::Real)
where
    T: LinalgScalar,
    V: VectorRef<T> + ?Sized,
{
    lassq_with(x, scale, sumsq, T::modulus)
}

/// [`lassq`] with a caller-supplied absolute value function.
///
/// Used, for example, to reduce only the real parts of a Hermitian diagonal.
pub fn lassq_with<T, V, F>(x: &V, scale: &mut T::Real, sumsq: &mut T::Real, abs: F)
where
    T: LinalgScalar,
    V: VectorRef<T> + ?Sized,
    F: Fn(T) -> T::Real,
{
    let zero = <T::Real as Zero>::zero();
    let one = <T::Real as One>::one();
    let tsml = blue_min::<T::Real>();
    let tbig = blue_max::<T::Real>();
    let ssml = blue_scaling_min::<T::Real>();
    let sbig = blue_scaling_max::<T::Real>();

    if scale.is_nan() || sumsq.is_nan() {
        return;
    }

    if *sumsq == zero {
        *scale = one;
    }
    if *scale == zero {
        *scale = one;
        *sumsq = zero;
    }

    let n = x.len();
    if n == 0 {
        return;
    }

    // Three accumulators:
    //   abig: squares scaled down by sbig (values above tbig)
    //   asml: squares scaled up by ssml (values below tsml), unused once abig > 0
    //   amed: squares needing no scaling
    let mut asml = zero;
    let mut amed = zero;
    let mut abig = zero;

    for i in 0..n {
        let ax = abs(*x.get(i));
        if ax > tbig {
            abig = abig + sq(ax * sbig);
        } else if ax < tsml {
            if abig == zero {
                asml = asml + sq(ax * ssml);
            }
        } else {
            amed = amed + sq(ax);
        }
    }

    // Fold the incoming sum into the accumulator its magnitude belongs to.
    if *sumsq > zero {
        let ax = *scale * sumsq.sqrt();
        if ax > tbig {
            abig = abig + sq(*scale * sbig) * *sumsq;
        } else if ax < tsml {
            if abig == zero {
                asml = asml + sq(*scale * ssml) * *sumsq;
            }
        } else {
            amed = amed + sq(*scale) * *sumsq;
        }
    }

    if abig > zero {
        if amed > zero || amed.is_nan() {
            abig = abig + (amed * sbig) * sbig;
        }
        *scale = one / sbig;
        *sumsq = abig;
    } else if asml > zero {
        if amed > zero || amed.is_nan() {
            let amed = amed.sqrt();
            let asml = asml.sqrt() / ssml;
            let (ymin, ymax) = if asml > amed { (amed, asml) } else { (asml, amed) };
            *scale = one;
            *sumsq = sq(ymax) * (one + sq(ymin / ymax));
        } else {
            *scale = one / ssml;
            *sumsq = asml;
        }
    } else {
        *scale = one;
        *sumsq = amed;
    }
}

#[inline(always)]
fn sq<R: Float>(x: R) -> R {
    x * x
}

/// Scaled sum-of-squares accumulator `(scale, sumsq)`.
///
/// Wraps [`lassq`] for callers that prefer a value type to a pair of
/// `&mut` scalars. The represented value is `scale² · sumsq`.
///
/// ```
/// use genla::lapack::ScaledSumSquares;
///
/// let mut acc = ScaledSumSquares::<f64>::new();
/// acc.update(&[3.0][..]);
/// acc.update(&[4.0][..]);
/// assert!((acc.norm() - 5.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSumSquares<R> {
    pub scale: R,
    pub sumsq: R,
}

impl<R: FloatScalar> ScaledSumSquares<R> {
    /// Empty accumulator (`scale = 0`, `sumsq = 1`, representing zero).
    #[inline]
    pub fn new() -> Self {
        Self {
            scale: R::zero(),
            sumsq: R::one(),
        }
    }

    /// Resume from a previous `(scale, sumsq)` state.
    #[inline]
    pub fn from_parts(scale: R, sumsq: R) -> Self {
        Self { scale, sumsq }
    }

    /// Accumulate `Σ |xᵢ|²`.
    #[inline]
    pub fn update<T, V>(&mut self, x: &V)
    where
        T: LinalgScalar<Real = R>,
        V: VectorRef<T> + ?Sized,
    {
        lassq(x, &mut self.scale, &mut self.sumsq);
    }

    /// Accumulate `Σ abs(xᵢ)²`.
    #[inline]
    pub fn update_with<T, V, F>(&mut self, x: &V, abs: F)
    where
        T: LinalgScalar<Real = R>,
        V: VectorRef<T> + ?Sized,
        F: Fn(T) -> R,
    {
        lassq_with(x, &mut self.scale, &mut self.sumsq, abs);
    }

    /// `scale · sqrt(sumsq)`.
    #[inline]
    pub fn norm(&self) -> R {
        self.scale * self.sumsq.sqrt()
    }
}

impl<R: FloatScalar> Default for ScaledSumSquares<R> {
    fn default() -> Self {
        Self::new()
    }
}
