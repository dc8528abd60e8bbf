use crate::traits::{MatrixRef, Scalar};

/// Read-only view of a band matrix in LAPACK band storage.
///
/// An `m x n` matrix with `kl` sub-diagonals and `ku` super-diagonals is
/// stored column by column in a `(kl + ku + 1) x n` column-major array:
/// `A(i, j)` lives at `ab[ku + i - j + j * ldab]` for
/// `max(0, j - ku) <= i <= min(m - 1, j + kl)`. Elements outside the band
/// read as zero.
///
/// ```
/// use genla::view::BandView;
/// use genla::MatrixRef;
///
/// // Tridiagonal 3x3: sub = [1, 1], diag = [2, 2, 2], super = [3, 3]
/// let ab = [0.0, 2.0, 1.0, 3.0, 2.0, 1.0, 3.0, 2.0, 0.0];
/// let a = BandView::new(&ab, 3, 3, 1, 1, 3);
/// assert_eq!(*a.get(0, 0), 2.0);
/// assert_eq!(*a.get(1, 0), 1.0);
/// assert_eq!(*a.get(0, 1), 3.0);
/// assert_eq!(*a.get(2, 0), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BandView<'a, T> {
    data: &'a [T],
    nrows: usize,
    ncols: usize,
    kl: usize,
    ku: usize,
    ldab: usize,
    zero: T,
}

impl<'a, T: Scalar> BandView<'a, T> {
    /// Panics if `ldab < kl + ku + 1` or `ab` is too short.
    pub fn new(ab: &'a [T], nrows: usize, ncols: usize, kl: usize, ku: usize, ldab: usize) -> Self {
        assert!(
            ldab > kl + ku,
            "band leading dimension {} too small for kl = {}, ku = {}",
            ldab,
            kl,
            ku,
        );
        assert!(
            ncols == 0 || ab.len() >= (ncols - 1) * ldab + kl + ku + 1,
            "band storage too short",
        );
        Self {
            data: ab,
            nrows,
            ncols,
            kl,
            ku,
            ldab,
            zero: T::zero(),
        }
    }

    /// Number of sub-diagonals.
    #[inline]
    pub fn kl(&self) -> usize {
        self.kl
    }

    /// Number of super-diagonals.
    #[inline]
    pub fn ku(&self) -> usize {
        self.ku
    }

    /// True if `(i, j)` lies inside the band.
    #[inline]
    pub fn in_band(&self, i: usize, j: usize) -> bool {
        i + self.ku >= j && i <= j + self.kl
    }
}

impl<T: Scalar> MatrixRef<T> for BandView<'_, T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        if self.in_band(row, col) {
            &self.data[self.ku + row - col + col * self.ldab]
        } else {
            &self.zero
        }
    }
}
