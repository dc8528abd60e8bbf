//! Borrowed matrix and vector views.
//!
//! Views never own storage. Every derived view (`col`, `row`, `diag`,
//! `submatrix`, `subvector`, `transpose`) aliases the storage of its parent,
//! so a write through a derived mutable view is visible through the parent
//! once the borrow ends.
//!
//! ```
//! use genla::view::MatrixViewMut;
//! use genla::{Layout, MatrixRef, VectorMut};
//!
//! let mut buf = [1.0_f64, 2.0, 3.0, 4.0];
//! let mut a = MatrixViewMut::new(&mut buf, 2, 2, Layout::ColMajor, 2);
//! *a.col_mut(1).get_mut(0) = 9.0;
//! assert_eq!(*a.get(0, 1), 9.0);
//! assert_eq!(buf, [1.0, 2.0, 9.0, 4.0]);
//! ```

mod adapt;
mod band;
mod matrix;
mod vector;

pub use band::BandView;
pub use matrix::{MatrixView, MatrixViewMut};
pub use vector::{VectorView, VectorViewMut};

pub(crate) use adapt::{ColumnRange, Diagonal};

use crate::types::Layout;

/// Flat storage description of a dense matrix.
///
/// Element `(i, j)` lives at `data[layout.index(i, j, ld)]`. This is the
/// pointer/leading-dimension form a native BLAS consumes.
#[derive(Debug)]
pub struct Dense<'a, T> {
    pub layout: Layout,
    pub nrows: usize,
    pub ncols: usize,
    pub ld: usize,
    pub data: &'a [T],
}

impl<T> Clone for Dense<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Dense<'_, T> {}

/// Mutable flat storage description of a dense matrix.
#[derive(Debug)]
pub struct DenseMut<'a, T> {
    pub layout: Layout,
    pub nrows: usize,
    pub ncols: usize,
    pub ld: usize,
    pub data: &'a mut [T],
}

/// Classify `(row_stride, col_stride)` as a dense layout, if it is one.
#[inline]
pub(crate) fn dense_layout(
    nrows: usize,
    ncols: usize,
    rs: usize,
    cs: usize,
) -> Option<(Layout, usize)> {
    if rs == 1 && cs >= nrows.max(1) {
        Some((Layout::ColMajor, cs))
    } else if cs == 1 && rs >= ncols.max(1) {
        Some((Layout::RowMajor, rs))
    } else {
        None
    }
}

/// Length of diagonal `offset` of an `m x n` matrix and its first element.
#[inline]
pub(crate) fn diag_extent(m: usize, n: usize, offset: isize) -> (usize, usize, usize) {
    if offset >= 0 {
        let k = offset as usize;
        let len = if k >= n { 0 } else { m.min(n - k) };
        (0, k, len)
    } else {
        let k = offset.unsigned_abs();
        let len = if k >= m { 0 } else { (m - k).min(n) };
        (k, 0, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_layout_detection() {
        assert_eq!(dense_layout(3, 2, 1, 3), Some((Layout::ColMajor, 3)));
        assert_eq!(dense_layout(3, 4, 4, 1), Some((Layout::RowMajor, 4)));
        assert_eq!(dense_layout(3, 4, 2, 6), None);
        assert_eq!(dense_layout(3, 4, 3, 1), None);
    }

    #[test]
    fn diag_extents() {
        assert_eq!(diag_extent(3, 4, 0), (0, 0, 3));
        assert_eq!(diag_extent(3, 4, 2), (0, 2, 2));
        assert_eq!(diag_extent(3, 4, -1), (1, 0, 2));
        assert_eq!(diag_extent(3, 4, 5), (0, 5, 0));
        assert_eq!(diag_extent(3, 4, -3), (3, 0, 0));
    }
}
