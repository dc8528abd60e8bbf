use core::ops::{Index, IndexMut, Range};

use crate::traits::{MatrixMut, MatrixRef};
use crate::types::Layout;

use super::vector::{VectorView, VectorViewMut};
use super::{dense_layout, diag_extent, Dense, DenseMut};

#[inline]
fn required_len(nrows: usize, ncols: usize, rs: usize, cs: usize) -> usize {
    if nrows == 0 || ncols == 0 {
        0
    } else {
        (nrows - 1) * rs + (ncols - 1) * cs + 1
    }
}

#[inline]
fn check_range(r: &Range<usize>, bound: usize) {
    assert!(
        r.start <= r.end && r.end <= bound,
        "range {}..{} out of bounds for dimension {}",
        r.start,
        r.end,
        bound,
    );
}

/// Read-only strided matrix view.
///
/// Element `(i, j)` lives at `data[offset + i * row_stride + j * col_stride]`.
/// Column-major storage has `row_stride == 1`, row-major `col_stride == 1`;
/// anything else is a general strided view, which kernels accept but the
/// native backend does not.
///
/// ```
/// use genla::view::MatrixView;
/// use genla::{Layout, MatrixRef};
///
/// // 2x3 row-major
/// let buf = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let a = MatrixView::new(&buf, 2, 3, Layout::RowMajor, 3);
/// assert_eq!(a[(1, 0)], 4.0);
///
/// let at = a.transpose();
/// assert_eq!(at.nrows(), 3);
/// assert_eq!(at[(0, 1)], 4.0);
///
/// let d = a.diag(1);
/// assert_eq!(d.len(), 2);
/// assert_eq!(d[1], 6.0);
/// ```
#[derive(Debug)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    offset: usize,
    nrows: usize,
    ncols: usize,
    rs: usize,
    cs: usize,
}

impl<T> Clone for MatrixView<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MatrixView<'_, T> {}

impl<'a, T> MatrixView<'a, T> {
    /// Wrap an `nrows x ncols` dense matrix with leading dimension `ld`.
    ///
    /// Panics if `ld` is smaller than the layout requires or `data` is too short.
    pub fn new(data: &'a [T], nrows: usize, ncols: usize, layout: Layout, ld: usize) -> Self {
        assert!(
            ld >= layout.min_leading_dim(nrows, ncols),
            "leading dimension {} too small for {}x{} {:?} matrix",
            ld,
            nrows,
            ncols,
            layout,
        );
        let (rs, cs) = layout.strides(ld);
        Self::with_strides(data, nrows, ncols, rs, cs)
    }

    /// Wrap a matrix with arbitrary positive row and column strides.
    pub fn with_strides(data: &'a [T], nrows: usize, ncols: usize, rs: usize, cs: usize) -> Self {
        assert!(
            data.len() >= required_len(nrows, ncols, rs, cs),
            "slice length {} too short for {}x{} matrix with strides ({}, {})",
            data.len(),
            nrows,
            ncols,
            rs,
            cs,
        );
        Self {
            data,
            offset: 0,
            nrows,
            ncols,
            rs,
            cs,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(row_stride, col_stride)`.
    #[inline]
    pub fn strides(&self) -> (usize, usize) {
        (self.rs, self.cs)
    }

    #[inline(always)]
    fn idx(&self, i: usize, j: usize) -> usize {
        self.offset + i * self.rs + j * self.cs
    }

    /// Column `j`.
    #[inline]
    pub fn col(&self, j: usize) -> VectorView<'a, T> {
        assert!(j < self.ncols, "column {} out of bounds", j);
        VectorView::from_raw(self.data, self.idx(0, j), self.nrows, self.rs as isize)
    }

    /// Row `i`.
    #[inline]
    pub fn row(&self, i: usize) -> VectorView<'a, T> {
        assert!(i < self.nrows, "row {} out of bounds", i);
        VectorView::from_raw(self.data, self.idx(i, 0), self.ncols, self.cs as isize)
    }

    /// Diagonal `offset`: `0` is the main diagonal, positive values are
    /// above it, negative values below.
    #[inline]
    pub fn diag(&self, offset: isize) -> VectorView<'a, T> {
        let (i0, j0, len) = diag_extent(self.nrows, self.ncols, offset);
        let start = if len == 0 { self.offset } else { self.idx(i0, j0) };
        VectorView::from_raw(self.data, start, len, (self.rs + self.cs) as isize)
    }

    /// Rows `rows` and columns `cols` of this view.
    #[inline]
    pub fn submatrix(&self, rows: Range<usize>, cols: Range<usize>) -> MatrixView<'a, T> {
        check_range(&rows, self.nrows);
        check_range(&cols, self.ncols);
        MatrixView {
            data: self.data,
            offset: self.idx(rows.start, cols.start),
            nrows: rows.end - rows.start,
            ncols: cols.end - cols.start,
            rs: self.rs,
            cs: self.cs,
        }
    }

    /// Transposed view (strides swapped, no data movement).
    #[inline]
    pub fn transpose(&self) -> MatrixView<'a, T> {
        MatrixView {
            data: self.data,
            offset: self.offset,
            nrows: self.ncols,
            ncols: self.nrows,
            rs: self.cs,
            cs: self.rs,
        }
    }
}

impl<T> MatrixRef<T> for MatrixView<'_, T> {
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
        &self.data[self.idx(row, col)]
    }

    fn as_dense(&self) -> Option<Dense<'_, T>> {
        let (layout, ld) = dense_layout(self.nrows, self.ncols, self.rs, self.cs)?;
        Some(Dense {
            layout,
            nrows: self.nrows,
            ncols: self.ncols,
            ld,
            data: &self.data[self.offset.min(self.data.len())..],
        })
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.idx(row, col)]
    }
}

/// Mutable strided matrix view. See [`MatrixView`].
#[derive(Debug)]
pub struct MatrixViewMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    nrows: usize,
    ncols: usize,
    rs: usize,
    cs: usize,
}

impl<'a, T> MatrixViewMut<'a, T> {
    /// Wrap an `nrows x ncols` dense matrix with leading dimension `ld`.
    pub fn new(data: &'a mut [T], nrows: usize, ncols: usize, layout: Layout, ld: usize) -> Self {
        assert!(
            ld >= layout.min_leading_dim(nrows, ncols),
            "leading dimension {} too small for {}x{} {:?} matrix",
            ld,
            nrows,
            ncols,
            layout,
        );
        let (rs, cs) = layout.strides(ld);
        Self::with_strides(data, nrows, ncols, rs, cs)
    }

    /// Wrap a matrix with arbitrary positive row and column strides.
    ///
    /// Distinct `(i, j)` must map to distinct elements, otherwise writes alias.
    pub fn with_strides(data: &'a mut [T], nrows: usize, ncols: usize, rs: usize, cs: usize) -> Self {
        assert!(
            data.len() >= required_len(nrows, ncols, rs, cs),
            "slice length {} too short for {}x{} matrix with strides ({}, {})",
            data.len(),
            nrows,
            ncols,
            rs,
            cs,
        );
        Self {
            data,
            offset: 0,
            nrows,
            ncols,
            rs,
            cs,
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn strides(&self) -> (usize, usize) {
        (self.rs, self.cs)
    }

    #[inline(always)]
    fn idx(&self, i: usize, j: usize) -> usize {
        self.offset + i * self.rs + j * self.cs
    }

    /// Shared reborrow.
    #[inline]
    pub fn rb(&self) -> MatrixView<'_, T> {
        MatrixView {
            data: &*self.data,
            offset: self.offset,
            nrows: self.nrows,
            ncols: self.ncols,
            rs: self.rs,
            cs: self.cs,
        }
    }

    /// Mutable reborrow with a shorter lifetime.
    #[inline]
    pub fn rb_mut(&mut self) -> MatrixViewMut<'_, T> {
        MatrixViewMut {
            data: &mut *self.data,
            offset: self.offset,
            nrows: self.nrows,
            ncols: self.ncols,
            rs: self.rs,
            cs: self.cs,
        }
    }

    #[inline]
    pub fn col_mut(&mut self, j: usize) -> VectorViewMut<'_, T> {
        assert!(j < self.ncols, "column {} out of bounds", j);
        let start = self.idx(0, j);
        VectorViewMut::from_raw(&mut *self.data, start, self.nrows, self.rs as isize)
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> VectorViewMut<'_, T> {
        assert!(i < self.nrows, "row {} out of bounds", i);
        let start = self.idx(i, 0);
        VectorViewMut::from_raw(&mut *self.data, start, self.ncols, self.cs as isize)
    }

    #[inline]
    pub fn diag_mut(&mut self, offset: isize) -> VectorViewMut<'_, T> {
        let (i0, j0, len) = diag_extent(self.nrows, self.ncols, offset);
        let start = if len == 0 { self.offset } else { self.idx(i0, j0) };
        let stride = (self.rs + self.cs) as isize;
        VectorViewMut::from_raw(&mut *self.data, start, len, stride)
    }

    #[inline]
    pub fn submatrix_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> MatrixViewMut<'_, T> {
        check_range(&rows, self.nrows);
        check_range(&cols, self.ncols);
        let offset = self.idx(rows.start, cols.start);
        MatrixViewMut {
            data: &mut *self.data,
            offset,
            nrows: rows.end - rows.start,
            ncols: cols.end - cols.start,
            rs: self.rs,
            cs: self.cs,
        }
    }

    /// Consume the view and return its transpose.
    #[inline]
    pub fn into_transpose(self) -> MatrixViewMut<'a, T> {
        MatrixViewMut {
            data: self.data,
            offset: self.offset,
            nrows: self.ncols,
            ncols: self.nrows,
            rs: self.cs,
            cs: self.rs,
        }
    }
}

impl<T> MatrixRef<T> for MatrixViewMut<'_, T> {
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
        &self.data[self.idx(row, col)]
    }

    fn as_dense(&self) -> Option<Dense<'_, T>> {
        let (layout, ld) = dense_layout(self.nrows, self.ncols, self.rs, self.cs)?;
        Some(Dense {
            layout,
            nrows: self.nrows,
            ncols: self.ncols,
            ld,
            data: &self.data[self.offset.min(self.data.len())..],
        })
    }
}

impl<T> MatrixMut<T> for MatrixViewMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        let k = self.idx(row, col);
        &mut self.data[k]
    }

    fn as_dense_mut(&mut self) -> Option<DenseMut<'_, T>> {
        let (layout, ld) = dense_layout(self.nrows, self.ncols, self.rs, self.cs)?;
        // An empty submatrix may start one past the end.
        let start = self.offset.min(self.data.len());
        Some(DenseMut {
            layout,
            nrows: self.nrows,
            ncols: self.ncols,
            ld,
            data: &mut self.data[start..],
        })
    }
}

impl<T> Index<(usize, usize)> for MatrixViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.idx(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let k = self.idx(row, col);
        &mut self.data[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{VectorMut, VectorRef};

    fn colmajor_3x3() -> [f64; 9] {
        // A(i, j) = 10 * i + j, column-major
        core::array::from_fn(|k| (10 * (k % 3) + k / 3) as f64)
    }

    #[test]
    fn col_row_access() {
        let buf = colmajor_3x3();
        let a = MatrixView::new(&buf, 3, 3, Layout::ColMajor, 3);
        assert_eq!(a[(2, 1)], 21.0);
        let c = a.col(1);
        assert_eq!(*c.get(2), 21.0);
        let r = a.row(2);
        assert_eq!(r.stride(), 3);
        assert_eq!(*r.get(0), 20.0);
    }

    #[test]
    fn diagonals() {
        let buf = colmajor_3x3();
        let a = MatrixView::new(&buf, 3, 3, Layout::ColMajor, 3);
        assert!(a.diag(0).iter().copied().eq([0.0, 11.0, 22.0]));
        assert!(a.diag(1).iter().copied().eq([1.0, 12.0]));
        assert!(a.diag(-2).iter().copied().eq([20.0]));
        assert!(a.diag(3).is_empty());
    }

    #[test]
    fn submatrix_aliases_parent() {
        let mut buf = colmajor_3x3();
        let mut a = MatrixViewMut::new(&mut buf, 3, 3, Layout::ColMajor, 3);
        {
            let mut s = a.submatrix_mut(1..3, 1..3);
            assert_eq!(s[(0, 0)], 11.0);
            s[(1, 1)] = -1.0;
            *s.col_mut(0).get_mut(1) = -2.0;
        }
        assert_eq!(a[(2, 2)], -1.0);
        assert_eq!(a[(2, 1)], -2.0);
    }

    #[test]
    fn dense_descriptions() {
        let buf = colmajor_3x3();
        let a = MatrixView::new(&buf, 3, 3, Layout::ColMajor, 3);
        let d = a.as_dense().unwrap();
        assert_eq!((d.layout, d.ld), (Layout::ColMajor, 3));

        let t = a.transpose();
        let d = t.as_dense().unwrap();
        assert_eq!((d.layout, d.ld), (Layout::RowMajor, 3));

        let s = a.submatrix(1..3, 1..3);
        let d = s.as_dense().unwrap();
        assert_eq!(d.data[0], 11.0);
        assert_eq!(d.data[Layout::ColMajor.index(1, 1, d.ld)], 22.0);

        let strided = MatrixView::with_strides(&buf, 2, 2, 2, 6);
        assert!(strided.as_dense().is_none());
        assert_eq!(strided[(1, 1)], buf[8]);
    }

    #[test]
    fn transpose_mut_writes_through() {
        let mut buf = [0.0_f64; 6];
        let a = MatrixViewMut::new(&mut buf, 2, 3, Layout::ColMajor, 2);
        let mut at = a.into_transpose();
        assert_eq!(at.nrows(), 3);
        at[(2, 1)] = 5.0;
        assert_eq!(buf[Layout::ColMajor.index(1, 2, 2)], 5.0);
    }

    #[test]
    fn diag_mut_fill() {
        let mut buf = [0.0_f64; 4];
        let mut a = MatrixViewMut::new(&mut buf, 2, 2, Layout::RowMajor, 2);
        a.diag_mut(0).fill(1.0);
        assert_eq!(buf, [1.0, 0.0, 0.0, 1.0]);
    }
}
