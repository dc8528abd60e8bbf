use core::marker::PhantomData;

use crate::traits::{MatrixRef, VectorRef};

/// Rows `lo..hi` of column `col` of any [`MatrixRef`], as a vector.
///
/// Lets the reductions walk matrices that expose no storage (band views,
/// user types) through the same [`VectorRef`] interface as slices.
pub(crate) struct ColumnRange<'m, T, M: ?Sized> {
    a: &'m M,
    col: usize,
    lo: usize,
    len: usize,
    _t: PhantomData<T>,
}

impl<'m, T, M: MatrixRef<T> + ?Sized> ColumnRange<'m, T, M> {
    #[inline]
    pub(crate) fn new(a: &'m M, col: usize, lo: usize, hi: usize) -> Self {
        debug_assert!(lo <= hi && hi <= a.nrows() && col < a.ncols());
        Self {
            a,
            col,
            lo,
            len: hi - lo,
            _t: PhantomData,
        }
    }
}

impl<T, M: MatrixRef<T> + ?Sized> VectorRef<T> for ColumnRange<'_, T, M> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        self.a.get(self.lo + i, self.col)
    }
}

/// Main diagonal of any [`MatrixRef`], as a vector.
pub(crate) struct Diagonal<'m, T, M: ?Sized> {
    a: &'m M,
    _t: PhantomData<T>,
}

impl<'m, T, M: MatrixRef<T> + ?Sized> Diagonal<'m, T, M> {
    #[inline]
    pub(crate) fn new(a: &'m M) -> Self {
        Self { a, _t: PhantomData }
    }
}

impl<T, M: MatrixRef<T> + ?Sized> VectorRef<T> for Diagonal<'_, T, M> {
    #[inline]
    fn len(&self) -> usize {
        self.a.nrows().min(self.a.ncols())
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        self.a.get(i, i)
    }
}
