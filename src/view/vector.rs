use core::ops::{Index, IndexMut, Range};

use crate::error::Error;
use crate::traits::{VectorMut, VectorRef};
use crate::types::Direction;

#[inline(always)]
fn at(start: usize, stride: isize, i: usize) -> usize {
    (start as isize + i as isize * stride) as usize
}

/// Position of element 0 for a legacy `(n, inc)` vector: with a negative
/// increment the first logical element is the last one in memory.
#[inline]
fn legacy_start(len: usize, inc: isize) -> usize {
    if inc > 0 || len == 0 {
        0
    } else {
        (len - 1) * inc.unsigned_abs()
    }
}

#[inline]
fn required_len(len: usize, inc: isize) -> usize {
    if len == 0 {
        0
    } else {
        (len - 1) * inc.unsigned_abs() + 1
    }
}

/// Read-only strided vector view.
///
/// Element `i` lives at `data[start + i * stride]`. A negative stride walks
/// the storage backwards without copying.
///
/// ```
/// use genla::view::VectorView;
/// use genla::VectorRef;
///
/// let buf = [1.0, 2.0, 3.0, 4.0, 5.0];
/// // BLAS convention: incx = -2 visits x[4], x[2], x[0]
/// let x = VectorView::new(&buf, 3, -2).unwrap();
/// assert_eq!(*x.get(0), 5.0);
/// assert_eq!(*x.get(2), 1.0);
/// ```
#[derive(Debug)]
pub struct VectorView<'a, T> {
    data: &'a [T],
    start: usize,
    len: usize,
    stride: isize,
}

impl<T> Clone for VectorView<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VectorView<'_, T> {}

impl<'a, T> VectorView<'a, T> {
    /// Wrap `len` elements of `data` spaced `inc` apart.
    ///
    /// Follows the BLAS convention for negative increments: element 0 is
    /// `data[(len - 1) * |inc|]`. A zero increment or a slice too short for
    /// `(len, inc)` is an [`Error::InvalidArgument`].
    pub fn new(data: &'a [T], len: usize, inc: isize) -> Result<Self, Error> {
        error_if!(inc == 0, "VectorView::new");
        error_if!(data.len() < required_len(len, inc), "VectorView::new");
        Ok(Self {
            data,
            start: legacy_start(len, inc),
            len,
            stride: inc,
        })
    }

    /// Contiguous view over the whole slice.
    #[inline]
    pub fn from_slice(data: &'a [T]) -> Self {
        Self {
            data,
            start: 0,
            len: data.len(),
            stride: 1,
        }
    }

    #[inline]
    pub(crate) fn from_raw(data: &'a [T], start: usize, len: usize, stride: isize) -> Self {
        Self {
            data,
            start,
            len,
            stride,
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Signed distance between consecutive elements.
    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    /// Traversal direction over the underlying storage.
    #[inline]
    pub fn direction(&self) -> Direction {
        if self.stride < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Elements `lo..hi`, aliasing the same storage.
    #[inline]
    pub fn subvector(&self, range: Range<usize>) -> VectorView<'a, T> {
        assert!(range.start <= range.end && range.end <= self.len, "subvector out of range");
        VectorView {
            data: self.data,
            start: at(self.start, self.stride, range.start),
            len: range.end - range.start,
            stride: self.stride,
        }
    }

    /// The same elements in reverse order.
    #[inline]
    pub fn reversed(&self) -> VectorView<'a, T> {
        if self.len == 0 {
            return *self;
        }
        VectorView {
            data: self.data,
            start: at(self.start, self.stride, self.len - 1),
            len: self.len,
            stride: -self.stride,
        }
    }

    /// Iterate over the elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let (data, start, stride) = (self.data, self.start, self.stride);
        (0..self.len).map(move |i| &data[at(start, stride, i)])
    }
}

impl<T> VectorRef<T> for VectorView<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self.data[at(self.start, self.stride, i)]
    }
}

impl<T> Index<usize> for VectorView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[at(self.start, self.stride, i)]
    }
}

/// Mutable strided vector view. See [`VectorView`].
#[derive(Debug)]
pub struct VectorViewMut<'a, T> {
    data: &'a mut [T],
    start: usize,
    len: usize,
    stride: isize,
}

impl<'a, T> VectorViewMut<'a, T> {
    /// Wrap `len` elements of `data` spaced `inc` apart. See [`VectorView::new`].
    pub fn new(data: &'a mut [T], len: usize, inc: isize) -> Result<Self, Error> {
        error_if!(inc == 0, "VectorViewMut::new");
        error_if!(data.len() < required_len(len, inc), "VectorViewMut::new");
        Ok(Self {
            start: legacy_start(len, inc),
            data,
            len,
            stride: inc,
        })
    }

    /// Contiguous view over the whole slice.
    #[inline]
    pub fn from_slice(data: &'a mut [T]) -> Self {
        let len = data.len();
        Self {
            data,
            start: 0,
            len,
            stride: 1,
        }
    }

    #[inline]
    pub(crate) fn from_raw(data: &'a mut [T], start: usize, len: usize, stride: isize) -> Self {
        Self {
            data,
            start,
            len,
            stride,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn stride(&self) -> isize {
        self.stride
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        if self.stride < 0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Shared reborrow.
    #[inline]
    pub fn rb(&self) -> VectorView<'_, T> {
        VectorView::from_raw(&*self.data, self.start, self.len, self.stride)
    }

    /// Mutable reborrow with a shorter lifetime.
    #[inline]
    pub fn rb_mut(&mut self) -> VectorViewMut<'_, T> {
        VectorViewMut::from_raw(&mut *self.data, self.start, self.len, self.stride)
    }

    /// Elements `lo..hi`, aliasing the same storage.
    #[inline]
    pub fn subvector_mut(&mut self, range: Range<usize>) -> VectorViewMut<'_, T> {
        assert!(range.start <= range.end && range.end <= self.len, "subvector out of range");
        VectorViewMut::from_raw(
            &mut *self.data,
            at(self.start, self.stride, range.start),
            range.end - range.start,
            self.stride,
        )
    }

    /// Consume the view and return the same elements in reverse order.
    #[inline]
    pub fn into_reversed(self) -> VectorViewMut<'a, T> {
        if self.len == 0 {
            return self;
        }
        let start = at(self.start, self.stride, self.len - 1);
        VectorViewMut::from_raw(self.data, start, self.len, -self.stride)
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Copy,
    {
        for i in 0..self.len {
            self.data[at(self.start, self.stride, i)] = value;
        }
    }
}

impl<T> VectorRef<T> for VectorViewMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, i: usize) -> &T {
        &self.data[at(self.start, self.stride, i)]
    }
}

impl<T> VectorMut<T> for VectorViewMut<'_, T> {
    #[inline]
    fn get_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[at(self.start, self.stride, i)]
    }
}

impl<T> Index<usize> for VectorViewMut<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[at(self.start, self.stride, i)]
    }
}

impl<T> IndexMut<usize> for VectorViewMut<'_, T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[at(self.start, self.stride, i)]
    }
}
