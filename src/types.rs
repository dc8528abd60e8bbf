//! Selector enumerations shared by all kernels.
//!
//! Discriminants follow the CBLAS convention (101, 102, 111, ...) so the
//! values cast directly to `c_int` at the native backend boundary.

/// Memory layout of a dense matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Layout {
    /// Column-major (Fortran-style): elements in a column are contiguous.
    #[default]
    ColMajor = 102,
    /// Row-major (C-style): elements in a row are contiguous.
    RowMajor = 101,
}

impl Layout {
    /// Linear index of element `(i, j)` given the leading dimension `ld`.
    #[inline(always)]
    pub fn index(self, i: usize, j: usize, ld: usize) -> usize {
        match self {
            Layout::ColMajor => j * ld + i,
            Layout::RowMajor => i * ld + j,
        }
    }

    /// Smallest valid leading dimension for an `rows x cols` matrix.
    #[inline(always)]
    pub fn min_leading_dim(self, rows: usize, cols: usize) -> usize {
        match self {
            Layout::ColMajor => rows.max(1),
            Layout::RowMajor => cols.max(1),
        }
    }

    /// `(row_stride, col_stride)` for this layout.
    #[inline(always)]
    pub(crate) fn strides(self, ld: usize) -> (usize, usize) {
        match self {
            Layout::ColMajor => (1, ld),
            Layout::RowMajor => (ld, 1),
        }
    }
}

/// Which triangle of a symmetric/Hermitian matrix holds valid data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Uplo {
    /// Upper triangle, diagonal included.
    #[default]
    Upper = 121,
    /// Lower triangle, diagonal included.
    Lower = 122,
    /// Both triangles are read and both must be valid on output.
    General = 123,
}

/// Operation applied to a matrix operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Op {
    #[default]
    NoTrans = 111,
    Trans = 112,
    ConjTrans = 113,
}

/// Side of a triangular operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Side {
    #[default]
    Left = 141,
    Right = 142,
}

/// Whether a triangular matrix has an implicit unit diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum Diag {
    #[default]
    NonUnit = 131,
    Unit = 132,
}

/// Matrix norm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Norm {
    /// Largest absolute value. Not a consistent matrix norm.
    Max,
    /// Maximum column sum of absolute values.
    One,
    /// Maximum row sum of absolute values.
    Inf,
    /// Square root of the sum of squared absolute values.
    Fro,
}

/// Traversal direction of a vector view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Structure of a matrix operand for [`lascl`](crate::lapack::lascl).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixType {
    General,
    Lower,
    Upper,
    /// Upper Hessenberg: upper triangle plus the first subdiagonal.
    Hessenberg,
}

impl MatrixType {
    /// Row range `[start, end)` of column `j` in an `m`-row matrix.
    #[inline]
    pub(crate) fn col_rows(self, j: usize, m: usize) -> (usize, usize) {
        match self {
            MatrixType::General => (0, m),
            MatrixType::Lower => (j.min(m), m),
            MatrixType::Upper => (0, (j + 1).min(m)),
            MatrixType::Hessenberg => (0, (j + 2).min(m)),
        }
    }
}
