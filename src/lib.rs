//! # genla
//!
//! Generic dense linear-algebra kernels in the BLAS/LAPACK tradition, written
//! once for every element type and every storage layout. no-std compatible.
//!
//! ## Quick start
//!
//! ```
//! use genla::{DynMatrix, Norm, Op, Uplo};
//! use genla::blas::herk;
//! use genla::lapack::{lanhe, potrf, potrs};
//!
//! // C := A·Aᵀ + I is symmetric positive definite.
//! let a = DynMatrix::from_rows(3, 2, &[1.0_f64, 2.0, 0.0, 1.0, -1.0, 3.0]);
//! let mut c = DynMatrix::eye(3, 0.0);
//! herk(Uplo::Lower, Op::NoTrans, 1.0, &a, 1.0, &mut c).unwrap();
//!
//! let norm = lanhe(Norm::Max, Uplo::Lower, &c).unwrap();
//! assert_eq!(norm, 11.0);
//!
//! // Solve C·x = b through the Cholesky factor.
//! let mut b = DynMatrix::from_rows(3, 1, &[1.0, 2.0, 3.0]);
//! potrf(Uplo::Lower, &mut c).unwrap();
//! potrs(Uplo::Lower, &c, &mut b).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`traits`]: Element and storage traits:
//!   - [`Scalar`] / [`FloatScalar`] / [`LinalgScalar`]: element hierarchy.
//!     `LinalgScalar` covers real floats and complex numbers and exposes the
//!     associated real type used for norms and scaling factors.
//!   - [`MatrixRef`] / [`MatrixMut`]: element access by `(row, col)`;
//!     [`VectorRef`] / [`VectorMut`]: element access by index.
//!
//! - [`view`]: Borrowed views over caller storage: [`view::MatrixView`] in
//!   either layout with a leading dimension, [`view::VectorView`] with any
//!   non-zero stride (negative walks backwards), and [`view::BandView`] for
//!   LAPACK band storage.
//!
//! - [`dynmatrix`]: Owned column-major [`DynMatrix<T>`] (requires `alloc`).
//!
//! - [`lapack`]: Scaled sum of squares, Hermitian and symmetric norms,
//!   `lapy2`, `lascl`, Cholesky factorization and solve.
//!
//! - [`blas`]: `herk`, `syrk`, `trsm`, `swap`.
//!
//! - [`dispatch`]: The [`dispatch::Backend`] trait, the pure-Rust
//!   [`dispatch::Portable`] backend and the system CBLAS backend. Eligible
//!   `herk`/`syrk` calls are forwarded to a backend; everything else runs
//!   the generic kernels.
//!
//! - [`legacy`]: Flat-slice wrappers taking raw dimensions, leading
//!   dimensions and increments.
//!
//! ## Errors
//!
//! Argument checks return [`Error::InvalidArgument`] carrying the violated
//! condition and the routine name; the output operands are left untouched.
//! Numerical failures are reported as their own variants, e.g.
//! [`Error::NotPositiveDefinite`].
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`   | via std  | `DynMatrix` (heap-allocated, runtime-sized) |
//! | `complex` | yes      | `Complex<f32>` / `Complex<f64>` support via `num-complex` |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `cblas`   | no       | Forward eligible calls to a system CBLAS (`-lcblas`) |
//! | `tracing` | no       | Dispatch decisions as `tracing` events |
//! | `all`     | no       | `std` + `complex` + `tracing` |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[macro_use]
mod macros;

pub mod blas;
pub mod constants;
pub mod dispatch;
#[cfg(feature = "alloc")]
pub mod dynmatrix;
pub mod error;
pub mod lapack;
pub mod legacy;
pub mod traits;
pub mod types;
pub mod view;

#[cfg(feature = "alloc")]
pub use dynmatrix::DynMatrix;
pub use error::Error;
pub use traits::{
    FloatScalar, LinalgScalar, MachineParams, MatrixMut, MatrixRef, Scalar, VectorMut, VectorRef,
};
pub use types::{Diag, Direction, Layout, MatrixType, Norm, Op, Side, Uplo};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
