//! LAPACK-style auxiliary and factorization routines.
//!
//! | Routine | Computes |
//! |---------|----------|
//! | [`lassq`] | scaled sum of squares `scale² · sumsq` |
//! | [`lanhe`], [`lanhe_work`] | Hermitian matrix norm from one triangle |
//! | [`lansy`], [`lansy_work`] | symmetric matrix norm from one triangle |
//! | [`lapy2`] | `sqrt(x² + y²)` |
//! | [`lascl`] | `A · (a / b)` without over/underflow |
//! | [`potrf`] | Cholesky factorization |
//! | [`potrs`] | solve with a Cholesky factor |

mod lanhe;
mod lansy;
mod lapy2;
mod lascl;
mod lassq;
mod potrf;
mod potrs;

pub use lanhe::{lanhe, lanhe_work};
pub use lansy::{lansy, lansy_work};
pub use lapy2::lapy2;
pub use lascl::lascl;
pub use lassq::{lassq, lassq_with, ScaledSumSquares};
pub use potrf::potrf;
pub use potrs::potrs;
