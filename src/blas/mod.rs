//! BLAS-style kernels.
//!
//! | Routine | Computes |
//! |---------|----------|
//! | [`herk`] | `C := α·A·Aᴴ + β·C` or `α·Aᴴ·A + β·C`, one triangle |
//! | [`syrk`] | `C := α·A·Aᵀ + β·C` or `α·Aᵀ·A + β·C`, one triangle |
//! | [`trsm`] | triangular solve with multiple right-hand sides |
//! | [`swap`] | exchange two vectors |
//!
//! `herk` and `syrk` come in three flavors: the plain entry point forwards
//! eligible calls to the [default backend](crate::dispatch::default_backend),
//! `*_with` takes the backend explicitly, and `*_generic` never dispatches.

mod herk;
mod swap;
mod syrk;
mod trsm;

pub use herk::{herk, herk_generic, herk_with};
pub use swap::swap;
pub use syrk::{syrk, syrk_generic, syrk_with};
pub use trsm::trsm;
