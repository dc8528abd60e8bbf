//! System CBLAS backend.
//!
//! Raw declarations map 1:1 to `cblas.h`. Selector enums are `#[repr(u32)]`
//! with CBLAS values, so they cast directly to `c_int`.

use core::ffi::{c_double, c_float, c_int};
#[cfg(feature = "complex")]
use core::ffi::c_void;

#[cfg(feature = "complex")]
use num_complex::Complex;

use super::Backend;
use crate::types::{Layout, Op, Uplo};

#[link(name = "cblas")]
extern "C" {
    fn cblas_ssyrk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_float,
        a: *const c_float,
        lda: c_int,
        beta: c_float,
        c: *mut c_float,
        ldc: c_int,
    );
    fn cblas_dsyrk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_double,
        a: *const c_double,
        lda: c_int,
        beta: c_double,
        c: *mut c_double,
        ldc: c_int,
    );
}

#[cfg(feature = "complex")]
#[link(name = "cblas")]
extern "C" {
    fn cblas_cherk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_float,
        a: *const c_void,
        lda: c_int,
        beta: c_float,
        c: *mut c_void,
        ldc: c_int,
    );
    fn cblas_zherk(
        layout: c_int,
        uplo: c_int,
        trans: c_int,
        n: c_int,
        k: c_int,
        alpha: c_double,
        a: *const c_void,
        lda: c_int,
        beta: c_double,
        c: *mut c_void,
        ldc: c_int,
    );
}

/// Backend forwarding to a system CBLAS (`-lcblas`).
///
/// Dimensions are passed as `c_int`. [`Backend::max_dim`] caps them at
/// `c_int::MAX`, so larger calls never reach the FFI.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cblas;

impl Backend for Cblas {
    fn name(&self) -> &'static str {
        "cblas"
    }

    fn max_dim(&self) -> usize {
        c_int::MAX as usize
    }

    fn ssyrk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f32,
        a: &[f32],
        lda: usize,
        beta: f32,
        c: &mut [f32],
        ldc: usize,
    ) {
        unsafe {
            cblas_ssyrk(
                layout as c_int,
                uplo as c_int,
                op as c_int,
                n as c_int,
                k as c_int,
                alpha,
                a.as_ptr(),
                lda as c_int,
                beta,
                c.as_mut_ptr(),
                ldc as c_int,
            );
        }
    }

    fn dsyrk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[f64],
        lda: usize,
        beta: f64,
        c: &mut [f64],
        ldc: usize,
    ) {
        unsafe {
            cblas_dsyrk(
                layout as c_int,
                uplo as c_int,
                op as c_int,
                n as c_int,
                k as c_int,
                alpha,
                a.as_ptr(),
                lda as c_int,
                beta,
                c.as_mut_ptr(),
                ldc as c_int,
            );
        }
    }

    #[cfg(feature = "complex")]
    fn cherk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f32,
        a: &[Complex<f32>],
        lda: usize,
        beta: f32,
        c: &mut [Complex<f32>],
        ldc: usize,
    ) {
        // Complex<T> is #[repr(C)] { re, im }, the CBLAS complex layout.
        unsafe {
            cblas_cherk(
                layout as c_int,
                uplo as c_int,
                op as c_int,
                n as c_int,
                k as c_int,
                alpha,
                a.as_ptr() as *const c_void,
                lda as c_int,
                beta,
                c.as_mut_ptr() as *mut c_void,
                ldc as c_int,
            );
        }
    }

    #[cfg(feature = "complex")]
    fn zherk(
        &self,
        layout: Layout,
        uplo: Uplo,
        op: Op,
        n: usize,
        k: usize,
        alpha: f64,
        a: &[Complex<f64>],
        lda: usize,
        beta: f64,
        c: &mut [Complex<f64>],
        ldc: usize,
    ) {
        unsafe {
            cblas_zherk(
                layout as c_int,
                uplo as c_int,
                op as c_int,
                n as c_int,
                k as c_int,
                alpha,
                a.as_ptr() as *const c_void,
                lda as c_int,
                beta,
                c.as_mut_ptr() as *mut c_void,
                ldc as c_int,
            );
        }
    }
}
