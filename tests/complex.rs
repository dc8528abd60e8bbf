#![cfg(feature = "complex")]

use genla::blas::{herk, herk_generic, herk_with, syrk_generic};
use genla::dispatch::{herk_native, Portable};
use genla::lapack::{lanhe, lanhe_work, lansy, potrf, potrs};
use genla::view::{MatrixView, MatrixViewMut};
use genla::{Complex, DynMatrix, Layout, Norm, Op, Uplo};
use proptest::prelude::*;

type C = Complex<f64>;

fn c(re: f64, im: f64) -> C {
    Complex::new(re, im)
}

const TOL: f64 = 1e-12;

fn assert_complex_near(a: C, b: C, tol: f64, msg: &str) {
    assert!(
        (a.re - b.re).abs() < tol && (a.im - b.im).abs() < tol,
        "{}: {:?} vs {:?}",
        msg,
        a,
        b
    );
}

fn complex_matrix() -> impl Strategy<Value = (usize, usize, Vec<C>)> {
    (1_usize..6, 0_usize..5).prop_flat_map(|(n, k)| {
        let entries = prop::collection::vec((-10.0_f64..10.0, -10.0_f64..10.0), n * k);
        (Just(n), Just(k), entries.prop_map(|v| v.into_iter().map(|(re, im)| c(re, im)).collect()))
    })
}

// ── Norms ────────────────────────────────────────────────────────────

#[test]
fn frobenius_of_upper_stored_hermitian() {
    // Strict lower holds garbage that must never be read.
    let a = DynMatrix::from_rows(2, 2, &[c(2.0, 0.0), c(1.0, 1.0), c(99.0, -7.0), c(3.0, 0.0)]);
    let fro = lanhe(Norm::Fro, Uplo::Upper, &a).unwrap();
    assert!((fro - 17.0_f64.sqrt()).abs() < TOL);
}

#[test]
fn hermitian_diagonal_imaginary_part_ignored() {
    // lanhe treats the diagonal as real; lansy takes full moduli.
    let a = DynMatrix::from_rows(1, 1, &[c(3.0, 4.0)]);
    assert_eq!(lanhe(Norm::Max, Uplo::Lower, &a).unwrap(), 3.0);
    assert_eq!(lansy(Norm::Max, Uplo::Lower, &a).unwrap(), 5.0);
}

#[test]
fn hermitian_one_norm_equals_inf_norm() {
    let a = DynMatrix::from_rows(
        3,
        3,
        &[
            c(4.0, 0.0), c(1.0, -2.0), c(0.0, 3.0),
            c(1.0, 2.0), c(5.0, 0.0), c(-2.0, 1.0),
            c(0.0, -3.0), c(-2.0, -1.0), c(6.0, 0.0),
        ],
    );
    let mut work = [0.0_f64; 3];
    let one = lanhe_work(Norm::One, Uplo::Lower, &a, &mut work[..]).unwrap();
    let inf = lanhe_work(Norm::Inf, Uplo::Upper, &a, &mut work[..]).unwrap();
    // Column 2: |3i| + |-2+i| + 6 = 9 + sqrt(5)
    let expected = 9.0 + 5.0_f64.sqrt();
    assert!((one - expected).abs() < TOL);
    assert!((inf - expected).abs() < TOL);
}

// ── Rank-k updates ──────────────────────────────────────────────────

#[test]
fn zherk_general_is_hermitian() {
    let a = DynMatrix::from_rows(3, 2, &[c(1.0, 2.0), c(0.0, -1.0), c(3.0, 0.5), c(-2.0, 1.0), c(0.5, 0.5), c(1.0, -3.0)]);
    let mut cm = DynMatrix::zeros(3, 3, c(0.0, 0.0));
    herk(Uplo::General, Op::NoTrans, 1.0, &a, 0.0, &mut cm).unwrap();
    let full = a.matmul(&a.adjoint());
    for i in 0..3 {
        assert_eq!(cm[(i, i)].im, 0.0);
        for j in 0..3 {
            assert_eq!(cm[(i, j)], cm[(j, i)].conj());
            assert_complex_near(cm[(i, j)], full[(i, j)], TOL, "herk vs A·Aᴴ");
        }
    }
}

#[test]
fn zherk_beta_drops_diagonal_imaginary_part() {
    let a = DynMatrix::zeros(2, 1, c(0.0, 0.0));
    let mut cm = DynMatrix::fill(2, 2, c(1.0, 5.0));
    herk_generic(Uplo::Lower, Op::NoTrans, 1.0, &a, 2.0, &mut cm).unwrap();
    assert_eq!(cm[(0, 0)], c(2.0, 0.0));
    assert_eq!(cm[(1, 0)], c(2.0, 10.0));
    assert_eq!(cm[(0, 1)], c(1.0, 5.0));
}

#[test]
fn zsyrk_differs_from_zherk() {
    let a = DynMatrix::from_rows(2, 1, &[c(0.0, 1.0), c(1.0, 1.0)]);
    let mut h = DynMatrix::zeros(2, 2, c(0.0, 0.0));
    let mut s = h.clone();
    herk_generic(Uplo::Upper, Op::NoTrans, 1.0, &a, 0.0, &mut h).unwrap();
    syrk_generic(Uplo::Upper, Op::NoTrans, c(1.0, 0.0), &a, c(0.0, 0.0), &mut s).unwrap();
    assert_eq!(h[(0, 1)], c(1.0, 1.0));
    assert_eq!(s[(0, 1)], c(-1.0, 1.0));
}

#[test]
fn portable_zherk_both_layouts() {
    // A is 3x2 with ld 4, C is 3x3 with ld 3, both in the same layout.
    let rows = [c(1.0, 2.0), c(0.0, -1.0), c(3.0, 0.5), c(-2.0, 1.0), c(0.5, 0.5), c(1.0, -3.0)];
    for layout in [Layout::RowMajor, Layout::ColMajor] {
        let mut a_buf = [c(0.0, 0.0); 12];
        for i in 0..3 {
            for j in 0..2 {
                a_buf[layout.index(i, j, 4)] = rows[i * 2 + j];
            }
        }
        let a = MatrixView::new(&a_buf, 3, 2, layout, 4);
        for uplo in [Uplo::Upper, Uplo::Lower] {
            let start: Vec<C> = (0..9).map(|v| c(v as f64, 0.0)).collect();
            let mut generic = start.clone();
            let mut native = start.clone();
            {
                let mut cg = MatrixViewMut::new(&mut generic, 3, 3, layout, 3);
                herk_generic(uplo, Op::NoTrans, 0.5, &a, 1.5, &mut cg).unwrap();
                let mut cn = MatrixViewMut::new(&mut native, 3, 3, layout, 3);
                assert!(herk_native(&Portable, uplo, Op::NoTrans, 0.5, &a, 1.5, &mut cn));
            }
            for (x, y) in generic.iter().zip(&native) {
                assert_complex_near(*x, *y, TOL, "portable vs generic");
            }
        }
    }
}

#[test]
fn mixed_layouts_fall_back() {
    let data = [c(1.0, 1.0), c(2.0, 0.0), c(0.0, -1.0), c(3.0, 2.0)];
    // Transposing a column-major view yields a row-major one.
    let a = MatrixView::new(&data, 2, 2, Layout::ColMajor, 2).transpose();
    let mut col = DynMatrix::zeros(2, 2, c(0.0, 0.0));
    assert!(!herk_native(&Portable, Uplo::Upper, Op::ConjTrans, 1.0, &a, 0.0, &mut col));

    let mut buf = [c(0.0, 0.0); 4];
    let mut row = MatrixViewMut::new(&mut buf, 2, 2, Layout::RowMajor, 2);
    assert!(herk_native(&Portable, Uplo::Upper, Op::ConjTrans, 1.0, &a, 0.0, &mut row));
    assert!(!herk_native(&Portable, Uplo::General, Op::ConjTrans, 1.0, &a, 0.0, &mut row));

    // The fallback still computes the right thing.
    herk_with(&Portable, Uplo::Upper, Op::ConjTrans, 1.0, &a, 0.0, &mut col).unwrap();
    // |1+i|² + |-i|²
    assert_eq!(col[(0, 0)], c(3.0, 0.0));
}

proptest! {
    #[test]
    fn general_update_is_exactly_hermitian((n, k, vals) in complex_matrix(), beta in -2.0_f64..2.0) {
        let a = DynMatrix::from_rows(n, k, &vals);
        // Hermitian-consistent starting C.
        let mut cm = DynMatrix::from_fn(n, n, |i, j| {
            let v = c((i * n + j) as f64, (i as f64) - (j as f64));
            if i == j { c(v.re, 0.0) } else { v }
        });
        herk(Uplo::General, Op::NoTrans, 1.0, &a, beta, &mut cm).unwrap();
        for i in 0..n {
            prop_assert_eq!(cm[(i, i)].im, 0.0);
            for j in 0..i {
                prop_assert_eq!(cm[(i, j)], cm[(j, i)].conj());
            }
        }
    }

    #[test]
    fn portable_matches_generic((n, k, vals) in complex_matrix(), alpha in -2.0_f64..2.0) {
        let a = DynMatrix::from_rows(k, n, &vals);
        for uplo in [Uplo::Upper, Uplo::Lower] {
            let mut g = DynMatrix::eye(n, c(0.0, 0.0));
            let mut p = g.clone();
            herk_generic(uplo, Op::ConjTrans, alpha, &a, 1.0, &mut g).unwrap();
            herk_with(&Portable, uplo, Op::ConjTrans, alpha, &a, 1.0, &mut p).unwrap();
            for (x, y) in g.as_slice().iter().zip(p.as_slice()) {
                prop_assert!((*x - *y).norm() < 1e-10);
            }
        }
    }
}

// ── Cholesky ────────────────────────────────────────────────────────

#[test]
fn hermitian_cholesky_solve() {
    let a0 = DynMatrix::from_rows(2, 2, &[c(4.0, 0.0), c(1.0, -1.0), c(1.0, 1.0), c(3.0, 0.0)]);
    let x = DynMatrix::from_rows(2, 1, &[c(1.0, -2.0), c(0.5, 3.0)]);
    let b = a0.matmul(&x);
    for uplo in [Uplo::Upper, Uplo::Lower] {
        let mut a = a0.clone();
        let mut rhs = b.clone();
        potrf(uplo, &mut a).unwrap();
        potrs(uplo, &a, &mut rhs).unwrap();
        for i in 0..2 {
            assert_complex_near(rhs[(i, 0)], x[(i, 0)], 1e-12, "potrs");
        }
    }
}
