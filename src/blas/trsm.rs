use crate::error::Error;
use crate::traits::{LinalgScalar, MatrixMut, MatrixRef};
use crate::types::{Diag, Op, Side, Uplo};

/// Triangular solve with multiple right-hand sides.
///
/// Overwrites `B` with the solution `X` of
///
/// - `op(A) · X = α · B` for [`Side::Left`], or
/// - `X · op(A) = α · B` for [`Side::Right`],
///
/// where `A` is triangular, stored in its `uplo` triangle. With
/// [`Diag::Unit`] the diagonal of `A` is assumed to be one and never read.
/// `α = 0` sets `B` to zero without reading `A`.
///
/// A singular `A` is not detected; the division produces Inf or NaN.
///
/// ```
/// use genla::{DynMatrix, Diag, Op, Side, Uplo};
/// use genla::blas::trsm;
///
/// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 0.0, 4.0]);
/// let mut b = DynMatrix::from_rows(2, 1, &[4.0, 8.0]);
/// trsm(Side::Left, Uplo::Upper, Op::NoTrans, Diag::NonUnit, 1.0, &a, &mut b).unwrap();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(1, 0)], 2.0);
/// ```
pub fn trsm<T, A, B>(
    side: Side,
    uplo: Uplo,
    op: Op,
    diag: Diag,
    alpha: T,
    a: &A,
    b: &mut B,
) -> Result<(), Error>
where
    T: LinalgScalar,
    A: MatrixRef<T> + ?Sized,
    B: MatrixMut<T> + ?Sized,
{
    let (m, n) = (b.nrows(), b.ncols());
    let k = if side == Side::Left { m } else { n };
    error_if!(uplo == Uplo::General, "trsm");
    error_if!(a.nrows() != a.ncols(), "trsm");
    error_if!(a.nrows() != k, "trsm");

    if m == 0 || n == 0 {
        return Ok(());
    }

    if alpha == T::zero() {
        for j in 0..n {
            for i in 0..m {
                *b.get_mut(i, j) = T::zero();
            }
        }
        return Ok(());
    }
    if alpha != T::one() {
        for j in 0..n {
            for i in 0..m {
                let v = b.get_mut(i, j);
                *v = alpha * *v;
            }
        }
    }

    // Element (i, j) of op(A).
    let opa = |i: usize, j: usize| -> T {
        match op {
            Op::NoTrans => *a.get(i, j),
            Op::Trans => *a.get(j, i),
            Op::ConjTrans => a.get(j, i).conj(),
        }
    };
    // op(A) is upper triangular iff exactly one of "stored upper" and
    // "transposed" holds.
    let upper = (uplo == Uplo::Upper) == (op == Op::NoTrans);
    let unit = diag == Diag::Unit;

    match side {
        Side::Left => {
            for c in 0..n {
                if upper {
                    for i in (0..m).rev() {
                        let mut s = *b.get(i, c);
                        for l in i + 1..m {
                            s = s - opa(i, l) * *b.get(l, c);
                        }
                        if !unit {
                            s = s / opa(i, i);
                        }
                        *b.get_mut(i, c) = s;
                    }
                } else {
                    for i in 0..m {
                        let mut s = *b.get(i, c);
                        for l in 0..i {
                            s = s - opa(i, l) * *b.get(l, c);
                        }
                        if !unit {
                            s = s / opa(i, i);
                        }
                        *b.get_mut(i, c) = s;
                    }
                }
            }
        }
        Side::Right => {
            for r in 0..m {
                if upper {
                    for j in 0..n {
                        let mut s = *b.get(r, j);
                        for l in 0..j {
                            s = s - *b.get(r, l) * opa(l, j);
                        }
                        if !unit {
                            s = s / opa(j, j);
                        }
                        *b.get_mut(r, j) = s;
                    }
                } else {
                    for j in (0..n).rev() {
                        let mut s = *b.get(r, j);
                        for l in j + 1..n {
                            s = s - *b.get(r, l) * opa(l, j);
                        }
                        if !unit {
                            s = s / opa(j, j);
                        }
                        *b.get_mut(r, j) = s;
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynmatrix::DynMatrix;

    fn lower3() -> DynMatrix<f64> {
        DynMatrix::from_rows(3, 3, &[2.0, 0.0, 0.0, 1.0, 3.0, 0.0, -1.0, 2.0, 4.0])
    }

    fn op_of(a: &DynMatrix<f64>, op: Op) -> DynMatrix<f64> {
        match op {
            Op::NoTrans => a.clone(),
            _ => a.adjoint(),
        }
    }

    fn assert_close(x: &DynMatrix<f64>, y: &DynMatrix<f64>) {
        for (u, v) in x.as_slice().iter().zip(y.as_slice()) {
            assert!((u - v).abs() < 1e-12, "{} vs {}", u, v);
        }
    }

    #[test]
    fn left_side_all_ops() {
        let l = lower3();
        let u = l.adjoint();
        let x = DynMatrix::from_rows(3, 2, &[1.0, -2.0, 0.5, 3.0, 2.0, 1.0]);
        for (a, uplo) in [(&l, Uplo::Lower), (&u, Uplo::Upper)] {
            for op in [Op::NoTrans, Op::Trans, Op::ConjTrans] {
                let mut b = op_of(a, op).matmul(&x);
                trsm(Side::Left, uplo, op, Diag::NonUnit, 1.0, a, &mut b).unwrap();
                assert_close(&b, &x);
            }
        }
    }

    #[test]
    fn right_side_all_ops() {
        let l = lower3();
        let u = l.adjoint();
        let x = DynMatrix::from_rows(2, 3, &[1.0, 0.5, 2.0, -2.0, 3.0, 1.0]);
        for (a, uplo) in [(&l, Uplo::Lower), (&u, Uplo::Upper)] {
            for op in [Op::NoTrans, Op::Trans] {
                let mut b = x.matmul(&op_of(a, op));
                trsm(Side::Right, uplo, op, Diag::NonUnit, 1.0, a, &mut b).unwrap();
                assert_close(&b, &x);
            }
        }
    }

    #[test]
    fn unit_diagonal_and_alpha() {
        // Diagonal entries are garbage and must not be read.
        let a = DynMatrix::from_rows(2, 2, &[f64::NAN, 0.0, 3.0, f64::NAN]);
        let mut b = DynMatrix::from_rows(2, 1, &[1.0, 5.0]);
        trsm(Side::Left, Uplo::Lower, Op::NoTrans, Diag::Unit, 2.0, &a, &mut b).unwrap();
        // x0 = 2, x1 = 10 - 3 * 2
        assert_eq!(b.as_slice(), &[2.0, 4.0]);

        trsm(Side::Left, Uplo::Lower, Op::NoTrans, Diag::Unit, 0.0, &a, &mut b).unwrap();
        assert_eq!(b.as_slice(), &[0.0, 0.0]);
    }

    #[test]
    fn argument_errors() {
        let a = lower3();
        let mut b = DynMatrix::zeros(2, 2, 0.0_f64);
        let err = trsm(Side::Left, Uplo::Lower, Op::NoTrans, Diag::NonUnit, 1.0, &a, &mut b);
        assert_eq!(err.unwrap_err().routine(), Some("trsm"));
        let mut b = DynMatrix::zeros(3, 1, 0.0_f64);
        assert!(trsm(Side::Left, Uplo::General, Op::NoTrans, Diag::NonUnit, 1.0, &a, &mut b).is_err());
        assert!(trsm(Side::Right, Uplo::Lower, Op::NoTrans, Diag::NonUnit, 1.0, &a, &mut b).is_err());
    }
}
