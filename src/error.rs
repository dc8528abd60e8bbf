/// Errors reported by the kernels.
///
/// Every fallible kernel validates its arguments before touching any
/// output, so an `Err` always means the outputs are unchanged.
///
/// ```
/// use genla::{DynMatrix, Error, Op, Uplo};
/// use genla::blas::herk;
///
/// let a = DynMatrix::from_rows(2, 1, &[1.0_f64, 1.0]);
/// let mut c = DynMatrix::zeros(3, 3, 0.0_f64);
/// let err = herk(Uplo::Upper, Op::NoTrans, 1.0, &a, 0.0, &mut c).unwrap_err();
/// assert_eq!(err.routine(), Some("herk"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An argument failed validation before any computation started.
    InvalidArgument {
        /// The violated condition, as written in the source.
        condition: &'static str,
        /// Name of the routine that rejected the call.
        routine: &'static str,
    },
    /// The leading minor ending at this (zero-based) column is not
    /// positive definite, so the Cholesky factorization could not finish.
    NotPositiveDefinite(usize),
}

impl Error {
    /// Build an argument error. This is the single reporting entry point
    /// used by every kernel.
    #[inline]
    pub fn invalid(condition: &'static str, routine: &'static str) -> Self {
        debug!(condition, routine, "argument check failed");
        Error::InvalidArgument { condition, routine }
    }

    /// The routine that raised the error, if it was an argument error.
    pub fn routine(&self) -> Option<&'static str> {
        match self {
            Error::InvalidArgument { routine, .. } => Some(routine),
            Error::NotPositiveDefinite(_) => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument { condition, routine } => {
                write!(f, "{}, in function {}", condition, routine)
            }
            Error::NotPositiveDefinite(j) => {
                write!(f, "matrix is not positive definite (column {})", j)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(n: usize) -> Result<(), Error> {
        error_if!(n == 0, "check");
        Ok(())
    }

    #[test]
    fn error_if_reports_condition() {
        let err = check(0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                condition: "n == 0",
                routine: "check"
            }
        );
        assert!(check(1).is_ok());
    }

    #[cfg(feature = "std")]
    #[test]
    fn display() {
        let err = Error::invalid("incx == 0", "swap");
        assert_eq!(err.to_string(), "incx == 0, in function swap");
        assert_eq!(
            Error::NotPositiveDefinite(2).to_string(),
            "matrix is not positive definite (column 2)"
        );
    }
}
