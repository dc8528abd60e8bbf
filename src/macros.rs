// Internal macros. Declared first in lib.rs so every module sees them.

/// Trace-level event, compiled out without the `tracing` feature.
macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }};
}

/// Debug-level event, compiled out without the `tracing` feature.
macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    }};
}

/// Return `Err(Error::InvalidArgument)` from the enclosing function if
/// `cond` holds. The stringified condition and routine name become the
/// error message.
///
/// ```ignore
/// error_if!(nrows(c) != ncols(c), "herk");
/// ```
macro_rules! error_if {
    ($cond:expr, $routine:expr) => {
        if $cond {
            return Err($crate::error::Error::invalid(stringify!($cond), $routine));
        }
    };
}
