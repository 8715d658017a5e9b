//! Error types for holee.
//!
//! Every query in the workspace returns [`Result`].  Input validation goes
//! through the [`ensure_domain!`](crate::ensure_domain) macro, which returns
//! [`Error::Domain`] when a model parameter lies outside the region where
//! the closed-form moments are defined.

use thiserror::Error;

/// The top-level error type used throughout holee.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A model input lies outside its mathematical domain
    /// (negative volatility, negative time, maturity before observation).
    #[error("domain error: {0}")]
    Domain(String),

    /// Invalid argument to a helper that is not a model input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` if this is a [`Error::Domain`] error.
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain(_))
    }
}

/// Shorthand `Result` type used throughout holee.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Domain(...))` if `$cond` is false.
///
/// NaN inputs fail every ordered comparison, so a condition such as
/// `sigma >= 0.0` also rejects `sigma = NaN`.
///
/// # Example
/// ```
/// use hl_core::{ensure_domain, errors::Error};
/// fn non_negative(t: f64) -> hl_core::errors::Result<f64> {
///     ensure_domain!(t >= 0.0, "t must be non-negative, got {t}");
///     Ok(t)
/// }
/// assert!(non_negative(1.0).is_ok());
/// assert!(matches!(non_negative(-1.0), Err(Error::Domain(_))));
/// assert!(non_negative(f64::NAN).is_err());
/// ```
#[macro_export]
macro_rules! ensure_domain {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Domain(
                format!($($msg)*)
            ));
        }
    };
}
