//! Gaussian moments.
//!
//! [`NormalMoments`] is the `(mean, standard deviation)` pair returned by
//! every distribution-valued model query.  Probability functions delegate to
//! the `statrs` crate's normal implementation, except for the degenerate
//! zero-variance case, which `statrs` does not represent and which is
//! handled here as a point mass.

use hl_core::{Error, Real, Result};
use statrs::distribution::{Continuous, ContinuousCDF, Normal};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean and standard deviation of a normally distributed random variable.
///
/// The standard deviation is never negative: constructors store its
/// absolute value.  A zero standard deviation denotes a point mass at the
/// mean.
///
/// With the `serde` feature the value is (de)serialised as the pair
/// `[mean, std_dev]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(Real, Real)", into = "(Real, Real)"))]
pub struct NormalMoments {
    mean: Real,
    std_dev: Real,
}

impl NormalMoments {
    /// Create from a mean and a standard deviation.
    ///
    /// The sign of `std_dev` is discarded.
    pub fn new(mean: Real, std_dev: Real) -> Self {
        Self {
            mean,
            std_dev: std_dev.abs(),
        }
    }

    /// A distribution concentrated at `value`.
    pub const fn point_mass(value: Real) -> Self {
        Self {
            mean: value,
            std_dev: 0.0,
        }
    }

    /// Mean.
    #[inline]
    pub fn mean(&self) -> Real {
        self.mean
    }

    /// Standard deviation (≥ 0, or NaN if it was built from NaN).
    #[inline]
    pub fn std_dev(&self) -> Real {
        self.std_dev
    }

    /// Variance `σ²`.
    #[inline]
    pub fn variance(&self) -> Real {
        self.std_dev * self.std_dev
    }

    /// Return `true` if the distribution is a point mass.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// `E[exp(N)] = exp(μ + σ²/2)`, the mean of the log-normal `exp(N)`.
    ///
    /// Overflows to `+∞` for large moments; that is the correct value in
    /// floating point and is not treated as an error.
    #[inline]
    pub fn expected_exp(&self) -> Real {
        (self.mean + self.std_dev * self.std_dev / 2.0).exp()
    }

    /// Probability density at `x`.
    ///
    /// A point mass has density `+∞` at its mean and `0` elsewhere.
    pub fn pdf(&self, x: Real) -> Real {
        if self.is_degenerate() {
            return if x == self.mean { Real::INFINITY } else { 0.0 };
        }
        self.distribution().map_or(Real::NAN, |d| d.pdf(x))
    }

    /// Cumulative distribution function `P(N ≤ x)`.
    pub fn cdf(&self, x: Real) -> Real {
        if self.is_degenerate() {
            return if x >= self.mean { 1.0 } else { 0.0 };
        }
        self.distribution().map_or(Real::NAN, |d| d.cdf(x))
    }

    /// Quantile function (inverse CDF).
    ///
    /// `p` must lie in `[0, 1]`; the endpoints map to `∓∞`.  Every quantile
    /// of a point mass is its mean.
    pub fn inverse_cdf(&self, p: Real) -> Result<Real> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidArgument(format!(
                "probability must be in [0, 1], got {p}"
            )));
        }
        if self.is_degenerate() {
            return Ok(self.mean);
        }
        Ok(self.distribution().map_or(Real::NAN, |d| d.inverse_cdf(p)))
    }

    /// `[mean, std_dev]`, the fixed two-element layout handed to callers
    /// that expect a numeric row.
    #[inline]
    pub fn to_array(&self) -> [Real; 2] {
        [self.mean, self.std_dev]
    }

    // `None` for the NaN parameters statrs rejects.
    fn distribution(&self) -> Option<Normal> {
        Normal::new(self.mean, self.std_dev).ok()
    }
}

impl From<NormalMoments> for (Real, Real) {
    fn from(n: NormalMoments) -> Self {
        (n.mean, n.std_dev)
    }
}

impl From<(Real, Real)> for NormalMoments {
    fn from((mean, std_dev): (Real, Real)) -> Self {
        Self::new(mean, std_dev)
    }
}

impl From<NormalMoments> for [Real; 2] {
    fn from(n: NormalMoments) -> Self {
        n.to_array()
    }
}

impl fmt::Display for NormalMoments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N({}, {})", self.mean, self.std_dev)
    }
}
