//! # hl-math
//!
//! Mathematical utilities for holee: Gaussian moments and their
//! probability functions (via statrs).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::NormalMoments;
