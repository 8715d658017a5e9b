//! # hl-models
//!
//! Closed-form Ho-Lee short-rate model moments.
//!
//! ```text
//! ShortRateModel
//! └── HoLee   (constant futures quote φ, constant volatility σ)
//! ```
//!
//! Every query is a pure function of its arguments and returns
//! [`hl_core::Result`]; a model's [`hl_core::Settings`] decide whether
//! out-of-domain inputs are rejected or evaluated as-is.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Infrastructure ───────────────────────────────────────────────────────
pub mod short_rate_model;

// ── One-factor short-rate models ─────────────────────────────────────────
pub mod ho_lee;

// ── Re-exports ───────────────────────────────────────────────────────────
pub use ho_lee::{convexity, expected_discount, forward_convexity, log_discount, HoLee};
pub use short_rate_model::ShortRateModel;
