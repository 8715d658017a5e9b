//! # holee
//!
//! Closed-form moments of the Ho-Lee short-rate model: expected discount
//! factors, convexity adjustments, and the distribution of log discount
//! factors.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hl-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holee::models::HoLee;
//!
//! let model = HoLee::new(0.03, 0.015)?;
//! let log_d = model.log_discount(1.0, 2.0)?;
//! assert!((log_d.std_dev() - 0.015).abs() < 1e-15);
//!
//! // Out-of-domain inputs are reported, not evaluated.
//! assert!(model.log_discount(2.0, 1.0).is_err());
//! # Ok::<(), holee::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use hl_core as core;

/// Gaussian moments and probability functions.
pub use hl_math as math;

/// The Ho-Lee model.
pub use hl_models as models;

pub use hl_core::{DomainPolicy, Error, Result, Settings};
pub use hl_math::NormalMoments;
pub use hl_models::{
    convexity, expected_discount, forward_convexity, log_discount, HoLee, ShortRateModel,
};
