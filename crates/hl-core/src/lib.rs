//! # hl-core
//!
//! Core types, error definitions, and settings for holee.
//!
//! This crate provides the building blocks shared by the other crates in
//! the workspace: primitive type aliases, the error type with its
//! `ensure_domain!` macro, and the per-model [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure_domain!` macro.
pub mod errors;

/// Per-model settings (domain policy).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor, normally in (0, 1].
pub type DiscountFactor = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{DomainPolicy, Settings};
