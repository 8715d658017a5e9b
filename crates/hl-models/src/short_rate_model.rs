//! Short-rate model trait.
//!
//! A one-factor short-rate model with dynamics
//!
//! ```text
//! dr = μ(t, r) dt + σ(t, r) dW
//! ```
//!
//! and a closed-form zero-coupon bond price conditional on the short rate.

use hl_core::{DiscountFactor, Rate, Real, Result, Time};

/// A one-factor short-rate model.
pub trait ShortRateModel {
    /// Short rate at time zero, `r₀`.
    fn initial_rate(&self) -> Rate;

    /// Instantaneous drift `μ(t, r)`.
    fn short_rate_drift(&self, t: Time, r: Rate) -> Real;

    /// Instantaneous diffusion `σ(t, r)`.
    fn short_rate_diffusion(&self, t: Time, r: Rate) -> Real;

    /// Price at time `t` of a zero-coupon bond maturing at `maturity`,
    /// given the short rate `r` observed at `t`.
    fn discount_bond(&self, t: Time, maturity: Time, r: Rate) -> Result<DiscountFactor>;
}
