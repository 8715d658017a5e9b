//! Ho-Lee short-rate model with constant futures quote and volatility.
//!
//! ```text
//! dr = θ(t) dt + σ dB
//! ```
//!
//! With the instantaneous futures rate held flat at `φ`, the drift that fits
//! the forward curve makes the short rate `r_t = φ + σ B_t`, and every
//! quantity below is available in closed form:
//!
//! * `D(t) = E[D_t] = exp(−φt + σ²t³/6)`
//! * `φ(t) − f(t) = σ²t²/2`
//! * `log D_t(u) = −φ(u−t) + σ²(u−t)³/6 − σ(u−t) B_t`
//! * `φ_t(u) − f_t(u) = σ²(u−t)²/2 − σ B_t`
//!
//! where `t` is the observation time and `u ≥ t` the maturity, both in
//! years from today.

use crate::short_rate_model::ShortRateModel;
use hl_core::{ensure_domain, DiscountFactor, Rate, Real, Result, Settings, Time, Volatility};
use hl_math::NormalMoments;
use tracing::{debug, trace};

/// Ho-Lee model parameters.
///
/// Parameters: `φ` (constant futures quote) and `σ` (short-rate
/// volatility).  Whether queries validate their inputs is controlled by the
/// model's [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoLee {
    phi: Rate,
    sigma: Volatility,
    settings: Settings,
}

impl HoLee {
    /// Create a model with default (strict) settings.
    ///
    /// Fails with a domain error if `sigma` is negative or NaN, or if `phi`
    /// is NaN.
    pub fn new(phi: Rate, sigma: Volatility) -> Result<Self> {
        Self::with_settings(phi, sigma, Settings::default())
    }

    /// Create a model with explicit settings.
    ///
    /// Under a permissive policy `phi` and `sigma` are accepted as given.
    pub fn with_settings(phi: Rate, sigma: Volatility, settings: Settings) -> Result<Self> {
        if settings.domain_policy().validates() {
            check_volatility(sigma)
                .and_then(|_| check_rate("futures quote", phi))
                .map_err(|e| {
                    debug!(phi, sigma, error = %e, "rejected Ho-Lee parameters");
                    e
                })?;
        }
        trace!(phi, sigma, policy = ?settings.domain_policy(), "Ho-Lee model");
        Ok(Self {
            phi,
            sigma,
            settings,
        })
    }

    /// Futures quote `φ`.
    pub fn phi(&self) -> Rate {
        self.phi
    }

    /// Volatility `σ`.
    pub fn sigma(&self) -> Volatility {
        self.sigma
    }

    /// Settings in effect for this model.
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Expected discount factor `D(t) = E[D_t] = exp(−φt + σ²t³/6)`.
    ///
    /// Overflow and underflow surface as `+∞` and `0`.
    pub fn expected_discount(&self, t: Time) -> Result<DiscountFactor> {
        self.validate_time("expected_discount", t)?;
        let s2 = self.sigma * self.sigma;
        Ok((-self.phi * t + s2 * t * t * t / 6.0).exp())
    }

    /// Convexity adjustment `φ(t) − f(t) = σ²t²/2`.
    ///
    /// This is the adjustment seen from today; see
    /// [`forward_convexity`](Self::forward_convexity) for the one observed
    /// at a future time.
    pub fn convexity(&self, t: Time) -> Result<Rate> {
        self.validate_time("convexity", t)?;
        Ok(self.sigma * self.sigma * t * t / 2.0)
    }

    /// Instantaneous forward rate `f(t) = φ − σ²t²/2`.
    pub fn forward_rate(&self, t: Time) -> Result<Rate> {
        Ok(self.phi - self.convexity(t)?)
    }

    /// Distribution of `log D_t(u)`.
    ///
    /// * mean `= −φ(u−t) + σ²(u−t)³/6`
    /// * std dev `= |σ(u−t)| √t`
    ///
    /// A zero-length interval `u = t` is the point mass at `0` for finite
    /// `t`; an infinite `t` gives NaN moments.
    pub fn log_discount(&self, t: Time, u: Time) -> Result<NormalMoments> {
        self.validate_interval("log_discount", t, u)?;
        let tau = u - t;
        if tau == 0.0 {
            return Ok(NormalMoments::point_mass(0.0));
        }
        let s2 = self.sigma * self.sigma;
        let mean = -self.phi * tau + s2 * tau * tau * tau / 6.0;
        let std_dev = (self.sigma * tau).abs() * t.sqrt();
        Ok(NormalMoments::new(mean, std_dev))
    }

    /// Distribution of the forward convexity `φ_t(u) − f_t(u)`.
    ///
    /// * mean `= σ²(u−t)²/2`
    /// * std dev `= |σ| √t`
    pub fn forward_convexity(&self, t: Time, u: Time) -> Result<NormalMoments> {
        self.validate_interval("forward_convexity", t, u)?;
        let tau = u - t;
        let mean = self.sigma * self.sigma * tau * tau / 2.0;
        let std_dev = self.sigma.abs() * t.sqrt();
        Ok(NormalMoments::new(mean, std_dev))
    }

    /// Expected discount factor from `t` to `u`, `E[D_t(u)]`.
    ///
    /// Equals `1` for `u = t` and [`expected_discount`](Self::expected_discount)`(u)`
    /// for `t = 0`.
    pub fn expected_forward_discount(&self, t: Time, u: Time) -> Result<DiscountFactor> {
        Ok(self.log_discount(t, u)?.expected_exp())
    }

    /// Distribution of the short rate `r_t`: mean `φ`, std dev `|σ| √t`.
    pub fn short_rate_distribution(&self, t: Time) -> Result<NormalMoments> {
        self.validate_time("short_rate_distribution", t)?;
        Ok(NormalMoments::new(self.phi, self.sigma.abs() * t.sqrt()))
    }

    fn validate_time(&self, operation: &'static str, t: Time) -> Result<()> {
        if !self.settings.domain_policy().validates() {
            return Ok(());
        }
        check_time(t).map_err(|e| {
            debug!(operation, t, error = %e, "rejected Ho-Lee inputs");
            e
        })
    }

    fn validate_interval(&self, operation: &'static str, t: Time, u: Time) -> Result<()> {
        if !self.settings.domain_policy().validates() {
            return Ok(());
        }
        check_interval(t, u).map_err(|e| {
            debug!(operation, t, u, error = %e, "rejected Ho-Lee inputs");
            e
        })
    }
}

impl ShortRateModel for HoLee {
    fn initial_rate(&self) -> Rate {
        self.phi
    }

    // Flat futures curve: θ(t) cancels the convexity drift.
    fn short_rate_drift(&self, _t: Time, _r: Rate) -> Real {
        0.0
    }

    fn short_rate_diffusion(&self, _t: Time, _r: Rate) -> Real {
        self.sigma
    }

    fn discount_bond(&self, t: Time, maturity: Time, r: Rate) -> Result<DiscountFactor> {
        self.validate_interval("discount_bond", t, maturity)?;
        if self.settings.domain_policy().validates() {
            check_rate("short rate", r).map_err(|e| {
                debug!(t, maturity, r, error = %e, "rejected Ho-Lee inputs");
                e
            })?;
        }
        let tau = maturity - t;
        let s2 = self.sigma * self.sigma;
        Ok((-r * tau + s2 * tau * tau * tau / 6.0).exp())
    }
}

fn check_volatility(sigma: Volatility) -> Result<()> {
    ensure_domain!(sigma >= 0.0, "volatility must be non-negative, got {sigma}");
    Ok(())
}

fn check_rate(name: &str, r: Rate) -> Result<()> {
    ensure_domain!(!r.is_nan(), "{name} must be a number, got {r}");
    Ok(())
}

fn check_time(t: Time) -> Result<()> {
    ensure_domain!(t >= 0.0, "time must be non-negative, got {t}");
    Ok(())
}

fn check_interval(t: Time, u: Time) -> Result<()> {
    check_time(t)?;
    ensure_domain!(u >= t, "maturity ({u}) must not precede observation time ({t})");
    Ok(())
}

// ── Free functions ───────────────────────────────────────────────────────────
//
// Single-shot forms of the model queries, validated with the default
// (strict) settings.

/// `E[D_t] = exp(−φt + σ²t³/6)`.
pub fn expected_discount(phi: Rate, sigma: Volatility, t: Time) -> Result<DiscountFactor> {
    HoLee::new(phi, sigma)?.expected_discount(t)
}

/// Convexity adjustment `σ²t²/2`.
pub fn convexity(sigma: Volatility, t: Time) -> Result<Rate> {
    HoLee::new(0.0, sigma)?.convexity(t)
}

/// Mean and standard deviation of `log D_t(u)`.
pub fn log_discount(phi: Rate, sigma: Volatility, t: Time, u: Time) -> Result<NormalMoments> {
    HoLee::new(phi, sigma)?.log_discount(t, u)
}

/// Mean and standard deviation of `φ_t(u) − f_t(u)`.
pub fn forward_convexity(sigma: Volatility, t: Time, u: Time) -> Result<NormalMoments> {
    HoLee::new(0.0, sigma)?.forward_convexity(t, u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use hl_core::{DomainPolicy, Error};
    use proptest::prelude::*;

    fn model(phi: Real, sigma: Real) -> HoLee {
        HoLee::new(phi, sigma).unwrap()
    }

    #[test]
    fn expected_discount_reference_value() {
        let d = expected_discount(0.05, 0.01, 2.0).unwrap();
        let expected = (-0.1_f64 + 0.0001 * 8.0 / 6.0).exp();
        assert_abs_diff_eq!(d, expected, epsilon = 1e-15);
        assert_abs_diff_eq!(d, 0.904_958, epsilon = 1e-6);
    }

    #[test]
    fn expected_discount_zero_vol_is_deterministic() {
        let m = model(0.04, 0.0);
        for t in [0.0, 0.5, 1.0, 7.25, 30.0] {
            assert_eq!(m.expected_discount(t).unwrap(), (-0.04 * t).exp());
        }
    }

    #[test]
    fn expected_discount_at_zero_is_one() {
        assert_eq!(model(0.05, 0.02).expected_discount(0.0).unwrap(), 1.0);
    }

    #[test]
    fn expected_discount_under_and_overflow() {
        assert_eq!(model(1.0, 0.0).expected_discount(1e4).unwrap(), 0.0);
        assert_eq!(model(-1.0, 0.0).expected_discount(1e4).unwrap(), f64::INFINITY);
    }

    #[test]
    fn convexity_reference_value() {
        assert_abs_diff_eq!(convexity(0.02, 3.0).unwrap(), 0.0018, epsilon = 1e-15);
    }

    #[test]
    fn convexity_vanishes() {
        assert_eq!(convexity(0.02, 0.0).unwrap(), 0.0);
        assert_eq!(convexity(0.0, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn forward_rate_plus_convexity_is_futures() {
        let m = model(0.045, 0.012);
        for t in [0.0, 1.0, 4.5, 10.0] {
            let f = m.forward_rate(t).unwrap();
            assert_abs_diff_eq!(m.phi() - f, m.convexity(t).unwrap(), epsilon = 1e-15);
        }
    }

    #[test]
    fn log_discount_reference_value() {
        let n = log_discount(0.03, 0.015, 1.0, 2.0).unwrap();
        assert_abs_diff_eq!(n.mean(), -0.029_962_5, epsilon = 1e-12);
        assert_abs_diff_eq!(n.std_dev(), 0.015, epsilon = 1e-15);
    }

    #[test]
    fn log_discount_zero_interval_is_exact() {
        for t in [0.0, 0.5, 3.0] {
            let n = log_discount(0.07, 0.3, t, t).unwrap();
            assert_eq!(n.to_array(), [0.0, 0.0]);
        }
    }

    #[test]
    fn log_discount_observed_today_has_no_spread() {
        let n = model(0.03, 0.02).log_discount(0.0, 5.0).unwrap();
        assert_eq!(n.std_dev(), 0.0);
        assert!(n.is_degenerate());
    }

    #[test]
    fn forward_convexity_reference_value() {
        let n = forward_convexity(0.015, 1.0, 2.0).unwrap();
        assert_abs_diff_eq!(n.mean(), 0.000_112_5, epsilon = 1e-15);
        assert_abs_diff_eq!(n.std_dev(), 0.015, epsilon = 1e-15);
    }

    #[test]
    fn forward_convexity_depends_on_interval_only() {
        let m = model(0.0, 0.02);
        let a = m.forward_convexity(1.0, 3.0).unwrap();
        let b = m.forward_convexity(4.0, 6.0).unwrap();
        assert_abs_diff_eq!(a.mean(), b.mean(), epsilon = 1e-15);
        assert!(b.std_dev() > a.std_dev());
        // Differs from the unconditional convexity at the same horizon.
        assert!((m.convexity(3.0).unwrap() - a.mean()).abs() > 1e-6);
    }

    #[test]
    fn expected_forward_discount_limits() {
        let m = model(0.03, 0.015);
        assert_eq!(m.expected_forward_discount(2.0, 2.0).unwrap(), 1.0);
        assert_relative_eq!(
            m.expected_forward_discount(0.0, 4.0).unwrap(),
            m.expected_discount(4.0).unwrap(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn expected_forward_discount_reference_value() {
        let d = model(0.03, 0.015).expected_forward_discount(1.0, 2.0).unwrap();
        let expected = (-0.03_f64 + 0.015 * 0.015 / 6.0 + 0.015 * 0.015 / 2.0).exp();
        assert_relative_eq!(d, expected, max_relative = 1e-14);
    }

    #[test]
    fn short_rate_model_traits() {
        let m = model(0.05, 0.01);
        let srm: &dyn ShortRateModel = &m;
        assert_eq!(srm.initial_rate(), 0.05);
        assert_eq!(srm.short_rate_drift(1.0, 0.07), 0.0);
        assert_eq!(srm.short_rate_diffusion(1.0, 0.07), 0.01);
    }

    #[test]
    fn discount_bond_at_futures_rate_matches_mean_log_discount() {
        let m = model(0.03, 0.015);
        let p = m.discount_bond(1.0, 2.0, 0.03).unwrap();
        let n = m.log_discount(1.0, 2.0).unwrap();
        assert_relative_eq!(p.ln(), n.mean(), max_relative = 1e-14);
        assert_eq!(m.discount_bond(1.0, 1.0, 0.2).unwrap(), 1.0);
    }

    #[test]
    fn short_rate_distribution_grows_with_time() {
        let m = model(0.05, 0.01);
        let n = m.short_rate_distribution(4.0).unwrap();
        assert_eq!(n.mean(), 0.05);
        assert_abs_diff_eq!(n.std_dev(), 0.02, epsilon = 1e-15);
        assert!(m.short_rate_distribution(0.0).unwrap().is_degenerate());
    }

    #[test]
    fn strict_rejects_negative_volatility() {
        let err = HoLee::new(0.05, -0.01).unwrap_err();
        assert!(matches!(err, Error::Domain(_)));
        assert!(convexity(-0.01, 1.0).is_err());
        assert!(HoLee::new(0.05, f64::NAN).is_err());
    }

    #[test]
    fn strict_rejects_nan_rates() {
        let err = HoLee::new(f64::NAN, 0.01).unwrap_err();
        assert!(err.is_domain());
        assert!(expected_discount(f64::NAN, 0.01, 1.0).unwrap_err().is_domain());
        assert!(log_discount(f64::NAN, 0.01, 1.0, 2.0).unwrap_err().is_domain());

        let m = model(0.05, 0.01);
        assert!(m.discount_bond(1.0, 2.0, f64::NAN).unwrap_err().is_domain());

        let loose = HoLee::with_settings(f64::NAN, 0.01, Settings::permissive()).unwrap();
        assert!(loose.expected_discount(1.0).unwrap().is_nan());
        assert!(loose.discount_bond(1.0, 2.0, f64::NAN).unwrap().is_nan());
    }

    #[test]
    fn strict_rejects_bad_times() {
        let m = model(0.05, 0.01);
        assert!(m.expected_discount(-1.0).unwrap_err().is_domain());
        assert!(m.convexity(-0.5).is_err());
        assert!(m.log_discount(-1.0, 2.0).is_err());
        assert!(m.log_discount(2.0, 1.0).is_err());
        assert!(m.forward_convexity(3.0, 1.0).is_err());
        assert!(m.discount_bond(2.0, 1.0, 0.05).is_err());
        assert!(m.expected_discount(f64::NAN).is_err());
    }

    #[test]
    fn permissive_evaluates_the_algebra() {
        let m = HoLee::with_settings(0.05, -0.01, Settings::permissive()).unwrap();
        assert_eq!(m.settings().domain_policy(), DomainPolicy::Permissive);
        assert_eq!(m.sigma(), -0.01);

        let n = m.log_discount(1.0, 2.0).unwrap();
        assert_abs_diff_eq!(n.std_dev(), 0.01, epsilon = 1e-15);

        assert!(m.log_discount(-1.0, 0.0).unwrap().std_dev().is_nan());
        assert!(m.forward_convexity(-1.0, 0.0).unwrap().std_dev().is_nan());
        assert_eq!(m.log_discount(-1.0, -1.0).unwrap().to_array(), [0.0, 0.0]);

        let backwards = m.log_discount(2.0, 1.0).unwrap();
        assert!(backwards.mean().is_finite());
    }

    proptest! {
        #[test]
        fn expected_discount_is_positive(
            phi in -0.2..0.2_f64,
            sigma in 0.0..0.5_f64,
            t in 0.0..30.0_f64,
        ) {
            prop_assert!(expected_discount(phi, sigma, t).unwrap() > 0.0);
        }

        #[test]
        fn expected_discount_increases_with_vol(
            phi in -0.2..0.2_f64,
            sigma in 0.0..0.5_f64,
            t in 0.1..30.0_f64,
        ) {
            let lo = expected_discount(phi, sigma, t).unwrap();
            let hi = expected_discount(phi, sigma + 0.01, t).unwrap();
            prop_assert!(hi >= lo);
        }

        #[test]
        fn expected_discount_decreases_with_futures_quote(
            phi in -0.2..0.2_f64,
            d in 0.0001..0.1_f64,
            sigma in 0.0..0.5_f64,
            t in 0.01..30.0_f64,
        ) {
            let lo = expected_discount(phi + d, sigma, t).unwrap();
            let hi = expected_discount(phi, sigma, t).unwrap();
            prop_assert!(lo <= hi);
        }

        // Holds while the forward rate f(t + dt) stays positive.
        #[test]
        fn expected_discount_decreases_with_time(
            phi in 0.001..0.2_f64,
            sigma in 0.0..0.05_f64,
            t in 0.0..10.0_f64,
            dt in 0.001..1.0_f64,
        ) {
            let m = model(phi, sigma);
            prop_assume!(m.forward_rate(t + dt).unwrap() > 1e-6);
            let near = m.expected_discount(t).unwrap();
            let far = m.expected_discount(t + dt).unwrap();
            prop_assert!(far <= near);
        }

        #[test]
        fn convexity_is_non_negative(sigma in 0.0..1.0_f64, t in 0.0..50.0_f64) {
            prop_assert!(convexity(sigma, t).unwrap() >= 0.0);
        }

        #[test]
        fn log_discount_std_dev_scaling(
            sigma in 0.001..0.5_f64,
            t in 0.01..20.0_f64,
            tau in 0.01..20.0_f64,
            k in 0.1..4.0_f64,
        ) {
            let base = log_discount(0.03, sigma, t, t + tau).unwrap().std_dev();
            let scaled_vol = log_discount(0.03, k * sigma, t, t + tau).unwrap().std_dev();
            prop_assert!((scaled_vol - k * base).abs() <= 1e-12 * (1.0 + k * base));

            let scaled_time = log_discount(0.03, sigma, k * t, k * t + tau).unwrap().std_dev();
            prop_assert!((scaled_time - k.sqrt() * base).abs() <= 1e-12 * (1.0 + base));
        }

        #[test]
        fn forward_convexity_today_has_no_spread(sigma in 0.0..1.0_f64, u in 0.0..50.0_f64) {
            prop_assert_eq!(forward_convexity(sigma, 0.0, u).unwrap().std_dev(), 0.0);
        }
    }
}
