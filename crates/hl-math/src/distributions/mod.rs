//! Probability distributions.
//!
//! Only the Gaussian is needed: every stochastic quantity of the Ho-Lee
//! model is normally distributed.

pub mod normal;

pub use normal::NormalMoments;
