//! Model settings.
//!
//! [`Settings`] is a plain `Copy` value carried by each model instance
//! rather than a process-wide singleton, so every query stays a pure
//! function of its arguments.  Its only knob today is the
//! [`DomainPolicy`], which decides what happens when a caller passes
//! parameters outside the model's domain.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How out-of-domain inputs (negative volatility, negative time, maturity
/// before observation time) are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DomainPolicy {
    /// Validate inputs and return [`Error::Domain`](crate::Error::Domain).
    #[default]
    Strict,
    /// Evaluate the closed-form algebra regardless of the inputs, letting
    /// IEEE-754 arithmetic produce NaN or ±∞ where the formulas break down.
    Permissive,
}

impl DomainPolicy {
    /// Return `true` if inputs are validated.
    #[inline]
    pub fn validates(self) -> bool {
        matches!(self, DomainPolicy::Strict)
    }
}

/// Per-model configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    domain_policy: DomainPolicy,
}

impl Settings {
    /// Settings that validate every input (the default).
    pub const fn strict() -> Self {
        Self {
            domain_policy: DomainPolicy::Strict,
        }
    }

    /// Settings that skip validation entirely.
    pub const fn permissive() -> Self {
        Self {
            domain_policy: DomainPolicy::Permissive,
        }
    }

    /// Return a copy with the given domain policy.
    pub const fn with_domain_policy(self, domain_policy: DomainPolicy) -> Self {
        Self { domain_policy }
    }

    /// The active domain policy.
    pub fn domain_policy(&self) -> DomainPolicy {
        self.domain_policy
    }
}
