//! Configuration rules using Validation.
//!
//! Every rule runs; a configuration with three problems reports three
//! violations instead of stopping at the first.

use crate::builder::config::SwipeConfig;
use crate::builder::error::ConfigViolation;
use crate::core::EnablementPolicy;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single configuration rule.
pub type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Run all rules, accumulating every violation.
pub fn validate(config: &SwipeConfig) -> Check {
    let checks: Vec<Check> = vec![
        check_threshold(config.dismiss_threshold),
        check_max_drag(config.max_drag_distance),
        check_policy(&config.policy),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of a failed check.
pub fn violations(check: Check) -> Vec<ConfigViolation> {
    match check {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn check_threshold(value: f64) -> Check {
    if value.is_finite() && value >= 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::InvalidThreshold { value })
    }
}

fn check_max_drag(value: f64) -> Check {
    if value.is_finite() && value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::InvalidMaxDrag { value })
    }
}

fn check_policy(policy: &EnablementPolicy) -> Check {
    match policy {
        EnablementPolicy::ViewportBreakpoint { width } if !(width.is_finite() && *width > 0.0) => {
            Validation::fail(ConfigViolation::InvalidBreakpoint { value: *width })
        }
        EnablementPolicy::StartRegion { region } if region.trim().is_empty() => {
            Validation::fail(ConfigViolation::EmptyRegion)
        }
        _ => Validation::success(()),
    }
}
