//! Configuration errors.

use thiserror::Error;

/// A single rule a configuration breaks.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("dismiss_threshold must be a finite number >= 0 (got {value})")]
    InvalidThreshold { value: f64 },

    #[error("max_drag_distance must be a finite number > 0 (got {value})")]
    InvalidMaxDrag { value: f64 },

    #[error("viewport breakpoint must be a finite number > 0 (got {value})")]
    InvalidBreakpoint { value: f64 },

    #[error("start region id must not be empty")]
    EmptyRegion,
}

/// Errors from building or loading a `SwipeConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse swipe configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid swipe configuration: {}", join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

impl ConfigError {
    /// Every violation found, empty for parse errors.
    pub fn violations(&self) -> &[ConfigViolation] {
        match self {
            Self::Invalid(violations) => violations,
            Self::Parse(_) => &[],
        }
    }
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_violation() {
        let error = ConfigError::Invalid(vec![
            ConfigViolation::InvalidMaxDrag { value: 0.0 },
            ConfigViolation::EmptyRegion,
        ]);

        assert_eq!(
            error.to_string(),
            "Invalid swipe configuration: max_drag_distance must be a finite number > 0 (got 0); \
             start region id must not be empty"
        );
        assert_eq!(error.violations().len(), 2);
    }

    #[test]
    fn parse_error_has_no_violations() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::from(parse);
        assert!(error.violations().is_empty());
        assert!(error.to_string().starts_with("Failed to parse swipe configuration"));
    }
}
