//! Swipe configuration and its builder.

use crate::builder::error::ConfigError;
use crate::builder::validation::{validate, violations};
use crate::core::{EnablementPolicy, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};

/// Default minimum downward drag, in pixels, that dismisses.
pub const DEFAULT_DISMISS_THRESHOLD: f64 = 100.0;

/// Default maximum visual translation, in pixels.
pub const DEFAULT_MAX_DRAG_DISTANCE: f64 = 400.0;

/// Settings fixed for the lifetime of one attachment.
///
/// Missing JSON fields take their defaults.
///
/// # Example
///
/// ```rust
/// use swipedown::builder::SwipeConfig;
/// use swipedown::core::EnablementPolicy;
///
/// let config = SwipeConfig::from_json(
///     r#"{ "dismiss_threshold": 120, "policy": { "kind": "viewport_breakpoint", "width": 800 } }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.dismiss_threshold, 120.0);
/// assert_eq!(config.max_drag_distance, 400.0);
/// assert_eq!(config.policy, EnablementPolicy::ViewportBreakpoint { width: 800.0 });
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SwipeConfig {
    /// Offset strictly above this dismisses.
    pub dismiss_threshold: f64,
    /// Largest translation ever displayed.
    pub max_drag_distance: f64,
    /// Write `will-change: transform` on attach.
    pub apply_gpu_hint: bool,
    pub policy: EnablementPolicy,
    /// Phase transitions kept in the tracker's history.
    pub history_capacity: usize,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            dismiss_threshold: DEFAULT_DISMISS_THRESHOLD,
            max_drag_distance: DEFAULT_MAX_DRAG_DISTANCE,
            apply_gpu_hint: true,
            policy: EnablementPolicy::Unrestricted,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SwipeConfig {
    pub fn builder() -> SwipeConfigBuilder {
        SwipeConfigBuilder::new()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every rule and report all violations together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let check = validate(self);
        if check.is_success() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(violations(check)))
        }
    }
}

/// Fluent builder for [`SwipeConfig`].
///
/// The policy setters are single-select: the last one called wins.
#[derive(Clone, Debug, Default)]
pub struct SwipeConfigBuilder {
    config: SwipeConfig,
}

impl SwipeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismiss_threshold(mut self, pixels: f64) -> Self {
        self.config.dismiss_threshold = pixels;
        self
    }

    pub fn max_drag_distance(mut self, pixels: f64) -> Self {
        self.config.max_drag_distance = pixels;
        self
    }

    pub fn apply_gpu_hint(mut self, enabled: bool) -> Self {
        self.config.apply_gpu_hint = enabled;
        self
    }

    pub fn policy(mut self, policy: EnablementPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Disable on desktop and hybrid devices.
    pub fn disable_on_desktop(self) -> Self {
        self.policy(EnablementPolicy::DeviceHeuristic)
    }

    /// Only track drags that start inside `region`.
    pub fn start_region(self, region: impl Into<String>) -> Self {
        self.policy(EnablementPolicy::StartRegion {
            region: region.into(),
        })
    }

    /// Disable while the viewport is at least `width` wide.
    pub fn desktop_breakpoint(self, width: f64) -> Self {
        self.policy(EnablementPolicy::ViewportBreakpoint { width })
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SwipeConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
