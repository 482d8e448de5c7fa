//! Configuration for swipe trackers.
//!
//! A [`SwipeConfig`] can be built fluently or loaded from JSON. Both paths
//! run the same validation, which reports every violation at once.

pub mod config;
pub mod error;
pub mod validation;

pub use config::{
    SwipeConfig, SwipeConfigBuilder, DEFAULT_DISMISS_THRESHOLD, DEFAULT_MAX_DRAG_DISTANCE,
};
pub use error::{ConfigError, ConfigViolation};
