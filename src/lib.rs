//! Swipedown: swipe-down-to-dismiss gesture tracking
//!
//! Swipedown follows a "pure core, imperative shell" layout. The drag
//! arithmetic, enablement policies and phase bookkeeping are pure functions
//! and values; a [`SwipeTracker`] applies them to a host element through a
//! small set of traits, so the same tracker drives a DOM binding, a native
//! toolkit, or the recording host used in tests.
//!
//! # Core Concepts
//!
//! - **Phases**: `Idle -> Dragging -> (SettlingBack | ExitingOut) -> Idle`
//! - **Policies**: device heuristic, bounded start region, viewport breakpoint
//! - **Hosts**: style surface + environment + scheduler
//! - **Config**: validated once, fixed for the attachment
//!
//! # Example
//!
//! ```rust
//! use swipedown::builder::SwipeConfig;
//! use swipedown::core::{GesturePhase, Release};
//! use swipedown::effects::{StyleProperty, SwipeTracker, TouchSample};
//! use swipedown::testing::{NodeId, RecordingHost};
//! use std::time::Duration;
//!
//! let config = SwipeConfig::builder()
//!     .dismiss_threshold(100.0)
//!     .max_drag_distance(400.0)
//!     .build()
//!     .unwrap();
//! let mut tracker = SwipeTracker::attach(RecordingHost::phone(), config);
//!
//! tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
//! tracker.on_drag_move(TouchSample::single(80.0));
//! assert_eq!(tracker.on_drag_end(), Some(Release::SettleBack));
//!
//! tracker.advance(Duration::from_millis(350));
//! assert_eq!(tracker.phase(), GesturePhase::Idle);
//! assert_eq!(
//!     tracker.host().style(StyleProperty::Transform),
//!     Some("translateY(0px)")
//! );
//! ```

pub mod builder;
pub mod core;
pub mod effects;
pub mod testing;

// Re-export commonly used types
pub use builder::{ConfigError, SwipeConfig};
pub use self::core::{EnablementPolicy, GesturePhase, Release, State};
pub use effects::{Host, StartOutcome, SwipeTracker, TouchSample};
