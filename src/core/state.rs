//! Gesture phases.
//!
//! A swipe tracker is always in exactly one phase. Phases are plain values:
//! inspecting them has no side effects, and they serialize so that a phase
//! history can be dumped for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values that name a position in a gesture lifecycle.
///
/// # Example
///
/// ```rust
/// use swipedown::core::{GesturePhase, State};
///
/// assert_eq!(GesturePhase::Dragging.name(), "Dragging");
/// assert!(GesturePhase::ExitingOut.is_animating());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Stable name for display and logging.
    fn name(&self) -> &str;

    /// A post-drag animation is in flight.
    ///
    /// Default implementation returns `false`.
    fn is_animating(&self) -> bool {
        false
    }
}

/// Phases of a single swipe-down gesture.
///
/// `Idle -> Dragging -> (SettlingBack | ExitingOut) -> Idle`. A new accepted
/// drag start enters `Dragging` from any phase. No phase is terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
    SettlingBack,
    ExitingOut,
}

impl State for GesturePhase {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging => "Dragging",
            Self::SettlingBack => "SettlingBack",
            Self::ExitingOut => "ExitingOut",
        }
    }

    fn is_animating(&self) -> bool {
        matches!(self, Self::SettlingBack | Self::ExitingOut)
    }
}

impl std::fmt::Display for GesturePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
