//! Pure gesture core.
//!
//! - Gesture phases via the `State` trait
//! - Drag arithmetic and the release decision
//! - Enablement policies and the device/viewport snapshots they read
//! - Bounded phase history
//!
//! Nothing in this module touches a host; see `effects` for that.

mod device;
mod drag;
mod history;
mod policy;
mod state;

pub use device::{DeviceProfile, Viewport, DESKTOP_MIN_WIDTH, DESKTOP_PLATFORM_MARKERS};
pub use drag::{displayed_offset, release_for, visual_translation, DragState, Release};
pub use history::{PhaseHistory, PhaseTransition, DEFAULT_HISTORY_CAPACITY};
pub use policy::{Admission, EnablementPolicy};
pub use state::{GesturePhase, State};
