//! Post-drag animations and the CSS values they write.

use crate::core::{GesturePhase, Release};
use std::time::Duration;

/// Settle-back duration.
pub const SETTLE_DURATION: Duration = Duration::from_millis(350);

/// Exit duration.
pub const EXIT_DURATION: Duration = Duration::from_millis(250);

/// Easing curve shared by both animations.
pub const EASING: &str = "cubic-bezier(.23,1.01,.32,1)";

/// Transition value that disables animation.
pub const TRANSITION_NONE: &str = "transform none";

/// Post-drag animation kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Animation {
    /// Back to translation 0.
    SettleBack,
    /// Down to the viewport height, off screen.
    ExitOut,
}

impl Animation {
    pub fn duration(&self) -> Duration {
        match self {
            Self::SettleBack => SETTLE_DURATION,
            Self::ExitOut => EXIT_DURATION,
        }
    }

    /// Phase the tracker is in while this animation runs.
    pub fn phase(&self) -> GesturePhase {
        match self {
            Self::SettleBack => GesturePhase::SettlingBack,
            Self::ExitOut => GesturePhase::ExitingOut,
        }
    }

    /// `transition` value that runs this animation, e.g.
    /// `transform 0.35s cubic-bezier(.23,1.01,.32,1)`.
    pub fn transition_value(&self) -> String {
        format!("transform {}s {}", self.duration().as_secs_f64(), EASING)
    }
}

impl From<Release> for Animation {
    fn from(release: Release) -> Self {
        match release {
            Release::SettleBack => Self::SettleBack,
            Release::Dismiss => Self::ExitOut,
        }
    }
}

/// Deferred completion handed to the host scheduler.
///
/// Tickets from superseded gestures still arrive; completing one only resets
/// the transition, which a newer drag overwrites anyway.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationTicket {
    pub animation: Animation,
    /// Id of the gesture whose release scheduled this ticket.
    pub gesture: u64,
}

/// `transform` value for a vertical translation.
pub fn translate_y(px: f64) -> String {
    format!("translateY({px}px)")
}
