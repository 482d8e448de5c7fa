//! The imperative shell around the pure core.
//!
//! - **Host traits**: the style surface, environment and scheduler a tracker
//!   drives
//! - **Animations**: fixed settle-back and exit curves and their CSS values
//! - **Tracker**: turns touch samples into style writes and dismissals
//!
//! Everything runs on the host's single event loop. Animation completions
//! come back as [`AnimationTicket`]s; they cannot be cancelled, and a ticket
//! from a superseded gesture only resets the transition.

mod animation;
mod host;
mod tracker;

pub use animation::{
    translate_y, Animation, AnimationTicket, EASING, EXIT_DURATION, SETTLE_DURATION,
    TRANSITION_NONE,
};
pub use host::{Environment, Host, Scheduler, StyleProperty, StyleSurface, TouchSample};
pub use tracker::{DismissListener, StartOutcome, SwipeTracker};
