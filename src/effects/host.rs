//! Host traits.
//!
//! The tracker never talks to a DOM or a toolkit directly. A host implements
//! these traits; the tracker is generic over anything that implements all
//! three.

use crate::core::{DeviceProfile, Viewport};
use crate::effects::animation::AnimationTicket;
use std::time::Duration;

/// Inline style properties the tracker writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    TouchAction,
    WebkitUserSelect,
    UserSelect,
    WillChange,
    Transform,
    Transition,
}

impl StyleProperty {
    /// CSS property name.
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::TouchAction => "touch-action",
            Self::WebkitUserSelect => "-webkit-user-select",
            Self::UserSelect => "user-select",
            Self::WillChange => "will-change",
            Self::Transform => "transform",
            Self::Transition => "transition",
        }
    }
}

/// The bound element's style.
pub trait StyleSurface {
    /// Set an inline style. An empty value removes the property.
    fn set_style(&mut self, property: StyleProperty, value: &str);

    /// Force a synchronous layout so the next transition starts from the
    /// styles written so far.
    fn flush_layout(&mut self);
}

/// Read-only facts about the host.
pub trait Environment {
    /// Handle for the element a touch started on.
    type Target;

    fn viewport(&self) -> Viewport;

    fn device(&self) -> DeviceProfile;

    /// Whether `target` lies inside the region named `region`.
    fn region_contains(&self, region: &str, target: &Self::Target) -> bool;
}

/// One-shot deferred callbacks.
///
/// The host must hand each ticket back through
/// [`SwipeTracker::complete_animation`](crate::effects::SwipeTracker::complete_animation)
/// once `delay` has elapsed. Tickets cannot be cancelled.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, ticket: AnimationTicket);
}

/// Everything a tracker needs from its host.
pub trait Host: StyleSurface + Environment + Scheduler {}

impl<T: StyleSurface + Environment + Scheduler> Host for T {}

/// One touch event as seen by the tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    /// Number of contacts currently on the surface.
    pub contacts: usize,
    /// Vertical coordinate of the first contact.
    pub client_y: f64,
}

impl TouchSample {
    /// A single-finger sample at `client_y`.
    pub fn single(client_y: f64) -> Self {
        Self {
            contacts: 1,
            client_y,
        }
    }

    pub fn is_single(&self) -> bool {
        self.contacts == 1
    }
}
