//! Swipe tracker: applies the pure core to a host.

use crate::builder::SwipeConfig;
use crate::core::{
    displayed_offset, visual_translation, Admission, DragState, GesturePhase, PhaseHistory,
    PhaseTransition, Release, State,
};
use crate::effects::animation::{translate_y, Animation, AnimationTicket, TRANSITION_NONE};
use crate::effects::host::{Host, StyleProperty, TouchSample};
use chrono::Utc;
use log::{debug, trace};

/// Callback run when a drag dismisses the element.
pub type DismissListener = Box<dyn FnMut()>;

/// What a drag start did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new gesture is being tracked.
    Tracking,
    /// The policy disabled this gesture; move and end are ignored.
    Disabled,
    /// The start landed outside the bounded region; nothing changed.
    OutsideRegion,
    /// More than one contact. A drag already in progress keeps going; only
    /// the policy flag may have been re-evaluated.
    MultiTouch,
}

/// Tracks swipe-down gestures on one host element.
///
/// All operations take `&mut self` and run on the host's event loop. None of
/// them fail: inputs that cannot be acted on are ignored.
///
/// # Example
///
/// ```rust
/// use swipedown::builder::SwipeConfig;
/// use swipedown::core::Release;
/// use swipedown::effects::{SwipeTracker, TouchSample};
/// use swipedown::testing::{NodeId, RecordingHost};
///
/// let mut tracker = SwipeTracker::attach(RecordingHost::phone(), SwipeConfig::default());
/// tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
/// tracker.on_drag_move(TouchSample::single(150.0));
///
/// assert_eq!(tracker.on_drag_end(), Some(Release::Dismiss));
/// ```
pub struct SwipeTracker<H: Host> {
    host: H,
    config: SwipeConfig,
    drag: DragState,
    phase: GesturePhase,
    gesture: u64,
    history: PhaseHistory<GesturePhase>,
    listeners: Vec<DismissListener>,
}

impl<H: Host> SwipeTracker<H> {
    /// Bind to `host` and apply the one-time style hints.
    pub fn attach(mut host: H, config: SwipeConfig) -> Self {
        if config.apply_gpu_hint {
            host.set_style(StyleProperty::WillChange, "transform");
        }
        host.set_style(StyleProperty::TouchAction, "none");
        host.set_style(StyleProperty::WebkitUserSelect, "none");
        host.set_style(StyleProperty::UserSelect, "none");

        debug!(
            "swipe tracker attached: threshold={} max_drag={} policy={}",
            config.dismiss_threshold,
            config.max_drag_distance,
            config.policy.name()
        );

        let history = PhaseHistory::with_capacity(config.history_capacity);
        Self {
            host,
            config,
            drag: DragState::default(),
            phase: GesturePhase::Idle,
            gesture: 0,
            history,
            listeners: Vec::new(),
        }
    }

    /// Drop all gesture state, clear the attach-time hints and return the host.
    ///
    /// Transform and transition are left as they are so an element that was
    /// just dismissed stays off screen.
    pub fn detach(mut self) -> H {
        if self.config.apply_gpu_hint {
            self.host.set_style(StyleProperty::WillChange, "");
        }
        self.host.set_style(StyleProperty::TouchAction, "");
        self.host.set_style(StyleProperty::WebkitUserSelect, "");
        self.host.set_style(StyleProperty::UserSelect, "");
        debug!("swipe tracker detached after {} gestures", self.gesture);
        self.host
    }

    /// Register a dismissal listener.
    pub fn on_dismiss<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Finger down on the element.
    pub fn on_drag_start(&mut self, sample: TouchSample, target: &H::Target) -> StartOutcome {
        let viewport = self.host.viewport();
        let device = self.host.device();
        let host = &self.host;
        let admission = self
            .config
            .policy
            .admit(viewport, &device, |region| host.region_contains(region, target));

        match admission {
            Admission::OutsideRegion => {
                trace!("drag start outside start region, ignored");
                return StartOutcome::OutsideRegion;
            }
            Admission::Disabled => {
                self.drag.disabled = true;
                debug!(
                    "swipe disabled by {} policy (viewport width {})",
                    self.config.policy.name(),
                    viewport.width
                );
                return StartOutcome::Disabled;
            }
            Admission::Enabled => self.drag.disabled = false,
        }

        if !sample.is_single() {
            trace!("drag start with {} contacts ignored", sample.contacts);
            return StartOutcome::MultiTouch;
        }

        self.drag.begin(sample.client_y);
        self.gesture += 1;
        self.host.set_style(StyleProperty::Transition, TRANSITION_NONE);
        self.enter(GesturePhase::Dragging);
        StartOutcome::Tracking
    }

    /// Finger moved. Returns the translation written, if any.
    pub fn on_drag_move(&mut self, sample: TouchSample) -> Option<f64> {
        if !self.drag.accepts_input() || !sample.is_single() {
            return None;
        }

        let offset = self.drag.update(sample.client_y);
        let translation = visual_translation(offset, self.config.max_drag_distance)?;
        trace!("drag offset {offset}, translating {translation}");
        self.host.set_style(StyleProperty::Transform, &translate_y(translation));
        Some(translation)
    }

    /// Finger lifted. Returns which animation ran, or `None` if the release
    /// was ignored.
    pub fn on_drag_end(&mut self) -> Option<Release> {
        if !self.drag.accepts_input() {
            return None;
        }

        let release = self.drag.release(self.config.dismiss_threshold);
        self.animate(Animation::from(release));

        if release == Release::Dismiss {
            debug!(
                "gesture {} dismissed at offset {}",
                self.gesture, self.drag.current_offset
            );
            for listener in &mut self.listeners {
                listener();
            }
        }
        Some(release)
    }

    /// Deferred completion of an animation.
    ///
    /// Always resets the transition and clears the animating flag, even for a
    /// ticket from a gesture that has since been superseded. A newer drag
    /// rewrites transition and transform on its own, so the stale reset is
    /// harmless.
    pub fn complete_animation(&mut self, ticket: AnimationTicket) {
        self.host.set_style(StyleProperty::Transition, TRANSITION_NONE);
        self.drag.animating = false;

        // A gesture runs at most one animation, so a current-gesture ticket
        // arriving in an animating phase is that animation's completion.
        if ticket.gesture == self.gesture && self.phase.is_animating() {
            self.enter(GesturePhase::Idle);
        } else {
            trace!(
                "stale {:?} completion from gesture {} (current {})",
                ticket.animation,
                ticket.gesture,
                self.gesture
            );
        }
    }

    /// Snap, flush, then transition to the animation's end position.
    fn animate(&mut self, animation: Animation) {
        let from = displayed_offset(self.drag.current_offset, self.config.max_drag_distance);
        let to = match animation {
            Animation::SettleBack => 0.0,
            Animation::ExitOut => self.host.viewport().height,
        };

        self.host.set_style(StyleProperty::Transition, TRANSITION_NONE);
        self.host.set_style(StyleProperty::Transform, &translate_y(from));
        self.host.flush_layout();
        self.host.set_style(StyleProperty::Transition, &animation.transition_value());
        self.host.set_style(StyleProperty::Transform, &translate_y(to));

        self.enter(animation.phase());
        self.host.schedule(
            animation.duration(),
            AnimationTicket {
                animation,
                gesture: self.gesture,
            },
        );
    }

    fn enter(&mut self, to: GesturePhase) {
        if self.phase == to {
            return;
        }
        debug!("gesture {}: {} -> {}", self.gesture, self.phase.name(), to.name());
        self.history.record(PhaseTransition {
            from: self.phase,
            to,
            timestamp: Utc::now(),
            gesture: self.gesture,
        });
        self.phase = to;
    }

    /// Current gesture phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Signed offset of the latest drag. Only meaningful while dragging; it
    /// keeps its last value until the next accepted start.
    pub fn current_offset(&self) -> f64 {
        self.drag.current_offset
    }

    /// Vertical coordinate where the latest accepted drag started.
    pub fn start_position(&self) -> f64 {
        self.drag.start_position
    }

    /// A finger is down and being tracked.
    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// A settle-back or exit animation has not completed yet (informational).
    pub fn is_animating(&self) -> bool {
        self.drag.animating
    }

    /// The policy disabled the current gesture.
    pub fn is_disabled(&self) -> bool {
        self.drag.disabled
    }

    /// Id of the latest accepted gesture; zero before the first one.
    pub fn gesture(&self) -> u64 {
        self.gesture
    }

    /// Recorded phase transitions (pure).
    pub fn history(&self) -> &PhaseHistory<GesturePhase> {
        &self.history
    }

    /// Configuration fixed at attach time.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The bound host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the bound host, e.g. for driving its timers.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
