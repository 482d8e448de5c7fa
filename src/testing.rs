//! In-memory host for tests and demos.
//!
//! [`RecordingHost`] keeps every style write in order, counts layout flushes,
//! and runs scheduled animation tickets on a virtual clock that only moves
//! when [`RecordingHost::advance`] is called.

use crate::core::{DeviceProfile, Viewport};
use crate::effects::{AnimationTicket, Environment, Scheduler, StyleProperty, StyleSurface, SwipeTracker};
use std::collections::{HashMap, HashSet};
use std::time::Duration;

/// Element handle used as a touch target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// One recorded `set_style` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleWrite {
    pub property: StyleProperty,
    pub value: String,
}

#[derive(Clone, Debug)]
struct PendingTimer {
    due: Duration,
    seq: u64,
    ticket: AnimationTicket,
}

/// Host that records instead of rendering.
#[derive(Clone, Debug)]
pub struct RecordingHost {
    viewport: Viewport,
    device: DeviceProfile,
    regions: HashMap<String, HashSet<NodeId>>,
    writes: Vec<StyleWrite>,
    flush_marks: Vec<usize>,
    now: Duration,
    timers: Vec<PendingTimer>,
    next_seq: u64,
}

impl RecordingHost {
    pub fn new(viewport: Viewport, device: DeviceProfile) -> Self {
        Self {
            viewport,
            device,
            regions: HashMap::new(),
            writes: Vec::new(),
            flush_marks: Vec::new(),
            now: Duration::ZERO,
            timers: Vec::new(),
            next_seq: 0,
        }
    }

    /// A 390x844 touch phone.
    pub fn phone() -> Self {
        Self::new(
            Viewport::new(390.0, 844.0),
            DeviceProfile::new(
                5,
                "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15",
            ),
        )
    }

    /// A 1440x900 Windows machine without touch.
    pub fn desktop() -> Self {
        Self::new(
            Viewport::new(1440.0, 900.0),
            DeviceProfile::new(0, "Mozilla/5.0 (Windows NT 10.0; Win64; x64)"),
        )
    }

    /// Declare `nodes` as lying inside `region`.
    pub fn with_region<I>(mut self, region: &str, nodes: I) -> Self
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.regions
            .entry(region.to_string())
            .or_default()
            .extend(nodes);
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_device(&mut self, device: DeviceProfile) {
        self.device = device;
    }

    pub fn viewport_size(&self) -> Viewport {
        self.viewport
    }

    /// Latest value written for `property`.
    pub fn style(&self, property: StyleProperty) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|w| w.property == property)
            .map(|w| w.value.as_str())
    }

    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// Writes of one property, oldest first.
    pub fn writes_of(&self, property: StyleProperty) -> Vec<&str> {
        self.writes
            .iter()
            .filter(|w| w.property == property)
            .map(|w| w.value.as_str())
            .collect()
    }

    pub fn layout_flushes(&self) -> usize {
        self.flush_marks.len()
    }

    /// For each flush, the number of writes made before it.
    pub fn flush_marks(&self) -> &[usize] {
        &self.flush_marks
    }

    /// Tickets scheduled but not yet due.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the clock forward and return the tickets that fell due, in due
    /// order. Tickets due at the same instant keep their scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<AnimationTicket> {
        self.now += by;
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.timers.drain(..).partition(|t| t.due <= now);
        self.timers = waiting;

        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| t.ticket).collect()
    }
}

impl StyleSurface for RecordingHost {
    fn set_style(&mut self, property: StyleProperty, value: &str) {
        self.writes.push(StyleWrite {
            property,
            value: value.to_string(),
        });
    }

    fn flush_layout(&mut self) {
        self.flush_marks.push(self.writes.len());
    }
}

impl Environment for RecordingHost {
    type Target = NodeId;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn device(&self) -> DeviceProfile {
        self.device.clone()
    }

    fn region_contains(&self, region: &str, target: &NodeId) -> bool {
        self.regions
            .get(region)
            .is_some_and(|nodes| nodes.contains(target))
    }
}

impl Scheduler for RecordingHost {
    fn schedule(&mut self, delay: Duration, ticket: AnimationTicket) {
        self.timers.push(PendingTimer {
            due: self.now + delay,
            seq: self.next_seq,
            ticket,
        });
        self.next_seq += 1;
    }
}

impl SwipeTracker<RecordingHost> {
    /// Advance the host clock and complete every ticket that fell due.
    /// Returns how many completed.
    pub fn advance(&mut self, by: Duration) -> usize {
        let due = self.host_mut().advance(by);
        for ticket in &due {
            self.complete_animation(*ticket);
        }
        due.len()
    }
}
