//! Phase transition history.
//!
//! The tracker records every phase change it makes. The log is bounded so a
//! long-lived element cannot grow it without limit; the oldest entries are
//! dropped first.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of transitions kept when no capacity is given.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use swipedown::core::{GesturePhase, PhaseTransition};
/// use chrono::Utc;
///
/// let transition = PhaseTransition {
///     from: GesturePhase::Idle,
///     to: GesturePhase::Dragging,
///     timestamp: Utc::now(),
///     gesture: 1,
/// };
/// assert_eq!(transition.gesture, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseTransition<S: State> {
    /// The phase being left
    pub from: S,
    /// The phase being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// Id of the drag gesture that caused the change
    pub gesture: u64,
}

/// Bounded, ordered log of phase transitions.
///
/// # Example
///
/// ```rust
/// use swipedown::core::{GesturePhase, PhaseHistory, PhaseTransition};
/// use chrono::Utc;
///
/// let mut history = PhaseHistory::new();
/// history.record(PhaseTransition {
///     from: GesturePhase::Idle,
///     to: GesturePhase::Dragging,
///     timestamp: Utc::now(),
///     gesture: 1,
/// });
/// history.record(PhaseTransition {
///     from: GesturePhase::Dragging,
///     to: GesturePhase::SettlingBack,
///     timestamp: Utc::now(),
///     gesture: 1,
/// });
///
/// let path = history.path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &GesturePhase::SettlingBack);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct PhaseHistory<S: State> {
    capacity: usize,
    transitions: VecDeque<PhaseTransition<S>>,
}

impl<S: State> Default for PhaseHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> PhaseHistory<S> {
    /// Create an empty history holding up to [`DEFAULT_HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history holding up to `capacity` entries.
    ///
    /// A capacity of zero disables recording.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
        }
    }

    /// Append a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: PhaseTransition<S>) {
        if self.capacity == 0 {
            return;
        }
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Phases traversed: the `from` of the oldest kept entry, then every `to`.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Transitions recorded for one gesture, oldest first.
    pub fn for_gesture(&self, gesture: u64) -> Vec<&PhaseTransition<S>> {
        self.transitions
            .iter()
            .filter(|t| t.gesture == gesture)
            .collect()
    }

    /// Time between the oldest and newest kept entries.
    ///
    /// `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&PhaseTransition<S>> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over kept transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &PhaseTransition<S>> {
        self.transitions.iter()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
