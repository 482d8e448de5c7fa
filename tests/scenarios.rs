//! End-to-end swipe scenarios against the recording host.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use swipedown::builder::SwipeConfig;
use swipedown::core::{GesturePhase, Release, Viewport};
use swipedown::effects::{StartOutcome, StyleProperty, SwipeTracker, TouchSample, TRANSITION_NONE};
use swipedown::testing::{NodeId, RecordingHost};

fn counting(tracker: &mut SwipeTracker<RecordingHost>) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    tracker.on_dismiss(move || seen.set(seen.get() + 1));
    count
}

fn default_tracker() -> SwipeTracker<RecordingHost> {
    let config = SwipeConfig::builder()
        .dismiss_threshold(100.0)
        .max_drag_distance(400.0)
        .build()
        .unwrap();
    SwipeTracker::attach(RecordingHost::phone(), config)
}

#[test]
fn drag_past_threshold_exits_and_notifies_once() {
    let mut tracker = default_tracker();
    let dismissed = counting(&mut tracker);

    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    assert_eq!(tracker.on_drag_move(TouchSample::single(150.0)), Some(150.0));
    assert_eq!(
        tracker.host().style(StyleProperty::Transform),
        Some("translateY(150px)")
    );

    assert_eq!(tracker.on_drag_end(), Some(Release::Dismiss));
    assert_eq!(dismissed.get(), 1);
    assert_eq!(
        tracker.host().style(StyleProperty::Transform),
        Some("translateY(844px)")
    );

    assert_eq!(tracker.advance(Duration::from_millis(250)), 1);
    assert_eq!(tracker.phase(), GesturePhase::Idle);
    assert!(!tracker.is_animating());
    assert_eq!(
        tracker.host().style(StyleProperty::Transition),
        Some(TRANSITION_NONE)
    );
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn short_drag_settles_back_to_rest() {
    let mut tracker = default_tracker();
    let dismissed = counting(&mut tracker);

    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    tracker.on_drag_move(TouchSample::single(80.0));

    assert_eq!(tracker.on_drag_end(), Some(Release::SettleBack));
    assert_eq!(dismissed.get(), 0);
    assert_eq!(
        tracker.host().style(StyleProperty::Transform),
        Some("translateY(0px)")
    );

    tracker.advance(Duration::from_millis(350));
    assert_eq!(tracker.phase(), GesturePhase::Idle);
}

#[test]
fn overdrag_clamps_visually_but_still_dismisses() {
    let mut tracker = default_tracker();
    let dismissed = counting(&mut tracker);

    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    for y in [300.0, 450.0, 500.0] {
        tracker.on_drag_move(TouchSample::single(y));
    }

    assert_eq!(
        tracker.host().writes_of(StyleProperty::Transform),
        vec!["translateY(300px)", "translateY(400px)", "translateY(400px)"]
    );
    assert_eq!(tracker.current_offset(), 500.0);
    assert_eq!(tracker.on_drag_end(), Some(Release::Dismiss));
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn settle_back_snaps_flushes_then_animates() {
    let mut tracker = default_tracker();
    tracker.on_drag_start(TouchSample::single(50.0), &NodeId(1));
    tracker.on_drag_move(TouchSample::single(110.0));
    let before = tracker.host().writes().len();

    tracker.on_drag_end();

    let host = tracker.host();
    let tail: Vec<(StyleProperty, &str)> = host.writes()[before..]
        .iter()
        .map(|w| (w.property, w.value.as_str()))
        .collect();
    assert_eq!(
        tail,
        vec![
            (StyleProperty::Transition, "transform none"),
            (StyleProperty::Transform, "translateY(60px)"),
            (
                StyleProperty::Transition,
                "transform 0.35s cubic-bezier(.23,1.01,.32,1)"
            ),
            (StyleProperty::Transform, "translateY(0px)"),
        ]
    );
    assert_eq!(host.flush_marks(), &[before + 2]);
}

#[test]
fn upward_drag_never_moves_element() {
    let mut tracker = default_tracker();
    tracker.on_drag_start(TouchSample::single(400.0), &NodeId(1));
    tracker.on_drag_move(TouchSample::single(250.0));

    assert_eq!(tracker.current_offset(), -150.0);
    assert!(tracker.host().writes_of(StyleProperty::Transform).is_empty());
    assert_eq!(tracker.on_drag_end(), Some(Release::SettleBack));
    assert_eq!(
        tracker.host().writes_of(StyleProperty::Transform),
        vec!["translateY(0px)", "translateY(0px)"]
    );
}

#[test]
fn device_heuristic_disables_whole_sequence() {
    let config = SwipeConfig::builder().disable_on_desktop().build().unwrap();
    let mut tracker = SwipeTracker::attach(RecordingHost::desktop(), config);
    let dismissed = counting(&mut tracker);
    let attached = tracker.host().writes().len();

    assert_eq!(
        tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1)),
        StartOutcome::Disabled
    );
    tracker.on_drag_move(TouchSample::single(300.0));
    assert_eq!(tracker.on_drag_end(), None);

    assert_eq!(tracker.host().writes().len(), attached);
    assert_eq!(dismissed.get(), 0);
}

#[test]
fn device_heuristic_recovers_when_device_changes() {
    let config = SwipeConfig::builder().disable_on_desktop().build().unwrap();
    let mut tracker = SwipeTracker::attach(RecordingHost::desktop(), config);
    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    assert!(tracker.is_disabled());

    let phone = RecordingHost::phone();
    tracker.host_mut().set_viewport(phone.viewport_size());
    tracker
        .host_mut()
        .set_device(swipedown::core::DeviceProfile::new(5, "Android"));

    assert_eq!(
        tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1)),
        StartOutcome::Tracking
    );
    assert!(!tracker.is_disabled());
}

#[test]
fn start_region_ignores_outside_then_accepts_inside() {
    let host = RecordingHost::phone().with_region("grabber", [NodeId(7)]);
    let config = SwipeConfig::builder().start_region("grabber").build().unwrap();
    let mut tracker = SwipeTracker::attach(host, config);
    let dismissed = counting(&mut tracker);
    let attached = tracker.host().writes().len();

    assert_eq!(
        tracker.on_drag_start(TouchSample::single(0.0), &NodeId(3)),
        StartOutcome::OutsideRegion
    );
    assert!(!tracker.is_dragging());
    assert!(!tracker.is_disabled());
    assert_eq!(tracker.gesture(), 0);
    assert_eq!(tracker.on_drag_move(TouchSample::single(200.0)), None);
    assert_eq!(tracker.on_drag_end(), None);
    assert_eq!(tracker.host().writes().len(), attached);
    assert!(tracker.history().is_empty());

    assert_eq!(
        tracker.on_drag_start(TouchSample::single(0.0), &NodeId(7)),
        StartOutcome::Tracking
    );
    tracker.on_drag_move(TouchSample::single(200.0));
    assert_eq!(tracker.on_drag_end(), Some(Release::Dismiss));
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn outside_start_does_not_abort_running_drag() {
    let host = RecordingHost::phone().with_region("grabber", [NodeId(7)]);
    let config = SwipeConfig::builder().start_region("grabber").build().unwrap();
    let mut tracker = SwipeTracker::attach(host, config);

    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(7));
    tracker.on_drag_move(TouchSample::single(50.0));
    tracker.on_drag_start(TouchSample::single(10.0), &NodeId(3));

    assert!(tracker.is_dragging());
    assert_eq!(tracker.start_position(), 0.0);
    assert_eq!(tracker.current_offset(), 50.0);
}

#[test]
fn breakpoint_boundary_is_inclusive() {
    let config = SwipeConfig::builder().desktop_breakpoint(800.0).build().unwrap();

    let mut at = RecordingHost::phone();
    at.set_viewport(Viewport::new(800.0, 600.0));
    let mut tracker = SwipeTracker::attach(at, config.clone());
    assert_eq!(
        tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1)),
        StartOutcome::Disabled
    );

    let mut below = RecordingHost::phone();
    below.set_viewport(Viewport::new(799.0, 600.0));
    let mut tracker = SwipeTracker::attach(below, config);
    assert_eq!(
        tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1)),
        StartOutcome::Tracking
    );
}

#[test]
fn second_finger_ignored_mid_drag() {
    let mut tracker = default_tracker();
    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    tracker.on_drag_move(TouchSample::single(40.0));

    let pinch = TouchSample {
        contacts: 2,
        client_y: 300.0,
    };
    assert_eq!(tracker.on_drag_move(pinch), None);
    assert_eq!(tracker.current_offset(), 40.0);
    assert_eq!(tracker.on_drag_end(), Some(Release::SettleBack));
}

#[test]
fn repeated_gestures_each_notify() {
    let mut tracker = default_tracker();
    let dismissed = counting(&mut tracker);

    for _ in 0..3 {
        tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
        tracker.on_drag_move(TouchSample::single(180.0));
        tracker.on_drag_end();
        tracker.advance(Duration::from_millis(250));
    }

    assert_eq!(dismissed.get(), 3);
    assert_eq!(tracker.gesture(), 3);
    assert_eq!(tracker.phase(), GesturePhase::Idle);
}

#[test]
fn new_drag_interrupts_settle_back() {
    let mut tracker = default_tracker();
    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    tracker.on_drag_move(TouchSample::single(60.0));
    tracker.on_drag_end();
    assert_eq!(tracker.phase(), GesturePhase::SettlingBack);

    tracker.advance(Duration::from_millis(100));
    tracker.on_drag_start(TouchSample::single(20.0), &NodeId(1));

    assert_eq!(tracker.phase(), GesturePhase::Dragging);
    assert!(!tracker.is_animating());
    assert_eq!(
        tracker.host().style(StyleProperty::Transition),
        Some(TRANSITION_NONE)
    );

    assert_eq!(tracker.advance(Duration::from_millis(250)), 1);
    assert_eq!(tracker.phase(), GesturePhase::Dragging);
}

#[test]
fn second_finger_start_keeps_running_drag() {
    let mut tracker = default_tracker();
    let dismissed = counting(&mut tracker);

    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    tracker.on_drag_move(TouchSample::single(150.0));

    let second_finger = TouchSample {
        contacts: 2,
        client_y: 300.0,
    };
    assert_eq!(
        tracker.on_drag_start(second_finger, &NodeId(1)),
        StartOutcome::MultiTouch
    );
    assert!(tracker.is_dragging());
    assert_eq!(tracker.gesture(), 1);
    assert_eq!(tracker.current_offset(), 150.0);

    assert_eq!(tracker.on_drag_end(), Some(Release::Dismiss));
    assert_eq!(dismissed.get(), 1);
}

#[test]
fn second_finger_start_reevaluates_policy() {
    let config = SwipeConfig::builder().desktop_breakpoint(800.0).build().unwrap();
    let mut tracker = SwipeTracker::attach(RecordingHost::phone(), config);

    tracker.on_drag_start(TouchSample::single(0.0), &NodeId(1));
    tracker.on_drag_move(TouchSample::single(150.0));
    tracker.host_mut().set_viewport(Viewport::new(1200.0, 800.0));

    let second_finger = TouchSample {
        contacts: 2,
        client_y: 300.0,
    };
    assert_eq!(
        tracker.on_drag_start(second_finger, &NodeId(1)),
        StartOutcome::Disabled
    );
    assert!(tracker.is_disabled());
    assert_eq!(tracker.on_drag_end(), None);
}
