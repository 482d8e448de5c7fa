//! Bottom Sheet Demo
//!
//! Drives a swipe-to-dismiss bottom sheet through the recording host and
//! prints every style write, the way a page would see them.
//!
//! Key concepts:
//! - Attaching a tracker once per element
//! - Feeding touch samples from an event loop
//! - Completing animation tickets when the host timer fires
//! - Listening for dismissal
//!
//! Run with: cargo run --example bottom_sheet

use std::time::Duration;
use swipedown::builder::SwipeConfig;
use swipedown::core::State;
use swipedown::effects::{SwipeTracker, TouchSample};
use swipedown::testing::{NodeId, RecordingHost};

const SHEET: NodeId = NodeId(1);

fn print_writes(tracker: &SwipeTracker<RecordingHost>, from: usize) -> usize {
    let writes = tracker.host().writes();
    for write in &writes[from..] {
        println!("    {}: {}", write.property.css_name(), write.value);
    }
    writes.len()
}

fn swipe(tracker: &mut SwipeTracker<RecordingHost>, path: &[f64], seen: usize) -> usize {
    let Some((&first, rest)) = path.split_first() else {
        return seen;
    };

    tracker.on_drag_start(TouchSample::single(first), &SHEET);
    for &y in rest {
        tracker.on_drag_move(TouchSample::single(y));
    }
    let release = tracker.on_drag_end();
    println!("  released: {:?} (offset {})", release, tracker.current_offset());
    let seen = print_writes(tracker, seen);

    let completed = tracker.advance(Duration::from_millis(400));
    println!("  {completed} animation(s) completed, phase {}", tracker.phase());
    print_writes(tracker, seen)
}

fn main() {
    println!("=== Swipe-down Bottom Sheet ===\n");

    let config = SwipeConfig::from_json(r#"{ "dismiss_threshold": 100, "max_drag_distance": 400 }"#)
        .expect("demo config is valid");
    let mut tracker = SwipeTracker::attach(RecordingHost::phone(), config);
    tracker.on_dismiss(|| println!("  swipy close"));

    println!("Attach:");
    let mut seen = print_writes(&tracker, 0);

    println!("\nShort drag (80px):");
    seen = swipe(&mut tracker, &[0.0, 40.0, 80.0], seen);

    println!("\nLong drag (150px):");
    seen = swipe(&mut tracker, &[0.0, 75.0, 150.0], seen);

    println!("\nOverdrag (500px, clamped to 400):");
    swipe(&mut tracker, &[0.0, 250.0, 500.0], seen);

    println!("\nPhase path:");
    let path: Vec<&str> = tracker.history().path().iter().map(|p| p.name()).collect();
    println!("  {}", path.join(" -> "));

    println!("\n=== Demo Complete ===");
}
