// Host-side tests for drag gestures driven through the gallery controller.

use gallery_core::{Crossing, DragTracker, Gallery, Options};

const EPS: f32 = 1e-4;

fn make_gallery(slide_count: usize, width: f32, margin: f32, start_index: usize) -> Gallery {
    let mut gallery = Gallery::new(
        slide_count,
        Options {
            margin,
            start_index,
        },
    )
    .unwrap();
    gallery.initialize(width);
    gallery
}

#[test]
fn threshold_crossing_changes_the_index_once_per_gesture() {
    let mut g = make_gallery(5, 300.0, 0.0, 2);
    g.drag_start(100.0);

    // 30 px of travel crosses the 20 px threshold.
    let s = g.drag_move(130.0);
    assert_eq!(s.current_index, 1);
    assert!(!s.transition_enabled);

    // Further travel in the same direction does not move the index again.
    let s = g.drag_move(135.0);
    assert_eq!(s.current_index, 1);

    // Neither does reversing past the opposite threshold.
    let s = g.drag_move(40.0);
    assert_eq!(s.current_index, 1);

    let s = g.drag_end();
    assert_eq!(s.current_index, 1);
    assert!((s.offset_x - (-300.0)).abs() < EPS);
    assert!(s.transition_enabled);
}

#[test]
fn the_visual_offset_keeps_tracking_the_pointer_after_the_index_changed() {
    let mut g = make_gallery(5, 300.0, 0.0, 2);
    g.drag_start(100.0);

    // Index flips early, offset still follows the finger.
    let s = g.drag_move(130.0);
    assert_eq!(s.current_index, 1);
    assert!((s.offset_x - (-570.0)).abs() < EPS);
}

#[test]
fn a_drag_below_the_threshold_settles_back() {
    let mut g = make_gallery(5, 300.0, 0.0, 2);
    g.drag_start(100.0);

    let s = g.drag_move(115.0);
    assert_eq!(s.current_index, 2);
    assert!((s.offset_x - (-585.0)).abs() < EPS);

    let s = g.drag_end();
    assert_eq!(s.current_index, 2);
    assert!((s.offset_x - (-600.0)).abs() < EPS);
    assert!(s.transition_enabled);
}

#[test]
fn overshoot_at_the_first_slide_is_elastic() {
    let mut g = make_gallery(3, 300.0, 0.0, 0);
    g.drag_start(100.0);

    // 50 px past the left edge shows only 50 / 5 = 10 px of give.
    let s = g.drag_move(150.0);
    assert!((s.offset_x - 10.0).abs() < EPS);
    assert_eq!(s.current_index, 0);
}

#[test]
fn overshoot_at_the_last_slide_is_elastic() {
    let mut g = make_gallery(3, 300.0, 0.0, 2);
    g.drag_start(200.0);

    let s = g.drag_move(150.0);
    assert!((s.offset_x - (-610.0)).abs() < EPS);
    assert_eq!(s.current_index, 2);
}

#[test]
fn a_crossing_at_the_boundary_does_not_burn_the_gesture() {
    let mut g = make_gallery(3, 300.0, 0.0, 0);
    g.drag_start(100.0);

    // Past the threshold toward the previous slide, but there is none.
    let s = g.drag_move(130.0);
    assert_eq!(s.current_index, 0);

    // The gesture can still take its one change in the other direction.
    let s = g.drag_move(60.0);
    assert_eq!(s.current_index, 1);

    // And only that one.
    let s = g.drag_move(130.0);
    assert_eq!(s.current_index, 1);

    let s = g.drag_end();
    assert_eq!(s.current_index, 1);
    assert!((s.offset_x - (-300.0)).abs() < EPS);
}

#[test]
fn a_zero_movement_gesture_settles_in_place() {
    let mut g = make_gallery(4, 250.0, 0.0, 1);
    g.drag_start(80.0);
    let s = g.drag_end();
    assert_eq!(s.current_index, 1);
    assert!((s.offset_x - (-250.0)).abs() < EPS);
    assert!(s.transition_enabled);
}

#[test]
fn samples_outside_a_gesture_are_noops() {
    let mut g = make_gallery(3, 300.0, 0.0, 1);
    let before = g.render_state();
    assert_eq!(g.drag_move(500.0), before);
    assert_eq!(g.drag_end(), before);
}

#[test]
fn resize_mid_gesture_updates_the_bounds_without_ending_it() {
    let mut g = make_gallery(3, 300.0, 0.0, 0);
    g.drag_start(0.0);

    let s = g.resize(150.0);
    assert!(g.is_dragging());
    assert_eq!(s.current_index, 0);
    assert!(!s.transition_enabled);

    // The next sample clamps against the new drag floor of -300.
    let s = g.drag_move(-400.0);
    assert!((s.offset_x - (-380.0)).abs() < EPS);
    assert_eq!(s.current_index, 1);

    // Settle uses the new geometry too.
    let s = g.drag_end();
    assert!((s.offset_x - (-150.0)).abs() < EPS);
    assert_eq!(s.current_index, 1);
}

#[test]
fn the_tracker_reports_crossings_until_locked() {
    let mut t = DragTracker::default();
    t.begin(100.0, 0.0);
    assert_eq!(t.crossing(25.0), Some(Crossing::Previous));
    assert_eq!(t.crossing(-25.0), Some(Crossing::Next));
    // Exactly at the threshold is not a crossing.
    assert_eq!(t.crossing(20.0), None);
    assert!(!t.is_locked());
    t.lock();
    assert!(t.is_locked());
    assert_eq!(t.crossing(25.0), None);
    t.end();
    assert!(!t.is_active());
}

#[test]
fn a_new_gesture_resets_the_lock() {
    let mut t = DragTracker::default();
    t.begin(0.0, 0.0);
    t.lock();
    t.end();
    t.begin(50.0, -300.0);
    assert!(!t.is_locked());
    assert_eq!(t.drag_shift(80.0), 30.0);
}

#[test]
fn the_offset_always_lies_within_the_elastic_bounds() {
    let mut g = make_gallery(5, 300.0, 0.0, 2);
    let max_offset_x = g.layout().max_offset_x;
    g.drag_start(100.0);

    for i in 0..21 {
        let shift = -500.0 + 50.0 * i as f32;
        let s = g.drag_move(100.0 + shift);
        let ease = shift / 5.0;
        assert!(s.offset_x <= ease + EPS, "shift {}: {} above", shift, s.offset_x);
        assert!(
            s.offset_x >= max_offset_x + ease - EPS,
            "shift {}: {} below",
            shift,
            s.offset_x
        );
    }
}
