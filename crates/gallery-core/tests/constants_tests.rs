// Host-side tests for the interaction tuning constants.

use gallery_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // The threshold must be a real distance or every tap changes slides.
    assert!(DRAG_THRESHOLD_PX > 0.0);

    // A divisor of 1 would remove the elastic resistance entirely.
    assert!(DRAG_EASE_DIVISOR > 1.0);

    // The debounce window must be a positive delay.
    assert!(RESIZE_DEBOUNCE_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn eased_overshoot_stays_below_raw_travel() {
    let travel = 100.0_f32;
    assert!(travel / DRAG_EASE_DIVISOR < travel);
}
