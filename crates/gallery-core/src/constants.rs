// Interaction tuning constants shared by the engine and the front-end.

// Minimum pointer travel (layout px) before a drag commits to a slide change
pub const DRAG_THRESHOLD_PX: f32 = 20.0;

// Divisor applied to the raw drag travel to soften overshoot past the ends
pub const DRAG_EASE_DIVISOR: f32 = 5.0;

// Quiescence window for coalescing resize events (milliseconds)
pub const RESIZE_DEBOUNCE_MS: i32 = 100;
