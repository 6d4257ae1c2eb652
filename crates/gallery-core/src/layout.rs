//! Pure geometry for the slide track.
//!
//! Every quantity here is derived from the viewport width, the slide count,
//! and the inter-slide margin; nothing in this module touches the DOM or any
//! other platform API.

/// Track geometry for one settled index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Width of a single slide; slides always fill the viewport.
    pub slide_width: f32,
    /// Total width of the track holding all slides, margin included after
    /// every slide (the last one reserves its margin too).
    pub track_width: f32,
    /// Index-aligned offset the track settles on when no drag is active.
    pub rest_offset: f32,
    /// Most negative index-aligned offset, used as the drag floor.
    pub max_offset_x: f32,
}

/// Compute track geometry for the given settled index.
///
/// Callers guarantee `slide_count >= 1`; [`Gallery::new`](crate::Gallery::new)
/// rejects an empty container before any layout is computed. A zero viewport
/// width yields a degenerate but valid layout.
pub fn compute_layout(
    viewport_width: f32,
    slide_count: usize,
    margin: f32,
    current_index: usize,
) -> Layout {
    let step = viewport_width + margin;
    Layout {
        slide_width: viewport_width,
        track_width: slide_count as f32 * step,
        rest_offset: -(current_index as f32) * step,
        // The drag floor uses the bare viewport width while rest positions
        // include the margin; with margin > 0 the floor sits short of the
        // last rest offset.
        max_offset_x: -((slide_count - 1) as f32) * viewport_width,
    }
}
