//! Gallery controller.
//!
//! Reconciles continuous drag input, discrete navigation, and resize-driven
//! relayout into one authoritative (offset, index) pair. Every operation runs
//! synchronously inside the caller's event handler and returns the full
//! [`RenderState`] the presentation layer should show afterwards.

use crate::drag::{Crossing, DragTracker};
use crate::error::GalleryError;
use crate::index::SlideIndex;
use crate::layout::{compute_layout, Layout};

/// Construction options.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Spacing between adjacent slides, in layout units.
    pub margin: f32,
    /// Slide shown when the gallery first renders.
    pub start_index: usize,
}

/// Visual state handed to the presentation layer after every operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderState {
    pub offset_x: f32,
    pub transition_enabled: bool,
    pub current_index: usize,
    pub nav_left_disabled: bool,
    pub nav_right_disabled: bool,
}

pub struct Gallery {
    index: SlideIndex,
    margin: f32,
    viewport_width: f32,
    layout: Layout,
    offset_x: f32,
    transition_enabled: bool,
    drag: DragTracker,
}

impl Gallery {
    /// Create a gallery over `slide_count` slides. Fails with
    /// [`GalleryError::InvalidConfiguration`] when the container is empty and
    /// with [`GalleryError::IndexOutOfRange`] for a bad start index.
    pub fn new(slide_count: usize, options: Options) -> Result<Self, GalleryError> {
        let index = SlideIndex::new(slide_count, options.start_index)?;
        let layout = compute_layout(0.0, slide_count, options.margin, index.current());
        Ok(Self {
            index,
            margin: options.margin,
            viewport_width: 0.0,
            layout,
            offset_x: layout.rest_offset,
            transition_enabled: false,
            drag: DragTracker::default(),
        })
    }

    /// First layout pass once the viewport width is known.
    pub fn initialize(&mut self, viewport_width: f32) -> RenderState {
        self.relayout(viewport_width);
        self.render_state()
    }

    /// Recompute geometry for the current index.
    ///
    /// An active gesture is not terminated: its next sample sees the fresh
    /// bounds, and `drag_end` settles on the new geometry anyway.
    pub fn resize(&mut self, viewport_width: f32) -> RenderState {
        self.relayout(viewport_width);
        log::debug!(
            "resize: width={} index={}",
            viewport_width,
            self.index.current()
        );
        self.render_state()
    }

    /// Enter a drag gesture at `pointer_x`.
    pub fn drag_start(&mut self, pointer_x: f32) -> RenderState {
        self.drag.begin(pointer_x, self.offset_x);
        self.transition_enabled = false;
        self.render_state()
    }

    /// Apply one pointer sample. Outside a gesture this is a no-op.
    ///
    /// The provisional offset keeps tracking the pointer even after the
    /// index has changed; the two re-converge at `drag_end`.
    pub fn drag_move(&mut self, pointer_x: f32) -> RenderState {
        if !self.drag.is_active() {
            return self.render_state();
        }
        let shift = self.drag.drag_shift(pointer_x);
        self.offset_x = self
            .drag
            .provisional_offset(pointer_x, self.layout.max_offset_x);
        if let Some(crossing) = self.drag.crossing(shift) {
            let moved = match crossing {
                Crossing::Previous => self.index.previous(),
                Crossing::Next => self.index.next(),
            };
            if moved {
                self.drag.lock();
            }
        }
        self.render_state()
    }

    /// Leave the gesture and settle on the current index. Release and cancel
    /// share this path; outside a gesture it is a no-op.
    pub fn drag_end(&mut self) -> RenderState {
        if !self.drag.is_active() {
            return self.render_state();
        }
        self.drag.end();
        self.settle();
        log::debug!(
            "settle: index={} offset={}",
            self.index.current(),
            self.offset_x
        );
        self.render_state()
    }

    /// Step to the previous slide. At the first slide nothing observable
    /// changes.
    pub fn navigate_left(&mut self) -> RenderState {
        if self.index.previous() {
            self.settle();
        }
        self.render_state()
    }

    /// Step to the next slide. At the last slide nothing observable changes.
    pub fn navigate_right(&mut self) -> RenderState {
        if self.index.next() {
            self.settle();
        }
        self.render_state()
    }

    /// Jump straight to `index` (dot click). Selecting the current slide is
    /// a no-op; an out-of-range index fails and leaves the state untouched.
    pub fn select(&mut self, index: usize) -> Result<RenderState, GalleryError> {
        if index == self.index.current() {
            return Ok(self.render_state());
        }
        self.index.jump_to(index)?;
        self.settle();
        Ok(self.render_state())
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            offset_x: self.offset_x,
            transition_enabled: self.transition_enabled,
            current_index: self.index.current(),
            nav_left_disabled: self.index.at_start(),
            nav_right_disabled: self.index.at_end(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn slide_count(&self) -> usize {
        self.index.count()
    }

    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    fn relayout(&mut self, viewport_width: f32) {
        self.viewport_width = viewport_width;
        self.layout = compute_layout(
            viewport_width,
            self.index.count(),
            self.margin,
            self.index.current(),
        );
        self.offset_x = self.layout.rest_offset;
        self.transition_enabled = false;
    }

    /// Snap to the index-aligned offset with the transition animation on.
    fn settle(&mut self) {
        self.layout = compute_layout(
            self.viewport_width,
            self.index.count(),
            self.margin,
            self.index.current(),
        );
        self.offset_x = self.layout.rest_offset;
        self.transition_enabled = true;
    }
}
