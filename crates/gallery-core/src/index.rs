use crate::error::GalleryError;

/// Settled-slide index with clamped navigation.
///
/// Mutated synchronously by the controller; stepping past either end is a
/// reported no-op rather than an error so callers can skip re-rendering.
#[derive(Clone, Copy, Debug)]
pub struct SlideIndex {
    current: usize,
    count: usize,
}

impl SlideIndex {
    pub fn new(count: usize, start: usize) -> Result<Self, GalleryError> {
        if count == 0 {
            return Err(GalleryError::InvalidConfiguration);
        }
        if start >= count {
            return Err(GalleryError::IndexOutOfRange {
                index: start,
                count,
            });
        }
        Ok(Self {
            current: start,
            count,
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn at_start(&self) -> bool {
        self.current == 0
    }

    pub fn at_end(&self) -> bool {
        self.current + 1 == self.count
    }

    /// Step toward the first slide. Returns whether the index moved.
    pub fn previous(&mut self) -> bool {
        if self.at_start() {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Step toward the last slide. Returns whether the index moved.
    pub fn next(&mut self) -> bool {
        if self.at_end() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Jump to an arbitrary slide, even the current one. Out of range leaves
    /// the index untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), GalleryError> {
        if index >= self.count {
            return Err(GalleryError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(())
    }
}
