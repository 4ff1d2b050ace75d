//! Circular gallery navigation state.
//!
//! Tracks the current image index inside a project gallery. Navigation wraps
//! at both ends and stays defined for single-image galleries (a no-op wrap).
//! The portfolio renderer runs one of these per project to precompute the
//! previous/next targets emitted as data attributes on each slide.

/// Current position within a gallery of `len` images.
///
/// The index is always in `[0, len)` (0 when the gallery is empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    index: usize,
    len: usize,
}

#[allow(unused)]
impl Lightbox {
    /// Open at the first image.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Open at a specific image. Out-of-range indexes wrap into `[0, len)`.
    pub fn at(len: usize, index: usize) -> Self {
        let index = if len == 0 { 0 } else { index % len };
        Self { index, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Index one step forward, wrapping from the last image to the first.
    pub fn next_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + 1) % self.len
        }
    }

    /// Index one step back, wrapping from the first image to the last.
    pub fn prev_index(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.index + self.len - 1) % self.len
        }
    }

    pub fn next(&mut self) {
        self.index = self.next_index();
    }

    pub fn prev(&mut self) {
        self.index = self.prev_index();
    }

    /// Reset to the first image for the next open.
    pub fn close(&mut self) {
        self.index = 0;
    }

    /// 1-indexed position label, e.g. "2 of 5".
    pub fn counter_label(&self) -> String {
        if self.len == 0 {
            "0 of 0".to_string()
        } else {
            format!("{} of {}", self.index + 1, self.len)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
