use crate::foundation::{
    core::Rect,
    error::{RasterError, RasterResult},
};

/// Per-grid stack of clip rectangles.
///
/// Each pushed entry is already intersected with the entry below it (or the grid bounds), so the
/// top is always the effective clip up to a later resize of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipStack {
    entries: Vec<Rect>,
}

impl ClipStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pushed rectangles.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Effective clip for a grid with the given bounds.
    pub fn current(&self, bounds: Rect) -> Rect {
        match self.entries.last() {
            Some(top) => top.intersect(&bounds),
            None => bounds,
        }
    }

    /// Push `rect` intersected with the current clip.
    pub fn push(&mut self, bounds: Rect, rect: Rect) -> Rect {
        let clip = rect.intersect(&self.current(bounds));
        self.entries.push(clip);
        clip
    }

    /// Pop the top rectangle.
    pub fn pop(&mut self) -> RasterResult<Rect> {
        let top = self
            .entries
            .pop()
            .ok_or_else(|| RasterError::clip_state("pop_clip called with an empty clip stack"))?;
        if self.entries.is_empty() {
            self.entries = Vec::new();
        }
        Ok(top)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/clip.rs"]
mod tests;
