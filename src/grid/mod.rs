pub(crate) mod buffer;
pub(crate) mod clip;

use crate::{
    color::pixel::Pixel,
    foundation::{core::Rect, error::RasterResult},
    grid::clip::ClipStack,
    render::Backend,
};

/// A value that can live in a [`DataMap`] cell.
///
/// The cell type decides which backends a [`buffer::Grid`] registers and whether the color
/// compositing backend can address its storage as [`Pixel`]s.
pub trait Cell: Copy + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Backends registered for raw-accessible grids of this cell type, in dispatch order.
    fn backends() -> &'static [Backend] {
        &[Backend::RawMemory, Backend::Generic]
    }

    /// This value as a pixel, for pixel cell types.
    fn to_pixel(self) -> Option<Pixel> {
        None
    }

    /// View a run of cells as pixels, for pixel cell types.
    fn as_pixels(cells: &[Self]) -> Option<&[Pixel]> {
        let _ = cells;
        None
    }

    /// Mutable variant of [`Cell::as_pixels`].
    fn as_pixels_mut(cells: &mut [Self]) -> Option<&mut [Pixel]> {
        let _ = cells;
        None
    }
}

macro_rules! plain_cell {
    ($($t:ty),* $(,)?) => {
        $(impl Cell for $t {})*
    };
}

plain_cell!(bool, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl Cell for Pixel {
    fn backends() -> &'static [Backend] {
        &[
            Backend::ColorCompositing,
            Backend::RawMemory,
            Backend::Generic,
        ]
    }

    fn to_pixel(self) -> Option<Pixel> {
        Some(self)
    }

    fn as_pixels(cells: &[Self]) -> Option<&[Pixel]> {
        Some(cells)
    }

    fn as_pixels_mut(cells: &mut [Self]) -> Option<&mut [Pixel]> {
        Some(cells)
    }
}

/// Mutable contiguous view of a grid's storage.
///
/// Cell `(x, y)` lives at `data[offset + y * stride + x]`. The view ends when the borrow ends.
#[derive(Debug)]
pub struct RawView<'a, T> {
    data: &'a mut [T],
    offset: usize,
    stride: usize,
    width: usize,
    height: usize,
}

impl<'a, T> RawView<'a, T> {
    /// Wrap `data` as a `width` x `height` grid.
    ///
    /// Returns `None` when `stride < width` or the last row would run past `data`.
    pub fn new(
        data: &'a mut [T],
        offset: usize,
        stride: usize,
        width: usize,
        height: usize,
    ) -> Option<Self> {
        layout_fits(data.len(), offset, stride, width, height).then_some(Self {
            data,
            offset,
            stride,
            width,
            height,
        })
    }

    /// Element offset of cell `(0, 0)`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Elements between vertically adjacent cells.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Cells `x0..=x1` of row `y`.
    ///
    /// # Panics
    ///
    /// Panics when the span is outside the view.
    pub fn span_mut(&mut self, y: usize, x0: usize, x1: usize) -> &mut [T] {
        assert!(y < self.height && x0 <= x1 && x1 < self.width, "span out of view");
        let base = self.offset + y * self.stride;
        &mut self.data[base + x0..=base + x1]
    }
}

/// Read-only counterpart of [`RawView`].
#[derive(Debug, Clone, Copy)]
pub struct RawRef<'a, T> {
    data: &'a [T],
    offset: usize,
    stride: usize,
    width: usize,
    height: usize,
}

impl<'a, T> RawRef<'a, T> {
    /// Wrap `data` as a `width` x `height` grid. Same layout rules as [`RawView::new`].
    pub fn new(
        data: &'a [T],
        offset: usize,
        stride: usize,
        width: usize,
        height: usize,
    ) -> Option<Self> {
        layout_fits(data.len(), offset, stride, width, height).then_some(Self {
            data,
            offset,
            stride,
            width,
            height,
        })
    }

    /// Element offset of cell `(0, 0)`.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Elements between vertically adjacent cells.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Cells `x0..=x1` of row `y`.
    ///
    /// # Panics
    ///
    /// Panics when the span is outside the view.
    pub fn span(&self, y: usize, x0: usize, x1: usize) -> &'a [T] {
        assert!(y < self.height && x0 <= x1 && x1 < self.width, "span out of view");
        let base = self.offset + y * self.stride;
        &self.data[base + x0..=base + x1]
    }
}

fn layout_fits(len: usize, offset: usize, stride: usize, width: usize, height: usize) -> bool {
    if stride < width {
        return false;
    }
    if width == 0 || height == 0 {
        return offset <= len;
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(offset))
        .and_then(|v| v.checked_add(width))
        .is_some_and(|end| end <= len)
}

/// A 2D grid of cells the renderer can draw into.
///
/// Implementors provide dimensions and cell access; raw access and backend registration are
/// optional capabilities. Each grid owns its clip stack. Grids shared across threads must be
/// synchronized externally around push/pop/draw sequences.
pub trait DataMap {
    /// Cell value type.
    type Cell: Cell;

    /// Width in cells.
    fn width(&self) -> i32;

    /// Height in cells.
    fn height(&self) -> i32;

    /// Read cell `(x, y)`. Callers stay within bounds; implementations may panic otherwise.
    fn get(&self, x: i32, y: i32) -> Self::Cell;

    /// Write cell `(x, y)`. Callers stay within bounds; implementations may panic otherwise.
    fn set(&mut self, x: i32, y: i32, value: Self::Cell);

    /// Whether [`DataMap::raw_access_mut`] hands out a view.
    fn supports_raw_access(&self) -> bool {
        false
    }

    /// Read-only contiguous view of the storage, when supported.
    fn raw_access(&self) -> Option<RawRef<'_, Self::Cell>> {
        None
    }

    /// Mutable contiguous view of the storage, when supported.
    fn raw_access_mut(&mut self) -> Option<RawView<'_, Self::Cell>> {
        None
    }

    /// Backends consulted for draws into this grid, in order. First capable backend wins.
    fn backends(&self) -> &'static [Backend] {
        &[Backend::Generic]
    }

    /// The grid's clip stack.
    fn clip_stack(&self) -> &ClipStack;

    /// Mutable access to the grid's clip stack.
    fn clip_stack_mut(&mut self) -> &mut ClipStack;

    /// Grid bounds, `(0, 0)..=(width - 1, height - 1)`.
    fn bounds(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    /// Effective clip: the top of the clip stack intersected with the grid bounds, or the bounds
    /// when nothing is pushed.
    fn clip(&self) -> Rect {
        self.clip_stack().current(self.bounds())
    }

    /// Push `rect` intersected with the current clip. Returns the pushed rectangle.
    fn push_clip(&mut self, rect: Rect) -> Rect {
        let bounds = self.bounds();
        self.clip_stack_mut().push(bounds, rect)
    }

    /// Pop the top clip, failing with `InvalidClipState` when nothing is pushed.
    fn pop_clip(&mut self) -> RasterResult<Rect> {
        self.clip_stack_mut().pop()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/raw.rs"]
mod tests;
