use anyhow::Context as _;

use crate::{
    color::pixel::Pixel,
    foundation::error::{RasterError, RasterResult},
    grid::{Cell, DataMap, RawRef, RawView, clip::ClipStack},
    render::Backend,
};

/// Row-major, `Vec`-backed grid of cells.
///
/// Exposes raw access with offset 0 and stride `width`, and registers the backends of its cell
/// type.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Cell> {
    width: i32,
    height: i32,
    cells: Vec<T>,
    clip: ClipStack,
}

/// Grid of straight-alpha ARGB pixels.
pub type Bitmap = Grid<Pixel>;

impl<T: Cell> Grid<T> {
    /// Create a `width` x `height` grid filled with `fill`.
    ///
    /// Fails with `InvalidDimensions` for negative or overflowing sizes.
    pub fn new(width: i32, height: i32, fill: T) -> RasterResult<Self> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            clip: ClipStack::new(),
        })
    }

    /// Discard the contents and reallocate as `width` x `height` filled with `fill`.
    ///
    /// Invalid dimensions are rejected before anything changes. The clip stack is kept; its
    /// entries are intersected with the new bounds on use.
    pub fn resize(&mut self, width: i32, height: i32, fill: T) -> RasterResult<()> {
        let len = cell_count(width, height)?;
        self.width = width;
        self.height = height;
        self.cells = vec![fill; len];
        Ok(())
    }

    /// Set every cell to `value`, ignoring the clip.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Read a cell, `None` when out of bounds.
    pub fn try_get(&self, x: i32, y: i32) -> Option<T> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    fn expect_index(&self, x: i32, y: i32) -> usize {
        self.index_of(x, y).unwrap_or_else(|| {
            panic!(
                "cell ({x}, {y}) out of bounds for {}x{} grid",
                self.width, self.height
            )
        })
    }
}

fn cell_count(width: i32, height: i32) -> RasterResult<usize> {
    if width < 0 || height < 0 {
        return Err(RasterError::dimensions(format!(
            "grid dimensions must be non-negative, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| RasterError::dimensions(format!("grid {width}x{height} overflows")))
}

impl<T: Cell> DataMap for Grid<T> {
    type Cell = T;

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn get(&self, x: i32, y: i32) -> T {
        self.cells[self.expect_index(x, y)]
    }

    fn set(&mut self, x: i32, y: i32, value: T) {
        let i = self.expect_index(x, y);
        self.cells[i] = value;
    }

    fn supports_raw_access(&self) -> bool {
        true
    }

    fn raw_access(&self) -> Option<RawRef<'_, T>> {
        let (w, h) = (self.width as usize, self.height as usize);
        RawRef::new(&self.cells, 0, w, w, h)
    }

    fn raw_access_mut(&mut self) -> Option<RawView<'_, T>> {
        let (w, h) = (self.width as usize, self.height as usize);
        RawView::new(&mut self.cells, 0, w, w, h)
    }

    fn backends(&self) -> &'static [Backend] {
        T::backends()
    }

    fn clip_stack(&self) -> &ClipStack {
        &self.clip
    }

    fn clip_stack_mut(&mut self) -> &mut ClipStack {
        &mut self.clip
    }
}

impl Bitmap {
    /// Convert to a straight-alpha RGBA8 image.
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        let mut img = image::RgbaImage::new(self.width as u32, self.height as u32);
        for (dst, px) in img.pixels_mut().zip(&self.cells) {
            *dst = image::Rgba(px.to_rgba());
        }
        img
    }

    /// Build a bitmap from a straight-alpha RGBA8 image.
    pub fn from_rgba_image(img: &image::RgbaImage) -> RasterResult<Self> {
        let width = i32::try_from(img.width())
            .map_err(|_| RasterError::dimensions(format!("image width {} too large", img.width())))?;
        let height = i32::try_from(img.height()).map_err(|_| {
            RasterError::dimensions(format!("image height {} too large", img.height()))
        })?;
        let mut out = Self::new(width, height, Pixel::TRANSPARENT)?;
        for (dst, src) in out.cells.iter_mut().zip(img.pixels()) {
            *dst = Pixel::from_rgba(src.0);
        }
        Ok(out)
    }

    /// Decode encoded image bytes (PNG, JPEG, ...) into a bitmap.
    ///
    /// Decoder failures surface as [`RasterError::Other`].
    pub fn decode(bytes: &[u8]) -> RasterResult<Self> {
        let img = image::load_from_memory(bytes).context("decode image from memory")?;
        Self::from_rgba_image(&img.to_rgba8())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/buffer.rs"]
mod tests;
