pub(crate) mod color;
pub(crate) mod dispatch;
pub(crate) mod generic;
pub(crate) mod raw;
pub(crate) mod renderer;

use crate::{
    color::blend::FillStyle,
    foundation::{core::Point, core::Rect, error::RasterError, error::RasterResult},
    grid::{Cell, DataMap},
    scan::scanner::{ScanRow, Scanner},
};

/// The four rendering operations a backend may implement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpKind {
    /// Fill every covered cell with a constant.
    SolidConstant,
    /// Fill every covered cell from a source grid.
    SolidCopy,
    /// Paint the silhouette with a constant.
    OutlineConstant,
    /// Paint the silhouette from a source grid.
    OutlineCopy,
}

/// Which cells of the shape are painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Every covered cell.
    #[default]
    Solid,
    /// Only the one-cell-wide silhouette.
    Outline,
}

/// Where painted values come from.
pub enum Paint<'a, T> {
    /// The same value everywhere.
    Constant(T),
    /// Cells of another grid, tiled.
    ///
    /// Destination cell `(x, y)` reads source cell
    /// `((x - offset.x) mod width, (y - offset.y) mod height)`. An empty source draws nothing.
    Copy {
        /// Grid to read from.
        source: &'a dyn DataMap<Cell = T>,
        /// Destination position of source cell `(0, 0)`.
        offset: Point,
    },
}

impl<T: Copy> Clone for Paint<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for Paint<'_, T> {}

impl<T: Cell> std::fmt::Debug for Paint<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::Copy { source, offset } => f
                .debug_struct("Copy")
                .field("source_width", &source.width())
                .field("source_height", &source.height())
                .field("offset", offset)
                .finish(),
        }
    }
}

impl<'a, T: Cell> Paint<'a, T> {
    /// Copy from `source` with its origin at destination `(0, 0)`.
    pub fn copy(source: &'a dyn DataMap<Cell = T>) -> Self {
        Self::copy_at(source, Point::ZERO)
    }

    /// Copy from `source` with its origin at destination `offset`.
    pub fn copy_at(source: &'a dyn DataMap<Cell = T>, offset: Point) -> Self {
        Self::Copy { source, offset }
    }

    /// Value for destination cell `(x, y)`, `None` when copying from an empty source.
    pub(crate) fn sample(&self, x: i32, y: i32) -> Option<T> {
        match *self {
            Self::Constant(v) => Some(v),
            Self::Copy { source, offset } => {
                let (sw, sh) = (source.width(), source.height());
                if sw <= 0 || sh <= 0 {
                    return None;
                }
                Some(source.get(wrap(x, offset.x, sw), wrap(y, offset.y, sh)))
            }
        }
    }

    /// Replace `buf` with the values for columns `x0..=x1` of destination row `y`.
    ///
    /// Copies read whole non-wrapping runs through the source's raw view when it has one.
    /// Returns `false` (leaving `buf` empty) when copying from an empty source.
    pub(crate) fn fetch_row(&self, y: i32, x0: i32, x1: i32, buf: &mut Vec<T>) -> bool {
        buf.clear();
        let len = (x1 - x0 + 1).max(0) as usize;
        match *self {
            Self::Constant(v) => {
                buf.resize(len, v);
                true
            }
            Self::Copy { source, offset } => {
                let (sw, sh) = (source.width(), source.height());
                if sw <= 0 || sh <= 0 {
                    return false;
                }
                let sy = wrap(y, offset.y, sh);
                let raw = source.raw_access();
                let mut x = x0;
                while x <= x1 {
                    let sx = wrap(x, offset.x, sw);
                    let n = (x1 - x + 1).min(sw - sx);
                    match &raw {
                        Some(view) => buf.extend_from_slice(view.span(
                            sy as usize,
                            sx as usize,
                            (sx + n - 1) as usize,
                        )),
                        None => buf.extend((sx..sx + n).map(|sx| source.get(sx, sy))),
                    }
                    x += n;
                }
                true
            }
        }
    }
}

/// `(v - origin) mod size`, Euclidean. `size` must be positive.
fn wrap(v: i32, origin: i32, size: i32) -> i32 {
    (i64::from(v) - i64::from(origin)).rem_euclid(i64::from(size)) as i32
}

/// One draw request: what to paint, where the values come from, and how they combine.
pub struct DrawOp<'a, T> {
    /// Solid or outline.
    pub mode: DrawMode,
    /// Value source.
    pub paint: Paint<'a, T>,
    /// Blend mode and anti-aliasing.
    pub style: FillStyle,
}

impl<T: Copy> Clone for DrawOp<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Copy> Copy for DrawOp<'_, T> {}

impl<T: Cell> std::fmt::Debug for DrawOp<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawOp")
            .field("mode", &self.mode)
            .field("paint", &self.paint)
            .field("style", &self.style)
            .finish()
    }
}

impl<'a, T> DrawOp<'a, T> {
    /// Plain solid fill.
    pub fn solid(paint: Paint<'a, T>) -> Self {
        Self {
            mode: DrawMode::Solid,
            paint,
            style: FillStyle::REPLACE,
        }
    }

    /// Plain outline.
    pub fn outline(paint: Paint<'a, T>) -> Self {
        Self {
            mode: DrawMode::Outline,
            paint,
            style: FillStyle::REPLACE,
        }
    }

    /// Same operation with another style.
    pub fn with_style(self, style: FillStyle) -> Self {
        Self { style, ..self }
    }

    /// Operation kind used for backend selection.
    pub fn kind(&self) -> OpKind {
        let copy = matches!(self.paint, Paint::Copy { .. });
        match (self.mode, copy) {
            (DrawMode::Solid, false) => OpKind::SolidConstant,
            (DrawMode::Solid, true) => OpKind::SolidCopy,
            (DrawMode::Outline, false) => OpKind::OutlineConstant,
            (DrawMode::Outline, true) => OpKind::OutlineCopy,
        }
    }
}

/// Rendering backends a grid can register.
///
/// Grids list them in dispatch order; the first one whose [`Backend::supports`] accepts an
/// operation runs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable `get`/`set` implementation. All four operation kinds, plain style only.
    Generic,
    /// Solid fills over the grid's raw view. Plain style only.
    RawMemory,
    /// Solid fills on pixel grids with blend modes and anti-aliasing.
    ColorCompositing,
}

impl Backend {
    /// Whether this backend implements `op`.
    pub fn supports<T>(self, op: &DrawOp<'_, T>) -> bool {
        match self {
            Self::Generic => op.style.is_plain(),
            Self::RawMemory => op.mode == DrawMode::Solid && op.style.is_plain(),
            Self::ColorCompositing => op.mode == DrawMode::Solid,
        }
    }

    /// Execute `op` over the rows in `scanner`, limited to `clip`.
    pub(crate) fn run<M>(
        self,
        map: &mut M,
        scanner: &Scanner,
        clip: Rect,
        op: &DrawOp<'_, M::Cell>,
    ) -> RasterResult<()>
    where
        M: DataMap + ?Sized,
    {
        match (self, op.mode) {
            (Self::Generic, DrawMode::Solid) => {
                generic::solid(map, scanner, clip, &op.paint);
                Ok(())
            }
            (Self::Generic, DrawMode::Outline) => {
                generic::outline(map, scanner, clip, &op.paint);
                Ok(())
            }
            (Self::RawMemory, DrawMode::Solid) => raw::solid(map, scanner, clip, &op.paint),
            (Self::ColorCompositing, DrawMode::Solid) => {
                color::solid(map, scanner, clip, &op.paint, op.style)
            }
            (_, DrawMode::Outline) => Err(RasterError::unsupported(format!(
                "{self:?} backend cannot draw {:?}",
                op.kind()
            ))),
        }
    }
}

/// Non-anti-aliased cells of `row`, `floor(min)..=ceil(max)`, limited to `clip`'s columns.
pub(crate) fn clipped_cells(row: ScanRow, clip: Rect) -> Option<(i32, i32)> {
    let (x0, x1) = row.cell_span()?;
    let (x0, x1) = (x0.max(clip.min.x), x1.min(clip.max.x));
    (x0 <= x1).then_some((x0, x1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/ops.rs"]
mod tests;
