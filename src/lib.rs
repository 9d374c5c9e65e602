//! scanraster is a scanline rasterizer for generic 2D grids.
//!
//! A [`Shape`] writes its horizontal extent per row into a [`Scanner`]; a [`Renderer`] picks the
//! first capable [`Backend`] registered by the target [`DataMap`] and paints the covered cells:
//!
//! - any cell type through plain `get`/`set` (solid and outline fills)
//! - any raw-accessible grid through contiguous row spans
//! - [`Pixel`] grids with [`BlendMode`]s and anti-aliased edges
//!
//! Draws honor the grid's clip stack ([`DataMap::push_clip`] / [`DataMap::pop_clip`]).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod grid;
mod render;
mod scan;
mod shape;

pub use kurbo;

pub use crate::color::blend::{BlendMode, FillStyle, blend_over, composite, reduce_mode};
pub use crate::color::coverage::RowCoverage;
pub use crate::color::pixel::Pixel;
pub use crate::foundation::core::{Point, Rect};
pub use crate::foundation::error::{RasterError, RasterResult};
pub use crate::grid::buffer::{Bitmap, Grid};
pub use crate::grid::clip::ClipStack;
pub use crate::grid::{Cell, DataMap, RawRef, RawView};
pub use crate::render::renderer::{RenderOpts, Renderer};
pub use crate::render::{Backend, DrawMode, DrawOp, OpKind, Paint};
pub use crate::scan::pool::{ScannerLease, ScannerPool, ScannerPoolOpts, ScannerPoolStats};
pub use crate::scan::scanner::{ScanRow, Scanner};
pub use crate::shape::Shape;
pub use crate::shape::path::PathShape;
