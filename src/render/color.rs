use crate::{
    color::{
        blend::{BlendMode, FillStyle, composite, reduce_mode},
        coverage::RowCoverage,
        pixel::Pixel,
    },
    foundation::{
        core::Rect,
        error::{RasterError, RasterResult},
        math::coverage_u8,
    },
    grid::{Cell, DataMap},
    render::Paint,
    scan::scanner::{ScanRow, Scanner},
};

/// Solid fill for pixel grids with blend modes and optional anti-aliasing.
///
/// Without anti-aliasing the covered cells are the generic fill's `floor(min)..=ceil(max)`, all at
/// full coverage. With anti-aliasing each row is split into the fully covered core and the
/// fractional fringe from [`RowCoverage`]. Constant and copied sources go through the same
/// per-pixel compositing, so equal source values give bit-identical output.
pub(crate) fn solid<M>(
    map: &mut M,
    scanner: &Scanner,
    clip: Rect,
    paint: &Paint<'_, M::Cell>,
    style: FillStyle,
) -> RasterResult<()>
where
    M: DataMap + ?Sized,
{
    if <M::Cell as Cell>::as_pixels(&[]).is_none() {
        return Err(RasterError::capability(
            "color compositing backend requires pixel cells",
        ));
    }
    if !map.supports_raw_access() {
        return Err(RasterError::capability(
            "color compositing backend requires a grid with raw access",
        ));
    }

    let constant = match paint {
        Paint::Constant(v) => {
            let px = v.to_pixel().ok_or_else(|| {
                RasterError::capability("color compositing backend requires pixel cells")
            })?;
            if reduce_mode(style.blend, px.a).is_none() {
                tracing::debug!("mask with transparent source, nothing to draw");
                return Ok(());
            }
            Some(px)
        }
        Paint::Copy { .. } => None,
    };
    // Full-coverage pixels of a constant that reduces to Replace are plain stores.
    let fast = constant.filter(|px| reduce_mode(style.blend, px.a) == Some(BlendMode::Replace));

    let mut view = map.raw_access_mut().ok_or_else(|| {
        RasterError::capability("grid declares raw access but handed out no view")
    })?;

    let (lo, hi) = (clip.min.x, clip.max.x);
    let mut fetched = Vec::new();
    for (y, row) in scanner.rows() {
        let Some(span) = RowSpan::new(row, scanner, y, style.antialias, lo, hi) else {
            continue;
        };
        let (x0, x1) = (span.x0, span.x1);

        let cells = view.span_mut(y as usize, x0 as usize, x1 as usize);
        let dst = <M::Cell as Cell>::as_pixels_mut(cells).ok_or_else(|| {
            RasterError::capability("color compositing backend requires pixel cells")
        })?;

        let src_row: Option<&[Pixel]> = match constant {
            Some(_) => None,
            None => {
                if !paint.fetch_row(y, x0, x1, &mut fetched) {
                    return Ok(());
                }
                <M::Cell as Cell>::as_pixels(&fetched)
            }
        };

        if let (Some(src), Some((c0, c1))) = (fast, span.core) {
            dst[(c0 - x0) as usize..=(c1 - x0) as usize].fill(src);
        }

        for (i, d) in dst.iter_mut().enumerate() {
            let x = x0 + i as i32;
            let full = span.is_core(x);
            if full && fast.is_some() {
                continue;
            }
            let src = match (constant, src_row) {
                (Some(px), _) => px,
                (None, Some(row)) => row[i],
                (None, None) => return Ok(()),
            };
            let coverage = if full { 255 } else { span.coverage(x) };
            if let Some(out) = composite(*d, src, coverage, style.blend) {
                *d = out;
            }
        }
    }
    Ok(())
}

/// Columns touched in one row, limited to the clip, with the fully covered core.
struct RowSpan {
    x0: i32,
    x1: i32,
    core: Option<(i32, i32)>,
    edges: Option<RowCoverage>,
}

impl RowSpan {
    fn new(
        row: ScanRow,
        scanner: &Scanner,
        y: i32,
        antialias: bool,
        lo: i32,
        hi: i32,
    ) -> Option<Self> {
        let (range, core, edges) = if antialias {
            let edges = RowCoverage::from_neighbors(row, scanner.above(y), scanner.below(y))
                .clip_x(lo as f32, hi as f32);
            (edges.pixel_range()?, edges.core(), Some(edges))
        } else {
            let cells = row.cell_span()?;
            (cells, Some(cells), None)
        };
        let (x0, x1) = (range.0.max(lo), range.1.min(hi));
        if x0 > x1 {
            return None;
        }
        let core = core
            .map(|(c0, c1)| (c0.max(x0), c1.min(x1)))
            .filter(|(c0, c1)| c0 <= c1);
        Some(Self {
            x0,
            x1,
            core,
            edges,
        })
    }

    fn is_core(&self, x: i32) -> bool {
        self.core.is_some_and(|(c0, c1)| c0 <= x && x <= c1)
    }

    fn coverage(&self, x: i32) -> u16 {
        self.edges.map_or(255, |edges| coverage_u8(edges.coverage(x)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
