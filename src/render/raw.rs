use crate::{
    foundation::{
        core::Rect,
        error::{RasterError, RasterResult},
    },
    grid::DataMap,
    render::{Paint, clipped_cells},
    scan::scanner::Scanner,
};

/// Solid fill writing whole row spans through the grid's raw view.
///
/// Covers the same cells as the generic fill. Copies fetch one source run per row and copy it in
/// with a single slice write.
pub(crate) fn solid<M>(
    map: &mut M,
    scanner: &Scanner,
    clip: Rect,
    paint: &Paint<'_, M::Cell>,
) -> RasterResult<()>
where
    M: DataMap + ?Sized,
{
    if !map.supports_raw_access() {
        return Err(RasterError::capability(
            "raw memory backend requires a grid with raw access",
        ));
    }
    let mut view = map.raw_access_mut().ok_or_else(|| {
        RasterError::capability("grid declares raw access but handed out no view")
    })?;

    let mut fetched = Vec::new();
    for (y, row) in scanner.rows() {
        let Some((x0, x1)) = clipped_cells(row, clip) else {
            continue;
        };
        let dst = view.span_mut(y as usize, x0 as usize, x1 as usize);
        match paint {
            Paint::Constant(v) => dst.fill(*v),
            Paint::Copy { .. } => {
                if !paint.fetch_row(y, x0, x1, &mut fetched) {
                    return Ok(());
                }
                dst.copy_from_slice(&fetched);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raw.rs"]
mod tests;
