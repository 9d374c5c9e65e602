use crate::{
    foundation::error::{RasterError, RasterResult},
    grid::DataMap,
    render::{Backend, DrawOp},
    scan::pool::ScannerPool,
    shape::Shape,
};

/// First backend in `backends` that supports `op`.
pub(crate) fn select<T>(backends: &[Backend], op: &DrawOp<'_, T>) -> Option<Backend> {
    backends.iter().copied().find(|b| b.supports(op))
}

/// Rasterize `shape` into `map` with `op`.
///
/// Picks the grid's first capable backend, resolves the effective clip, scans the shape into a
/// pooled scanner and hands the rows to the backend. The clip stack is never modified and the
/// scanner goes back to the pool on every path.
#[tracing::instrument(level = "trace", skip_all, fields(kind = ?op.kind()))]
pub(crate) fn render<M, S>(
    pool: &ScannerPool,
    map: &mut M,
    shape: &S,
    op: &DrawOp<'_, M::Cell>,
) -> RasterResult<()>
where
    M: DataMap + ?Sized,
    S: Shape + ?Sized,
{
    let Some(backend) = select(map.backends(), op) else {
        tracing::warn!(
            backends = ?map.backends(),
            style = ?op.style,
            "no backend supports operation"
        );
        return Err(RasterError::unsupported(format!(
            "{:?} with {:?} on backends {:?}",
            op.kind(),
            op.style,
            map.backends()
        )));
    };

    let clip = map.clip();
    if !clip.is_valid() {
        tracing::debug!(?clip, "empty clip, nothing to draw");
        return Ok(());
    }

    let mut scanner = pool.lease(map.height() as usize);
    scanner.reset(clip.min.y, clip.max.y);
    shape.scan(&mut scanner, clip);
    tracing::debug!(?backend, rows = scanner.rows().count(), "dispatching");
    backend.run(map, &scanner, clip, op)
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
