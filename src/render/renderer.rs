use crate::{
    color::blend::FillStyle,
    foundation::error::{RasterError, RasterResult},
    grid::DataMap,
    render::{DrawOp, Paint, dispatch},
    scan::pool::{ScannerPool, ScannerPoolOpts, ScannerPoolStats},
    shape::Shape,
};

/// Renderer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOpts {
    /// Scanner pool settings.
    pub pool: ScannerPoolOpts,
}

impl RenderOpts {
    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> RasterResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| RasterError::config(format!("invalid render options: {e}")))
    }
}

/// Entry point for drawing shapes into grids.
///
/// Owns the scanner pool shared by every draw. The renderer itself is `Send + Sync`, so one
/// instance can serve draws on different grids from several threads.
#[derive(Debug, Default)]
pub struct Renderer {
    pool: ScannerPool,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(opts: RenderOpts) -> Self {
        Self {
            pool: ScannerPool::new(opts.pool),
        }
    }

    /// Options this renderer was created with.
    pub fn opts(&self) -> RenderOpts {
        RenderOpts {
            pool: self.pool.opts(),
        }
    }

    /// Draw `shape` into `map` with `op`.
    ///
    /// Fails with `UnsupportedOperation` when none of the grid's backends implements `op`. An
    /// empty effective clip draws nothing and succeeds.
    pub fn render<M, S>(
        &self,
        map: &mut M,
        shape: &S,
        op: &DrawOp<'_, M::Cell>,
    ) -> RasterResult<()>
    where
        M: DataMap + ?Sized,
        S: Shape + ?Sized,
    {
        dispatch::render(&self.pool, map, shape, op)
    }

    /// Solid fill of `shape`.
    pub fn fill<M, S>(
        &self,
        map: &mut M,
        shape: &S,
        paint: Paint<'_, M::Cell>,
        style: FillStyle,
    ) -> RasterResult<()>
    where
        M: DataMap + ?Sized,
        S: Shape + ?Sized,
    {
        self.render(map, shape, &DrawOp::solid(paint).with_style(style))
    }

    /// Plain outline of `shape`.
    pub fn outline<M, S>(
        &self,
        map: &mut M,
        shape: &S,
        paint: Paint<'_, M::Cell>,
    ) -> RasterResult<()>
    where
        M: DataMap + ?Sized,
        S: Shape + ?Sized,
    {
        self.render(map, shape, &DrawOp::outline(paint))
    }

    /// Scanner pool counters.
    pub fn pool_stats(&self) -> ScannerPoolStats {
        self.pool.stats()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
