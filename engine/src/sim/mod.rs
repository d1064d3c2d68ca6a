//! Simulation Module
//!
//! The heightfield wave simulation: grid storage, the per-frame wave
//! integration step, and the click disturbance stamp. Everything here is
//! plain CPU state with no rendering or windowing dependencies, so the
//! whole module is testable headless.

pub mod disturbance;
pub mod heightfield;
pub mod integrator;

pub use disturbance::{apply_stamp, stamp_in_bounds, STAMP_CENTER, STAMP_RING, STAMP_WAKE};
pub use heightfield::HeightField;
pub use integrator::{WaveIntegrator, MAX_TIMESTEP};

use crate::world::SurfaceExtent;

/// The complete water surface state: heights, velocities, world extent and
/// integration constants.
///
/// Exclusively owned by the frame loop. One frame is strictly sequenced:
/// optional [`poke_world`](Self::poke_world) on a click edge, then
/// [`update`](Self::update), then the render path reads
/// [`heights`](Self::heights) — reads never mutate.
pub struct WaterSurface {
    u: HeightField,
    v: HeightField,
    extent: SurfaceExtent,
    integrator: WaveIntegrator,
}

impl WaterSurface {
    /// Create a surface at rest with the given square resolution and the
    /// default extent and wave constants.
    pub fn new(resolution: usize) -> Self {
        Self::with_params(resolution, SurfaceExtent::default(), WaveIntegrator::default())
    }

    /// Create a surface at rest with explicit extent and integrator.
    pub fn with_params(resolution: usize, extent: SurfaceExtent, integrator: WaveIntegrator) -> Self {
        Self {
            u: HeightField::new(resolution, resolution),
            v: HeightField::new(resolution, resolution),
            extent,
            integrator,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.u.width()
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.u.height()
    }

    /// The world-space footprint of the surface.
    #[inline]
    pub fn extent(&self) -> SurfaceExtent {
        self.extent
    }

    /// Read-only view of the current heights, row-major (`i * height + j`).
    #[inline]
    pub fn heights(&self) -> &[f32] {
        self.u.as_slice()
    }

    /// Height at cell `(i, j)`.
    #[inline]
    pub fn height_at(&self, i: usize, j: usize) -> f32 {
        self.u.get(i, j)
    }

    /// Advance the simulation by `elapsed_secs` (clamped internally).
    pub fn update(&mut self, elapsed_secs: f32) {
        let cell_size = self.extent.cell_size(self.u.width());
        self.integrator.step(&mut self.u, &mut self.v, cell_size, elapsed_secs);
    }

    /// Stamp a disturbance at a world-space point on the surface plane.
    ///
    /// Maps the point to a grid cell, rejects cells where the 3x3 stamp
    /// would spill past the grid, and otherwise writes the stamp. Returns
    /// the stamped cell, or `None` if the point was outside the tank or in
    /// the outermost cell ring.
    pub fn poke_world(&mut self, x: f32, y: f32) -> Option<(usize, usize)> {
        let (i, j) = self
            .extent
            .world_to_cell(x, y, self.u.width(), self.u.height())?;
        if !stamp_in_bounds(&self.u, i, j) {
            return None;
        }
        apply_stamp(&mut self.u, i, j);
        Some((i, j))
    }

    /// Stamp a disturbance at a grid cell already known to be in stamp
    /// range (`1 <= i <= width-2`, `1 <= j <= height-2`).
    pub fn poke_cell(&mut self, i: usize, j: usize) {
        apply_stamp(&mut self.u, i, j);
    }

    /// Reset heights and velocities to the rest state.
    pub fn reset(&mut self) {
        self.u.reset();
        self.v.reset();
    }

    /// Largest absolute height on the surface.
    pub fn max_abs_height(&self) -> f32 {
        self.u.max_abs()
    }
}
