//! Surface Extent
//!
//! Maps between the fixed world-space square the water occupies and grid
//! cell indices. The tank covers `[-half_size, half_size]` on X and Y,
//! centered at the origin, with the surface at rest in the z = 0 plane.
//!
//! Extent and grid resolution must always change together: a cell index is
//! only meaningful for the resolution it was computed against, so the
//! mapping functions take the grid dimensions explicitly.

/// World-space footprint of the water surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceExtent {
    /// Half the side length of the square region. The tank spans
    /// `[-half_size, half_size]` on both axes.
    pub half_size: f32,
}

impl Default for SurfaceExtent {
    fn default() -> Self {
        // The classic 6x6 tank: world coordinates in [-3, 3].
        Self { half_size: 3.0 }
    }
}

impl SurfaceExtent {
    /// Create an extent with a custom half-size.
    ///
    /// # Panics
    /// Panics if `half_size` is not strictly positive.
    pub fn new(half_size: f32) -> Self {
        assert!(half_size > 0.0, "extent half_size must be positive");
        Self { half_size }
    }

    /// Full side length of the tank.
    #[inline]
    pub fn size(&self) -> f32 {
        self.half_size * 2.0
    }

    /// World-space spacing between adjacent cells for a grid `width` cells
    /// across.
    #[inline]
    pub fn cell_size(&self, width: usize) -> f32 {
        self.size() / width as f32
    }

    /// Map a world-space point to the grid cell containing it.
    ///
    /// `i = floor((x + half) / size * width)`, likewise for `j`. Points
    /// outside the tank return `None`; points exactly on the max edge clamp
    /// to the last cell. This says nothing about whether a disturbance may
    /// be stamped there — that is the separate
    /// [`stamp_in_bounds`](crate::sim::stamp_in_bounds) check.
    pub fn world_to_cell(
        &self,
        x: f32,
        y: f32,
        width: usize,
        height: usize,
    ) -> Option<(usize, usize)> {
        if x < -self.half_size || x > self.half_size || y < -self.half_size || y > self.half_size {
            return None;
        }
        let size = self.size();
        let i = ((x + self.half_size) / size * width as f32).floor() as usize;
        let j = ((y + self.half_size) / size * height as f32).floor() as usize;
        Some((i.min(width - 1), j.min(height - 1)))
    }

    /// World-space center of cell `(i, j)`.
    pub fn cell_center_world(&self, i: usize, j: usize, width: usize, height: usize) -> (f32, f32) {
        let size = self.size();
        let x = -self.half_size + (i as f32 + 0.5) / width as f32 * size;
        let y = -self.half_size + (j as f32 + 0.5) / height as f32 * size;
        (x, y)
    }

    /// World-space position of the grid vertex for cell `(i, j)` (the
    /// cell's min corner), used when building the surface mesh.
    pub fn cell_corner_world(&self, i: usize, j: usize, width: usize, height: usize) -> (f32, f32) {
        let size = self.size();
        let x = -self.half_size + i as f32 / width as f32 * size;
        let y = -self.half_size + j as f32 / height as f32 * size;
        (x, y)
    }
}
