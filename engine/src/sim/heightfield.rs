//! Heightfield Storage
//!
//! Contains the 2D grid of scalar height samples that the wave simulation
//! integrates in place every frame. Stored as a single contiguous buffer
//! with row-major indexing (`i * height + j`) instead of nested arrays,
//! so the render upload path can read the whole surface as one slice.

/// A fixed-size 2D grid of `f32` height samples.
///
/// Allocated once at startup and mutated in place; never resized. All cells
/// start at the rest height (0.0). Accessors do not bounds-check in release
/// builds — callers are responsible for staying in `0..width` / `0..height`,
/// and debug builds assert the contract.
#[derive(Clone, Debug)]
pub struct HeightField {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl HeightField {
    /// Create a grid of `width * height` cells, all at rest height.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Grid width (number of cells along the world X axis).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height (number of cells along the world Y axis).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat buffer index for cell `(i, j)`.
    #[inline]
    pub fn idx(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.width && j < self.height, "cell ({i}, {j}) out of range");
        i * self.height + j
    }

    /// Read the height at cell `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[self.idx(i, j)]
    }

    /// Write the height at cell `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f32) {
        let idx = self.idx(i, j);
        self.data[idx] = value;
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Reset the grid to the rest state (all zeros).
    pub fn reset(&mut self) {
        self.fill(0.0);
    }

    /// Read-only view of the whole buffer, row-major (`i * height + j`).
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable view of the whole buffer, row-major.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Largest absolute height over all cells. Useful for stability checks.
    pub fn max_abs(&self) -> f32 {
        self.data.iter().fold(0.0f32, |m, v| m.max(v.abs()))
    }

    /// True if every cell holds a finite value.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_at_rest() {
        let grid = HeightField::new(8, 8);
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 8);
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut grid = HeightField::new(4, 6);
        grid.set(3, 5, 1.25);
        assert_eq!(grid.get(3, 5), 1.25);
        // Row-major layout: cell (i, j) lives at i * height + j
        assert_eq!(grid.as_slice()[3 * 6 + 5], 1.25);
    }

    #[test]
    fn test_non_square_indexing() {
        let mut grid = HeightField::new(3, 7);
        grid.set(2, 0, -0.5);
        grid.set(0, 6, 0.5);
        assert_eq!(grid.get(2, 0), -0.5);
        assert_eq!(grid.get(0, 6), 0.5);
        assert_eq!(grid.get(1, 3), 0.0);
    }

    #[test]
    fn test_fill_and_reset() {
        let mut grid = HeightField::new(5, 5);
        grid.fill(2.0);
        assert_eq!(grid.max_abs(), 2.0);
        grid.reset();
        assert_eq!(grid.max_abs(), 0.0);
    }

    #[test]
    fn test_max_abs_uses_magnitude() {
        let mut grid = HeightField::new(4, 4);
        grid.set(1, 1, -3.0);
        grid.set(2, 2, 2.0);
        assert_eq!(grid.max_abs(), 3.0);
    }

    #[test]
    fn test_is_finite() {
        let mut grid = HeightField::new(4, 4);
        assert!(grid.is_finite());
        grid.set(0, 0, f32::NAN);
        assert!(!grid.is_finite());
    }

    #[test]
    #[should_panic]
    fn test_zero_dimension_panics() {
        let _ = HeightField::new(0, 10);
    }
}
