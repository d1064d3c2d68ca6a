//! Disturbance Stamp
//!
//! A click on the water writes a fixed, hand-authored 3x3 pattern of
//! heights around the impact cell. The pattern is asymmetric on purpose
//! (one neighbor gets a distinctly smaller value) and is assigned directly
//! rather than added, so hammering the same cell does not pile up energy.

use super::heightfield::HeightField;

/// Height written to the impact cell itself.
pub const STAMP_CENTER: f32 = 1.2;

/// Height written to seven of the eight surrounding cells.
pub const STAMP_RING: f32 = 0.7;

/// Height written to the `(i, j-1)` neighbor — the stamp's asymmetry.
pub const STAMP_WAKE: f32 = 0.5;

/// True if the full 3x3 stamp centered on `(i, j)` fits inside the grid.
///
/// The stamp touches `i-1..=i+1` and `j-1..=j+1`, so the center must stay
/// in `[1, width-2] x [1, height-2]`. This is the caller-side gate for
/// [`apply_stamp`]; the mapping path must reject any cell that fails it.
#[inline]
pub fn stamp_in_bounds(grid: &HeightField, i: usize, j: usize) -> bool {
    i >= 1 && j >= 1 && i + 1 < grid.width() && j + 1 < grid.height()
}

/// Write the 9-cell disturbance stamp centered on `(i, j)`.
///
/// The target must already satisfy [`stamp_in_bounds`]; this function does
/// not clamp (debug builds assert). Overwrite semantics: the nine cells are
/// assigned, not accumulated.
pub fn apply_stamp(grid: &mut HeightField, i: usize, j: usize) {
    debug_assert!(stamp_in_bounds(grid, i, j), "stamp center ({i}, {j}) out of range");

    grid.set(i, j, STAMP_CENTER);
    grid.set(i - 1, j - 1, STAMP_RING);
    grid.set(i - 1, j, STAMP_RING);
    grid.set(i - 1, j + 1, STAMP_RING);
    grid.set(i + 1, j - 1, STAMP_RING);
    grid.set(i + 1, j, STAMP_RING);
    grid.set(i + 1, j + 1, STAMP_RING);
    grid.set(i, j + 1, STAMP_RING);
    grid.set(i, j - 1, STAMP_WAKE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_values_exact() {
        let mut grid = HeightField::new(10, 10);
        apply_stamp(&mut grid, 5, 5);

        assert_eq!(grid.get(5, 5), STAMP_CENTER);
        assert_eq!(grid.get(4, 4), STAMP_RING);
        assert_eq!(grid.get(4, 5), STAMP_RING);
        assert_eq!(grid.get(4, 6), STAMP_RING);
        assert_eq!(grid.get(6, 4), STAMP_RING);
        assert_eq!(grid.get(6, 5), STAMP_RING);
        assert_eq!(grid.get(6, 6), STAMP_RING);
        assert_eq!(grid.get(5, 6), STAMP_RING);
        assert_eq!(grid.get(5, 4), STAMP_WAKE);
    }

    #[test]
    fn test_stamp_ordering() {
        // center > ring > wake — the documented relative shape.
        assert!(STAMP_CENTER > STAMP_RING);
        assert!(STAMP_RING > STAMP_WAKE);
        assert!(STAMP_WAKE > 0.0);
    }

    #[test]
    fn test_stamp_overwrites_instead_of_adding() {
        let mut grid = HeightField::new(10, 10);
        apply_stamp(&mut grid, 5, 5);
        apply_stamp(&mut grid, 5, 5);
        // Double click, same values: no accumulation.
        assert_eq!(grid.get(5, 5), STAMP_CENTER);
        assert_eq!(grid.get(5, 4), STAMP_WAKE);
    }

    #[test]
    fn test_stamp_leaves_other_cells_untouched() {
        let mut grid = HeightField::new(10, 10);
        grid.set(1, 1, 0.33);
        apply_stamp(&mut grid, 5, 5);
        assert_eq!(grid.get(1, 1), 0.33);
        assert_eq!(grid.get(3, 5), 0.0);
        assert_eq!(grid.get(7, 5), 0.0);
    }

    #[test]
    fn test_bounds_check() {
        let grid = HeightField::new(10, 10);
        assert!(stamp_in_bounds(&grid, 1, 1));
        assert!(stamp_in_bounds(&grid, 8, 8));
        assert!(!stamp_in_bounds(&grid, 0, 5));
        assert!(!stamp_in_bounds(&grid, 5, 0));
        assert!(!stamp_in_bounds(&grid, 9, 5));
        assert!(!stamp_in_bounds(&grid, 5, 9));
    }
}
