//! Wave Integrator
//!
//! Advances the heightfield by one time step using the discrete wave
//! equation in velocity form: each interior cell carries a scalar velocity
//! that is accelerated by the 4-neighbor Laplacian of the surrounding
//! heights and bled off by a damping factor so the surface settles back to
//! rest. Border cells are held fixed at rest height.
//!
//! Stability is structural, not detected after the fact: the elapsed time
//! is clamped to [`MAX_TIMESTEP`] (frame-time spikes) and to the CFL limit
//! of the explicit scheme (misconfigured wave speed / resolution), so no
//! input can make the update diverge.

use super::heightfield::HeightField;

/// Upper bound on a single integration step, in seconds.
///
/// Frame times above this (stalls, window drags, debugger pauses) are
/// integrated as if exactly this much time passed.
pub const MAX_TIMESTEP: f32 = 1.0 / 30.0;

/// Safety margin on the CFL stability limit `dt <= h / c` of the explicit
/// 4-neighbor scheme.
const CFL_SAFETY: f32 = 0.7;

/// Integration parameters for the wave update.
#[derive(Clone, Copy, Debug)]
pub struct WaveIntegrator {
    /// Wave propagation speed in world units per second.
    pub wave_speed: f32,
    /// Fraction of velocity amplitude retained per second, in (0, 1).
    pub damping: f32,
}

impl Default for WaveIntegrator {
    fn default() -> Self {
        Self {
            wave_speed: 1.2,
            damping: 0.5,
        }
    }
}

impl WaveIntegrator {
    /// Create an integrator with explicit constants.
    pub fn new(wave_speed: f32, damping: f32) -> Self {
        Self { wave_speed, damping }
    }

    /// Clamp a raw elapsed time to the range this integrator will accept.
    ///
    /// Negative and oversized frame times are clamped, never rejected; the
    /// second bound keeps the scheme inside its stability region for any
    /// wave speed / cell size combination.
    pub fn clamp_timestep(&self, elapsed_secs: f32, cell_size: f32) -> f32 {
        let dt = if elapsed_secs.is_finite() {
            elapsed_secs.clamp(0.0, MAX_TIMESTEP)
        } else {
            0.0
        };
        dt.min(CFL_SAFETY * cell_size / self.wave_speed)
    }

    /// Advance `u` (heights) and `v` (velocities) by one step.
    ///
    /// One pass over the interior accumulates Laplacian acceleration into
    /// `v` and damps it; a second pass applies `v` to `u`. Border cells are
    /// pinned to rest height (0.0) with zero velocity — the documented
    /// boundary policy. Both buffers must share dimensions; `cell_size` is
    /// the world-space spacing between adjacent cells.
    pub fn step(&self, u: &mut HeightField, v: &mut HeightField, cell_size: f32, elapsed_secs: f32) {
        debug_assert_eq!(u.width(), v.width());
        debug_assert_eq!(u.height(), v.height());

        let dt = self.clamp_timestep(elapsed_secs, cell_size);
        if dt <= 0.0 {
            return;
        }

        let width = u.width();
        let height = u.height();
        if width < 3 || height < 3 {
            // No interior to integrate.
            return;
        }

        let accel = self.wave_speed * self.wave_speed / (cell_size * cell_size) * dt;
        let decay = self.damping.powf(dt);

        // Pass 1: accelerate and damp velocities from the current heights.
        for i in 1..width - 1 {
            for j in 1..height - 1 {
                let idx = i * height + j;
                let heights = u.as_slice();
                let lap = heights[idx - height]
                    + heights[idx + height]
                    + heights[idx - 1]
                    + heights[idx + 1]
                    - 4.0 * heights[idx];
                let vel = &mut v.as_mut_slice()[idx];
                *vel = (*vel + lap * accel) * decay;
            }
        }

        // Pass 2: apply velocities to heights (interior only).
        for i in 1..width - 1 {
            for j in 1..height - 1 {
                let idx = i * height + j;
                u.as_mut_slice()[idx] += v.as_slice()[idx] * dt;
            }
        }

        // Border policy: held at rest. A disturbance stamp placed at the
        // innermost valid cell touches the border ring; pinning it here
        // keeps that transient.
        for i in 0..width {
            u.set(i, 0, 0.0);
            u.set(i, height - 1, 0.0);
        }
        for j in 0..height {
            u.set(0, j, 0.0);
            u.set(width - 1, j, 0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_buffers(n: usize) -> (HeightField, HeightField) {
        (HeightField::new(n, n), HeightField::new(n, n))
    }

    #[test]
    fn test_rest_state_is_fixed_point() {
        let (mut u, mut v) = make_buffers(16);
        let integrator = WaveIntegrator::default();
        for _ in 0..100 {
            integrator.step(&mut u, &mut v, 6.0 / 16.0, 1.0 / 60.0);
        }
        assert_eq!(u.max_abs(), 0.0);
        assert_eq!(v.max_abs(), 0.0);
    }

    #[test]
    fn test_disturbance_spreads_to_neighbors() {
        let (mut u, mut v) = make_buffers(16);
        let integrator = WaveIntegrator::default();
        u.set(8, 8, 1.0);
        for _ in 0..30 {
            integrator.step(&mut u, &mut v, 6.0 / 16.0, 1.0 / 60.0);
        }
        // The peak must have moved some energy outward.
        assert!(u.get(8, 8) < 1.0);
        assert!(u.get(6, 8).abs() > 0.0 || u.get(10, 8).abs() > 0.0);
    }

    #[test]
    fn test_negative_elapsed_is_a_no_op() {
        let (mut u, mut v) = make_buffers(8);
        u.set(4, 4, 1.0);
        let before = u.as_slice().to_vec();
        WaveIntegrator::default().step(&mut u, &mut v, 6.0 / 8.0, -1.0);
        assert_eq!(u.as_slice(), &before[..]);
    }

    #[test]
    fn test_nan_elapsed_is_a_no_op() {
        let (mut u, mut v) = make_buffers(8);
        u.set(4, 4, 1.0);
        let before = u.as_slice().to_vec();
        WaveIntegrator::default().step(&mut u, &mut v, 6.0 / 8.0, f32::NAN);
        assert_eq!(u.as_slice(), &before[..]);
    }

    #[test]
    fn test_clamp_timestep_bounds() {
        let integrator = WaveIntegrator::default();
        let h = 6.0 / 100.0;
        assert_eq!(integrator.clamp_timestep(-5.0, h), 0.0);
        assert_eq!(integrator.clamp_timestep(5.0, h), integrator.clamp_timestep(MAX_TIMESTEP, h));
        assert!(integrator.clamp_timestep(0.001, h) == 0.001);
    }

    #[test]
    fn test_cfl_clamp_engages_for_fast_waves() {
        // Absurd wave speed: the CFL bound must undercut MAX_TIMESTEP.
        let integrator = WaveIntegrator::new(100.0, 0.5);
        let h = 6.0 / 100.0;
        let dt = integrator.clamp_timestep(MAX_TIMESTEP, h);
        assert!(dt < MAX_TIMESTEP);
        assert!(dt <= 0.7 * h / 100.0 + f32::EPSILON);
    }

    #[test]
    fn test_borders_stay_at_rest() {
        let (mut u, mut v) = make_buffers(8);
        // Stamp-like write into the border ring.
        u.set(0, 3, 0.7);
        u.set(7, 4, 0.7);
        WaveIntegrator::default().step(&mut u, &mut v, 6.0 / 8.0, 1.0 / 60.0);
        for k in 0..8 {
            assert_eq!(u.get(0, k), 0.0);
            assert_eq!(u.get(7, k), 0.0);
            assert_eq!(u.get(k, 0), 0.0);
            assert_eq!(u.get(k, 7), 0.0);
        }
    }

    #[test]
    fn test_tiny_grid_has_no_interior() {
        let (mut u, mut v) = make_buffers(2);
        u.set(1, 1, 1.0);
        WaveIntegrator::default().step(&mut u, &mut v, 3.0, 1.0 / 60.0);
        // Nothing to integrate, nothing to pin except borders (all cells).
        assert!(u.is_finite());
    }
}
