//! Shader Sources
//!
//! WGSL shaders compiled into the binary. Pipelines take their source from
//! here; there is no runtime shader loading.

/// Embedded shaders that are compiled into the binary.
pub mod embedded {
    /// Lit water surface shader.
    pub const WATER_SURFACE: &str = include_str!("../../../shaders/water_surface.wgsl");

    /// Flat-shaded basin floor and walls.
    pub const BASIN: &str = include_str!("../../../shaders/basin.wgsl");
}
