//! World Module
//!
//! World-space configuration for the water tank: the fixed square extent
//! the surface occupies and its mapping to grid cells.

pub mod extent;

pub use extent::SurfaceExtent;
