//! Render Module
//!
//! wgpu-based rendering for the tank scene: GPU context management, the
//! water surface and basin meshes, shared camera uniforms and the frame
//! renderer.

pub mod basin;
pub mod gpu_context;
pub mod renderer;
pub mod shader_loader;
pub mod surface_mesh;
pub mod uniforms;

// Re-export commonly used types for convenience
pub use basin::{build_basin, BasinMesh, BASIN_DEPTH, WALL_RIM};
pub use gpu_context::{GpuContext, GpuContextConfig};
pub use renderer::{DisplayMode, TankRenderer};
pub use surface_mesh::{build_surface_vertices, grid_indices, SurfaceMesh, SurfaceVertex};
pub use uniforms::CameraUniforms;
