//! Ripple Tank Engine Library
//!
//! An interactive heightfield water simulation with wgpu rendering. The
//! library holds everything the window binary does not: the wave
//! simulation, world-to-grid mapping, camera raycasting, input edge
//! tracking and the tank renderer.
//!
//! # Modules
//!
//! - [`sim`] - Heightfield storage, wave integration and click disturbances
//! - [`world`] - World-space extent of the tank and cell mapping
//! - [`camera`] - Fixed tank camera and screen-to-surface raycasting
//! - [`input`] - Window-system-agnostic mouse and press-edge tracking
//! - [`render`] - wgpu context, meshes, uniforms and the frame renderer
//! - [`config`] - JSON startup configuration
//!
//! # Example
//!
//! ```ignore
//! use ripple_tank_engine::camera::Camera;
//! use ripple_tank_engine::sim::WaterSurface;
//!
//! let mut surface = WaterSurface::new(100);
//! let camera = Camera::default();
//!
//! // A click lands on the rest plane and becomes a disturbance.
//! if let Some(hit) = camera.raycast_to_surface((0.5, 0.5), 16.0 / 9.0) {
//!     surface.poke_world(hit.x, hit.y);
//! }
//! surface.update(1.0 / 60.0);
//! let heights = surface.heights();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod render;
pub mod sim;
pub mod world;

// Re-export the types nearly every caller needs
pub use camera::Camera;
pub use config::{AppConfig, ConfigError};
pub use input::{EdgeTrigger, MouseState};
pub use sim::{WaterSurface, WaveIntegrator};
pub use world::SurfaceExtent;
