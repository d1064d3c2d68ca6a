//! Uniform Structs for GPU Shaders
//!
//! GPU-compatible uniform buffer structures that must match WGSL layout exactly.

use crate::camera::Camera;
use glam::Vec3;

/// Per-frame camera uniforms shared by the water and basin shaders.
/// Must match the WGSL struct layout exactly!
///
/// WGSL layout (80 bytes total):
///   offset  0: view_proj (mat4x4<f32>) = 64 bytes
///   offset 64: camera_pos (vec3<f32>)  = 12 bytes
///   offset 76: time (f32)              = 4 bytes
///   Total: 80 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 3],
    /// Seconds since startup, available for shader animation.
    pub time: f32,
}

static_assertions::assert_eq_size!(CameraUniforms, [u8; 80]);

impl CameraUniforms {
    /// Build the frame uniforms for a camera at the given aspect ratio.
    pub fn from_camera(camera: &Camera, aspect_ratio: f32, time: f32) -> Self {
        Self {
            view_proj: camera.view_projection(aspect_ratio).to_cols_array_2d(),
            camera_pos: camera.position.to_array(),
            time,
        }
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            camera_pos: Vec3::ZERO.to_array(),
            time: 0.0,
        }
    }
}
