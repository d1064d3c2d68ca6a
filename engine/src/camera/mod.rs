//! Camera Module
//!
//! Fixed viewpoint over the tank and the screen-to-world raycast used to
//! place disturbances. Window-system agnostic - only camera state and math.

pub mod raycast;

pub use raycast::{get_ray_direction, raycast_to_plane, raycast_to_surface};

use glam::{Mat4, Vec3};

/// The fixed camera looking down into the tank.
///
/// The world is Z-up: the water rests in the z = 0 plane and the camera
/// sits above and to the side, aimed slightly below the surface center so
/// the basin interior fills the frame.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, 5.0),
            target: Vec3::new(0.0, 0.0, -2.0),
            up: Vec3::Z,
            fov: 60.0_f32.to_radians(),
            near: 0.1,
            far: 100.0,
        }
    }
}

impl Camera {
    /// View matrix (right-handed look-at).
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projection matrix for the given aspect ratio (width / height).
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect_ratio, self.near, self.far)
    }

    /// Combined view-projection matrix.
    pub fn view_projection(&self, aspect_ratio: f32) -> Mat4 {
        self.projection(aspect_ratio) * self.view()
    }

    /// Raycast from a normalized screen position (bottom-left origin) onto
    /// the water plane at z = 0.
    pub fn raycast_to_surface(&self, uv: (f32, f32), aspect_ratio: f32) -> Option<Vec3> {
        raycast::raycast_to_surface(self.position, self.target, uv, aspect_ratio, self.fov)
    }
}
