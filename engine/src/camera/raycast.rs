//! Raycast Module
//!
//! Screen-to-world raycasting against the horizontal water plane. A click
//! becomes a ray through the camera frustum; its intersection with z = 0 is
//! the world point handed to the disturbance mapping.

use glam::Vec3;

/// Calculate the world-space ray direction through a screen point.
///
/// # Arguments
/// * `camera_pos` - Camera position in world space
/// * `camera_target` - Point the camera is looking at
/// * `uv` - Normalized screen coordinates (0-1, 0-1) where (0,0) is bottom-left
/// * `aspect_ratio` - Screen aspect ratio (width / height)
/// * `fov` - Vertical field of view in radians
///
/// # Returns
/// Normalized ray direction in world space.
pub fn get_ray_direction(
    camera_pos: Vec3,
    camera_target: Vec3,
    uv: (f32, f32),
    aspect_ratio: f32,
    fov: f32,
) -> Vec3 {
    // Convert UV to NDC (-1 to 1)
    let ndc = (uv.0 * 2.0 - 1.0, uv.1 * 2.0 - 1.0);

    let half_fov = (fov * 0.5_f32).tan();

    let forward = (camera_target - camera_pos).normalize();
    let up_world = Vec3::Z;

    // Handle the degenerate basis when looking straight up/down
    let (right, up) = if forward.z.abs() > 0.99 {
        let right = Vec3::X;
        let up = right.cross(forward).normalize();
        (right, up)
    } else {
        let right = forward.cross(up_world).normalize();
        let up = right.cross(forward);
        (right, up)
    };

    (forward + right * ndc.0 * aspect_ratio * half_fov + up * ndc.1 * half_fov).normalize()
}

/// Raycast from screen UV coordinates to a horizontal plane at a given height.
///
/// # Arguments
/// * `camera_pos` - Camera position in world space
/// * `camera_target` - Point the camera is looking at
/// * `uv` - Normalized screen coordinates (0-1, 0-1) where (0,0) is bottom-left
/// * `aspect_ratio` - Screen aspect ratio (width / height)
/// * `fov` - Vertical field of view in radians
/// * `plane_z` - Z coordinate of the horizontal plane
///
/// # Returns
/// * `Some(Vec3)` - The intersection point on the plane
/// * `None` - If the ray is parallel to the plane or the hit is behind the camera
pub fn raycast_to_plane(
    camera_pos: Vec3,
    camera_target: Vec3,
    uv: (f32, f32),
    aspect_ratio: f32,
    fov: f32,
    plane_z: f32,
) -> Option<Vec3> {
    let ray_dir = get_ray_direction(camera_pos, camera_target, uv, aspect_ratio, fov);

    // Ray: P = camera_pos + t * ray_dir
    // Plane: z = plane_z
    if ray_dir.z.abs() < 0.0001 {
        return None;
    }

    let t = (plane_z - camera_pos.z) / ray_dir.z;
    if t < 0.0 {
        return None;
    }

    Some(camera_pos + ray_dir * t)
}

/// Raycast from screen UV coordinates to the water rest plane at z = 0.
pub fn raycast_to_surface(
    camera_pos: Vec3,
    camera_target: Vec3,
    uv: (f32, f32),
    aspect_ratio: f32,
    fov: f32,
) -> Option<Vec3> {
    raycast_to_plane(camera_pos, camera_target, uv, aspect_ratio, fov, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOV: f32 = 1.047; // ~60 degrees

    #[test]
    fn test_ray_direction_normalized() {
        let camera_pos = Vec3::new(5.0, 5.0, 5.0);
        let camera_target = Vec3::new(0.0, 0.0, -2.0);

        for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
            for y in [0.0, 0.25, 0.5, 0.75, 1.0] {
                let ray = get_ray_direction(camera_pos, camera_target, (x, y), 16.0 / 9.0, FOV);
                let len = ray.length();
                assert!(
                    (len - 1.0).abs() < 0.001,
                    "Ray should be normalized, got length {}",
                    len
                );
            }
        }
    }

    #[test]
    fn test_center_ray_points_at_target() {
        let camera_pos = Vec3::new(5.0, 5.0, 5.0);
        let camera_target = Vec3::new(0.0, 0.0, -2.0);

        let ray = get_ray_direction(camera_pos, camera_target, (0.5, 0.5), 16.0 / 9.0, FOV);
        let forward = (camera_target - camera_pos).normalize();
        assert!(ray.dot(forward) > 0.9999);
    }

    #[test]
    fn test_center_raycast_hits_plane_on_view_axis() {
        let camera_pos = Vec3::new(5.0, 5.0, 5.0);
        let camera_target = Vec3::new(0.0, 0.0, -2.0);

        let hit = raycast_to_surface(camera_pos, camera_target, (0.5, 0.5), 1.0, FOV).unwrap();
        assert!(hit.z.abs() < 1e-4);
        // The segment from camera to target crosses z = 0 at t = 5/7.
        assert!((hit.x - 5.0 * 2.0 / 7.0).abs() < 1e-3);
        assert!((hit.y - 5.0 * 2.0 / 7.0).abs() < 1e-3);
    }

    #[test]
    fn test_parallel_ray_returns_none() {
        // Camera looking horizontally: center ray never crosses z = 0.
        let camera_pos = Vec3::new(0.0, -10.0, 5.0);
        let camera_target = Vec3::new(0.0, 0.0, 5.0);

        let result = raycast_to_surface(camera_pos, camera_target, (0.5, 0.5), 1.0, FOV);
        assert!(result.is_none());
    }

    #[test]
    fn test_hit_behind_camera_returns_none() {
        // Looking up and away from the plane.
        let camera_pos = Vec3::new(0.0, 0.0, 5.0);
        let camera_target = Vec3::new(0.0, 5.0, 10.0);

        let result = raycast_to_surface(camera_pos, camera_target, (0.5, 0.5), 1.0, FOV);
        assert!(result.is_none());
    }

    #[test]
    fn test_straight_down_uses_fallback_basis() {
        let camera_pos = Vec3::new(1.0, 2.0, 5.0);
        let camera_target = Vec3::new(1.0, 2.0, 0.0);

        let hit = raycast_to_surface(camera_pos, camera_target, (0.5, 0.5), 1.0, FOV).unwrap();
        assert!((hit.x - 1.0).abs() < 1e-4);
        assert!((hit.y - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_screen_right_moves_hit_along_right_axis() {
        let camera_pos = Vec3::new(5.0, 5.0, 5.0);
        let camera_target = Vec3::new(0.0, 0.0, -2.0);

        let center = raycast_to_surface(camera_pos, camera_target, (0.5, 0.5), 1.0, FOV).unwrap();
        let right = raycast_to_surface(camera_pos, camera_target, (0.9, 0.5), 1.0, FOV).unwrap();

        let forward = (camera_target - camera_pos).normalize();
        let right_axis = forward.cross(Vec3::Z).normalize();
        let offset = right - center;
        assert!(offset.dot(right_axis) > 0.0);
    }

    #[test]
    fn test_custom_plane_height() {
        let camera_pos = Vec3::new(0.0, 0.0, 5.0);
        let camera_target = Vec3::new(0.0, 0.0, -5.0);

        let hit =
            raycast_to_plane(camera_pos, camera_target, (0.5, 0.5), 1.0, FOV, -3.0).unwrap();
        assert!((hit.z + 3.0).abs() < 1e-4);
    }
}
