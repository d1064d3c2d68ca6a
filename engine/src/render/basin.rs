//! Basin Mesh
//!
//! Static geometry for the tank the water sits in: a floor below the rest
//! plane and two back walls on the far sides, leaving the camera an open
//! view into the interior. Built once at startup.

use crate::render::gpu_context::GpuContext;
use crate::render::surface_mesh::SurfaceVertex;
use crate::world::SurfaceExtent;

/// Depth of the basin floor below the water rest plane.
pub const BASIN_DEPTH: f32 = 3.0;

/// Height the walls rise above the rest plane.
pub const WALL_RIM: f32 = 1.0;

/// Color of the basin interior.
pub const BASIN_COLOR: [f32; 4] = [0.55, 0.5, 0.42, 1.0];

/// Append one quad as two triangles. `corners` are in CCW order as seen
/// from the `normal` side.
fn push_quad(
    vertices: &mut Vec<SurfaceVertex>,
    indices: &mut Vec<u32>,
    corners: [[f32; 3]; 4],
    normal: [f32; 3],
    color: [f32; 4],
) {
    let base = vertices.len() as u32;
    for position in corners {
        vertices.push(SurfaceVertex {
            position,
            normal,
            color,
        });
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Build the basin geometry for a tank of the given extent.
///
/// Returns the vertex and index arrays: a floor at `z = -BASIN_DEPTH` and
/// walls on the `x = -half` and `y = -half` sides rising to `z = WALL_RIM`.
pub fn build_basin(extent: &SurfaceExtent) -> (Vec<SurfaceVertex>, Vec<u32>) {
    let h = extent.half_size;
    let floor_z = -BASIN_DEPTH;
    let rim_z = WALL_RIM;

    let mut vertices = Vec::with_capacity(12);
    let mut indices = Vec::with_capacity(18);

    // Floor, normal up.
    push_quad(
        &mut vertices,
        &mut indices,
        [
            [-h, -h, floor_z],
            [h, -h, floor_z],
            [h, h, floor_z],
            [-h, h, floor_z],
        ],
        [0.0, 0.0, 1.0],
        BASIN_COLOR,
    );

    // Far wall at y = -h, normal facing into the tank (+Y).
    push_quad(
        &mut vertices,
        &mut indices,
        [
            [-h, -h, floor_z],
            [h, -h, floor_z],
            [h, -h, rim_z],
            [-h, -h, rim_z],
        ],
        [0.0, 1.0, 0.0],
        BASIN_COLOR,
    );

    // Far wall at x = -h, normal facing into the tank (+X).
    push_quad(
        &mut vertices,
        &mut indices,
        [
            [-h, -h, floor_z],
            [-h, h, floor_z],
            [-h, h, rim_z],
            [-h, -h, rim_z],
        ],
        [1.0, 0.0, 0.0],
        BASIN_COLOR,
    );

    (vertices, indices)
}

/// GPU-resident basin mesh. Geometry never changes after creation.
pub struct BasinMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl BasinMesh {
    pub fn new(gpu: &GpuContext, extent: &SurfaceExtent) -> Self {
        let (vertices, indices) = build_basin(extent);
        Self {
            vertex_buffer: gpu.create_vertex_buffer("Basin Vertices", &vertices),
            index_buffer: gpu.create_index_buffer("Basin Indices", &indices),
            index_count: indices.len() as u32,
        }
    }
}
