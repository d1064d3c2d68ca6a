//! Water Surface Mesh
//!
//! Turns the simulation heightfield into renderable geometry. The grid
//! triangulation is fixed at startup (index buffer built once); only the
//! vertex buffer is rewritten each frame from the current heights.

use crate::render::gpu_context::GpuContext;
use crate::sim::WaterSurface;
use crate::world::SurfaceExtent;

/// Base color of the water surface before lighting.
pub const WATER_COLOR: [f32; 4] = [0.15, 0.45, 0.75, 1.0];

/// Vertex format shared by the water and basin meshes.
/// Layout must match the 40-byte vertex layout the mesh pipeline declares.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(SurfaceVertex, [u8; 40]);

/// World X/Y of grid vertex `i` out of `count`, spanning the full extent.
#[inline]
fn vertex_world(extent: &SurfaceExtent, i: usize, count: usize) -> f32 {
    -extent.half_size + i as f32 / (count - 1).max(1) as f32 * extent.size()
}

/// Build the triangle indices for a `width x height` vertex grid.
///
/// Each of the `(width-1) * (height-1)` cells becomes two CCW triangles
/// (seen from above). Vertex indices follow the heightfield layout,
/// `i * height + j`.
pub fn grid_indices(width: usize, height: usize) -> Vec<u32> {
    debug_assert!(width >= 2 && height >= 2, "grid needs at least one cell");
    let mut indices = Vec::with_capacity((width - 1) * (height - 1) * 6);
    for i in 0..width - 1 {
        for j in 0..height - 1 {
            let v00 = (i * height + j) as u32;
            let v10 = ((i + 1) * height + j) as u32;
            let v01 = (i * height + j + 1) as u32;
            let v11 = ((i + 1) * height + j + 1) as u32;

            indices.extend_from_slice(&[v00, v10, v11]);
            indices.extend_from_slice(&[v00, v11, v01]);
        }
    }
    indices
}

/// Build the vertex array for the current heights.
///
/// One vertex per grid cell, positioned across the full tank extent, with
/// normals from central height differences (one-sided at the borders).
pub fn build_surface_vertices(surface: &WaterSurface) -> Vec<SurfaceVertex> {
    let width = surface.width();
    let height = surface.height();
    let extent = surface.extent();
    let spacing = extent.size() / (width - 1).max(1) as f32;

    let mut vertices = Vec::with_capacity(width * height);
    for i in 0..width {
        let x = vertex_world(&extent, i, width);
        for j in 0..height {
            let y = vertex_world(&extent, j, height);
            let z = surface.height_at(i, j);

            // Central differences where both neighbors exist, one-sided
            // at the grid border.
            let (left, right, dx) = if i == 0 {
                (surface.height_at(0, j), surface.height_at(1, j), spacing)
            } else if i == width - 1 {
                (
                    surface.height_at(width - 2, j),
                    surface.height_at(width - 1, j),
                    spacing,
                )
            } else {
                (
                    surface.height_at(i - 1, j),
                    surface.height_at(i + 1, j),
                    2.0 * spacing,
                )
            };
            let (down, up, dy) = if j == 0 {
                (surface.height_at(i, 0), surface.height_at(i, 1), spacing)
            } else if j == height - 1 {
                (
                    surface.height_at(i, height - 2),
                    surface.height_at(i, height - 1),
                    spacing,
                )
            } else {
                (
                    surface.height_at(i, j - 1),
                    surface.height_at(i, j + 1),
                    2.0 * spacing,
                )
            };

            let normal = glam::Vec3::new(-(right - left) / dx, -(up - down) / dy, 1.0)
                .normalize()
                .to_array();

            vertices.push(SurfaceVertex {
                position: [x, y, z],
                normal,
                color: WATER_COLOR,
            });
        }
    }
    vertices
}

/// GPU-resident water surface mesh: a static index buffer and a vertex
/// buffer rewritten from the heightfield every frame.
pub struct SurfaceMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
    vertices: Vec<SurfaceVertex>,
}

impl SurfaceMesh {
    /// Allocate buffers sized for the given surface.
    pub fn new(gpu: &GpuContext, surface: &WaterSurface) -> Self {
        let indices = grid_indices(surface.width(), surface.height());
        let vertices = build_surface_vertices(surface);

        let vertex_buffer = gpu.create_dynamic_vertex_buffer(
            "Water Surface Vertices",
            (vertices.len() * std::mem::size_of::<SurfaceVertex>()) as u64,
        );
        gpu.write_buffer(&vertex_buffer, &vertices);
        let index_buffer = gpu.create_index_buffer("Water Surface Indices", &indices);

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            vertices,
        }
    }

    /// Rebuild vertices from the current heights and upload them.
    pub fn upload(&mut self, gpu: &GpuContext, surface: &WaterSurface) {
        self.vertices = build_surface_vertices(surface);
        gpu.write_buffer(&self.vertex_buffer, &self.vertices);
    }
}
