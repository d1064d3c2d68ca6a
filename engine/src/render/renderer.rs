//! Tank Renderer
//!
//! Owns the render pipelines, camera uniform buffer and bind group, and
//! records the per-frame pass drawing the basin and the water surface.

use crate::render::basin::BasinMesh;
use crate::render::gpu_context::GpuContext;
use crate::render::shader_loader::embedded;
use crate::render::surface_mesh::SurfaceMesh;
use crate::render::uniforms::CameraUniforms;

/// How the water surface is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Filled, lit triangles.
    Solid,
    /// Line rendering of the same triangulation.
    Wireframe,
}

impl DisplayMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Solid => DisplayMode::Wireframe,
            DisplayMode::Wireframe => DisplayMode::Solid,
        }
    }
}

/// Pipelines and shared uniforms for the tank scene.
pub struct TankRenderer {
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    basin_pipeline: wgpu::RenderPipeline,
    water_pipeline: wgpu::RenderPipeline,
    /// `None` when the adapter has no line rasterization; the toggle then
    /// falls back to solid.
    water_wireframe_pipeline: Option<wgpu::RenderPipeline>,
}

impl TankRenderer {
    pub fn new(gpu: &GpuContext) -> Self {
        let camera_buffer = gpu.create_uniform_buffer("Camera Uniforms", &CameraUniforms::default());

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Camera Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let camera_bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        let basin_pipeline = gpu.create_mesh_pipeline(
            "Basin",
            embedded::BASIN,
            &bind_group_layout,
            wgpu::PolygonMode::Fill,
        );
        let water_pipeline = gpu.create_mesh_pipeline(
            "Water Surface",
            embedded::WATER_SURFACE,
            &bind_group_layout,
            wgpu::PolygonMode::Fill,
        );
        let water_wireframe_pipeline = gpu.wireframe_supported.then(|| {
            gpu.create_mesh_pipeline(
                "Water Surface Wireframe",
                embedded::WATER_SURFACE,
                &bind_group_layout,
                wgpu::PolygonMode::Line,
            )
        });

        Self {
            camera_buffer,
            camera_bind_group,
            basin_pipeline,
            water_pipeline,
            water_wireframe_pipeline,
        }
    }

    /// Upload this frame's camera uniforms.
    pub fn update_camera(&self, gpu: &GpuContext, uniforms: &CameraUniforms) {
        gpu.queue
            .write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(uniforms));
    }

    /// Record and submit the frame: clear, draw basin, draw water.
    pub fn render(
        &self,
        gpu: &GpuContext,
        basin: &BasinMesh,
        water: &SurfaceMesh,
        mode: DisplayMode,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = gpu.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Tank Frame Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Tank Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.03,
                            b: 0.05,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &gpu.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_bind_group(0, &self.camera_bind_group, &[]);

            pass.set_pipeline(&self.basin_pipeline);
            pass.set_vertex_buffer(0, basin.vertex_buffer.slice(..));
            pass.set_index_buffer(basin.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..basin.index_count, 0, 0..1);

            let water_pipeline = match mode {
                DisplayMode::Wireframe => self
                    .water_wireframe_pipeline
                    .as_ref()
                    .unwrap_or(&self.water_pipeline),
                DisplayMode::Solid => &self.water_pipeline,
            };
            pass.set_pipeline(water_pipeline);
            pass.set_vertex_buffer(0, water.vertex_buffer.slice(..));
            pass.set_index_buffer(water.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            pass.draw_indexed(0..water.index_count, 0, 0..1);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Whether the wireframe display mode is actually available.
    pub fn wireframe_available(&self) -> bool {
        self.water_wireframe_pipeline.is_some()
    }
}
