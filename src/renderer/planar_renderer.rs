//! A 2D renderer for flat-colored fills and outlines.
//!
//! Fills and strokes are tessellated on the CPU into a single triangle list, so
//! they reach the screen in the exact order they were submitted: a later fill
//! covers an earlier outline, as on a painter's canvas.

use bytemuck::{Pod, Zeroable};
use glamx::Vec2;

use super::tessellation::{self, Tri};
use crate::color::{self, Color};
use crate::context::Context;

/// A vertex of a flat-colored triangle, in pixel coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PlanarVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// View uniforms for 2D rendering.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
struct ViewUniforms2D {
    viewport: [f32; 4], // x, y, width, height
}

/// Triangles queued for the next frame, three vertices each.
///
/// Filling the batch needs no GPU; only [`PlanarRenderer::render`] does.
#[derive(Clone, Debug, Default)]
pub struct PlanarBatch {
    vertices: Vec<PlanarVertex>,
}

impl PlanarBatch {
    /// An empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indicates whether some geometry needs to be rendered.
    pub fn needs_rendering(&self) -> bool {
        !self.vertices.is_empty()
    }

    /// The queued vertices, in submission order.
    pub fn vertices(&self) -> &[PlanarVertex] {
        &self.vertices
    }

    /// Queues a convex polygon filled with `color`.
    pub fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let tris = tessellation::fan_triangles(points);
        self.push_triangles(&tris, color);
    }

    /// Queues the outline of a path, closed or not.
    pub fn stroke_polyline(&mut self, points: &[Vec2], closed: bool, color: Color, width: f32) {
        let tris = tessellation::stroke_segments(points, closed, width);
        self.push_triangles(&tris, color);
    }

    /// Drops every queued triangle.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn push_triangles(&mut self, tris: &[Tri], color: Color) {
        let color = color::to_array(color);
        self.vertices.extend(tris.iter().flatten().map(|p| PlanarVertex {
            position: [p.x, p.y],
            color,
        }));
    }
}

/// Structure which manages the display of filled polygons and polylines.
pub struct PlanarRenderer {
    pipeline: wgpu::RenderPipeline,
    view_bind_group_layout: wgpu::BindGroupLayout,
    view_uniform_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
}

impl PlanarRenderer {
    /// Creates a new 2D renderer drawing into textures of the context's surface format.
    pub fn new(ctxt: &Context) -> PlanarRenderer {
        let view_bind_group_layout =
            ctxt.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("planar_view_bind_group_layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = ctxt.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("planar_pipeline_layout"),
            bind_group_layouts: &[&view_bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = ctxt.create_shader_module(
            Some("planar_shape_shader"),
            include_str!("../builtin/planar_shape.wgsl"),
        );

        let vertex_buffer_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PlanarVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // position (vec2)
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // color (vec4)
                wgpu::VertexAttribute {
                    offset: 8,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        };

        let pipeline = ctxt.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("planar_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctxt.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // Winding depends on the shape, draw both faces.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let view_uniform_buffer = ctxt.create_buffer(&wgpu::BufferDescriptor {
            label: Some("planar_view_uniform_buffer"),
            size: std::mem::size_of::<ViewUniforms2D>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let vertex_capacity = 1024;
        let vertex_buffer = Self::create_vertex_buffer(ctxt, vertex_capacity);

        PlanarRenderer {
            pipeline,
            view_bind_group_layout,
            view_uniform_buffer,
            vertex_buffer,
            vertex_capacity,
        }
    }

    /// Renders every triangle of `batch` in a single draw call, on top of the current
    /// content of `color_view`.
    ///
    /// The viewport size is the extent, in the batch's coordinate units, that
    /// covers the whole target.
    ///
    /// The batch is empty afterward.
    pub fn render(
        &mut self,
        ctxt: &Context,
        encoder: &mut wgpu::CommandEncoder,
        color_view: &wgpu::TextureView,
        viewport_width: f32,
        viewport_height: f32,
        batch: &mut PlanarBatch,
    ) {
        if !batch.needs_rendering() {
            return;
        }

        let view_uniforms = ViewUniforms2D {
            viewport: [0.0, 0.0, viewport_width, viewport_height],
        };
        ctxt.write_buffer(
            &self.view_uniform_buffer,
            0,
            bytemuck::bytes_of(&view_uniforms),
        );

        self.ensure_vertex_buffer_capacity(ctxt, batch.vertices.len());
        ctxt.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&batch.vertices));

        let view_bind_group = self.create_view_bind_group(ctxt);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("planar_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &view_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            render_pass.draw(0..batch.vertices.len() as u32, 0..1);
        }

        batch.clear();
    }

    fn create_vertex_buffer(ctxt: &Context, capacity: usize) -> wgpu::Buffer {
        ctxt.create_buffer(&wgpu::BufferDescriptor {
            label: Some("planar_vertex_buffer"),
            size: (std::mem::size_of::<PlanarVertex>() * capacity) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn ensure_vertex_buffer_capacity(&mut self, ctxt: &Context, needed: usize) {
        if needed > self.vertex_capacity {
            let new_capacity = needed.next_power_of_two();
            log::debug!(
                "Growing planar vertex buffer from {} to {} vertices.",
                self.vertex_capacity,
                new_capacity
            );
            self.vertex_buffer = Self::create_vertex_buffer(ctxt, new_capacity);
            self.vertex_capacity = new_capacity;
        }
    }

    fn create_view_bind_group(&self, ctxt: &Context) -> wgpu::BindGroup {
        ctxt.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("planar_view_bind_group"),
            layout: &self.view_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: self.view_uniform_buffer.as_entire_binding(),
            }],
        })
    }
}
