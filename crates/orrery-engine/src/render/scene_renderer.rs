use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawItem, DrawList, Scene, ShaderId, ShapeId};
use crate::shader::Shader;

/// Renderer for a scene graph's `DrawList`.
///
/// GPU resources are created lazily and cached:
/// - one pipeline per shader, rebuilt when the surface format changes
/// - one vertex/index buffer pair per shape (shapes are immutable)
/// - one uniform buffer holding a `DrawUniform` per draw item, bound with
///   dynamic offsets
///
/// Caches are keyed by scene handles, so use one renderer per scene.
#[derive(Default)]
pub struct SceneRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipelines: HashMap<ShaderId, wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    pipeline_layout: Option<wgpu::PipelineLayout>,

    meshes: HashMap<ShapeId, GpuMesh>,

    uniform_ubo: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_capacity: usize,
    uniform_bytes: Vec<u8>,

    warned_missing_shader: bool,
}

struct GpuMesh {
    vbo: wgpu::Buffer,
    ibo: wgpu::Buffer,
    index_count: u32,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws `draw_list` on top of the target's current contents.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        scene: &Scene,
        draw_list: &DrawList,
    ) {
        if draw_list.is_empty() {
            return;
        }

        self.ensure_layouts(ctx);

        let mut drawable: Vec<&DrawItem> = Vec::with_capacity(draw_list.len());
        for item in draw_list.items() {
            if !self.ensure_pipeline(ctx, scene, item.shader) {
                continue;
            }
            if !self.ensure_mesh(ctx, scene, item.shape) {
                continue;
            }
            drawable.push(item);
        }

        if drawable.is_empty() {
            return;
        }

        let stride = uniform_stride(ctx.device.limits().min_uniform_buffer_offset_alignment);
        self.ensure_uniform_capacity(ctx, drawable.len(), stride);
        self.write_uniforms(ctx, &drawable, stride);

        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("orrery scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
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
            multiview_mask: None,
        });

        let mut bound_shader = None;
        for (i, item) in drawable.iter().enumerate() {
            let (Some(pipeline), Some(mesh)) =
                (self.pipelines.get(&item.shader), self.meshes.get(&item.shape))
            else {
                continue;
            };

            if bound_shader != Some(item.shader) {
                rpass.set_pipeline(pipeline);
                bound_shader = Some(item.shader);
            }

            let offset = (i as u64 * stride) as wgpu::DynamicOffset;
            rpass.set_bind_group(0, bind_group, &[offset]);
            rpass.set_vertex_buffer(0, mesh.vbo.slice(..));
            rpass.set_index_buffer(mesh.ibo.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_layouts(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format != Some(ctx.surface_format) {
            if self.pipeline_format.is_some() {
                log::debug!("surface format changed; rebuilding scene pipelines");
            }
            self.pipelines.clear();
            self.pipeline_format = Some(ctx.surface_format);
        }

        if self.bind_group_layout.is_some() && self.pipeline_layout.is_some() {
            return;
        }

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("orrery draw bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: true,
                        min_binding_size: wgpu::BufferSize::new(DRAW_UNIFORM_SIZE),
                    },
                    count: None,
                }],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("orrery scene pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        self.bind_group_layout = Some(bind_group_layout);
        self.pipeline_layout = Some(pipeline_layout);
        self.bind_group = None;
        self.uniform_ubo = None;
        self.uniform_capacity = 0;
    }

    /// Returns whether a pipeline for `id` is available.
    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>, scene: &Scene, id: ShaderId) -> bool {
        if self.pipelines.contains_key(&id) {
            return true;
        }
        let Some(shader) = scene.shader(id) else {
            if !self.warned_missing_shader {
                log::warn!("draw item references unknown shader {id:?}; skipping");
                self.warned_missing_shader = true;
            }
            return false;
        };
        let Some(layout) = self.pipeline_layout.as_ref() else { return false };

        let pipeline = create_pipeline(ctx, layout, shader);
        log::debug!("built pipeline for shader '{}'", shader.label());
        self.pipelines.insert(id, pipeline);
        true
    }

    /// Returns whether a non-empty mesh for `id` is uploaded.
    fn ensure_mesh(&mut self, ctx: &RenderCtx<'_>, scene: &Scene, id: ShapeId) -> bool {
        if self.meshes.contains_key(&id) {
            return true;
        }
        let Some(shape) = scene.shape(id) else { return false };

        let mesh = shape.mesh();
        if mesh.indices.is_empty() || mesh.positions.is_empty() {
            return false;
        }

        let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orrery shape vbo"),
            contents: bytemuck::cast_slice(&mesh.positions),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orrery shape ibo"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        self.meshes.insert(
            id,
            GpuMesh {
                vbo,
                ibo,
                index_count: mesh.indices.len() as u32,
            },
        );
        true
    }

    fn ensure_uniform_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize, stride: u64) {
        if required <= self.uniform_capacity && self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let new_cap = required.next_power_of_two().max(16);
        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("orrery draw ubo"),
            size: new_cap as u64 * stride,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orrery draw bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: wgpu::BufferSize::new(DRAW_UNIFORM_SIZE),
                }),
            }],
        });

        self.uniform_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
        self.uniform_capacity = new_cap;
    }

    fn write_uniforms(&mut self, ctx: &RenderCtx<'_>, items: &[&DrawItem], stride: u64) {
        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        pack_uniforms(&mut self.uniform_bytes, items, stride);
        ctx.queue.write_buffer(ubo, 0, &self.uniform_bytes);
    }
}

fn create_pipeline(
    ctx: &RenderCtx<'_>,
    layout: &wgpu::PipelineLayout,
    shader: &Shader,
) -> wgpu::RenderPipeline {
    let label = format!("orrery {} shader", shader.label());
    let vertex_module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label.as_str()),
        source: wgpu::ShaderSource::Wgsl(shader.vertex().source().into()),
    });
    let separate_fragment = (!shader.is_single_module()).then(|| {
        ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label.as_str()),
            source: wgpu::ShaderSource::Wgsl(shader.fragment().source().into()),
        })
    });
    let fragment_module = separate_fragment.as_ref().unwrap_or(&vertex_module);

    let vertex_attrs = wgpu::vertex_attr_array![0 => Float32x2];

    ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label.as_str()),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &vertex_module,
            entry_point: Some(shader.vertex().entry_point()),
            compilation_options: Default::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &vertex_attrs,
            }],
        },
        fragment: Some(wgpu::FragmentState {
            module: fragment_module,
            entry_point: Some(shader.fragment().entry_point()),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: ctx.surface_format,
                blend: Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Negative scales flip winding; 2D content is drawn double-sided.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Per-draw uniform (80 bytes), matching WGSL `DrawUniform`:
///
///  offset  0  mvp    mat4x4<f32>  (column-major)
///  offset 64  color  vec4<f32>    (linear premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct DrawUniform {
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

const DRAW_UNIFORM_SIZE: u64 = std::mem::size_of::<DrawUniform>() as u64;

impl DrawUniform {
    fn from_item(item: &DrawItem) -> Self {
        Self {
            mvp: item.mvp.to_cols_array_2d(),
            color: item.color.to_array(),
        }
    }
}

/// Distance between consecutive draw uniforms: the uniform size rounded up
/// to the device's dynamic-offset alignment.
fn uniform_stride(min_alignment: u32) -> u64 {
    let align = u64::from(min_alignment.max(1));
    DRAW_UNIFORM_SIZE.div_ceil(align) * align
}

fn pack_uniforms(out: &mut Vec<u8>, items: &[&DrawItem], stride: u64) {
    let stride = stride as usize;
    out.clear();
    out.resize(items.len() * stride, 0);
    for (i, item) in items.iter().enumerate() {
        let uniform = DrawUniform::from_item(item);
        let start = i * stride;
        out[start..start + DRAW_UNIFORM_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&uniform));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::{Mat4, Vec3};

    use crate::paint::Color;

    fn item(x: f32, color: Color) -> DrawItem {
        let m = Mat4::from_translation(Vec3::new(x, 0.0, 0.0));
        DrawItem {
            shape: ShapeId(0),
            shader: ShaderId::DEFAULT,
            model: m,
            mvp: m,
            color,
        }
    }

    #[test]
    fn draw_uniform_matches_wgsl_layout() {
        assert_eq!(DRAW_UNIFORM_SIZE, 80);
    }

    #[test]
    fn stride_rounds_up_to_alignment() {
        assert_eq!(uniform_stride(256), 256);
        assert_eq!(uniform_stride(64), 128);
        assert_eq!(uniform_stride(16), 80);
        assert_eq!(uniform_stride(0), 80);
    }

    #[test]
    fn uniforms_are_packed_at_stride_offsets() {
        let a = item(1.0, Color::WHITE);
        let b = item(2.0, Color::rgb(0.0, 0.0, 0.5));
        let mut bytes = Vec::new();
        pack_uniforms(&mut bytes, &[&a, &b], 256);

        assert_eq!(bytes.len(), 512);

        let second: DrawUniform = bytemuck::pod_read_unaligned(&bytes[256..256 + 80]);
        assert_eq!(second.mvp[3][0], 2.0);
        assert_eq!(second.color, [0.0, 0.0, 0.5, 1.0]);

        // Padding between uniforms stays zeroed.
        assert!(bytes[80..256].iter().all(|&b| b == 0));
    }
}
