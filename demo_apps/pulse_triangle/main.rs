//! Pulse Triangle
//!
//! A textured triangle whose size pulses over time following
//! `1 + 0.5 * sin(2t)`. Exercises the whole bring-up path: device and
//! surface setup, a mapped vertex upload, a texture upload with a
//! checkerboard fallback, structural bind group validation, and the
//! resize-aware frame loop.

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

use glint::app::{App, AppHandler, FrameState, FrameSubmission, Window};
use glint::{
    BindEntry, BindingLayoutBlueprint, BoundResource, ColorTarget, DrawCall, GpuBuffer,
    GpuTexture, LayoutSlot, PipelineBuilder, PixelData, PulseUniforms, Renderer, Result,
    SamplerConfig, TextureDesc, UniformUpdate, VertexBufferBlueprint, assets,
};

const SHADER: &str = include_str!("shader.wgsl");
const LOGO_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/logo.png");

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct Vertex {
    position: Vec3,
    color: Vec4,
    uv: Vec2,
}

const VERTICES: [Vertex; 3] = [
    Vertex {
        position: Vec3::new(-1.0, -1.0, 0.0),
        color: Vec4::new(1.0, 1.0, 0.0, 1.0),
        uv: Vec2::new(-0.2, 1.0),
    },
    Vertex {
        position: Vec3::new(1.0, -1.0, 0.0),
        color: Vec4::new(0.0, 1.0, 1.0, 1.0),
        uv: Vec2::new(1.2, 1.0),
    },
    Vertex {
        position: Vec3::new(0.0, 1.0, 0.0),
        color: Vec4::new(1.0, 0.0, 1.0, 1.0),
        uv: Vec2::new(0.5, -0.5),
    },
];

fn load_logo() -> PixelData {
    match assets::load_rgba8(LOGO_PATH) {
        Ok(pixels) => pixels,
        Err(e) => {
            log::warn!("Could not load {LOGO_PATH}: {e}; using a checkerboard");
            PixelData::checkerboard(64, 64, 8, [255, 255, 255, 255], [40, 40, 60, 255])
        }
    }
}

struct PulseTriangle {
    pipeline: wgpu::RenderPipeline,
    bind_group: wgpu::BindGroup,
    vertex_buffer: GpuBuffer,
    uniform_buffer: GpuBuffer,
    pulse: PulseUniforms,
}

impl AppHandler for PulseTriangle {
    fn init(renderer: &mut Renderer, _window: &Arc<Window>) -> Result<Self> {
        let device = &renderer.gpu.device;
        let queue = &renderer.gpu.queue;

        let shader = renderer.gpu.create_shader_module("Pulse Shader", SHADER);

        // Vertex data goes through the mapped-at-creation window.
        let mut vertex_buffer = GpuBuffer::new_mapped(
            device,
            "Triangle Vertices",
            std::mem::size_of_val(&VERTICES) as u64,
            wgpu::BufferUsages::VERTEX,
        );
        vertex_buffer.write_mapped(0, bytemuck::cast_slice(&VERTICES))?;
        vertex_buffer.unmap()?;

        // Seeded with the t = 0 scale so the first frame reads a real value.
        let pulse = PulseUniforms::default();
        let uniform_buffer = GpuBuffer::from_data(
            device,
            "Pulse Uniforms",
            pulse.as_bytes(),
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        );

        let logo = load_logo();
        let texture = GpuTexture::new_2d(
            device,
            &TextureDesc {
                label: Some("Logo"),
                width: logo.width,
                height: logo.height,
                ..Default::default()
            },
        );
        texture.write(queue, &logo.pixels)?;
        let texture_view = texture.default_view();

        let sampler = SamplerConfig::default().create(device, Some("Logo Sampler"));

        let blueprint = BindingLayoutBlueprint::new(
            "Pulse Bindings",
            vec![
                LayoutSlot::uniform(0, wgpu::ShaderStages::VERTEX),
                LayoutSlot::sampler(1, wgpu::ShaderStages::FRAGMENT),
                LayoutSlot::texture_2d(2, wgpu::ShaderStages::FRAGMENT),
            ],
        );
        let layout = blueprint.create_layout(device);
        let bind_group = layout.create_bind_group(
            device,
            Some("Pulse Bind Group"),
            &[
                BindEntry::new(0, BoundResource::UniformBuffer(&uniform_buffer)),
                BindEntry::new(1, BoundResource::Sampler(&sampler)),
                BindEntry::new(2, BoundResource::Texture2d(&texture_view)),
            ],
        )?;

        let vertex_layouts = [VertexBufferBlueprint::vertex(
            std::mem::size_of::<Vertex>() as u64,
            vec![
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: std::mem::offset_of!(Vertex, position) as u64,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x4,
                    offset: std::mem::offset_of!(Vertex, color) as u64,
                    shader_location: 1,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: std::mem::offset_of!(Vertex, uv) as u64,
                    shader_location: 2,
                },
            ],
        )?];

        let pipeline = PipelineBuilder::new("Pulse Pipeline", &shader)
            .with_vertex_buffers(&vertex_layouts)
            .with_bind_layout(&layout)
            .with_target(ColorTarget::new(renderer.surface.format()))
            .build(device)?;

        Ok(Self {
            pipeline,
            bind_group,
            vertex_buffer,
            uniform_buffer,
            pulse,
        })
    }

    fn frame(&mut self, frame: &FrameState) -> FrameSubmission<'_> {
        self.pulse = PulseUniforms::at(frame.time);

        FrameSubmission {
            draw: DrawCall {
                pipeline: &self.pipeline,
                bind_group: &self.bind_group,
                vertex_buffer: &self.vertex_buffer,
                vertices: 0..3,
                instances: 0..1,
            },
            uniforms: Some(UniformUpdate {
                buffer: &self.uniform_buffer,
                payload: self.pulse.as_bytes(),
            }),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    App::new()
        .with_title("Pulse Triangle")
        .with_size(800, 600)
        .run::<PulseTriangle>()
}
