use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::assets::{CubemapFaces, GpuTexture};
use crate::gpu::{SceneUniforms, DEPTH_FORMAT};
use crate::transform::skybox_view;

/// Skybox cube corner. Layout: position(vec3) = 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkyboxVertex {
    pub position: [f32; 3],
}

impl SkyboxVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SkyboxVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    };
}

const fn v(x: f32, y: f32, z: f32) -> SkyboxVertex {
    SkyboxVertex {
        position: [x, y, z],
    }
}

/// Unit cube as 12 triangles, two per face.
pub const SKYBOX_VERTICES: [SkyboxVertex; 36] = [
    // -Z
    v(-1.0, 1.0, -1.0),
    v(-1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0),
    v(1.0, 1.0, -1.0),
    v(-1.0, 1.0, -1.0),
    // -X
    v(-1.0, -1.0, 1.0),
    v(-1.0, -1.0, -1.0),
    v(-1.0, 1.0, -1.0),
    v(-1.0, 1.0, -1.0),
    v(-1.0, 1.0, 1.0),
    v(-1.0, -1.0, 1.0),
    // +X
    v(1.0, -1.0, -1.0),
    v(1.0, -1.0, 1.0),
    v(1.0, 1.0, 1.0),
    v(1.0, 1.0, 1.0),
    v(1.0, 1.0, -1.0),
    v(1.0, -1.0, -1.0),
    // +Z
    v(-1.0, -1.0, 1.0),
    v(-1.0, 1.0, 1.0),
    v(1.0, 1.0, 1.0),
    v(1.0, 1.0, 1.0),
    v(1.0, -1.0, 1.0),
    v(-1.0, -1.0, 1.0),
    // +Y
    v(-1.0, 1.0, -1.0),
    v(1.0, 1.0, -1.0),
    v(1.0, 1.0, 1.0),
    v(1.0, 1.0, 1.0),
    v(-1.0, 1.0, 1.0),
    v(-1.0, 1.0, -1.0),
    // -Y
    v(-1.0, -1.0, -1.0),
    v(-1.0, -1.0, 1.0),
    v(1.0, -1.0, -1.0),
    v(1.0, -1.0, -1.0),
    v(-1.0, -1.0, 1.0),
    v(1.0, -1.0, 1.0),
];

pub(crate) const SKYBOX_SHADER_SOURCE: &str = r#"
struct Camera {
    projection: mat4x4<f32>,
    view: mat4x4<f32>,
    light_dir: vec4<f32>,
    eye: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

@group(1) @binding(0)
var skybox_texture: texture_cube<f32>;
@group(1) @binding(1)
var skybox_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) direction: vec3<f32>,
};

@vertex
fn vs_main(@location(0) position: vec3<f32>) -> VertexOutput {
    var out: VertexOutput;
    let clip = camera.projection * camera.view * vec4<f32>(position, 1.0);
    // z = w puts every fragment on the far plane.
    out.clip_position = clip.xyww;
    out.direction = position;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(skybox_texture, skybox_sampler, in.direction);
}
"#;

/// Cubemap background drawn at the far plane behind the scene.
pub struct SkyboxRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    cubemap: GpuTexture,
    texture_bind_group: wgpu::BindGroup,
}

impl SkyboxRenderer {
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        scene_layout: &wgpu::BindGroupLayout,
        cube_layout: &wgpu::BindGroupLayout,
        faces: &CubemapFaces,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skybox shader"),
            source: wgpu::ShaderSource::Wgsl(SKYBOX_SHADER_SOURCE.into()),
        });

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("skybox uniforms"),
            contents: bytemuck::bytes_of(&SceneUniforms::new(
                Mat4::IDENTITY,
                Mat4::IDENTITY,
                glam::Vec3::Y,
                glam::Vec3::ZERO,
            )),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("skybox uniform bind group"),
            layout: scene_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let cubemap = GpuTexture::cubemap(device, queue, faces);
        let texture_bind_group = cubemap.bind_group(device, cube_layout, "skybox bind group");

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skybox pipeline layout"),
            bind_group_layouts: &[scene_layout, cube_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("skybox pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[SkyboxVertex::LAYOUT],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("skybox vertices"),
            contents: bytemuck::cast_slice(&SKYBOX_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            pipeline,
            vertex_buffer,
            uniform_buffer,
            uniform_bind_group,
            cubemap,
            texture_bind_group,
        }
    }

    /// Upload the projection and the camera rotation, scaled to fill an
    /// orthographic view.
    pub fn prepare(&self, queue: &wgpu::Queue, projection: Mat4, view: Mat4) {
        let uniforms = SceneUniforms::new(
            projection,
            skybox_view(view, projection),
            glam::Vec3::Y,
            glam::Vec3::ZERO,
        );
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.set_bind_group(1, &self.texture_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.draw(0..SKYBOX_VERTICES.len() as u32, 0..1);
    }

    pub fn destroy(&self) {
        self.vertex_buffer.destroy();
        self.uniform_buffer.destroy();
        self.cubemap.destroy();
    }
}
