//! Per-frame camera uniforms shared by the scene pipelines.

use glam::{Mat4, Vec3};

/// GPU-side uniform block matching the WGSL `Camera` struct.
///
/// Layout: two mat4 + two vec4 = 160 bytes, 16-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub projection: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    /// xyz = normalized light direction (towards the light), w unused.
    pub light_dir: [f32; 4],
    /// xyz = camera world position, w unused.
    pub eye: [f32; 4],
}

impl SceneUniforms {
    pub fn new(projection: Mat4, view: Mat4, light_direction: Vec3, eye: Vec3) -> Self {
        let light = light_direction.try_normalize().unwrap_or(Vec3::Y);
        Self {
            projection: projection.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            light_dir: light.extend(0.0).to_array(),
            eye: eye.extend(1.0).to_array(),
        }
    }
}

/// Create the bind group layout for a single uniform buffer at binding 0.
pub fn uniform_bind_group_layout(device: &wgpu::Device, label: &str) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
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
    })
}

/// Create the bind group layout for a texture + sampler pair.
pub fn texture_bind_group_layout(
    device: &wgpu::Device,
    label: &str,
    view_dimension: wgpu::TextureViewDimension,
) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some(label),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    view_dimension,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
    })
}
