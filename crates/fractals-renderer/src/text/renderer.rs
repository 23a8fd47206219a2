use std::collections::HashMap;
use std::ops::Range;

use wgpu::util::DeviceExt;

use super::atlas::GlyphAtlas;
use super::layout::{layout_text, GlyphVertex};
use super::pipeline::{TextUniforms, SHADER_SOURCE};
use crate::gpu::{texture_bind_group_layout, uniform_bind_group_layout, DEPTH_FORMAT};
use crate::transform::screen_projection;

const INITIAL_VERTEX_CAPACITY: usize = 6 * 256;

/// A line of overlay text with its baseline origin in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

struct GlyphTexture {
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Draws text as one textured quad per glyph.
pub struct TextRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    glyph_textures: HashMap<char, GlyphTexture>,
    atlas: GlyphAtlas,
    draws: Vec<(char, Range<u32>)>,
    color: [f32; 4],
}

impl TextRenderer {
    /// Upload every glyph bitmap of `atlas` as its own `R8Unorm` texture.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        atlas: GlyphAtlas,
        color: [f32; 4],
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("text shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let uniform_layout = uniform_bind_group_layout(device, "text uniform layout");
        let texture_layout = texture_bind_group_layout(
            device,
            "glyph texture layout",
            wgpu::TextureViewDimension::D2,
        );

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("text uniforms"),
            contents: bytemuck::bytes_of(&TextUniforms {
                projection: screen_projection(1.0, 1.0).to_cols_array_2d(),
                color,
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("text uniform bind group"),
            layout: &uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("text pipeline layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("text pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                buffers: &[GlyphVertex::LAYOUT],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: wgpu::PipelineCompilationOptions::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            // Drawn over everything regardless of scene depth.
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: false,
                depth_compare: wgpu::CompareFunction::Always,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("glyph sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mut glyph_textures = HashMap::new();
        for (ch, glyph) in atlas.iter() {
            if !glyph.metrics.has_bitmap() {
                continue;
            }
            let [width, height] = glyph.metrics.size;
            let size = wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            };
            let texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("glyph texture"),
                size,
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::R8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            });
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d::ZERO,
                    aspect: wgpu::TextureAspect::All,
                },
                &glyph.alpha,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(width),
                    rows_per_image: Some(height),
                },
                size,
            );
            let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("glyph bind group"),
                layout: &texture_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&sampler),
                    },
                ],
            });
            glyph_textures.insert(
                ch,
                GlyphTexture {
                    texture,
                    bind_group,
                },
            );
        }

        tracing::debug!("uploaded {} glyph textures", glyph_textures.len());

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            vertex_buffer: create_vertex_buffer(device, INITIAL_VERTEX_CAPACITY),
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            glyph_textures,
            atlas,
            draws: Vec::new(),
            color,
        }
    }

    pub fn atlas(&self) -> &GlyphAtlas {
        &self.atlas
    }

    /// Lay out `lines` and upload the vertices for this frame.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        lines: &[TextLine],
        scale: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) {
        let mut vertices: Vec<GlyphVertex> = Vec::new();
        self.draws.clear();

        for line in lines {
            let quads = layout_text(&line.text, line.x, line.y, scale, |c| self.atlas.metrics(c));
            for quad in quads {
                if !self.glyph_textures.contains_key(&quad.ch) {
                    continue;
                }
                let start = vertices.len() as u32;
                vertices.extend_from_slice(&quad.vertices);
                self.draws.push((quad.ch, start..start + 6));
            }
        }

        if vertices.len() > self.vertex_capacity {
            self.vertex_capacity = vertices.len().next_power_of_two();
            self.vertex_buffer.destroy();
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
        }
        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }

        let uniforms = TextUniforms {
            projection: screen_projection(viewport_width, viewport_height).to_cols_array_2d(),
            color: self.color,
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
    }

    /// Draw the prepared glyphs, rebinding the texture for each one.
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        if self.draws.is_empty() {
            return;
        }
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        for (ch, range) in &self.draws {
            if let Some(glyph) = self.glyph_textures.get(ch) {
                pass.set_bind_group(1, &glyph.bind_group, &[]);
                pass.draw(range.clone(), 0..1);
            }
        }
    }

    /// Release GPU resources.
    pub fn destroy(&mut self) {
        for glyph in self.glyph_textures.values() {
            glyph.texture.destroy();
        }
        self.glyph_textures.clear();
        self.vertex_buffer.destroy();
        self.uniform_buffer.destroy();
        self.draws.clear();
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("text vertices"),
        size: (capacity * std::mem::size_of::<GlyphVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
