use std::path::Path;
use std::sync::Arc;

use glam::Vec3;
use winit::window::Window;

use fractals_common::Color;
use fractals_config::FractalsConfig;

use super::helpers::{color_or, to_wgpu_color};
use crate::assets::{load_cubemap, load_image_or_fallback, GpuTexture};
use crate::geometry::IcosphereSpec;
use crate::gpu::{
    texture_bind_group_layout, uniform_bind_group_layout, DepthTexture, GpuContext, RendererError,
};
use crate::petals::petal_mesh;
use crate::scene::{ground_mesh, GpuMesh, MeshPipeline, SkyboxRenderer, SphereMesh};
use crate::text::{GlyphAtlas, TextRenderer};

/// Everything the frame compositor draws with.
///
/// Owns the GPU context and every GPU-resident resource. Animation state
/// (camera, clock, petal animator) lives with the caller and is passed in
/// per frame.
pub struct RenderState {
    pub gpu: GpuContext,
    pub clear_color: wgpu::Color,
    pub(super) depth: DepthTexture,
    pub(super) scene_uniforms: wgpu::Buffer,
    pub(super) scene_bind_group: wgpu::BindGroup,
    pub(super) mesh_pipeline: MeshPipeline,
    pub(super) white: GpuTexture,
    pub(super) white_bind_group: wgpu::BindGroup,
    pub(super) ground_texture: GpuTexture,
    pub(super) ground_bind_group: wgpu::BindGroup,
    pub(super) ground: GpuMesh,
    pub(super) sphere: SphereMesh,
    pub(super) petal: GpuMesh,
    pub(super) skybox: Option<SkyboxRenderer>,
    pub(super) text: Option<TextRenderer>,
    pub(super) light_direction: Vec3,
    pub(super) sphere_color: [f32; 4],
    released: bool,
}

impl RenderState {
    /// Create the GPU context, load assets and build every pipeline.
    ///
    /// Only GPU setup and invalid icosphere parameters are fatal. Missing
    /// textures and fonts degrade to placeholders or a disabled overlay.
    pub async fn new(window: Arc<Window>, config: &FractalsConfig) -> Result<Self, RendererError> {
        let scene = &config.scene;
        let sphere_spec = IcosphereSpec::new(
            scene.icosphere.radius,
            scene.icosphere.subdivisions,
            scene.icosphere.smooth,
        )?;

        let gpu = GpuContext::new(window).await?;
        let device = &gpu.device;
        let queue = &gpu.queue;
        let format = gpu.format();

        let scene_layout = uniform_bind_group_layout(device, "scene uniform layout");
        let texture_layout =
            texture_bind_group_layout(device, "diffuse texture layout", wgpu::TextureViewDimension::D2);

        let scene_uniforms = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene uniforms"),
            size: std::mem::size_of::<crate::gpu::SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene bind group"),
            layout: &scene_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_uniforms.as_entire_binding(),
            }],
        });

        let mesh_pipeline = MeshPipeline::new(device, format, &scene_layout, &texture_layout);

        let white = GpuTexture::white(device, queue);
        let white_bind_group = white.bind_group(device, &texture_layout, "white bind group");

        let ground_image = load_image_or_fallback(Path::new(&scene.ground.texture));
        let ground_texture = GpuTexture::from_image(device, queue, &ground_image, "ground texture");
        let ground_bind_group =
            ground_texture.bind_group(device, &texture_layout, "ground bind group");
        let ground = GpuMesh::upload(
            device,
            &ground_mesh(scene.ground.size, scene.ground.height, scene.ground.uv_repeat),
            "ground",
        );

        let sphere = SphereMesh::new(device, sphere_spec);
        let petal = GpuMesh::upload(
            device,
            &petal_mesh(
                scene.petals.length,
                scene.petals.width,
                scene.petals.segments,
            ),
            "petal",
        );

        let skybox = if scene.skybox.enabled {
            let cube_layout = texture_bind_group_layout(
                device,
                "skybox texture layout",
                wgpu::TextureViewDimension::Cube,
            );
            let faces = load_cubemap(&scene.skybox.faces);
            Some(SkyboxRenderer::new(
                device,
                queue,
                format,
                &scene_layout,
                &cube_layout,
                &faces,
            ))
        } else {
            tracing::info!("skybox disabled");
            None
        };

        let text = if config.hud.enabled {
            let hud = &config.hud;
            match GlyphAtlas::load(Path::new(&hud.font_path), &hud.font_family, hud.pixel_height) {
                Ok(atlas) => {
                    let color = color_or(&hud.color, Color::WHITE, "hud");
                    Some(TextRenderer::new(device, queue, format, atlas, color))
                }
                Err(e) => {
                    tracing::warn!("overlay disabled: {e}");
                    None
                }
            }
        } else {
            None
        };

        let depth = DepthTexture::new(device, gpu.size.width, gpu.size.height);
        let clear = color_or(
            &scene.clear_color,
            Color::from_rgba(26, 26, 26, 255),
            "clear",
        );

        Ok(Self {
            clear_color: to_wgpu_color(clear),
            depth,
            scene_uniforms,
            scene_bind_group,
            mesh_pipeline,
            white,
            white_bind_group,
            ground_texture,
            ground_bind_group,
            ground,
            sphere,
            petal,
            skybox,
            text,
            light_direction: Vec3::from(scene.light_direction),
            sphere_color: color_or(&scene.icosphere.color, Color::WHITE, "icosphere"),
            released: false,
            gpu,
        })
    }

    /// Reconfigure the surface and recreate the depth attachment.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.depth.destroy();
        self.depth = DepthTexture::new(&self.gpu.device, self.gpu.size.width, self.gpu.size.height);
    }

    /// Overlay baseline spacing at `scale`, if the overlay is available.
    pub fn overlay_line_height(&self, scale: f32) -> Option<f32> {
        self.text.as_ref().map(|t| t.atlas().line_height(scale))
    }

    /// Destroy every GPU buffer and texture. Safe to call more than once.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        if let Some(text) = self.text.as_mut() {
            text.destroy();
        }
        if let Some(skybox) = &self.skybox {
            skybox.destroy();
        }
        self.petal.destroy();
        self.sphere.destroy();
        self.ground.destroy();
        self.ground_texture.destroy();
        self.white.destroy();
        self.mesh_pipeline.destroy();
        self.scene_uniforms.destroy();
        self.depth.destroy();
        tracing::info!("GPU resources released");
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}
