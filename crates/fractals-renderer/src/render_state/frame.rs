use fractals_config::schema::SceneConfig;

use crate::camera::Camera;
use crate::geometry::IcosphereSpec;
use crate::gpu::{RendererError, SceneUniforms};
use crate::petals::PetalAnimator;
use crate::text::TextLine;
use crate::transform::sanitize_aspect;

use super::helpers::log_first_frame;
use super::instances::SceneInstances;
use super::plan::{DrawStep, FramePlan};
use super::state::RenderState;

/// Per-frame inputs owned by the caller.
pub struct FrameInputs<'a> {
    pub camera: &'a Camera,
    /// Seconds since the animation started.
    pub elapsed: f32,
    pub petals: &'a PetalAnimator,
    pub scene: &'a SceneConfig,
    /// Empty hides the overlay for this frame.
    pub overlay: &'a [TextLine],
    pub overlay_scale: f32,
}

impl RenderState {
    /// Render one frame following [`FramePlan`] inside a single render pass.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped.
    pub fn render_frame(&mut self, frame: &FrameInputs<'_>) -> Result<(), RendererError> {
        if self.is_released() {
            return Ok(());
        }

        let viewport_width = self.gpu.size.width as f32;
        let viewport_height = self.gpu.size.height as f32;
        let aspect = sanitize_aspect(self.gpu.size.aspect_ratio());
        let projection = frame.camera.projection_matrix(aspect);
        let view = frame.camera.view_matrix();

        let uniforms = SceneUniforms::new(
            projection,
            view,
            self.light_direction,
            frame.camera.position,
        );
        self.gpu
            .queue
            .write_buffer(&self.scene_uniforms, 0, bytemuck::bytes_of(&uniforms));

        match IcosphereSpec::new(
            frame.scene.icosphere.radius,
            frame.scene.icosphere.subdivisions,
            frame.scene.icosphere.smooth,
        ) {
            Ok(spec) => {
                self.sphere.ensure(&self.gpu.device, spec);
            }
            Err(e) => tracing::debug!("keeping cached icosphere: {e}"),
        }

        let instances = SceneInstances::build(
            frame.elapsed,
            frame.scene,
            self.sphere_color,
            frame.petals,
        );
        self.mesh_pipeline
            .prepare(&self.gpu.device, &self.gpu.queue, &instances.instances);

        if let Some(skybox) = &self.skybox {
            skybox.prepare(&self.gpu.queue, projection, view);
        }

        let overlay_visible = !frame.overlay.is_empty();
        if let (Some(text), true) = (self.text.as_mut(), overlay_visible) {
            text.prepare(
                &self.gpu.device,
                &self.gpu.queue,
                frame.overlay,
                frame.overlay_scale,
                viewport_width,
                viewport_height,
            );
        }

        let plan = FramePlan::for_frame(
            frame.petals.extension_pass(),
            overlay_visible && self.text.is_some(),
            self.skybox.is_some(),
        );

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::debug!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                tracing::warn!("surface texture timed out, skipping frame");
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view_target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("fractals frame encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("fractals main pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            for step in plan.steps() {
                match step {
                    DrawStep::Ground => self.mesh_pipeline.draw(
                        &mut pass,
                        &self.scene_bind_group,
                        &self.ground_bind_group,
                        &self.ground,
                        instances.ground.clone(),
                    ),
                    DrawStep::Icosphere => self.mesh_pipeline.draw(
                        &mut pass,
                        &self.scene_bind_group,
                        &self.white_bind_group,
                        self.sphere.mesh(),
                        instances.icosphere.clone(),
                    ),
                    DrawStep::PetalsPrimary => self.mesh_pipeline.draw(
                        &mut pass,
                        &self.scene_bind_group,
                        &self.white_bind_group,
                        &self.petal,
                        instances.petals_primary.clone(),
                    ),
                    DrawStep::PetalsExtension => self.mesh_pipeline.draw(
                        &mut pass,
                        &self.scene_bind_group,
                        &self.white_bind_group,
                        &self.petal,
                        instances.petals_extension.clone(),
                    ),
                    DrawStep::Skybox => {
                        if let Some(skybox) = &self.skybox {
                            skybox.render(&mut pass);
                        }
                    }
                    DrawStep::Overlay => {
                        if let Some(text) = &self.text {
                            text.render(&mut pass);
                        }
                    }
                }
            }
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
