use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::geometry::Mesh;

/// A [`Mesh`] uploaded to vertex (and optionally index) buffers.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: Option<wgpu::Buffer>,
    element_count: u32,
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, mesh: &Mesh, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = mesh.indices.as_ref().map(|indices| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
        });
        Self {
            vertex_buffer,
            index_buffer,
            element_count: mesh.element_count() as u32,
        }
    }

    pub fn element_count(&self) -> u32 {
        self.element_count
    }

    /// Bind this mesh's buffers at slot 0 and draw `instances`.
    ///
    /// The caller binds the instance buffer at slot 1.
    pub fn draw<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>, instances: Range<u32>) {
        if self.element_count == 0 || instances.is_empty() {
            return;
        }
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        match &self.index_buffer {
            Some(indices) => {
                pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..self.element_count, 0, instances);
            }
            None => pass.draw(0..self.element_count, instances),
        }
    }

    pub fn destroy(&self) {
        self.vertex_buffer.destroy();
        if let Some(indices) = &self.index_buffer {
            indices.destroy();
        }
    }
}
