//! Mesh vertex types, buffer layout and construction errors.

/// A single lit/textured mesh vertex.
///
/// Layout: position(vec3) + normal(vec3) + uv(vec2) = 32 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    /// wgpu vertex buffer layout for `MeshVertex`.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32> at offset 0
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            // normal: vec3<f32> at offset 12
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
            // uv: vec2<f32> at offset 24
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 24,
                shader_location: 2,
            },
        ],
    };
}

/// Primitive assembly mode of a [`Mesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Topology {
    #[default]
    TriangleList,
}

/// CPU-side mesh: vertices plus an optional `u32` index list.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Option<Vec<u32>>,
    pub topology: Topology,
}

impl Mesh {
    /// Non-indexed triangle list.
    pub fn from_vertices(vertices: Vec<MeshVertex>) -> Self {
        Self {
            vertices,
            indices: None,
            topology: Topology::TriangleList,
        }
    }

    /// Indexed triangle list.
    pub fn indexed(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self {
            vertices,
            indices: Some(indices),
            topology: Topology::TriangleList,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of elements the draw call consumes: indices if present,
    /// otherwise vertices.
    pub fn element_count(&self) -> usize {
        self.indices
            .as_ref()
            .map_or(self.vertices.len(), |indices| indices.len())
    }

    pub fn triangle_count(&self) -> usize {
        self.element_count() / 3
    }

    /// Corner positions of every triangle, resolving indices.
    #[cfg(test)]
    pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
        let corner = move |i: usize| -> [f32; 3] {
            match &self.indices {
                Some(indices) => self.vertices[indices[i] as usize].position,
                None => self.vertices[i].position,
            }
        };
        (0..self.triangle_count()).map(move |t| [corner(t * 3), corner(t * 3 + 1), corner(t * 3 + 2)])
    }
}

/// Rejected mesh parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("radius must be greater than zero, got {0}")]
    InvalidRadius(f32),

    #[error("radius must be finite, got {0}")]
    NonFiniteRadius(f32),
}
