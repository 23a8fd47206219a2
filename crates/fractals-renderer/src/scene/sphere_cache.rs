use crate::geometry::IcosphereSpec;

use super::GpuMesh;

/// The uploaded icosphere, regenerated only when its parameters change.
pub struct SphereMesh {
    spec: IcosphereSpec,
    mesh: GpuMesh,
}

impl SphereMesh {
    pub fn new(device: &wgpu::Device, spec: IcosphereSpec) -> Self {
        Self {
            spec,
            mesh: Self::build(device, &spec),
        }
    }

    /// Rebuild if `spec` differs from the cached one. Returns whether a
    /// rebuild happened.
    pub fn ensure(&mut self, device: &wgpu::Device, spec: IcosphereSpec) -> bool {
        if spec == self.spec {
            return false;
        }
        self.mesh.destroy();
        self.mesh = Self::build(device, &spec);
        self.spec = spec;
        true
    }

    pub fn mesh(&self) -> &GpuMesh {
        &self.mesh
    }

    pub fn destroy(&self) {
        self.mesh.destroy();
    }

    fn build(device: &wgpu::Device, spec: &IcosphereSpec) -> GpuMesh {
        let mesh = spec.generate();
        tracing::info!(
            radius = spec.radius(),
            subdivisions = spec.subdivisions(),
            smooth = spec.smooth(),
            triangles = mesh.triangle_count(),
            "icosphere generated"
        );
        GpuMesh::upload(device, &mesh, "icosphere")
    }
}
