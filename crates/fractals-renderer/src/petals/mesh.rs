use std::f32::consts::PI;

use crate::geometry::{Mesh, MeshVertex};

/// Flat leaf in the XY plane: base at the origin, tip at `(0, length)`,
/// half-width `width * sin(pi * t)` along its length. Normal is +Z; the
/// pipeline draws both faces.
pub fn petal_mesh(length: f32, width: f32, segments: u32) -> Mesh {
    let segments = segments.max(2);
    let mut vertices = Vec::with_capacity(2 * (segments as usize + 1));

    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        let y = t * length;
        let half = width * (PI * t).sin();
        for x in [-half, half] {
            vertices.push(MeshVertex {
                position: [x, y, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [0.5 + x / (2.0 * width.max(f32::EPSILON)), t],
            });
        }
    }

    let mut indices = Vec::with_capacity(6 * segments as usize);
    for i in 0..segments {
        let l0 = 2 * i;
        let r0 = l0 + 1;
        let l1 = l0 + 2;
        let r1 = l0 + 3;
        indices.extend_from_slice(&[l0, r0, r1, l0, r1, l1]);
    }

    Mesh::indexed(vertices, indices)
}
