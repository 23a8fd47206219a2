use crate::geometry::{Mesh, MeshVertex};

/// Flat square of half-extent `size` at `height`, facing +Y.
///
/// Texture coordinates run from 0 to `uv_repeat` so a repeating sampler
/// tiles the texture across the plane.
pub fn ground_mesh(size: f32, height: f32, uv_repeat: f32) -> Mesh {
    let up = [0.0, 1.0, 0.0];
    let corner = |x: f32, z: f32, u: f32, v: f32| MeshVertex {
        position: [x, height, z],
        normal: up,
        uv: [u, v],
    };
    let (s, r) = (size, uv_repeat);
    Mesh::from_vertices(vec![
        corner(s, -s, r, r),
        corner(-s, -s, 0.0, r),
        corner(-s, s, 0.0, 0.0),
        corner(s, -s, r, r),
        corner(-s, s, 0.0, 0.0),
        corner(s, s, r, 0.0),
    ])
}
