use std::collections::HashSet;

use super::*;

fn distance(p: [f32; 3]) -> f32 {
    (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
}

fn unique_positions(mesh: &Mesh) -> usize {
    mesh.vertices
        .iter()
        .map(|v| v.position.map(f32::to_bits))
        .collect::<HashSet<_>>()
        .len()
}

#[test]
fn mesh_vertex_is_32_bytes() {
    assert_eq!(std::mem::size_of::<MeshVertex>(), 32);
    assert_eq!(MeshVertex::LAYOUT.array_stride, 32);
}

#[test]
fn rejects_bad_radius() {
    assert_eq!(
        IcosphereSpec::new(-1.0, 2, true),
        Err(GeometryError::InvalidRadius(-1.0))
    );
    assert_eq!(
        IcosphereSpec::new(0.0, 2, true),
        Err(GeometryError::InvalidRadius(0.0))
    );
    assert!(matches!(
        IcosphereSpec::new(f32::NAN, 0, false),
        Err(GeometryError::NonFiniteRadius(_))
    ));
    assert!(matches!(
        IcosphereSpec::new(f32::INFINITY, 0, false),
        Err(GeometryError::NonFiniteRadius(_))
    ));
}

#[test]
fn flat_level_zero_is_plain_icosahedron() {
    let mesh = IcosphereSpec::new(1.0, 0, false).unwrap().generate();
    assert_eq!(mesh.triangle_count(), 20);
    assert_eq!(mesh.vertex_count(), 60);
    assert!(mesh.indices.is_none());
    for v in &mesh.vertices {
        assert!((distance(v.position) - 1.0).abs() < 1e-5);
    }
}

#[test]
fn smooth_level_zero_has_twelve_vertices() {
    let mesh = IcosphereSpec::new(1.0, 0, true).unwrap().generate();
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(mesh.triangle_count(), 20);
}

#[test]
fn smooth_level_one_shares_edges() {
    let spec = IcosphereSpec::new(2.0, 1, true).unwrap();
    let mesh = spec.generate();
    assert_eq!(mesh.triangle_count(), 80);
    assert_eq!(mesh.vertex_count(), 42);
    assert!(mesh.vertex_count() < 240);
    for v in &mesh.vertices {
        assert!((distance(v.position) - 2.0).abs() < 1e-5);
    }
}

#[test]
fn triangle_count_quadruples_per_level() {
    for smooth in [false, true] {
        for n in 0..=4 {
            let spec = IcosphereSpec::new(1.5, n, smooth).unwrap();
            let mesh = spec.generate();
            assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(n));
            assert_eq!(mesh.triangle_count(), spec.triangle_count());
            assert_eq!(mesh.vertex_count(), spec.vertex_count());
        }
    }
}

#[test]
fn every_vertex_lies_on_the_sphere() {
    for smooth in [false, true] {
        let mesh = IcosphereSpec::new(3.0, 3, smooth).unwrap().generate();
        for v in &mesh.vertices {
            assert!((distance(v.position) - 3.0).abs() < 1e-4);
        }
    }
}

#[test]
fn smooth_vertex_count_formula() {
    for n in 0..=4 {
        let mesh = IcosphereSpec::new(1.0, n, true).unwrap().generate();
        assert_eq!(mesh.vertex_count(), 10 * 4usize.pow(n) + 2);
        assert!(mesh.vertex_count() < 3 * mesh.triangle_count());
    }
}

#[test]
fn smooth_vertices_are_unique() {
    let mesh = IcosphereSpec::new(1.0, 3, true).unwrap().generate();
    assert_eq!(unique_positions(&mesh), mesh.vertex_count());
}

#[test]
fn flat_vertices_are_three_per_triangle() {
    let mesh = IcosphereSpec::new(1.0, 2, false).unwrap().generate();
    assert_eq!(mesh.vertex_count(), 3 * mesh.triangle_count());
    // Positions repeat across faces, vertices do not.
    assert!(unique_positions(&mesh) < mesh.vertex_count());
}

#[test]
fn smooth_indices_are_in_range() {
    let mesh = IcosphereSpec::new(1.0, 2, true).unwrap().generate();
    let indices = mesh.indices.as_ref().unwrap();
    assert!(indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
}

#[test]
fn smooth_normals_point_outward() {
    let mesh = IcosphereSpec::new(2.0, 2, true).unwrap().generate();
    for v in &mesh.vertices {
        let n = v.normal;
        assert!((distance(n) - 1.0).abs() < 1e-5);
        let dot = n[0] * v.position[0] + n[1] * v.position[1] + n[2] * v.position[2];
        assert!((dot - 2.0).abs() < 1e-4);
    }
}

#[test]
fn flat_faces_wind_outward() {
    let mesh = IcosphereSpec::new(1.0, 1, false).unwrap().generate();
    for tri in mesh.vertices.chunks(3) {
        let n = tri[0].normal;
        // All three corners share the face normal.
        assert_eq!(tri[1].normal, n);
        assert_eq!(tri[2].normal, n);
        let centroid: [f32; 3] = std::array::from_fn(|i| {
            (tri[0].position[i] + tri[1].position[i] + tri[2].position[i]) / 3.0
        });
        let dot: f32 = (0..3).map(|i| n[i] * centroid[i]).sum();
        assert!(dot > 0.0);
    }
}

#[test]
fn generation_is_deterministic() {
    let spec = IcosphereSpec::new(1.0, 2, true).unwrap();
    let a = spec.generate();
    let b = spec.generate();
    assert_eq!(a.vertices, b.vertices);
    assert_eq!(a.indices, b.indices);
}

#[test]
fn uvs_are_normalized() {
    let mesh = IcosphereSpec::new(1.0, 2, false).unwrap().generate();
    for v in &mesh.vertices {
        assert!((0.0..=1.0).contains(&v.uv[0]));
        assert!((0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn triangles_iterator_resolves_indices() {
    let mesh = IcosphereSpec::new(1.0, 1, true).unwrap().generate();
    let tris: Vec<_> = mesh.triangles().collect();
    assert_eq!(tris.len(), 80);
    for tri in tris {
        for corner in tri {
            assert!((distance(corner) - 1.0).abs() < 1e-5);
        }
    }
}

#[test]
fn high_subdivision_still_generates() {
    // Above the warning level: logged, not truncated.
    let spec = IcosphereSpec::new(1.0, SUBDIVISION_WARN_LEVEL + 1, true).unwrap();
    let mesh = spec.generate();
    assert_eq!(mesh.triangle_count(), 20 * 4usize.pow(SUBDIVISION_WARN_LEVEL + 1));
}
