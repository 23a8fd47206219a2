//! Icosphere generation by recursive edge-midpoint subdivision.
//!
//! Starts from the 12 vertices / 20 faces of a regular icosahedron and
//! splits every face into four per level, pushing each new midpoint back
//! onto the sphere. Smooth spheres share midpoints across edges through a
//! lookup table keyed by the unordered vertex pair; flat spheres give every
//! face its own vertices and a face normal.

use std::collections::HashMap;
use std::f32::consts::PI;

use glam::Vec3;

use super::types::{GeometryError, Mesh, MeshVertex};

/// Subdivision depth above which generation is slow enough to mention.
pub const SUBDIVISION_WARN_LEVEL: u32 = 6;

/// Validated icosphere parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcosphereSpec {
    radius: f32,
    subdivisions: u32,
    smooth: bool,
}

impl IcosphereSpec {
    /// Reject non-finite or non-positive radii up front.
    pub fn new(radius: f32, subdivisions: u32, smooth: bool) -> Result<Self, GeometryError> {
        if !radius.is_finite() {
            return Err(GeometryError::NonFiniteRadius(radius));
        }
        if radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self {
            radius,
            subdivisions,
            smooth,
        })
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn subdivisions(&self) -> u32 {
        self.subdivisions
    }

    pub fn smooth(&self) -> bool {
        self.smooth
    }

    /// Triangles produced: `20 * 4^subdivisions`.
    pub fn triangle_count(&self) -> usize {
        20usize.saturating_mul(4usize.saturating_pow(self.subdivisions))
    }

    /// Vertices produced: `10 * 4^n + 2` when smooth, three per triangle otherwise.
    pub fn vertex_count(&self) -> usize {
        if self.smooth {
            10usize
                .saturating_mul(4usize.saturating_pow(self.subdivisions))
                .saturating_add(2)
        } else {
            self.triangle_count().saturating_mul(3)
        }
    }

    /// Build the mesh. Pure and deterministic.
    pub fn generate(&self) -> Mesh {
        if self.subdivisions > SUBDIVISION_WARN_LEVEL {
            tracing::warn!(
                subdivisions = self.subdivisions,
                triangles = self.triangle_count(),
                "icosphere subdivision level is high; generation may be slow"
            );
        }

        let mesh = if self.smooth {
            self.generate_smooth()
        } else {
            self.generate_flat()
        };

        tracing::debug!(
            radius = self.radius,
            subdivisions = self.subdivisions,
            smooth = self.smooth,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "icosphere generated"
        );
        mesh
    }

    fn generate_smooth(&self) -> Mesh {
        let mut positions: Vec<Vec3> = base_vertices().map(|v| v * self.radius).to_vec();
        let mut faces: Vec<[u32; 3]> = BASE_FACES.to_vec();

        for _ in 0..self.subdivisions {
            let mut midpoints: HashMap<(u32, u32), u32> = HashMap::with_capacity(faces.len() * 3 / 2);
            let mut next = Vec::with_capacity(faces.len() * 4);

            for [a, b, c] in faces {
                let ab = midpoint_index(&mut positions, &mut midpoints, a, b, self.radius);
                let bc = midpoint_index(&mut positions, &mut midpoints, b, c, self.radius);
                let ca = midpoint_index(&mut positions, &mut midpoints, c, a, self.radius);
                next.extend_from_slice(&[[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
            }
            faces = next;
        }

        let vertices = positions
            .iter()
            .map(|&p| {
                let normal = p / self.radius;
                MeshVertex {
                    position: p.to_array(),
                    normal: normal.to_array(),
                    uv: spherical_uv(normal),
                }
            })
            .collect();
        let indices = faces.into_iter().flatten().collect();

        Mesh::indexed(vertices, indices)
    }

    fn generate_flat(&self) -> Mesh {
        let corners = base_vertices().map(|v| v * self.radius);
        let mut triangles: Vec<[Vec3; 3]> = BASE_FACES
            .into_iter()
            .map(|f| f.map(|i| corners[i as usize]))
            .collect();

        for _ in 0..self.subdivisions {
            let mut next = Vec::with_capacity(triangles.len() * 4);
            for [a, b, c] in triangles {
                // Fresh midpoints per face, even where an edge is shared.
                let ab = ((a + b) * 0.5).normalize() * self.radius;
                let bc = ((b + c) * 0.5).normalize() * self.radius;
                let ca = ((c + a) * 0.5).normalize() * self.radius;
                next.extend_from_slice(&[[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
            }
            triangles = next;
        }

        let vertices = triangles
            .into_iter()
            .flat_map(|tri| {
                let normal = face_normal(&tri);
                tri.map(|p| MeshVertex {
                    position: p.to_array(),
                    normal: normal.to_array(),
                    uv: spherical_uv(p / self.radius),
                })
            })
            .collect();

        Mesh::from_vertices(vertices)
    }
}

/// Indices of the 20 icosahedron faces, counter-clockwise seen from outside.
const BASE_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// The 12 icosahedron corners on the unit sphere, built from the golden ratio.
fn base_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
    .map(Vec3::normalize)
}

fn midpoint_index(
    positions: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
    radius: f32,
) -> u32 {
    let key = (a.min(b), a.max(b));
    *cache.entry(key).or_insert_with(|| {
        let mid = (positions[a as usize] + positions[b as usize]) * 0.5;
        positions.push(mid.normalize() * radius);
        (positions.len() - 1) as u32
    })
}

fn face_normal([a, b, c]: &[Vec3; 3]) -> Vec3 {
    (*b - *a)
        .cross(*c - *a)
        .try_normalize()
        .unwrap_or_else(|| ((*a + *b + *c) / 3.0).normalize_or_zero())
}

/// Equirectangular texture coordinates for a unit direction.
fn spherical_uv(dir: Vec3) -> [f32; 2] {
    let u = 0.5 + dir.z.atan2(dir.x) / (2.0 * PI);
    let v = 0.5 - dir.y.clamp(-1.0, 1.0).asin() / PI;
    [u, v]
}
