use std::ops::Range;

use glam::{Mat4, Vec3};

use fractals_config::schema::SceneConfig;

use crate::petals::PetalAnimator;
use crate::scene::MeshInstance;
use crate::transform::{scale_then_translate, spin_z};

/// Every mesh instance of one frame plus the range each draw step uses.
#[derive(Debug, Clone, Default)]
pub struct SceneInstances {
    pub instances: Vec<MeshInstance>,
    pub ground: Range<u32>,
    pub icosphere: Range<u32>,
    pub petals_primary: Range<u32>,
    pub petals_extension: Range<u32>,
}

impl SceneInstances {
    /// Compute the frame's model matrices and colors at `elapsed` seconds.
    ///
    /// The icosphere spin is also the base of the petal ring; the animator
    /// receives its own copy so petal rotations never leak into the sphere.
    /// `sphere_color` is resolved once at startup.
    pub fn build(
        elapsed: f32,
        scene: &SceneConfig,
        sphere_color: [f32; 4],
        petals: &PetalAnimator,
    ) -> Self {
        let mut instances = Vec::with_capacity(2 + 2 * petals.count as usize);

        let ground_model =
            scale_then_translate(scene.ground.scale, Vec3::from(scene.ground.offset));
        instances.push(MeshInstance::unlit(ground_model, [1.0; 4]));
        let ground = 0..1;

        let spin = spin_z(elapsed, scene.icosphere.spin_degrees_per_second);
        instances.push(MeshInstance::lit(spin, sphere_color));
        let icosphere = 1..2;

        let base: Mat4 = spin;
        let ring = petals.ring(elapsed, base);

        let start = instances.len() as u32;
        instances.extend(ring.primary.iter().map(|p| MeshInstance::unlit(p.model, p.color)));
        let petals_primary = start..instances.len() as u32;

        let start = instances.len() as u32;
        instances.extend(ring.extension.iter().map(|p| MeshInstance::unlit(p.model, p.color)));
        let petals_extension = start..instances.len() as u32;

        Self {
            instances,
            ground,
            icosphere,
            petals_primary,
            petals_extension,
        }
    }
}
