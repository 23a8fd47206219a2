use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use glam::{Mat4, Vec3};

use fractals_common::Color;
use fractals_config::schema::{HudConfig, ProjectionMode, SceneConfig};

use super::helpers::color_or;
use super::*;
use crate::petals::PetalAnimator;
use crate::transform::spin_z;

const WHITE: [f32; 4] = [1.0; 4];

/// Counts `WARN` events emitted while it is the default subscriber.
struct WarnCounter(Arc<AtomicUsize>);

impl tracing::Subscriber for WarnCounter {
    fn enabled(&self, _: &tracing::Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
        tracing::span::Id::from_u64(1)
    }

    fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

    fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

    fn event(&self, event: &tracing::Event<'_>) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &tracing::span::Id) {}

    fn exit(&self, _: &tracing::span::Id) {}
}

fn count_warnings(f: impl FnOnce()) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    tracing::subscriber::with_default(WarnCounter(Arc::clone(&count)), f);
    count.load(Ordering::SeqCst)
}

#[test]
fn full_plan_order() {
    let plan = FramePlan::for_frame(true, true, true);
    assert_eq!(
        plan.steps(),
        &[
            DrawStep::Ground,
            DrawStep::Icosphere,
            DrawStep::PetalsPrimary,
            DrawStep::PetalsExtension,
            DrawStep::Skybox,
            DrawStep::Overlay,
        ]
    );
}

#[test]
fn plan_without_optional_steps() {
    let plan = FramePlan::for_frame(false, false, false);
    assert_eq!(
        plan.steps(),
        &[DrawStep::Ground, DrawStep::Icosphere, DrawStep::PetalsPrimary]
    );
    assert!(!plan.contains(DrawStep::Overlay));
}

#[test]
fn overlay_is_always_last() {
    for ext in [false, true] {
        for sky in [false, true] {
            let plan = FramePlan::for_frame(ext, true, sky);
            assert_eq!(plan.steps().last(), Some(&DrawStep::Overlay));
        }
    }
}

#[test]
fn skybox_follows_all_petals() {
    let plan = FramePlan::for_frame(true, false, true);
    let steps = plan.steps();
    let sky = steps.iter().position(|s| *s == DrawStep::Skybox).unwrap();
    let ext = steps
        .iter()
        .position(|s| *s == DrawStep::PetalsExtension)
        .unwrap();
    assert!(ext < sky);
}

#[test]
fn instances_ranges_cover_both_passes() {
    let scene = SceneConfig::default();
    let animator = PetalAnimator::default();
    let frame = SceneInstances::build(1.0, &scene, WHITE, &animator);
    let n = animator.count;
    assert_eq!(frame.ground, 0..1);
    assert_eq!(frame.icosphere, 1..2);
    assert_eq!(frame.petals_primary, 2..2 + n);
    assert_eq!(frame.petals_extension, 2 + n..2 + 2 * n);
    assert_eq!(frame.instances.len() as u32, 2 + 2 * n);
}

#[test]
fn instances_without_extension_pass() {
    let scene = SceneConfig::default();
    let mut animator = PetalAnimator::default();
    animator.toggle_extension_pass();
    let frame = SceneInstances::build(1.0, &scene, WHITE, &animator);
    assert!(frame.petals_extension.is_empty());
    assert_eq!(frame.instances.len() as u32, 2 + animator.count);
}

#[test]
fn sphere_instance_is_the_spin() {
    let scene = SceneConfig::default();
    let frame = SceneInstances::build(2.0, &scene, WHITE, &PetalAnimator::default());
    let sphere = frame.instances[frame.icosphere.start as usize];
    let expected = spin_z(2.0, scene.icosphere.spin_degrees_per_second);
    assert!(Mat4::from_cols_array_2d(&sphere.model).abs_diff_eq(expected, 1e-6));
    assert!(sphere.is_lit());
}

#[test]
fn extension_pass_ends_at_sphere_orientation() {
    let scene = SceneConfig::default();
    let frame = SceneInstances::build(3.0, &scene, WHITE, &PetalAnimator::default());
    let sphere = Mat4::from_cols_array_2d(&frame.instances[1].model);
    let last = frame.instances.last().unwrap();
    assert!(Mat4::from_cols_array_2d(&last.model).abs_diff_eq(sphere, 1e-4));
}

#[test]
fn ground_instance_uses_scale_and_offset() {
    let mut scene = SceneConfig::default();
    scene.ground.scale = 2.0;
    scene.ground.offset = [0.0, -3.0, 1.0];
    let frame = SceneInstances::build(0.0, &scene, WHITE, &PetalAnimator::default());
    let model = Mat4::from_cols_array_2d(&frame.instances[0].model);
    let p = model.transform_point3(Vec3::new(1.0, 1.0, 1.0));
    assert!(p.abs_diff_eq(Vec3::new(2.0, -1.0, 3.0), 1e-6));
    assert!(!frame.instances[0].is_lit());
}

#[test]
fn petals_share_frame_color() {
    let scene = SceneConfig::default();
    let frame = SceneInstances::build(0.7, &scene, WHITE, &PetalAnimator::default());
    let petals = &frame.instances[2..];
    assert!(petals.windows(2).all(|w| w[0].color == w[1].color));
    assert_eq!(petals[0].color[1], 0.0);
}

#[test]
fn invalid_sphere_color_warns_once_across_frames() {
    let mut scene = SceneConfig::default();
    scene.icosphere.color = "not-a-color".into();
    let animator = PetalAnimator::default();

    let warnings = count_warnings(|| {
        let color = color_or(&scene.icosphere.color, Color::WHITE, "icosphere");
        for frame in 0..600 {
            let instances = SceneInstances::build(frame as f32 / 60.0, &scene, color, &animator);
            assert_eq!(instances.instances[1].color, WHITE);
        }
    });
    assert_eq!(warnings, 1);
}

#[test]
fn sphere_instance_uses_resolved_color() {
    let scene = SceneConfig::default();
    let color = [0.2, 0.4, 0.6, 1.0];
    let frame = SceneInstances::build(0.5, &scene, color, &PetalAnimator::default());
    assert_eq!(frame.instances[frame.icosphere.start as usize].color, color);
}

fn status(hints: Option<&str>) -> HudStatus<'_> {
    HudStatus {
        title: "Fractals",
        fps: 59.6,
        frame_time_ms: 16.777,
        projection: ProjectionMode::Perspective,
        extension_pass: true,
        hints,
    }
}

#[test]
fn hud_lines_stack_upwards_from_origin() {
    let hud = HudConfig::default();
    let lines = hud_lines(&hud, &status(Some("Esc quit")), 30.0);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].text, "Fractals");
    assert_eq!(lines[1].text, "60 fps  16.78 ms");
    assert_eq!(lines[2].text, "perspective  petals x2");
    assert_eq!(lines[3].text, "Esc quit");
    assert_eq!(lines[3].y, hud.y);
    assert_eq!(lines[0].y, hud.y + 90.0);
    assert!(lines.iter().all(|l| l.x == hud.x));
}

#[test]
fn hud_without_fps_is_title_only() {
    let hud = HudConfig {
        show_fps: false,
        ..HudConfig::default()
    };
    let lines = hud_lines(&hud, &status(None), 30.0);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].text, "Fractals");
    assert_eq!(lines[0].y, hud.y);
}

#[test]
fn empty_hints_are_dropped() {
    let lines = hud_lines(&HudConfig::default(), &status(Some("")), 30.0);
    assert_eq!(lines.len(), 3);
}
