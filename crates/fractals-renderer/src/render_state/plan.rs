/// One draw inside the frame's render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStep {
    Ground,
    Icosphere,
    PetalsPrimary,
    PetalsExtension,
    Skybox,
    Overlay,
}

/// Ordered draw steps for a frame.
///
/// Opaque depth-tested geometry comes first, the skybox fills whatever depth
/// is still at the far plane, and the overlay is composited last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePlan {
    steps: Vec<DrawStep>,
}

impl FramePlan {
    pub fn for_frame(extension_pass: bool, hud_enabled: bool, skybox_enabled: bool) -> Self {
        let mut steps = vec![DrawStep::Ground, DrawStep::Icosphere, DrawStep::PetalsPrimary];
        if extension_pass {
            steps.push(DrawStep::PetalsExtension);
        }
        if skybox_enabled {
            steps.push(DrawStep::Skybox);
        }
        if hud_enabled {
            steps.push(DrawStep::Overlay);
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[DrawStep] {
        &self.steps
    }

    pub fn contains(&self, step: DrawStep) -> bool {
        self.steps.contains(&step)
    }
}
