//! FractalsApp struct definition and constructor.

use std::sync::Arc;

use winit::window::Window;

use fractals_common::Action;
use fractals_config::FractalsConfig;
use fractals_platform::KeybindRegistry;
use fractals_renderer::{AnimationClock, Camera, FrameTimer, PetalAnimator, RenderState};

use super::input::InputState;

/// Top-level application state.
pub struct FractalsApp {
    pub(super) config: FractalsConfig,
    pub(super) registry: KeybindRegistry,
    pub(super) input: InputState,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Scene state advanced once per frame
    pub(super) camera: Camera,
    pub(super) clock: AnimationClock,
    pub(super) timer: FrameTimer,
    pub(super) petals: PetalAnimator,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) mouse_captured: bool,
    pub(super) hud_visible: bool,
    /// Key hint line shown at the bottom of the overlay.
    pub(super) hints: String,

    // Whether the app should exit; checked at the top of the next iteration
    pub(super) should_exit: bool,
}

impl FractalsApp {
    pub fn new(config: FractalsConfig, registry: KeybindRegistry) -> Self {
        let hints = key_hints(&registry);
        Self {
            input: InputState::new(),
            window: None,
            render_state: None,
            camera: Camera::from_config(&config.camera),
            clock: AnimationClock::new(config.scene.max_frame_delta),
            timer: FrameTimer::new(),
            petals: PetalAnimator::from_config(&config.scene.petals),
            modifiers: winit::keyboard::ModifiersState::empty(),
            mouse_captured: false,
            hud_visible: config.hud.enabled,
            hints,
            should_exit: false,
            config,
            registry,
        }
    }
}

/// `"P projection  1 petals  C mouse  Esc quit"` from the current bindings.
pub(super) fn key_hints(registry: &KeybindRegistry) -> String {
    [
        (Action::ToggleProjection, "projection"),
        (Action::TogglePetalExtension, "petals"),
        (Action::ToggleMouseCapture, "mouse"),
        (Action::ToggleHud, "hud"),
        (Action::Quit, "quit"),
    ]
    .into_iter()
    .filter_map(|(action, label)| {
        registry
            .keybind_for_action(action)
            .map(|key| format!("{key} {label}"))
    })
    .collect::<Vec<_>>()
    .join("  ")
}
