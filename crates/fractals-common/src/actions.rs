use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the application.
///
/// Keybinds resolve to an `Action`; the app dispatcher matches on it.
/// Movement actions are held (applied every frame while the key is down),
/// everything else fires once per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Camera movement (held) --
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,

    // -- Toggles --
    ToggleProjection,
    TogglePetalExtension,
    ToggleMouseCapture,
    ToggleHud,

    // -- Window --
    Quit,
}

impl Action {
    /// Whether this action stays active for as long as its key is held.
    pub fn is_held(&self) -> bool {
        matches!(
            self,
            Action::MoveForward | Action::MoveBackward | Action::MoveLeft | Action::MoveRight
        )
    }

    /// Human-readable label for HUD and log output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::MoveForward => "Move Forward",
            Action::MoveBackward => "Move Backward",
            Action::MoveLeft => "Move Left",
            Action::MoveRight => "Move Right",
            Action::ToggleProjection => "Toggle Projection",
            Action::TogglePetalExtension => "Toggle Petal Extension",
            Action::ToggleMouseCapture => "Toggle Mouse Capture",
            Action::ToggleHud => "Toggle HUD",
            Action::Quit => "Quit",
        }
    }
}
