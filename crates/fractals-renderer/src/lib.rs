pub mod assets;
pub mod camera;
pub mod clock;
pub mod geometry;
pub mod gpu;
pub mod perf;
pub mod petals;
pub mod render_state;
pub mod scene;
pub mod text;
pub mod transform;

pub use camera::{Camera, CameraMovement};
pub use clock::AnimationClock;
pub use geometry::{IcosphereSpec, Mesh, MeshVertex};
pub use gpu::{GpuContext, RendererError};
pub use perf::FrameTimer;
pub use petals::PetalAnimator;
pub use render_state::{hud_lines, FrameInputs, HudStatus, RenderState};
pub use text::{TextLine, TextRenderer};
