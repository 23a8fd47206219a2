//! Scene content configuration: ground, skybox, icosphere and petal ring.

use serde::{Deserialize, Serialize};

/// Top-level scene settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Background clear color as hex.
    pub clear_color: String,
    /// Direction from the scene towards the light. Normalized at upload.
    pub light_direction: [f32; 3],
    /// Upper bound on a single frame's delta time, in seconds.
    pub max_frame_delta: f32,
    pub ground: GroundConfig,
    pub skybox: SkyboxConfig,
    pub icosphere: IcosphereConfig,
    pub petals: PetalConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: "#1a1a1a".into(),
            light_direction: [-2.0, 4.0, -1.0],
            max_frame_delta: 0.25,
            ground: GroundConfig::default(),
            skybox: SkyboxConfig::default(),
            icosphere: IcosphereConfig::default(),
            petals: PetalConfig::default(),
        }
    }
}

/// Textured ground quad.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub texture: String,
    /// Half-extent of the quad along X and Z.
    pub size: f32,
    /// Y coordinate of the quad before the model transform.
    pub height: f32,
    /// How many times the texture tiles across the quad.
    pub uv_repeat: f32,
    /// Uniform scale applied by the model transform.
    pub scale: f32,
    /// Translation applied after scaling.
    pub offset: [f32; 3],
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            texture: "assets/textures/ground.jpg".into(),
            size: 25.0,
            height: -0.5,
            uv_repeat: 25.0,
            scale: 1.0,
            offset: [0.0, -3.0, 0.0],
        }
    }
}

/// Cubemap background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyboxConfig {
    pub enabled: bool,
    /// Face images ordered +X, -X, +Y, -Y, +Z, -Z.
    pub faces: [String; 6],
}

impl Default for SkyboxConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            faces: [
                "assets/skybox/right.jpg".into(),
                "assets/skybox/left.jpg".into(),
                "assets/skybox/top.jpg".into(),
                "assets/skybox/bottom.jpg".into(),
                "assets/skybox/front.jpg".into(),
                "assets/skybox/back.jpg".into(),
            ],
        }
    }
}

/// Procedural sphere at the center of the flower.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IcosphereConfig {
    pub radius: f32,
    pub subdivisions: u32,
    /// Share midpoint vertices between adjacent faces.
    pub smooth: bool,
    pub color: String,
    /// Spin rate about Z, shared with the petal ring.
    pub spin_degrees_per_second: f32,
}

impl Default for IcosphereConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            subdivisions: 3,
            smooth: false,
            color: "#e6b3ff".into(),
            spin_degrees_per_second: -66.5,
        }
    }
}

/// Ring of petal instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PetalConfig {
    /// Petals per pass.
    pub count: u32,
    /// Rotation accumulated per petal, in degrees.
    pub step_degrees: f32,
    /// Draw the second, unwinding pass at startup.
    pub extension_pass: bool,
    /// Lower bound of the pulsing red/blue channels.
    pub color_floor: f32,
    /// Drive the green channel with the pulse as well.
    pub use_green_channel: bool,
    pub length: f32,
    pub width: f32,
    pub segments: u32,
}

impl Default for PetalConfig {
    fn default() -> Self {
        Self {
            count: 11,
            step_degrees: 20.0,
            extension_pass: true,
            color_floor: 0.3,
            use_green_channel: false,
            length: 2.5,
            width: 0.45,
            segments: 16,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
