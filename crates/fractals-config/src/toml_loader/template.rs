//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Fractals Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Fractals"
# width = 1000
# height = 900
# startup_mode = "windowed"   # windowed, maximized, fullscreen

[camera]
# position = [0.0, 0.0, 3.0]
# yaw = -90.0
# pitch = 0.0                 # clamped to (-89, 89)
# zoom = 45.0                 # vertical field of view in degrees
# zoom_min = 1.0
# zoom_max = 45.0
# movement_speed = 2.5        # units per second
# mouse_sensitivity = 0.1     # degrees per pixel
# near = 0.1
# far = 10000.0
# projection = "perspective"  # perspective, orthographic
# ortho_half_height = 2.0

[scene]
# clear_color = "#1a1a1a"
# light_direction = [-2.0, 4.0, -1.0]
# max_frame_delta = 0.25      # seconds, 0.001-1.0

[scene.ground]
# texture = "assets/textures/ground.jpg"
# size = 25.0
# height = -0.5
# uv_repeat = 25.0
# scale = 1.0
# offset = [0.0, -3.0, 0.0]

[scene.skybox]
# enabled = true
# faces = [                   # +X, -X, +Y, -Y, +Z, -Z
#   "assets/skybox/right.jpg",
#   "assets/skybox/left.jpg",
#   "assets/skybox/top.jpg",
#   "assets/skybox/bottom.jpg",
#   "assets/skybox/front.jpg",
#   "assets/skybox/back.jpg",
# ]

[scene.icosphere]
# radius = 1.0
# subdivisions = 3            # 0-8, above 6 is slow
# smooth = false
# color = "#e6b3ff"
# spin_degrees_per_second = -66.5

[scene.petals]
# count = 11                  # 1-64
# step_degrees = 20.0
# extension_pass = true
# color_floor = 0.3           # 0.0-1.0
# use_green_channel = false
# length = 2.5
# width = 0.45
# segments = 16               # 2-256

[hud]
# enabled = true
# font_path = "assets/fonts/Antonio-Bold.ttf"
# font_family = "sans-serif"
# pixel_height = 48           # 8-256
# scale = 0.5
# color = "#ffffff"
# x = 25.0
# y = 25.0
# show_fps = true

[keybinds]
# move_forward = "W"
# move_backward = "S"
# move_left = "A"
# move_right = "D"
# toggle_projection = "P"
# toggle_petal_extension = "1"
# toggle_mouse_capture = "C"
# toggle_hud = "H"
# quit = "Escape"

[logging]
# level = "info"              # trace, debug, info, warn, error
"##
    .to_string()
}
