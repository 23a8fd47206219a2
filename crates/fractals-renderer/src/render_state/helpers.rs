use fractals_common::Color;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Parse a config color, falling back to `default` with a warning.
pub(crate) fn color_or(hex: &str, default: Color, what: &str) -> [f32; 4] {
    match Color::from_hex(hex) {
        Some(color) => color.to_f32_array(),
        None => {
            tracing::warn!("invalid {what} color '{hex}', using {}", default.to_hex());
            default.to_f32_array()
        }
    }
}

pub(crate) fn to_wgpu_color(rgba: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: rgba[0] as f64,
        g: rgba[1] as f64,
        b: rgba[2] as f64,
        a: rgba[3] as f64,
    }
}
