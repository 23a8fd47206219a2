mod context;
mod depth;
mod types;
mod uniforms;

pub use context::*;
pub use depth::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("lost".to_string());
        assert_eq!(err.to_string(), "surface error: lost");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_text_display() {
        let err = RendererError::TextError("no font".to_string());
        assert_eq!(err.to_string(), "text rendering error: no font");
    }

    #[test]
    fn renderer_error_from_geometry() {
        let err: RendererError = crate::geometry::GeometryError::InvalidRadius(-1.0).into();
        assert_eq!(
            err.to_string(),
            "invalid geometry: radius must be greater than zero, got -1"
        );
    }

    #[test]
    fn physical_size_aspect_ratio() {
        let size = PhysicalSize {
            width: 1000,
            height: 500,
        };
        assert!((size.aspect_ratio() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn physical_size_zero_height_has_unit_aspect() {
        let size = PhysicalSize {
            width: 1000,
            height: 0,
        };
        assert!((size.aspect_ratio() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn scene_uniforms_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<SceneUniforms>(), 160);
    }

    #[test]
    fn depth_format_is_depth32() {
        assert_eq!(DEPTH_FORMAT, wgpu::TextureFormat::Depth32Float);
    }
}
