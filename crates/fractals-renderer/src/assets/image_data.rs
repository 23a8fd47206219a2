use std::path::Path;

use super::AssetError;

/// Placeholder color for anything that failed to load.
pub const FALLBACK_GRAY: [u8; 4] = [128, 128, 128, 255];

/// Decoded RGBA8 pixels, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl ImageData {
    /// A `width` x `height` image filled with one color.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = (width as usize) * (height as usize);
        Self {
            width,
            height,
            rgba: color.repeat(pixels),
        }
    }

    /// 1x1 gray placeholder.
    pub fn fallback() -> Self {
        Self::solid(1, 1, FALLBACK_GRAY)
    }
}

/// Decode an image file into RGBA8.
pub fn load_image(path: &Path) -> Result<ImageData, AssetError> {
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(source) => AssetError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => AssetError::Decode {
            path: path.to_path_buf(),
            message: other.to_string(),
        },
    })?;
    let rgba = img.to_rgba8();
    Ok(ImageData {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

/// Decode an image, logging and substituting the gray placeholder on failure.
pub fn load_image_or_fallback(path: &Path) -> ImageData {
    match load_image(path) {
        Ok(data) => {
            tracing::debug!("loaded texture {} ({}x{})", path.display(), data.width, data.height);
            data
        }
        Err(e) => {
            tracing::warn!("texture failed to load, using placeholder: {e}");
            ImageData::fallback()
        }
    }
}

/// Six square faces of equal size, ordered +X, -X, +Y, -Y, +Z, -Z.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubemapFaces {
    pub size: u32,
    pub faces: [Vec<u8>; 6],
}

impl CubemapFaces {
    /// All six faces concatenated, as uploaded to a 6-layer texture.
    pub fn layer_bytes(&self) -> Vec<u8> {
        self.faces.concat()
    }
}

/// Load the six cubemap faces.
///
/// The first face that decodes to a square image sets the face size. Any
/// face that fails to load or has a different size is logged and filled
/// with gray at that size. If no face loads the result is a 1x1 gray cube.
pub fn load_cubemap<P: AsRef<Path>>(paths: &[P; 6]) -> CubemapFaces {
    let decoded: Vec<Result<ImageData, AssetError>> =
        paths.iter().map(|p| load_image(p.as_ref())).collect();

    let size = decoded
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .find(|img| img.width == img.height && img.width > 0)
        .map_or(1, |img| img.width);

    let mut loaded = 0;
    let faces: [Vec<u8>; 6] = std::array::from_fn(|i| {
        let path = paths[i].as_ref();
        let gray = || ImageData::solid(size, size, FALLBACK_GRAY).rgba;
        match &decoded[i] {
            Ok(img) if img.width == size && img.height == size => {
                loaded += 1;
                img.rgba.clone()
            }
            Ok(img) => {
                let err = AssetError::FaceSize {
                    path: path.to_path_buf(),
                    width: img.width,
                    height: img.height,
                    expected: size,
                };
                tracing::warn!("cubemap face skipped: {err}");
                gray()
            }
            Err(e) => {
                tracing::warn!("cubemap face failed to load: {e}");
                gray()
            }
        }
    });

    tracing::info!("cubemap loaded: {loaded}/6 faces at {size}x{size}");
    CubemapFaces { size, faces }
}
