//! Glyph atlas rasterized with cosmic-text.

use std::collections::HashMap;
use std::path::Path;

use cosmic_text::{
    Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, SwashContent, SwashImage,
};

use super::layout::GlyphMetrics;
use crate::assets::AssetError;

/// Characters baked into the atlas: printable ASCII.
pub fn atlas_charset() -> impl Iterator<Item = char> {
    (0u8..128).map(char::from).filter(|c| !c.is_ascii_control())
}

/// One glyph: its metrics plus an 8-bit coverage bitmap, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub metrics: GlyphMetrics,
    pub alpha: Vec<u8>,
}

/// Character to glyph mapping used by the overlay.
#[derive(Debug, Clone, Default)]
pub struct GlyphAtlas {
    glyphs: HashMap<char, GlyphBitmap>,
    pixel_height: f32,
}

impl GlyphAtlas {
    /// Build an atlas from pre-rasterized glyphs.
    pub fn from_glyphs(
        pixel_height: f32,
        glyphs: impl IntoIterator<Item = (char, GlyphBitmap)>,
    ) -> Self {
        Self {
            glyphs: glyphs.into_iter().collect(),
            pixel_height,
        }
    }

    /// Rasterize printable ASCII at `pixel_height`.
    ///
    /// `font_path` is loaded into the font database when it exists; otherwise
    /// `family` picks a system font. Errors only when nothing could be
    /// rasterized at all.
    pub fn load(font_path: &Path, family: &str, pixel_height: u32) -> Result<Self, AssetError> {
        let px = pixel_height.max(1) as f32;
        let mut font_system = FontSystem::new();
        let loaded_family = load_font_file(&mut font_system, font_path);
        let family_name = loaded_family.as_deref().unwrap_or(family);

        let mut swash = SwashCache::new();
        let mut buffer = Buffer::new(&mut font_system, Metrics::new(px, px * 1.25));
        buffer.set_size(&mut font_system, Some(px * 4.0), Some(px * 2.0));

        let mut glyphs = HashMap::new();
        for ch in atlas_charset() {
            let mut utf8 = [0u8; 4];
            buffer.set_text(
                &mut font_system,
                ch.encode_utf8(&mut utf8),
                Attrs::new().family(family_from_name(family_name)),
                Shaping::Advanced,
            );
            buffer.shape_until_scroll(&mut font_system, false);

            let Some(glyph) = buffer
                .layout_runs()
                .next()
                .and_then(|run| run.glyphs.first().cloned())
            else {
                continue;
            };
            if glyph.glyph_id == 0 {
                tracing::debug!("font has no glyph for {ch:?}");
                continue;
            }

            let advance = (glyph.w * 64.0).round().max(0.0) as u32;
            let physical = glyph.physical((0.0, 0.0), 1.0);
            let bitmap = match swash.get_image_uncached(&mut font_system, physical.cache_key) {
                Some(image) => bitmap_from_image(&image, advance),
                None => GlyphBitmap {
                    metrics: GlyphMetrics {
                        advance,
                        ..GlyphMetrics::default()
                    },
                    alpha: Vec::new(),
                },
            };
            glyphs.insert(ch, bitmap);
        }

        if glyphs.is_empty() {
            return Err(AssetError::Font(format!(
                "no glyphs rasterized for family '{family_name}'"
            )));
        }

        tracing::info!(
            "glyph atlas ready: {} glyphs, family '{}', {}px",
            glyphs.len(),
            family_name,
            pixel_height
        );
        Ok(Self {
            glyphs,
            pixel_height: px,
        })
    }

    pub fn metrics(&self, ch: char) -> Option<GlyphMetrics> {
        self.glyphs.get(&ch).map(|g| g.metrics)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &GlyphBitmap)> {
        self.glyphs.iter().map(|(c, g)| (*c, g))
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn pixel_height(&self) -> f32 {
        self.pixel_height
    }

    /// Baseline-to-baseline distance at `scale`.
    pub fn line_height(&self, scale: f32) -> f32 {
        self.pixel_height * 1.25 * scale
    }
}

/// Load a font file and return its family name, or `None` with a warning.
fn load_font_file(font_system: &mut FontSystem, path: &Path) -> Option<String> {
    if path.as_os_str().is_empty() {
        return None;
    }
    let db = font_system.db_mut();
    let before = db.len();
    if let Err(e) = db.load_font_file(path) {
        tracing::warn!("font {} failed to load, using fallback family: {e}", path.display());
        return None;
    }
    let family = db
        .faces()
        .skip(before)
        .find_map(|face| face.families.first().map(|(name, _)| name.clone()));
    if family.is_none() {
        tracing::warn!("font {} contains no usable faces", path.display());
    }
    family
}

fn family_from_name(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "sans-serif" | "sans" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" | "mono" => Family::Monospace,
        _ => Family::Name(name),
    }
}

fn bitmap_from_image(image: &SwashImage, advance: u32) -> GlyphBitmap {
    let alpha = match image.content {
        SwashContent::Mask => image.data.clone(),
        SwashContent::Color => image.data.chunks_exact(4).map(|p| p[3]).collect(),
        SwashContent::SubpixelMask => image
            .data
            .chunks_exact(4)
            .map(|p| p[0].max(p[1]).max(p[2]))
            .collect(),
    };
    coverage_bitmap(
        image.placement.width,
        image.placement.height,
        image.placement.left,
        image.placement.top,
        advance,
        alpha,
    )
}

/// Pair raw coverage with metrics, dropping bitmaps whose size does not
/// match their pixel count.
pub(crate) fn coverage_bitmap(
    width: u32,
    height: u32,
    left: i32,
    top: i32,
    advance: u32,
    alpha: Vec<u8>,
) -> GlyphBitmap {
    let expected = (width as usize) * (height as usize);
    if expected == 0 || alpha.len() != expected {
        return GlyphBitmap {
            metrics: GlyphMetrics {
                advance,
                ..GlyphMetrics::default()
            },
            alpha: Vec::new(),
        };
    }
    GlyphBitmap {
        metrics: GlyphMetrics {
            size: [width, height],
            bearing: [left, top],
            advance,
        },
        alpha,
    }
}
