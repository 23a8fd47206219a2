//! Pen-based layout of a string into per-glyph quads.

/// Size, bearing and advance of one rasterized glyph.
///
/// `bearing` is the offset from the pen position to the glyph's top-left
/// (x right, y up from the baseline). `advance` is in 1/64 pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub size: [u32; 2],
    pub bearing: [i32; 2],
    pub advance: u32,
}

impl GlyphMetrics {
    /// Whether the glyph has a visible bitmap (space does not).
    pub fn has_bitmap(&self) -> bool {
        self.size[0] > 0 && self.size[1] > 0
    }

    /// Advance in whole pixels.
    pub fn advance_px(&self) -> u32 {
        self.advance >> 6
    }
}

/// Overlay vertex in screen pixels.
///
/// Layout: position(vec2) + uv(vec2) = 16 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlyphVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

impl GlyphVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<GlyphVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 8,
                shader_location: 1,
            },
        ],
    };

    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: [x, y],
            uv: [u, v],
        }
    }
}

/// Two triangles covering one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    pub ch: char,
    pub vertices: [GlyphVertex; 6],
}

/// Lay out `text` starting with the pen at `(x, y)` on the baseline.
///
/// Characters that `lookup` does not know are skipped without moving the
/// pen. Known glyphs without a bitmap (whitespace) move the pen but emit no
/// quad. Texture v runs top to bottom, so v = 0 sits at the top edge.
pub fn layout_text<F>(text: &str, x: f32, y: f32, scale: f32, lookup: F) -> Vec<GlyphQuad>
where
    F: Fn(char) -> Option<GlyphMetrics>,
{
    let mut pen = x;
    let mut quads = Vec::with_capacity(text.len());

    for ch in text.chars() {
        let Some(glyph) = lookup(ch) else {
            continue;
        };

        if glyph.has_bitmap() {
            let xpos = pen + glyph.bearing[0] as f32 * scale;
            let ypos = y - (glyph.size[1] as f32 - glyph.bearing[1] as f32) * scale;
            let w = glyph.size[0] as f32 * scale;
            let h = glyph.size[1] as f32 * scale;

            quads.push(GlyphQuad {
                ch,
                vertices: [
                    GlyphVertex::new(xpos, ypos + h, 0.0, 0.0),
                    GlyphVertex::new(xpos, ypos, 0.0, 1.0),
                    GlyphVertex::new(xpos + w, ypos, 1.0, 1.0),
                    GlyphVertex::new(xpos, ypos + h, 0.0, 0.0),
                    GlyphVertex::new(xpos + w, ypos, 1.0, 1.0),
                    GlyphVertex::new(xpos + w, ypos + h, 1.0, 0.0),
                ],
            });
        }

        pen += glyph.advance_px() as f32 * scale;
    }

    quads
}
