use super::atlas::coverage_bitmap;
use super::*;

fn metrics(ch: char) -> Option<GlyphMetrics> {
    match ch {
        'A' => Some(GlyphMetrics {
            size: [10, 20],
            bearing: [1, 18],
            advance: 12 << 6,
        }),
        'g' => Some(GlyphMetrics {
            size: [8, 14],
            bearing: [0, 10],
            advance: 9 << 6,
        }),
        ' ' => Some(GlyphMetrics {
            size: [0, 0],
            bearing: [0, 0],
            advance: 5 << 6,
        }),
        _ => None,
    }
}

#[test]
fn glyph_vertex_size() {
    assert_eq!(std::mem::size_of::<GlyphVertex>(), 16);
}

#[test]
fn single_glyph_quad_corners() {
    let quads = layout_text("A", 25.0, 25.0, 1.0, metrics);
    assert_eq!(quads.len(), 1);
    let v = quads[0].vertices;
    // xpos = 25 + 1, ypos = 25 - (20 - 18), w = 10, h = 20
    assert_eq!(v[0].position, [26.0, 43.0]);
    assert_eq!(v[0].uv, [0.0, 0.0]);
    assert_eq!(v[1].position, [26.0, 23.0]);
    assert_eq!(v[1].uv, [0.0, 1.0]);
    assert_eq!(v[2].position, [36.0, 23.0]);
    assert_eq!(v[2].uv, [1.0, 1.0]);
    assert_eq!(v[3], v[0]);
    assert_eq!(v[4], v[2]);
    assert_eq!(v[5].position, [36.0, 43.0]);
    assert_eq!(v[5].uv, [1.0, 0.0]);
}

#[test]
fn scale_applies_to_bearing_size_and_advance() {
    let quads = layout_text("AA", 0.0, 100.0, 0.5, metrics);
    assert_eq!(quads.len(), 2);
    let first = quads[0].vertices;
    assert_eq!(first[1].position, [0.5, 99.0]);
    assert_eq!(first[2].position, [5.5, 99.0]);
    // Second glyph starts one advance (12 * 0.5) later.
    let second = quads[1].vertices;
    assert_eq!(second[1].position[0], 6.5);
}

#[test]
fn descender_sits_below_baseline() {
    let quads = layout_text("g", 0.0, 50.0, 1.0, metrics);
    // ypos = 50 - (14 - 10)
    assert_eq!(quads[0].vertices[1].position[1], 46.0);
    assert_eq!(quads[0].vertices[0].position[1], 60.0);
}

#[test]
fn space_advances_without_quad() {
    let quads = layout_text("A A", 0.0, 0.0, 1.0, metrics);
    assert_eq!(quads.len(), 2);
    // 12 for 'A' + 5 for ' ' + bearing 1
    assert_eq!(quads[1].vertices[1].position[0], 18.0);
}

#[test]
fn missing_glyph_is_skipped_without_advance() {
    let with_missing = layout_text("A\u{263A}A", 0.0, 0.0, 1.0, metrics);
    let without = layout_text("AA", 0.0, 0.0, 1.0, metrics);
    assert_eq!(with_missing, without);
}

#[test]
fn empty_text_has_no_quads() {
    assert!(layout_text("", 10.0, 10.0, 1.0, metrics).is_empty());
}

#[test]
fn advance_truncates_fractional_pixels() {
    let glyph = GlyphMetrics {
        size: [1, 1],
        bearing: [0, 0],
        advance: (7 << 6) + 63,
    };
    assert_eq!(glyph.advance_px(), 7);
}

#[test]
fn charset_is_printable_ascii() {
    let chars: Vec<char> = atlas_charset().collect();
    assert_eq!(chars.len(), 95);
    assert_eq!(chars.first(), Some(&' '));
    assert_eq!(chars.last(), Some(&'~'));
    assert!(!chars.contains(&'\n'));
}

#[test]
fn atlas_lookup_from_glyphs() {
    let atlas = GlyphAtlas::from_glyphs(
        48.0,
        [
            ('A', coverage_bitmap(2, 2, 0, 2, 640, vec![255; 4])),
            (' ', coverage_bitmap(0, 0, 0, 0, 320, Vec::new())),
        ],
    );
    assert_eq!(atlas.len(), 2);
    assert!(atlas.metrics('A').is_some_and(|m| m.has_bitmap()));
    assert!(atlas.metrics(' ').is_some_and(|m| !m.has_bitmap()));
    assert!(atlas.metrics('B').is_none());
    assert_eq!(atlas.line_height(0.5), 30.0);
}

#[test]
fn coverage_with_wrong_length_is_empty() {
    let glyph = coverage_bitmap(4, 4, 1, 4, 256, vec![0; 3]);
    assert!(!glyph.metrics.has_bitmap());
    assert!(glyph.alpha.is_empty());
    assert_eq!(glyph.metrics.advance, 256);
}
