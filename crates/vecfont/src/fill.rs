//! Filling outline text with triangles

use vecfont_core::Glyph;
use vecfont_tess::{Triangle, Triangulator};

/// Triangles covering every outline glyph in `glyphs`.
///
/// A triangle's `outline` is the index of its glyph in `glyphs`. Stroke
/// glyphs have no area and contribute nothing. A glyph that fails to
/// triangulate is logged and keeps whatever triangles it produced; the
/// other glyphs are unaffected.
pub fn fill_triangles(glyphs: &[Glyph]) -> Vec<Triangle> {
    let triangulator = Triangulator::new();
    let mut triangles = Vec::new();

    for (index, glyph) in glyphs.iter().enumerate() {
        let Some(outline) = glyph.as_outline() else {
            continue;
        };
        let result = triangulator.triangulate(outline.polygons(), |_, a, b, c| {
            triangles.push(Triangle {
                outline: index,
                vertices: [a, b, c],
            })
        });
        if let Err(err) = result {
            log::warn!("glyph {} could not be filled: {}", index, err);
        }
    }

    log::trace!("filled {} glyphs with {} triangles", glyphs.len(), triangles.len());
    triangles
}
