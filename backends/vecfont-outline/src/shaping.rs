//! Text to positioned glyph ids
//!
//! Harfrust does the real work: ligatures, kerning, marks. When harfrust
//! cannot open the face, a plain cmap + hmtx walk keeps text visible.
//! Everything here is in font units; scaling to world space happens in the
//! font.

use harfrust::{FontRef as HrFontRef, GlyphBuffer, ShaperData, UnicodeBuffer};
use read_fonts::types::GlyphId;
use read_fonts::{FontRef as ReadFontRef, TableProvider};

/// One shaped glyph, all values in font units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    pub glyph_id: u32,
    pub x_advance: f64,
    pub y_advance: f64,
    pub x_offset: f64,
    pub y_offset: f64,
    /// Byte offset of the source text this glyph came from
    pub cluster: u32,
}

/// Shape `text` with the face at `face_index` of `data`.
///
/// Every call builds a fresh shaper; callers that shape the same text
/// repeatedly go through [`crate::OutlineFont::shape`], which caches.
pub fn shape_text(data: &[u8], face_index: u32, text: &str) -> Vec<ShapedGlyph> {
    if text.is_empty() {
        return Vec::new();
    }

    match HrFontRef::from_index(data, face_index) {
        Ok(font) => {
            let shaper_data = ShaperData::new(&font);
            let shaper = shaper_data.shaper(&font).build();

            let mut buffer = UnicodeBuffer::new();
            buffer.push_str(text);
            buffer.guess_segment_properties();

            let output = shaper.shape(buffer, &[]);
            extract_glyphs(&output)
        }
        Err(err) => {
            log::debug!("harfrust could not open face {}: {}", face_index, err);
            fallback_shape(data, face_index, text)
        }
    }
}

fn extract_glyphs(buffer: &GlyphBuffer) -> Vec<ShapedGlyph> {
    buffer
        .glyph_infos()
        .iter()
        .zip(buffer.glyph_positions())
        .map(|(info, pos)| ShapedGlyph {
            glyph_id: info.glyph_id,
            x_advance: f64::from(pos.x_advance),
            y_advance: f64::from(pos.y_advance),
            x_offset: f64::from(pos.x_offset),
            y_offset: f64::from(pos.y_offset),
            cluster: info.cluster,
        })
        .collect()
}

/// One glyph per character from the cmap, advanced by `hmtx`.
///
/// Unmapped characters use glyph 0 so they still take up room.
pub fn fallback_shape(data: &[u8], face_index: u32, text: &str) -> Vec<ShapedGlyph> {
    let Ok(font) = ReadFontRef::from_index(data, face_index) else {
        return Vec::new();
    };
    let cmap = font.cmap().ok();
    let hmtx = font.hmtx().ok();

    text.char_indices()
        .map(|(offset, ch)| {
            let glyph = cmap
                .as_ref()
                .and_then(|cmap| cmap.map_codepoint(ch))
                .unwrap_or(GlyphId::NOTDEF);
            let advance = hmtx
                .as_ref()
                .and_then(|hmtx| hmtx.advance(glyph))
                .unwrap_or(0);
            ShapedGlyph {
                glyph_id: glyph.to_u32(),
                x_advance: f64::from(advance),
                y_advance: 0.0,
                x_offset: 0.0,
                y_offset: 0.0,
                cluster: offset as u32,
            }
        })
        .collect()
}

/// Total horizontal advance of a shaped run
pub fn advance_width(glyphs: &[ShapedGlyph]) -> f64 {
    glyphs.iter().map(|g| g.x_advance).sum()
}
