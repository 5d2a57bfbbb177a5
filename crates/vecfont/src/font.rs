//! The two font variants behind one type

use kurbo::Vec2;
use vecfont_core::{FontFace, GlyphRun, RunPlacement, TextStyle};
use vecfont_outline::OutlineFont;
use vecfont_stroke::StrokeFont;

/// A loaded font, stroke or outline
#[derive(Debug)]
pub enum Font {
    Stroke(StrokeFont),
    Outline(OutlineFont),
}

impl Font {
    pub fn as_stroke(&self) -> Option<&StrokeFont> {
        match self {
            Font::Stroke(font) => Some(font),
            Font::Outline(_) => None,
        }
    }

    pub fn as_outline(&self) -> Option<&OutlineFont> {
        match self {
            Font::Outline(font) => Some(font),
            Font::Stroke(_) => None,
        }
    }

    fn face(&self) -> &dyn FontFace {
        match self {
            Font::Stroke(font) => font,
            Font::Outline(font) => font,
        }
    }
}

impl From<StrokeFont> for Font {
    fn from(font: StrokeFont) -> Self {
        Font::Stroke(font)
    }
}

impl From<OutlineFont> for Font {
    fn from(font: OutlineFont) -> Self {
        Font::Outline(font)
    }
}

impl FontFace for Font {
    fn name(&self) -> &str {
        self.face().name()
    }

    fn is_stroke(&self) -> bool {
        matches!(self, Font::Stroke(_))
    }

    fn is_outline(&self) -> bool {
        matches!(self, Font::Outline(_))
    }

    fn is_bold(&self) -> bool {
        self.face().is_bold()
    }

    fn is_italic(&self) -> bool {
        self.face().is_italic()
    }

    fn interline(&self, glyph_height: f64) -> f64 {
        self.face().interline(glyph_height)
    }

    fn overbar_vertical_position(&self, glyph_height: f64) -> f64 {
        self.face().overbar_vertical_position(glyph_height)
    }

    fn underline_vertical_position(&self, glyph_height: f64) -> f64 {
        self.face().underline_vertical_position(glyph_height)
    }

    fn compute_text_line_size(&self, text: &str, size: Vec2, style: TextStyle) -> Vec2 {
        self.face().compute_text_line_size(text, size, style)
    }

    fn text_advance(&self, text: &str, size: Vec2, style: TextStyle) -> f64 {
        self.face().text_advance(text, size, style)
    }

    fn text_as_glyphs(&self, text: &str, placement: &RunPlacement, style: TextStyle) -> GlyphRun {
        self.face().text_as_glyphs(text, placement, style)
    }
}
