//! The stroke font: glyph table, metrics and single-line layout

use kurbo::{Point, Vec2};
use vecfont_core::{
    glyphs_bounding_box, FontFace, Glyph, GlyphRun, Result, RunPlacement, StrokeGlyph, TextStyle,
    INTERLINE_PITCH_RATIO, ITALIC_TILT,
};
use vecfont_fontdb::{FontConfig, FontLocator};

use crate::glyph_table::{BUILTIN_GLYPHS, FIRST_CODE_POINT};
use crate::parse::{decode_glyph, parse_jhf, DecodedGlyph};

/// Name reported by the compiled-in table
pub const BUILTIN_FONT_NAME: &str = "simplex";

pub const OVERBAR_POSITION_FACTOR: f64 = 1.33;
pub const UNDERLINE_POSITION_FACTOR: f64 = 0.41;
pub const BOLD_FACTOR: f64 = 1.3;
/// Space advance as a fraction of glyph width
pub const SPACE_WIDTH: f64 = 0.6;
/// Trailing bearing dropped from measured line widths
pub const INTER_CHAR: f64 = 0.2;
/// Tab stops every four average characters
pub const TAB_WIDTH: f64 = 4.0 * 0.82;
pub const SUPER_SUB_SIZE_MULTIPLIER: f64 = 0.8;
pub const SUPER_HEIGHT_OFFSET: f64 = 0.35;
pub const SUB_HEIGHT_OFFSET: f64 = 0.15;
/// Normal pen width as a fraction of glyph width
pub const NORMAL_PEN_RATIO: f64 = 1.0 / 8.0;
/// Overbars and underlines stop short of the text by this much glyph width
const BAR_TRIM: f64 = 0.1;

/// A Hershey-style font of pen strokes
///
/// Glyphs are decoded once when the font is built; layout only scales and
/// places them.
#[derive(Debug, Clone)]
pub struct StrokeFont {
    name: String,
    glyphs: Vec<Option<DecodedGlyph>>,
    bold: bool,
    italic: bool,
}

impl StrokeFont {
    /// Load a stroke font; the empty name selects the built-in table
    ///
    /// Any other name is resolved to a `.jhf` file through the font
    /// directories configured in the environment.
    pub fn load(name: &str, bold: bool, italic: bool) -> Result<Self> {
        if name.is_empty() {
            return Ok(Self::builtin(bold, italic));
        }
        Self::load_with(&FontLocator::new(FontConfig::from_env()), name, bold, italic)
    }

    pub fn load_with(locator: &FontLocator, name: &str, bold: bool, italic: bool) -> Result<Self> {
        if name.is_empty() {
            return Ok(Self::builtin(bold, italic));
        }
        let path = locator.locate_stroke_table(name)?;
        let text = std::fs::read_to_string(&path)?;
        let font = Self::from_jhf(name, &text, bold, italic)?;
        log::info!(
            "loaded stroke font {:?} from {} ({} glyphs)",
            name,
            path.display(),
            font.glyph_count()
        );
        Ok(font)
    }

    /// The compiled-in printable ASCII table
    pub fn builtin(bold: bool, italic: bool) -> Self {
        Self::from_table(BUILTIN_FONT_NAME, BUILTIN_GLYPHS.iter().copied(), bold, italic)
    }

    /// Build from the text of a `.jhf` file
    pub fn from_jhf(name: &str, text: &str, bold: bool, italic: bool) -> Result<Self> {
        let records = parse_jhf(text)?;
        Ok(Self::from_table(
            name,
            records.iter().map(String::as_str),
            bold,
            italic,
        ))
    }

    /// Build from encoded glyph strings, the first one being U+0020
    ///
    /// Undecodable entries are kept as gaps and render like unknown
    /// characters.
    pub fn from_table<'a>(
        name: &str,
        table: impl IntoIterator<Item = &'a str>,
        bold: bool,
        italic: bool,
    ) -> Self {
        let glyphs = table
            .into_iter()
            .enumerate()
            .map(|(index, encoded)| {
                let decoded = decode_glyph(encoded);
                if decoded.is_none() {
                    log::warn!("stroke font {:?}: glyph {} is malformed", name, index);
                }
                decoded
            })
            .collect();

        Self {
            name: name.to_string(),
            glyphs,
            bold,
            italic,
        }
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.iter().flatten().count()
    }

    /// The unit-size glyph for `c`, if the table has one
    pub fn glyph(&self, c: char) -> Option<&DecodedGlyph> {
        let index = u32::from(c).checked_sub(FIRST_CODE_POINT)?;
        self.glyphs.get(index as usize)?.as_ref()
    }

    /// Pen width for a glyph size
    pub fn pen_width(&self, size: Vec2, bold: bool) -> f64 {
        let width = size.x * NORMAL_PEN_RATIO;
        if bold {
            width * BOLD_FACTOR
        } else {
            width
        }
    }

    /// Extent of a possibly multi-line string drawn with a pen of `thickness`
    pub fn string_boundary_limits(
        &self,
        text: &str,
        size: Vec2,
        thickness: f64,
        italic: bool,
    ) -> Vec2 {
        let mut lines = 0usize;
        let mut widest = 0.0f64;
        for line in text.split('\n') {
            lines += 1;
            let line_size = self.compute_text_line_size(line, size, TextStyle::default());
            widest = widest.max(line_size.x);
        }

        let height = lines as f64 * self.interline(size.y);
        let mut width = widest + thickness;
        if italic {
            width += height * ITALIC_TILT;
        }
        Vec2::new(width, height)
    }

    fn tilt_for(&self, style: TextStyle) -> f64 {
        if style.italic || self.italic {
            ITALIC_TILT
        } else {
            0.0
        }
    }

    /// A straight bar from `start` to `end`, mirrored and rotated like the run
    fn bar(start: Point, end: Point, placement: &RunPlacement) -> Glyph {
        let mut bar = StrokeGlyph::from_strokes(vec![vec![start, end]]);
        if placement.mirror {
            bar.mirror(placement.origin);
        }
        bar.rotate(placement.origin, placement.angle);
        Glyph::Stroke(bar)
    }
}

impl Default for StrokeFont {
    fn default() -> Self {
        Self::builtin(false, false)
    }
}

/// Glyph size after super/subscript scaling
fn run_size(size: Vec2, style: TextStyle) -> Vec2 {
    if style.is_script() {
        size * SUPER_SUB_SIZE_MULTIPLIER
    } else {
        size
    }
}

/// Next tab column after `offset` from the start of the run
fn next_tab_stop(offset: f64, glyph_width: f64) -> f64 {
    let tab = TAB_WIDTH * glyph_width;
    if tab <= 0.0 {
        return offset;
    }
    ((offset / tab).floor() + 1.0) * tab
}

impl StrokeFont {
    /// Cursor advance over `text` at an already scaled `size`, and whether
    /// the last character drew a glyph
    fn pen_advance(&self, text: &str, size: Vec2) -> (f64, bool) {
        let mut width = 0.0;
        let mut ends_with_glyph = false;
        for c in text.chars() {
            ends_with_glyph = false;
            match c {
                '\t' => width = next_tab_stop(width, size.x),
                ' ' => width += size.x * SPACE_WIDTH,
                _ => match self.glyph(c) {
                    Some(decoded) => {
                        width += decoded.advance * size.x;
                        ends_with_glyph = true;
                    }
                    None => width += size.x * SPACE_WIDTH,
                },
            }
        }
        (width, ends_with_glyph)
    }
}

impl FontFace for StrokeFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_stroke(&self) -> bool {
        true
    }

    fn is_bold(&self) -> bool {
        self.bold
    }

    fn is_italic(&self) -> bool {
        self.italic
    }

    fn interline(&self, glyph_height: f64) -> f64 {
        glyph_height * INTERLINE_PITCH_RATIO
    }

    fn overbar_vertical_position(&self, glyph_height: f64) -> f64 {
        glyph_height * OVERBAR_POSITION_FACTOR
    }

    fn underline_vertical_position(&self, glyph_height: f64) -> f64 {
        -glyph_height * UNDERLINE_POSITION_FACTOR
    }

    fn compute_text_line_size(&self, text: &str, size: Vec2, style: TextStyle) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        let size = run_size(size, style);
        let (mut width, ends_with_glyph) = self.pen_advance(text, size);
        if ends_with_glyph {
            width = (width - INTER_CHAR * size.x).max(0.0);
        }
        if style.italic || self.italic {
            width += size.y * ITALIC_TILT;
        }
        Vec2::new(width, size.y)
    }

    fn text_advance(&self, text: &str, size: Vec2, style: TextStyle) -> f64 {
        self.pen_advance(text, run_size(size, style)).0
    }

    fn text_as_glyphs(&self, text: &str, placement: &RunPlacement, style: TextStyle) -> GlyphRun {
        let size = run_size(placement.size, style);
        let mut cursor = placement.position;
        if style.subscript {
            cursor.y += size.y * SUB_HEIGHT_OFFSET;
        } else if style.superscript {
            cursor.y -= size.y * SUPER_HEIGHT_OFFSET;
        }

        let start = cursor;
        let tilt = self.tilt_for(style);
        let mut glyphs = Vec::new();

        for c in text.chars() {
            match c {
                '\t' => cursor.x = start.x + next_tab_stop(cursor.x - start.x, size.x),
                ' ' => cursor.x += size.x * SPACE_WIDTH,
                _ => match self.glyph(c) {
                    Some(decoded) => {
                        let placed = decoded.glyph.transform(
                            size,
                            cursor.to_vec2(),
                            tilt,
                            placement.angle,
                            placement.mirror,
                            placement.origin,
                        );
                        if !placed.is_empty() {
                            glyphs.push(Glyph::Stroke(placed));
                        }
                        cursor.x += decoded.advance * size.x;
                    }
                    None => {
                        log::debug!("stroke font {:?} has no glyph for {:?}", self.name, c);
                        cursor.x += size.x * SPACE_WIDTH;
                    }
                },
            }
        }

        let trim = size.x * BAR_TRIM;
        if cursor.x - start.x > 2.0 * trim {
            let mut bars = Vec::new();
            if style.overbar {
                bars.push(self.overbar_vertical_position(size.y));
            }
            if style.underline {
                bars.push(self.underline_vertical_position(size.y));
            }
            for height in bars {
                // Bars lean with italic glyphs
                let shift = height * tilt;
                let y = cursor.y - height;
                glyphs.push(Self::bar(
                    Point::new(start.x + shift + trim, y),
                    Point::new(cursor.x + shift - trim, y),
                    placement,
                ));
            }
        }

        GlyphRun {
            bounding_box: glyphs_bounding_box(&glyphs),
            glyphs,
            next_position: Point::new(cursor.x, placement.position.y),
        }
    }
}
