//! Outline fonts: TrueType and OpenType faces as filled polygons

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use kurbo::{Point, Vec2};
use lru::LruCache;
use parking_lot::{Mutex, RwLock};
use read_fonts::{FontRef as ReadFontRef, TableProvider};
use skrifa::attribute::Style;
use skrifa::instance::{LocationRef, Size};
use skrifa::string::StringId;
use skrifa::MetadataProvider;
use vecfont_core::geometry::{mirror_point, rotate_point};
use vecfont_core::{
    glyphs_bounding_box, Contour, FontFace, FontLoadError, Glyph, GlyphRun, OutlineGlyph,
    OutlineOrientation, PolygonSet, Result, RunPlacement, TextStyle, INTERLINE_PITCH_RATIO,
    ITALIC_TILT,
};
use vecfont_fontdb::{FontConfig, FontLocator, FontSource};

use crate::decompose::{contours_to_polygon_set, Decomposer};
use crate::outlines::glyph_outline;
use crate::shaping::{advance_width, shape_text, ShapedGlyph};

/// Outline glyphs come out this much larger than the nominal size, so they
/// match the stroke font's cap height
pub const OUTLINE_FONT_SIZE_COMPENSATION: f64 = 1.4;
pub const SUBSCRIPT_SUPERSCRIPT_SIZE: f64 = 0.64;
pub const SUPERSCRIPT_VERTICAL_OFFSET: f64 = 0.45;
pub const SUBSCRIPT_VERTICAL_OFFSET: f64 = -0.25;
pub const UNDERLINE_OFFSET_RATIO: f64 = -0.16;
pub const OVERBAR_GAP_RATIO: f64 = 0.02;
/// Thickness of overbars and underlines as a fraction of glyph height
pub const BAR_THICKNESS_RATIO: f64 = 0.05;

/// Distinct strings whose shaping is kept per font
pub const SHAPING_CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(512) {
    Some(v) => v,
    None => unreachable!(),
};

/// Vertical metrics in font units; descent is negative
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceMetrics {
    pub units_per_em: u16,
    pub ascent: f64,
    pub descent: f64,
    pub leading: f64,
}

/// A loaded TrueType/OpenType face
///
/// The font keeps its bytes and parses tables on demand. Decomposed glyph
/// contours are cached per glyph id for the life of the font; shaped runs
/// are kept in a bounded LRU keyed by text.
pub struct OutlineFont {
    name: String,
    family: String,
    data: Vec<u8>,
    face_index: u32,
    metrics: FaceMetrics,
    orientation: OutlineOrientation,
    face_bold: bool,
    face_italic: bool,
    fake_bold: bool,
    fake_italic: bool,
    contours: RwLock<HashMap<u32, Arc<Vec<Contour>>>>,
    shaped: Mutex<LruCache<String, Arc<Vec<ShapedGlyph>>>>,
}

impl OutlineFont {
    /// Load by file path or family name, using the environment's font config
    pub fn load(name: &str, bold: bool, italic: bool) -> Result<Self> {
        Self::load_with(&FontLocator::new(FontConfig::from_env()), name, bold, italic)
    }

    pub fn load_with(locator: &FontLocator, name: &str, bold: bool, italic: bool) -> Result<Self> {
        let (data, face_index) = match locator.locate_outline(name, bold, italic)? {
            FontSource::File { path, face_index } => {
                let data = std::fs::read(&path)
                    .map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
                (data, face_index)
            }
            FontSource::Data { data, face_index } => (data, face_index),
        };

        let mut font = Self::from_data(data, face_index, bold, italic)?;
        font.name = name.to_string();
        log::info!(
            "loaded outline font {:?} (family {:?}, {:?} outlines)",
            name,
            font.family,
            font.orientation
        );
        Ok(font)
    }

    /// Build from font bytes.
    ///
    /// `bold` and `italic` are requests: they turn into synthetic styling
    /// only when the face itself lacks the style.
    pub fn from_data(data: Vec<u8>, face_index: u32, bold: bool, italic: bool) -> Result<Self> {
        let font = skrifa::FontRef::from_index(&data, face_index)
            .map_err(|_| FontLoadError::InvalidData)?;

        let raw = font.metrics(Size::unscaled(), LocationRef::default());
        let metrics = FaceMetrics {
            units_per_em: raw.units_per_em.max(1),
            ascent: f64::from(raw.ascent),
            descent: f64::from(raw.descent),
            leading: f64::from(raw.leading),
        };

        let attributes = font.attributes();
        let face_bold = attributes.weight.value() >= 600.0;
        let face_italic = !matches!(attributes.style, Style::Normal);

        let family = font
            .localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map(|name| name.to_string())
            .unwrap_or_default();

        let orientation = outline_orientation(&data, face_index)?;

        Ok(Self {
            name: family.clone(),
            family,
            face_index,
            metrics,
            orientation,
            face_bold,
            face_italic,
            fake_bold: bold && !face_bold,
            fake_italic: italic && !face_italic,
            contours: RwLock::new(HashMap::new()),
            shaped: Mutex::new(LruCache::new(SHAPING_CACHE_CAPACITY)),
            data,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn face_index(&self) -> u32 {
        self.face_index
    }

    pub fn metrics(&self) -> FaceMetrics {
        self.metrics
    }

    pub fn orientation(&self) -> OutlineOrientation {
        self.orientation
    }

    /// Bold was requested but the face is regular
    pub fn is_fake_bold(&self) -> bool {
        self.fake_bold
    }

    /// Italic was requested but the face is upright
    pub fn is_fake_italic(&self) -> bool {
        self.fake_italic
    }

    /// Number of glyphs whose contours are cached
    pub fn cached_glyph_count(&self) -> usize {
        self.contours.read().len()
    }

    /// Number of text runs whose shaping is cached
    pub fn cached_run_count(&self) -> usize {
        self.shaped.lock().len()
    }

    /// Shaped glyphs of `text`, shaping on first request.
    ///
    /// The shaper runs with no lock held; measuring and drawing the same
    /// text share one result.
    pub fn shape(&self, text: &str) -> Arc<Vec<ShapedGlyph>> {
        if let Some(glyphs) = self.shaped.lock().get(text) {
            return Arc::clone(glyphs);
        }
        let glyphs = Arc::new(shape_text(&self.data, self.face_index, text));
        self.shaped.lock().put(text.to_string(), Arc::clone(&glyphs));
        glyphs
    }

    /// Contours of a glyph in font units, decomposed on first request.
    ///
    /// A glyph that fails to decompose is cached as empty.
    pub fn glyph_contours(&self, glyph_id: u32) -> Arc<Vec<Contour>> {
        if let Some(contours) = self.contours.read().get(&glyph_id) {
            return Arc::clone(contours);
        }

        let contours = match self.decompose_glyph(glyph_id) {
            Ok(contours) => contours,
            Err(err) => {
                log::warn!("glyph {} of {:?} dropped: {}", glyph_id, self.name, err);
                Vec::new()
            }
        };

        let mut cache = self.contours.write();
        Arc::clone(cache.entry(glyph_id).or_insert_with(|| Arc::new(contours)))
    }

    fn decompose_glyph(&self, glyph_id: u32) -> Result<Vec<Contour>> {
        let font = skrifa::FontRef::from_index(&self.data, self.face_index)
            .map_err(|_| FontLoadError::InvalidData)?;
        let outline = glyph_outline(&font, glyph_id)?;
        let decomposer = Decomposer::new(self.orientation, self.metrics.units_per_em);
        Ok(decomposer.decompose(outline.commands())?)
    }

    /// Font units to world units for a glyph size
    fn scale(&self, size: Vec2) -> Vec2 {
        size * (OUTLINE_FONT_SIZE_COMPENSATION / f64::from(self.metrics.units_per_em))
    }

    fn tilt_for(&self, style: TextStyle) -> f64 {
        if (style.italic && !self.face_italic) || self.fake_italic {
            ITALIC_TILT
        } else {
            0.0
        }
    }
}

impl fmt::Debug for OutlineFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineFont")
            .field("name", &self.name)
            .field("family", &self.family)
            .field("face_index", &self.face_index)
            .field("metrics", &self.metrics)
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}

fn outline_orientation(data: &[u8], face_index: u32) -> Result<OutlineOrientation> {
    let font = ReadFontRef::from_index(data, face_index).map_err(|_| FontLoadError::InvalidData)?;
    if font.glyf().is_ok() {
        Ok(OutlineOrientation::TrueType)
    } else if font.cff().is_ok() || font.cff2().is_ok() {
        Ok(OutlineOrientation::PostScript)
    } else {
        Err(FontLoadError::NotSupported("face has no glyf, CFF or CFF2 outlines".into()).into())
    }
}

/// Size and baseline of a run after super/subscript adjustment
fn script_adjusted(placement: &RunPlacement, style: TextStyle) -> (Vec2, Point) {
    let mut position = placement.position;
    if style.superscript {
        position.y -= placement.size.y * SUPERSCRIPT_VERTICAL_OFFSET;
    } else if style.subscript {
        position.y -= placement.size.y * SUBSCRIPT_VERTICAL_OFFSET;
    }
    let size = if style.is_script() {
        placement.size * SUBSCRIPT_SUPERSCRIPT_SIZE
    } else {
        placement.size
    };
    (size, position)
}

/// Shear about the baseline, then mirror and rotate like the run
fn place(point: Point, baseline: f64, tilt: f64, placement: &RunPlacement) -> Point {
    let mut p = Point::new(point.x - (point.y - baseline) * tilt, point.y);
    if placement.mirror {
        p = mirror_point(p, placement.origin);
    }
    rotate_point(p, placement.origin, placement.angle)
}

impl FontFace for OutlineFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_stroke(&self) -> bool {
        false
    }

    fn is_bold(&self) -> bool {
        self.face_bold || self.fake_bold
    }

    fn is_italic(&self) -> bool {
        self.face_italic || self.fake_italic
    }

    fn interline(&self, glyph_height: f64) -> f64 {
        let m = &self.metrics;
        INTERLINE_PITCH_RATIO * glyph_height * (m.ascent - m.descent + m.leading)
            / f64::from(m.units_per_em)
    }

    fn overbar_vertical_position(&self, glyph_height: f64) -> f64 {
        let ascent = self.metrics.ascent / f64::from(self.metrics.units_per_em);
        glyph_height * OUTLINE_FONT_SIZE_COMPENSATION * ascent + glyph_height * OVERBAR_GAP_RATIO
    }

    fn underline_vertical_position(&self, glyph_height: f64) -> f64 {
        glyph_height * UNDERLINE_OFFSET_RATIO
    }

    fn compute_text_line_size(&self, text: &str, size: Vec2, style: TextStyle) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        let size = if style.is_script() {
            size * SUBSCRIPT_SUPERSCRIPT_SIZE
        } else {
            size
        };
        let glyphs = self.shape(text);
        let mut width = advance_width(&glyphs) * self.scale(size).x;
        width += size.y * self.tilt_for(style);
        Vec2::new(width, size.y)
    }

    fn text_advance(&self, text: &str, size: Vec2, style: TextStyle) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let (size, _) = script_adjusted(&RunPlacement::new(size, Point::ZERO), style);
        let glyphs = self.shape(text);
        advance_width(&glyphs) * self.scale(size).x
    }

    fn text_as_glyphs(&self, text: &str, placement: &RunPlacement, style: TextStyle) -> GlyphRun {
        let (size, position) = script_adjusted(placement, style);
        let scale = self.scale(size);
        let tilt = self.tilt_for(style);
        let baseline = position.y;

        let mut glyphs = Vec::new();
        let mut pen = Vec2::ZERO;
        for shaped in self.shape(text).iter() {
            let contours = self.glyph_contours(shaped.glyph_id);
            if !contours.is_empty() {
                let origin = Point::new(
                    position.x + (pen.x + shaped.x_offset) * scale.x,
                    position.y - (pen.y + shaped.y_offset) * scale.y,
                );
                let set = contours_to_polygon_set(&contours, |p| {
                    let world = Point::new(origin.x + p.x * scale.x, origin.y - p.y * scale.y);
                    place(world, baseline, tilt, placement)
                });
                if !set.is_empty() {
                    glyphs.push(Glyph::Outline(OutlineGlyph::new(set)));
                }
            }
            pen.x += shaped.x_advance;
            pen.y += shaped.y_advance;
        }

        let end_x = position.x + pen.x * scale.x;
        let thickness = size.y * BAR_THICKNESS_RATIO;
        let mut bars = Vec::new();
        if style.overbar {
            bars.push(self.overbar_vertical_position(size.y));
        }
        if style.underline {
            bars.push(self.underline_vertical_position(size.y));
        }
        for height in bars {
            if end_x <= position.x {
                break;
            }
            let y = baseline - height;
            let ring = [
                Point::new(position.x, y - thickness / 2.0),
                Point::new(end_x, y - thickness / 2.0),
                Point::new(end_x, y + thickness / 2.0),
                Point::new(position.x, y + thickness / 2.0),
            ]
            .map(|p| place(p, baseline, tilt, placement));
            let mut set = PolygonSet::new();
            set.add_outline(ring.to_vec());
            glyphs.push(Glyph::Outline(OutlineGlyph::new(set)));
        }

        GlyphRun {
            bounding_box: glyphs_bounding_box(&glyphs),
            glyphs,
            next_position: Point::new(end_x, placement.position.y),
        }
    }
}
