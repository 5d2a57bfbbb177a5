//! Vecfont Outline: TrueType and OpenType faces as polygons
//!
//! Text is shaped with harfrust, each glyph outline is drawn through skrifa
//! into a recorder, flattened, split into outlines and holes, and finally
//! scaled into world space as an [`vecfont_core::OutlineGlyph`].
//!
//! ```no_run
//! use vecfont_core::{FontFace, Point, RunPlacement, TextStyle, Vec2};
//! use vecfont_outline::OutlineFont;
//!
//! let font = OutlineFont::load("DejaVu Sans", false, false)?;
//! let placement = RunPlacement::new(Vec2::new(2.0, 2.0), Point::ZERO);
//! let run = font.text_as_glyphs("Hello", &placement, TextStyle::default());
//! println!("{} glyphs, {} cached", run.glyphs.len(), font.cached_glyph_count());
//! # Ok::<(), vecfont_core::VecfontError>(())
//! ```

pub mod decompose;
pub mod font;
pub mod outlines;
pub mod shaping;

pub use decompose::{
    contours_to_polygon_set, Decomposer, FLATNESS_TOLERANCE_EM, MAX_SUBDIVISION_DEPTH,
};
pub use font::{
    FaceMetrics, OutlineFont, BAR_THICKNESS_RATIO, OUTLINE_FONT_SIZE_COMPENSATION, SHAPING_CACHE_CAPACITY,
    OVERBAR_GAP_RATIO, SUBSCRIPT_SUPERSCRIPT_SIZE, SUBSCRIPT_VERTICAL_OFFSET,
    SUPERSCRIPT_VERTICAL_OFFSET, UNDERLINE_OFFSET_RATIO,
};
pub use outlines::{glyph_outline, GlyphOutline, OutlineCommand};
pub use shaping::{fallback_shape, shape_text, ShapedGlyph};
