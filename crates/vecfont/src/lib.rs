//! Vecfont - vector text for schematics and boards
//!
//! Text is turned into geometry in four steps:
//! 1. Font selection through the [`FontRegistry`]
//! 2. Markup parsing (`^{sup}`, `_{sub}`, `~{overbar}`, `${VAR}`)
//! 3. Layout of lines, alignment and orientation
//! 4. Glyph generation, and triangles for filled outline text
//!
//! Stroke fonts produce pen polylines; outline fonts produce polygons with
//! holes that [`fill_triangles`] turns into triangles.
//!
//! # Example
//!
//! ```
//! use vecfont::prelude::*;
//!
//! let registry = FontRegistry::default();
//! let font = registry.get_font("", false, false);
//! let attrs = TextAttributes::new(Vec2::new(1.0, 1.0));
//!
//! let geometry = vecfont::text_as_glyphs(font.as_ref(), "V_{CC}", Point::ZERO, &attrs, true);
//! assert_eq!(geometry.glyphs.len(), 3);
//! ```

pub mod fill;
pub mod font;
pub mod layout;
pub mod markup;
pub mod registry;

pub use vecfont_core::{attributes, contour, error, geometry, glyph, polygon, traits};
pub use vecfont_fontdb as fontdb;
pub use vecfont_markup as markup_parser;
pub use vecfont_outline as outline;
pub use vecfont_stroke as stroke;
pub use vecfont_tess as tess;

pub use fill::fill_triangles;
pub use font::Font;
pub use layout::{
    compute_text_line_size, line_positions, string_boundary_limits, text_as_glyphs, LinePlacement,
    TextGeometry, FIRST_LINE_HEIGHT_RATIO, STROKE_BOUNDARY_INFLATION,
};
pub use markup::{draw_markup, layout_markup, MarkupLayout, RenderedSpan};
pub use registry::FontRegistry;

/// Common imports for typical usage
pub mod prelude {
    pub use vecfont_core::{
        FontFace, Glyph, HorizontalAlign, Orientation, Point, Rect, Result, TextAttributes,
        TextStyle, Vec2, VecfontError, VerticalAlign,
    };
    pub use vecfont_fontdb::FontConfig;

    pub use crate::{Font, FontRegistry, TextGeometry};
}
