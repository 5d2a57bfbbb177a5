//! Vecfont Core: the shared vocabulary of text geometry
//!
//! Text goes in, geometry comes out. Every other vecfont crate speaks in the
//! types defined here:
//!
//! - [`glyph`] - stroke glyphs (pen polylines) and outline glyphs (polygon sets)
//! - [`contour`] - flattened outline loops with their winding
//! - [`polygon`] - outlines with holes, ready to fill
//! - [`attributes`] - orientation, alignment and style of a text block
//! - [`traits::FontFace`] - what a font must answer to be laid out
//!
//! World coordinates are y-down; font design units are y-up and get flipped
//! by the font backends.
//!
//! ```
//! use vecfont_core::{Glyph, StrokeGlyph, Point, Vec2};
//!
//! let mut glyph = Glyph::Stroke(StrokeGlyph::new());
//! glyph.add_point(Point::new(0.0, 0.0));
//! glyph.add_point(Point::new(1.0, 1.0));
//! glyph.finalize();
//! glyph.translate(Vec2::new(10.0, 0.0));
//! assert_eq!(glyph.bounding_box().x0, 10.0);
//! ```

pub mod attributes;
pub mod contour;
pub mod error;
pub mod geometry;
pub mod glyph;
pub mod polygon;
pub mod traits;

pub use attributes::{HorizontalAlign, Orientation, TextAttributes, TextStyle, VerticalAlign};
pub use contour::{Contour, OutlineOrientation, Winding};
pub use error::{DecomposeError, FontLoadError, Result, TriangulationError, VecfontError};
pub use geometry::{Point, Rect, Vec2};
pub use glyph::{glyphs_bounding_box, Glyph, OutlineGlyph, StrokeGlyph};
pub use polygon::{Polygon, PolygonSet};
pub use traits::{FontFace, GlyphRun, RunPlacement};

/// Italic shear applied by fonts that fake italics
pub const ITALIC_TILT: f64 = 1.0 / 8.0;

/// Baseline pitch as a multiple of glyph height
pub const INTERLINE_PITCH_RATIO: f64 = 1.61;
