//! Vecfont Stroke: fonts drawn with a pen
//!
//! Stroke fonts store every glyph as a handful of polylines in a tiny text
//! encoding inherited from the Hershey fonts. They need no font files, scale
//! to any size and render at any pen width, which makes them the default
//! font of the engine.
//!
//! ```
//! use vecfont_core::{FontFace, Point, RunPlacement, TextStyle, Vec2};
//! use vecfont_stroke::StrokeFont;
//!
//! let font = StrokeFont::load("", false, false)?;
//! let placement = RunPlacement::new(Vec2::new(1.0, 1.0), Point::ZERO);
//! let run = font.text_as_glyphs("Hi", &placement, TextStyle::default());
//! assert_eq!(run.glyphs.len(), 2);
//! # Ok::<(), vecfont_core::VecfontError>(())
//! ```

pub mod font;
pub mod glyph_table;
pub mod parse;

pub use font::{
    StrokeFont, BOLD_FACTOR, BUILTIN_FONT_NAME, INTER_CHAR, NORMAL_PEN_RATIO,
    OVERBAR_POSITION_FACTOR, SPACE_WIDTH, SUB_HEIGHT_OFFSET, SUPER_HEIGHT_OFFSET,
    SUPER_SUB_SIZE_MULTIPLIER, TAB_WIDTH, UNDERLINE_POSITION_FACTOR,
};
pub use parse::{decode_glyph, parse_jhf, DecodedGlyph, FONT_OFFSET, STROKE_FONT_SCALE};
