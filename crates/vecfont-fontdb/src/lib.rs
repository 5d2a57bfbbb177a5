//! Vecfont Fontdb: from a font name to a font file
//!
//! Callers name fonts the way users type them: a path, a file in the font
//! cache directory, or a family installed on the system. [`FontLocator`]
//! tries each in turn, driven by a [`FontConfig`].
//!
//! ```no_run
//! use vecfont_fontdb::{FontConfig, FontLocator};
//!
//! let locator = FontLocator::new(FontConfig::from_env());
//! let source = locator.locate_outline("DejaVu Sans", false, false)?;
//! # Ok::<(), vecfont_core::VecfontError>(())
//! ```

pub mod config;
pub mod locator;

pub use config::{expand_path, FontConfig, FONT_DIR_ENV, SYSTEM_FONTS_ENV};
pub use locator::{FontLocator, FontSource, OUTLINE_EXTENSIONS, STROKE_TABLE_EXTENSION};
