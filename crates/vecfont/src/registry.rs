//! Font cache keyed by name and style
//!
//! Fonts are expensive to load and immutable once loaded, so every caller
//! asking for the same `(name, bold, italic)` shares one `Arc<Font>`. Names
//! that resolve to nothing are cached against the default stroke font, so a
//! missing font is looked up and reported only once.
//!
//! Lookups take a read lock. A miss loads the font with no lock held and
//! then inserts it; when two threads race on the same key the first insert
//! wins and both get that font.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use vecfont_fontdb::{FontConfig, FontLocator};
use vecfont_outline::OutlineFont;
use vecfont_stroke::StrokeFont;

use crate::font::Font;

type FontKey = (String, bool, bool);

/// Loads fonts on demand and hands out shared references
pub struct FontRegistry {
    locator: FontLocator,
    fonts: RwLock<HashMap<FontKey, Arc<Font>>>,
    default_font: OnceLock<Arc<Font>>,
    load_count: AtomicUsize,
}

impl FontRegistry {
    pub fn new(config: FontConfig) -> Self {
        Self {
            locator: FontLocator::new(config),
            fonts: RwLock::new(HashMap::new()),
            default_font: OnceLock::new(),
            load_count: AtomicUsize::new(0),
        }
    }

    /// Process-wide registry configured from the environment
    pub fn global() -> &'static FontRegistry {
        static REGISTRY: OnceLock<FontRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| FontRegistry::new(FontConfig::from_env()))
    }

    /// The built-in stroke font
    pub fn default_font(&self) -> Arc<Font> {
        Arc::clone(
            self.default_font
                .get_or_init(|| Arc::new(Font::Stroke(StrokeFont::builtin(false, false)))),
        )
    }

    /// Font for `name`, loading it on first request.
    ///
    /// The empty name is the default font. Other names are tried as an
    /// outline font, then as a stroke table; when both fail the default font
    /// is returned and remembered for this name.
    pub fn get_font(&self, name: &str, bold: bool, italic: bool) -> Arc<Font> {
        if name.is_empty() {
            return self.default_font();
        }

        let key = (name.to_string(), bold, italic);
        if let Some(font) = self.fonts.read().get(&key) {
            return Arc::clone(font);
        }

        let font = self.load(name, bold, italic);
        Arc::clone(self.fonts.write().entry(key).or_insert(font))
    }

    /// Number of load attempts made so far
    pub fn load_count(&self) -> usize {
        self.load_count.load(Ordering::Relaxed)
    }

    /// Distinct names with a cached font, sorted
    pub fn cached_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fonts.read().keys().map(|(n, _, _)| n.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    fn load(&self, name: &str, bold: bool, italic: bool) -> Arc<Font> {
        self.load_count.fetch_add(1, Ordering::Relaxed);

        match OutlineFont::load_with(&self.locator, name, bold, italic) {
            Ok(font) => return Arc::new(Font::Outline(font)),
            Err(err) => log::debug!("{:?} is not an outline font: {}", name, err),
        }

        match StrokeFont::load_with(&self.locator, name, bold, italic) {
            Ok(font) => Arc::new(Font::Stroke(font)),
            Err(err) => {
                log::warn!(
                    "font {:?} could not be loaded ({}), using the default stroke font",
                    name,
                    err
                );
                self.default_font()
            }
        }
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new(FontConfig::default())
    }
}
