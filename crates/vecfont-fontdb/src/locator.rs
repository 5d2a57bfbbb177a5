//! Turning a font name into bytes on disk
//!
//! A name is tried, in order, as a file path, as a file in the configured
//! font directories (with and without a font extension) and finally as a
//! family name in the system font database.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use fontdb::{Database, Family, Query, Source, Stretch, Style, Weight};
use vecfont_core::{FontLoadError, Result};

use crate::config::FontConfig;

/// Extensions tried for outline fonts given without one
pub const OUTLINE_EXTENSIONS: [&str; 4] = ["ttf", "otf", "ttc", "otc"];

/// Extension of Hershey stroke tables
pub const STROKE_TABLE_EXTENSION: &str = "jhf";

/// Where the bytes of a resolved face live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File { path: PathBuf, face_index: u32 },
    Data { data: Vec<u8>, face_index: u32 },
}

impl FontSource {
    pub fn face_index(&self) -> u32 {
        match self {
            FontSource::File { face_index, .. } | FontSource::Data { face_index, .. } => {
                *face_index
            }
        }
    }
}

/// Resolves font names against the configuration
///
/// The system database is scanned on first use only.
pub struct FontLocator {
    config: FontConfig,
    database: OnceLock<Database>,
}

impl FontLocator {
    pub fn new(config: FontConfig) -> Self {
        Self {
            config,
            database: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &FontConfig {
        &self.config
    }

    /// Find an outline font for `name`
    ///
    /// `bold` and `italic` only steer the system database query; files
    /// named directly are used as they are.
    pub fn locate_outline(&self, name: &str, bold: bool, italic: bool) -> Result<FontSource> {
        if name.trim().is_empty() {
            return Err(FontLoadError::NotSupported("empty font name".into()).into());
        }

        if let Some(path) = self.find_file(name, &OUTLINE_EXTENSIONS) {
            if has_extension(&path, STROKE_TABLE_EXTENSION) {
                return Err(FontLoadError::NotSupported(format!(
                    "{} is a stroke table",
                    path.display()
                ))
                .into());
            }
            log::debug!("font {:?} resolved to file {}", name, path.display());
            return Ok(FontSource::File {
                path,
                face_index: 0,
            });
        }

        if !self.config.system_fonts && self.config.search_dirs().next().is_none() {
            return Err(FontLoadError::FileNotFound(name.to_string()).into());
        }

        self.query_database(name, bold, italic)
            .ok_or_else(|| FontLoadError::SystemFontNotFound(name.to_string()).into())
    }

    /// Find a `.jhf` stroke table for `name`
    pub fn locate_stroke_table(&self, name: &str) -> Result<PathBuf> {
        if name.trim().is_empty() {
            return Err(FontLoadError::NotSupported("empty stroke table name".into()).into());
        }
        self.find_file(name, &[STROKE_TABLE_EXTENSION])
            .filter(|path| has_extension(path, STROKE_TABLE_EXTENSION))
            .ok_or_else(|| FontLoadError::FileNotFound(name.to_string()).into())
    }

    /// Path as given, then each search directory; each with the extensions appended
    fn find_file(&self, name: &str, extensions: &[&str]) -> Option<PathBuf> {
        let direct = crate::config::expand_path(name);
        let mut bases = vec![direct.clone()];
        if direct.is_relative() {
            bases.extend(self.config.search_dirs().map(|dir| dir.join(&direct)));
        }

        bases.into_iter().find_map(|base| {
            if base.is_file() {
                return Some(base);
            }
            extensions
                .iter()
                .map(|ext| with_appended_extension(&base, ext))
                .find(|candidate| candidate.is_file())
        })
    }

    fn database(&self) -> &Database {
        self.database.get_or_init(|| {
            let mut db = Database::new();
            for dir in self.config.search_dirs() {
                db.load_fonts_dir(dir);
            }
            if self.config.system_fonts {
                db.load_system_fonts();
            }
            log::info!("font database loaded with {} faces", db.len());
            db
        })
    }

    fn query_database(&self, name: &str, bold: bool, italic: bool) -> Option<FontSource> {
        let db = self.database();
        let families = [family_for(name)];
        let query = Query {
            families: &families,
            weight: if bold { Weight::BOLD } else { Weight::NORMAL },
            stretch: Stretch::Normal,
            style: if italic { Style::Italic } else { Style::Normal },
        };

        let id = db.query(&query)?;
        let face = db.face(id)?;
        log::debug!(
            "font {:?} matched system face {:?}",
            name,
            face.post_script_name
        );

        match &face.source {
            Source::File(path) => Some(FontSource::File {
                path: path.clone(),
                face_index: face.index,
            }),
            _ => db.with_face_data(id, |data, face_index| FontSource::Data {
                data: data.to_vec(),
                face_index,
            }),
        }
    }
}

impl Default for FontLocator {
    fn default() -> Self {
        Self::new(FontConfig::default())
    }
}

fn family_for(name: &str) -> Family<'_> {
    match name.to_ascii_lowercase().as_str() {
        "serif" => Family::Serif,
        "sans-serif" | "sans" => Family::SansSerif,
        "monospace" | "mono" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(name),
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn with_appended_extension(base: &Path, ext: &str) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
