//! Error types for vecfont

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VecfontError>;

/// Main error type for vecfont
#[derive(Debug, Error)]
pub enum VecfontError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Outline decomposition failed: {0}")]
    Decompose(#[from] DecomposeError),

    #[error("Triangulation failed: {0}")]
    Triangulation(#[from] TriangulationError),

    #[error("Markup parse error: {0}")]
    Markup(String),

    #[error("Shaping failed: {0}")]
    Shaping(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,

    #[error("Font not supported: {0}")]
    NotSupported(String),

    #[error("System font not found: {0}")]
    SystemFontNotFound(String),

    #[error("Invalid stroke table at line {line}: {reason}")]
    InvalidStrokeTable { line: usize, reason: String },
}

/// Errors raised while turning a curve outline into contours
#[derive(Debug, Error, PartialEq)]
pub enum DecomposeError {
    #[error("Outline command issued before any move-to")]
    MissingMoveTo,

    #[error("Outline contains a non-finite coordinate")]
    NonFiniteCoordinate,

    #[error("Glyph outline could not be drawn: {0}")]
    Draw(String),
}

/// Triangulation errors
#[derive(Debug, Error, PartialEq)]
pub enum TriangulationError {
    #[error("Outline {0} has fewer than three usable vertices")]
    DegenerateOutline(usize),

    #[error("Ear clipping could not finish outline {0}")]
    EarClippingFailed(usize),
}
