//! Where to look for fonts
//!
//! Configuration comes from the environment or from code:
//!
//! ```bash
//! VECFONT_FONT_DIR=~/.cache/vecfont/fonts VECFONT_SYSTEM_FONTS=0 ./my_app
//! ```
//!
//! ```
//! use vecfont_fontdb::FontConfig;
//!
//! let config = FontConfig::default()
//!     .with_user_font_dir("/opt/fonts")
//!     .with_system_fonts(false);
//! assert!(!config.system_fonts);
//! ```

use std::path::{Path, PathBuf};

/// Directory searched for font files and stroke tables by bare name
pub const FONT_DIR_ENV: &str = "VECFONT_FONT_DIR";

/// Set to `0`, `false`, `no` or `off` to skip the system font database
pub const SYSTEM_FONTS_ENV: &str = "VECFONT_SYSTEM_FONTS";

/// Font search configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// The user font-cache directory, searched before the system
    pub user_font_dir: Option<PathBuf>,
    /// Query the operating system's installed fonts
    pub system_fonts: bool,
    /// More directories searched after the user directory
    pub extra_dirs: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            user_font_dir: None,
            system_fonts: true,
            extra_dirs: Vec::new(),
        }
    }
}

impl FontConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, e.g. a map in tests
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(FONT_DIR_ENV).filter(|d| !d.trim().is_empty()) {
            let dir = expand_path(dir.trim());
            log::info!("vecfont user font directory set to {} via {}", dir.display(), FONT_DIR_ENV);
            config.user_font_dir = Some(dir);
        }

        if let Some(value) = lookup(SYSTEM_FONTS_ENV) {
            let disabled = matches!(
                value.trim().to_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
            if disabled {
                log::info!("vecfont system fonts disabled via {}", SYSTEM_FONTS_ENV);
            }
            config.system_fonts = !disabled;
        }

        config
    }

    pub fn with_user_font_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.user_font_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.system_fonts = enabled;
        self
    }

    pub fn with_extra_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.extra_dirs.push(dir.as_ref().to_path_buf());
        self
    }

    /// User directory first, then the extra directories
    pub fn search_dirs(&self) -> impl Iterator<Item = &Path> {
        self.user_font_dir
            .iter()
            .chain(self.extra_dirs.iter())
            .map(PathBuf::as_path)
    }
}

/// Expand `~` and `$VAR` in a path.
///
/// Unknown variables leave the text as written.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(err) => {
            log::warn!("could not expand {:?}: {}", raw, err);
            PathBuf::from(shellexpand::tilde(raw).as_ref())
        }
    }
}
