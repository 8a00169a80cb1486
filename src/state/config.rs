/// Application configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/creature-gallery/config.json
/// - macOS: ~/Library/Application Support/creature-gallery/config.json
/// - Windows: %APPDATA%\creature-gallery\config.json
///
/// Every field has a default, so a partial (or missing) file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default minimum horizontal travel for a swipe to count
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Environment override for the gallery variant ("fox" or "kangaroo")
pub const VARIANT_ENV: &str = "CREATURE_GALLERY_VARIANT";

/// Environment override for the reaction database path
pub const DATABASE_ENV: &str = "CREATURE_GALLERY_DB";

const APP_DIR: &str = "creature-gallery";

/// Which creature collection the gallery shows
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 51 foxes generated from a URL template
    #[default]
    Fox,
    /// Records loaded from a JSON catalog file
    Kangaroo,
}

impl Variant {
    /// Name of the deep-link query parameter
    pub fn param_name(self) -> &'static str {
        match self {
            Variant::Fox => "fox",
            Variant::Kangaroo => "roo",
        }
    }

    /// Namespace for the reaction storage keys
    pub fn storage_prefix(self) -> &'static str {
        self.param_name()
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Fox => "Not a Kangaroo",
            Variant::Kangaroo => "Kangaroo Gallery",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fox" => Some(Variant::Fox),
            "kangaroo" | "roo" => Some(Variant::Kangaroo),
            _ => None,
        }
    }
}

/// All user-tunable settings
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    pub variant: Variant,

    /// JSON catalog used by the kangaroo variant
    pub catalog_path: PathBuf,

    /// Origin + path that share links are built on
    pub base_url: String,

    /// Minimum horizontal swipe distance (logical pixels)
    pub swipe_threshold: f32,

    /// Override for the reaction database location
    pub database_path: Option<PathBuf>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Fox,
            catalog_path: PathBuf::from("kangaroos.json"),
            base_url: "https://creature-gallery.local/".to_string(),
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            database_path: None,
        }
    }
}

impl GalleryConfig {
    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert to a JSON string
    #[cfg(test)]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load the config file (if any) and apply environment overrides.
    /// A missing file gives defaults; an invalid one is logged and ignored.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("⚠️  Could not read {}: {e}", path.display());
                return Self::default();
            }
        };

        Self::from_json(&json).unwrap_or_else(|e| {
            tracing::warn!("⚠️  Ignoring invalid config {}: {e}", path.display());
            Self::default()
        })
    }

    /// Apply overrides from a variable lookup (the process environment in production)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(VARIANT_ENV) {
            match Variant::parse(&raw) {
                Some(variant) => self.variant = variant,
                None => tracing::warn!("⚠️  Unknown {VARIANT_ENV} value {raw:?}"),
            }
        }
        if let Some(raw) = lookup(DATABASE_ENV) {
            if !raw.trim().is_empty() {
                self.database_path = Some(PathBuf::from(raw));
            }
        }
    }

    /// Where the reaction database should live
    pub fn database_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.database_path {
            return Some(path.clone());
        }
        let mut path = dirs::data_dir().or_else(dirs::home_dir)?;
        path.push(APP_DIR);
        path.push("reactions.db");
        Some(path)
    }

    /// Where the config file is read from
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push(APP_DIR);
        path.push("config.json");
        Some(path)
    }
}
