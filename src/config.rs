use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::PLACEHOLDER_THUMBNAIL;

/// Application configuration loaded from a TOML settings file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory scanned for images.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Artifact path written by the builder.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Artifact path read by the gallery renderer.
    #[serde(default = "default_output")]
    pub media_path: PathBuf,
    /// Thumbnail for services with no media.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("./images")
}

fn default_output() -> PathBuf {
    PathBuf::from("./js/services-media.json")
}

fn default_placeholder() -> String {
    PLACEHOLDER_THUMBNAIL.to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            output: default_output(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            media_path: default_output(),
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Load configuration from the default locations or return defaults.
    pub fn load() -> Result<Self> {
        let default_paths = [
            "config/settings.toml",
            "./mediamap.toml",
            "~/.config/mediamap/settings.toml",
        ];

        for raw in default_paths {
            let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Ok(Self::default())
    }
}
