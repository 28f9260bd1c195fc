use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::lang::Lang;

/// Cleaning-service categories offered by the site.
///
/// This is a closed set: the keyword table, the content tables and the
/// gallery routing are all keyed by these six slugs, so adding a service
/// means extending every table (the compiler points at each site).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceSlug {
    DryIce,
    Vapor,
    Soda,
    Laser,
    GlassBead,
    Abrasive,
}

impl ServiceSlug {
    /// Every service, in site display order.
    pub const ALL: [ServiceSlug; 6] = [
        ServiceSlug::DryIce,
        ServiceSlug::Vapor,
        ServiceSlug::Soda,
        ServiceSlug::Laser,
        ServiceSlug::GlassBead,
        ServiceSlug::Abrasive,
    ];

    /// Kebab-case identifier used in the artifact and gallery queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceSlug::DryIce => "dry-ice",
            ServiceSlug::Vapor => "vapor",
            ServiceSlug::Soda => "soda",
            ServiceSlug::Laser => "laser",
            ServiceSlug::GlassBead => "glass-bead",
            ServiceSlug::Abrasive => "abrasive",
        }
    }

    /// Human-readable form interpolated into generated English copy,
    /// e.g. "dry ice".
    pub fn label(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl fmt::Display for ServiceSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceSlug {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for slug in ServiceSlug::ALL {
            if slug.as_str() == s {
                return Ok(slug);
            }
        }
        bail!("unknown service slug: {}", s)
    }
}

/// One entry of the media artifact.
///
/// Field order here is the JSON field order of the artifact, which the
/// gallery renderer consumes as-is. Items are built once per run and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub service: ServiceSlug,
    /// Site-absolute image path, always `/images/<original filename>`.
    pub src: String,
    pub alt_en: String,
    pub alt_ar: String,
    pub caption_en: String,
    pub caption_ar: String,
}

impl MediaItem {
    /// Alt text in the requested language.
    pub fn alt(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.alt_en,
            Lang::Ar => &self.alt_ar,
        }
    }

    /// Caption in the requested language.
    pub fn caption(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.caption_en,
            Lang::Ar => &self.caption_ar,
        }
    }
}
