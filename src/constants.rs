//! Constant tables for the media map builder and gallery.
//! This module centralizes the classification and copy tables so the match
//! semantics live in one place.

use crate::models::ServiceSlug;

/// Image extensions eligible for classification (compared without the dot,
/// case-insensitively). Anything else is skipped before matching.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg",
    "jpeg",
    "png",
    "webp",
    "avif",
];

/// Ordered keyword rules mapping filename substrings to services.
///
/// Declaration order is evaluation order and the sole tie-break: a filename
/// containing both "ice" and "sand" classifies as dry-ice because that rule
/// comes first. Keep this a slice of pairs; a map would lose the ordering
/// contract.
pub const SERVICE_KEYWORDS: &[(ServiceSlug, &[&str])] = &[
    (ServiceSlug::DryIce, &["dry-ice", "dryice", "ice"]),
    (ServiceSlug::Vapor, &["vapor", "steam", "mist"]),
    (ServiceSlug::Soda, &["soda", "bicarbonate", "nahco3"]),
    (ServiceSlug::Laser, &["laser"]),
    (ServiceSlug::GlassBead, &["glassbead", "glass-bead", "bead"]),
    (ServiceSlug::Abrasive, &["abrasive", "garnet", "sandblast", "sand"]),
];

/// Secondary keyword groups for the specific content tier, checked against
/// the filename stem in this order.
pub const EQUIPMENT_KEYWORDS: &[&str] = &["equipment", "machine", "unit"];
pub const PROCESS_KEYWORDS: &[&str] = &["process", "cleaning", "work"];
pub const RESULT_KEYWORDS: &[&str] = &["before", "after", "result"];

/// Thumbnail shown for a service with no media yet.
pub const PLACEHOLDER_THUMBNAIL: &str = "/images/placeholder.webp";

/// Empty-state copy for a gallery with no items.
pub const EMPTY_STATE_EN: &str = "No images available for this service at the moment";
pub const EMPTY_STATE_AR: &str = "لا توجد صور متاحة حالياً لهذه الخدمة";
