use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::content;
use crate::matcher;
use crate::models::{MediaItem, ServiceSlug};
use crate::scanner;

/// Result of one classification pass over an image directory.
///
/// Unmatched files are diagnostic only: they are reported in the summary
/// but never reach the artifact, and they never fail the run.
#[derive(Debug, Clone, Default)]
pub struct MediaMap {
    pub items: Vec<MediaItem>,
    pub unmatched: Vec<String>,
}

impl MediaMap {
    /// Classify a list of file names in order.
    pub fn from_files(files: &[String]) -> MediaMap {
        let mut map = MediaMap::default();

        for file in files {
            match classify_file(file) {
                Some(item) => map.items.push(item),
                None => map.unmatched.push(file.clone()),
            }
        }

        map
    }

    /// Item counts per service, in order of first appearance in the item
    /// list (not keyword-table order).
    pub fn breakdown(&self) -> Vec<(ServiceSlug, usize)> {
        let mut counts: Vec<(ServiceSlug, usize)> = Vec::new();

        for item in &self.items {
            match counts.iter_mut().find(|(slug, _)| *slug == item.service) {
                Some((_, count)) => *count += 1,
                None => counts.push((item.service, 1)),
            }
        }

        counts
    }
}

/// Classify one filename into a media item, or `None` when no keyword rule
/// matches. `src` keeps the original filename casing under `/images/`.
pub fn classify_file(filename: &str) -> Option<MediaItem> {
    let slug = matcher::match_service(filename)?;
    let generated = content::generate(filename, slug);

    Some(MediaItem {
        service: slug,
        src: format!("/images/{}", filename),
        alt_en: generated.alt_en,
        alt_ar: generated.alt_ar,
        caption_en: generated.caption_en,
        caption_ar: generated.caption_ar,
    })
}

/// Scan `images_dir` and classify every eligible file in it.
pub fn build(images_dir: &Path) -> Result<MediaMap> {
    let files = scanner::list_images(images_dir)?;
    Ok(MediaMap::from_files(&files))
}

/// Serialize items to pretty JSON (2-space indent) and replace the artifact
/// at `output`.
///
/// The write goes through a temp file in the output directory which is then
/// renamed over the old artifact, so a failed run leaves any existing
/// artifact untouched.
pub fn write_artifact(items: &[MediaItem], output: &Path) -> Result<()> {
    let json =
        serde_json::to_string_pretty(items).context("Failed to serialize media items")?;

    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in {}", parent.display()))?;
    temp.write_all(json.as_bytes())
        .context("Failed to write media artifact")?;
    temp.persist(output)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace artifact: {}", output.display()))?;

    Ok(())
}
