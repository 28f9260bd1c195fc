use anyhow::{Context, Result};
use std::path::Path;
use walkdir::WalkDir;

use crate::constants::IMAGE_EXTENSIONS;

/// List image file names in the top level of `dir`, sorted by name.
///
/// Only entries with an allow-listed extension participate in
/// classification; everything else (other extensions, subdirectories,
/// non-UTF-8 names) is skipped silently. An unreadable directory is fatal:
/// the pipeline must not produce output from a partial listing.
pub fn list_images(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry
            .with_context(|| format!("Failed to read images directory: {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => continue,
        };

        if is_image(name) {
            files.push(name.to_string());
        }
    }

    Ok(files)
}

/// Extension allow-list check, case-insensitive.
pub fn is_image(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
