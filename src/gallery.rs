use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::constants::{EMPTY_STATE_AR, EMPTY_STATE_EN, PLACEHOLDER_THUMBNAIL};
use crate::lang::Lang;
use crate::models::{MediaItem, ServiceSlug};

/// Read-side view of the media artifact.
///
/// The artifact is parsed once on first access and cached for the lifetime
/// of the instance; within a session the library is read-only. A missing or
/// invalid artifact degrades to an empty library with a console warning,
/// the same way the site renderer treats a failed fetch.
pub struct MediaLibrary {
    path: PathBuf,
    placeholder: String,
    media: OnceLock<Vec<MediaItem>>,
}

impl MediaLibrary {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            placeholder: PLACEHOLDER_THUMBNAIL.to_string(),
            media: OnceLock::new(),
        }
    }

    /// Override the thumbnail fallback path.
    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// All items, loading the artifact on first call.
    pub fn items(&self) -> &[MediaItem] {
        self.media.get_or_init(|| match read_artifact(&self.path) {
            Ok(items) => items,
            Err(e) => {
                eprintln!("⚠️  Could not load {}: {}", self.path.display(), e);
                Vec::new()
            }
        })
    }

    /// Items for one service, in artifact order.
    pub fn for_service(&self, slug: ServiceSlug) -> Vec<&MediaItem> {
        self.items()
            .iter()
            .filter(|item| item.service == slug)
            .collect()
    }

    /// First image of a service, or the placeholder.
    pub fn thumbnail(&self, slug: ServiceSlug) -> &str {
        self.for_service(slug)
            .first()
            .map(|item| item.src.as_str())
            .unwrap_or(&self.placeholder)
    }

    /// Gallery markup for a service, or the bilingual empty state when the
    /// service has no items.
    pub fn render_gallery(&self, slug: ServiceSlug, lang: Lang) -> String {
        let media = self.for_service(slug);

        if media.is_empty() {
            return render_empty_state(lang);
        }

        let figures: String = media
            .iter()
            .map(|item| render_figure(item, lang))
            .collect();

        format!("<div class=\"gallery\">\n{}</div>\n", figures)
    }
}

fn read_artifact(path: &Path) -> anyhow::Result<Vec<MediaItem>> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn render_figure(item: &MediaItem, lang: Lang) -> String {
    format!(
        concat!(
            "  <figure class=\"gallery-item\">\n",
            "    <img src=\"{}\" alt=\"{}\" loading=\"lazy\" width=\"400\" height=\"225\" />\n",
            "    <figcaption>{}</figcaption>\n",
            "  </figure>\n",
        ),
        item.src,
        item.alt(lang),
        item.caption(lang)
    )
}

fn render_empty_state(lang: Lang) -> String {
    let text = match lang {
        Lang::En => EMPTY_STATE_EN,
        Lang::Ar => EMPTY_STATE_AR,
    };

    format!(
        concat!(
            "<div class=\"gallery-empty\">\n",
            "  <div class=\"empty-icon\">📸</div>\n",
            "  <p>{}</p>\n",
            "</div>\n",
        ),
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline;
    use tempfile::TempDir;

    fn library_with(files: &[&str]) -> (TempDir, MediaLibrary) {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("media.json");
        let files: Vec<String> = files.iter().map(|f| f.to_string()).collect();
        let map = pipeline::MediaMap::from_files(&files);
        pipeline::write_artifact(&map.items, &out).unwrap();
        let library = MediaLibrary::new(out);
        (dir, library)
    }

    #[test]
    fn test_for_service_filters_in_artifact_order() {
        let (_dir, library) =
            library_with(&["steam-01.jpg", "dryice-01.jpg", "steam-02.jpg"]);

        let vapor = library.for_service(ServiceSlug::Vapor);
        assert_eq!(vapor.len(), 2);
        assert_eq!(vapor[0].src, "/images/steam-01.jpg");
        assert_eq!(vapor[1].src, "/images/steam-02.jpg");
        assert_eq!(library.for_service(ServiceSlug::Laser).len(), 0);
    }

    #[test]
    fn test_thumbnail_and_placeholder_fallback() {
        let (_dir, library) = library_with(&["laser-rig.webp"]);

        assert_eq!(library.thumbnail(ServiceSlug::Laser), "/images/laser-rig.webp");
        assert_eq!(
            library.thumbnail(ServiceSlug::Soda),
            "/images/placeholder.webp"
        );
    }

    #[test]
    fn test_custom_placeholder() {
        let (_dir, library) = library_with(&[]);
        let library = library.with_placeholder("/img/none.webp");
        assert_eq!(library.thumbnail(ServiceSlug::Vapor), "/img/none.webp");
    }

    #[test]
    fn test_render_gallery_selects_language_fields() {
        let (_dir, library) = library_with(&["DryIce-Equipment-Unit3.jpg"]);

        let en = library.render_gallery(ServiceSlug::DryIce, Lang::En);
        assert!(en.contains("class=\"gallery\""));
        assert!(en.contains("src=\"/images/DryIce-Equipment-Unit3.jpg\""));
        assert!(en.contains("alt=\"Professional dry ice cleaning equipment\""));

        let ar = library.render_gallery(ServiceSlug::DryIce, Lang::Ar);
        assert!(ar.contains("معدات تنظيف احترافية بالثلج الجاف"));
        assert!(ar.contains("خدمة تنظيف احترافية بالثلج الجاف"));
    }

    #[test]
    fn test_render_empty_state_bilingual() {
        let (_dir, library) = library_with(&["steam-01.jpg"]);

        let en = library.render_gallery(ServiceSlug::Abrasive, Lang::En);
        assert!(en.contains("gallery-empty"));
        assert!(en.contains(EMPTY_STATE_EN));

        let ar = library.render_gallery(ServiceSlug::Abrasive, Lang::Ar);
        assert!(ar.contains(EMPTY_STATE_AR));
    }

    #[test]
    fn test_missing_artifact_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let library = MediaLibrary::new(dir.path().join("absent.json"));
        assert!(library.items().is_empty());
        assert_eq!(
            library.thumbnail(ServiceSlug::DryIce),
            "/images/placeholder.webp"
        );
    }

    #[test]
    fn test_invalid_artifact_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("media.json");
        std::fs::write(&path, "not json at all").unwrap();

        let library = MediaLibrary::new(path);
        assert!(library.items().is_empty());
    }

    #[test]
    fn test_artifact_parsed_once() {
        let (dir, library) = library_with(&["steam-01.jpg"]);
        assert_eq!(library.items().len(), 1);

        // Replacing the file after the first read must not change the view.
        std::fs::write(dir.path().join("media.json"), "[]").unwrap();
        assert_eq!(library.items().len(), 1);
    }
}
