use crate::constants::{EQUIPMENT_KEYWORDS, PROCESS_KEYWORDS, RESULT_KEYWORDS};
use crate::models::ServiceSlug;

/// Generated bilingual copy for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaContent {
    pub alt_en: String,
    pub alt_ar: String,
    pub caption_en: String,
    pub caption_ar: String,
}

/// Content theme derived from secondary keywords in the filename stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Theme {
    Equipment,
    Process,
    Results,
}

/// Generate alt text and captions for a classified image.
///
/// English copy is filename-sensitive: a secondary keyword in the stem
/// selects a themed template interpolating the service label. Arabic copy
/// is keyed by service only: the specific tier substitutes a fixed
/// per-service phrase no matter which theme fired, and the default tier
/// reads the per-service table. The asymmetry is part of the artifact
/// contract and must not be normalized into a translation.
pub fn generate(filename: &str, slug: ServiceSlug) -> MediaContent {
    let stem = file_stem(filename);
    let label = slug.label();

    match detect_theme(&stem) {
        Some(theme) => {
            let (alt_en, caption_en) = match theme {
                Theme::Equipment => (
                    format!("Professional {} cleaning equipment", label),
                    format!("Industrial-grade {} blasting equipment", label),
                ),
                Theme::Process => (
                    format!("{} cleaning process in action", label),
                    format!("Professional {} cleaning service", label),
                ),
                Theme::Results => (
                    format!("Before and after results of {} cleaning", label),
                    format!("Transformation achieved with {} blasting", label),
                ),
            };

            MediaContent {
                alt_en,
                alt_ar: specific_alt_ar(slug).to_string(),
                caption_en,
                caption_ar: specific_caption_ar(slug).to_string(),
            }
        }
        None => default_content(slug),
    }
}

/// Lower-cased filename with the final extension removed.
fn file_stem(filename: &str) -> String {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename[..idx].to_lowercase(),
        _ => filename.to_lowercase(),
    }
}

/// First matching secondary keyword group wins.
fn detect_theme(stem: &str) -> Option<Theme> {
    if EQUIPMENT_KEYWORDS.iter().any(|kw| stem.contains(kw)) {
        Some(Theme::Equipment)
    } else if PROCESS_KEYWORDS.iter().any(|kw| stem.contains(kw)) {
        Some(Theme::Process)
    } else if RESULT_KEYWORDS.iter().any(|kw| stem.contains(kw)) {
        Some(Theme::Results)
    } else {
        None
    }
}

/// Arabic alt text for the specific tier, keyed by service only.
fn specific_alt_ar(slug: ServiceSlug) -> &'static str {
    match slug {
        ServiceSlug::DryIce => "معدات تنظيف احترافية بالثلج الجاف",
        ServiceSlug::Vapor => "معدات تنظيف احترافية بالبخار",
        ServiceSlug::Soda => "معدات تنظيف احترافية ببيكربونات الصوديوم",
        ServiceSlug::Laser => "معدات تنظيف احترافية بالليزر",
        ServiceSlug::GlassBead => "معدات تنظيف احترافية بالخرز الزجاجي",
        ServiceSlug::Abrasive => "معدات تنظيف احترافية كاشطة",
    }
}

/// Arabic caption for the specific tier, keyed by service only.
fn specific_caption_ar(slug: ServiceSlug) -> &'static str {
    match slug {
        ServiceSlug::DryIce => "خدمة تنظيف احترافية بالثلج الجاف",
        ServiceSlug::Vapor => "خدمة تنظيف احترافية بالبخار",
        ServiceSlug::Soda => "خدمة تنظيف احترافية ببيكربونات الصوديوم",
        ServiceSlug::Laser => "خدمة تنظيف احترافية بالليزر",
        ServiceSlug::GlassBead => "خدمة تنظيف احترافية بالخرز الزجاجي",
        ServiceSlug::Abrasive => "خدمة تنظيف احترافية كاشطة",
    }
}

/// Default quadruple used when no secondary keyword fires.
fn default_content(slug: ServiceSlug) -> MediaContent {
    let (alt_en, alt_ar, caption_en, caption_ar) = match slug {
        ServiceSlug::DryIce => (
            "Dry ice blasting equipment and process images",
            "صور معدات وعملية التنظيف بالثلج الجاف",
            "Eco-friendly dry ice cleaning removes contaminants without residue",
            "تنظيف بالثلج الجاف صديق للبيئة يزيل الملوثات دون مخلفات",
        ),
        ServiceSlug::Vapor => (
            "Steam and vapor cleaning technology",
            "تكنولوجيا التنظيف بالبخار والضباب",
            "High-temperature steam cleaning for deep sanitization",
            "تنظيف بالبخار عالي الحرارة للتعقيم العميق",
        ),
        ServiceSlug::Soda => (
            "Soda blasting equipment and applications",
            "معدات وتطبيقات التنظيف ببيكربونات الصوديوم",
            "Gentle soda blasting for delicate surfaces",
            "التنظيف ببيكربونات الصوديوم اللطيف للأسطح الحساسة",
        ),
        ServiceSlug::Laser => (
            "Laser cleaning technology and equipment",
            "تكنولوجيا ومعدات التنظيف بالليزر",
            "Precision laser cleaning for detailed work",
            "تنظيف بالليزر دقيق للأعمال التفصيلية",
        ),
        ServiceSlug::GlassBead => (
            "Glass bead blasting equipment and results",
            "معدات ونتائج التنظيف بالخرز الزجاجي",
            "Glass bead blasting creates smooth, uniform finishes",
            "التنظيف بالخرز الزجاجي ينتج أسطح ناعمة ومتسقة",
        ),
        ServiceSlug::Abrasive => (
            "Abrasive blasting equipment and applications",
            "معدات وتطبيقات التنظيف بالرمل",
            "Powerful abrasive blasting for tough cleaning jobs",
            "التنظيف بالرمل القوي للمهام التنظيفية الصعبة",
        ),
    };

    MediaContent {
        alt_en: alt_en.to_string(),
        alt_ar: alt_ar.to_string(),
        caption_en: caption_en.to_string(),
        caption_ar: caption_ar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equipment_theme() {
        let content = generate("DryIce-Equipment-Unit3.jpg", ServiceSlug::DryIce);
        assert_eq!(content.alt_en, "Professional dry ice cleaning equipment");
        assert_eq!(
            content.caption_en,
            "Industrial-grade dry ice blasting equipment"
        );
        // Arabic ignores the theme and uses the per-service phrases.
        assert_eq!(content.alt_ar, specific_alt_ar(ServiceSlug::DryIce));
        assert_eq!(content.caption_ar, specific_caption_ar(ServiceSlug::DryIce));
    }

    #[test]
    fn test_process_theme() {
        let content = generate("vapor-cleaning-site.png", ServiceSlug::Vapor);
        assert_eq!(content.alt_en, "vapor cleaning process in action");
        assert_eq!(content.caption_en, "Professional vapor cleaning service");
        assert_eq!(content.alt_ar, specific_alt_ar(ServiceSlug::Vapor));
    }

    #[test]
    fn test_results_theme() {
        let content = generate("laser-before-after.webp", ServiceSlug::Laser);
        assert_eq!(
            content.alt_en,
            "Before and after results of laser cleaning"
        );
        assert_eq!(
            content.caption_en,
            "Transformation achieved with laser blasting"
        );
        assert_eq!(content.caption_ar, specific_caption_ar(ServiceSlug::Laser));
    }

    #[test]
    fn test_theme_precedence_follows_group_order() {
        // Both "unit" (equipment group) and "work" (process group) appear;
        // the equipment group is checked first.
        let content = generate("soda-unit-work.jpg", ServiceSlug::Soda);
        assert_eq!(content.alt_en, "Professional soda cleaning equipment");
    }

    #[test]
    fn test_default_tier() {
        let content = generate("glassbead-01.jpg", ServiceSlug::GlassBead);
        assert_eq!(
            content.alt_en,
            "Glass bead blasting equipment and results"
        );
        assert_eq!(
            content.caption_en,
            "Glass bead blasting creates smooth, uniform finishes"
        );
        assert_eq!(content.alt_ar, "معدات ونتائج التنظيف بالخرز الزجاجي");
    }

    #[test]
    fn test_theme_keyword_in_extension_is_ignored() {
        // The stem is what gets inspected; an extension cannot fire a theme.
        assert_eq!(file_stem("abrasive-01.unit"), "abrasive-01");
    }

    #[test]
    fn test_all_fields_non_empty_for_every_service_and_tier() {
        for slug in ServiceSlug::ALL {
            for name in [
                "plain.jpg",
                "x-equipment.jpg",
                "x-process.jpg",
                "x-result.jpg",
            ] {
                let content = generate(name, slug);
                assert!(!content.alt_en.is_empty());
                assert!(!content.alt_ar.is_empty());
                assert!(!content.caption_en.is_empty());
                assert!(!content.caption_ar.is_empty());
            }
        }
    }
}
