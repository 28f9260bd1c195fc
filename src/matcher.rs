use crate::constants::SERVICE_KEYWORDS;
use crate::models::ServiceSlug;

/// Match a filename to a service by ordered keyword rules.
///
/// The filename is lower-cased and the rules are walked in declaration
/// order; the first rule with any keyword occurring as a substring wins.
/// Returns `None` when no rule matches; the caller records the file as
/// unmatched, it is not an error.
pub fn match_service(filename: &str) -> Option<ServiceSlug> {
    let lowered = filename.to_lowercase();

    for (slug, keywords) in SERVICE_KEYWORDS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return Some(*slug);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_rule_matches_its_keywords() {
        assert_eq!(match_service("dryice-blast.jpg"), Some(ServiceSlug::DryIce));
        assert_eq!(match_service("steam-room.png"), Some(ServiceSlug::Vapor));
        assert_eq!(match_service("nahco3-tank.webp"), Some(ServiceSlug::Soda));
        assert_eq!(match_service("laser-head.avif"), Some(ServiceSlug::Laser));
        assert_eq!(
            match_service("glassbead-finish.jpg"),
            Some(ServiceSlug::GlassBead)
        );
        assert_eq!(
            match_service("garnet-media.jpeg"),
            Some(ServiceSlug::Abrasive)
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(
            match_service("DryIce-Equipment-Unit3.jpg"),
            Some(ServiceSlug::DryIce)
        );
        assert_eq!(match_service("LASER-demo.PNG"), Some(ServiceSlug::Laser));
    }

    #[test]
    fn test_earlier_rule_shadows_later_on_overlap() {
        // "ice" (rule 1) and "sand" (rule 6) both present: rule order wins,
        // not keyword position in the name.
        assert_eq!(match_service("sand-vs-ice.jpg"), Some(ServiceSlug::DryIce));
        assert_eq!(match_service("ice-and-sand.jpg"), Some(ServiceSlug::DryIce));
        // "bead" (rule 5) beats "sandblast" (rule 6) appearing earlier in
        // the name.
        assert_eq!(
            match_service("sandblast-bead-test.png"),
            Some(ServiceSlug::GlassBead)
        );
    }

    #[test]
    fn test_keyword_matches_as_substring() {
        // "service" contains "ice".
        assert_eq!(match_service("service-team.jpg"), Some(ServiceSlug::DryIce));
    }

    #[test]
    fn test_no_keyword_returns_none() {
        assert_eq!(match_service("photo123.png"), None);
        assert_eq!(match_service("team-portrait.jpg"), None);
    }
}
