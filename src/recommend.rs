//! Color recommendations per skin subtype.
//!
//! [`Subtype`] is a closed set, so [`recommendations`] is total: every subtype
//! the classifier can produce has a palette. [`resolve_label`] covers callers
//! that only hold a label string; labels outside the nine canonical ones come
//! back empty.

use serde::Serialize;

use crate::palettes::*;
use crate::tone::{SkinTone, Subtype, Undertone};

/// One curated color with the reason it is (or isn't) flattering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationEntry {
    pub name: &'static str,
    pub hex: &'static str,
    pub reason: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub recommended: &'static [RecommendationEntry],
    pub avoid: &'static [RecommendationEntry],
}

impl RecommendationResult {
    pub const EMPTY: RecommendationResult = RecommendationResult {
        recommended: &[],
        avoid: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.recommended.is_empty() && self.avoid.is_empty()
    }
}

/// Styling notes for a subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubtypeProfile {
    /// What the skin looks like.
    pub skin: &'static str,
    /// Which colors suit it and why.
    pub suits: &'static str,
    /// Which colors to avoid and why.
    pub avoid: &'static str,
    /// Metals that flatter it.
    pub jewelry: &'static str,
    /// The overall styling idea.
    pub styling: &'static str,
}

pub fn recommendations(subtype: Subtype) -> RecommendationResult {
    use SkinTone::*;
    use Undertone::*;

    let (recommended, avoid) = match (subtype.tone, subtype.undertone) {
        (Light, Warm) => (LIGHT_WARM_RECOMMENDED, LIGHT_WARM_AVOID),
        (Light, Cool) => (LIGHT_COOL_RECOMMENDED, LIGHT_COOL_AVOID),
        (Light, Neutral) => (LIGHT_NEUTRAL_RECOMMENDED, LIGHT_NEUTRAL_AVOID),
        (Dusky, Warm) => (DUSKY_WARM_RECOMMENDED, DUSKY_WARM_AVOID),
        (Dusky, Cool) => (DUSKY_COOL_RECOMMENDED, DUSKY_COOL_AVOID),
        (Dusky, Neutral) => (DUSKY_NEUTRAL_RECOMMENDED, DUSKY_NEUTRAL_AVOID),
        (Dark, Warm) => (DARK_WARM_RECOMMENDED, DARK_WARM_AVOID),
        (Dark, Cool) => (DARK_COOL_RECOMMENDED, DARK_COOL_AVOID),
        (Dark, Neutral) => (DARK_NEUTRAL_RECOMMENDED, DARK_NEUTRAL_AVOID),
    };
    RecommendationResult { recommended, avoid }
}

impl Subtype {
    pub fn recommendations(&self) -> RecommendationResult {
        recommendations(*self)
    }

    pub fn profile(&self) -> &'static SubtypeProfile {
        use SkinTone::*;
        use Undertone::*;

        match (self.tone, self.undertone) {
            (Light, Warm) => &LIGHT_WARM_PROFILE,
            (Light, Cool) => &LIGHT_COOL_PROFILE,
            (Light, Neutral) => &LIGHT_NEUTRAL_PROFILE,
            (Dusky, Warm) => &DUSKY_WARM_PROFILE,
            (Dusky, Cool) => &DUSKY_COOL_PROFILE,
            (Dusky, Neutral) => &DUSKY_NEUTRAL_PROFILE,
            (Dark, Warm) => &DARK_WARM_PROFILE,
            (Dark, Cool) => &DARK_COOL_PROFILE,
            (Dark, Neutral) => &DARK_NEUTRAL_PROFILE,
        }
    }
}

/// Look up recommendations by label, e.g. `"Dusky Warm"`.
///
/// Matching is exact. An unrecognized label logs a warning and yields empty
/// lists.
pub fn resolve_label(label: &str) -> RecommendationResult {
    match label.parse::<Subtype>() {
        Ok(subtype) => recommendations(subtype),
        Err(e) => {
            log::warn!("{}; returning no recommendations", e);
            RecommendationResult::EMPTY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subtype_has_full_palettes() {
        for subtype in Subtype::all() {
            let r = recommendations(subtype);
            assert_eq!(r.recommended.len(), 10, "{}", subtype);
            assert_eq!(r.avoid.len(), 5, "{}", subtype);

            for e in r.recommended.iter().chain(r.avoid) {
                assert_eq!(e.hex.len(), 7, "{} in {}", e.name, subtype);
                assert!(e.hex.starts_with('#'));
                assert!(e.hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
                assert!(!e.reason.is_empty());
            }
        }
    }

    #[test]
    fn light_warm_palette() {
        let r = recommendations(Subtype::new(SkinTone::Light, Undertone::Warm));
        assert_eq!(
            r.recommended[0],
            RecommendationEntry {
                name: "Peach",
                hex: "#FFDAB9",
                reason: "Enhances warm glow"
            }
        );
        assert_eq!(r.recommended[9].name, "Salmon");
        assert_eq!(r.avoid[0].name, "Neon Green");
        assert_eq!(r.avoid[4].name, "Purple");
    }

    #[test]
    fn label_lookup_matches_typed_lookup() {
        for subtype in Subtype::all() {
            assert_eq!(resolve_label(&subtype.label()), recommendations(subtype));
        }
    }

    #[test]
    fn label_miss_is_empty() {
        assert!(resolve_label("light warm").is_empty());
        assert!(resolve_label("Medium Cool").is_empty());
        assert!(resolve_label("").is_empty());
    }

    #[test]
    fn profiles_are_distinct() {
        let mut skins: Vec<&str> = Subtype::all().map(|s| s.profile().skin).collect();
        skins.sort();
        skins.dedup();
        assert_eq!(skins.len(), 9);

        let dusky_warm = Subtype::new(SkinTone::Dusky, Undertone::Warm).profile();
        assert!(dusky_warm.skin.starts_with("Dusky warm skin"));
    }

    #[test]
    fn profile_text_keeps_typography() {
        let light_warm = Subtype::new(SkinTone::Light, Undertone::Warm).profile();
        assert_eq!(
            light_warm.avoid,
            "Icy blues, cool greys, stark white, and silver-heavy tones oppose the skin’s warmth, making the complexion appear washed out or dull."
        );
        assert_eq!(
            light_warm.styling,
            "Light warm skin looks most radiant when gentle warmth is consistent — cool extremes disrupt its natural glow."
        );
    }

    #[test]
    fn entries_serialize_with_names() {
        let json = serde_json::to_value(LIGHT_WARM_AVOID[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Neon Green", "hex": "#39FF14", "reason": "Too harsh"})
        );
    }
}
