//! Skin tone and undertone classification.
//!
//! The skin tone comes from how the samples split between the light and dark
//! buckets; the undertone comes from the red/blue balance of the combined
//! average color. The pair forms one of nine [`Subtype`]s.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregate::AggregateColor;
use crate::brightness::BucketCounts;
use crate::types::Rgb;

/// Below this light/dark imbalance the tone is reported as dusky.
pub const DUSKY_BALANCE_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinTone {
    Light,
    Dusky,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Undertone {
    Warm,
    Cool,
    Neutral,
}

impl SkinTone {
    pub const ALL: [SkinTone; 3] = [SkinTone::Light, SkinTone::Dusky, SkinTone::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkinTone::Light => "Light",
            SkinTone::Dusky => "Dusky",
            SkinTone::Dark => "Dark",
        }
    }
}

impl Undertone {
    pub const ALL: [Undertone; 3] = [Undertone::Warm, Undertone::Cool, Undertone::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Undertone::Warm => "Warm",
            Undertone::Cool => "Cool",
            Undertone::Neutral => "Neutral",
        }
    }
}

/// How the undertone is read from the average color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UndertoneRule {
    /// Red against blue only: `r > b` warm, `b > r` cool, equal neutral.
    #[default]
    RedBlue,
    /// Red or blue must also exceed green; anything else is neutral.
    ChannelDominance,
}

impl UndertoneRule {
    pub fn classify(&self, c: Rgb) -> Undertone {
        let (r, g, b) = (c.r, c.g, c.b);
        match self {
            UndertoneRule::RedBlue => {
                if r > b {
                    Undertone::Warm
                } else if b > r {
                    Undertone::Cool
                } else {
                    Undertone::Neutral
                }
            }
            UndertoneRule::ChannelDominance => {
                if r > b && r > g {
                    Undertone::Warm
                } else if b > r && b > g {
                    Undertone::Cool
                } else {
                    Undertone::Neutral
                }
            }
        }
    }
}

/// Skin tone from bucket sizes.
///
/// A split that isn't lopsided (imbalance under [`DUSKY_BALANCE_RATIO`]) is
/// dusky even when one side has the majority. No samples at all is dusky too.
pub fn classify_skin_tone(counts: BucketCounts) -> SkinTone {
    let total = counts.light + counts.dark;
    let ratio = counts.light.abs_diff(counts.dark) as f64 / total.max(1) as f64;

    if ratio < DUSKY_BALANCE_RATIO {
        SkinTone::Dusky
    } else if counts.light > counts.dark {
        SkinTone::Light
    } else {
        SkinTone::Dark
    }
}

/// One of the nine skin tone / undertone combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subtype {
    pub tone: SkinTone,
    pub undertone: Undertone,
}

impl Subtype {
    pub const fn new(tone: SkinTone, undertone: Undertone) -> Self {
        Self { tone, undertone }
    }

    /// All subtypes, light to dark, warm before cool before neutral.
    pub fn all() -> impl Iterator<Item = Subtype> {
        SkinTone::ALL
            .into_iter()
            .flat_map(|tone| Undertone::ALL.into_iter().map(move |u| Subtype::new(tone, u)))
    }

    /// Display label, e.g. `"Dusky Warm"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.tone.as_str(), self.undertone.as_str())
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tone.as_str(), self.undertone.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubtype(pub String);

impl fmt::Display for UnknownSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown skin subtype '{}'", self.0)
    }
}

impl std::error::Error for UnknownSubtype {}

impl FromStr for Subtype {
    type Err = UnknownSubtype;

    /// Parse an exact label. Casing and spacing must match [`Subtype::label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subtype::all()
            .find(|st| st.label() == s)
            .ok_or_else(|| UnknownSubtype(s.to_string()))
    }
}

impl Serialize for Subtype {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Subtype {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Full classification of one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneResult {
    pub skin_tone: SkinTone,
    pub undertone: Undertone,
    pub subtype: Subtype,
    pub avg_light: AggregateColor,
    pub avg_dark: AggregateColor,
    pub avg_total: AggregateColor,
}

impl ToneResult {
    pub fn classify(
        counts: BucketCounts,
        avg_light: AggregateColor,
        avg_dark: AggregateColor,
        avg_total: AggregateColor,
        rule: UndertoneRule,
    ) -> Self {
        let skin_tone = classify_skin_tone(counts);
        let undertone = rule.classify(avg_total.rgb);
        Self {
            skin_tone,
            undertone,
            subtype: Subtype::new(skin_tone, undertone),
            avg_light,
            avg_dark,
            avg_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(light: usize, dark: usize) -> BucketCounts {
        BucketCounts { light, dark }
    }

    #[test]
    fn balanced_split_is_dusky() {
        // ratio 0.2: light majority, still dusky
        assert_eq!(classify_skin_tone(counts(6, 4)), SkinTone::Dusky);
        assert_eq!(classify_skin_tone(counts(4, 6)), SkinTone::Dusky);
        assert_eq!(classify_skin_tone(counts(5, 5)), SkinTone::Dusky);
    }

    #[test]
    fn lopsided_split_follows_majority() {
        assert_eq!(classify_skin_tone(counts(9, 1)), SkinTone::Light);
        assert_eq!(classify_skin_tone(counts(1, 9)), SkinTone::Dark);
        // ratio exactly 0.5 is not dusky
        assert_eq!(classify_skin_tone(counts(3, 1)), SkinTone::Light);
        assert_eq!(classify_skin_tone(counts(0, 25)), SkinTone::Dark);
    }

    #[test]
    fn no_samples_is_dusky() {
        assert_eq!(classify_skin_tone(counts(0, 0)), SkinTone::Dusky);
    }

    #[test]
    fn red_blue_undertone() {
        let rule = UndertoneRule::RedBlue;
        assert_eq!(rule.classify(Rgb::new(200, 150, 100)), Undertone::Warm);
        assert_eq!(rule.classify(Rgb::new(100, 150, 200)), Undertone::Cool);
        assert_eq!(rule.classify(Rgb::new(150, 150, 150)), Undertone::Neutral);
        // green is ignored
        assert_eq!(rule.classify(Rgb::new(120, 250, 100)), Undertone::Warm);
    }

    #[test]
    fn channel_dominance_undertone() {
        let rule = UndertoneRule::ChannelDominance;
        assert_eq!(rule.classify(Rgb::new(200, 150, 100)), Undertone::Warm);
        assert_eq!(rule.classify(Rgb::new(100, 150, 200)), Undertone::Cool);
        assert_eq!(rule.classify(Rgb::new(150, 150, 150)), Undertone::Neutral);
        assert_eq!(rule.classify(Rgb::new(120, 250, 100)), Undertone::Neutral);
        assert_eq!(rule.classify(Rgb::new(100, 250, 120)), Undertone::Neutral);
    }

    #[test]
    fn nine_distinct_labels() {
        let labels: Vec<String> = Subtype::all().map(|s| s.label()).collect();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0], "Light Warm");
        assert_eq!(labels[4], "Dusky Cool");
        assert_eq!(labels[8], "Dark Neutral");

        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 9);
    }

    #[test]
    fn label_parsing_is_exact() {
        let st: Subtype = "Dusky Warm".parse().unwrap();
        assert_eq!(st, Subtype::new(SkinTone::Dusky, Undertone::Warm));
        assert_eq!(st.to_string(), "Dusky Warm");

        assert!("dusky warm".parse::<Subtype>().is_err());
        assert!("Dusky  Warm".parse::<Subtype>().is_err());
        assert!("Medium Warm".parse::<Subtype>().is_err());
    }

    #[test]
    fn serde_forms() {
        assert_eq!(serde_json::to_string(&SkinTone::Dusky).unwrap(), "\"dusky\"");
        assert_eq!(serde_json::to_string(&Undertone::Cool).unwrap(), "\"cool\"");
        assert_eq!(
            serde_json::to_string(&Subtype::new(SkinTone::Dark, Undertone::Cool)).unwrap(),
            "\"Dark Cool\""
        );
        assert_eq!(
            serde_json::from_str::<UndertoneRule>("\"channel-dominance\"").unwrap(),
            UndertoneRule::ChannelDominance
        );
    }

    #[test]
    fn tone_result_composes_subtype() {
        let light = AggregateColor::new(Rgb::new(220, 200, 190));
        let result = ToneResult::classify(
            counts(25, 0),
            light.clone(),
            AggregateColor::default(),
            light,
            UndertoneRule::RedBlue,
        );
        assert_eq!(result.skin_tone, SkinTone::Light);
        assert_eq!(result.undertone, Undertone::Warm);
        assert_eq!(result.subtype.label(), "Light Warm");
        assert_eq!(result.avg_dark.hex, "#808080");
    }
}
