use std::sync::OnceLock;

use serde::Serialize;

use crate::aggregate::average_color;
use crate::brightness::{BrightnessBuckets, BucketCounts};
use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::pixels::{sample_pixels, PixelAccess};
use crate::plan::SamplePlan;
use crate::provider::{ImageDecoder, LandmarkProvider};
use crate::recommend::{RecommendationEntry, RecommendationResult, SubtypeProfile};
use crate::tone::{SkinTone, Subtype, ToneResult, Undertone, UndertoneRule};
use crate::types::{LandmarkSet, Rgb};

/// The skin tone classifier.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of threads. Build it once at startup, or use [`SkinToneAnalyzer::shared`]
/// for the default configuration.
///
/// # Pipeline
///
/// 1. Interpolate sample coordinates between landmark pairs of the plan
/// 2. Read the pixel under each coordinate, dropping those outside the image
/// 3. Bucket samples into light and dark by luma
/// 4. Average each bucket and the combined set
/// 5. Classify skin tone and undertone, forming the subtype
/// 6. Look up the subtype's palettes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinToneAnalyzer {
    plan: SamplePlan,
    undertone_rule: UndertoneRule,
}

impl SkinToneAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.plan.validate()?;
        Ok(Self {
            plan: config.plan,
            undertone_rule: config.undertone_rule,
        })
    }

    /// Process-wide analyzer with the default configuration.
    pub fn shared() -> &'static SkinToneAnalyzer {
        static SHARED: OnceLock<SkinToneAnalyzer> = OnceLock::new();
        SHARED.get_or_init(SkinToneAnalyzer::default)
    }

    pub fn builder() -> SkinToneAnalyzerBuilder {
        SkinToneAnalyzerBuilder::new()
    }

    pub fn plan(&self) -> &SamplePlan {
        &self.plan
    }

    pub fn undertone_rule(&self) -> UndertoneRule {
        self.undertone_rule
    }

    /// Classify the face described by `landmarks` in `image`.
    pub fn classify<I: PixelAccess + ?Sized>(
        &self,
        image: &I,
        landmarks: &LandmarkSet,
    ) -> Result<Analysis> {
        let (tone, counts) = self.classify_tone(image, landmarks)?;
        Ok(Analysis::new(tone, counts))
    }

    /// Run the sampling and classification stages without the palette lookup.
    pub fn classify_tone<I: PixelAccess + ?Sized>(
        &self,
        image: &I,
        landmarks: &LandmarkSet,
    ) -> Result<(ToneResult, BucketCounts)> {
        let coords = self.plan.sample_coordinates(landmarks)?;
        log::debug!(
            "planned {} sample points ({} v{})",
            coords.len(),
            self.plan.name,
            self.plan.version
        );
        let samples = sample_pixels(image, &coords);
        if samples.is_empty() {
            log::warn!(
                "all {} sample points fall outside the {}x{} image",
                coords.len(),
                image.width(),
                image.height()
            );
        }

        let buckets = BrightnessBuckets::partition(&samples);
        let counts = buckets.counts();
        log::debug!(
            "{} samples: {} light, {} dark",
            buckets.total(),
            counts.light,
            counts.dark
        );

        let tone = ToneResult::classify(
            counts,
            average_color(&buckets.light),
            average_color(&buckets.dark),
            average_color(&buckets.combined()),
            self.undertone_rule,
        );
        log::debug!(
            "classified as {} (average {})",
            tone.subtype,
            tone.avg_total.hex
        );

        Ok((tone, counts))
    }

    /// Decode `bytes`, locate the face and classify it.
    pub fn analyze(
        &self,
        bytes: &[u8],
        decoder: &dyn ImageDecoder,
        provider: &dyn LandmarkProvider,
    ) -> Result<Analysis> {
        let image = decoder.decode(bytes)?;
        let landmarks = provider.detect(&image)?;
        self.classify(&image, &landmarks)
    }
}

impl Default for SkinToneAnalyzer {
    fn default() -> Self {
        Self {
            plan: SamplePlan::ibug_68(),
            undertone_rule: UndertoneRule::default(),
        }
    }
}

/// Builder for creating a SkinToneAnalyzer.
pub struct SkinToneAnalyzerBuilder {
    plan: Option<SamplePlan>,
    undertone_rule: UndertoneRule,
}

impl SkinToneAnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            plan: None,
            undertone_rule: UndertoneRule::default(),
        }
    }

    /// Set the sample plan. Defaults to the iBUG 68-point plan.
    pub fn plan(mut self, plan: SamplePlan) -> Self {
        self.plan = Some(plan);
        self
    }

    pub fn undertone_rule(mut self, rule: UndertoneRule) -> Self {
        self.undertone_rule = rule;
        self
    }

    pub fn build(self) -> Result<SkinToneAnalyzer> {
        SkinToneAnalyzer::new(AnalyzerConfig {
            plan: self.plan.unwrap_or_default(),
            undertone_rule: self.undertone_rule,
        })
    }
}

impl Default for SkinToneAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<AnalyzerConfig> for SkinToneAnalyzer {
    type Error = Error;

    fn try_from(config: AnalyzerConfig) -> Result<Self> {
        Self::new(config)
    }
}

/// Result of classifying one face, flattened for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub skin_tone: SkinTone,
    pub subtype: Subtype,
    pub undertone: Undertone,
    pub avg_light_rgb: Rgb,
    pub avg_light_hex: String,
    pub avg_dark_rgb: Rgb,
    pub avg_dark_hex: String,
    pub avg_total_rgb: Rgb,
    pub avg_total_hex: String,
    pub recommended_colors: &'static [RecommendationEntry],
    pub avoid_colors: &'static [RecommendationEntry],
    pub profile: &'static SubtypeProfile,
    /// In-bounds samples per brightness bucket.
    pub samples: BucketCounts,
}

impl Analysis {
    pub fn new(tone: ToneResult, samples: BucketCounts) -> Self {
        let palettes = tone.subtype.recommendations();
        Self {
            skin_tone: tone.skin_tone,
            subtype: tone.subtype,
            undertone: tone.undertone,
            avg_light_rgb: tone.avg_light.rgb,
            avg_light_hex: tone.avg_light.hex,
            avg_dark_rgb: tone.avg_dark.rgb,
            avg_dark_hex: tone.avg_dark.hex,
            avg_total_rgb: tone.avg_total.rgb,
            avg_total_hex: tone.avg_total.hex,
            recommended_colors: palettes.recommended,
            avoid_colors: palettes.avoid,
            profile: tone.subtype.profile(),
            samples,
        }
    }

    pub fn recommendations(&self) -> RecommendationResult {
        RecommendationResult {
            recommended: self.recommended_colors,
            avoid: self.avoid_colors,
        }
    }
}
