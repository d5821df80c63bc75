//! # skin-tone
//!
//! Skin tone and undertone classification from facial landmarks, with curated
//! color recommendations.
//!
//! This crate provides:
//! - **Sampling**: a sparse set of skin sample points interpolated between
//!   facial landmarks (cheeks and chin), versioned per landmark topology
//! - **Classification**: light/dusky/dark skin tone from the brightness split
//!   of the samples, warm/cool/neutral undertone from their average color
//! - **Recommendations**: colors to wear and to avoid for each of the nine
//!   resulting subtypes, with styling notes
//!
//! Face detection and landmark location are external. Plug a model in through
//! [`LandmarkProvider`], or hand the landmarks over directly.
//!
//! ## Algorithm Overview
//!
//! 1. For each landmark pair of the [`SamplePlan`], place points at 1/6 .. 5/6
//!    of the way from one landmark to the other
//! 2. Read the pixel under each point; points outside the image are skipped
//! 3. Samples with luma `0.299 r + 0.587 g + 0.114 b` above 130 are light,
//!    the rest dark
//! 4. Average the light, dark and combined samples
//! 5. If the light/dark split is within 50% of even the tone is dusky,
//!    otherwise the majority wins; red over blue in the combined average is
//!    warm, blue over red cool, a tie neutral
//! 6. Look up the palettes for the resulting subtype, e.g. "Dusky Warm"
//!
//! ## Quick Start
//!
//! ```rust
//! use skin_tone::{LandmarkSet, PixelBuffer, Rgb, SkinToneAnalyzer};
//!
//! // An image with a uniform skin color
//! let image = PixelBuffer::from_fn(200, 200, |_, _| Rgb::new(220, 200, 190));
//!
//! // 68 landmarks from your landmark model (here all at the center)
//! let landmarks = LandmarkSet::from_points(&[(100, 100); 68]);
//!
//! let analysis = SkinToneAnalyzer::shared().classify(&image, &landmarks)?;
//! assert_eq!(analysis.subtype.label(), "Light Warm");
//! println!("Wear {}", analysis.recommended_colors[0].name);
//! # Ok::<(), skin_tone::Error>(())
//! ```
//!
//! ## Custom Image Types
//!
//! Implement the [`PixelAccess`] trait for your own image types:
//!
//! ```rust
//! use skin_tone::{PixelAccess, Rgb};
//!
//! struct MyImage { /* ... */ }
//!
//! impl PixelAccess for MyImage {
//!     fn rgb(&self, x: i32, y: i32) -> Option<Rgb> {
//!         // Return None for out-of-bounds
//!         None
//!     }
//!     fn width(&self) -> u32 { 640 }
//!     fn height(&self) -> u32 { 480 }
//! }
//! ```

mod aggregate;
mod analyzer;
mod brightness;
mod config;
mod error;
mod palettes;
mod pixels;
mod plan;
pub mod provider;
mod recommend;
mod tone;
mod types;

pub use aggregate::{average_color, AggregateColor, DEFAULT_COLOR};
pub use analyzer::{Analysis, SkinToneAnalyzer, SkinToneAnalyzerBuilder};
pub use brightness::{is_light, luma, BrightnessBuckets, BucketCounts, LIGHT_LUMA_THRESHOLD};
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use pixels::{sample_pixels, PixelAccess, PixelBuffer};
pub use plan::{SamplePlan, SamplePlanEntry, MAX_STEPS};
pub use provider::{ImageCrateDecoder, ImageDecoder, LandmarkProvider, StaticLandmarks};
pub use recommend::{
    recommendations, resolve_label, RecommendationEntry, RecommendationResult, SubtypeProfile,
};
pub use tone::{
    classify_skin_tone, SkinTone, Subtype, ToneResult, Undertone, UndertoneRule, UnknownSubtype,
    DUSKY_BALANCE_RATIO,
};
pub use types::{Landmark, LandmarkSet, Rgb, SampleCoordinate};
