//! Light/dark bucketing of skin samples.

use serde::Serialize;

use crate::types::Rgb;

/// Luma above which a sample counts as light (0-255 scale). Exclusive.
pub const LIGHT_LUMA_THRESHOLD: f64 = 130.0;

/// Perceptual brightness with Rec. 601 weights.
#[inline]
pub fn luma(c: Rgb) -> f64 {
    0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64
}

#[inline]
pub fn is_light(c: Rgb) -> bool {
    luma(c) > LIGHT_LUMA_THRESHOLD
}

/// Samples partitioned by brightness, each bucket in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrightnessBuckets {
    pub light: Vec<Rgb>,
    pub dark: Vec<Rgb>,
}

impl BrightnessBuckets {
    pub fn partition(samples: &[Rgb]) -> Self {
        let (light, dark) = samples.iter().copied().partition(|c| is_light(*c));
        Self { light, dark }
    }

    pub fn total(&self) -> usize {
        self.light.len() + self.dark.len()
    }

    /// Light samples followed by dark samples.
    pub fn combined(&self) -> Vec<Rgb> {
        let mut all = Vec::with_capacity(self.total());
        all.extend_from_slice(&self.light);
        all.extend_from_slice(&self.dark);
        all
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            light: self.light.len(),
            dark: self.dark.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    pub light: usize,
    pub dark: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_weights() {
        assert!((luma(Rgb::new(255, 255, 255)) - 255.0).abs() < 1e-9);
        assert_eq!(luma(Rgb::new(0, 0, 0)), 0.0);
        assert!((luma(Rgb::new(220, 200, 190)) - 204.84).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_exclusive() {
        // 0.299*130 + 0.587*130 + 0.114*130 sums to exactly 130 in f64
        assert_eq!(luma(Rgb::new(130, 130, 130)), 130.0);
        assert!(!is_light(Rgb::new(130, 130, 130)));
        assert!(is_light(Rgb::new(131, 131, 131)));
        assert!(!is_light(Rgb::new(129, 129, 129)));
    }

    #[test]
    fn partition_preserves_order() {
        let samples = [
            Rgb::new(250, 240, 230),
            Rgb::new(40, 30, 20),
            Rgb::new(200, 180, 170),
            Rgb::new(90, 70, 60),
        ];
        let buckets = BrightnessBuckets::partition(&samples);

        assert_eq!(buckets.light, vec![samples[0], samples[2]]);
        assert_eq!(buckets.dark, vec![samples[1], samples[3]]);
        assert_eq!(buckets.total(), 4);
        assert_eq!(buckets.counts(), BucketCounts { light: 2, dark: 2 });
        assert_eq!(
            buckets.combined(),
            vec![samples[0], samples[2], samples[1], samples[3]]
        );
    }

    #[test]
    fn empty_input() {
        let buckets = BrightnessBuckets::partition(&[]);
        assert_eq!(buckets.total(), 0);
        assert!(buckets.combined().is_empty());
    }
}
