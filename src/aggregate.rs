//! Average skin colors per brightness bucket.

use serde::Serialize;

use crate::types::Rgb;

/// Reported for a bucket that received no samples.
pub const DEFAULT_COLOR: Rgb = Rgb::new(128, 128, 128);

/// A mean color with its hex encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateColor {
    pub rgb: Rgb,
    pub hex: String,
}

impl AggregateColor {
    pub fn new(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

impl Default for AggregateColor {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR)
    }
}

/// Per-channel mean of `samples`, truncated to 8 bits.
///
/// An empty slice yields mid gray rather than an error.
pub fn average_color(samples: &[Rgb]) -> AggregateColor {
    if samples.is_empty() {
        return AggregateColor::default();
    }

    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for c in samples {
        r += c.r as u64;
        g += c.g as u64;
        b += c.b as u64;
    }

    let n = samples.len() as f64;
    AggregateColor::new(Rgb::new(
        (r as f64 / n) as u8,
        (g as f64 / n) as u8,
        (b as f64 / n) as u8,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bucket_is_mid_gray() {
        let avg = average_color(&[]);
        assert_eq!(avg.rgb, Rgb::new(128, 128, 128));
        assert_eq!(avg.hex, "#808080");
    }

    #[test]
    fn mean_truncates() {
        // r: (10 + 11) / 2 = 10.5 -> 10
        // g: (255 + 254) / 2 = 254.5 -> 254
        // b: (0 + 3) / 2 = 1.5 -> 1
        let avg = average_color(&[Rgb::new(10, 255, 0), Rgb::new(11, 254, 3)]);
        assert_eq!(avg.rgb, Rgb::new(10, 254, 1));
        assert_eq!(avg.hex, "#0afe01");
    }

    #[test]
    fn order_does_not_matter() {
        let a = [Rgb::new(200, 10, 30), Rgb::new(100, 20, 31), Rgb::new(1, 2, 3)];
        let mut b = a;
        b.reverse();
        assert_eq!(average_color(&a), average_color(&b));
    }

    #[test]
    fn uniform_samples() {
        let samples = vec![Rgb::new(220, 200, 190); 25];
        let avg = average_color(&samples);
        assert_eq!(avg.rgb, Rgb::new(220, 200, 190));
        assert_eq!(avg.hex, "#dcc8be");
    }
}
