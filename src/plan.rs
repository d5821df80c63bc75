//! Skin sample planning.
//!
//! A [`SamplePlan`] names pairs of landmarks whose connecting segment crosses
//! bare skin (cheeks, chin). Coordinates are interpolated strictly between the
//! two anchors, so lips, eyes and hair at the anchor points are never sampled.
//!
//! Plans are tied to a landmark topology. Indices mean nothing outside the
//! index scheme they were written for, so every plan carries a name and a
//! version and can be stored as JSON next to the landmark model it targets.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Landmark, LandmarkSet, SampleCoordinate};

/// Largest `steps` a plan may use.
pub const MAX_STEPS: u32 = 1024;

/// One anchor pair of a sample plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePlanEntry {
    pub start: u16,
    pub end: u16,
}

impl SamplePlanEntry {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePlan {
    /// Topology the indices refer to, e.g. `"ibug-68"`.
    pub name: String,
    pub version: u32,
    /// Number of equal segments each anchor pair is divided into.
    /// `steps - 1` interior points are sampled per pair.
    pub steps: u32,
    pub entries: Vec<SamplePlanEntry>,
}

impl SamplePlan {
    /// Canonical plan for the iBUG 68-point scheme (also valid for the
    /// 81-point extension, which keeps indices 0-67 unchanged).
    pub fn ibug_68() -> Self {
        Self {
            name: "ibug-68".to_string(),
            version: 1,
            steps: 6,
            entries: vec![
                SamplePlanEntry::new(6, 9),   // across the chin
                SamplePlanEntry::new(28, 15), // nose bridge to right jaw
                SamplePlanEntry::new(2, 30),  // left jaw to nose tip
                SamplePlanEntry::new(35, 13), // right nostril to right jaw
                SamplePlanEntry::new(31, 4),  // left nostril to left jaw
            ],
        }
    }

    /// Check the plan is usable on its own terms.
    pub fn validate(&self) -> Result<()> {
        if self.steps < 2 {
            return Err(Error::InvalidSamplePlan(format!(
                "plan '{}' v{} needs at least 2 steps, has {}",
                self.name, self.version, self.steps
            )));
        }
        if self.steps > MAX_STEPS {
            return Err(Error::InvalidSamplePlan(format!(
                "plan '{}' v{} has {} steps, at most {} allowed",
                self.name, self.version, self.steps, MAX_STEPS
            )));
        }
        if self.entries.is_empty() {
            return Err(Error::InvalidSamplePlan(format!(
                "plan '{}' v{} has no anchor pairs",
                self.name, self.version
            )));
        }
        Ok(())
    }

    /// Upper bound on the number of samples this plan produces.
    pub fn max_samples(&self) -> usize {
        self.entries.len() * self.steps.saturating_sub(1) as usize
    }

    /// Interpolate sample coordinates for one face.
    ///
    /// For each anchor pair, points are placed at fractions `i / steps` for
    /// `i` in `1..steps`. Coordinates truncate toward zero.
    pub fn sample_coordinates(&self, landmarks: &LandmarkSet) -> Result<Vec<SampleCoordinate>> {
        let mut coords = Vec::with_capacity(self.max_samples());
        for entry in &self.entries {
            let a = anchor(landmarks, entry.start)?;
            let b = anchor(landmarks, entry.end)?;
            for i in 1..self.steps {
                let t = i as f64 / self.steps as f64;
                coords.push(SampleCoordinate::new(
                    lerp(a.x, b.x, t),
                    lerp(a.y, b.y, t),
                ));
            }
        }
        Ok(coords)
    }
}

impl Default for SamplePlan {
    fn default() -> Self {
        Self::ibug_68()
    }
}

fn anchor(landmarks: &LandmarkSet, index: u16) -> Result<&Landmark> {
    landmarks.get(index).ok_or(Error::MissingLandmark {
        index,
        available: landmarks.len(),
    })
}

#[inline]
fn lerp(from: i32, to: i32, t: f64) -> i32 {
    let (from, to) = (from as f64, to as f64);
    (from + t * (to - from)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_point_plan(steps: u32) -> SamplePlan {
        SamplePlan {
            name: "test".into(),
            version: 1,
            steps,
            entries: vec![SamplePlanEntry::new(0, 1)],
        }
    }

    #[test]
    fn interior_points_only() {
        let landmarks = LandmarkSet::from_points(&[(0, 0), (60, 30)]);
        let coords = two_point_plan(6).sample_coordinates(&landmarks).unwrap();

        assert_eq!(
            coords,
            vec![
                SampleCoordinate::new(10, 5),
                SampleCoordinate::new(20, 10),
                SampleCoordinate::new(30, 15),
                SampleCoordinate::new(40, 20),
                SampleCoordinate::new(50, 25),
            ]
        );
    }

    #[test]
    fn truncates_toward_zero() {
        // 1/6 of 10 = 1.67 -> 1; 1/6 of -10 = -1.67 -> -1
        let landmarks = LandmarkSet::from_points(&[(0, 0), (10, -10)]);
        let coords = two_point_plan(6).sample_coordinates(&landmarks).unwrap();
        assert_eq!(coords[0], SampleCoordinate::new(1, -1));
        assert_eq!(coords[4], SampleCoordinate::new(8, -8));
    }

    #[test]
    fn canonical_plan_shape() {
        let plan = SamplePlan::ibug_68();
        plan.validate().unwrap();
        assert_eq!(plan.entries.len(), 5);
        assert_eq!(plan.max_samples(), 25);

        let landmarks = LandmarkSet::from_points(&[(50, 50); 68]);
        let coords = plan.sample_coordinates(&landmarks).unwrap();
        assert_eq!(coords.len(), 25);
        assert!(coords.iter().all(|c| *c == SampleCoordinate::new(50, 50)));
    }

    #[test]
    fn missing_anchor_is_reported() {
        let landmarks = LandmarkSet::new(vec![Landmark::new(0, 0, 0)]);
        let err = two_point_plan(6).sample_coordinates(&landmarks).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingLandmark {
                index: 1,
                available: 1
            }
        ));
    }

    #[test]
    fn rejects_degenerate_plans() {
        assert!(two_point_plan(1).validate().is_err());

        let mut empty = two_point_plan(6);
        empty.entries.clear();
        assert!(empty.validate().is_err());
    }

    #[test]
    fn rejects_oversized_step_counts() {
        two_point_plan(MAX_STEPS).validate().unwrap();
        assert!(matches!(
            two_point_plan(MAX_STEPS + 1).validate(),
            Err(Error::InvalidSamplePlan(_))
        ));

        let json = r#"{"name":"huge","version":1,"steps":4294967295,"entries":[{"start":0,"end":1}]}"#;
        let plan: SamplePlan = serde_json::from_str(json).unwrap();
        assert!(plan.validate().is_err());
    }

    #[test]
    fn far_apart_anchors_do_not_overflow() {
        let landmarks = LandmarkSet::from_points(&[(i32::MIN + 10, 0), (i32::MAX - 10, 0)]);
        let coords = two_point_plan(6).sample_coordinates(&landmarks).unwrap();

        assert_eq!(coords.len(), 5);
        // midpoint of a span symmetric about zero
        assert_eq!(coords[2].x, 0);
        assert!(coords.windows(2).all(|w| w[0].x < w[1].x));

        let landmarks = LandmarkSet::from_points(&[(i32::MAX, i32::MIN), (i32::MIN, i32::MAX)]);
        let coords = two_point_plan(6).sample_coordinates(&landmarks).unwrap();
        assert!(coords[0].x > 0 && coords[0].y < 0);
        assert!(coords[4].x < 0 && coords[4].y > 0);
    }

    #[test]
    fn plan_json_round_trip() {
        let plan = SamplePlan::ibug_68();
        let json = serde_json::to_string(&plan).unwrap();
        let back: SamplePlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
