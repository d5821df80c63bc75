use serde::{Deserialize, Serialize};

/// One anatomical facial point in pixel coordinates.
///
/// `index` is defined by the landmark model's topology (e.g. iBUG 68-point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    pub index: u16,
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub const fn new(index: u16, x: i32, y: i32) -> Self {
        Self { index, x, y }
    }
}

/// The landmarks located on one face, ordered by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    landmarks: Vec<Landmark>,
}

impl LandmarkSet {
    /// Build a set from landmarks in any order. When an index repeats, the
    /// first occurrence wins.
    pub fn new(mut landmarks: Vec<Landmark>) -> Self {
        landmarks.sort_by_key(|l| l.index);
        landmarks.dedup_by_key(|l| l.index);
        Self { landmarks }
    }

    /// Build a set from positional points; point `i` becomes landmark `i`.
    pub fn from_points(points: &[(i32, i32)]) -> Self {
        let landmarks = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Landmark::new(i as u16, x, y))
            .collect();
        Self { landmarks }
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, index: u16) -> Option<&Landmark> {
        self.landmarks
            .binary_search_by_key(&index, |l| l.index)
            .ok()
            .map(|pos| &self.landmarks[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }
}

/// A pixel position planned for skin sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleCoordinate {
    pub x: i32,
    pub y: i32,
}

impl SampleCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An 8-bit RGB color. Serializes as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` encoding.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    fn from(landmarks: Vec<Landmark>) -> Self {
        Self::new(landmarks)
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.landmarks
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.landmarks[idx]
    }
}
