//! Capability traits for the collaborators around the pipeline.
//!
//! Locating a face and decoding an upload are not this crate's job. The
//! pipeline asks an [`ImageDecoder`] for pixels and a [`LandmarkProvider`] for
//! landmarks, so backends (a different landmark topology, a different decoder)
//! can be swapped without touching classification.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageDecoder as _, ImageReader};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pixels::PixelBuffer;
use crate::types::LandmarkSet;

/// Locates facial landmarks in an image.
///
/// Implementations wrapping a model that isn't safe for concurrent inference
/// must serialize access themselves.
pub trait LandmarkProvider {
    /// Landmarks of the face to classify, or [`Error::NoFaceDetected`].
    fn detect(&self, image: &PixelBuffer) -> Result<LandmarkSet>;
}

/// Turns uploaded bytes into an upright RGB buffer.
pub trait ImageDecoder {
    /// Decode `bytes`, or fail with [`Error::InvalidImageFormat`].
    /// EXIF orientation must already be applied to the returned buffer.
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer>;
}

/// [`ImageDecoder`] backed by the `image` crate.
///
/// The format is sniffed from the bytes, EXIF orientation is applied and the
/// result is converted to 8-bit RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    pub fn decode_file<P: AsRef<Path>>(&self, path: P) -> Result<PixelBuffer> {
        let bytes = fs::read(path)?;
        self.decode(&bytes)
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer> {
        let mut decoder = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(image::ImageError::IoError)?
            .into_decoder()?;
        let orientation = decoder.orientation()?;

        let mut img = DynamicImage::from_decoder(decoder)?;
        img.apply_orientation(orientation);

        log::debug!(
            "decoded {}x{} image ({:?}, orientation {:?})",
            img.width(),
            img.height(),
            img.color(),
            orientation
        );

        Ok(PixelBuffer::from(img.to_rgb8()))
    }
}

/// [`LandmarkProvider`] serving landmarks located ahead of time.
///
/// Useful when detection runs in another process: its output is stored as
/// JSON and fed back here. The first face is the one classified.
#[derive(Debug, Clone, Default)]
pub struct StaticLandmarks {
    faces: Vec<LandmarkSet>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LandmarkFile {
    Single(LandmarkSet),
    Faces(Vec<LandmarkSet>),
}

impl StaticLandmarks {
    pub fn new(faces: Vec<LandmarkSet>) -> Self {
        let faces = faces.into_iter().filter(|f| !f.is_empty()).collect();
        Self { faces }
    }

    pub fn single(face: LandmarkSet) -> Self {
        Self::new(vec![face])
    }

    /// Parse either one face (`[{"index":0,"x":..,"y":..}, ...]`) or a list
    /// of faces (`[[...], [...]]`).
    pub fn from_json(json: &str) -> Result<Self> {
        let faces = match serde_json::from_str(json)? {
            LandmarkFile::Single(face) => vec![face],
            LandmarkFile::Faces(faces) => faces,
        };
        Ok(Self::new(faces))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}

impl LandmarkProvider for StaticLandmarks {
    fn detect(&self, _image: &PixelBuffer) -> Result<LandmarkSet> {
        if self.faces.len() > 1 {
            log::debug!("{} faces available, using the first", self.faces.len());
        }
        self.faces.first().cloned().ok_or(Error::NoFaceDetected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixels::PixelAccess;
    use crate::types::{Landmark, Rgb};

    fn encode_png(img: &image::RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_to_rgb() {
        let img = image::RgbImage::from_fn(5, 4, |x, y| image::Rgb([x as u8 * 10, y as u8, 99]));
        let buffer = ImageCrateDecoder.decode(&encode_png(&img)).unwrap();

        assert_eq!((buffer.width(), buffer.height()), (5, 4));
        assert_eq!(buffer.rgb(4, 3), Some(Rgb::new(40, 3, 99)));
    }

    #[test]
    fn decodes_rgba_by_dropping_alpha() {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();

        let buffer = ImageCrateDecoder.decode(&bytes).unwrap();
        assert_eq!(buffer.rgb(1, 1), Some(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn garbage_is_invalid_image_format() {
        let err = ImageCrateDecoder.decode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, Error::InvalidImageFormat(_)));
        assert!(err.is_user_facing());
    }

    #[test]
    fn static_landmarks_single_face() {
        let provider = StaticLandmarks::from_json(r#"[{"index":0,"x":1,"y":2}]"#).unwrap();
        assert_eq!(provider.num_faces(), 1);

        let image = PixelBuffer::from_fn(1, 1, |_, _| Rgb::new(0, 0, 0));
        let face = provider.detect(&image).unwrap();
        assert_eq!(face.get(0), Some(&Landmark::new(0, 1, 2)));
    }

    #[test]
    fn static_landmarks_first_of_many() {
        let provider = StaticLandmarks::from_json(
            r#"[[{"index":0,"x":1,"y":1}], [{"index":0,"x":9,"y":9}]]"#,
        )
        .unwrap();
        assert_eq!(provider.num_faces(), 2);

        let image = PixelBuffer::from_fn(1, 1, |_, _| Rgb::new(0, 0, 0));
        assert_eq!(provider.detect(&image).unwrap()[0].x, 1);
    }

    #[test]
    fn no_landmarks_is_no_face() {
        let image = PixelBuffer::from_fn(1, 1, |_, _| Rgb::new(0, 0, 0));
        for json in ["[]", "[[]]"] {
            let provider = StaticLandmarks::from_json(json).unwrap();
            assert!(matches!(
                provider.detect(&image),
                Err(Error::NoFaceDetected)
            ));
        }
    }
}
