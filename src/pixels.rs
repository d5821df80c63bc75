use crate::error::{Error, Result};
use crate::types::{Rgb, SampleCoordinate};

/// Trait for reading RGB pixels from an image.
pub trait PixelAccess {
    /// Get the color at (x, y). Returns `None` for out-of-bounds pixels.
    /// Coordinates are in image space.
    fn rgb(&self, x: i32, y: i32) -> Option<Rgb>;

    /// Image dimensions.
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width() as i64 && (y as i64) < self.height() as i64
    }
}

/// An interleaved 8-bit RGB buffer, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        if data.len() != width as usize * height as usize * 3 {
            return Err(Error::InvalidPixelBuffer {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> Rgb,
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                let c = f(x, y);
                data.extend_from_slice(&[c.r, c.g, c.b]);
            }
        }
        Self { data, width, height }
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

impl PixelAccess for PixelBuffer {
    fn rgb(&self, x: i32, y: i32) -> Option<Rgb> {
        if !self.contains(x, y) {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        let px = &self.data[offset..offset + 3];
        Some(Rgb::new(px[0], px[1], px[2]))
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl From<image::RgbImage> for PixelBuffer {
    fn from(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.into_raw(),
            width,
            height,
        }
    }
}

impl PixelAccess for image::RgbImage {
    fn rgb(&self, x: i32, y: i32) -> Option<Rgb> {
        if !self.contains(x, y) {
            return None;
        }
        let p = self.get_pixel(x as u32, y as u32);
        Some(Rgb::new(p[0], p[1], p[2]))
    }

    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }
}

/// Read the color under each coordinate, skipping coordinates outside the image.
///
/// Output keeps the input order.
pub fn sample_pixels<I: PixelAccess + ?Sized>(image: &I, coords: &[SampleCoordinate]) -> Vec<Rgb> {
    let samples: Vec<Rgb> = coords.iter().filter_map(|c| image.rgb(c.x, c.y)).collect();

    let dropped = coords.len() - samples.len();
    if dropped > 0 {
        log::debug!(
            "dropped {} of {} sample coordinates outside {}x{} image",
            dropped,
            coords.len(),
            image.width(),
            image.height()
        );
    }

    samples
}
