//! Pixel buffers, luma conversion and selection clamping.

use crate::error::{Error, Result};

/// An 8-bit RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A flat gray pixel with `r == g == b == value`
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    /// Rec. 601 luma: `round(0.299 r + 0.587 g + 0.114 b)`
    pub fn luma(&self) -> u8 {
        let weighted =
            0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        // The weights sum to one, so the rounded value already fits in a byte
        weighted.round() as u8
    }
}

/// A row-major RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Creates a black image
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Rgb::default())
    }

    /// Creates an image where every pixel is `color`
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgb,
    {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Wraps row-major pixel data.
    ///
    /// # Errors
    ///
    /// `Error::DimensionMismatch` if `pixels.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixels in row-major order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, or `None` outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrites the pixel at `(x, y)`. Returns false if it lies outside the image.
    pub fn set(&mut self, x: usize, y: usize, color: Rgb) -> bool {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
            true
        } else {
            false
        }
    }
}

/// A selection rectangle in image coordinates. May be fractional or extend past the image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Selection {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Selection {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A selection covering the whole of `image`
    pub fn whole(image: &PixelBuffer) -> Self {
        Self::new(0.0, 0.0, image.width() as f64, image.height() as f64)
    }

    /// Floors the rectangle and clamps it to a `image_width` x `image_height` image.
    ///
    /// The origin is floored and raised to zero; the extent is floored and cut at the image edge.
    /// Extents that end up negative become zero.
    pub fn clamp_to(&self, image_width: usize, image_height: usize) -> Region {
        let (x, width) = clamp_axis(self.x, self.width, image_width);
        let (y, height) = clamp_axis(self.y, self.height, image_height);
        Region {
            x,
            y,
            width,
            height,
        }
    }
}

fn clamp_axis(origin: f64, extent: f64, limit: usize) -> (usize, usize) {
    // `as` saturates and maps NaN to zero
    let start = (origin.floor() as i64).max(0);
    let length = (limit as i64 - start).min(extent.floor() as i64).max(0);
    (start as usize, length as usize)
}

/// A clamped, integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        (self.x..self.x + self.width).contains(&x) && (self.y..self.y + self.height).contains(&y)
    }

    /// Pixel coordinates, top to bottom and left to right within each row
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let Region {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |row| (x..x + width).map(move |col| (col, row)))
    }
}
