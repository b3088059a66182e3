//! RGB pixel buffer backed by `image::RgbImage`.
//!
//! Every image is converted to 8-bit RGB on load; alpha is dropped.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::{AnonError, Result};
use crate::types::Colour;

/// An owned RGB image with bounds-checked pixel access.
///
/// `Clone` is a deep copy: the clone shares no pixel storage with the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    image: RgbImage,
}

impl PixelBuffer {
    /// Create a black buffer. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, Colour::BLACK)
    }

    /// Create a buffer filled with one colour.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnonError::EmptyImage { width, height });
        }
        Ok(Self {
            image: RgbImage::from_pixel(width, height, Rgb(colour.to_rgb())),
        })
    }

    /// Load an image file in any format the `image` crate can decode.
    pub fn read(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|e| AnonError::ImageRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .to_rgb8();

        if image.width() == 0 || image.height() == 0 {
            return Err(AnonError::ImageRead {
                path: path.to_path_buf(),
                message: "image has no pixels".to_string(),
            });
        }

        Ok(Self { image })
    }

    /// Write the buffer; the format follows the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image.save(path).map_err(|e| AnonError::ImageWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Check if `(x, y)` is a pixel of the buffer.
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height()
    }

    /// Read a pixel.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Colour> {
        self.check(x, y)?;
        Ok(Colour::from_rgb(self.image.get_pixel(x, y).0))
    }

    /// Overwrite a pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<()> {
        self.check(x, y)?;
        self.image.put_pixel(x, y, Rgb(colour.to_rgb()));
        Ok(())
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &RgbImage {
        &self.image
    }

    fn check(&self, x: u32, y: u32) -> Result<()> {
        if self.in_bounds(x, y) {
            Ok(())
        } else {
            Err(AnonError::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}
