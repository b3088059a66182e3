//! Colour type.

use std::fmt;

use serde::Serialize;

/// An opaque RGB colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Create a new colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, also the average of an empty region.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const RED: Self = Self::rgb(255, 0, 0);

    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Convert to an RGB array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a colour from an RGB array.
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Per-channel accumulator for averaging colours.
///
/// Sums are kept in `u64` so that no realistic image can overflow them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColourSum {
    r: u64,
    g: u64,
    b: u64,
    count: u64,
}

impl ColourSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pixel to the sum.
    pub fn add(&mut self, colour: Colour) {
        self.r += u64::from(colour.r);
        self.g += u64::from(colour.g);
        self.b += u64::from(colour.b);
        self.count += 1;
    }

    /// Number of pixels accumulated.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Truncated mean of each channel, or black when nothing was added.
    pub fn mean(&self) -> Colour {
        if self.count == 0 {
            return Colour::BLACK;
        }
        // each quotient is at most 255
        Colour::rgb(
            (self.r / self.count) as u8,
            (self.g / self.count) as u8,
            (self.b / self.count) as u8,
        )
    }
}
