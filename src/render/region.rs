//! Region averaging and filling.
//!
//! Both passes walk the same footprint, [`Shape::pixels`], so a region is
//! always filled exactly where it was sampled.

use crate::types::{Colour, ColourSum, Shape};

use super::PixelBuffer;

/// Accumulate the colours of every pixel in the shape's footprint.
pub fn sample(source: &PixelBuffer, shape: &Shape) -> ColourSum {
    let mut sum = ColourSum::new();
    for (x, y) in shape.pixels(source.width(), source.height()) {
        if let Ok(colour) = source.get_pixel(x, y) {
            sum.add(colour);
        }
    }
    sum
}

/// Average colour of the shape's footprint, truncated per channel.
///
/// A footprint with no pixel (shape outside the image, degenerate shape)
/// averages to black.
pub fn average(source: &PixelBuffer, shape: &Shape) -> Colour {
    sample(source, shape).mean()
}

/// Paint the shape's footprint with `colour`. Returns the number of pixels written.
pub fn fill(sink: &mut PixelBuffer, shape: &Shape, colour: Colour) -> usize {
    let (width, height) = sink.size();
    let mut written = 0;
    for (x, y) in shape.pixels(width, height) {
        // set_pixel refuses anything outside the buffer
        if sink.set_pixel(x, y, colour).is_ok() {
            written += 1;
        }
    }
    written
}
