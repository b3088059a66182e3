//! Rendering module for anonymat.
//!
//! This module holds the pixel buffer and the two raster passes run for
//! every shape: averaging over the source and filling into the sink.

mod buffer;
mod region;

pub use buffer::PixelBuffer;
pub use region::{average, fill, sample};
