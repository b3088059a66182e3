//! Image comparison.
//!
//! Compares two images by the correlation of their grey-level histograms
//! and by exact pixel equality. Useful to check a run against a reference
//! output. Grey levels and correlation follow OpenCV, so the figures match
//! a `calcHist`/`compareHist` comparison of the same files.

use std::path::Path;

use serde::Serialize;

use crate::render::PixelBuffer;

/// Number of grey levels in a histogram.
const BINS: usize = 256;

/// Result of comparing two images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Similarity {
    /// Correlation of the grey-level histograms, in [-1, 1].
    pub histogram_correlation: f64,
    /// Same dimensions and same RGB value at every pixel.
    pub identical: bool,
    /// Number of pixels whose RGB value differs, `None` when sizes differ.
    pub differing_pixels: Option<u64>,
}

/// Compare two buffers.
pub fn similarity(a: &PixelBuffer, b: &PixelBuffer) -> Similarity {
    let histogram_correlation = correlation(&grey_histogram(a), &grey_histogram(b));

    let differing_pixels = (a.size() == b.size()).then(|| {
        a.as_image()
            .pixels()
            .zip(b.as_image().pixels())
            .filter(|(pa, pb)| pa != pb)
            .count() as u64
    });

    Similarity {
        histogram_correlation,
        identical: differing_pixels == Some(0),
        differing_pixels,
    }
}

/// Load and compare two image files.
pub fn compare_files(a: &Path, b: &Path) -> crate::error::Result<Similarity> {
    let a = PixelBuffer::read(a)?;
    let b = PixelBuffer::read(b)?;
    Ok(similarity(&a, &b))
}

/// 256-bin histogram of the buffer converted to grey.
pub fn grey_histogram(buffer: &PixelBuffer) -> [u64; BINS] {
    let mut histogram = [0u64; BINS];
    for pixel in buffer.as_image().pixels() {
        histogram[usize::from(grey(pixel.0))] += 1;
    }
    histogram
}

/// BT.601 luma (0.299 R + 0.587 G + 0.114 B) in 14-bit fixed point,
/// rounded the way OpenCV's RGB to grey conversion rounds.
pub fn grey([r, g, b]: [u8; 3]) -> u8 {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    const SHIFT: u32 = 14;

    let y = (u32::from(r) * R + u32::from(g) * G + u32::from(b) * B + (1 << (SHIFT - 1))) >> SHIFT;
    y.min(255) as u8
}

/// Pearson correlation of two histograms.
///
/// When either histogram is flat the correlation is undefined; it is
/// reported as 1.0, as OpenCV's `HISTCMP_CORREL` does.
pub fn correlation(h1: &[u64; BINS], h2: &[u64; BINS]) -> f64 {
    let mean = |h: &[u64; BINS]| h.iter().sum::<u64>() as f64 / BINS as f64;
    let (m1, m2) = (mean(h1), mean(h2));

    let mut cross = 0.0;
    let mut var1 = 0.0;
    let mut var2 = 0.0;
    for (&v1, &v2) in h1.iter().zip(h2.iter()) {
        let d1 = v1 as f64 - m1;
        let d2 = v2 as f64 - m2;
        cross += d1 * d2;
        var1 += d1 * d1;
        var2 += d2 * d2;
    }

    let denominator = var1 * var2;
    if denominator.abs() <= f64::EPSILON {
        return 1.0;
    }
    cross / denominator.sqrt()
}
