//! Millimeter / device pixel conversion
//!
//! Positions and lengths are truncated toward zero when converted to pixels.
//! Canvas allocation is the one place that rounds to the nearest pixel.

use crate::constants::{FONT_SIZE_DIVISOR, MM_PER_INCH};

/// Converts physical lengths to device pixels at a fixed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitConverter {
    dpi: u32,
}

impl UnitConverter {
    pub fn new(dpi: u32) -> Self {
        Self { dpi }
    }

    pub fn dpi(self) -> u32 {
        self.dpi
    }

    /// Convert millimeters to pixels, truncating toward zero
    #[inline]
    pub fn to_pixels(self, mm: f64) -> i64 {
        (mm * self.dpi as f64 / MM_PER_INCH) as i64
    }

    /// Convert several lengths at once, keeping their order
    pub fn to_pixels_all<const N: usize>(self, mm: [f64; N]) -> [i64; N] {
        mm.map(|v| self.to_pixels(v))
    }

    /// Convert pixels back to millimeters (no rounding)
    #[inline]
    pub fn to_mm(self, px: f64) -> f64 {
        px * MM_PER_INCH / self.dpi as f64
    }

    pub fn to_mm_all<const N: usize>(self, px: [f64; N]) -> [f64; N] {
        px.map(|v| self.to_mm(v))
    }

    /// Device pixel size of a font at a nominal size.
    ///
    /// `trunc((size * dpi - 1) / 18.19) + 1`
    pub fn font_pixel_size(self, size: f64) -> u32 {
        let scaled = ((size * self.dpi as f64 - 1.0) / FONT_SIZE_DIVISOR) as i64 + 1;
        scaled.max(1) as u32
    }

    /// Pixel count used when allocating a canvas of `mm` length
    pub fn canvas_pixels(self, mm: f64) -> u32 {
        (mm * self.dpi as f64 / MM_PER_INCH).round().max(1.0) as u32
    }
}
