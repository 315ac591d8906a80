//! The render backend contract
//!
//! The session owns pixel coordinates and placement policy; everything that
//! touches pixels goes through this trait. Canvases, pictures, barcodes and
//! intermediate text surfaces all share the backend's `Image` type.

use crate::color::Color;
use crate::types::{Align, Colorspace, FontFace, FontWeight, Rotation, Symbology, TextMetrics};
use std::path::{Path, PathBuf};

/// Font selection for a text run
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    /// Font file resolved from the session resources, if configured
    pub font_file: Option<PathBuf>,
    /// Em size in device pixels, already scaled by the session resolution
    pub point_size: u32,
    pub weight: FontWeight,
    /// Bold was requested but no bold face is configured for this family
    pub synthetic_bold: bool,
}

/// How a measured run is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextDraw {
    pub align: Align,
    pub rotation: Rotation,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    /// Stroke width in pixels
    pub width: i64,
}

pub trait RenderBackend {
    type Image;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Allocate a canvas filled with `background`
    fn create_canvas(
        &mut self,
        width: u32,
        height: u32,
        background: Color,
    ) -> Result<Self::Image, Self::Error>;

    /// Declare the canvas resolution so unit-aware operations agree with the session
    fn set_resolution(&mut self, image: &mut Self::Image, dpi_x: u32, dpi_y: u32);

    fn dimensions(&self, image: &Self::Image) -> (u32, u32);

    fn colorspace(&self, image: &Self::Image) -> Colorspace;

    /// Remove embedded profiles and metadata
    fn strip_metadata(&mut self, image: &mut Self::Image);

    fn apply_color_profile(
        &mut self,
        image: &mut Self::Image,
        profile: &Path,
    ) -> Result<(), Self::Error>;

    fn load_image(&mut self, path: &Path) -> Result<Self::Image, Self::Error>;

    /// Resample to exactly `width` x `height`
    fn scale(
        &mut self,
        image: &Self::Image,
        width: u32,
        height: u32,
    ) -> Result<Self::Image, Self::Error>;

    fn sharpen(&mut self, image: &Self::Image) -> Result<Self::Image, Self::Error>;

    /// Blend `src` over `dst` with its top-left corner at `(x, y)`
    fn composite_over(
        &mut self,
        dst: &mut Self::Image,
        src: &Self::Image,
        x: i64,
        y: i64,
    ) -> Result<(), Self::Error>;

    /// Free an intermediate bitmap
    fn release(&mut self, image: Self::Image) {
        drop(image);
    }

    fn measure_text(
        &mut self,
        image: &Self::Image,
        style: &TextStyle,
        text: &str,
    ) -> Result<TextMetrics, Self::Error>;

    /// Draw a run with its baseline anchored at `(x, y)`
    fn draw_text(
        &mut self,
        image: &mut Self::Image,
        x: f64,
        y: f64,
        text: &str,
        style: &TextStyle,
        draw: TextDraw,
    ) -> Result<(), Self::Error>;

    #[allow(clippy::too_many_arguments)]
    fn draw_rectangle(
        &mut self,
        image: &mut Self::Image,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
        fill_opacity: f32,
    ) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        image: &mut Self::Image,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
    ) -> Result<(), Self::Error>;

    /// Encode `value` as a black-on-white bitmap
    fn encode_barcode(
        &mut self,
        symbology: Symbology,
        value: &str,
        module_width: u32,
        height: u32,
    ) -> Result<Self::Image, Self::Error>;
}
