use crate::barcode;
use crate::draw;
use crate::icc;
use crate::text::{self, FontCache};
use crate::types::{Raster, RasterError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use label_compose::{
    Color, Colorspace, RenderBackend, StrokeStyle, Symbology, TextDraw, TextMetrics, TextStyle,
};
use std::path::Path;

/// Blur radius of the sharpening pass
const SHARPEN_SIGMA: f32 = 1.0;

/// Brightness difference below which sharpening leaves a pixel alone
const SHARPEN_THRESHOLD: i32 = 0;

/// `RenderBackend` over in-memory RGBA bitmaps
pub struct RasterBackend {
    fonts: FontCache,
    canvas_colorspace: Colorspace,
}

impl Default for RasterBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RasterBackend {
    pub fn new() -> Self {
        Self {
            fonts: FontCache::default(),
            canvas_colorspace: Colorspace::Srgb,
        }
    }

    /// Tag every canvas this backend allocates, e.g. `Cmyk` for print stock
    pub fn with_canvas_colorspace(mut self, colorspace: Colorspace) -> Self {
        self.canvas_colorspace = colorspace;
        self
    }
}

fn colorspace_of(image: &DynamicImage) -> Colorspace {
    match image {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => Colorspace::Gray,
        _ => Colorspace::Srgb,
    }
}

impl RenderBackend for RasterBackend {
    type Image = Raster;
    type Error = RasterError;

    fn create_canvas(&mut self, width: u32, height: u32, background: Color) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyCanvas(width, height));
        }
        let Color { r, g, b, a } = background;
        let pixels = RgbaImage::from_pixel(width, height, Rgba([r, g, b, a]));
        Ok(Raster::new(pixels).with_colorspace(self.canvas_colorspace))
    }

    fn set_resolution(&mut self, image: &mut Raster, dpi_x: u32, dpi_y: u32) {
        image.dpi = (dpi_x, dpi_y);
    }

    fn dimensions(&self, image: &Raster) -> (u32, u32) {
        image.pixels.dimensions()
    }

    fn colorspace(&self, image: &Raster) -> Colorspace {
        image.colorspace
    }

    fn strip_metadata(&mut self, image: &mut Raster) {
        image.profile = None;
    }

    fn apply_color_profile(&mut self, image: &mut Raster, profile: &Path) -> Result<()> {
        let bytes = std::fs::read(profile)?;
        let space = icc::data_colorspace(&bytes)?;

        match image.profile {
            None => {
                log::debug!("Assigning {:?} profile {}", space, profile.display());
            }
            Some(current) => {
                log::debug!(
                    "Converting {:?} to {:?} with {}",
                    current,
                    space,
                    profile.display()
                );
                image.colorspace = space;
            }
        }
        image.profile = Some(space);
        Ok(())
    }

    fn load_image(&mut self, path: &Path) -> Result<Raster> {
        let decoded = image::open(path)?;
        let colorspace = colorspace_of(&decoded);
        log::debug!(
            "Loaded {} ({}x{}, {:?})",
            path.display(),
            decoded.width(),
            decoded.height(),
            colorspace
        );
        Ok(Raster::new(decoded.to_rgba8()).with_colorspace(colorspace))
    }

    fn scale(&mut self, image: &Raster, width: u32, height: u32) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyCanvas(width, height));
        }
        let pixels = imageops::resize(&image.pixels, width, height, FilterType::Lanczos3);
        Ok(image.derive(pixels))
    }

    fn sharpen(&mut self, image: &Raster) -> Result<Raster> {
        let pixels = imageops::unsharpen(&image.pixels, SHARPEN_SIGMA, SHARPEN_THRESHOLD);
        Ok(image.derive(pixels))
    }

    fn composite_over(&mut self, dst: &mut Raster, src: &Raster, x: i64, y: i64) -> Result<()> {
        imageops::overlay(&mut dst.pixels, &src.pixels, x, y);
        Ok(())
    }

    fn measure_text(
        &mut self,
        _image: &Raster,
        style: &TextStyle,
        text: &str,
    ) -> Result<TextMetrics> {
        let font = self.fonts.font(style)?;
        Ok(text::layout(font, style, text).metrics)
    }

    fn draw_text(
        &mut self,
        image: &mut Raster,
        x: f64,
        y: f64,
        text: &str,
        style: &TextStyle,
        draw: TextDraw,
    ) -> Result<()> {
        let font = self.fonts.font(style)?;
        let layout = text::layout(font, style, text);
        text::draw(font, &layout, &mut image.pixels, x, y, draw)
    }

    fn draw_rectangle(
        &mut self,
        image: &mut Raster,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
        fill_opacity: f32,
    ) -> Result<()> {
        draw::fill_rect(&mut image.pixels, (x1, y1), (x2, y2), stroke.color, fill_opacity)?;
        draw::stroke_rect(&mut image.pixels, (x1, y1), (x2, y2), stroke.width, stroke.color)
    }

    fn draw_line(
        &mut self,
        image: &mut Raster,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        stroke: StrokeStyle,
    ) -> Result<()> {
        draw::stroke_line(&mut image.pixels, (x1, y1), (x2, y2), stroke.width, stroke.color)
    }

    fn encode_barcode(
        &mut self,
        symbology: Symbology,
        value: &str,
        module_width: u32,
        height: u32,
    ) -> Result<Raster> {
        let modules = barcode::encode(symbology, value)?;
        log::debug!(
            "Encoded {:?} as {} with {} modules",
            value,
            symbology.name(),
            modules.len()
        );
        Ok(Raster::new(barcode::render(&modules, module_width, height)))
    }
}
