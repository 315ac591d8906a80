//! Canvas session: one label, one canvas
//!
//! Every placement reads the current offset. Calls are order dependent:
//! moving an `add_offset` changes where all later elements land, and later
//! elements composite over earlier ones.

use crate::backend::RenderBackend;
use crate::color::Color;
use crate::offset::Offset;
use crate::options::{Resources, SessionOptions};
use crate::types::*;
use crate::units::UnitConverter;

pub struct CanvasSession<B: RenderBackend> {
    pub(crate) backend: B,
    pub(crate) surface: B::Image,
    pub(crate) units: UnitConverter,
    pub(crate) offset: Offset,
    pub(crate) resources: Resources,
    background: Color,
    width_mm: f64,
    height_mm: f64,
}

impl<B: RenderBackend> CanvasSession<B> {
    /// Allocate a canvas of `width_mm` x `height_mm` at the configured resolution
    pub fn new(mut backend: B, width_mm: f64, height_mm: f64, options: SessionOptions) -> Result<Self> {
        let background = options.validate()?;
        if !(width_mm > 0.0 && height_mm > 0.0) {
            return Err(LabelError::InvalidConfig(format!(
                "Label size must be positive, got {}x{}mm",
                width_mm, height_mm
            )));
        }

        let units = UnitConverter::new(options.dpi);
        let width_px = units.canvas_pixels(width_mm);
        let height_px = units.canvas_pixels(height_mm);

        let mut surface = backend
            .create_canvas(width_px, height_px, background)
            .map_err(LabelError::backend)?;
        backend.set_resolution(&mut surface, options.dpi, options.dpi);

        log::debug!(
            "Allocated {}x{}px canvas for {}x{}mm label at {} dpi, background {}",
            width_px,
            height_px,
            width_mm,
            height_mm,
            options.dpi,
            background
        );

        Ok(Self {
            backend,
            surface,
            units,
            offset: Offset::default(),
            resources: options.resources,
            background,
            width_mm,
            height_mm,
        })
    }

    pub fn dpi(&self) -> u32 {
        self.units.dpi()
    }

    pub fn units(&self) -> UnitConverter {
        self.units
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Requested label size in millimeters
    pub fn size_mm(&self) -> (f64, f64) {
        (self.width_mm, self.height_mm)
    }

    pub fn pixel_width(&self) -> u32 {
        self.backend.dimensions(&self.surface).0
    }

    pub fn pixel_height(&self) -> u32 {
        self.backend.dimensions(&self.surface).1
    }

    /// Horizontal center of the canvas in mm
    pub fn middle_width(&self) -> f64 {
        self.units.to_mm(self.pixel_width() as f64 / 2.0)
    }

    /// Canvas column count in mm.
    ///
    /// Measured from the width and not halved; layouts built against this
    /// value depend on it as is.
    pub fn middle_height(&self) -> f64 {
        self.units.to_mm(self.pixel_width() as f64)
    }

    /// Foreground color that reads well on the session background
    pub fn readable_color(&self) -> Color {
        self.background.readable_foreground()
    }

    /// Current origin shift in pixels
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Current origin shift in millimeters
    pub fn offset_mm(&self) -> (f64, f64) {
        let [x, y] = self.units.to_mm_all([self.offset.x as f64, self.offset.y as f64]);
        (x, y)
    }

    /// Shift the origin of all later placements by a relative amount
    pub fn add_offset(&mut self, dx_mm: f64, dy_mm: f64) {
        self.offset.add_mm(self.units, dx_mm, dy_mm);
        log::trace!("Offset moved to ({}, {})px", self.offset.x, self.offset.y);
    }

    /// Move the origin of all later placements to an absolute position
    pub fn set_offset(&mut self, x_mm: f64, y_mm: f64) {
        self.offset.set_mm(self.units, x_mm, y_mm);
        log::trace!("Offset set to ({}, {})px", self.offset.x, self.offset.y);
    }

    /// Ensure the canvas is RGB before it is handed to an RGB-only consumer.
    ///
    /// Print canvases are stripped and run through the CMYK source profile,
    /// then the sRGB target profile.
    pub fn convert_to_rgb(&mut self) -> Result<()> {
        let colorspace = self.backend.colorspace(&self.surface);
        if colorspace.is_print() {
            let source = self
                .resources
                .cmyk_profile
                .clone()
                .ok_or(LabelError::MissingResource("cmyk_profile"))?;
            let target = self
                .resources
                .rgb_profile
                .clone()
                .ok_or(LabelError::MissingResource("rgb_profile"))?;

            log::debug!("Converting {:?} canvas to sRGB", colorspace);
            self.backend.strip_metadata(&mut self.surface);
            self.backend
                .apply_color_profile(&mut self.surface, &source)
                .map_err(LabelError::backend)?;
            self.backend
                .apply_color_profile(&mut self.surface, &target)
                .map_err(LabelError::backend)?;
        }

        let colorspace = self.backend.colorspace(&self.surface);
        if !colorspace.is_rgb() {
            return Err(LabelError::UnsupportedColorspace(colorspace));
        }
        Ok(())
    }

    pub fn surface(&self) -> &B::Image {
        &self.surface
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Finish the label and take the canvas
    pub fn into_surface(self) -> B::Image {
        self.surface
    }

    /// Finish the label, keeping the backend for the next session
    pub fn into_parts(self) -> (B, B::Image) {
        (self.backend, self.surface)
    }

    /// Convert a mm position and shift it by the current offset
    pub(crate) fn position(&self, x_mm: f64, y_mm: f64) -> (i64, i64) {
        let [x, y] = self.units.to_pixels_all([x_mm, y_mm]);
        self.offset.apply(x, y)
    }

    /// Composite an intermediate onto the canvas, then release it whatever the outcome
    pub(crate) fn composite_and_release(&mut self, image: B::Image, x: i64, y: i64) -> Result<()> {
        let result = self.backend.composite_over(&mut self.surface, &image, x, y);
        self.backend.release(image);
        result.map_err(LabelError::backend)
    }
}
