use crate::backend::RenderBackend;
use crate::options::BarcodeOptions;
use crate::session::CanvasSession;
use crate::types::*;

impl<B: RenderBackend> CanvasSession<B> {
    /// Place a barcode horizontally centered on `x`.
    ///
    /// `module_width` is the narrowest bar in mm. When `max_width` is set
    /// and the encoding is wider, the bitmap is squeezed to that width while
    /// keeping the requested height. Returns the placed size in mm.
    pub fn add_barcode(
        &mut self,
        value: &str,
        module_width: f64,
        height: f64,
        x: f64,
        y: f64,
        options: BarcodeOptions,
    ) -> Result<(f64, f64)> {
        let [module_px, height_px] = self.units.to_pixels_all([module_width, height]);
        let (x, y) = self.position(x, y);
        let max_width = options.max_width.map(|mm| self.units.to_pixels(mm));

        if module_px < 1 {
            log::warn!(
                "Module width {}mm is below one pixel at {} dpi, using 1px",
                module_width,
                self.units.dpi()
            );
        }
        let module_px = module_px.max(1) as u32;
        let height_px = height_px.max(1) as u32;

        let mut bitmap = self
            .backend
            .encode_barcode(options.symbology, value, module_px, height_px)
            .map_err(LabelError::backend)?;

        let (natural_width, _) = self.backend.dimensions(&bitmap);
        if let Some(max_width) = max_width.filter(|&w| w < natural_width as i64) {
            let max_width = max_width.max(1) as u32;
            log::warn!(
                "{} barcode {:?} is {}px wide, squeezing to {}px",
                options.symbology.name(),
                value,
                natural_width,
                max_width
            );
            let scaled = self.backend.scale(&bitmap, max_width, height_px);
            self.backend.release(bitmap);
            bitmap = scaled.map_err(LabelError::backend)?;
        }

        let (columns, rows) = self.backend.dimensions(&bitmap);
        let left = x - columns as i64 / 2;
        log::trace!(
            "{} barcode {}x{}px at ({}, {})",
            options.symbology.name(),
            columns,
            rows,
            left,
            y
        );
        self.composite_and_release(bitmap, left, y)?;

        let [width_mm, height_mm] = self.units.to_mm_all([columns as f64, rows as f64]);
        Ok((width_mm, height_mm))
    }
}
