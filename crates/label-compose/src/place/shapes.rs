use crate::backend::{RenderBackend, StrokeStyle};
use crate::color::Color;
use crate::options::RectOptions;
use crate::session::CanvasSession;
use crate::types::*;

impl<B: RenderBackend> CanvasSession<B> {
    /// Stroke an unfilled black rectangle between two corners.
    ///
    /// With `RectStyle::Inner` each side moves inward by half the stroke width
    /// so the outer edge of the stroke lands on the given corners.
    pub fn add_rect(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        options: RectOptions,
    ) -> Result<()> {
        let stroke_width = options.stroke_width;
        let (x1, y1, x2, y2) = match options.style {
            RectStyle::Inner => {
                let inset = stroke_width / 2.0;
                (x1 + inset, y1 + inset, x2 - inset, y2 - inset)
            }
            RectStyle::Centered => (x1, y1, x2, y2),
        };

        let (x1, y1) = self.position(x1, y1);
        let (x2, y2) = self.position(x2, y2);
        let stroke = StrokeStyle {
            color: Color::BLACK,
            width: self.units.to_pixels(stroke_width),
        };

        log::trace!(
            "Rectangle ({}, {}) - ({}, {}) stroke {}px",
            x1,
            y1,
            x2,
            y2,
            stroke.width
        );
        self.backend
            .draw_rectangle(&mut self.surface, x1, y1, x2, y2, stroke, 0.0)
            .map_err(LabelError::backend)
    }

    /// Draw a solid black line; `stroke_weight` is in mm
    pub fn add_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke_weight: f64,
    ) -> Result<()> {
        let [x1, y1, x2, y2, weight] = self.units.to_pixels_all([x1, y1, x2, y2, stroke_weight]);
        let (x1, y1) = self.offset.apply(x1, y1);
        let (x2, y2) = self.offset.apply(x2, y2);
        let stroke = StrokeStyle {
            color: Color::BLACK,
            width: weight,
        };

        log::trace!("Line ({}, {}) - ({}, {}) stroke {}px", x1, y1, x2, y2, weight);
        self.backend
            .draw_line(&mut self.surface, x1, y1, x2, y2, stroke)
            .map_err(LabelError::backend)
    }
}
