use crate::backend::{RenderBackend, TextDraw, TextStyle};
use crate::color::Color;
use crate::options::{CondensedTextOptions, TextOptions};
use crate::session::CanvasSession;
use crate::types::*;

impl<B: RenderBackend> CanvasSession<B> {
    fn text_style(&self, face: FontFace, weight: FontWeight, size: f64) -> TextStyle {
        TextStyle {
            face,
            font_file: self.resources.font_path(face, weight).cloned(),
            point_size: self.units.font_pixel_size(size),
            weight,
            synthetic_bold: weight == FontWeight::Bold && !self.resources.has_bold_face(face),
        }
    }

    /// Draw a line of text whose top edge sits at `y`.
    ///
    /// The color is picked for contrast against the session background.
    /// Returns the y extent below the text in mm, relative to the current offset.
    pub fn add_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        size: f64,
        options: TextOptions,
    ) -> Result<f64> {
        let (x, y) = self.position(x, y);
        let style = self.text_style(options.font, options.font_weight, size);
        let color = self.readable_color();

        let metrics = self
            .backend
            .measure_text(&self.surface, &style, text)
            .map_err(LabelError::backend)?;

        let baseline = y as f64 + metrics.height;
        log::trace!(
            "Text {:?} at ({}, {:.1}) size {}pt {:?}",
            text,
            x,
            baseline,
            style.point_size,
            options.align
        );
        self.backend
            .draw_text(
                &mut self.surface,
                x as f64,
                baseline,
                text,
                &style,
                TextDraw {
                    align: options.align,
                    rotation: Rotation::None,
                    color,
                },
            )
            .map_err(LabelError::backend)?;

        Ok(self.units.to_mm(baseline - self.offset.y as f64))
    }

    /// Draw black text rotated a quarter turn around `(x, y)`.
    ///
    /// Without `invert` the run is rotated 90 degrees and the anchor moves
    /// left by the text height so the rotated block does not overrun it;
    /// `invert` rotates 270 degrees in place. Returns the adjusted x in mm,
    /// relative to the current offset, for stacking further vertical labels.
    pub fn add_vertical_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        size: f64,
        invert: bool,
    ) -> Result<f64> {
        let (x, y) = self.position(x, y);
        let style = self.text_style(FontFace::Sans, FontWeight::Normal, size);

        let metrics = self
            .backend
            .measure_text(&self.surface, &style, text)
            .map_err(LabelError::backend)?;

        let (rotation, x) = if invert {
            (Rotation::Clockwise270, x as f64)
        } else {
            (Rotation::Clockwise90, x as f64 - metrics.height)
        };

        log::trace!("Vertical text {:?} at ({:.1}, {}) {:?}", text, x, y, rotation);
        self.backend
            .draw_text(
                &mut self.surface,
                x,
                y as f64,
                text,
                &style,
                TextDraw {
                    align: Align::Left,
                    rotation,
                    color: Color::BLACK,
                },
            )
            .map_err(LabelError::backend)?;

        Ok(self.units.to_mm(x - self.offset.x as f64))
    }

    /// Draw black text squeezed horizontally to fit `max_width` mm.
    ///
    /// The run is rendered on its own transparent surface first; only runs
    /// wider than `max_width` are rescaled, and the height never changes.
    /// Returns the y extent below the text in mm, relative to the current offset.
    pub fn add_condensed_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        size: f64,
        max_width: f64,
        options: CondensedTextOptions,
    ) -> Result<f64> {
        let max_width = self.units.to_pixels(max_width);
        let (x, y) = self.position(x, y);
        let style = self.text_style(options.font, FontWeight::Normal, size);

        let metrics = self
            .backend
            .measure_text(&self.surface, &style, text)
            .map_err(LabelError::backend)?;

        let box_width = metrics.width.ceil().max(1.0) as u32;
        let box_height = (metrics.ascent - metrics.descent).ceil().max(1.0) as u32;

        let mut run = self
            .backend
            .create_canvas(box_width, box_height, Color::TRANSPARENT)
            .map_err(LabelError::backend)?;
        let dpi = self.units.dpi();
        self.backend.set_resolution(&mut run, dpi, dpi);

        let drawn = self.backend.draw_text(
            &mut run,
            0.0,
            metrics.ascent,
            text,
            &style,
            TextDraw {
                align: Align::Left,
                rotation: Rotation::None,
                color: Color::BLACK,
            },
        );
        if let Err(err) = drawn {
            self.backend.release(run);
            return Err(LabelError::backend(err));
        }

        if metrics.width > max_width as f64 {
            let target = max_width.max(1) as u32;
            log::warn!(
                "Condensing {:?} from {:.0}px to {}px",
                text,
                metrics.width,
                target
            );
            let scaled = self.backend.scale(&run, target, box_height);
            self.backend.release(run);
            run = scaled.map_err(LabelError::backend)?;
        }

        let (columns, _) = self.backend.dimensions(&run);
        let left = match options.align {
            Align::Left => x,
            Align::Center => x - columns as i64 / 2,
            Align::Right => x - columns as i64,
        };
        log::trace!("Condensed text {:?} {}px wide at ({}, {})", text, columns, left, y);
        self.composite_and_release(run, left, y)?;

        Ok(self.units.to_mm(y as f64 + metrics.height - self.offset.y as f64))
    }
}
