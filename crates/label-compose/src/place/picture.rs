use crate::backend::RenderBackend;
use crate::options::{DimensionHint, PictureOptions};
use crate::session::CanvasSession;
use crate::types::*;
use std::path::PathBuf;

/// A picture to place: an image already held by the backend, or a file to load
pub enum PictureSource<I> {
    Image(I),
    Path(PathBuf),
}

impl<I> From<PathBuf> for PictureSource<I> {
    fn from(path: PathBuf) -> Self {
        PictureSource::Path(path)
    }
}

impl<B: RenderBackend> CanvasSession<B> {
    /// Place a picture scaled uniformly from one dimension.
    ///
    /// Returns the bottom-right corner of the placed picture in mm, relative
    /// to the current offset, ready to anchor the next element.
    pub fn add_picture(
        &mut self,
        source: PictureSource<B::Image>,
        size: DimensionHint,
        x: f64,
        y: f64,
        options: PictureOptions,
    ) -> Result<(f64, f64)> {
        // Target length in pixels and whether it constrains the width
        let (target, by_width) = match (size.width, size.height) {
            (Some(width), _) => (self.units.to_pixels(width), true),
            (None, Some(height)) => (self.units.to_pixels(height), false),
            (None, None) => {
                if let PictureSource::Image(picture) = source {
                    self.backend.release(picture);
                }
                return Err(LabelError::MissingDimension);
            }
        };

        let (mut x, y) = self.position(x, y);

        let picture = match source {
            PictureSource::Image(picture) => picture,
            PictureSource::Path(path) => self.backend.load_image(&path).map_err(LabelError::backend)?,
        };
        let (columns, rows) = self.backend.dimensions(&picture);

        let natural = if by_width { columns } else { rows };
        let ratio = target as f64 / natural.max(1) as f64;
        let scaled_width = scale_dimension(columns, ratio);
        let scaled_height = scale_dimension(rows, ratio);

        let scaled = self.backend.scale(&picture, scaled_width, scaled_height);
        self.backend.release(picture);
        let scaled = scaled.map_err(LabelError::backend)?;

        if options.align == Align::Center {
            x -= scaled_width as i64 / 2;
        }

        let sharpened = self.backend.sharpen(&scaled);
        self.backend.release(scaled);
        let sharpened = sharpened.map_err(LabelError::backend)?;

        log::trace!(
            "Picture {}x{}px -> {}x{}px (ratio {:.3}) at ({}, {})",
            columns,
            rows,
            scaled_width,
            scaled_height,
            ratio,
            x,
            y
        );
        self.composite_and_release(sharpened, x, y)?;

        let [right, bottom] = self.units.to_mm_all([
            (x + scaled_width as i64 - self.offset.x) as f64,
            (y + scaled_height as i64 - self.offset.y) as f64,
        ]);
        Ok((right, bottom))
    }
}

fn scale_dimension(natural: u32, ratio: f64) -> u32 {
    (natural as f64 * ratio).round().max(1.0) as u32
}
