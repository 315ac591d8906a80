//! Path rasterisation through `tiny-skia`
//!
//! Bitmaps are stored as straight RGBA; `paint` premultiplies them in place,
//! lends the buffer to `tiny-skia` and converts back afterwards.

use crate::types::{RasterError, Result};
use image::RgbaImage;
use label_compose::Color;
use tiny_skia::{
    ColorU8, LineCap, LineJoin, Paint, PathBuilder, PixmapMut, PremultipliedColorU8, Rect, Stroke,
    Transform,
};

/// Run `draw` against a premultiplied view of `image`
pub(crate) fn paint(image: &mut RgbaImage, draw: impl FnOnce(&mut PixmapMut<'_>)) -> Result<()> {
    let (width, height) = image.dimensions();

    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let color = ColorU8::from_rgba(r, g, b, a).premultiply();
        pixel.0 = [color.red(), color.green(), color.blue(), color.alpha()];
    }

    {
        let bytes: &mut [u8] = image;
        let mut pixmap = PixmapMut::from_bytes(bytes, width, height)
            .ok_or(RasterError::EmptyCanvas(width, height))?;
        draw(&mut pixmap);
    }

    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if let Some(color) = PremultipliedColorU8::from_rgba(r, g, b, a) {
            let color = color.demultiply();
            pixel.0 = [color.red(), color.green(), color.blue(), color.alpha()];
        }
    }
    Ok(())
}

pub(crate) fn solid(color: Color, opacity: f32) -> Paint<'static> {
    let mut paint = Paint {
        anti_alias: true,
        ..Default::default()
    };
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    paint.set_color_rgba8(color.r, color.g, color.b, alpha);
    paint
}

/// Odd widths are centred on the pixel so one-pixel strokes land on a single row
fn pixel_center(width: i64) -> f32 {
    if width % 2 == 1 { 0.5 } else { 0.0 }
}

fn stroke(width: i64) -> Stroke {
    Stroke {
        width: width.max(1) as f32,
        line_cap: LineCap::Square,
        line_join: LineJoin::Miter,
        ..Default::default()
    }
}

/// Stroke a straight line. Widths below one pixel draw a hairline.
pub(crate) fn stroke_line(
    image: &mut RgbaImage,
    (x1, y1): (i64, i64),
    (x2, y2): (i64, i64),
    width: i64,
    color: Color,
) -> Result<()> {
    let width = width.max(1);
    let shift = pixel_center(width);
    let mut builder = PathBuilder::new();
    builder.move_to(x1 as f32 + shift, y1 as f32 + shift);
    builder.line_to(x2 as f32 + shift, y2 as f32 + shift);
    let Some(path) = builder.finish() else {
        return Ok(());
    };

    paint(image, |pixmap| {
        pixmap.stroke_path(
            &path,
            &solid(color, 1.0),
            &stroke(width),
            Transform::identity(),
            None,
        );
    })
}

/// Stroke the outline of an axis-aligned rectangle
pub(crate) fn stroke_rect(
    image: &mut RgbaImage,
    (x1, y1): (i64, i64),
    (x2, y2): (i64, i64),
    width: i64,
    color: Color,
) -> Result<()> {
    let width = width.max(1);
    let shift = pixel_center(width);
    let (left, right) = (x1.min(x2) as f32 + shift, x1.max(x2) as f32 + shift);
    let (top, bottom) = (y1.min(y2) as f32 + shift, y1.max(y2) as f32 + shift);

    let mut builder = PathBuilder::new();
    builder.move_to(left, top);
    builder.line_to(right, top);
    builder.line_to(right, bottom);
    builder.line_to(left, bottom);
    builder.close();
    let Some(path) = builder.finish() else {
        return Ok(());
    };

    paint(image, |pixmap| {
        pixmap.stroke_path(
            &path,
            &solid(color, 1.0),
            &stroke(width),
            Transform::identity(),
            None,
        );
    })
}

/// Fill the pixels between two corners, both inclusive, at `opacity`
pub(crate) fn fill_rect(
    image: &mut RgbaImage,
    (x1, y1): (i64, i64),
    (x2, y2): (i64, i64),
    color: Color,
    opacity: f32,
) -> Result<()> {
    if opacity <= 0.0 {
        return Ok(());
    }
    let Some(rect) = Rect::from_ltrb(
        x1.min(x2) as f32,
        y1.min(y2) as f32,
        (x1.max(x2) + 1) as f32,
        (y1.max(y2) + 1) as f32,
    ) else {
        return Ok(());
    };

    paint(image, |pixmap| {
        pixmap.fill_rect(rect, &solid(color, opacity), Transform::identity(), None);
    })
}
