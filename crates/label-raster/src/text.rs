//! Text layout with `ab_glyph`, filled as `tiny-skia` paths

use crate::draw::solid;
use crate::types::{RasterError, Result};
use ab_glyph::{Font, FontVec, Glyph, GlyphId, OutlineCurve, Point, PxScale, ScaleFont, point};
use image::RgbaImage;
use label_compose::{Align, Rotation, TextDraw, TextMetrics, TextStyle};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;
use tiny_skia::{FillRule, Path, PathBuilder, Transform};

/// Fonts parsed once per file
#[derive(Default)]
pub(crate) struct FontCache {
    fonts: HashMap<PathBuf, FontVec>,
}

impl FontCache {
    pub(crate) fn font(&mut self, style: &TextStyle) -> Result<&FontVec> {
        let path = style
            .font_file
            .as_ref()
            .ok_or(RasterError::FontUnavailable(style.face.family()))?;

        match self.fonts.entry(path.clone()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let bytes = std::fs::read(path)?;
                let font = FontVec::try_from_vec(bytes)
                    .map_err(|e| RasterError::Font(format!("{}: {}", path.display(), e)))?;
                log::debug!("Loaded font {}", path.display());
                Ok(entry.insert(font))
            }
        }
    }
}

/// A run laid out along a baseline at y = 0, starting at x = 0
pub(crate) struct Layout {
    glyphs: Vec<Glyph>,
    pub(crate) metrics: TextMetrics,
    /// Font units to pixels, horizontally and vertically
    factors: (f32, f32),
    bold: bool,
}

/// Pixel scale giving an em square of `em` pixels
fn scale_for(font: &FontVec, em: u32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(em as f32 * font.height_unscaled() / units_per_em)
}

pub(crate) fn layout(font: &FontVec, style: &TextStyle, text: &str) -> Layout {
    let scaled = font.as_scaled(scale_for(font, style.point_size));

    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;
    let mut glyphs = Vec::new();
    for c in text.chars().filter(|c| !c.is_control()) {
        let id = scaled.glyph_id(c);
        if let Some(previous) = previous {
            caret += scaled.kern(previous, id);
        }
        glyphs.push(id.with_scale_and_position(scaled.scale(), point(caret, 0.0)));
        caret += scaled.h_advance(id);
        previous = Some(id);
    }

    // The second strike of synthetic bold sits one pixel further along
    if style.synthetic_bold && !glyphs.is_empty() {
        caret += 1.0;
    }

    Layout {
        glyphs,
        metrics: TextMetrics {
            width: caret as f64,
            ascent: scaled.ascent() as f64,
            descent: scaled.descent() as f64,
            height: (scaled.ascent() - scaled.descent() + scaled.line_gap()) as f64,
        },
        factors: (scaled.h_scale_factor(), scaled.v_scale_factor()),
        bold: style.synthetic_bold,
    }
}

/// Outline every glyph of the run as one path, baseline on y = 0
fn outline_path(font: &FontVec, layout: &Layout) -> Option<Path> {
    let (sx, sy) = layout.factors;
    let mut builder = PathBuilder::new();

    for glyph in &layout.glyphs {
        let Some(outline) = font.outline(glyph.id) else {
            continue;
        };
        // Font units are y-up
        let origin = glyph.position;
        let px = |p: Point| (origin.x + p.x * sx, origin.y - p.y * sy);

        let mut pen: Option<Point> = None;
        for curve in &outline.curves {
            let (start, end) = match *curve {
                OutlineCurve::Line(a, b) => (a, b),
                OutlineCurve::Quad(a, _, c) => (a, c),
                OutlineCurve::Cubic(a, _, _, d) => (a, d),
            };
            if pen != Some(start) {
                if pen.is_some() {
                    builder.close();
                }
                let (x, y) = px(start);
                builder.move_to(x, y);
            }

            match *curve {
                OutlineCurve::Line(_, b) => {
                    let (x, y) = px(b);
                    builder.line_to(x, y);
                }
                OutlineCurve::Quad(_, c, e) => {
                    let ((cx, cy), (x, y)) = (px(c), px(e));
                    builder.quad_to(cx, cy, x, y);
                }
                OutlineCurve::Cubic(_, c1, c2, e) => {
                    let ((c1x, c1y), (c2x, c2y), (x, y)) = (px(c1), px(c2), px(e));
                    builder.cubic_to(c1x, c1y, c2x, c2y, x, y);
                }
            }
            pen = Some(end);
        }
        if pen.is_some() {
            builder.close();
        }
    }

    builder.finish()
}

/// Draw a run anchored at its baseline, honoring alignment and rotation.
///
/// Quarter turns pivot on the anchor: a 90 degree run reads top to bottom
/// with its baseline on column `x`; a 270 degree run reads bottom to top.
pub(crate) fn draw(
    font: &FontVec,
    layout: &Layout,
    image: &mut RgbaImage,
    x: f64,
    y: f64,
    draw: TextDraw,
) -> Result<()> {
    let shift = match draw.align {
        Align::Left => 0.0,
        Align::Center => layout.metrics.width / 2.0,
        Align::Right => layout.metrics.width,
    };
    // Whitespace-only runs have nothing to fill
    let Some(path) = outline_path(font, layout) else {
        return Ok(());
    };

    let transform = Transform::from_rotate_at(draw.rotation.degrees() as f32, x as f32, y as f32)
        .pre_translate((x - shift) as f32, y as f32);
    if draw.rotation != Rotation::None {
        log::trace!(
            "Run {:.0}px wide turned {} degrees at ({:.0}, {:.0})",
            layout.metrics.width,
            draw.rotation.degrees(),
            x,
            y
        );
    }

    let paint = solid(draw.color, 1.0);
    crate::draw::paint(image, |pixmap| {
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        if layout.bold {
            let struck = transform.pre_translate(1.0, 0.0);
            pixmap.fill_path(&path, &paint, FillRule::Winding, struck, None);
        }
    })
}
