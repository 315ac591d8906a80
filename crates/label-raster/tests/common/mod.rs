#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use label_compose::*;
use label_raster::*;
use std::path::{Path, PathBuf};

/// Write a bare ICC header declaring `space` as its data colorspace
pub fn profile(dir: &Path, name: &str, space: &[u8; 4]) -> PathBuf {
    let mut bytes = vec![0u8; 128];
    bytes[16..20].copy_from_slice(space);
    bytes[36..40].copy_from_slice(b"acsp");
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

/// Write a solid PNG
pub fn png(dir: &Path, name: &str, width: u32, height: u32, color: [u8; 4]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save(&path)
        .unwrap();
    path
}

/// A system font for text tests; `None` when the machine has none installed
pub fn system_font() -> Option<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/Library/Fonts/Arial.ttf",
        "C:\\Windows\\Fonts\\arial.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .find(|path| path.exists())
}

pub fn session(width_mm: f64, height_mm: f64, options: SessionOptions) -> RasterSession {
    CanvasSession::new(RasterBackend::new(), width_mm, height_mm, options).unwrap()
}

pub fn pixel(session: &RasterSession, x: u32, y: u32) -> [u8; 4] {
    session.surface().pixels().get_pixel(x, y).0
}

pub fn dark_pixels(raster: &Raster) -> usize {
    raster
        .pixels()
        .pixels()
        .filter(|p| p.0[3] > 0 && p.0[0] < 128 && p.0[1] < 128 && p.0[2] < 128)
        .count()
}
