//! Raster implementation of the label composition backend
//!
//! Canvases are 8-bit RGBA bitmaps from the `image` crate. Shapes and glyph
//! outlines from `ab_glyph` are filled with `tiny-skia`; barcodes are encoded
//! in-crate.

pub mod barcode;
mod backend;
mod draw;
pub mod icc;
mod text;
mod types;

pub use backend::RasterBackend;
pub use types::*;

/// A label session drawing into an in-memory bitmap
pub type RasterSession = label_compose::CanvasSession<RasterBackend>;
