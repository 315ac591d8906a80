//! Placement algorithms, one per primitive
//!
//! Each placement converts its millimeter inputs, applies the session
//! offset, validates before touching the canvas, and releases any
//! intermediate bitmap before returning.

mod barcode;
mod picture;
mod shapes;
mod text;

pub use picture::PictureSource;
