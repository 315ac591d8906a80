pub mod backend;
pub mod constants;
mod color;
mod offset;
mod options;
mod place;
mod session;
mod types;
mod units;

pub use backend::{RenderBackend, StrokeStyle, TextDraw, TextStyle};
pub use color::Color;
pub use offset::Offset;
pub use options::*;
pub use place::PictureSource;
pub use session::CanvasSession;
pub use types::*;
pub use units::UnitConverter;
