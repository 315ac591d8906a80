//! Cumulative origin shift applied to every placement

use crate::units::UnitConverter;

/// Origin shift in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}

impl Offset {
    /// Shift a converted position by the current origin
    #[inline]
    pub fn apply(self, x: i64, y: i64) -> (i64, i64) {
        (x + self.x, y + self.y)
    }

    /// Shift the origin by a relative amount given in millimeters
    pub fn add_mm(&mut self, units: UnitConverter, dx_mm: f64, dy_mm: f64) {
        let [dx, dy] = units.to_pixels_all([dx_mm, dy_mm]);
        self.x += dx;
        self.y += dy;
    }

    /// Replace the origin with an absolute position given in millimeters
    pub fn set_mm(&mut self, units: UnitConverter, x_mm: f64, y_mm: f64) {
        let [x, y] = units.to_pixels_all([x_mm, y_mm]);
        self.x = x;
        self.y = y;
    }
}
