//! Shared constants for label composition
//!
//! This module centralizes magic numbers used by the unit converter,
//! the contrast selector and the placement defaults.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Empirical divisor mapping a nominal font size to a device point size.
/// Calibrated against printed output; changing it shifts every text run.
pub const FONT_SIZE_DIVISOR: f64 = 18.19;

// =============================================================================
// Session Defaults
// =============================================================================

/// Default output resolution (dots per inch)
pub const DEFAULT_DPI: u32 = 300;

/// Default label background (white)
pub const DEFAULT_BACKGROUND: &str = "FFFFFF";

// =============================================================================
// Strokes
// =============================================================================

/// Default stroke width for rectangles and lines (mm)
pub const DEFAULT_STROKE_MM: f64 = 0.2;

// =============================================================================
// Contrast
// =============================================================================

/// Lightness at or above which text is drawn black instead of white
pub const LIGHTNESS_THRESHOLD: u32 = 130;
