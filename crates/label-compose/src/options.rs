use crate::color::Color;
use crate::constants::{DEFAULT_BACKGROUND, DEFAULT_DPI, DEFAULT_STROKE_MM};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Resource locations handed to the session explicitly.
///
/// Nothing is looked up from the process environment; a placement that needs
/// a resource which is not configured fails with `MissingResource` or lets the
/// backend decide on a fallback.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resources {
    /// Font file for the default sans-serif face
    pub sans_font: Option<PathBuf>,
    /// Font file for the monospace face
    pub monospace_font: Option<PathBuf>,
    /// Bold variant of the sans-serif face
    pub bold_font: Option<PathBuf>,
    /// ICC profile describing the source print colorspace
    pub cmyk_profile: Option<PathBuf>,
    /// ICC profile for the sRGB target
    pub rgb_profile: Option<PathBuf>,
}

impl Resources {
    /// Font file for a face and weight, if one is configured
    pub fn font_path(&self, face: FontFace, weight: FontWeight) -> Option<&PathBuf> {
        match (face, weight) {
            (FontFace::Monospace, _) => self.monospace_font.as_ref(),
            (FontFace::Sans, FontWeight::Bold) => {
                self.bold_font.as_ref().or(self.sans_font.as_ref())
            }
            (FontFace::Sans, FontWeight::Normal) => self.sans_font.as_ref(),
        }
    }

    /// Whether a dedicated bold file exists for the face
    pub fn has_bold_face(&self, face: FontFace) -> bool {
        face == FontFace::Sans && self.bold_font.is_some()
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionOptions {
    /// Output resolution in dots per inch
    pub dpi: u32,
    /// Background color as six hex digits, `#` optional
    pub background: String,
    pub resources: Resources,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            background: DEFAULT_BACKGROUND.to_string(),
            resources: Resources::default(),
        }
    }
}

impl SessionOptions {
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.resources = resources;
        self
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LabelError::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LabelError::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options and return the parsed background
    pub fn validate(&self) -> Result<Color> {
        if self.dpi == 0 {
            return Err(LabelError::InvalidConfig(
                "Resolution must be greater than zero".to_string(),
            ));
        }

        Color::from_hex(&self.background)
    }
}

/// Size hint for a picture: one dimension drives a uniform scale.
/// When both are given the width wins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DimensionHint {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl DimensionHint {
    pub fn width(mm: f64) -> Self {
        Self {
            width: Some(mm),
            height: None,
        }
    }

    pub fn height(mm: f64) -> Self {
        Self {
            width: None,
            height: Some(mm),
        }
    }
}

/// Picture placement options. Only `Left` and `Center` alignment move the
/// picture; `Right` behaves like `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PictureOptions {
    pub align: Align,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BarcodeOptions {
    pub symbology: Symbology,
    /// Widest the encoded bitmap may be, in mm
    pub max_width: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextOptions {
    pub align: Align,
    pub font_weight: FontWeight,
    pub font: FontFace,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CondensedTextOptions {
    pub align: Align,
    pub font: FontFace,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RectOptions {
    /// Stroke width in mm
    pub stroke_width: f64,
    pub style: RectStyle,
}

impl Default for RectOptions {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_MM,
            style: RectStyle::Centered,
        }
    }
}
