use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("No dimension given: picture placement needs a width or a height")]
    MissingDimension,
    #[error("Colorspace {0:?} is not supported, expected RGB or sRGB")]
    UnsupportedColorspace(Colorspace),
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Missing resource: {0}")]
    MissingResource(&'static str),
    #[error("Backend error: {0}")]
    Backend(#[source] BoxError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LabelError {
    /// Wrap a render backend failure without altering it
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LabelError::Backend(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, LabelError>;

/// Horizontal alignment of a placed element relative to its x anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font faces a label can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FontFace {
    /// Default sans-serif face (Helvetica-like)
    #[default]
    Sans,
    /// Fixed-width alternate face
    Monospace,
}

impl FontFace {
    pub fn family(self) -> &'static str {
        match self {
            FontFace::Sans => "Helvetica",
            FontFace::Monospace => "Monaco",
        }
    }
}

/// Barcode symbologies understood by the encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Symbology {
    #[default]
    Code128A,
    Code128B,
    Code128C,
    Code39,
}

impl Symbology {
    /// Resolve a symbology tag. Unknown tags fall back to Code 128 A.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "b" | "code_128b" => Symbology::Code128B,
            "c" | "code_128c" => Symbology::Code128C,
            "code_39" => Symbology::Code39,
            "code_128a" => Symbology::Code128A,
            _ => Symbology::Code128A,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbology::Code128A => "Code 128A",
            Symbology::Code128B => "Code 128B",
            Symbology::Code128C => "Code 128C",
            Symbology::Code39 => "Code 39",
        }
    }
}

/// Colorspace tag reported by a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colorspace {
    Rgb,
    Srgb,
    Cmyk,
    Gray,
    Other,
}

impl Colorspace {
    /// Print colorspaces that need profile conversion before output
    pub fn is_print(self) -> bool {
        matches!(self, Colorspace::Cmyk)
    }

    pub fn is_rgb(self) -> bool {
        matches!(self, Colorspace::Rgb | Colorspace::Srgb)
    }
}

/// How a rectangle's stroke relates to its corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RectStyle {
    /// Stroke centered on the given corners
    #[default]
    Centered,
    /// Stroke kept inside the given corners
    Inner,
}

/// Rotation applied to a text run around its anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise270,
}

impl Rotation {
    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise270 => 270,
        }
    }
}

/// Pixel metrics of a measured text run. Descent is negative below the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
    pub height: f64,
}
