use image::RgbaImage;
use label_compose::Colorspace;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RasterError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Font error: {0}")]
    Font(String),
    #[error("No font file configured for {0}")]
    FontUnavailable(&'static str),
    #[error("Cannot encode {value:?} as {symbology}: {reason}")]
    Barcode {
        symbology: &'static str,
        value: String,
        reason: String,
    },
    #[error("Invalid ICC profile: {0}")]
    InvalidProfile(String),
    #[error("Canvas must be at least 1x1 pixels, got {0}x{1}")]
    EmptyCanvas(u32, u32),
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// An RGBA bitmap with its declared resolution and colorspace.
///
/// Pixels are always stored as 8-bit RGBA; the colorspace tag records what
/// the bitmap claims to be so print canvases can be gated before output.
#[derive(Debug, Clone)]
pub struct Raster {
    pub(crate) pixels: RgbaImage,
    pub(crate) dpi: (u32, u32),
    pub(crate) colorspace: Colorspace,
    pub(crate) profile: Option<Colorspace>,
}

impl Raster {
    /// Default resolution for bitmaps that never had one declared
    pub const DEFAULT_DPI: u32 = 72;

    pub fn new(pixels: RgbaImage) -> Self {
        Self {
            pixels,
            dpi: (Self::DEFAULT_DPI, Self::DEFAULT_DPI),
            colorspace: Colorspace::Srgb,
            profile: None,
        }
    }

    /// Tag the bitmap with a colorspace, e.g. for canvases that come from print
    pub fn with_colorspace(mut self, colorspace: Colorspace) -> Self {
        self.colorspace = colorspace;
        self
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    pub fn dpi(&self) -> (u32, u32) {
        self.dpi
    }

    pub fn colorspace(&self) -> Colorspace {
        self.colorspace
    }

    /// Colorspace of the embedded profile, if any
    pub fn profile(&self) -> Option<Colorspace> {
        self.profile
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Same resolution and colorspace, new pixels
    pub(crate) fn derive(&self, pixels: RgbaImage) -> Self {
        Self {
            pixels,
            dpi: self.dpi,
            colorspace: self.colorspace,
            profile: self.profile,
        }
    }
}
