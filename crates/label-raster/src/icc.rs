//! Minimal ICC profile header reading

use crate::types::{RasterError, Result};
use label_compose::Colorspace;

const HEADER_LEN: usize = 128;

/// Data colorspace declared by an ICC profile header
pub fn data_colorspace(profile: &[u8]) -> Result<Colorspace> {
    if profile.len() < HEADER_LEN {
        return Err(RasterError::InvalidProfile(format!(
            "header is {} bytes, expected at least {}",
            profile.len(),
            HEADER_LEN
        )));
    }
    if &profile[36..40] != b"acsp" {
        return Err(RasterError::InvalidProfile(
            "missing 'acsp' signature".to_string(),
        ));
    }

    Ok(match &profile[16..20] {
        b"RGB " => Colorspace::Srgb,
        b"CMYK" => Colorspace::Cmyk,
        b"GRAY" => Colorspace::Gray,
        _ => Colorspace::Other,
    })
}

/// Build a bare profile header, enough for `data_colorspace` to read
#[cfg(test)]
pub(crate) fn header(space: &[u8; 4]) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_LEN];
    bytes[16..20].copy_from_slice(space);
    bytes[36..40].copy_from_slice(b"acsp");
    bytes
}
