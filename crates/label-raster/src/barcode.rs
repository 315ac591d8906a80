//! Code 128 and Code 39 encoders
//!
//! Encoders produce a run of modules (`true` = bar); `render` turns that
//! into a black-on-white bitmap with a quiet margin on every side.

use crate::types::{RasterError, Result};
use image::{Rgba, RgbaImage};
use label_compose::Symbology;

/// Blank pixels around the symbol on every side
pub const QUIET_MARGIN_PX: u32 = 10;

/// Width of a Code 39 wide element, in modules
const CODE39_WIDE: usize = 2;

/// Bar/space widths for Code 128 values 0..=105 (start codes at 103..=105)
const CODE128_PATTERNS: [&str; 106] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232",
];

const CODE128_STOP: &str = "2331112";

const START_A: usize = 103;
const START_B: usize = 104;
const START_C: usize = 105;

/// Code 39 characters and their narrow/wide element sequences (bar first)
const CODE39_PATTERNS: [(char, &str); 44] = [
    ('0', "nnnwwnwnn"),
    ('1', "wnnwnnnnw"),
    ('2', "nnwwnnnnw"),
    ('3', "wnwwnnnnn"),
    ('4', "nnnwwnnnw"),
    ('5', "wnnwwnnnn"),
    ('6', "nnwwwnnnn"),
    ('7', "nnnwnnwnw"),
    ('8', "wnnwnnwnn"),
    ('9', "nnwwnnwnn"),
    ('A', "wnnnnwnnw"),
    ('B', "nnwnnwnnw"),
    ('C', "wnwnnwnnn"),
    ('D', "nnnnwwnnw"),
    ('E', "wnnnwwnnn"),
    ('F', "nnwnwwnnn"),
    ('G', "nnnnnwwnw"),
    ('H', "wnnnnwwnn"),
    ('I', "nnwnnwwnn"),
    ('J', "nnnnwwwnn"),
    ('K', "wnnnnnnww"),
    ('L', "nnwnnnnww"),
    ('M', "wnwnnnnwn"),
    ('N', "nnnnwnnww"),
    ('O', "wnnnwnnwn"),
    ('P', "nnwnwnnwn"),
    ('Q', "nnnnnnwww"),
    ('R', "wnnnnnwwn"),
    ('S', "nnwnnnwwn"),
    ('T', "nnnnwnwwn"),
    ('U', "wwnnnnnnw"),
    ('V', "nwwnnnnnw"),
    ('W', "wwwnnnnnn"),
    ('X', "nwnnwnnnw"),
    ('Y', "wwnnwnnnn"),
    ('Z', "nwwnwnnnn"),
    ('-', "nwnnnnwnw"),
    ('.', "wwnnnnwnn"),
    (' ', "nwwnnnwnn"),
    ('$', "nwnwnwnnn"),
    ('/', "nwnwnnnwn"),
    ('+', "nwnnnwnwn"),
    ('%', "nnnwnwnwn"),
    ('*', "nwnnwnwnn"),
];

/// Encode `value` as a sequence of modules
pub fn encode(symbology: Symbology, value: &str) -> Result<Vec<bool>> {
    match symbology {
        Symbology::Code128A => encode_code128(symbology, START_A, code128a_values(value)),
        Symbology::Code128B => encode_code128(symbology, START_B, code128b_values(value)),
        Symbology::Code128C => encode_code128(symbology, START_C, code128c_values(value)),
        Symbology::Code39 => encode_code39(value),
    }
}

/// Render modules as bars `module_width` pixels wide and `height` pixels tall
pub fn render(modules: &[bool], module_width: u32, height: u32) -> RgbaImage {
    let width = modules.len() as u32 * module_width + 2 * QUIET_MARGIN_PX;
    let full_height = height + 2 * QUIET_MARGIN_PX;
    let mut image = RgbaImage::from_pixel(width, full_height, Rgba([255, 255, 255, 255]));

    for (i, _) in modules.iter().enumerate().filter(|(_, bar)| **bar) {
        let left = QUIET_MARGIN_PX + i as u32 * module_width;
        for x in left..left + module_width {
            for y in QUIET_MARGIN_PX..QUIET_MARGIN_PX + height {
                image.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }
    image
}

fn invalid(symbology: Symbology, value: &str, reason: impl Into<String>) -> RasterError {
    RasterError::Barcode {
        symbology: symbology.name(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

fn code128a_values(value: &str) -> Result<Vec<usize>> {
    value
        .chars()
        .map(|c| match c as u32 {
            0x20..=0x5F => Ok(c as usize - 0x20),
            0x00..=0x1F => Ok(c as usize + 64),
            _ => Err(invalid(
                Symbology::Code128A,
                value,
                format!("character {:?} is not in set A", c),
            )),
        })
        .collect()
}

fn code128b_values(value: &str) -> Result<Vec<usize>> {
    value
        .chars()
        .map(|c| match c as u32 {
            0x20..=0x7F => Ok(c as usize - 0x20),
            _ => Err(invalid(
                Symbology::Code128B,
                value,
                format!("character {:?} is not in set B", c),
            )),
        })
        .collect()
}

fn code128c_values(value: &str) -> Result<Vec<usize>> {
    if value.len() % 2 != 0 || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid(
            Symbology::Code128C,
            value,
            "set C needs an even number of digits",
        ));
    }

    Ok(value
        .as_bytes()
        .chunks(2)
        .map(|pair| ((pair[0] - b'0') * 10 + (pair[1] - b'0')) as usize)
        .collect())
}

fn encode_code128(
    symbology: Symbology,
    start: usize,
    values: Result<Vec<usize>>,
) -> Result<Vec<bool>> {
    let values = values?;
    if values.is_empty() {
        return Err(invalid(symbology, "", "nothing to encode"));
    }

    let checksum = values
        .iter()
        .enumerate()
        .fold(start, |sum, (i, value)| sum + value * (i + 1))
        % 103;

    let mut modules = Vec::new();
    push_widths(&mut modules, CODE128_PATTERNS[start]);
    for value in &values {
        push_widths(&mut modules, CODE128_PATTERNS[*value]);
    }
    push_widths(&mut modules, CODE128_PATTERNS[checksum]);
    push_widths(&mut modules, CODE128_STOP);
    Ok(modules)
}

/// Append alternating bars and spaces, starting with a bar
fn push_widths(modules: &mut Vec<bool>, widths: &str) {
    for (i, width) in widths.bytes().enumerate() {
        let bar = i % 2 == 0;
        let width = (width - b'0') as usize;
        modules.extend(std::iter::repeat_n(bar, width));
    }
}

fn code39_pattern(c: char) -> Option<&'static str> {
    CODE39_PATTERNS
        .iter()
        .find(|(key, _)| *key == c)
        .map(|(_, pattern)| *pattern)
}

fn encode_code39(value: &str) -> Result<Vec<bool>> {
    if value.is_empty() {
        return Err(invalid(Symbology::Code39, value, "nothing to encode"));
    }

    let mut modules = Vec::new();
    let delimited = std::iter::once('*')
        .chain(value.chars())
        .chain(std::iter::once('*'));

    for (n, c) in delimited.enumerate() {
        let pattern = match code39_pattern(c) {
            Some(pattern) if c != '*' || n == 0 || n == value.chars().count() + 1 => pattern,
            _ => {
                return Err(invalid(
                    Symbology::Code39,
                    value,
                    format!("character {:?} cannot be encoded", c),
                ));
            }
        };

        if n > 0 {
            // Narrow inter-character gap
            modules.push(false);
        }
        for (i, element) in pattern.bytes().enumerate() {
            let bar = i % 2 == 0;
            let width = if element == b'w' { CODE39_WIDE } else { 1 };
            modules.extend(std::iter::repeat_n(bar, width));
        }
    }
    Ok(modules)
}
