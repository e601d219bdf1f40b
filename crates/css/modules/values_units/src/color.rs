//! CSS Color Level 3 — hex and `rgb()`/`rgba()` colors (subset).
//! Spec: <https://www.w3.org/TR/css-color-3/>
//!
//! Named colors are deliberately not resolved; callers see them as keywords.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};
use serde::Serialize;

/// Bit count used to duplicate a single hex nibble into a full byte.
const NIBBLE_SHIFT: u32 = 4;

/// Which authored syntax a color came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSyntax {
    Hex,
    Rgb,
}

/// An sRGB color with its normalized `#rrggbb` form.
///
/// Two colors written in different syntaxes compare equal on `hex` even though
/// `syntax` differs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorValue {
    #[serde(rename = "r")]
    pub red: u8,
    #[serde(rename = "g")]
    pub green: u8,
    #[serde(rename = "b")]
    pub blue: u8,
    /// Alpha in `0.0..=1.0`.
    #[serde(rename = "a")]
    pub alpha: f64,
    /// Lowercase 7-character hex, alpha not included.
    pub hex: String,
    #[serde(rename = "type")]
    pub syntax: ColorSyntax,
}

impl ColorValue {
    /// Build a color and its normalized hex string.
    pub fn new(red: u8, green: u8, blue: u8, alpha: f64, syntax: ColorSyntax) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: alpha.clamp(0.0, 1.0),
            hex: format!("#{red:02x}{green:02x}{blue:02x}"),
            syntax,
        }
    }
}

/// Convert an ASCII hex digit to its numeric value.
pub const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Join two nibbles into a byte.
const fn combine_nibbles(high: u8, low: u8) -> u8 {
    high.wrapping_shl(NIBBLE_SHIFT) | low
}

/// Parse the digits of a 3- or 6-digit hex color (without the leading `#`).
fn parse_hex_digits(text: &str) -> Option<ColorValue> {
    let nibbles: Vec<u8> = text.bytes().map(hex_value).collect::<Option<_>>()?;
    let (red, green, blue) = match *nibbles.as_slice() {
        // Duplicate nibble (e.g., a -> aa)
        [red, green, blue] => (
            combine_nibbles(red, red),
            combine_nibbles(green, green),
            combine_nibbles(blue, blue),
        ),
        [r_high, r_low, g_high, g_low, b_high, b_low] => (
            combine_nibbles(r_high, r_low),
            combine_nibbles(g_high, g_low),
            combine_nibbles(b_high, b_low),
        ),
        _ => return None,
    };
    Some(ColorValue::new(red, green, blue, 1.0, ColorSyntax::Hex))
}

/// Parse the arguments of `rgb()`/`rgba()`.
///
/// Channels are integers clamped to 0..=255. An optional fourth component is the
/// alpha, either a number in 0..=1 or a percentage.
fn parse_rgb_arguments(name: &str, nested: &mut Parser<'_, '_>) -> Option<ColorValue> {
    let lowercase = name.to_ascii_lowercase();
    if lowercase != "rgb" && lowercase != "rgba" {
        return None;
    }
    let mut channels: Vec<u8> = Vec::with_capacity(3);
    let mut alpha: Option<f64> = None;
    loop {
        let start = nested.position();
        let Ok(next) = nested.next() else {
            break;
        };
        let token = next.clone();
        match token {
            Token::Comma => {}
            Token::Number {
                int_value: Some(int_val),
                ..
            } if channels.len() < 3 => {
                let bounded = int_val.clamp(i32::from(u8::MIN), i32::from(u8::MAX));
                channels.push(u8::try_from(bounded).ok()?);
            }
            Token::Number { .. } if channels.len() == 3 && alpha.is_none() => {
                let text = nested.slice_from(start).trim();
                alpha = Some(text.parse::<f64>().ok()?.clamp(0.0, 1.0));
            }
            Token::Percentage { .. } if channels.len() == 3 && alpha.is_none() => {
                let text = nested.slice_from(start).trim();
                let percent = text.strip_suffix('%')?.parse::<f64>().ok()?;
                alpha = Some((percent / 100.0).clamp(0.0, 1.0));
            }
            _ => return None,
        }
    }
    match *channels.as_slice() {
        [red, green, blue] => Some(ColorValue::new(
            red,
            green,
            blue,
            alpha.unwrap_or(1.0),
            ColorSyntax::Rgb,
        )),
        _ => None,
    }
}

/// Parse a CSS <color> (subset): `#rgb`, `#rrggbb`, `rgb()`, `rgba()`.
///
/// Returns `None` for named colors, other color functions, and malformed input.
pub fn parse_color(raw: &str) -> Option<ColorValue> {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let token = parser.next().ok()?.clone();
    let color = match token {
        Token::Hash(value) | Token::IDHash(value) => parse_hex_digits(value.as_ref())?,
        Token::Function(name) => {
            let result: Result<Option<ColorValue>, CssParseError<'_, ()>> = parser
                .parse_nested_block(|nested| Ok(parse_rgb_arguments(name.as_ref(), nested)));
            result.ok().flatten()?
        }
        _ => return None,
    };
    parser.is_exhausted().then_some(color)
}
