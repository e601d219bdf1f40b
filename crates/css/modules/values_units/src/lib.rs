//! CSS Values and Units — typed parsing of raw declaration values.
//! Spec: <https://www.w3.org/TR/css-values-3/>
//!
//! Every entry point here is total: text that does not fit the expected grammar
//! degrades to [`ParsedValue::Keyword`] carrying the original text instead of
//! returning an error, so later stages can always echo what the author wrote.

#![forbid(unsafe_code)]

pub mod box_quad;
pub mod color;
pub mod length;
pub mod numeric;
pub mod property;
pub mod transform;

pub use box_quad::{BoxQuad, Side, expand_box_sides, parse_box_quad};
pub use color::{ColorSyntax, ColorValue, parse_color};
pub use length::{LengthUnit, LengthValue, parse_length};
pub use numeric::{parse_number, parse_opacity, parse_z_index};
pub use property::{PropertyKind, parse};
pub use transform::{TransformList, parse_transform};

use serde::Serialize;

/// A declaration value after property-aware parsing.
///
/// Serialized untagged: colors and lengths as objects carrying a `type` field,
/// keywords as plain strings, numerics as plain numbers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedValue {
    /// `#rgb`, `#rrggbb`, `rgb()` or `rgba()`.
    Color(ColorValue),
    /// A number with a `px`, `%`, `em` or `rem` unit.
    Length(LengthValue),
    /// Anything that did not parse into a richer form, verbatim (trimmed).
    Keyword(String),
    /// A bare number (opacity, z-index, font-weight, ...).
    Numeric(f64),
    /// Four-sided box shorthand (margin, padding, border-width).
    Quad(Box<BoxQuad>),
    /// Transform function list.
    Transform(TransformList),
}

impl ParsedValue {
    /// Build a keyword from raw text, trimming surrounding whitespace.
    #[inline]
    pub fn keyword(raw: &str) -> Self {
        Self::Keyword(raw.trim().to_owned())
    }

    /// Pixel amount when this is a `px` length (or unitless zero).
    #[inline]
    pub fn as_px(&self) -> Option<f64> {
        match self {
            Self::Length(length) => length.as_px(),
            Self::Color(_)
            | Self::Keyword(_)
            | Self::Numeric(_)
            | Self::Quad(_)
            | Self::Transform(_) => None,
        }
    }

    /// Color payload, if this value is a color.
    #[inline]
    pub const fn as_color(&self) -> Option<&ColorValue> {
        if let Self::Color(color) = self {
            Some(color)
        } else {
            None
        }
    }
}
