//! Property-aware dispatch from a raw declaration value to a [`ParsedValue`].

use crate::{
    ParsedValue, parse_box_quad, parse_color, parse_length, parse_number, parse_opacity,
    parse_transform, parse_z_index,
};

/// The value grammar a property is parsed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    Color,
    Length,
    BoxQuad,
    Opacity,
    ZIndex,
    /// A bare number, falling back to a length (`line-height`, `font-weight`).
    Number,
    Transform,
    Keyword,
}

impl PropertyKind {
    /// Classify a property name (case-insensitive).
    pub fn of(property: &str) -> Self {
        let name = property.trim().to_ascii_lowercase();
        match name.as_str() {
            "margin" | "padding" | "border-width" => Self::BoxQuad,
            "opacity" => Self::Opacity,
            "z-index" => Self::ZIndex,
            "transform" => Self::Transform,
            "color" => Self::Color,
            "font-weight" | "line-height" | "flex-grow" | "flex-shrink" | "order" => Self::Number,
            "width" | "height" | "min-width" | "min-height" | "max-width" | "max-height"
            | "top" | "right" | "bottom" | "left" | "font-size" | "letter-spacing"
            | "word-spacing" | "text-indent" | "gap" | "row-gap" | "column-gap"
            | "flex-basis" | "outline-width" | "border-radius" => Self::Length,
            other if other.ends_with("-color") => Self::Color,
            other if is_box_longhand(other) => Self::Length,
            _ => Self::Keyword,
        }
    }
}

/// `margin-*`, `padding-*`, and `border-*-width` longhands.
fn is_box_longhand(name: &str) -> bool {
    name.starts_with("margin-")
        || name.starts_with("padding-")
        || (name.starts_with("border-") && name.ends_with("-width"))
}

/// Parse a raw declaration value for `property` into its typed form.
///
/// Never fails: input that does not fit the property's grammar becomes
/// [`ParsedValue::Keyword`] holding the trimmed original text.
pub fn parse(property: &str, raw: &str) -> ParsedValue {
    let fallback = || ParsedValue::keyword(raw);
    match PropertyKind::of(property) {
        PropertyKind::Color => parse_color(raw).map_or_else(fallback, ParsedValue::Color),
        PropertyKind::Length => parse_length(raw).map_or_else(fallback, ParsedValue::Length),
        PropertyKind::BoxQuad => ParsedValue::Quad(Box::new(parse_box_quad(raw))),
        PropertyKind::Opacity => parse_opacity(raw).map_or_else(fallback, ParsedValue::Numeric),
        PropertyKind::ZIndex => parse_z_index(raw)
            .map_or_else(fallback, |z_index| ParsedValue::Numeric(f64::from(z_index))),
        PropertyKind::Number => parse_number(raw).map_or_else(
            || parse_length(raw).map_or_else(fallback, ParsedValue::Length),
            ParsedValue::Numeric,
        ),
        PropertyKind::Transform => ParsedValue::Transform(parse_transform(raw)),
        PropertyKind::Keyword => fallback(),
    }
}
