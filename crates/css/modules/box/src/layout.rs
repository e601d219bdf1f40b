//! Display, positioning and box-model extraction.
//! Spec: <https://www.w3.org/TR/css-display-3/> and <https://www.w3.org/TR/css-position-3/>

use css_cascade::{ResolvedStyle, initial_value};
use css_values_units::{BoxQuad, ParsedValue, Side, parse, parse_box_quad, parse_length};
use serde::Serialize;

/// Margin, padding and border widths, each as four parsed sides.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoxModel {
    pub margin: BoxQuad,
    pub padding: BoxQuad,
    pub border: BoxQuad,
}

/// Content dimensions as authored; `auto` and percentages are preserved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: ParsedValue,
    pub height: ParsedValue,
}

/// Flow participation derived from `display`, `position` and `float`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FlowFlags {
    pub is_block: bool,
    pub is_positioned: bool,
    pub is_floated: bool,
}

/// Layout description of one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Layout {
    pub display: String,
    pub position: String,
    pub float: String,
    pub box_model: BoxModel,
    pub dimensions: Dimensions,
    pub flow: FlowFlags,
}

/// Keyword value of a property, lowercased, or its initial value when unset.
fn keyword_or_initial(style: &ResolvedStyle, property: &str) -> String {
    style
        .value(property)
        .or_else(|| initial_value(property))
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Parse a width/height, keeping `auto` and unknown units as keywords.
fn dimension(style: &ResolvedStyle, property: &str) -> ParsedValue {
    let raw = style.value(property).unwrap_or("auto");
    parse(property, raw)
}

/// Build a quad from `prefix` and its `{prefix}-{side}{suffix}` longhands.
///
/// Longhands override the sides of the shorthand; the cascade has already
/// removed longhands that lost to it. An unset shorthand starts from zero on
/// every side.
fn edge_quad(style: &ResolvedStyle, shorthand: Option<&str>, prefix: &str, suffix: &str) -> BoxQuad {
    let mut quad = shorthand.map_or_else(BoxQuad::default, parse_box_quad);
    for side in Side::ALL {
        let longhand = format!("{prefix}-{}{suffix}", side.as_str());
        if let Some(raw) = style.value(&longhand) {
            quad.set_side(side, parse(&longhand, raw));
        }
    }
    quad
}

/// First length token of a `border` shorthand (`1px solid red` → `1px`).
/// Spec: <https://www.w3.org/TR/css-backgrounds-3/#border-shorthands>
fn border_shorthand_width(border: &str) -> Option<&str> {
    border
        .split_ascii_whitespace()
        .find(|token| parse_length(token).is_some())
}

/// Border widths from `border-width`, else from the `border` shorthand.
///
/// An authored `border-width` wins; a default-filled one yields to an
/// authored `border` shorthand.
fn border_widths(style: &ResolvedStyle) -> BoxQuad {
    let from_border = style.value("border").and_then(border_shorthand_width);
    let shorthand = style
        .authored("border-width")
        .or(from_border)
        .or_else(|| style.value("border-width"));
    edge_quad(style, shorthand, "border", "-width")
}

/// Compute the layout description of a resolved style.
///
/// Unset `display`, `position` and `float` read as their initial values.
pub fn compute_layout(style: &ResolvedStyle) -> Layout {
    let display = keyword_or_initial(style, "display");
    let position = keyword_or_initial(style, "position");
    let float = keyword_or_initial(style, "float");
    let flow = FlowFlags {
        is_block: matches!(display.as_str(), "block" | "flex" | "grid"),
        is_positioned: position != "static",
        is_floated: matches!(float.as_str(), "left" | "right"),
    };
    let box_model = BoxModel {
        margin: edge_quad(style, style.value("margin"), "margin", ""),
        padding: edge_quad(style, style.value("padding"), "padding", ""),
        border: border_widths(style),
    };
    let dimensions = Dimensions {
        width: dimension(style, "width"),
        height: dimension(style, "height"),
    };
    Layout {
        display,
        position,
        float,
        box_model,
        dimensions,
        flow,
    }
}
