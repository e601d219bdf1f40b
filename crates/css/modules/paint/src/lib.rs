//! Paint attributes — backgrounds, borders, text, shadows, filters, opacity.
//! Spec: <https://www.w3.org/TR/css-backgrounds-3/>
//!
//! Colors go through the value parser; shadows and filters are surfaced as
//! authored text without decomposition.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use css_cascade::{ResolvedStyle, initial_value};
use css_values_units::{ParsedValue, parse, parse_color, parse_opacity};
use serde::Serialize;

/// Background fill.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Background {
    pub color: ParsedValue,
    /// `background-image` when it is anything but `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Border stroke shared by all sides.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BorderPaint {
    pub color: ParsedValue,
    pub style: String,
}

/// Text rendering attributes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextPaint {
    pub color: ParsedValue,
    pub font_family: String,
    pub font_size: ParsedValue,
    pub font_weight: ParsedValue,
}

/// Raw shadow lists keyed by kind; `none` reads as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Shadows {
    pub box_shadow: Option<String>,
    pub text_shadow: Option<String>,
}

/// Paint attributes of one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paint {
    pub background: Background,
    pub border: BorderPaint,
    pub text: TextPaint,
    pub shadows: Shadows,
    /// `filter`-family declarations by property name.
    pub filters: BTreeMap<String, String>,
    pub opacity: f64,
}

/// `border-style` keywords.
/// Spec: <https://www.w3.org/TR/css-backgrounds-3/#border-style>
const BORDER_STYLES: &[&str] = &[
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// Value of a property, or its initial value when unset.
fn value_or_initial<'style>(style: &'style ResolvedStyle, property: &str) -> &'style str {
    style
        .value(property)
        .or_else(|| initial_value(property))
        .unwrap_or_default()
}

/// First color token of a shorthand (`url(a.png) #fff no-repeat` → `#fff`).
fn shorthand_color(shorthand: &str) -> Option<&str> {
    if parse_color(shorthand).is_some() {
        return Some(shorthand.trim());
    }
    shorthand
        .split_ascii_whitespace()
        .find(|token| parse_color(token).is_some())
}

/// A longhand set by a rule, else a color token of its shorthand, else the
/// longhand's default.
fn color_with_shorthand<'style>(
    style: &'style ResolvedStyle,
    longhand: &str,
    shorthand: &str,
) -> &'style str {
    style
        .authored(longhand)
        .or_else(|| style.value(shorthand).and_then(shorthand_color))
        .unwrap_or_else(|| value_or_initial(style, longhand))
}

/// `none` means no value.
fn unless_none(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("none")).then(|| trimmed.to_owned())
}

/// Whether a property belongs to the filter family (`filter`, `backdrop-filter`).
/// Spec: <https://drafts.fxtf.org/filter-effects-1/#FilterProperty>
fn is_filter_property(property: &str) -> bool {
    property == "filter" || property.ends_with("-filter")
}

fn compute_border(style: &ResolvedStyle, text_color: &ParsedValue) -> BorderPaint {
    let shorthand = style.value("border").unwrap_or_default();
    let border_style = style
        .authored("border-style")
        .or_else(|| {
            shorthand.split_ascii_whitespace().find(|token| {
                BORDER_STYLES
                    .iter()
                    .any(|keyword| token.eq_ignore_ascii_case(keyword))
            })
        })
        .unwrap_or_else(|| value_or_initial(style, "border-style"))
        .trim()
        .to_ascii_lowercase();
    let raw_color = color_with_shorthand(style, "border-color", "border");
    // Spec: <https://www.w3.org/TR/css-color-3/#currentcolor>
    let color = if raw_color.trim().eq_ignore_ascii_case("currentcolor") {
        text_color.clone()
    } else {
        parse("border-color", raw_color)
    };
    BorderPaint {
        color,
        style: border_style,
    }
}

/// Compute the paint attributes of a resolved style.
///
/// Unset properties read as their initial values; opacity is clamped to
/// `[0, 1]` and an unparseable opacity counts as fully opaque.
pub fn compute_paint(style: &ResolvedStyle) -> Paint {
    let text = TextPaint {
        color: parse("color", value_or_initial(style, "color")),
        font_family: value_or_initial(style, "font-family").trim().to_owned(),
        font_size: parse("font-size", value_or_initial(style, "font-size")),
        font_weight: parse("font-weight", value_or_initial(style, "font-weight")),
    };
    let background = Background {
        color: parse(
            "background-color",
            color_with_shorthand(style, "background-color", "background"),
        ),
        image: style.value("background-image").and_then(unless_none),
    };
    let border = compute_border(style, &text.color);
    let shadows = Shadows {
        box_shadow: style.value("box-shadow").and_then(unless_none),
        text_shadow: style.value("text-shadow").and_then(unless_none),
    };
    let filters = style
        .iter()
        .filter(|(name, _)| is_filter_property(name))
        .map(|(name, resolved)| (name.clone(), resolved.value.clone()))
        .collect();
    let opacity = parse_opacity(value_or_initial(style, "opacity")).unwrap_or(1.0);
    Paint {
        background,
        border,
        text,
        shadows,
        filters,
        opacity,
    }
}
