#![cfg(test)]

use core::error::Error;
use css_cascade::{CascadeOptions, ResolvedStyle, complete_style};
use css_paint::compute_paint;
use css_values_units::{ColorSyntax, LengthValue, ParsedValue};
use serde_json::Map;

fn hex_of(value: &ParsedValue) -> Option<&str> {
    value.as_color().map(|color| color.hex.as_str())
}

#[test]
fn colors_normalize_across_syntaxes() {
    let style = ResolvedStyle::from_values([
        ("color", "rgb(255, 0, 0)"),
        ("background-color", "#FF0000"),
    ]);
    let paint = compute_paint(&style);
    assert_eq!(hex_of(&paint.text.color), Some("#ff0000"));
    assert_eq!(hex_of(&paint.background.color), Some("#ff0000"));
    assert_eq!(
        paint.text.color.as_color().map(|color| color.syntax),
        Some(ColorSyntax::Rgb)
    );
    assert_eq!(
        paint.background.color.as_color().map(|color| color.syntax),
        Some(ColorSyntax::Hex)
    );
}

#[test]
fn named_colors_stay_keywords() {
    let style = ResolvedStyle::from_values([("color", "blue")]);
    let paint = compute_paint(&style);
    assert_eq!(paint.text.color, ParsedValue::Keyword("blue".to_owned()));
}

#[test]
fn background_shorthand_supplies_color_over_default() {
    let declared = ResolvedStyle::from_values([
        ("background", "url(hero.png) #336699 no-repeat"),
        ("background-image", "url(hero.png)"),
    ]);
    let style = complete_style(declared, &CascadeOptions::default(), None);
    let paint = compute_paint(&style);
    assert_eq!(hex_of(&paint.background.color), Some("#336699"));
    assert_eq!(paint.background.image.as_deref(), Some("url(hero.png)"));
}

#[test]
fn border_paint_reads_shorthand_and_current_color() {
    let style = ResolvedStyle::from_values([
        ("border", "1px dashed currentcolor"),
        ("color", "#00ff00"),
    ]);
    let paint = compute_paint(&style);
    assert_eq!(paint.border.style, "dashed");
    assert_eq!(hex_of(&paint.border.color), Some("#00ff00"));

    let explicit = ResolvedStyle::from_values([
        ("border", "1px dashed #000000"),
        ("border-style", "Solid"),
        ("border-color", "#abc"),
    ]);
    let paint = compute_paint(&explicit);
    assert_eq!(paint.border.style, "solid");
    assert_eq!(hex_of(&paint.border.color), Some("#aabbcc"));
}

#[test]
fn text_attributes_parse_where_numeric() {
    let style = ResolvedStyle::from_values([
        ("font-family", " Georgia, serif "),
        ("font-size", "16px"),
        ("font-weight", "700"),
    ]);
    let paint = compute_paint(&style);
    assert_eq!(paint.text.font_family, "Georgia, serif");
    assert_eq!(paint.text.font_size, ParsedValue::Length(LengthValue::px(16.0)));
    assert_eq!(paint.text.font_weight, ParsedValue::Numeric(700.0));

    let defaults = compute_paint(&ResolvedStyle::default());
    assert_eq!(defaults.text.font_size, ParsedValue::Keyword("medium".to_owned()));
    assert_eq!(defaults.text.font_family, "sans-serif");
}

#[test]
fn shadows_and_filters_pass_through() {
    let style = ResolvedStyle::from_values([
        ("box-shadow", "0 2px 4px rgba(0,0,0,0.2)"),
        ("text-shadow", "none"),
        ("filter", "blur(2px)"),
        ("backdrop-filter", "grayscale(1)"),
    ]);
    let paint = compute_paint(&style);
    assert_eq!(
        paint.shadows.box_shadow.as_deref(),
        Some("0 2px 4px rgba(0,0,0,0.2)")
    );
    assert_eq!(paint.shadows.text_shadow, None);
    assert_eq!(paint.filters.len(), 2);
    assert_eq!(paint.filters.get("filter").map(String::as_str), Some("blur(2px)"));
}

#[test]
fn opacity_is_clamped() {
    let over = compute_paint(&ResolvedStyle::from_values([("opacity", "1.7")]));
    assert!((over.opacity - 1.0).abs() < f64::EPSILON);
    let under = compute_paint(&ResolvedStyle::from_values([("opacity", "-3")]));
    assert!((under.opacity - 0.0).abs() < f64::EPSILON);
    let garbage = compute_paint(&ResolvedStyle::from_values([("opacity", "half")]));
    assert!((garbage.opacity - 1.0).abs() < f64::EPSILON);
}

#[test]
fn paint_serializes_expected_keys() -> Result<(), Box<dyn Error>> {
    let style = ResolvedStyle::from_values([("background-color", "#ffffff")]);
    let json = serde_json::to_value(compute_paint(&style))?;
    assert_eq!(json["background"]["color"]["hex"], "#ffffff");
    assert_eq!(json["background"]["color"]["type"], "hex");
    assert!(json["background"].get("image").is_none());
    assert_eq!(json["text"]["color"]["hex"], "#000000");
    assert!(json["shadows"]["box_shadow"].is_null());
    assert!(json["filters"].as_object().is_some_and(Map::is_empty));
    assert_eq!(json["opacity"], 1.0);
    Ok(())
}
