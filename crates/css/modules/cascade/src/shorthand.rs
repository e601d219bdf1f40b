//! Box shorthand expansion into longhands.
//! Spec: <https://www.w3.org/TR/css-box-3/#margin-shorthand>

use css_values_units::expand_box_sides;

const MARGIN: [&str; 4] = ["margin-top", "margin-right", "margin-bottom", "margin-left"];
const PADDING: [&str; 4] = [
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
];
const BORDER_WIDTH: [&str; 4] = [
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];

const BORDER: [&str; 7] = [
    "border-width",
    "border-style",
    "border-color",
    "border-top-width",
    "border-right-width",
    "border-bottom-width",
    "border-left-width",
];
const BACKGROUND: [&str; 2] = ["background-color", "background-image"];

/// Shorthands paired with every longhand they set.
/// Spec: <https://www.w3.org/TR/css-cascade-4/#shorthand>
pub const SHORTHAND_LONGHANDS: &[(&str, &[&str])] = &[
    ("background", &BACKGROUND),
    ("border", &BORDER),
    ("border-width", &BORDER_WIDTH),
    ("margin", &MARGIN),
    ("padding", &PADDING),
];

/// Longhand names of a four-sided shorthand, in top/right/bottom/left order.
pub fn longhands_of(shorthand: &str) -> Option<[&'static str; 4]> {
    match shorthand {
        "margin" => Some(MARGIN),
        "padding" => Some(PADDING),
        "border-width" => Some(BORDER_WIDTH),
        _ => None,
    }
}

/// Expand a shorthand declaration into `(longhand, value)` pairs.
///
/// Returns `None` for non-shorthands and for values with a component count
/// outside 1..=4.
pub fn expand_shorthand<'value>(
    shorthand: &str,
    value: &'value str,
) -> Option<[(&'static str, &'value str); 4]> {
    let names = longhands_of(shorthand)?;
    let sides = expand_box_sides(value)?;
    let [top, right, bottom, left] = sides;
    let [top_name, right_name, bottom_name, left_name] = names;
    Some([
        (top_name, top),
        (right_name, right),
        (bottom_name, bottom),
        (left_name, left),
    ])
}
