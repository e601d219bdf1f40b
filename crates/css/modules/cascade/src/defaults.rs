//! Initial values and inheritance.
//! Spec: <https://www.w3.org/TR/css-cascade-4/#inheriting>

/// Built-in values substituted for properties the cascade left unset.
///
/// Covers every property the layout, paint and composite stages read, so those
/// stages never observe a missing key when defaults are enabled.
/// Spec: Section 7.1 — Initial values
pub const INITIAL_VALUES: &[(&str, &str)] = &[
    ("background-color", "transparent"),
    ("background-image", "none"),
    ("border-color", "currentcolor"),
    ("border-style", "none"),
    ("border-width", "0"),
    ("box-shadow", "none"),
    ("color", "#000000"),
    ("display", "inline"),
    ("float", "none"),
    ("font-family", "sans-serif"),
    ("font-size", "medium"),
    ("font-weight", "normal"),
    ("height", "auto"),
    ("margin", "0"),
    ("opacity", "1"),
    ("padding", "0"),
    ("position", "static"),
    ("text-shadow", "none"),
    ("transform", "none"),
    ("width", "auto"),
    ("z-index", "auto"),
];

/// Initial value of a property, if it is one this engine knows.
/// Spec: Section 7.1 — Initial values
pub fn initial_value(property_name: &str) -> Option<&'static str> {
    INITIAL_VALUES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(property_name))
        .map(|&(_, value)| value)
}

/// Whether a property is inherited by default (subset).
/// Spec: Section 7.2 — Inheritance
pub fn is_inherited_property(property_name: &str) -> bool {
    matches!(
        property_name.to_ascii_lowercase().as_str(),
        "font-size" | "font-family" | "color"
    )
}
