//! CSS Values & Units Level 3 — §4 Numbers, plus the integer and clamped
//! number forms used by `z-index` and `opacity`.
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

/// Parse a finite CSS <number>.
pub fn parse_number(raw: &str) -> Option<f64> {
    let number = raw.trim().parse::<f64>().ok()?;
    number.is_finite().then_some(number)
}

/// Parse an `opacity` value clamped into `[0.0, 1.0]`.
///
/// Accepts a number or a percentage.
/// Spec: <https://www.w3.org/TR/css-color-3/#transparency>
pub fn parse_opacity(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if let Some(percent_str) = trimmed.strip_suffix('%') {
        return parse_number(percent_str).map(|percent| (percent / 100.0).clamp(0.0, 1.0));
    }
    parse_number(trimmed).map(|number| number.clamp(0.0, 1.0))
}

/// Parse a `z-index` integer. `auto` and anything non-integral yield `None`.
/// Spec: <https://www.w3.org/TR/CSS22/visuren.html#z-index>
pub fn parse_z_index(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}
