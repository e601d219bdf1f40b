//! CSS Style Attributes — style="..." attribute processing.
//! Spec: <https://www.w3.org/TR/css-style-attr/>

#![forbid(unsafe_code)]

/// A single CSS declaration parsed from a style attribute.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineDeclaration {
    /// Property name normalized to ASCII lowercase as per CSS case-insensitivity.
    pub property: String,
    /// Raw value trimmed of surrounding whitespace and of any `!important` flag.
    pub value: String,
    /// Whether the declaration carried `!important`.
    pub important: bool,
}

/// Parse the value of a `style` attribute into declarations, in source order.
///
/// This performs a minimal, resilient parse:
/// - Splits on semicolons (`;`) into declaration items.
/// - For each item, splits on the first colon (`:`) into property and value.
/// - Recognizes a trailing `!important` (case-insensitive, optional space after `!`).
/// - Skips empty or invalid items (no colon, empty property, or empty value).
///
/// Semicolons inside strings or functions are not special-cased.
///
/// Spec: <https://www.w3.org/TR/css-style-attr/#interpreting>
pub fn parse_style_attribute(input: &str) -> Vec<InlineDeclaration> {
    let mut out: Vec<InlineDeclaration> = Vec::new();
    for raw_item in input.split(';') {
        let item = raw_item.trim_matches(is_ascii_whitespace);
        let Some((raw_prop, raw_value)) = item.split_once(':') else {
            continue;
        };
        let property_text = raw_prop.trim_matches(is_ascii_whitespace);
        let (value_text, important) = split_important(raw_value);
        if property_text.is_empty() || value_text.is_empty() {
            continue;
        }
        out.push(InlineDeclaration {
            property: property_text.to_ascii_lowercase(),
            value: value_text.to_owned(),
            important,
        });
    }
    out
}

/// Separate a trailing `!important` from a declaration value.
///
/// Spec: <https://www.w3.org/TR/css-cascade-4/#importance>
pub fn split_important(raw_value: &str) -> (&str, bool) {
    let trimmed = raw_value.trim_matches(is_ascii_whitespace);
    match trimmed.rsplit_once('!') {
        Some((head, flag))
            if flag
                .trim_matches(is_ascii_whitespace)
                .eq_ignore_ascii_case("important") =>
        {
            (head.trim_matches(is_ascii_whitespace), true)
        }
        _ => (trimmed, false),
    }
}

/// ASCII whitespace per CSS Syntax (TAB, LF, FF, CR, SPACE).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#whitespace>
const fn is_ascii_whitespace(character: char) -> bool {
    matches!(
        character,
        '\u{0009}' | '\u{000A}' | '\u{000C}' | '\u{000D}' | '\u{0020}'
    )
}
