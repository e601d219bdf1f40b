//! Raw selector literal parsing.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::{AttrOperator, RawSelector, SelectorKind, SimpleSelector};

/// Operator tokens in match order; two-character operators before `=`.
const ATTR_OPERATORS: [(&str, AttrOperator); 4] = [
    ("*=", AttrOperator::Contains),
    ("^=", AttrOperator::Prefix),
    ("$=", AttrOperator::Suffix),
    ("=", AttrOperator::Equals),
];

/// Infer a selector kind from the literal's leading character.
pub fn infer_kind(raw: &str) -> SelectorKind {
    match raw.trim_start().as_bytes().first() {
        Some(b'.') => SelectorKind::Class,
        Some(b'#') => SelectorKind::Id,
        Some(b'[') => SelectorKind::Attribute,
        _ => SelectorKind::Tag,
    }
}

/// Strip surrounding single or double quotes from an attribute value.
fn unquote(value: &str) -> &str {
    let trimmed = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    trimmed
}

/// Parse an attribute literal: `[name]`, `[name=value]`, `name*=value`, ...
fn parse_attribute(literal: &str) -> SimpleSelector {
    let inner = literal.strip_prefix('[').unwrap_or(literal);
    let inner = inner.strip_suffix(']').unwrap_or(inner).trim();
    let (name, operator, value) = ATTR_OPERATORS
        .iter()
        .find_map(|&(token, operator)| {
            inner
                .split_once(token)
                .map(|(name, value)| (name.trim(), operator, unquote(value)))
        })
        .unwrap_or((inner, AttrOperator::Exists, ""));
    if name.is_empty() {
        return SimpleSelector::Empty;
    }
    SimpleSelector::Attribute {
        name: name.to_ascii_lowercase(),
        operator,
        value: value.to_owned(),
    }
}

/// Parse a raw selector into a simple selector (permissive; never fails).
/// Spec: Section 5–8 — simple selectors
pub fn parse_raw_selector(selector: &RawSelector) -> SimpleSelector {
    let literal = selector.raw.trim();
    let name_or_empty = |name: &str, build: fn(String) -> SimpleSelector| {
        if name.is_empty() {
            SimpleSelector::Empty
        } else {
            build(name.to_owned())
        }
    };
    match selector.effective_kind() {
        SelectorKind::Tag if literal == "*" => SimpleSelector::Universal,
        SelectorKind::Tag => name_or_empty(&literal.to_ascii_lowercase(), SimpleSelector::Type),
        SelectorKind::Class => name_or_empty(
            literal.strip_prefix('.').unwrap_or(literal),
            SimpleSelector::Class,
        ),
        SelectorKind::Id => name_or_empty(
            literal.strip_prefix('#').unwrap_or(literal),
            SimpleSelector::IdSelector,
        ),
        SelectorKind::Attribute => parse_attribute(literal),
    }
}
