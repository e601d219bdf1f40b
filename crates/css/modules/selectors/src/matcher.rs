//! CSS selector matching.
//! Spec: <https://www.w3.org/TR/selectors-3/>

use crate::{
    AttrOperator, ElementAdapter, RawSelector, SimpleSelector, Specificity, parse_raw_selector,
    specificity_of,
};

/// Match a simple selector against a single element.
/// Spec: Section 5–8
pub fn matches_simple<A: ElementAdapter + ?Sized>(adapter: &A, selector: &SimpleSelector) -> bool {
    match selector {
        SimpleSelector::Universal => true,
        SimpleSelector::Empty => false,
        SimpleSelector::Type(type_name) => adapter.tag_name().eq_ignore_ascii_case(type_name),
        SimpleSelector::Class(class_name) => adapter.has_class(class_name),
        SimpleSelector::IdSelector(id_value) => adapter
            .element_id()
            .is_some_and(|value| value == id_value.as_str()),
        SimpleSelector::Attribute {
            name,
            operator,
            value,
        } => adapter
            .attr(name)
            .is_some_and(|attr_value| attr_matches(*operator, attr_value, value)),
    }
}

/// Apply an attribute operator to an attribute's value.
/// Spec: Section 6.3 — Attribute selectors
fn attr_matches(operator: AttrOperator, attr_value: &str, expected: &str) -> bool {
    match operator {
        AttrOperator::Exists => true,
        AttrOperator::Equals => attr_value == expected,
        // An empty substring operand represents nothing (Section 6.3.2).
        AttrOperator::Contains => !expected.is_empty() && attr_value.contains(expected),
        AttrOperator::Prefix => !expected.is_empty() && attr_value.starts_with(expected),
        AttrOperator::Suffix => !expected.is_empty() && attr_value.ends_with(expected),
    }
}

/// Match a raw selector against an element.
#[inline]
pub fn matches_raw<A: ElementAdapter + ?Sized>(adapter: &A, selector: &RawSelector) -> bool {
    matches_simple(adapter, &parse_raw_selector(selector))
}

/// Match a selector group against an element.
///
/// Returns the highest specificity among the selectors that match, or `None`
/// when none do.
/// Spec: Section 4 — Groups of selectors
pub fn matching_specificity<A: ElementAdapter + ?Sized>(
    adapter: &A,
    selectors: &[RawSelector],
) -> Option<Specificity> {
    selectors
        .iter()
        .map(parse_raw_selector)
        .filter(|simple| matches_simple(adapter, simple))
        .map(|simple| specificity_of(&simple))
        .max()
}
