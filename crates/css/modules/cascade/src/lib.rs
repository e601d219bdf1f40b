//! CSS Cascading and Inheritance Level 4 — Cascade, inheritance, and defaulting.
//! Spec: <https://www.w3.org/TR/css-cascade-4/>
//!
//! For one element, matching rule declarations are ranked by importance,
//! origin, inline-ness, specificity and source order; the winners form a
//! [`ResolvedStyle`]. Inheritance, `var()` substitution and initial values are
//! then applied according to [`CascadeOptions`].

#![forbid(unsafe_code)]

pub mod defaults;
mod model;
mod priority;
mod resolve;
pub mod shorthand;

pub use defaults::{INITIAL_VALUES, initial_value, is_inherited_property};
pub use model::{Declaration, Origin, ResolvedStyle, ResolvedValue, StyleRule};
pub use priority::{CascadePriority, compare_priority};
pub use resolve::{complete_style, drop_outranked_longhands, resolve};
pub use shorthand::{SHORTHAND_LONGHANDS, expand_shorthand, longhands_of};

use std::collections::BTreeSet;

use css_variables::is_custom_property;

/// Switches controlling one cascade run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CascadeOptions {
    /// Fill unset properties from [`INITIAL_VALUES`].
    pub apply_defaults: bool,
    /// Copy inherited properties from the parent style when unset.
    pub apply_inheritance: bool,
    /// Substitute `var()` references; when off they are left raw.
    pub resolve_variables: bool,
    /// Also write `margin`/`padding`/`border-width` longhands.
    pub shorthand_expansion: bool,
    /// Include declarations from the element's `style` attribute.
    pub apply_inline_styles: bool,
    /// Only these properties participate; `None` admits every property.
    pub supported_properties: Option<BTreeSet<String>>,
}

impl Default for CascadeOptions {
    #[inline]
    fn default() -> Self {
        Self {
            apply_defaults: true,
            apply_inheritance: false,
            resolve_variables: false,
            shorthand_expansion: true,
            apply_inline_styles: true,
            supported_properties: None,
        }
    }
}

impl CascadeOptions {
    /// Whether declarations for `property` take part in the cascade.
    /// Custom properties always do.
    #[inline]
    pub fn accepts(&self, property: &str) -> bool {
        is_custom_property(property)
            || self
                .supported_properties
                .as_ref()
                .is_none_or(|supported| supported.contains(property))
    }
}
