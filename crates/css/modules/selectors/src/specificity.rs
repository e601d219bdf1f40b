//! CSS selector specificity calculation.
//! Spec: <https://www.w3.org/TR/selectors-3/#specificity>

use serde::{Deserialize, Serialize};

use crate::SimpleSelector;

/// Specificity triple (a, b, c), ordered lexicographically.
/// Spec: Section 13 — Calculating a selector's specificity
///
/// Deserializes from either `{ "ids", "classes", "elements" }` or `[a, b, c]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "SpecificityRepr")]
pub struct Specificity {
    pub ids: u32,
    pub classes: u32,
    pub elements: u32,
}

/// Accepted wire shapes for a specificity.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpecificityRepr {
    Triple(u32, u32, u32),
    Named {
        #[serde(default)]
        ids: u32,
        #[serde(default)]
        classes: u32,
        #[serde(default)]
        elements: u32,
    },
}

impl From<SpecificityRepr> for Specificity {
    #[inline]
    fn from(repr: SpecificityRepr) -> Self {
        match repr {
            SpecificityRepr::Triple(ids, classes, elements)
            | SpecificityRepr::Named {
                ids,
                classes,
                elements,
            } => Self::new(ids, classes, elements),
        }
    }
}

impl Specificity {
    /// Zero specificity (universal selector, user-agent defaults).
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Construct from counts.
    #[inline]
    pub const fn new(ids: u32, classes: u32, elements: u32) -> Self {
        Self {
            ids,
            classes,
            elements,
        }
    }
}

/// Compute the specificity of a simple selector.
/// Spec: Section 13 — Specificity (a, b, c)
pub const fn specificity_of(selector: &SimpleSelector) -> Specificity {
    match selector {
        SimpleSelector::IdSelector(_) => Specificity::new(1, 0, 0),
        SimpleSelector::Class(_) | SimpleSelector::Attribute { .. } => Specificity::new(0, 1, 0),
        SimpleSelector::Type(_) => Specificity::new(0, 0, 1),
        SimpleSelector::Universal | SimpleSelector::Empty => Specificity::ZERO,
    }
}
