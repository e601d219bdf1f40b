//! Ordering of competing declarations.
//! Spec: <https://www.w3.org/TR/css-cascade-4/#cascade-sort>

use core::cmp::Ordering;

use css_selectors::Specificity;

use crate::Origin;

/// Priority tuple used to order declarations in the cascade.
/// Spec: Section 6.1 — Cascade sorting order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadePriority {
    /// Spec: Section 6.4 — Importance
    pub important: bool,
    /// Spec: Section 6.2 — Cascading origins
    pub origin: Origin,
    /// Declared in the element's `style` attribute.
    /// Spec: Section 6.1 — Element-attached styles
    pub inline: bool,
    /// Spec: Selectors Level 3, Section 9
    pub specificity: Specificity,
    /// Position of the rule in its input sequence; inline styles sort after every rule.
    pub source_order: u32,
}

impl CascadePriority {
    /// Priority of a declaration coming from a selector-matched rule.
    #[inline]
    pub const fn rule(
        origin: Origin,
        important: bool,
        specificity: Specificity,
        source_order: u32,
    ) -> Self {
        Self {
            important,
            origin,
            inline: false,
            specificity,
            source_order,
        }
    }

    /// Priority of a declaration from a `style` attribute.
    #[inline]
    pub const fn inline(important: bool, source_order: u32) -> Self {
        Self {
            important,
            origin: Origin::Author,
            inline: true,
            specificity: Specificity::ZERO,
            source_order,
        }
    }

    /// Whether `self` replaces `previous` when both target the same property.
    ///
    /// Identical priorities resolve to the later-processed declaration.
    #[inline]
    pub fn wins_over(&self, previous: &Self) -> bool {
        compare_priority(self, previous) != Ordering::Less
    }
}

/// Compare two priorities; `Ordering::Greater` means `left` wins over `right`.
///
/// Order: importance, origin, inline, specificity, source order.
/// Spec: Section 6.1 — Cascade sorting order
pub fn compare_priority(left: &CascadePriority, right: &CascadePriority) -> Ordering {
    left.important
        .cmp(&right.important)
        .then_with(|| left.origin.rank().cmp(&right.origin.rank()))
        .then_with(|| left.inline.cmp(&right.inline))
        .then_with(|| left.specificity.cmp(&right.specificity))
        .then_with(|| left.source_order.cmp(&right.source_order))
}
