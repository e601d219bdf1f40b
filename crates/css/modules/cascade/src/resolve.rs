//! Per-element cascade: collect matching declarations, pick winners, then
//! apply inheritance, `var()` substitution and initial values.
//! Spec: <https://www.w3.org/TR/css-cascade-4/#cascading>

use core::cmp::Ordering;
use std::collections::BTreeMap;

use css_selectors::{ElementAdapter, matching_specificity};
use css_style_attr::{parse_style_attribute, split_important};
use css_variables::{VarScope, contains_var_reference, is_custom_property, resolve_vars_in_value};
use log::{debug, trace};

use crate::defaults::{INITIAL_VALUES, initial_value, is_inherited_property};
use crate::shorthand::{SHORTHAND_LONGHANDS, expand_shorthand};
use crate::{
    CascadeOptions, CascadePriority, ResolvedStyle, ResolvedValue, StyleRule, compare_priority,
};

/// A declaration competing for a property.
#[derive(Clone, Debug)]
struct Candidate {
    value: String,
    priority: CascadePriority,
    /// Offer count at the time of declaring; orders declarations within a rule.
    sequence: usize,
}

impl Candidate {
    /// Whether a shorthand declared as `self` overrides the longhand `other`.
    fn overrides(&self, other: &Self) -> bool {
        match compare_priority(&self.priority, &other.priority) {
            Ordering::Greater => true,
            Ordering::Equal => self.sequence > other.sequence,
            Ordering::Less => false,
        }
    }
}

/// Winning candidates keyed by property name.
struct CandidateSet<'options> {
    options: &'options CascadeOptions,
    winners: BTreeMap<String, Candidate>,
    offered: usize,
}

impl<'options> CandidateSet<'options> {
    const fn new(options: &'options CascadeOptions) -> Self {
        Self {
            options,
            winners: BTreeMap::new(),
            offered: 0,
        }
    }

    /// Offer a declaration; shorthands also offer their longhands at the same priority.
    fn offer(&mut self, property: &str, value: &str, priority: CascadePriority) {
        let name = normalize_property(property);
        if name.is_empty() || value.is_empty() || !self.options.accepts(&name) {
            return;
        }
        self.offered = self.offered.saturating_add(1);
        if self.options.shorthand_expansion {
            if let Some(longhands) = expand_shorthand(&name, value) {
                for (longhand, side_value) in longhands {
                    self.put(longhand.to_owned(), side_value, priority);
                }
            }
        }
        self.put(name, value, priority);
    }

    /// Insert a candidate if it wins over any existing one.
    fn put(&mut self, name: String, value: &str, priority: CascadePriority) {
        if !self.options.accepts(&name) {
            return;
        }
        let should_insert = self
            .winners
            .get(&name)
            .is_none_or(|previous| priority.wins_over(&previous.priority));
        if should_insert {
            self.winners.insert(
                name,
                Candidate {
                    value: value.to_owned(),
                    priority,
                    sequence: self.offered,
                },
            );
        }
    }

    /// Remove longhands whose shorthand won with a higher priority, so
    /// consumers may let any remaining longhand refine its shorthand.
    fn drop_overridden_longhands(&mut self) {
        for &(shorthand, longhands) in SHORTHAND_LONGHANDS {
            let Some(winner) = self.winners.get(shorthand).cloned() else {
                continue;
            };
            for &longhand in longhands {
                let overridden = self
                    .winners
                    .get(longhand)
                    .is_some_and(|candidate| winner.overrides(candidate));
                if overridden {
                    trace!("cascade: {shorthand} overrides {longhand}");
                    self.winners.remove(longhand);
                }
            }
        }
    }

    fn into_style(mut self) -> ResolvedStyle {
        self.drop_overridden_longhands();
        self.winners
            .into_iter()
            .map(|(name, candidate)| {
                trace!(
                    "cascade winner {name}: {} (important={}, specificity={:?}, order={})",
                    candidate.value,
                    candidate.priority.important,
                    candidate.priority.specificity,
                    candidate.priority.source_order
                );
                let resolved = ResolvedValue {
                    value: candidate.value,
                    important: candidate.priority.important,
                    specificity: candidate.priority.specificity,
                    origin: candidate.priority.origin,
                };
                (name, resolved)
            })
            .collect()
    }
}

/// Property names are ASCII case-insensitive; custom property names are not.
fn normalize_property(property: &str) -> String {
    let trimmed = property.trim();
    if is_custom_property(trimmed) {
        trimmed.to_owned()
    } else {
        trimmed.to_ascii_lowercase()
    }
}

/// Clamp a sequence position into the priority's source-order range.
fn order_index(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

/// Resolve the style of one element against an ordered rule sequence.
///
/// A rule applies when any of its selectors matches. Declarations compete by
/// importance, origin, inline-ness, specificity and rule position; equal
/// priorities go to the declaration processed last. `parent` feeds inheritance
/// and `var()` lookups when those options are enabled.
///
/// Spec: Section 6 — Cascading
pub fn resolve<A: ElementAdapter + ?Sized>(
    element: &A,
    rules: &[StyleRule],
    options: &CascadeOptions,
    parent: Option<&ResolvedStyle>,
) -> ResolvedStyle {
    let mut candidates = CandidateSet::new(options);
    let mut matched_rules = 0usize;
    for (position, rule) in rules.iter().enumerate() {
        let Some(matched) = matching_specificity(element, &rule.selectors) else {
            continue;
        };
        matched_rules = matched_rules.saturating_add(1);
        let specificity = rule.specificity.unwrap_or(matched);
        let source_order = order_index(position);
        for declaration in &rule.declarations {
            let (value, flagged) = split_important(&declaration.raw_value);
            let priority = CascadePriority::rule(
                rule.origin,
                declaration.important || flagged,
                specificity,
                source_order,
            );
            candidates.offer(&declaration.property, value, priority);
        }
    }
    if options.apply_inline_styles {
        if let Some(style_attribute) = element.attr("style") {
            let source_order = order_index(rules.len());
            for inline in parse_style_attribute(style_attribute) {
                let priority = CascadePriority::inline(inline.important, source_order);
                candidates.offer(&inline.property, &inline.value, priority);
            }
        }
    }
    debug!(
        "cascade <{}>: {matched_rules} of {} rules matched",
        element.tag_name(),
        rules.len()
    );
    complete_style(candidates.into_style(), options, parent)
}

/// Remove longhands of a pre-resolved map whose shorthand outranks them by
/// importance, origin and specificity.
pub fn drop_outranked_longhands(mut style: ResolvedStyle) -> ResolvedStyle {
    let view = &style;
    let outranked: Vec<&str> = SHORTHAND_LONGHANDS
        .iter()
        .flat_map(|&(shorthand, longhands)| {
            longhands
                .iter()
                .copied()
                .filter(move |longhand| view.shorthand_outranks(shorthand, longhand))
        })
        .collect();
    let properties = style.properties_mut();
    for longhand in outranked {
        properties.remove(longhand);
    }
    style
}

/// Finish a declared style: drop unsupported properties, inherit from `parent`,
/// substitute `var()` references and fill initial values, as enabled by `options`.
///
/// Also used for styles supplied pre-resolved by the caller.
/// Spec: Section 7 — Defaulting
pub fn complete_style(
    mut style: ResolvedStyle,
    options: &CascadeOptions,
    parent: Option<&ResolvedStyle>,
) -> ResolvedStyle {
    let inherited_from = parent.filter(|_| options.apply_inheritance);
    let properties = style.properties_mut();
    properties.retain(|name, _| options.accepts(name));

    if let Some(parent_style) = inherited_from {
        for (name, value) in parent_style
            .iter()
            .filter(|(name, _)| is_inherited_property(name))
        {
            properties
                .entry(name.clone())
                .or_insert_with(|| value.clone());
        }
    }

    if options.resolve_variables {
        substitute_variables(&mut style, inherited_from);
    }

    if options.apply_defaults {
        let properties = style.properties_mut();
        for &(name, value) in INITIAL_VALUES {
            if options.accepts(name) {
                properties
                    .entry(name.to_owned())
                    .or_insert_with(|| ResolvedValue::user_agent(value));
            }
        }
    }
    style
}

/// Replace `var()` references in every regular property.
///
/// A value that cannot be resolved is invalid at computed-value time: it falls
/// back to the parent's value for inherited properties, then to the initial
/// value, and is removed when neither exists.
/// Spec: CSS Variables Level 1, Section 3.1 — Invalid variables
fn substitute_variables(style: &mut ResolvedStyle, parent: Option<&ResolvedStyle>) {
    let own_custom = style.custom_properties();
    let parent_custom = parent.map(ResolvedStyle::custom_properties);
    let scope = VarScope {
        current: &own_custom,
        inherited: parent_custom.as_ref(),
    };
    let properties = style.properties_mut();
    let pending: Vec<String> = properties
        .iter()
        .filter(|(name, resolved)| {
            !is_custom_property(name) && contains_var_reference(&resolved.value)
        })
        .map(|(name, _)| name.clone())
        .collect();
    for name in pending {
        let Some(current) = properties.get(&name).map(|resolved| resolved.value.clone()) else {
            continue;
        };
        if let Some(substituted) = resolve_vars_in_value(&current, scope) {
            if let Some(entry) = properties.get_mut(&name) {
                entry.value = substituted;
            }
            continue;
        }
        let inherited = parent
            .filter(|_| is_inherited_property(&name))
            .and_then(|parent_style| parent_style.get(&name))
            .cloned();
        let replacement =
            inherited.or_else(|| initial_value(&name).map(ResolvedValue::user_agent));
        debug!("unresolved var() in {name}; falling back to {replacement:?}");
        match replacement {
            Some(value) => {
                properties.insert(name, value);
            }
            None => {
                properties.remove(&name);
            }
        }
    }
}
