//! Cascade inputs (rules, declarations) and outputs (resolved per-property values).
//! Spec: <https://www.w3.org/TR/css-cascade-4/#cascading>

use core::fmt;
use std::collections::BTreeMap;
use std::collections::btree_map;

use css_selectors::{RawSelector, Specificity};
use css_variables::{CustomProperties, is_custom_property};
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Style origin.
/// Spec: Section 6.2 — Cascading origins
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    UserAgent,
    User,
    #[default]
    Author,
}

impl Origin {
    /// UA < User < Author.
    #[inline]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::UserAgent => 0,
            Self::User => 1,
            Self::Author => 2,
        }
    }
}

/// A single `property: value [!important]` pair from a rule.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    #[serde(rename = "value", alias = "raw_value", deserialize_with = "text_or_number")]
    pub raw_value: String,
    #[serde(default, deserialize_with = "lenient")]
    pub important: bool,
}

impl Declaration {
    #[inline]
    pub fn new(property: &str, raw_value: &str) -> Self {
        Self {
            property: property.to_owned(),
            raw_value: raw_value.to_owned(),
            important: false,
        }
    }

    #[inline]
    pub fn important(property: &str, raw_value: &str) -> Self {
        Self {
            important: true,
            ..Self::new(property, raw_value)
        }
    }
}

/// A selector group with its declarations.
///
/// `specificity` may be supplied by the stylesheet collaborator; when absent the
/// highest specificity among the selectors that match the element is used.
///
/// Selectors and declarations that cannot be read are skipped; a mistyped
/// `specificity` or `origin` reads as absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleRule {
    #[serde(default, deserialize_with = "readable_selectors")]
    pub selectors: Vec<RawSelector>,
    #[serde(default, deserialize_with = "readable_entries")]
    pub declarations: Vec<Declaration>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub specificity: Option<Specificity>,
    #[serde(default, deserialize_with = "lenient")]
    pub origin: Origin,
}

impl StyleRule {
    /// An author rule with inferred specificity.
    #[inline]
    pub fn new(selectors: Vec<RawSelector>, declarations: Vec<Declaration>) -> Self {
        Self {
            selectors,
            declarations,
            specificity: None,
            origin: Origin::Author,
        }
    }

    /// Pin the rule's specificity instead of deriving it from its selectors.
    #[inline]
    #[must_use]
    pub const fn with_specificity(mut self, specificity: Specificity) -> Self {
        self.specificity = Some(specificity);
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = origin;
        self
    }
}

/// The winning value for one property, with the metadata it won with.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedValue {
    #[serde(deserialize_with = "text_or_number")]
    pub value: String,
    #[serde(default, deserialize_with = "lenient")]
    pub important: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub specificity: Specificity,
    #[serde(default, deserialize_with = "lenient")]
    pub origin: Origin,
}

impl ResolvedValue {
    /// A non-important author value with zero specificity.
    #[inline]
    pub fn declared(value: &str) -> Self {
        Self {
            value: value.to_owned(),
            important: false,
            specificity: Specificity::ZERO,
            origin: Origin::Author,
        }
    }

    /// Importance, origin and specificity, compared in that order.
    #[inline]
    fn rank(&self) -> (bool, u8, Specificity) {
        (self.important, self.origin.rank(), self.specificity)
    }

    /// A built-in initial value.
    #[inline]
    pub(crate) fn user_agent(value: &str) -> Self {
        Self {
            origin: Origin::UserAgent,
            ..Self::declared(value)
        }
    }
}

/// A declared value as text or as a bare JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl TextOrNumber {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(integer) => integer.to_string(),
            Self::Float(float) => float.to_string(),
        }
    }
}

/// Accept either `"value": "10px"` or `"value": 10`.
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    TextOrNumber::deserialize(deserializer).map(TextOrNumber::into_text)
}

/// A value of the expected type, or anything else (including `null`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Other(_) => None,
        }
    }
}

/// Deserialize `T`, substituting its default for `null` or a mistyped value.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Lenient::<T>::deserialize(deserializer)?
        .into_option()
        .unwrap_or_default())
}

/// A sequence whose unreadable entries are dropped; a non-sequence is empty.
fn readable_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Vec<Lenient<T>> = lenient(deserializer)?;
    Ok(entries.into_iter().filter_map(Lenient::into_option).collect())
}

/// A selector object, or a bare literal whose kind is inferred.
#[derive(Deserialize)]
#[serde(untagged)]
enum SelectorEntry {
    Literal(String),
    Object(RawSelector),
    Other(IgnoredAny),
}

fn readable_selectors<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<RawSelector>, D::Error> {
    let entries: Vec<SelectorEntry> = lenient(deserializer)?;
    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            SelectorEntry::Literal(literal) => Some(RawSelector::infer(&literal)),
            SelectorEntry::Object(selector) => Some(selector),
            SelectorEntry::Other(_) => None,
        })
        .collect())
}

/// Per-element cascade result: property name → winning value.
///
/// Read-only once built. Iteration is in property-name order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyle {
    properties: BTreeMap<String, ResolvedValue>,
}

impl ResolvedStyle {
    /// Build a style from `(property, value)` pairs as plain author values.
    pub fn from_values<'pair, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'pair str, &'pair str)>,
    {
        pairs
            .into_iter()
            .map(|(property, value)| (property.to_owned(), ResolvedValue::declared(value)))
            .collect()
    }

    #[inline]
    pub fn get(&self, property: &str) -> Option<&ResolvedValue> {
        self.properties.get(property)
    }

    /// The winning value text for a property.
    #[inline]
    pub fn value(&self, property: &str) -> Option<&str> {
        self.properties
            .get(property)
            .map(|resolved| resolved.value.as_str())
    }

    /// The value text when a rule or inline style set it, as opposed to an
    /// initial value filled in by defaulting.
    #[inline]
    pub fn authored(&self, property: &str) -> Option<&str> {
        self.properties
            .get(property)
            .filter(|resolved| resolved.origin != Origin::UserAgent)
            .map(|resolved| resolved.value.as_str())
    }

    #[inline]
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> btree_map::Iter<'_, String, ResolvedValue> {
        self.properties.iter()
    }

    /// Custom properties (`--*`) present in this style.
    pub fn custom_properties(&self) -> CustomProperties {
        self.properties
            .iter()
            .filter(|(name, _)| is_custom_property(name))
            .map(|(name, resolved)| (name.clone(), resolved.value.clone()))
            .collect()
    }

    /// Whether `shorthand`'s value outranks `longhand`'s by importance, origin
    /// and specificity. Equal ranks leave the longhand in place.
    pub fn shorthand_outranks(&self, shorthand: &str, longhand: &str) -> bool {
        match (self.get(shorthand), self.get(longhand)) {
            (Some(short), Some(long)) => short.rank() > long.rank(),
            _ => false,
        }
    }

    /// Mutable access stays inside the cascade.
    #[inline]
    pub(crate) const fn properties_mut(&mut self) -> &mut BTreeMap<String, ResolvedValue> {
        &mut self.properties
    }
}

impl FromIterator<(String, ResolvedValue)> for ResolvedStyle {
    #[inline]
    fn from_iter<I: IntoIterator<Item = (String, ResolvedValue)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl<'style> IntoIterator for &'style ResolvedStyle {
    type Item = (&'style String, &'style ResolvedValue);
    type IntoIter = btree_map::Iter<'style, String, ResolvedValue>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// One entry of a pre-resolved map: full metadata or just the value.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResolvedEntry {
    Full(ResolvedValue),
    Bare(TextOrNumber),
    Other(IgnoredAny),
}

struct ResolvedStyleVisitor;

impl<'de> Visitor<'de> for ResolvedStyleVisitor {
    type Value = ResolvedStyle;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map of property names to resolved values")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut properties = BTreeMap::new();
        while let Some((name, entry)) = access.next_entry::<String, ResolvedEntry>()? {
            let resolved = match entry {
                ResolvedEntry::Full(resolved) => resolved,
                ResolvedEntry::Bare(value) => ResolvedValue::declared(&value.into_text()),
                ResolvedEntry::Other(_) => continue,
            };
            properties.insert(name, resolved);
        }
        Ok(ResolvedStyle { properties })
    }
}

/// Entries that are neither a value object nor a bare string/number are skipped.
impl<'de> Deserialize<'de> for ResolvedStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResolvedStyleVisitor)
    }
}
