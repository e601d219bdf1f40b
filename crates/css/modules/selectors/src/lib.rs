//! Selectors Level 3 — Element matching and specificity.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This module implements the flat subset the style pipeline needs:
//! - Type (and universal), class, id, and attribute selectors
//! - Selector groups (a rule matches when any of its selectors matches)
//! - Specificity calculation
//!
//! Combinators, pseudo-classes, and pseudo-elements are not supported.

#![forbid(unsafe_code)]

mod matcher;
mod parser;
mod specificity;

pub use matcher::{matches_raw, matches_simple, matching_specificity};
pub use parser::{infer_kind, parse_raw_selector};
pub use specificity::{Specificity, specificity_of};

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// An adapter that abstracts element access for selector matching.
/// Implement this for your element representation.
///
/// Spec references:
/// - Section 3: Selectors overview and element matching
pub trait ElementAdapter {
    /// Tag name as authored; compared case-insensitively.
    /// Spec: Section 5 — Type selectors
    fn tag_name(&self) -> &str;

    /// Returns Some(id) if the element has a non-empty id, else None.
    /// Spec: Section 7 — ID selectors
    fn element_id(&self) -> Option<&str>;

    /// True if the element has the given class token.
    /// Spec: Section 6 — Class selectors
    fn has_class(&self, class: &str) -> bool;

    /// Returns the attribute value if present.
    /// Spec: Section 8 — Attribute selectors
    fn attr(&self, name: &str) -> Option<&str>;
}

/// How a raw selector literal is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    Tag,
    Class,
    Id,
    #[serde(alias = "attr", alias = "attribute-substring")]
    Attribute,
}

/// A selector as delivered by the stylesheet collaborator: a literal plus its kind.
///
/// When `kind` is absent or unrecognized it is inferred from the literal's
/// leading character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSelector {
    pub raw: String,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "known_kind"
    )]
    pub kind: Option<SelectorKind>,
}

/// A kind name this crate understands; anything else reads as absent.
fn known_kind<'de, D>(deserializer: D) -> Result<Option<SelectorKind>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KindEntry {
        Known(SelectorKind),
        Other(IgnoredAny),
    }
    Ok(match KindEntry::deserialize(deserializer)? {
        KindEntry::Known(kind) => Some(kind),
        KindEntry::Other(_) => None,
    })
}

impl RawSelector {
    /// A selector with an explicit kind.
    #[inline]
    pub fn new(kind: SelectorKind, raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            kind: Some(kind),
        }
    }

    /// A selector whose kind is inferred from the literal (`.a`, `#b`, `[c]`, `div`).
    #[inline]
    pub fn infer(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            kind: None,
        }
    }

    /// The explicit kind, or the one inferred from the literal.
    #[inline]
    pub fn effective_kind(&self) -> SelectorKind {
        self.kind.unwrap_or_else(|| infer_kind(&self.raw))
    }
}

/// Attribute selector operators.
/// Spec: Section 6.3 and 6.3.2 — Attribute presence, value, and substring selectors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttrOperator {
    /// `[name]`
    Exists,
    /// `[name=value]`
    Equals,
    /// `[name*=value]`
    Contains,
    /// `[name^=value]`
    Prefix,
    /// `[name$=value]`
    Suffix,
}

/// A parsed simple selector.
/// Spec: Section 5, 6, 7, 8
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SimpleSelector {
    /// Spec: Section 5 — Type selectors
    Type(String),
    /// Spec: Section 6 — Class selectors
    Class(String),
    /// Spec: Section 7 — ID selectors
    IdSelector(String),
    /// Spec: Section 8 — Attribute selectors
    Attribute {
        name: String,
        operator: AttrOperator,
        value: String,
    },
    /// Universal selector '*'. Matches every element.
    /// Spec: Section 5 — Universal selector
    Universal,
    /// A literal with nothing to match on (e.g. a bare `.`); never matches.
    Empty,
}
