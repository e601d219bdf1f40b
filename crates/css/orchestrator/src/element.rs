//! Markup elements as delivered by the document parser.

use std::collections::BTreeMap;

use css_selectors::ElementAdapter;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A parsed markup element. Read-only input to rendering.
///
/// Missing, `null` or mistyped fields deserialize to empty values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    #[serde(default, alias = "tagName", alias = "tag", deserialize_with = "lenient")]
    pub tag_name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    #[serde(
        default,
        alias = "classList",
        alias = "classes",
        deserialize_with = "class_tokens"
    )]
    pub class_list: Vec<String>,
    #[serde(default, alias = "attrs", deserialize_with = "lenient")]
    pub attributes: BTreeMap<String, String>,
}

impl Element {
    #[inline]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_owned(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        id.clone_into(&mut self.id);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.class_list.push(class.to_owned());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }
}

impl ElementAdapter for Element {
    #[inline]
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// The `id` field, or the `id` attribute when the field is empty.
    fn element_id(&self) -> Option<&str> {
        Some(self.id.as_str())
            .filter(|id| !id.is_empty())
            .or_else(|| self.attr("id").filter(|id| !id.is_empty()))
    }

    /// Looks in `class_list`, then in the whitespace-separated `class` attribute.
    fn has_class(&self, class: &str) -> bool {
        self.class_list.iter().any(|candidate| candidate == class)
            || self
                .attr("class")
                .is_some_and(|classes| classes.split_ascii_whitespace().any(|token| token == class))
    }

    /// Exact name first, then ASCII case-insensitive.
    fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .or_else(|| {
                self.attributes
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            })
            .map(String::as_str)
    }
}

/// A value of the expected type, or anything else (including `null`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Other(IgnoredAny),
}

/// Deserialize `T`, substituting its default for `null` or a mistyped value.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Valid(value) => value,
        Lenient::Other(_) => T::default(),
    })
}

/// Class list as an array of tokens or a single space-separated string.
fn class_tokens<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ClassList {
        Tokens(Vec<Option<String>>),
        Text(String),
        Other(IgnoredAny),
    }
    Ok(match ClassList::deserialize(deserializer)? {
        ClassList::Tokens(tokens) => tokens
            .into_iter()
            .flatten()
            .filter(|token| !token.is_empty())
            .collect(),
        ClassList::Text(text) => text.split_ascii_whitespace().map(str::to_owned).collect(),
        ClassList::Other(_) => Vec::new(),
    })
}
