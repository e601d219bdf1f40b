//! JSON boundary for callers that hold untyped element lists and rule sets.
//!
//! Shape violations (a non-array element list, a rule set that is neither an
//! array nor an object) are reported as errors. Individual fields inside
//! elements, rules and pre-resolved maps are lenient and never fail; entries
//! that cannot be read at all are skipped.

use anyhow::{Context as _, Result, bail};
use css_cascade::{ResolvedStyle, StyleRule};
use log::warn;
use serde::Deserialize as _;
use serde_json::Value;

use crate::{Element, RenderTreeBuilder, StyleSource};

/// Human-readable JSON type name for error messages.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Deserialize one element object.
fn element_from(value: &Value) -> Result<Element> {
    if !value.is_object() {
        bail!("element must be an object, got {}", json_kind(value));
    }
    Element::deserialize_value(value)
}

/// Deserialize an element list.
fn elements_from(value: &Value) -> Result<Vec<Element>> {
    let Value::Array(items) = value else {
        bail!("element list must be an array, got {}", json_kind(value));
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| element_from(item).with_context(|| format!("element #{index}")))
        .collect()
}

/// Deserialize a rule list from `[...]` or `{ "rules": [...] }`; `null` is no rules.
fn rules_from(value: &Value) -> Result<Vec<StyleRule>> {
    let rules = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(_) => value,
        Value::Object(map) => map
            .get("rules")
            .context("rule set object has no \"rules\" member")?,
        other => bail!(
            "rule set must be an array or an object, got {}",
            json_kind(other)
        ),
    };
    let Value::Array(items) = rules else {
        bail!("\"rules\" must be an array, got {}", json_kind(rules));
    };
    Ok(items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match StyleRule::deserialize(item) {
            Ok(rule) => Some(rule),
            Err(error) => {
                warn!("skipping unreadable rule #{index}: {error}");
                None
            }
        })
        .collect())
}

impl Element {
    /// Deserialize an element from a JSON value.
    ///
    /// # Errors
    /// Returns an error if `value` is not an object.
    pub fn deserialize_value(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone()).context("malformed element")
    }
}

impl RenderTreeBuilder {
    /// Render a page from JSON inputs and return the page as JSON.
    ///
    /// # Errors
    /// Returns an error if `elements` is not an array of objects or `rule_set`
    /// is neither a rule array nor an object with a `rules` array.
    pub fn render_page_json(&self, elements: &Value, rule_set: &Value) -> Result<Value> {
        let elements = elements_from(elements).context("invalid element list")?;
        let rules = rules_from(rule_set).context("invalid rule set")?;
        let page = self.render_page(&elements, &rules);
        serde_json::to_value(page).context("serializing page render")
    }

    /// Render one element from JSON inputs and return the node as JSON.
    ///
    /// `style` may be a rule array, an object with a `rules` array, a
    /// pre-resolved property map, or `null`.
    ///
    /// # Errors
    /// Returns an error if `element` is not an object or `style` has an
    /// unsupported shape.
    pub fn render_element_json(&self, element: &Value, style: &Value) -> Result<Value> {
        let element = element_from(element).context("invalid element")?;
        let node = match style {
            Value::Object(map) if !map.contains_key("rules") => {
                let resolved: ResolvedStyle = serde_json::from_value(style.clone())
                    .context("invalid pre-resolved style")?;
                self.render_element(&element, &StyleSource::Resolved(resolved))
            }
            _ => {
                let rules = rules_from(style).context("invalid rule set")?;
                self.render_element(&element, &StyleSource::Rules(&rules))
            }
        };
        serde_json::to_value(node).context("serializing render node")
    }
}
