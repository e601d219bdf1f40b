//! CSS Custom Properties for Cascading Variables Module Level 1 — `var()` references.
//! Spec: <https://www.w3.org/TR/css-variables-1/>

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

/// Custom properties visible to an element.
/// Keys are property names (including the leading `--`); values are raw token strings.
pub type CustomProperties = BTreeMap<String, String>;

/// Opening of a variable reference.
const VAR_OPEN: &str = "var(";

/// Whether a property name is a custom property (`--*`).
///
/// Spec: <https://www.w3.org/TR/css-variables-1/#custom-property>
#[inline]
pub fn is_custom_property(name: &str) -> bool {
    name.starts_with("--")
}

/// Whether a value contains at least one `var()` reference.
#[inline]
pub fn contains_var_reference(value: &str) -> bool {
    value.to_ascii_lowercase().contains(VAR_OPEN)
}

/// Where `var()` lookups search: the element's own custom properties, then its parent's.
#[derive(Clone, Copy, Debug)]
pub struct VarScope<'scope> {
    pub current: &'scope CustomProperties,
    pub inherited: Option<&'scope CustomProperties>,
}

impl<'scope> VarScope<'scope> {
    /// Look a custom property up, own scope first.
    fn lookup(&self, name: &str) -> Option<&'scope str> {
        self.current
            .get(name)
            .or_else(|| self.inherited.and_then(|parent| parent.get(name)))
            .map(String::as_str)
    }
}

/// Resolve every `var()` reference within a value.
///
/// - Supports `var(--name)` and `var(--name, fallback)`, with nested references in
///   both the referenced value and the fallback.
/// - A reference that is part of a cycle is treated as missing.
/// - Returns `None` when any reference resolves to neither a value nor a fallback,
///   which makes the whole declaration invalid at computed-value time.
/// - An unterminated `var(` is preserved verbatim.
///
/// Spec: <https://www.w3.org/TR/css-variables-1/#using-variables>
pub fn resolve_vars_in_value(value_text: &str, scope: VarScope<'_>) -> Option<String> {
    resolve_vars_internal(value_text, scope, &mut Vec::new())
}

/// Recursive resolver carrying the resolution stack for cycle detection.
///
/// Spec: <https://www.w3.org/TR/css-variables-1/#cycles>
fn resolve_vars_internal(
    value_text: &str,
    scope: VarScope<'_>,
    stack: &mut Vec<String>,
) -> Option<String> {
    let Some(open_at) = value_text.to_ascii_lowercase().find(VAR_OPEN) else {
        return Some(value_text.to_owned());
    };
    let (head, from_open) = value_text.split_at(open_at);
    let after_open = from_open.get(VAR_OPEN.len()..)?;
    let Some(close_at) = matching_close_paren(after_open) else {
        return Some(value_text.to_owned());
    };
    let (args_text, close_and_tail) = after_open.split_at(close_at);
    let tail = close_and_tail.get(1..)?;
    let replacement = resolve_single_var(args_text, scope, stack)?;
    let resolved_tail = resolve_vars_internal(tail, scope, stack)?;
    Some([head, replacement.as_str(), resolved_tail.as_str()].concat())
}

/// Byte offset of the `)` closing an already-opened parenthesis.
fn matching_close_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, character) in text.char_indices() {
        match character {
            '(' => depth = depth.saturating_add(1),
            ')' if depth == 0 => return Some(offset),
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Resolve a single `var()` argument string like `--name` or `--name, fallback`.
///
/// Spec: <https://www.w3.org/TR/css-variables-1/#using-variables>
fn resolve_single_var(
    args_text: &str,
    scope: VarScope<'_>,
    stack: &mut Vec<String>,
) -> Option<String> {
    let (name_text, fallback_text) = match args_text.split_once(',') {
        Some((first, second)) => (first.trim(), Some(second.trim())),
        None => (args_text.trim(), None),
    };
    let in_cycle = stack.iter().any(|entry| entry == name_text);
    if is_custom_property(name_text) && !in_cycle {
        if let Some(referenced) = scope.lookup(name_text) {
            stack.push(name_text.to_owned());
            let expanded = resolve_vars_internal(referenced, scope, stack);
            stack.pop();
            if expanded.is_some() {
                return expanded;
            }
        }
    }
    fallback_text.and_then(|fallback_src| resolve_vars_internal(fallback_src, scope, stack))
}
