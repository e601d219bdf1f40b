//! Configuration for render-tree building.
//!
//! Configuration can be constructed programmatically, deserialized, or loaded
//! from `RENDER_*` environment variables.

use std::collections::BTreeSet;
use std::env;

use css_cascade::CascadeOptions;
use serde::{Deserialize, Serialize};

/// Default viewport width in CSS pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
/// Default viewport height in CSS pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 720;

/// Page viewport rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Options controlling style resolution and page output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Copy inherited properties from a supplied parent style.
    pub apply_inheritance: bool,
    /// Fill unset properties with built-in initial values.
    pub apply_defaults: bool,
    /// Substitute `var()` references instead of leaving them raw.
    pub resolve_variables: bool,
    /// Reserved; relative units are always kept as authored.
    pub resolve_relative_units: bool,
    /// Expand box shorthands into longhands during the cascade.
    pub shorthand_expansion: bool,
    /// Honour `style` attributes.
    pub apply_inline_styles: bool,
    /// Restrict the cascade to these properties; `None` admits all.
    pub supported_properties: Option<BTreeSet<String>>,
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Default for RenderConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl RenderConfig {
    /// Construct the default configuration.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            apply_inheritance: false,
            apply_defaults: true,
            resolve_variables: false,
            resolve_relative_units: false,
            shorthand_expansion: true,
            apply_inline_styles: true,
            supported_properties: None,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `RENDER_APPLY_INHERITANCE`, `RENDER_APPLY_DEFAULTS`, `RENDER_RESOLVE_VARIABLES`,
    ///   `RENDER_RESOLVE_RELATIVE_UNITS`, `RENDER_SHORTHAND_EXPANSION`, `RENDER_INLINE_STYLES`:
    ///   `1`/`true`/`yes` or `0`/`false`/`no`
    /// - `RENDER_VIEWPORT_WIDTH`, `RENDER_VIEWPORT_HEIGHT`: positive integers
    /// - `RENDER_SUPPORTED_PROPERTIES`: comma-separated property names
    ///
    /// Unset or unparseable variables keep their defaults.
    #[inline]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_vars<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let defaults = Self::new();
        let flag = |name: &str, fallback: bool| {
            lookup(name)
                .and_then(|raw| parse_flag(&raw))
                .unwrap_or(fallback)
        };
        let dimension = |name: &str, fallback: u32| {
            lookup(name)
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .filter(|pixels| *pixels > 0)
                .unwrap_or(fallback)
        };
        let supported_properties = lookup("RENDER_SUPPORTED_PROPERTIES").and_then(|raw| {
            let names: BTreeSet<String> = raw
                .split(',')
                .map(|name| name.trim().to_ascii_lowercase())
                .filter(|name| !name.is_empty())
                .collect();
            (!names.is_empty()).then_some(names)
        });
        Self {
            apply_inheritance: flag("RENDER_APPLY_INHERITANCE", defaults.apply_inheritance),
            apply_defaults: flag("RENDER_APPLY_DEFAULTS", defaults.apply_defaults),
            resolve_variables: flag("RENDER_RESOLVE_VARIABLES", defaults.resolve_variables),
            resolve_relative_units: flag(
                "RENDER_RESOLVE_RELATIVE_UNITS",
                defaults.resolve_relative_units,
            ),
            shorthand_expansion: flag("RENDER_SHORTHAND_EXPANSION", defaults.shorthand_expansion),
            apply_inline_styles: flag("RENDER_INLINE_STYLES", defaults.apply_inline_styles),
            supported_properties,
            viewport_width: dimension("RENDER_VIEWPORT_WIDTH", defaults.viewport_width),
            viewport_height: dimension("RENDER_VIEWPORT_HEIGHT", defaults.viewport_height),
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Restrict the cascade to the given property names.
    #[must_use]
    pub fn with_supported_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.supported_properties = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    /// Viewport descriptor anchored at the origin.
    #[inline]
    pub const fn viewport(&self) -> Viewport {
        Viewport {
            x: 0,
            y: 0,
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    /// The subset of options the cascade consumes.
    pub fn cascade_options(&self) -> CascadeOptions {
        CascadeOptions {
            apply_defaults: self.apply_defaults,
            apply_inheritance: self.apply_inheritance,
            resolve_variables: self.resolve_variables,
            shorthand_expansion: self.shorthand_expansion,
            apply_inline_styles: self.apply_inline_styles,
            supported_properties: self.supported_properties.clone(),
        }
    }
}

/// Parse a boolean environment flag.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
