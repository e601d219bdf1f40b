#![cfg(test)]

use core::error::Error;
use css_orchestrator::{RenderConfig, Viewport};
use std::collections::HashMap;

#[test]
fn defaults_match_documented_values() {
    let config = RenderConfig::default();
    assert!(!config.apply_inheritance);
    assert!(config.apply_defaults);
    assert!(!config.resolve_variables);
    assert!(!config.resolve_relative_units);
    assert!(config.shorthand_expansion);
    assert!(config.apply_inline_styles);
    assert!(config.supported_properties.is_none());
    assert_eq!(
        config.viewport(),
        Viewport {
            x: 0,
            y: 0,
            width: 1280,
            height: 720
        }
    );
}

#[test]
fn variables_override_defaults() {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("RENDER_APPLY_INHERITANCE", "true"),
        ("RENDER_APPLY_DEFAULTS", "0"),
        ("RENDER_SHORTHAND_EXPANSION", "maybe"),
        ("RENDER_VIEWPORT_WIDTH", "1920"),
        ("RENDER_VIEWPORT_HEIGHT", "0"),
        ("RENDER_SUPPORTED_PROPERTIES", "Color, width,,"),
    ]);
    let config = RenderConfig::from_vars(|name| vars.get(name).map(|value| (*value).to_owned()));
    assert!(config.apply_inheritance);
    assert!(!config.apply_defaults);
    assert!(config.shorthand_expansion);
    assert_eq!(config.viewport_width, 1920);
    assert_eq!(config.viewport_height, 720);
    let supported = config.supported_properties.unwrap_or_default();
    assert_eq!(supported.len(), 2);
    assert!(supported.contains("color"));

    let options = RenderConfig::from_vars(|name| vars.get(name).map(|value| (*value).to_owned()))
        .cascade_options();
    assert!(options.apply_inheritance);
    assert!(!options.apply_defaults);
}

#[test]
fn partial_config_deserializes_over_defaults() -> Result<(), Box<dyn Error>> {
    let config: RenderConfig =
        serde_json::from_str(r#"{ "resolve_variables": true, "viewport_width": 640 }"#)?;
    assert!(config.resolve_variables);
    assert!(config.apply_defaults);
    assert_eq!(config.viewport_width, 640);
    assert_eq!(config.viewport_height, 720);
    Ok(())
}
