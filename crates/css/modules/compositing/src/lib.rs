//! Compositing attributes and stacking-context determination.
//! Spec: <https://www.w3.org/TR/CSS22/visuren.html#z-index>
//!
//! An element establishes a stacking context when it is positioned with an
//! integer `z-index`, when its opacity is below one, or when it carries a
//! transform.

#![forbid(unsafe_code)]

use css_cascade::ResolvedStyle;
use css_values_units::{TransformList, parse_opacity, parse_transform, parse_z_index};
use serde::Serialize;

/// Why an element establishes a stacking context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StackingContextReason {
    /// `position` other than `static` with an integer `z-index`.
    /// Spec: <https://www.w3.org/TR/CSS22/visuren.html#z-index>
    PositionedWithZIndex,
    /// `opacity` below one.
    /// Spec: <https://www.w3.org/TR/css-color-3/#transparency>
    Opacity,
    /// A transform function list.
    /// Spec: <https://www.w3.org/TR/css-transforms-1/#transform-rendering>
    Transform,
}

/// Compositing attributes of one element.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Composite {
    /// `None` for `auto` or anything non-integral.
    pub z_index: Option<i32>,
    pub opacity: f64,
    pub transform: TransformList,
    pub stacking_context: bool,
    /// Every trigger that applied, in a fixed order.
    pub reasons: Vec<StackingContextReason>,
}

/// Whether a `position` keyword takes the element out of static positioning.
fn is_positioned(position: &str) -> bool {
    !position.trim().eq_ignore_ascii_case("static")
}

/// Compute compositing attributes of a resolved style.
///
/// Unset `position` reads as `static`, unset or invalid `opacity` as one.
pub fn compute_composite(style: &ResolvedStyle) -> Composite {
    let z_index = style.value("z-index").and_then(parse_z_index);
    let opacity = style
        .value("opacity")
        .and_then(parse_opacity)
        .unwrap_or(1.0);
    let transform = style
        .value("transform")
        .map(parse_transform)
        .unwrap_or_default();
    let positioned = style.value("position").is_some_and(is_positioned);

    let mut reasons = Vec::new();
    if positioned && z_index.is_some() {
        reasons.push(StackingContextReason::PositionedWithZIndex);
    }
    if opacity < 1.0 {
        reasons.push(StackingContextReason::Opacity);
    }
    if transform.has_transform {
        reasons.push(StackingContextReason::Transform);
    }
    Composite {
        z_index,
        opacity,
        transform,
        stacking_context: !reasons.is_empty(),
        reasons,
    }
}
