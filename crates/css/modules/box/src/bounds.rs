//! Rectangle aggregation from a layout description.
//! Spec: <https://www.w3.org/TR/CSS22/box.html#box-dimensions>

use serde::Serialize;

use crate::Layout;

/// Content rectangle plus outer size including padding, border and margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub total_width: f64,
    pub total_height: f64,
}

/// Aggregate a layout into bounds.
///
/// Width and height count only `px` dimensions; anything else is zero. The
/// origin stays at `(0, 0)` since no placement is performed.
pub fn compute_bounds(layout: &Layout) -> Bounds {
    let width = layout.dimensions.width.as_px().unwrap_or(0.0);
    let height = layout.dimensions.height.as_px().unwrap_or(0.0);
    let box_model = &layout.box_model;
    let total_width = width
        + box_model.margin.horizontal_px()
        + box_model.border.horizontal_px()
        + box_model.padding.horizontal_px();
    let total_height = height
        + box_model.margin.vertical_px()
        + box_model.border.vertical_px()
        + box_model.padding.vertical_px();
    Bounds {
        x: 0.0,
        y: 0.0,
        width,
        height,
        total_width,
        total_height,
    }
}
