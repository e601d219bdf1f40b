//! Four-sided box shorthands (`margin`, `padding`, `border-width`).
//! Spec: <https://www.w3.org/TR/css-box-3/#margin-shorthand>

use serde::Serialize;

use crate::{ParsedValue, length::LengthValue, parse_length};

/// One physical side of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in shorthand (TRBL) order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Lowercase side name as used in longhand property names.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// A parsed box shorthand. Always carries all four sides.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BoxQuad {
    pub top: ParsedValue,
    pub right: ParsedValue,
    pub bottom: ParsedValue,
    pub left: ParsedValue,
}

impl Default for BoxQuad {
    #[inline]
    fn default() -> Self {
        Self::uniform(ParsedValue::Length(LengthValue::px(0.0)))
    }
}

impl BoxQuad {
    /// A quad with the same value on every side.
    pub fn uniform(value: ParsedValue) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }

    /// Value on the given side.
    #[inline]
    pub const fn side(&self, side: Side) -> &ParsedValue {
        match side {
            Side::Top => &self.top,
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// Replace the value on the given side.
    #[inline]
    pub fn set_side(&mut self, side: Side, value: ParsedValue) {
        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// Sum of the left and right sides in px; non-px sides count as zero.
    #[inline]
    pub fn horizontal_px(&self) -> f64 {
        self.left.as_px().unwrap_or(0.0) + self.right.as_px().unwrap_or(0.0)
    }

    /// Sum of the top and bottom sides in px; non-px sides count as zero.
    #[inline]
    pub fn vertical_px(&self) -> f64 {
        self.top.as_px().unwrap_or(0.0) + self.bottom.as_px().unwrap_or(0.0)
    }
}

/// Expand 1–4 whitespace-separated components into TRBL order.
///
/// 1 → all sides; 2 → vertical, horizontal; 3 → top, horizontal, bottom;
/// 4 → top, right, bottom, left. Any other count yields `None`.
pub fn expand_box_sides(raw: &str) -> Option<[&str; 4]> {
    let parts: Vec<&str> = raw.split_ascii_whitespace().collect();
    match *parts.as_slice() {
        [all] => Some([all; 4]),
        [vertical, horizontal] => Some([vertical, horizontal, vertical, horizontal]),
        [top, horizontal, bottom] => Some([top, horizontal, bottom, horizontal]),
        [top, right, bottom, left] => Some([top, right, bottom, left]),
        _ => None,
    }
}

/// Parse one side as a length, degrading to a keyword.
fn parse_side(text: &str) -> ParsedValue {
    parse_length(text).map_or_else(|| ParsedValue::keyword(text), ParsedValue::Length)
}

/// Parse a box shorthand into a quad.
///
/// A component count outside 1..=4 degrades every side to the raw keyword.
pub fn parse_box_quad(raw: &str) -> BoxQuad {
    expand_box_sides(raw).map_or_else(
        || BoxQuad::uniform(ParsedValue::keyword(raw)),
        |[top, right, bottom, left]| BoxQuad {
            top: parse_side(top),
            right: parse_side(right),
            bottom: parse_side(bottom),
            left: parse_side(left),
        },
    )
}
