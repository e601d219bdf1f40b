//! CSS Values & Units Level 3 — §5 Percentages and §6 Dimensions (lengths subset).
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>

use cssparser::{Parser, ParserInput, Token};
use serde::ser::{Serialize, SerializeStruct as _, Serializer};

use crate::numeric::parse_number;

/// Supported subset of CSS <length-percentage> units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Pixels,
    Percent,
    Ems,
    RootEms,
}

impl LengthUnit {
    /// Canonical unit text as authored in CSS.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pixels => "px",
            Self::Percent => "%",
            Self::Ems => "em",
            Self::RootEms => "rem",
        }
    }

    /// Map a dimension unit (case-insensitive) onto a supported unit.
    fn from_dimension(unit: &str) -> Option<Self> {
        match unit.to_ascii_lowercase().as_str() {
            "px" => Some(Self::Pixels),
            "em" => Some(Self::Ems),
            "rem" => Some(Self::RootEms),
            _ => None,
        }
    }
}

/// A CSS <length> or <percentage> with its unit preserved verbatim.
///
/// No resolution against a containing block or font size happens here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthValue {
    pub value: f64,
    pub unit: LengthUnit,
}

impl LengthValue {
    /// A pixel length.
    #[inline]
    pub const fn px(value: f64) -> Self {
        Self {
            value,
            unit: LengthUnit::Pixels,
        }
    }

    /// The pixel amount, or `None` for relative units.
    #[inline]
    pub fn as_px(&self) -> Option<f64> {
        (self.unit == LengthUnit::Pixels).then_some(self.value)
    }
}

impl Serialize for LengthValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Length", 3)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("unit", self.unit.as_str())?;
        state.serialize_field("type", "length")?;
        state.end()
    }
}

/// Parse a single CSS <length-percentage> (§5.1, §6.2).
///
/// Accepts an optional sign, digits with an optional fraction, and one of `px`, `%`,
/// `em`, `rem`. Unitless zero is a `0px` length. Keywords such as `auto` and any
/// trailing tokens make this return `None`.
///
/// The numeric part is re-read from the source slice so values keep full `f64`
/// precision rather than the tokenizer's `f32`.
pub fn parse_length(raw: &str) -> Option<LengthValue> {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let start = parser.position();
    let token = parser.next().ok()?.clone();
    let source = parser.slice_from(start).trim();
    if !parser.is_exhausted() {
        return None;
    }
    match token {
        Token::Dimension { unit, .. } => {
            let unit_kind = LengthUnit::from_dimension(unit.as_ref())?;
            let number_len = source.len().checked_sub(unit.len())?;
            let value = parse_number(source.get(..number_len)?)?;
            Some(LengthValue {
                value,
                unit: unit_kind,
            })
        }
        Token::Percentage { .. } => {
            let value = parse_number(source.strip_suffix('%')?)?;
            Some(LengthValue {
                value,
                unit: LengthUnit::Percent,
            })
        }
        Token::Number {
            int_value: Some(0), ..
        } => Some(LengthValue::px(0.0)),
        _ => None,
    }
}
