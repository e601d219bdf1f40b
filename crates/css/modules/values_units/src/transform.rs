//! CSS Transforms Level 1 — the `transform` property, kept as a raw function list.
//! Spec: <https://www.w3.org/TR/css-transforms-1/#transform-property>

use cssparser::{Parser, ParserInput, Token};
use serde::Serialize;

/// The authored transform list and whether it applies any function at all.
///
/// No matrix decomposition is performed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TransformList {
    pub raw: String,
    pub has_transform: bool,
}

/// Count top-level function tokens (`translateX(`, `rotate(`, ...).
fn count_functions(raw: &str) -> usize {
    let mut input = ParserInput::new(raw);
    let mut parser = Parser::new(&mut input);
    let mut count = 0usize;
    while let Ok(token) = parser.next() {
        if matches!(token, Token::Function(_)) {
            count = count.saturating_add(1);
        }
    }
    count
}

/// Parse a `transform` value. `none`, empty input, or text without any
/// function call has no transform.
pub fn parse_transform(raw: &str) -> TransformList {
    let trimmed = raw.trim();
    let has_transform = !trimmed.eq_ignore_ascii_case("none") && count_functions(trimmed) > 0;
    TransformList {
        raw: trimmed.to_owned(),
        has_transform,
    }
}
