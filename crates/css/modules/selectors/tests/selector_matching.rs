#![cfg(test)]

use core::error::Error;
use css_selectors::{
    AttrOperator, ElementAdapter, RawSelector, SelectorKind, SimpleSelector, Specificity,
    matches_raw, matching_specificity, parse_raw_selector,
};
use std::collections::HashMap;

/// Minimal element used to drive the matcher.
#[derive(Default)]
struct TestElement {
    tag: String,
    id: String,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
}

impl ElementAdapter for TestElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn element_id(&self) -> Option<&str> {
        (!self.id.is_empty()).then_some(self.id.as_str())
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|candidate| candidate == class)
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }
}

fn card() -> TestElement {
    TestElement {
        tag: "DIV".to_owned(),
        id: "main".to_owned(),
        classes: vec!["card".to_owned(), "wide".to_owned()],
        attrs: HashMap::from([("href".to_owned(), "https://example.com/docs".to_owned())]),
    }
}

#[test]
fn tag_matching_ignores_case() {
    let element = card();
    assert!(matches_raw(&element, &RawSelector::new(SelectorKind::Tag, "div")));
    assert!(!matches_raw(&element, &RawSelector::new(SelectorKind::Tag, "span")));
}

#[test]
fn class_and_id_literals_accept_optional_prefix() {
    let element = card();
    assert!(matches_raw(&element, &RawSelector::new(SelectorKind::Class, ".card")));
    assert!(matches_raw(&element, &RawSelector::new(SelectorKind::Class, "wide")));
    assert!(matches_raw(&element, &RawSelector::new(SelectorKind::Id, "#main")));
    assert!(!matches_raw(&element, &RawSelector::new(SelectorKind::Id, "other")));
}

#[test]
fn attribute_operators() {
    let element = card();
    assert!(matches_raw(&element, &RawSelector::infer("[href*=example]")));
    assert!(matches_raw(&element, &RawSelector::infer("[href^=\"https\"]")));
    assert!(matches_raw(&element, &RawSelector::infer("[href$=docs]")));
    assert!(matches_raw(&element, &RawSelector::infer("[href]")));
    assert!(!matches_raw(&element, &RawSelector::infer("[href=docs]")));
    assert!(!matches_raw(&element, &RawSelector::infer("[title]")));
    assert_eq!(
        parse_raw_selector(&RawSelector::new(SelectorKind::Attribute, "href*=ex")),
        SimpleSelector::Attribute {
            name: "href".to_owned(),
            operator: AttrOperator::Contains,
            value: "ex".to_owned(),
        }
    );
}

#[test]
fn empty_literals_never_match() {
    let element = TestElement::default();
    assert!(!matches_raw(&element, &RawSelector::new(SelectorKind::Tag, "")));
    assert!(!matches_raw(&element, &RawSelector::new(SelectorKind::Class, ".")));
    assert!(!matches_raw(&element, &RawSelector::new(SelectorKind::Id, "#")));
}

#[test]
fn group_reports_highest_matching_specificity() {
    let element = card();
    let group = vec![
        RawSelector::infer("div"),
        RawSelector::infer(".card"),
        RawSelector::infer("#missing"),
    ];
    assert_eq!(
        matching_specificity(&element, &group),
        Some(Specificity::new(0, 1, 0))
    );
    let none = vec![RawSelector::infer("span")];
    assert_eq!(matching_specificity(&element, &none), None);
    let universal = vec![RawSelector::infer("*")];
    assert_eq!(
        matching_specificity(&element, &universal),
        Some(Specificity::ZERO)
    );
}

#[test]
fn specificity_orders_lexicographically() {
    assert!(Specificity::new(1, 0, 0) > Specificity::new(0, 9, 9));
    assert!(Specificity::new(0, 2, 0) > Specificity::new(0, 1, 5));
    assert!(Specificity::new(0, 0, 2) > Specificity::new(0, 0, 1));
}

#[test]
fn specificity_deserializes_from_either_shape() -> Result<(), Box<dyn Error>> {
    let named: Specificity = serde_json::from_str(r#"{"ids":1,"classes":2,"elements":3}"#)?;
    let triple: Specificity = serde_json::from_str("[1,2,3]")?;
    assert_eq!(named, triple);
    let selector: RawSelector = serde_json::from_str(r#"{"raw":".card","type":"class"}"#)?;
    assert_eq!(selector.effective_kind(), SelectorKind::Class);
    Ok(())
}
