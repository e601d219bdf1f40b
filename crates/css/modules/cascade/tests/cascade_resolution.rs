#![cfg(test)]

use core::error::Error;
use css_cascade::{
    CascadeOptions, Declaration, Origin, ResolvedStyle, StyleRule, complete_style,
    drop_outranked_longhands, resolve,
};
use css_selectors::{ElementAdapter, RawSelector, SelectorKind, Specificity};
use std::collections::{BTreeSet, HashMap};

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

fn paragraph() -> TestElement {
    TestElement {
        tag: "p".to_owned(),
        id: "intro".to_owned(),
        classes: vec!["lead".to_owned()],
        attrs: HashMap::new(),
    }
}

/// Type alias for a rule shorthand: (kind, selector, declarations, specificity)
type RuleSpec<'rule> = (SelectorKind, &'rule str, Vec<(&'rule str, &'rule str, bool)>, Specificity);

fn rules_for(specs: Vec<RuleSpec<'_>>) -> Vec<StyleRule> {
    specs
        .into_iter()
        .map(|(kind, literal, decls, specificity)| {
            let declarations = decls
                .into_iter()
                .map(|(property, value, important)| Declaration {
                    property: property.to_owned(),
                    raw_value: value.to_owned(),
                    important,
                })
                .collect();
            StyleRule::new(vec![RawSelector::new(kind, literal)], declarations)
                .with_specificity(specificity)
        })
        .collect()
}

fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

fn bare_options() -> CascadeOptions {
    CascadeOptions {
        apply_defaults: false,
        ..CascadeOptions::default()
    }
}

#[test]
fn later_rule_wins_on_equal_specificity() {
    init_logging();
    let rules = rules_for(vec![
        (SelectorKind::Class, "lead", vec![("color", "red", false)], Specificity::new(0, 1, 0)),
        (SelectorKind::Tag, "p", vec![("color", "blue", false)], Specificity::new(0, 1, 0)),
    ]);
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("color"), Some("blue"));
}

#[test]
fn important_beats_higher_specificity() {
    let rules = rules_for(vec![
        (SelectorKind::Tag, "p", vec![("color", "green", true)], Specificity::new(0, 0, 1)),
        (SelectorKind::Id, "intro", vec![("color", "red", false)], Specificity::new(1, 0, 0)),
    ]);
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    let color = style.get("color");
    assert_eq!(color.map(|resolved| resolved.value.as_str()), Some("green"));
    assert_eq!(color.map(|resolved| resolved.important), Some(true));
    assert_eq!(
        color.map(|resolved| resolved.specificity),
        Some(Specificity::new(0, 0, 1))
    );
}

#[test]
fn higher_specificity_beats_later_source() {
    let rules = rules_for(vec![
        (SelectorKind::Id, "intro", vec![("width", "10px", false)], Specificity::new(1, 0, 0)),
        (SelectorKind::Class, "lead", vec![("width", "20px", false)], Specificity::new(0, 1, 0)),
    ]);
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("width"), Some("10px"));
}

#[test]
fn important_flag_in_value_text_is_honoured() {
    let rules = rules_for(vec![
        (SelectorKind::Tag, "p", vec![("display", "block !important", false)], Specificity::new(0, 0, 1)),
        (SelectorKind::Id, "intro", vec![("display", "flex", false)], Specificity::new(1, 0, 0)),
    ]);
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("display"), Some("block"));
}

#[test]
fn non_matching_rules_are_ignored_and_specificity_inferred() {
    let rules = vec![
        StyleRule::new(
            vec![RawSelector::infer("span"), RawSelector::infer(".lead")],
            vec![Declaration::new("font-size", "18px")],
        ),
        StyleRule::new(
            vec![RawSelector::infer("#other")],
            vec![Declaration::new("font-size", "99px")],
        ),
    ];
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("font-size"), Some("18px"));
    assert_eq!(
        style.get("font-size").map(|resolved| resolved.specificity),
        Some(Specificity::new(0, 1, 0))
    );
}

#[test]
fn author_origin_beats_user_agent_specificity() {
    let rules = vec![
        StyleRule::new(vec![RawSelector::infer("p")], vec![Declaration::new("color", "gray")])
            .with_origin(Origin::UserAgent)
            .with_specificity(Specificity::new(5, 0, 0)),
        StyleRule::new(vec![RawSelector::infer("p")], vec![Declaration::new("color", "navy")]),
    ];
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("color"), Some("navy"));
}

#[test]
fn inline_style_beats_selectors_unless_important() {
    let mut element = paragraph();
    element.attrs.insert(
        "style".to_owned(),
        "color: red !important; margin: 4px".to_owned(),
    );
    let rules = rules_for(vec![
        (SelectorKind::Id, "intro", vec![("color", "blue", true), ("margin", "8px", false)], Specificity::new(1, 0, 0)),
        (SelectorKind::Id, "intro", vec![("padding", "1px", true)], Specificity::new(1, 0, 0)),
    ]);
    let style = resolve(&element, &rules, &bare_options(), None);
    assert_eq!(style.value("color"), Some("red"));
    assert_eq!(style.value("margin"), Some("4px"));
    assert_eq!(style.value("padding"), Some("1px"));

    let without_inline = CascadeOptions {
        apply_inline_styles: false,
        ..bare_options()
    };
    let style = resolve(&element, &rules, &without_inline, None);
    assert_eq!(style.value("color"), Some("blue"));
}

#[test]
fn shorthand_expansion_overrides_weaker_longhands() {
    let rules = rules_for(vec![
        (SelectorKind::Tag, "p", vec![("margin-top", "50px", false)], Specificity::new(0, 0, 1)),
        (SelectorKind::Class, "lead", vec![("margin", "1px 2px 3px", false)], Specificity::new(0, 1, 0)),
    ]);
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("margin-top"), Some("1px"));
    assert_eq!(style.value("margin-right"), Some("2px"));
    assert_eq!(style.value("margin-bottom"), Some("3px"));
    assert_eq!(style.value("margin-left"), Some("2px"));

    let no_expansion = CascadeOptions {
        shorthand_expansion: false,
        ..bare_options()
    };
    let style = resolve(&paragraph(), &rules, &no_expansion, None);
    assert_eq!(style.value("margin"), Some("1px 2px 3px"));
    assert_eq!(style.value("margin-top"), None);
    assert_eq!(style.value("margin-left"), None);
}

#[test]
fn longhands_losing_to_their_shorthand_are_dropped() {
    let rules = rules_for(vec![
        (
            SelectorKind::Tag,
            "p",
            vec![("background-color", "blue", false), ("border-style", "dashed", false)],
            Specificity::new(0, 0, 1),
        ),
        (
            SelectorKind::Id,
            "intro",
            vec![("background", "red", false), ("border", "5px solid red", false)],
            Specificity::new(1, 0, 0),
        ),
        (
            SelectorKind::Class,
            "lead",
            vec![("border-color", "green", true)],
            Specificity::new(0, 1, 0),
        ),
    ]);
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("background"), Some("red"));
    assert!(!style.contains("background-color"));
    assert!(!style.contains("border-style"));
    assert_eq!(style.value("border-color"), Some("green"));
}

#[test]
fn declaration_order_within_a_rule_decides_shorthand_conflicts() {
    let options = CascadeOptions {
        shorthand_expansion: false,
        ..bare_options()
    };
    let rules = rules_for(vec![(
        SelectorKind::Tag,
        "p",
        vec![
            ("padding", "4px", false),
            ("padding-left", "9px", false),
            ("margin-top", "1px", false),
            ("margin", "2px", false),
        ],
        Specificity::new(0, 0, 1),
    )]);
    let style = resolve(&paragraph(), &rules, &options, None);
    assert_eq!(style.value("padding-left"), Some("9px"));
    assert_eq!(style.value("margin"), Some("2px"));
    assert!(!style.contains("margin-top"));
}

#[test]
fn pre_resolved_longhands_yield_to_outranking_shorthands() -> Result<(), Box<dyn Error>> {
    let style: ResolvedStyle = serde_json::from_str(
        r#"{
            "margin": { "value": "10px", "specificity": [1, 0, 0] },
            "margin-top": { "value": "5px", "specificity": [0, 0, 1] },
            "padding": "3px",
            "padding-left": "7px"
        }"#,
    )?;
    let settled = drop_outranked_longhands(style);
    assert!(!settled.contains("margin-top"));
    assert_eq!(settled.value("padding-left"), Some("7px"));
    Ok(())
}

#[test]
fn defaults_fill_missing_properties() {
    let style = resolve(&paragraph(), &[], &CascadeOptions::default(), None);
    assert_eq!(style.value("display"), Some("inline"));
    assert_eq!(style.value("position"), Some("static"));
    assert_eq!(style.value("opacity"), Some("1"));
    assert_eq!(
        style.get("display").map(|resolved| resolved.origin),
        Some(Origin::UserAgent)
    );

    let bare = resolve(&paragraph(), &[], &bare_options(), None);
    assert!(bare.is_empty());
}

#[test]
fn supported_properties_filter_declarations_but_not_custom_properties() {
    let options = CascadeOptions {
        supported_properties: Some(BTreeSet::from(["color".to_owned()])),
        ..CascadeOptions::default()
    };
    let rules = vec![StyleRule::new(
        vec![RawSelector::infer("p")],
        vec![
            Declaration::new("color", "red"),
            Declaration::new("width", "10px"),
            Declaration::new("--accent", "blue"),
        ],
    )];
    let style = resolve(&paragraph(), &rules, &options, None);
    assert_eq!(style.value("color"), Some("red"));
    assert!(!style.contains("width"));
    assert!(!style.contains("display"));
    assert_eq!(style.value("--accent"), Some("blue"));
}

#[test]
fn inheritance_copies_only_inherited_properties() {
    let parent = ResolvedStyle::from_values([("color", "purple"), ("width", "300px")]);
    let options = CascadeOptions {
        apply_inheritance: true,
        ..bare_options()
    };
    let style = resolve(&paragraph(), &[], &options, Some(&parent));
    assert_eq!(style.value("color"), Some("purple"));
    assert!(!style.contains("width"));

    let flat = resolve(&paragraph(), &[], &bare_options(), Some(&parent));
    assert!(!flat.contains("color"));
}

#[test]
fn variables_resolve_or_fall_back() {
    let rules = vec![StyleRule::new(
        vec![RawSelector::infer("p")],
        vec![
            Declaration::new("--gap", "12px"),
            Declaration::new("padding", "var(--gap)"),
            Declaration::new("display", "var(--missing)"),
            Declaration::new("cursor", "var(--missing)"),
            Declaration::new("color", "var(--missing, teal)"),
        ],
    )];
    let options = CascadeOptions {
        resolve_variables: true,
        shorthand_expansion: false,
        ..bare_options()
    };
    let style = resolve(&paragraph(), &rules, &options, None);
    assert_eq!(style.value("padding"), Some("12px"));
    assert_eq!(style.value("display"), Some("inline"));
    assert_eq!(style.value("color"), Some("teal"));
    assert!(!style.contains("cursor"));

    let raw = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(raw.value("padding"), Some("var(--gap)"));
}

#[test]
fn pre_resolved_maps_deserialize_and_complete() -> Result<(), Box<dyn Error>> {
    let style: ResolvedStyle = serde_json::from_str(
        r#"{
            "width": { "value": "100px", "important": true, "specificity": [0, 1, 0] },
            "opacity": { "value": 0.5 }
        }"#,
    )?;
    assert_eq!(style.value("opacity"), Some("0.5"));
    assert_eq!(
        style.get("width").map(|resolved| resolved.specificity),
        Some(Specificity::new(0, 1, 0))
    );
    let completed = complete_style(style, &CascadeOptions::default(), None);
    assert_eq!(completed.value("width"), Some("100px"));
    assert_eq!(completed.value("float"), Some("none"));
    Ok(())
}

#[test]
fn rules_deserialize_from_collaborator_shape() -> Result<(), Box<dyn Error>> {
    let rules: Vec<StyleRule> = serde_json::from_str(
        r#"[{
            "selectors": [{ "raw": ".lead", "type": "class" }],
            "declarations": [{ "property": "color", "value": "red", "important": false }],
            "specificity": { "ids": 0, "classes": 1, "elements": 0 }
        }]"#,
    )?;
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("color"), Some("red"));
    assert_eq!(
        style.get("color").map(|resolved| resolved.origin),
        Some(Origin::Author)
    );
    Ok(())
}

#[test]
fn malformed_rule_fields_are_tolerated() -> Result<(), Box<dyn Error>> {
    let rules: Vec<StyleRule> = serde_json::from_str(
        r#"[{
            "selectors": ["p", { "raw": ".lead", "type": "pseudo" }, 17, { "type": "id" }],
            "declarations": [
                { "property": "width", "value": 300 },
                { "property": "color", "value": "red", "important": null },
                { "property": "height" },
                "opacity: 0.5"
            ],
            "specificity": "high",
            "origin": 3
        }]"#,
    )?;
    let rule = rules.first().ok_or("rule was skipped")?;
    assert_eq!(rule.selectors.len(), 2);
    assert_eq!(rule.declarations.len(), 2);
    assert_eq!(rule.specificity, None);
    assert_eq!(rule.origin, Origin::Author);
    let style = resolve(&paragraph(), &rules, &bare_options(), None);
    assert_eq!(style.value("width"), Some("300"));
    assert_eq!(style.value("color"), Some("red"));
    assert_eq!(
        style.get("color").map(|resolved| resolved.important),
        Some(false)
    );
    Ok(())
}

#[test]
fn pre_resolved_entries_accept_bare_values() -> Result<(), Box<dyn Error>> {
    let style: ResolvedStyle = serde_json::from_str(
        r#"{ "color": "red", "z-index": 4, "width": null, "height": { "value": [1] } }"#,
    )?;
    assert_eq!(style.value("color"), Some("red"));
    assert_eq!(style.value("z-index"), Some("4"));
    assert!(!style.contains("width"));
    assert!(!style.contains("height"));
    assert_eq!(
        style.get("color").map(|resolved| resolved.origin),
        Some(Origin::Author)
    );
    Ok(())
}
