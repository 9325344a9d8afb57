use readable_rules::{
    CondType, Condition, ConditionItem, CondOperator, CustomProps, Element, InitState, NodeRef,
    ParseOptions, PropValue, ReadableRules, ReadableRulesChecker, ReadableRulesError,
    ReadableRulesNode, TargetNode, Verdict, custom, prop,
};

fn rule_doc(rules: &str) -> String {
    format!(r#"{{ "defines": {{}}, "rules": {rules} }}"#)
}

fn single(prop_name: &str, op: &str, value: &str) -> String {
    format!(
        r#"{{ "condition_type": "single",
              "condition": {{ "prop": "{prop_name}", "operator": "{op}", "value": {value} }} }}"#
    )
}

#[test]
fn button_text_image_end_to_end() {
    let doc = rule_doc(&format!(
        r#"[ {{ "name": "r1", "isfocus": true,  "check": {} }},
             {{ "name": "r2", "isfocus": false, "check": {} }} ]"#,
        single("type", "eq", r#""button""#),
        single("type", "eq", r#""text""#),
    ));
    let checker = ReadableRulesChecker::new();
    assert!(checker.check_init(&doc));

    let button: NodeRef = Element::builder(1).node_type("button").build();
    let text: NodeRef = Element::builder(2).node_type("text").build();
    let image: NodeRef = Element::builder(3).node_type("image").build();
    assert!(checker.is_readable(&button));
    assert!(!checker.is_readable(&text));
    assert!(!checker.is_readable(&image));
}

#[test]
fn one_bad_rule_rejects_everything() {
    let doc = rule_doc(&format!(
        r#"[ {{ "name": "r1", "isfocus": true,  "check": {} }},
             {{ "name": "r2", "isfocus": false, "check": {} }} ]"#,
        single("type", "eq", r#""button""#),
        single("type", "unknown_op", r#""text""#),
    ));
    let checker = ReadableRulesChecker::new();
    assert!(!checker.check_init(&doc));
    assert!(!checker.is_inited());
    assert_eq!(checker.state(), InitState::FailedInit);

    let button: NodeRef = Element::builder(1).node_type("button").build();
    assert!(!checker.is_readable(&button));
}

#[test]
fn empty_and_whitespace_documents_fail() {
    for doc in ["", "   ", "null", "[]", "{}"] {
        assert!(ReadableRules::from_json(doc).is_err(), "{doc:?}");
    }
}

#[test]
fn bad_custom_prop_rejects_document() {
    let doc = r#"{
        "defines": {},
        "custom_props": { "broken": { "condition_type": "and", "condition": [] } },
        "rules": [ { "name": "r", "isfocus": true,
                     "check": { "condition_type": "single",
                                "condition": { "prop": "type", "operator": "eq", "value": "x" } } } ]
    }"#;
    let err = ReadableRules::from_json(doc).unwrap_err();
    let ReadableRulesError::Parse(err) = err else {
        panic!("expected a structural error");
    };
    assert_eq!(err.path(), "custom_props.broken.condition");
}

#[test]
fn unknown_prop_parses_but_never_matches() {
    let doc = rule_doc(&format!(
        r#"[ {{ "name": "r", "isfocus": true, "check": {} }} ]"#,
        single("colour", "eq", r#""red""#),
    ));
    let rules = ReadableRules::from_json(&doc).unwrap();
    let node: NodeRef = Element::builder(1).node_type("red").text("red").build();
    assert_eq!(rules.evaluate(&node), None);
}

#[test]
fn missing_property_is_a_non_match() {
    let rules = ReadableRules::builder()
        .rule("no_text", true, Condition::single(prop("text").ne("hello")))
        .build();
    let without_text: NodeRef = Element::builder(1).build();
    let with_text: NodeRef = Element::builder(2).text("bye").build();
    assert!(!rules.is_readable(&without_text));
    assert!(rules.is_readable(&with_text));
}

#[test]
fn type_mismatch_is_a_non_match() {
    let rules = ReadableRules::builder()
        .rule("a", true, Condition::single(prop("isEnable").eq("true")))
        .rule("b", true, Condition::single(prop("type").eq(true)))
        .build();
    let node: NodeRef = Element::builder(1).enabled(true).node_type("true").build();
    assert_eq!(rules.evaluate(&node), None);
}

#[test]
fn children_count_compares_as_number() {
    let doc = rule_doc(&format!(
        r#"[ {{ "name": "leaf", "isfocus": true, "check": {} }} ]"#,
        single("children_count", "eq", "0"),
    ));
    let rules = ReadableRules::from_json(&doc).unwrap();
    let tree = Element::builder(1).child(Element::builder(2)).build();
    let leaf: NodeRef = tree.find(2).unwrap();
    let root: NodeRef = tree;
    assert!(rules.is_readable(&leaf));
    assert!(!rules.is_readable(&root));
}

#[test]
fn parent_target_on_root_is_false() {
    let rules = ReadableRules::builder()
        .rule(
            "under_list",
            true,
            Condition::single(
                prop("type")
                    .eq("List")
                    .with_target(TargetNode::Parent)
                    .with_cascade(true),
            ),
        )
        .build();
    let tree = Element::builder(1)
        .node_type("List")
        .child(Element::builder(2).child(Element::builder(3)))
        .build();
    let deep: NodeRef = tree.find(3).unwrap();
    let root: NodeRef = tree;
    assert!(rules.is_readable(&deep));
    assert!(!rules.is_readable(&root));
}

#[test]
fn children_target_without_children_is_false() {
    let item = prop("type").eq("Text").with_target(TargetNode::Children);
    let props = CustomProps::new();
    let leaf: NodeRef = Element::builder(1).node_type("Text").build();
    assert!(!item.check(&leaf, &props));
}

#[test]
fn single_with_combined_body_is_false() {
    let always = Condition::single(prop("type").ne("nothing"));
    let odd = Condition::combined(CondType::Single, vec![always.clone()]);
    let props = CustomProps::new();
    let node: NodeRef = Element::builder(1).node_type("Button").build();
    assert!(always.check(&node, &props));
    assert!(!odd.check(&node, &props));
}

#[test]
fn unknown_condition_is_false() {
    let props = CustomProps::new();
    let node: NodeRef = Element::builder(1).build();
    assert!(!Condition::default().check(&node, &props));
    assert_eq!(Condition::default().cond_type(), CondType::Unknown);
}

#[test]
fn empty_and_is_true_empty_or_is_false() {
    let props = CustomProps::new();
    let node: NodeRef = Element::builder(1).build();
    assert!(Condition::all(Vec::new()).check(&node, &props));
    assert!(!Condition::any(Vec::new()).check(&node, &props));
}

#[test]
fn lenient_combined_child_becomes_false() {
    let doc = r#"{
        "defines": {},
        "rules": [
            { "name": "and_rule", "isfocus": true,
              "check": { "condition_type": "and", "combined_condition": [
                  { "condition_type": "single",
                    "condition": { "prop": "type", "operator": "eq", "value": "Button" } },
                  { "condition_type": "single", "condition": { "prop": "type" } }
              ] } },
            { "name": "or_rule", "isfocus": false,
              "check": { "condition_type": "or", "combined_condition": [
                  { "condition_type": "single",
                    "condition": { "prop": "type", "operator": "eq", "value": "Button" } },
                  { "condition_type": "mystery" }
              ] } }
        ]
    }"#;
    let rules = ReadableRules::from_json(doc).unwrap();
    let button: NodeRef = Element::builder(1).node_type("Button").build();
    // The broken AND child is always false, so the OR rule decides.
    assert_eq!(rules.evaluate(&button), Some(Verdict::new("or_rule", false)));

    let strict = ReadableRules::from_json_with(doc, &ParseOptions::strict());
    assert!(strict.is_err());
}

#[test]
fn custom_requires_bool_eq_or_ne() {
    let props = CustomProps::new().with("always", Condition::single(prop("type").ne("")));
    let node: NodeRef = Element::builder(1).node_type("Button").build();

    let non_bool = ConditionItem::new("always", CondOperator::Eq, "true").with_custom(true);
    let one_of = ConditionItem::new("always", CondOperator::IsOneOf, true).with_custom(true);
    assert!(!non_bool.check(&node, &props));
    assert!(!one_of.check(&node, &props));
    assert!(custom("always").eq(true).check(&node, &props));
}

#[test]
fn self_referencing_custom_terminates() {
    let props = CustomProps::new()
        .with("loop", Condition::single(custom("loop").eq(true)))
        .with("ping", Condition::single(custom("pong").eq(true)))
        .with("pong", Condition::single(custom("ping").eq(true)));
    let node: NodeRef = Element::builder(1).build();
    assert!(!custom("loop").eq(true).check(&node, &props));
    assert!(!custom("ping").eq(true).check(&node, &props));
}

#[test]
fn fan_out_self_reference_terminates() {
    let self_ref = r#"{ "prop": "loop", "operator": "eq", "value": true, "is_custom": true }"#;
    let doc = format!(
        r#"{{
            "defines": {{}},
            "custom_props": {{
                "loop": {{ "condition_type": "or",
                           "condition": [{self_ref}, {self_ref}, {self_ref}, {self_ref}] }}
            }},
            "rules": [
                {{ "name": "looping", "isfocus": true,
                   "check": {{ "condition_type": "single", "condition": {self_ref} }} }},
                {{ "name": "fallback", "isfocus": false,
                   "check": {s} }}
            ]
        }}"#,
        s = single("type", "eq", r#""Button""#),
    );
    let rules = ReadableRules::from_json(&doc).unwrap();
    let button: NodeRef = Element::builder(1).node_type("Button").build();
    let text: NodeRef = Element::builder(2).node_type("Text").build();

    assert_eq!(rules.evaluate(&button), Some(Verdict::new("fallback", false)));
    assert_eq!(rules.evaluate(&text), None);
    assert!(!rules.is_readable(&text));
}

#[test]
fn custom_on_children_target() {
    let rules = ReadableRules::builder()
        .custom_prop("is_button", Condition::single(prop("type").eq("Button")))
        .rule(
            "has_button_child",
            true,
            Condition::single(
                custom("is_button")
                    .eq(true)
                    .with_target(TargetNode::Children),
            ),
        )
        .build();
    let tree = Element::builder(1)
        .child(Element::builder(2).node_type("Text"))
        .child(Element::builder(3).node_type("Button"))
        .build();
    let root: NodeRef = tree;
    assert!(rules.is_readable(&root));
}

#[test]
fn float_values_truncate() {
    let doc = rule_doc(&format!(
        r#"[ {{ "name": "two", "isfocus": true, "check": {} }} ]"#,
        single("children_count", "eq", "2.7"),
    ));
    let rules = ReadableRules::from_json(&doc).unwrap();
    let item = &rules.rules()[0].condition().condition_items()[0];
    assert_eq!(item.value(), &PropValue::Number(2));
}

#[test]
fn oversized_numbers_fail() {
    let doc = rule_doc(&format!(
        r#"[ {{ "name": "big", "isfocus": true, "check": {} }} ]"#,
        single("children_count", "eq", "3000000000"),
    ));
    assert!(ReadableRules::from_json(&doc).is_err());
}

/// A node type that only exposes its type and hides everything else.
struct Sparse {
    node_type: &'static str,
}

impl ReadableRulesNode for Sparse {
    fn accessibility_id(&self) -> i64 {
        7
    }

    fn node_type(&self) -> Option<String> {
        Some(self.node_type.to_owned())
    }

    fn parent(&self) -> Option<NodeRef> {
        None
    }

    fn children(&self) -> Vec<NodeRef> {
        Vec::new()
    }
}

#[test]
fn custom_node_implementation() {
    let rules = ReadableRules::builder()
        .rule("buttons", true, Condition::single(prop("type").eq("Button")))
        .rule("any_text", false, Condition::single(prop("text").ne("")))
        .build();
    let node: NodeRef = std::sync::Arc::new(Sparse { node_type: "Button" });
    assert_eq!(rules.evaluate(&node), Some(Verdict::new("buttons", true)));

    let other: NodeRef = std::sync::Arc::new(Sparse { node_type: "Label" });
    assert_eq!(rules.evaluate(&other), None);
    assert!(rules.is_available(&other));
}
