use readable_rules::{Element, NodeRef, ReadableRules};

const RULES: &str = r#"{
    "defines": { "root_types": ["Dialog"] },
    "rules": [
        { "name": "disabled", "isfocus": false,
          "check": { "condition_type": "single",
                     "condition": { "prop": "isEnable", "operator": "eq", "value": false } } },
        { "name": "labelled", "isfocus": true,
          "check": { "condition_type": "or",
                     "condition": [
                         { "prop": "text", "operator": "ne", "value": "" },
                         { "prop": "accessibilityText", "operator": "ne", "value": "" } ] } }
    ]
}"#;

fn main() {
    let rules = ReadableRules::from_json(RULES).expect("failed to parse rules");
    println!("rules in order: {:?}", rules.rule_names());

    let nodes: Vec<NodeRef> = vec![
        Element::builder(1).text("Save").enabled(true).build(),
        Element::builder(2).text("Save").enabled(false).build(),
        Element::builder(3).enabled(true).build(),
    ];

    for node in &nodes {
        match rules.evaluate(node) {
            Some(verdict) => println!("element {}: {verdict}", node.accessibility_id()),
            None => println!("element {}: no rule matched", node.accessibility_id()),
        }
    }
}
