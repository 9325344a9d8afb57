use readable_rules::{Element, NodeRef, ReadableRules};

const RULES: &str = r#"{
    "defines": { "root_types": ["Dialog"], "scrollable_types": ["List", "Scroll"] },
    "rules": [
        { "name": "buttons", "isfocus": true,
          "check": { "condition_type": "single",
                     "condition": { "prop": "type", "operator": "eq", "value": "Button" } } },
        { "name": "decorative_images", "isfocus": false,
          "check": { "condition_type": "and",
                     "condition": [
                         { "prop": "type", "operator": "eq", "value": "Image" },
                         { "prop": "accessibilityText", "operator": "eq", "value": "" } ] } }
    ]
}"#;

fn main() {
    let rules = ReadableRules::from_json(RULES).expect("failed to parse rules");
    println!("{rules}");

    let screen = Element::builder(1)
        .node_type("List")
        .child(Element::builder(2).node_type("Button").text("Play"))
        .child(Element::builder(3).node_type("Image").accessibility_text(""))
        .child(Element::builder(4).node_type("Text").text("Now playing"))
        .build();

    for id in 2..=4 {
        let node: NodeRef = screen.find(id).expect("node exists");
        println!("element {id}: readable = {}", rules.is_readable(&node));
    }

    println!("list is scrollable: {}", rules.is_scrollable_types(&*screen));
}
