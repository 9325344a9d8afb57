use readable_rules::{Condition, Element, NodeRef, ReadableRules, TargetNode, custom, prop};

fn main() {
    // "clickable" is defined once and reused by two rules, one of which looks at children.
    let rules = ReadableRules::builder()
        .custom_prop(
            "clickable",
            Condition::single(prop("actionNames").has_any(["click", "longClick"])),
        )
        .rule(
            "clickable_container",
            false,
            Condition::single(
                custom("clickable")
                    .eq(true)
                    .with_target(TargetNode::Children)
                    .with_cascade(true),
            ),
        )
        .rule("clickable", true, Condition::single(custom("clickable").eq(true)))
        .build();

    let card = Element::builder(1)
        .node_type("Card")
        .action_names(["click"])
        .child(
            Element::builder(2)
                .node_type("Row")
                .child(Element::builder(3).node_type("Button").action_names(["click"])),
        )
        .build();
    let button: NodeRef = card.find(3).expect("node exists");
    let card: NodeRef = card;

    // The card has a clickable descendant, so the first rule hides it.
    println!("card readable: {}", rules.is_readable(&card));
    println!("button readable: {}", rules.is_readable(&button));
}
