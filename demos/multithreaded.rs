use std::thread;

use readable_rules::{Element, NodeRef, global};

const RULES: &str = r#"{
    "defines": { "root_types": ["Dialog"] },
    "rules": [
        { "name": "buttons", "isfocus": true,
          "check": { "condition_type": "single",
                     "condition": { "prop": "type", "operator": "eq", "value": "Button" } } }
    ]
}"#;

fn main() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                // Every thread races to initialize; exactly one parse wins.
                let inited = global().check_init(RULES);
                let kind = if i % 2 == 0 { "Button" } else { "Text" };
                let node: NodeRef = Element::builder(i).node_type(kind).build();
                println!(
                    "Thread {i}: inited = {inited}, {kind} readable = {}",
                    global().is_readable(&node)
                );
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    println!("final state: {:?}", global().state());
}
