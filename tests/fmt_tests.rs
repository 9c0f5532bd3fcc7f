use pegtree::ast::Node;
use pegtree::fmt::render;
use pegtree::grammar::Grammar;
use pegtree::parser::{Parser, literal};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn render_failure_is_bare_message() {
    let result = literal('a').parse("b");
    assert_eq!(render(&result), "Expected 'a' but got 'b'");
}

#[test]
fn render_success_with_tree() {
    let grammar = Grammar::new().unwrap();
    let result = grammar.constant().parse("const x = 100 rest");
    let expected = "\
Matched: \"const x = 100\"
Rest: \" rest\"
const: {
    type: \"const\"
    name: \"x\"
    value: \"100\"
}
";
    assert_eq!(render(&result), expected);
}

#[test]
fn render_success_without_nodes() {
    let result = literal('a').parse("ab");
    assert_eq!(render(&result), "Matched: \"a\"\nRest: \"b\"\n");
}

#[test]
fn display_node_indents_by_depth() {
    let node = Node::children(
        "a",
        vec![
            Node::text("b", "c"),
            Node::children("d", vec![Node::text("e", "f")]),
            Node::children("g", vec![]),
        ],
    );
    let expected = "\
a: {
    b: \"c\"
    d: {
        e: \"f\"
    }
    g: {
    }
}
";
    assert_eq!(node.to_string(), expected);
}

#[test]
fn nodes_serialize_as_json() {
    let node = Node::children("pair", vec![Node::text("left", "a"), Node::text("right", "b")]);
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "name": "pair",
            "value": [
                { "name": "left", "value": "a" },
                { "name": "right", "value": "b" }
            ]
        })
    );
}
