use std::thread;

use pegtree::parser::{BoxedParser, GrammarError, Parser, Rule, choice, literal, sequence};

/// nested := "(" nested ")" | "a"
fn nested() -> BoxedParser {
    let rule = Rule::new("nested");
    let parser = choice(vec![
        sequence(vec![literal('('), rule.parser(), literal(')')]),
        literal('a'),
    ]);
    rule.define(parser.clone()).expect("rule defined once");
    parser
}

#[test]
fn recursive_rule_matches_nested_input() {
    let result = nested().parse("((a))").unwrap();
    assert_eq!(result.matched, "((a))");
    assert!(result.is_complete());
}

#[test]
fn recursive_rule_stops_at_unbalanced_input() {
    let parser = nested();
    assert!(parser.parse("((a)").is_err());

    let result = parser.parse("(a))").unwrap();
    assert_eq!(result.matched, "(a)");
    assert_eq!(result.rest, ")");
}

#[test]
fn mutually_recursive_rules() {
    // even := "x" odd | "."    odd := "x" even
    let even = Rule::new("even");
    let odd = Rule::new("odd");
    let even_parser = (literal('x') + odd.parser()) | literal('.');
    let odd_parser = literal('x') + even.parser();
    even.define(even_parser.clone()).unwrap();
    odd.define(odd_parser).unwrap();

    assert!(even_parser.parse("xx.").is_ok());
    assert!(even_parser.parse("x.").is_err());
}

#[test]
fn undefined_rule_fails_with_its_name() {
    let rule = Rule::new("later");
    let err = rule.parser().parse("abc").unwrap_err();
    assert!(err.message.contains("'later'"), "{}", err.message);
    assert!(!rule.is_defined());
}

#[test]
fn rule_defines_only_once() {
    let rule = Rule::new("once");
    rule.define(literal('a')).unwrap();
    assert!(rule.is_defined());

    let err = rule.define(literal('b')).unwrap_err();
    assert!(matches!(err, GrammarError::AlreadyDefined(ref name) if name == "once"));
    assert_eq!(rule.parser().parse("a").unwrap().matched, "a");
}

#[test]
fn reference_taken_before_definition_sees_definition() {
    let rule = Rule::new("late");
    let reference = rule.parser();
    rule.define(literal('z')).unwrap();
    assert_eq!(reference.parse("z!").unwrap().rest, "!");
}

#[test]
fn clones_share_the_slot() {
    let rule = Rule::new("shared");
    let copy = rule.clone();
    copy.define(literal('q')).unwrap();
    assert!(rule.is_defined());
    assert_eq!(rule.name(), "shared");
}

#[test]
fn parsers_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BoxedParser>();
    assert_send_sync::<Rule>();

    let parser = nested();
    thread::scope(|scope| {
        for depth in 0..4 {
            let parser = &parser;
            scope.spawn(move || {
                let input = format!("{}a{}", "(".repeat(depth), ")".repeat(depth));
                let result = parser.parse(&input).unwrap();
                assert_eq!(result.matched, input);
            });
        }
    });
}
