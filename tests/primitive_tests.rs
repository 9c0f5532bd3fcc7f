use pegtree::parser::{Parser, char_range, char_set, literal, literal_string};
use rstest::rstest;

#[rstest]
#[case('a', "abc")]
#[case('{', "{ }")]
#[case('7', "7")]
#[case('λ', "λx")]
fn literal_consumes_first_char(#[case] ch: char, #[case] input: &str) {
    let result = literal(ch).parse(input).expect("literal should match");
    assert_eq!(result.matched, ch.to_string());
    assert_eq!(result.rest, &input[ch.len_utf8()..]);
    assert!(result.nodes.is_empty());
}

#[rstest]
#[case('a')]
#[case(' ')]
#[case('λ')]
fn literal_fails_on_empty_input(#[case] ch: char) {
    let err = literal(ch).parse("").unwrap_err();
    assert_eq!(err.message, "End of input stream.");
}

#[test]
fn literal_names_expected_and_found() {
    let err = literal('a').parse("xyz").unwrap_err();
    assert_eq!(err.to_string(), "Expected 'a' but got 'x'");
}

#[test]
fn char_range_matches_members() {
    let digit = char_range('0', '9');
    for input in ["0", "5", "9"] {
        assert!(digit.parse(input).is_ok(), "{input} should be a digit");
    }
    assert!(digit.parse("a").is_err());
}

#[test]
fn char_range_reports_last_alternative() {
    let err = char_range('a', 'c').parse("z").unwrap_err();
    assert_eq!(err.message, "Expected 'c' but got 'z'");
}

#[test]
fn char_set_matches_any_member() {
    let space = char_set(" \t\n");
    assert_eq!(space.parse("\tx").unwrap().rest, "x");
    assert!(space.parse("x").is_err());
}

#[test]
fn empty_char_set_never_matches() {
    assert!(char_set("").parse("a").is_err());
}

#[test]
fn literal_string_matches_whole_word() {
    let result = literal_string("struct").parse("struct Point").unwrap();
    assert_eq!(result.matched, "struct");
    assert_eq!(result.rest, " Point");
}

#[test]
fn literal_string_fails_with_first_mismatch() {
    let err = literal_string("const").parse("cons").unwrap_err();
    assert_eq!(err.message, "End of input stream.");

    let err = literal_string("const").parse("cost").unwrap_err();
    assert_eq!(err.message, "Expected 'n' but got 's'");
}

#[test]
fn empty_literal_string_matches_nothing() {
    let result = literal_string("").parse("abc").unwrap();
    assert_eq!(result.matched, "");
    assert_eq!(result.rest, "abc");
}
