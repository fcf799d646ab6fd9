use crate::logging::init_for_tests;
use crate::resolvers::number::{Literal, NumberResolver, parse_literal};
use crate::resolvers::{Answer, ResolveError, Resolver};
use crate::test_helpers::factory::Factory;

#[test]
fn test_parse_literal_radixes() {
    init_for_tests();

    assert_eq!(parse_literal("42"), Literal::Value(42));
    assert_eq!(parse_literal("0xFF"), Literal::Value(255));
    assert_eq!(parse_literal("0b101"), Literal::Value(5));
    assert_eq!(parse_literal("0o17"), Literal::Value(15));
    assert_eq!(parse_literal("0x"), Literal::NotANumber);
    assert_eq!(parse_literal("12a"), Literal::NotANumber);
    assert_eq!(parse_literal("-1"), Literal::NotANumber);
    assert_eq!(
        parse_literal("0x1FFFFFFFFFFFFFFFF"),
        Literal::Overflow { prefixed: true }
    );
    assert_eq!(
        parse_literal("99999999999999999999"),
        Literal::Overflow { prefixed: false }
    );
}

#[test]
fn test_number_rows() {
    init_for_tests();

    let items = NumberResolver
        .resolve(&Factory::query("0x41").create())
        .expect("number should not fail");

    let expected = Answer::section(
        "Number",
        vec![Answer::pairs([
            ("Decimal", "65"),
            ("Hex", "0x41"),
            ("Binary", "0b1000001"),
            ("Octal", "0o101"),
            ("Unicode", "U+0041 A"),
        ])],
    );
    assert_eq!(items[0].answer(), &expected);
}

#[test]
fn test_number_skips_control_characters() {
    init_for_tests();

    let items = NumberResolver
        .resolve(&Factory::query("10").create())
        .expect("number should not fail");

    match items[0].answer() {
        Answer::Section { items, .. } => match &items[0] {
            Answer::Pairs(rows) => assert!(rows.iter().all(|(l, _)| l != "Unicode")),
            other => panic!("expected pairs, got {:?}", other),
        },
        other => panic!("expected a section, got {:?}", other),
    }
}

#[test]
fn test_prefixed_overflow_is_an_error() {
    init_for_tests();

    let result = NumberResolver.resolve(&Factory::query("0x1FFFFFFFFFFFFFFFF").create());
    assert!(matches!(result, Err(ResolveError::InvalidInput(_))));
}

#[test]
fn test_bare_overflow_declines() {
    init_for_tests();

    let items = NumberResolver
        .resolve(&Factory::query("123456789012345678901234567890").create())
        .expect("bare overflow should decline");
    assert!(items.is_empty());
}
