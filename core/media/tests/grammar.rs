use media_type::error::{GrammarErrorKind, TokenKind, ValidationError};
use media_type::MediaType;

#[test]
fn rejects_bad_input() {
    let bad = [
        "", "/", "text", "text/", "te<t/plain", "text/pl@in", "text/plain;", "text/plain; ",
        "text/plain; a", "text/plain; a=", "text/plain; a=@", "text/plain; a=\"@",
        "text/plain; a=1;", "text/plain; a=1; ", "text/plain; a=1; b", "text/plain; a=1; b=",
        "text/plain; a=\u{2025}",
    ];

    for string in &bad {
        let error = MediaType::parse(string).unwrap_err();
        assert!(error.grammar().is_some(), "{:?}: {}", string, error);
    }
}

#[test]
fn grammar_errors_locate_the_problem() {
    let error = MediaType::parse("text/pl@in").unwrap_err();
    let grammar = error.grammar().unwrap();
    assert_eq!(grammar.kind(), GrammarErrorKind::InvalidChar('@'));
    assert_eq!(grammar.index(), 7);
    assert_eq!(grammar.input(), "text/pl@in");

    let error = MediaType::parse("").unwrap_err();
    assert_eq!(error.grammar().unwrap().kind(), GrammarErrorKind::Empty);
}

#[test]
fn wildcard_type_needs_wildcard_subtype() {
    assert_eq!(MediaType::parse("*/plain").unwrap_err(), ValidationError::WildcardType {
        subtype: "plain".into()
    });

    assert!(MediaType::parse("*/*").is_ok());
    assert!(MediaType::parse("image/*").is_ok());
}

#[test]
fn construction_errors_name_the_token() {
    assert_eq!(MediaType::create("te><t", "plaintext").unwrap_err(), ValidationError::InvalidToken {
        kind: TokenKind::Type,
        token: "te><t".into(),
    });

    let plain = MediaType::create("text", "plain").unwrap();
    let error = plain.with_parameters(vec![("a", "1"), ("@", "2"), ("b", "3")]).unwrap_err();
    assert_eq!(error, ValidationError::InvalidToken {
        kind: TokenKind::Attribute,
        token: "@".into(),
    });

    assert!(error.to_string().contains('@'));
}

#[test]
fn from_str_matches_parse() {
    let parsed: MediaType = "application/json; charset=utf-8".parse().unwrap();
    assert_eq!(parsed, MediaType::parse("application/json; charset=utf-8").unwrap());
    assert!("application".parse::<MediaType>().is_err());
}
