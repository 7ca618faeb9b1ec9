// tests/parser_tests.rs

use sprig::ast::{Expr, Literal, Stage, Token};
use sprig::lexer::tokenize;
use sprig::parser::{ParseError, Parser};

fn parse(input: &str) -> Result<Stage, ParseError> {
    let tokens = tokenize(input).unwrap();
    Parser::new(tokens).parse()
}

// ============================================================================
// Identity
// ============================================================================

#[test]
fn test_empty_input_is_identity() {
    let stage = parse("").unwrap();
    assert_eq!(stage, Stage::default());
    assert!(stage.steps.is_empty());
}

#[test]
fn test_lone_dot_is_identity() {
    let stage = parse(".").unwrap();
    assert!(stage.steps.is_empty());
}

#[test]
fn test_whitespace_only_is_identity() {
    let stage = parse("   \t  ").unwrap();
    assert!(stage.steps.is_empty());
}

// ============================================================================
// Simple Access
// ============================================================================

#[test]
fn test_single_field() {
    let stage = parse(".name").unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![Expr::Key("name".to_string())])]
    );
}

#[test]
fn test_index_only_stage() {
    let stage = parse("[0]").unwrap();
    assert_eq!(stage.steps, vec![Expr::Collect(Some(Literal::Number(0)))]);
}

#[test]
fn test_empty_brackets_stage() {
    let stage = parse("[]").unwrap();
    assert_eq!(stage.steps, vec![Expr::Collect(None)]);
}

#[test]
fn test_quoted_key_stage() {
    let stage = parse(r#".["first name"]"#).unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![Expr::Collect(Some(Literal::String(
            "first name".to_string()
        )))])]
    );
}

#[test]
fn test_field_then_brackets() {
    let stage = parse(".users[0]").unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![
            Expr::Key("users".to_string()),
            Expr::Collect(Some(Literal::Number(0))),
        ])]
    );
}

#[test]
fn test_consecutive_brackets() {
    let stage = parse(".grid[1][2]").unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![
            Expr::Key("grid".to_string()),
            Expr::Collect(Some(Literal::Number(1))),
            Expr::Collect(Some(Literal::Number(2))),
        ])]
    );
}

// ============================================================================
// Nesting: each dot opens a new group at the end of the last
// ============================================================================

#[test]
fn test_dotted_chain_nests() {
    let stage = parse(".a.b").unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![
            Expr::Key("a".to_string()),
            Expr::Access(vec![Expr::Key("b".to_string())]),
        ])]
    );
}

#[test]
fn test_chain_with_index_nests() {
    let stage = parse(".a[0].b").unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![
            Expr::Key("a".to_string()),
            Expr::Collect(Some(Literal::Number(0))),
            Expr::Access(vec![Expr::Key("b".to_string())]),
        ])]
    );
}

#[test]
fn test_deep_chain_nests() {
    let stage = parse(".a.b.c").unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![
            Expr::Key("a".to_string()),
            Expr::Access(vec![
                Expr::Key("b".to_string()),
                Expr::Access(vec![Expr::Key("c".to_string())]),
            ]),
        ])]
    );
}

#[test]
fn test_bracket_led_stage_with_chain() {
    let stage = parse("[0].name").unwrap();
    assert_eq!(
        stage.steps,
        vec![
            Expr::Collect(Some(Literal::Number(0))),
            Expr::Access(vec![Expr::Key("name".to_string())]),
        ]
    );
}

#[test]
fn test_dot_before_brackets() {
    // '.[0]' and '[0]' read the same array element.
    let stage = parse(".[0]").unwrap();
    assert_eq!(
        stage.steps,
        vec![Expr::Access(vec![Expr::Collect(Some(Literal::Number(0)))])]
    );
}

// ============================================================================
// Error Cases
// ============================================================================

#[test]
fn test_stage_must_start_with_dot_or_bracket() {
    let result = parse("name");
    assert!(matches!(
        result,
        Err(ParseError::UnsupportedStage(Token::Key(_)))
    ));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("must begin with '.' or '['")
    );
}

#[test]
fn test_quoted_string_stage_is_unsupported() {
    let result = parse(r#""name""#);
    assert!(matches!(
        result,
        Err(ParseError::UnsupportedStage(Token::String(_)))
    ));
}

#[test]
fn test_unclosed_bracket() {
    assert!(matches!(parse(".a["), Err(ParseError::UnclosedBracket)));
    assert!(matches!(parse(".a[0"), Err(ParseError::UnclosedBracket)));
    assert!(matches!(
        parse(r#".a["key""#),
        Err(ParseError::UnclosedBracket)
    ));
}

#[test]
fn test_unclosed_bracket_with_padding() {
    // Trailing whitespace never rescues an open bracket.
    let inputs = vec![".a[0 ", ".a[0   ", ".a[ ", "  .a[0  "];

    for input in inputs {
        assert!(
            matches!(parse(input), Err(ParseError::UnclosedBracket)),
            "Expected UnclosedBracket for input: {:?}",
            input
        );
    }
}

#[test]
fn test_unmatched_bracket_close() {
    assert!(matches!(
        parse(".a]"),
        Err(ParseError::UnmatchedBracketClose)
    ));
}

#[test]
fn test_dot_needs_accessor() {
    let result = parse(".a.");
    assert!(matches!(
        result,
        Err(ParseError::ExpectedAccessor { found: None })
    ));
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("found end of stage")
    );
}

#[test]
fn test_double_dot_is_rejected() {
    assert!(matches!(
        parse("..a"),
        Err(ParseError::ExpectedAccessor {
            found: Some(Token::Dot)
        })
    ));
}

#[test]
fn test_key_must_follow_its_dot() {
    let result = parse(".a b");
    assert!(matches!(
        result,
        Err(ParseError::UnexpectedToken(Token::Key(_)))
    ));
}

#[test]
fn test_bracket_body_must_be_literal() {
    assert!(matches!(
        parse(".a[b]"),
        Err(ParseError::InvalidCollectBody(Token::Key(_)))
    ));
    assert!(matches!(
        parse(".a[.]"),
        Err(ParseError::InvalidCollectBody(Token::Dot))
    ));
}

#[test]
fn test_bracket_body_single_literal_only() {
    assert!(matches!(
        parse(".a[0 1]"),
        Err(ParseError::InvalidCollectBody(Token::Number(_)))
    ));
    assert!(matches!(
        parse(r#".a["x" "y"]"#),
        Err(ParseError::InvalidCollectBody(Token::String(_)))
    ));
}

#[test]
fn test_oversized_index_is_rejected() {
    let result = parse(".a[99999999999999999999999999]");
    assert!(matches!(result, Err(ParseError::InvalidIndex(_))));
    assert!(result.unwrap_err().to_string().contains("too large"));
}

#[test]
fn test_errors_are_values_not_panics() {
    // Every malformed stage comes back as Err, whatever the shape.
    let inputs = vec![
        "..", ".[", "]", "][", ".a..b", "[|]", ".a.[", "[[0]]", ".a]b",
    ];

    for input in inputs {
        assert!(parse(input).is_err(), "Expected error for input: {:?}", input);
    }
}
