#![allow(dead_code)]

use gcl_playground::{parse, Lexer, ParseErrorCause, Position, Token};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn tokens(source: &str) -> Vec<Token> {
    Lexer::new(source).map(|lexeme| lexeme.token).collect()
}

pub fn lexemes(source: &str) -> Vec<&str> {
    Lexer::new(source).map(|lexeme| lexeme.lexeme).collect()
}

/// A position on the first line of the source, which is all ASCII.
pub fn col(col: usize) -> Position {
    Position {
        pos: col,
        line: 0,
        col,
        utf8_col: col,
    }
}

#[track_caller]
pub fn assert_parses(source: &str, expected: &str) {
    init_logger();
    match parse(source) {
        Ok(html) => assert_eq!(html, expected),
        Err(partial) => panic!(
            "failed to parse {:?}: {} (partial output {:?})",
            source, partial.error, partial.html
        ),
    }
}

#[track_caller]
pub fn assert_fails(
    source: &str,
    expected_html: &str,
    expected_cause: ParseErrorCause,
    expected_pos: Position,
) {
    init_logger();
    match parse(source) {
        Ok(html) => panic!("expected {:?} not to parse, but got {:?}", source, html),
        Err(partial) => {
            assert_eq!(partial.html, expected_html);
            assert_eq!(partial.error.cause(), &expected_cause);
            assert_eq!(partial.error.position(), expected_pos);
        }
    }
}
