use crate::lexer::{EndOfInput, Lexeme, Position, Token};
use colored::Colorize;
use std::error;
use std::fmt;
use thiserror::Error;

/// The first thing that went wrong while parsing, and where.
///
/// Displays as a short, plain-text message suitable for appending to the rendered output. Use
/// [`ParseError::diagnostic`] for a longer report that points at the offending line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    cause: ParseErrorCause,
    pos: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorCause {
    #[error("expected a statement")]
    ExpectedStatement,
    #[error("expected a variable")]
    ExpectedVariable,
    #[error("expected ',' or ':='")]
    ExpectedAssignOrComma,
    #[error("expected ','")]
    ExpectedComma,
    #[error("expected '}}'")]
    ExpectedCloseBrace,
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(String),
}

impl ParseError {
    pub fn new(cause: ParseErrorCause, pos: Position) -> ParseError {
        ParseError { cause, pos }
    }

    /// Blame `found` for not being what `expected` wanted. Lex errors are reported as such, since
    /// they're more informative than whatever the grammar was hoping for.
    pub(crate) fn at(
        found: Result<Lexeme, EndOfInput>,
        expected: ParseErrorCause,
    ) -> ParseError {
        match found {
            Ok(lexeme) if lexeme.token == Token::Error => ParseError::new(
                ParseErrorCause::UnrecognizedCharacter(lexeme.lexeme.to_owned()),
                lexeme.start,
            ),
            Ok(lexeme) => ParseError::new(expected, lexeme.start),
            Err(eof) => ParseError::new(expected, eof.pos),
        }
    }

    pub fn cause(&self) -> &ParseErrorCause {
        &self.cause
    }

    /// Where the error occurred: the start of the offending lexeme, or the end of the source.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// A multi-line report showing the offending line of `source` with a caret under the error.
    pub fn diagnostic<'a>(&'a self, filename: &'a str, source: &'a str) -> Diagnostic<'a> {
        Diagnostic {
            error: self,
            filename,
            source,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}

impl error::Error for ParseError {}

/// See [`ParseError::diagnostic`].
#[derive(Debug, Clone, Copy)]
pub struct Diagnostic<'a> {
    error: &'a ParseError,
    filename: &'a str,
    source: &'a str,
}

impl<'a> fmt::Display for Diagnostic<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pos = self.error.pos;
        writeln!(f, "{} {}", "Parse Error:".red().bold(), self.error.cause)?;
        writeln!(f, "At '{}' line {}.", self.filename, pos.line + 1)?;
        writeln!(f)?;
        // A position just past a trailing newline sits on a line `lines()` doesn't yield.
        let line = self.source.lines().nth(pos.line).unwrap_or("");
        writeln!(f, "{}", line)?;
        for _ in 0..pos.utf8_col {
            write!(f, " ")?;
        }
        writeln!(f, "{}", "^".red().bold())
    }
}
