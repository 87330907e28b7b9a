//! A recursive-descent parser that typesets guarded-command programs as it goes.
//!
//! The grammar:
//!
//! ```text
//! SPEC    -> COND? EXPR
//! EXPR    -> (ASSIGN | "skip") COND? EXPR'
//! EXPR'   -> ";" EXPR | ε
//! ASSIGN  -> ID ASSIGN' MATH
//! ASSIGN' -> "," ID ASSIGN' MATH "," | ":="
//! MATH    -> ID MATH'
//! MATH'   -> "+" MATH | ε
//! COND    -> "{" MATH "}"
//! ```
//!
//! The tail rules `EXPR'`, `ASSIGN'` and `MATH'` are loops rather than recursive calls, so that
//! long sums and long sequences use constant stack.
//!
//! Parsing never throws away output. Every rule appends to one buffer as it goes, and closes any
//! math it opened even when it fails, so that the final [`Partial`] shows the program up to the
//! point where it went wrong.

use crate::lexer::{Lexer, Token};
use crate::parse_error::{ParseError, ParseErrorCause};
use crate::render::*;
use std::error;
use std::fmt;
use ParseErrorCause::*;

/// Rendered HTML, or as much of it as could be rendered before an error.
pub type Parsed = Result<String, Partial>;

/// The output of a failed parse: the HTML rendered before the error was hit, and the error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    pub html: String,
    pub error: ParseError,
}

impl Partial {
    pub fn new(html: impl Into<String>, error: ParseError) -> Partial {
        Partial {
            html: html.into(),
            error,
        }
    }
}

impl From<ParseError> for Partial {
    fn from(error: ParseError) -> Partial {
        Partial::new("", error)
    }
}

impl fmt::Display for Partial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl error::Error for Partial {}

#[derive(Debug, Clone)]
pub struct Parser<'s> {
    lexer: Lexer<'s>,
    html: String,
}

impl<'s> Parser<'s> {
    pub fn new(lexer: Lexer<'s>) -> Parser<'s> {
        Parser {
            lexer,
            html: String::new(),
        }
    }

    /// Parse the whole source. It is an error for anything to be left over afterwards.
    pub fn parse(mut self) -> Parsed {
        match self.spec() {
            Ok(()) => {
                log::debug!("parsed {} bytes of source", self.lexer.source().len());
                Ok(self.html)
            }
            Err(error) => {
                log::debug!("{} at {}", error, error.position());
                Err(Partial::new(self.html, error))
            }
        }
    }

    fn spec(&mut self) -> Result<(), ParseError> {
        if self.eat_if(Token::LBrace) {
            self.cond()?;
            self.html.push_str(LINE_BREAK);
        }
        self.expr()?;
        match self.lexer.next_lexeme() {
            Err(_) => Ok(()),
            found => Err(ParseError::at(found, UnexpectedToken)),
        }
    }

    // COND, once its "{" has been consumed
    fn cond(&mut self) -> Result<(), ParseError> {
        log::trace!("cond");
        self.html.push_str(COND_OPEN);
        let result = self
            .math()
            .and_then(|()| self.expect(Token::RBrace, ExpectedCloseBrace));
        match result {
            Ok(()) => self.html.push_str(COND_CLOSE),
            Err(_) => self.html.push_str(MATH_CLOSE),
        }
        result
    }

    // EXPR, with EXPR' as the loop condition
    fn expr(&mut self) -> Result<(), ParseError> {
        loop {
            log::trace!("expr");
            let found = self.lexer.next_lexeme();
            match found {
                Ok(lexeme) if lexeme.token == Token::Identifier => {
                    self.lexer.rewind();
                    self.assign()?;
                }
                Ok(lexeme) if lexeme.token == Token::Skip => self.html.push_str(SKIP),
                _ => return Err(ParseError::at(found, ExpectedStatement)),
            }
            if self.eat_if(Token::LBrace) {
                self.html.push_str(LINE_BREAK);
                self.cond()?;
            }
            if !self.eat_if(Token::Semicolon) {
                return Ok(());
            }
            self.html.push_str(SEQUENCE);
        }
    }

    fn assign(&mut self) -> Result<(), ParseError> {
        log::trace!("assign");
        self.html.push_str(MATH_OPEN);
        let result = self.assign_body();
        self.html.push_str(MATH_CLOSE);
        result
    }

    // ID ASSIGN' MATH, inside the math delimiters
    fn assign_body(&mut self) -> Result<(), ParseError> {
        let target = self.ident()?;
        self.html.push_str(target);
        // Each extra target opens a pair that closes with its own value and a comma.
        let pairs = self.assign_rest()?;
        for _ in 0..pairs {
            self.math()?;
            self.expect(Token::Comma, ExpectedComma)?;
            self.html.push_str(LIST_SEP);
        }
        self.math()?;
        // A multiple assignment may end with a comma, like each of its inner pairs does.
        if pairs > 0 {
            self.eat_if(Token::Comma);
        }
        Ok(())
    }

    // ASSIGN': the targets after the first, up to and including ":=". Returns how many there were.
    fn assign_rest(&mut self) -> Result<usize, ParseError> {
        let mut pairs = 0;
        loop {
            let found = self.lexer.next_lexeme();
            match found {
                Ok(lexeme) if lexeme.token == Token::Assign => {
                    self.html.push_str(ASSIGN);
                    return Ok(pairs);
                }
                Ok(lexeme) if lexeme.token == Token::Comma => {
                    self.html.push_str(LIST_SEP);
                    let target = self.ident()?;
                    self.html.push_str(target);
                    pairs += 1;
                }
                _ => return Err(ParseError::at(found, ExpectedAssignOrComma)),
            }
        }
    }

    // MATH, with MATH' as the loop condition
    fn math(&mut self) -> Result<(), ParseError> {
        log::trace!("math");
        let term = self.ident()?;
        self.html.push_str(term);
        while self.eat_if(Token::Plus) {
            self.html.push_str(PLUS);
            let term = self.ident()?;
            self.html.push_str(term);
        }
        Ok(())
    }

    /***********
     * Helpers *
     ***********/

    fn ident(&mut self) -> Result<&'s str, ParseError> {
        let found = self.lexer.next_lexeme();
        match found {
            Ok(lexeme) if lexeme.token == Token::Identifier => Ok(lexeme.lexeme),
            _ => Err(ParseError::at(found, ExpectedVariable)),
        }
    }

    fn expect(&mut self, token: Token, cause: ParseErrorCause) -> Result<(), ParseError> {
        let found = self.lexer.next_lexeme();
        match found {
            Ok(lexeme) if lexeme.token == token => Ok(()),
            _ => Err(ParseError::at(found, cause)),
        }
    }

    /// Consume the next lexeme if it's a `token`. Otherwise leave it for someone else.
    fn eat_if(&mut self, token: Token) -> bool {
        match self.lexer.next_lexeme() {
            Ok(lexeme) if lexeme.token == token => true,
            Ok(_) => {
                self.lexer.rewind();
                false
            }
            Err(_) => false,
        }
    }
}
