//! The lexer for guarded-command programs.
//!
//! ```
//! use gcl_playground::lexer::{Lexer, Token};
//!
//! let mut lexer = Lexer::new("x := y");
//! assert_eq!(lexer.next_lexeme().unwrap().token, Token::Identifier);
//! assert_eq!(lexer.next_lexeme().unwrap().token, Token::Assign);
//! lexer.rewind();
//! assert_eq!(lexer.next_lexeme().unwrap().token, Token::Assign);
//! assert_eq!(lexer.next_lexeme().unwrap().ident(), Some("y"));
//! assert!(lexer.next_lexeme().is_err());
//! ```
//!
//! Every lexeme ever produced is remembered, so that after a [`Lexer::rewind`] the same lexeme is
//! handed out again instead of being re-read from the source. Characters the lexer cannot make
//! sense of come out as lexemes whose token is [`Token::Error`].

use std::fmt;
use std::str::Chars;
use thiserror::Error;

const KEYWORDS: &[(&str, Token)] = &[("skip", Token::Skip)];

/// A category of lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Token {
    Identifier,
    Plus,
    /// `:=`
    Assign,
    Comma,
    Semicolon,
    LBrace,
    RBrace,
    /// The `skip` keyword.
    Skip,
    /// Represents a lexing error.
    Error,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Token::*;

        let name = match self {
            Identifier => "identifier",
            Plus => "'+'",
            Assign => "':='",
            Comma => "','",
            Semicolon => "';'",
            LBrace => "'{'",
            RBrace => "'}'",
            Skip => "'skip'",
            Error => "lex error",
        };
        write!(f, "{}", name)
    }
}

/// One "word" in the stream returned by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lexeme<'s> {
    pub token: Token,
    pub lexeme: &'s str,
    /// The position just before the first character in the lexeme.
    pub start: Position,
    /// The position just after the last character in the lexeme.
    pub end: Position,
}

impl<'s> Lexeme<'s> {
    /// The name of the variable, if this lexeme is an identifier.
    pub fn ident(&self) -> Option<&'s str> {
        match self.token {
            Token::Identifier => Some(self.lexeme),
            _ => None,
        }
    }
}

/// A position in the source text. Positions are _between_ characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Byte offset from the beginning of the source string.
    pub pos: usize,
    /// Line number. Zero-indexed.
    pub line: usize,
    /// Column number, counted in bytes. Zero-indexed.
    pub col: usize,
    /// Column number, counted in utf8 codepoints. Zero-indexed.
    pub utf8_col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.utf8_col)
    }
}

impl Position {
    fn advance(&mut self, ch: char) {
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.col = 0;
            self.utf8_col = 0;
            self.line += 1;
        } else {
            self.col += ch.len_utf8();
            self.utf8_col += 1;
        }
    }
}

/// Returned by the lexer once it has run out of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no more tokens")]
pub struct EndOfInput {
    /// The end of the source text.
    pub pos: Position,
}

#[derive(Debug, Clone)]
pub struct Lexer<'s> {
    source: &'s str,
    // The _remaining, unread_ source text
    chars: Chars<'s>,
    position: Position,
    // At most one character read past the end of a word, to be handed out again by the next read.
    pushback: Option<char>,
    // Every lexeme produced so far, with `None` marking the end of input. Used to rewind.
    stream: Vec<Option<Lexeme<'s>>>,
    cursor: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Lexer<'s> {
        Lexer {
            source,
            chars: source.chars(),
            position: Position::default(),
            pushback: None,
            stream: vec![],
            cursor: 0,
        }
    }

    /// The text being lexed.
    pub fn source(&self) -> &'s str {
        self.source
    }

    /// Return the next lexeme, or `EndOfInput` if the source has been used up.
    pub fn next_lexeme(&mut self) -> Result<Lexeme<'s>, EndOfInput> {
        if self.cursor == self.stream.len() {
            // End of input is stored once. Reading past it leaves the cursor where it is.
            if let Some(None) = self.stream.last() {
                return Err(EndOfInput { pos: self.position });
            }
            let lexeme = self.lex_one();
            match &lexeme {
                Some(lexeme) => log::trace!(
                    "lexed {} {:?} at {}",
                    lexeme.token,
                    lexeme.lexeme,
                    lexeme.start
                ),
                None => log::trace!("lexed end of input at {}", self.position),
            }
            self.stream.push(lexeme);
        }
        let lexeme = self.stream[self.cursor];
        self.cursor += 1;
        lexeme.ok_or(EndOfInput { pos: self.position })
    }

    /// Step back by one lexeme, so that the next call to `next_lexeme` returns the same thing the
    /// previous one did. Does nothing if nothing has been read yet.
    pub fn rewind(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            log::trace!("rewound to lexeme {}", self.cursor);
        }
    }

    fn lex_one(&mut self) -> Option<Lexeme<'s>> {
        use Token::*;

        loop {
            let start = self.position;
            let token = match self.next_char()? {
                ' ' | '\n' | '\r' => continue,
                '+' => Plus,
                ',' => Comma,
                ';' => Semicolon,
                '{' => LBrace,
                '}' => RBrace,
                ':' => self.lex_assign(),
                ch if ch.is_ascii_alphabetic() => self.lex_word(start),
                _ => Error,
            };
            return Some(Lexeme {
                token,
                lexeme: &self.source[start.pos..self.position.pos],
                start,
                end: self.position,
            });
        }
    }

    // The ':' has already been consumed.
    fn lex_assign(&mut self) -> Token {
        let before = self.position;
        match self.next_char() {
            Some('=') => Token::Assign,
            Some(ch) => {
                self.unread_char(ch, before);
                Token::Error
            }
            None => Token::Error,
        }
    }

    // The first letter has already been consumed.
    fn lex_word(&mut self, start: Position) -> Token {
        loop {
            let before = self.position;
            match self.next_char() {
                Some(ch) if ch.is_ascii_alphabetic() => (),
                Some(ch) => {
                    self.unread_char(ch, before);
                    break;
                }
                None => break,
            }
        }
        let word = &self.source[start.pos..self.position.pos];
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == word)
            .map(|(_, token)| *token)
            .unwrap_or(Token::Identifier)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = match self.pushback.take() {
            Some(ch) => ch,
            None => self.chars.next()?,
        };
        self.position.advance(ch);
        Some(ch)
    }

    fn unread_char(&mut self, ch: char, before: Position) {
        debug_assert!(self.pushback.is_none());
        self.pushback = Some(ch);
        self.position = before;
    }
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Lexeme<'s>;

    fn next(&mut self) -> Option<Lexeme<'s>> {
        self.next_lexeme().ok()
    }
}
