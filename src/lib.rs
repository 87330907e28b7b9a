//! # GCL Playground
//!
//! Typesets programs in a small subset of the Guarded Command Language (assignments, `skip`,
//! sequencing with `;`, and `{...}` conditions) as HTML with inline MathJax.
//!
//! ```
//! use gcl_playground::compile;
//!
//! assert_eq!(compile("a := b + c"), r"<p>\(a \coloneqq b + c\)</p>");
//! assert_eq!(compile("skip"), "<p><strong>skip</strong></p>");
//! ```
//!
//! Malformed programs still produce output: everything up to the mistake is rendered, followed
//! by a description of what went wrong.
//!
//! ```
//! use gcl_playground::compile;
//!
//! assert_eq!(compile("a :="), r"<p>\(a \coloneqq \) expected a variable</p>");
//! ```

pub mod lexer;
mod parse_error;
mod parser;
mod render;

pub use lexer::{EndOfInput, Lexeme, Lexer, Position, Token};
pub use parse_error::{Diagnostic, ParseError, ParseErrorCause};
pub use parser::{Parsed, Parser, Partial};
pub use render::HOST_ARGUMENT_ERROR;

/// Run the lexer and parser over `source`, keeping the error (if any) separate from the output.
pub fn parse(source: &str) -> Parsed {
    Parser::new(Lexer::new(source)).parse()
}

/// Compile a program into a paragraph of typeset HTML. If the program is malformed, the
/// paragraph holds as much as could be rendered followed by the error message.
pub fn compile(source: &str) -> String {
    match parse(source) {
        Ok(html) => render::paragraph(&html),
        Err(partial) => {
            log::debug!("compile error at {}: {}", partial.error.position(), partial.error);
            render::paragraph_with_error(&partial.html, &partial.error)
        }
    }
}

/// Compile on behalf of a host that passes its arguments along as they came. Exactly one
/// argument, the source, is expected; anything else gets [`HOST_ARGUMENT_ERROR`] back without
/// compiling anything.
pub fn compile_args<S: AsRef<str>>(args: &[S]) -> String {
    match args {
        [source] => compile(source.as_ref()),
        _ => {
            log::debug!("expected exactly one argument, got {}", args.len());
            HOST_ARGUMENT_ERROR.to_owned()
        }
    }
}
