//! The HTML and MathJax snippets that the parser stitches together.

/// Opens an inline MathJax expression.
pub const MATH_OPEN: &str = r"\(";
/// Closes an inline MathJax expression.
pub const MATH_CLOSE: &str = r"\)";
/// Opens a condition: a brace, inside math mode.
pub const COND_OPEN: &str = r"\(\{";
/// Closes a condition.
pub const COND_CLOSE: &str = r"\}\)";
/// Between the targets and the values of an assignment.
pub const ASSIGN: &str = r" \coloneqq ";
pub const PLUS: &str = " + ";
/// Between adjacent assignment targets, or adjacent assigned values.
pub const LIST_SEP: &str = ", ";
/// Between a statement and the condition that precedes or follows it.
pub const LINE_BREAK: &str = "<br/>\n";
/// Between two statements.
pub const SEQUENCE: &str = "; <br/>\n";
pub const SKIP: &str = "<strong>skip</strong>";

/// Shown in place of any output when the host calls in with the wrong number of arguments.
pub const HOST_ARGUMENT_ERROR: &str = "<p>Error parsing input.</p>";

/// Wrap a finished fragment in a paragraph.
pub fn paragraph(html: &str) -> String {
    format!("<p>{}</p>", html)
}

/// Wrap a partial fragment in a paragraph, followed by the message explaining why it stops short.
/// The message is escaped, since it may quote a character from the source.
pub fn paragraph_with_error(html: &str, message: &dyn std::fmt::Display) -> String {
    format!("<p>{} {}</p>", html, escape(&message.to_string()))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
