use gcl_playground::{parse, ParseErrorCause};

#[track_caller]
fn assert_diagnostic(source: &str, expected: &str) {
    colored::control::set_override(false);
    let partial = parse(source).unwrap_err();
    let diagnostic = partial.error.diagnostic("prog.gcl", source).to_string();
    assert_eq!(diagnostic, expected);
}

#[test]
fn test_diagnostic_points_at_error() {
    assert_diagnostic(
        "a := b c",
        "Parse Error: unexpected token\nAt 'prog.gcl' line 1.\n\na := b c\n       ^\n",
    );
    assert_diagnostic(
        "skip;\nx := y +",
        "Parse Error: expected a variable\nAt 'prog.gcl' line 2.\n\nx := y +\n        ^\n",
    );
}

#[test]
fn test_diagnostic_after_trailing_newline() {
    assert_diagnostic(
        "a :=\n",
        "Parse Error: expected a variable\nAt 'prog.gcl' line 2.\n\n\n^\n",
    );
}

#[test]
fn test_diagnostic_counts_codepoints() {
    assert_diagnostic(
        "a := é",
        "Parse Error: unrecognized character 'é'\nAt 'prog.gcl' line 1.\n\na := é\n     ^\n",
    );
}

#[test]
fn test_error_accessors() {
    let partial = parse("{a").unwrap_err();
    assert_eq!(partial.error.cause(), &ParseErrorCause::ExpectedCloseBrace);
    assert_eq!(partial.error.position().utf8_col, 2);
    assert_eq!(partial.to_string(), "expected '}'");
    assert_eq!(partial.error.to_string(), "expected '}'");
}
