//! The `check` command: report lexical errors in a file.

use fixform_lexer::{LexError, LexOptions, TokenStream};
use fixform_lexer_core::SourceBuffer;

use super::read_file;

/// Tokenize a file and report every lexical error.
///
/// Exits with status 1 if there were any.
pub fn check_file(path: &str) {
    let content = read_file(path);
    let buf = SourceBuffer::new(&content);
    let mut stream = TokenStream::new(&buf, LexOptions::default());
    let token_count = stream.by_ref().count();
    let errors = stream.into_errors();

    if errors.is_empty() {
        println!("'{path}': {token_count} tokens, no errors");
        return;
    }

    for error in &errors {
        eprintln!("{}", render_error(path, &buf, error));
    }
    eprintln!();
    eprintln!("'{path}': {} error(s)", errors.len());
    std::process::exit(1);
}

/// `path:line:col: error: message`, plus an indented help line.
fn render_error(path: &str, buf: &SourceBuffer, error: &LexError) -> String {
    let (line, col) = buf.line_col(error.span.start);
    let mut rendered = format!("{path}:{line}:{col}: error: {error}");
    if let Some(help) = error.help {
        rendered.push_str("\n  help: ");
        rendered.push_str(help);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixform_lexer::{lex, LexErrorKind};
    use fixform_lexer_core::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_with_help() {
        let source = "      X = 1\n      M = B'12'\n";
        let buf = SourceBuffer::new(source);
        let errors = lex(source).errors;
        assert_eq!(errors.len(), 1);
        assert_eq!(
            render_error("main.f", &buf, &errors[0]),
            "main.f:2:11: error: invalid digit `2` in base-2 literal\n  \
             help: binary literals (`B`) take only the digits 0 and 1"
        );
    }

    #[test]
    fn error_without_help() {
        let buf = SourceBuffer::new("      X = 1.5");
        let error = LexError::new(Span::new(10, 13), LexErrorKind::FloatParseError);
        assert_eq!(
            render_error("a.f", &buf, &error),
            "a.f:1:11: error: malformed real literal"
        );
    }
}
