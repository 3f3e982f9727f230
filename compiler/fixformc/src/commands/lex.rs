//! The `lex` command: dump the token stream of a file.

use fixform_lexer::{LexOptions, LexToken, TokenStream};
use fixform_lexer_core::SourceBuffer;

use super::read_file;

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, options: LexOptions) {
    let content = read_file(path);
    let buf = SourceBuffer::new(&content);
    let mut stream = TokenStream::new(&buf, options);
    let tokens: Vec<LexToken> = stream.by_ref().collect();
    let errors = stream.into_errors();

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {}", render_token(&buf, token));
    }

    if !errors.is_empty() {
        println!();
        println!(
            "{} error(s); run `fixform check {path}` for details",
            errors.len()
        );
    }
}

/// `line:col kind "text"`, followed by ` = value` for cooked literals.
fn render_token(buf: &SourceBuffer, token: &LexToken) -> String {
    let (line, col) = buf.line_col(token.span.start);
    let text = buf.text(token.span);
    match &token.value {
        Some(value) => format!("{line}:{col} {} {text:?} = {value}", token.kind),
        None => format!("{line}:{col} {} {text:?}", token.kind),
    }
}
