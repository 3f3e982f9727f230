//! Tokenizer driver for fixed-form Fortran.
//!
//! Drives the context-sensitive scanner in `fixform_lexer_core` over a
//! whole file and cooks the literals it finds.
//!
//! # Architecture
//!
//! ```text
//! source → SourceBuffer → TokenStream ─(scan / host fallback)→ LexToken
//!                                      └─(cook)→ LiteralValue | LexError
//! ```

mod cook;
mod lex_error;
mod options;
mod stream;
mod token;

use fixform_lexer_core::SourceBuffer;

pub use cook::{boz_value, int_value, real_value, split_kind_param, string_value};
pub use lex_error::{LexError, LexErrorKind};
pub use options::LexOptions;
pub use stream::TokenStream;
pub use token::{LexKind, LexToken, LiteralValue};

/// Tokens and errors of one file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LexOutput {
    pub tokens: Vec<LexToken>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Tokenize `source` with the default options.
pub fn lex(source: &str) -> LexOutput {
    lex_with(source, LexOptions::default())
}

/// Tokenize `source`.
pub fn lex_with(source: &str, options: LexOptions) -> LexOutput {
    let buf = SourceBuffer::new(source);
    let mut stream = TokenStream::new(&buf, options);
    let tokens = stream.by_ref().collect();
    LexOutput {
        tokens,
        errors: stream.into_errors(),
    }
}
