//! Context-sensitive scanner for fixed-form Fortran.
//!
//! A context-free grammar cannot see columns, so the pieces of fixed-form
//! source that depend on them are recognized here: comment lines,
//! continuation markers in column 6, statement ends across comments and
//! line breaks, and literals whose spelling the grammar cannot decide
//! (`1.EQ.2`, `1. 5`, `'it''s'`, `'FF'Z`).
//!
//! # Architecture
//!
//! ```text
//! host grammar engine ──(ScanCursor, ValidKinds)──▶ scan ──▶ Option<TokenKind>
//! ```
//!
//! - [`ScanCursor`]: the character access a host provides
//! - [`scan`] / [`try_scan`]: the dispatcher over six stateless sub-scanners
//! - [`ExternalScanner`]: the create/scan/serialize/deserialize/destroy
//!   lifecycle a tree-sitter style host expects
//! - [`SourceBuffer`] / [`Cursor`]: a ready-made host cursor over a string
//!
//! This crate has no `fixform_*` dependencies. A driver that tokenizes a
//! whole file lives in `fixform_lexer`.

mod cursor;
mod error;
mod external;
mod scanner;
mod source_buffer;
mod span;
mod tag;

pub use cursor::{utf8_char_width, Cursor, ScanCursor};
pub use error::ScanError;
pub use external::ExternalScanner;
pub use scanner::{scan, try_scan, COMMENT_COLUMN, CONTINUATION_COLUMN};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::Span;
pub use tag::{TokenKind, ValidKinds};
