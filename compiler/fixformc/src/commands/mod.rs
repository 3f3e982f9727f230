//! Command handlers for the `fixform` CLI.
//!
//! Each submodule implements one command. Shared helpers (`read_file`,
//! option parsing) live here.

mod check;
mod lex;

use fixform_lexer::LexOptions;

pub use check::check_file;
pub use lex::lex_file;

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Build [`LexOptions`] from `lex` flags. Returns the first unknown flag.
pub fn parse_lex_options<'a>(flags: &[&'a str]) -> Result<LexOptions, &'a str> {
    flags
        .iter()
        .try_fold(LexOptions::default(), |options, &flag| match flag {
            "--no-comments" => Ok(options.without_comments()),
            "--no-strings" => Ok(options.without_strings()),
            "--no-numbers" => Ok(options.without_numbers()),
            unknown => Err(unknown),
        })
}
