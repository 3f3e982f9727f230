//! Fixed-form Fortran tokenizer CLI.

mod commands;
mod tracing_setup;

use commands::{check_file, lex_file, parse_lex_options};

fn main() {
    tracing_setup::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: fixform lex <file.f> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --no-comments   Hide comment markers and comment text");
                eprintln!("  --no-strings    Do not scan character literals");
                eprintln!("  --no-numbers    Do not scan numeric or BOZ literals");
                std::process::exit(1);
            }

            let mut file_path = None;
            let mut flags = Vec::new();
            for arg in args.iter().skip(2) {
                if arg.starts_with('-') {
                    flags.push(arg.as_str());
                } else if file_path.is_none() {
                    file_path = Some(arg.as_str());
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: fixform lex <file.f> [options]");
                std::process::exit(1);
            };

            let options = match parse_lex_options(&flags) {
                Ok(options) => options,
                Err(flag) => {
                    eprintln!("error: unknown option '{flag}'");
                    std::process::exit(1);
                }
            };

            lex_file(path, options);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: fixform check <file.f>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("fixform {}", env!("CARGO_PKG_VERSION"));
            println!("Context-sensitive tokenizer for fixed-form Fortran");
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Fixed-form Fortran tokenizer");
    println!();
    println!("Usage: fixform <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file.f>      Tokenize and display tokens");
    println!("  check <file.f>    Report lexical errors (exit 1 if any)");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Lex options:");
    println!("  --no-comments     Hide comment markers and comment text");
    println!("  --no-strings      Do not scan character literals");
    println!("  --no-numbers      Do not scan numeric or BOZ literals");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=fixform_lexer=trace) for scanner tracing.");
    println!();
    println!("Examples:");
    println!("  fixform lex main.f");
    println!("  fixform lex main.f --no-comments");
    println!("  fixform lex data.f --no-strings   # suffixed BOZ such as '7F'Z");
    println!("  fixform check main.f");
}
