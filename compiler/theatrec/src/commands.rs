//! Command handlers for the `theatre` CLI.
//!
//! Handlers report failures on stderr and exit with status 1.

use std::io;

use theatre_lexer::tokenize;
use theatre_vm::Output;

use crate::repl::Repl;
use crate::script::run_script;

/// Read a source file, exiting with a readable message on failure.
fn read_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|err| {
        eprintln!("{}", read_failure(path, &err));
        std::process::exit(1);
    })
}

/// One-line explanation of why `path` could not be loaded.
fn read_failure(path: &str, err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => format!("no such script: '{path}'"),
        io::ErrorKind::PermissionDenied => format!("not allowed to read '{path}'"),
        io::ErrorKind::InvalidData => format!("'{path}' is not valid UTF-8 text"),
        _ => format!("failed to read '{path}': {err}"),
    }
}

/// Run a script file and print its result, if any.
pub fn run_file(path: &str) {
    let content = read_file(path);
    match run_script(&content) {
        Ok(result) => {
            if !result.is_mono() {
                println!("{result}");
            }
        }
        Err(err) => {
            eprintln!("error in '{path}': {err}");
            std::process::exit(1);
        }
    }
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) {
    let content = read_file(path);
    match tokenize(&content) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in &tokens {
                match token.position {
                    Some(position) => println!("  {token} @ {position}"),
                    None => println!("  {token}"),
                }
            }
        }
        Err(err) => {
            eprintln!("error in '{path}': {err}");
            std::process::exit(1);
        }
    }
}

/// Start an interactive session on stdin.
pub fn repl() {
    println!("Theatre Script REPL");
    println!("Type `exit` to quit.");
    let mut session = Repl::new(Output::stdout(), io::stderr());
    if let Err(err) = session.run(io::stdin().lock()) {
        eprintln!("error reading input: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_failure_names_the_path() {
        let missing = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(read_failure("a.tasm", &missing), "no such script: 'a.tasm'");

        let binary = io::Error::from(io::ErrorKind::InvalidData);
        assert_eq!(
            read_failure("b.tasm", &binary),
            "'b.tasm' is not valid UTF-8 text"
        );
    }

    #[test]
    fn read_failure_falls_back_to_io_message() {
        let other = io::Error::other("disk on fire");
        assert_eq!(
            read_failure("c.tasm", &other),
            "failed to read 'c.tasm': disk on fire"
        );
    }
}
