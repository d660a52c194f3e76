//! Theatre Script CLI.

use theatrec::commands::{lex_file, repl, run_file};

fn main() {
    theatrec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: theatre run <file.tasm>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: theatre lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "repl" => repl(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("theatre {}", env!("CARGO_PKG_VERSION"));
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Theatre Script");
    println!();
    println!("Usage: theatre <command> [args]");
    println!();
    println!("Commands:");
    println!("  run <file>    Execute a script and print its result");
    println!("  lex <file>    Tokenize a file and print the token stream");
    println!("  repl          Start an interactive session");
    println!("  help          Show this message");
    println!("  version       Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=theatre_vm=debug) to enable tracing.");
}
