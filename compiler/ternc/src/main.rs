//! `tern` command-line entry point.

use ternc::commands::{lex_file, parse_file, run_file};
use ternc::{init_tracing, parse_run_options};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "run" => {
            let options = match parse_run_options(&args[2..]) {
                Ok(options) => options,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    std::process::exit(1);
                }
            };
            let Some(path) = options.path.as_deref() else {
                eprintln!("error: missing file path");
                eprintln!("Usage: tern run <file.tern> [options]");
                std::process::exit(1);
            };
            run_file(path, &options);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: tern parse <file.tern>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: tern lex <file.tern>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tern script runner");
    println!();
    println!("Usage: tern <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>     Execute a script");
    println!("  parse <file>   Print the syntax tree");
    println!("  lex <file>     Print the token stream");
    println!();
    println!("Run options:");
    println!("  --input=<text>      Value returned by input()");
    println!("  --seed=<n>          Seed for random() and uuid()");
    println!("  --digest=<name>     Algorithm for hash(): md5 or sha512");
    println!("  --max-depth=<n>     Nested call limit");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=tern_eval=debug) for trace output.");
}
