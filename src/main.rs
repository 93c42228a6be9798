use std::fs;

use clap::Parser;
use numex::evaluate;
use tracing_subscriber::EnvFilter;

/// numex is an easy to use calculator for integer arithmetic expressions,
/// with implicit multiplication and unary minus.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numex to treat the argument as a file path instead of an
    /// expression.
    #[arg(short, long)]
    file: bool,

    expression: String,
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.expression).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.expression);
            std::process::exit(1);
        })
    } else {
        args.expression
    };

    match evaluate(&source) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
