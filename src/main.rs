use std::io::{self, BufRead};

use calyard::evaluate_line;
use clap::Parser;

/// calyard evaluates one line of infix arithmetic and prints the result
/// with two decimal places, or `[error]` if the line cannot be evaluated.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The expression to evaluate. When omitted, one line is read from
    /// standard input instead.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let line = args.expression.map_or_else(read_stdin_line, Some);

    match line {
        Some(line) => match evaluate_line(&line) {
            Ok(result) => println!("{result:.2}"),
            Err(e) => {
                eprintln!("{e}");
                println!("[error]");
            },
        },
        None => println!("[error]"),
    }
}

/// Reads one line from stdin, of unbounded length.
///
/// Returns `None` when the stream is already exhausted or unreadable; the
/// caller collapses that to the same `[error]` marker as every evaluation
/// failure.
fn read_stdin_line() -> Option<String> {
    let mut line = String::new();

    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
    }
}
