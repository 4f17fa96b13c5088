//! Generate a magic square of the given odd order and print it.
//!
//! Usage: cargo run --example generate -- <n>
//!
//! Example:
//!   cargo run --example generate -- 7

use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let n: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        eprintln!("Usage: {} <n>", args[0]);
        std::process::exit(1);
    });

    match magic_square::build(n) {
        Ok(sq) => println!("{sq}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
