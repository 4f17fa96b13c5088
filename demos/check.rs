//! Check a grid read from stdin for the magic property.
//!
//! One row per line, values separated by whitespace. Exits 0 if the grid
//! is a magic square, 1 otherwise (including unparsable input).
//!
//! Example:
//!   cargo run --example generate -- 5 | cargo run --example check

use std::io::{self, BufRead};

fn main() {
    let mut grid: Vec<Vec<i64>> = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.unwrap_or_default();
        if line.trim().is_empty() {
            continue;
        }
        let row: Vec<i64> = line
            .split_whitespace()
            .map(|tok| tok.parse().unwrap_or(-1))
            .collect();
        grid.push(row);
    }

    if magic_square::is_magic(&grid) {
        println!("magic");
    } else {
        println!("not magic");
        std::process::exit(1);
    }
}
