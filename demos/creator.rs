//! Interactive console loop for building magic squares.
//!
//! Repeatedly asks for an odd, positive order, prints the square, and
//! quits when 0 is entered.

use std::io::{self, BufRead, Write};

fn read_size(stdin: &mut impl BufRead) -> Option<usize> {
    loop {
        print!("Please enter your magic square's size: ");
        io::stdout().flush().ok();

        let mut entry = String::new();
        if stdin.read_line(&mut entry).ok()? == 0 {
            return None;
        }
        match entry.trim().parse::<usize>() {
            Ok(n) if n == 0 || n % 2 == 1 => return Some(n),
            _ => {
                println!();
                println!("That value was invalid.");
                println!("A magic square can only have a positive, odd integer size.");
                print!("Try again. ");
            }
        }
    }
}

fn main() {
    let mut stdin = io::stdin().lock();

    println!("Hello! Welcome to the magic square creator.");
    println!("You may quit at any time by typing the number 0.");
    println!("A magic square can only have a positive, odd integer size.");

    while let Some(n) = read_size(&mut stdin) {
        if n == 0 {
            break;
        }
        match magic_square::build(n) {
            Ok(sq) => println!("{sq}\n"),
            Err(e) => println!("{e}\n"),
        }
        println!("Would you like to make another square?");
    }
    println!("Bye!");
}
