#![doc = include_str!("../README.md")]

mod error;
mod siamese;
mod square;
mod verify;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::{Error, Result};
pub use siamese::build;
pub use square::{MagicSquare, MAX_ORDER};
pub use verify::is_magic;
