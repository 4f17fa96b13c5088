use wasm_bindgen::prelude::*;

use crate::{build, is_magic, MagicSquare};

/// Convert a MagicSquare to a JsValue (2D array of numbers).
fn square_to_js(sq: &MagicSquare) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&sq.to_rows()).map_err(|e| JsError::new(&e.to_string()))
}

/// Build the odd-order magic square of order n.
/// Returns a 2D array directly usable in JavaScript.
#[wasm_bindgen(js_name = build)]
pub fn build_js(n: u32) -> Result<JsValue, JsError> {
    let sq = build(n as usize).map_err(|e| JsError::new(&e.to_string()))?;
    square_to_js(&sq)
}

/// Check whether a 2D array of integers is a magic square.
///
/// Anything that does not deserialize to a grid of integers is not magic.
#[wasm_bindgen(js_name = isMagic)]
pub fn is_magic_js(grid: JsValue) -> bool {
    match serde_wasm_bindgen::from_value::<Vec<Vec<i64>>>(grid) {
        Ok(rows) => is_magic(&rows),
        Err(_) => false,
    }
}

/// A constructed magic square with its rendering and derived values.
#[wasm_bindgen]
pub struct WasmSquare {
    square: MagicSquare,
}

#[wasm_bindgen]
impl WasmSquare {
    /// Build the magic square of order `n`.
    ///
    /// `n` must be a positive odd integer.
    #[wasm_bindgen(constructor)]
    pub fn new(n: u32) -> Result<WasmSquare, JsError> {
        let square = build(n as usize).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmSquare { square })
    }

    /// The order of the square.
    pub fn order(&self) -> u32 {
        self.square.n() as u32
    }

    /// The common row/column/diagonal sum, n(n² + 1)/2.
    #[wasm_bindgen(js_name = magicConstant)]
    pub fn magic_constant(&self) -> u64 {
        self.square.magic_constant()
    }

    /// The cells as a 2D array of numbers.
    pub fn cells(&self) -> Result<JsValue, JsError> {
        square_to_js(&self.square)
    }

    /// The square rendered as aligned text, one row per line.
    pub fn render(&self) -> String {
        self.square.to_string()
    }
}
