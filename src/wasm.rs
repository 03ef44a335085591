//! WebAssembly bindings for trit sets.
//!
//! Trits cross the boundary as one-character strings (`"T"`, `"F"`, `"U"`).

use wasm_bindgen::prelude::*;
use crate::{clamp_trim, Trit, TritSet};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_trit(value: &str) -> Result<Trit, JsError> {
    let mut chars = value.chars();
    match (chars.next().and_then(Trit::from_char), chars.next()) {
        (Some(trit), None) => Ok(trit),
        _ => Err(JsError::new(&format!("invalid trit: {:?}", value))),
    }
}

/// WebAssembly-friendly trit set wrapper.
#[wasm_bindgen]
pub struct WasmTritSet {
    inner: TritSet,
}

#[wasm_bindgen]
impl WasmTritSet {
    /// Create an empty set. `size` is advisory only.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Self {
        Self { inner: TritSet::with_size(size) }
    }

    /// Parse a set from its character form.
    #[wasm_bindgen]
    pub fn parse(text: &str) -> Result<WasmTritSet, JsError> {
        let inner = text.parse::<TritSet>()
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(Self { inner })
    }

    /// Read one trit.
    #[wasm_bindgen]
    pub fn get(&self, index: usize) -> String {
        self.inner.get(index).to_string()
    }

    /// Write one trit.
    #[wasm_bindgen]
    pub fn set(&mut self, index: usize, value: &str) -> Result<(), JsError> {
        let trit = parse_trit(value)?;
        self.inner.try_set(index, trit)
            .map_err(|e| JsError::new(&format!("{}", e)))?;
        Ok(())
    }

    /// Logical length in trits.
    #[wasm_bindgen]
    pub fn length(&self) -> usize {
        self.inner.len()
    }

    /// Allocated storage words.
    #[wasm_bindgen]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[wasm_bindgen]
    pub fn shrink(&mut self) {
        self.inner.shrink();
    }

    /// Trim to `n` trits. Negative values trim everything.
    #[wasm_bindgen]
    pub fn trim(&mut self, n: i32) {
        self.inner.trim(clamp_trim(n.into()));
    }

    #[wasm_bindgen]
    pub fn and(&self, other: &WasmTritSet) -> WasmTritSet {
        Self { inner: &self.inner & &other.inner }
    }

    #[wasm_bindgen]
    pub fn or(&self, other: &WasmTritSet) -> WasmTritSet {
        Self { inner: &self.inner | &other.inner }
    }

    #[wasm_bindgen]
    pub fn not(&self) -> WasmTritSet {
        Self { inner: !&self.inner }
    }

    #[wasm_bindgen]
    pub fn equals(&self, other: &WasmTritSet) -> bool {
        self.inner == other.inner
    }

    /// The set in character form.
    #[wasm_bindgen]
    pub fn text(&self) -> String {
        self.inner.to_string()
    }

    /// Cardinality as a JSON object.
    #[wasm_bindgen]
    pub fn cardinality_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.inner.cardinality())
            .map_err(|e| JsError::new(&format!("{}", e)))
    }
}

impl Default for WasmTritSet {
    fn default() -> Self {
        Self::new(0)
    }
}
