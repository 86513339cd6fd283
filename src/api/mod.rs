//! Browser bindings
pub mod wasm;
