pub mod builder;
pub mod error;
pub mod inputs;
pub mod outputs;
pub mod parse;
pub mod payload;
pub mod validate;
pub mod wasm;
