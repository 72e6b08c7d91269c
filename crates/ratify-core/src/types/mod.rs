//! Runtime value types

pub mod value;

pub use value::{Record, Value};
