//! Ratify Core - Core types for the Ratify rule evaluation engine
//!
//! This crate provides the fundamental types shared across the Ratify
//! ecosystem:
//! - Value types for runtime record data
//! - Rule, condition and action definitions
//! - Error types

pub mod error;
pub mod model;
pub mod types;

// Re-export commonly used types
pub use error::CoreError;
pub use model::{Action, ActionType, Condition, Operator, Rule, RuleStatus};
pub use types::{Record, Value};
