//! Rule model definitions
//!
//! The declarative authoring model consumed by the evaluation engine:
//! rules, their conditions and actions, and the closed operator and
//! action-type enumerations.

pub mod action;
pub mod condition;
pub mod operator;
pub mod rule;

pub use action::{Action, ActionType};
pub use condition::Condition;
pub use operator::Operator;
pub use rule::{Rule, RuleStatus};
