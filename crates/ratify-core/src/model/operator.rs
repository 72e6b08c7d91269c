//! Condition operators
//!
//! Closed enumeration of every operator a condition may use. Legacy
//! symbolic spellings (`==`, `!=`, `>`, `>=`, `<`, `<=`) are accepted as
//! serde aliases and map onto the named variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Structural equality (==)
    #[serde(alias = "==")]
    Equals,
    /// Structural inequality (!=)
    #[serde(alias = "!=")]
    NotEquals,
    /// Numeric greater than (>)
    #[serde(alias = ">")]
    GreaterThan,
    /// Numeric greater than or equal (>=)
    #[serde(alias = ">=")]
    GreaterThanOrEqual,
    /// Numeric less than (<)
    #[serde(alias = "<")]
    LessThan,
    /// Numeric less than or equal (<=)
    #[serde(alias = "<=")]
    LessThanOrEqual,
    /// Substring (text), element membership (array) or key membership (object)
    Contains,
    /// Negated contains
    NotContains,
    /// Text prefix
    StartsWith,
    /// Text suffix
    EndsWith,
    /// Field value is a member of the operand array
    In,
    /// Negated in
    NotIn,
    /// Field is missing or null
    IsNull,
    /// Field is present and non-null
    IsNotNull,
    /// Empty text/array/object (missing counts as empty)
    IsEmpty,
    /// Negated is_empty
    IsNotEmpty,
}

impl Operator {
    /// Returns true if this operator compares numerically after coercion
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            Operator::GreaterThan
                | Operator::GreaterThanOrEqual
                | Operator::LessThan
                | Operator::LessThanOrEqual
        )
    }

    /// Returns true if this operator ignores its operand
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            Operator::IsNull | Operator::IsNotNull | Operator::IsEmpty | Operator::IsNotEmpty
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operator::Equals => "==",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::In => "in",
            Operator::NotIn => "not_in",
            Operator::IsNull => "is_null",
            Operator::IsNotNull => "is_not_null",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
        };
        write!(f, "{}", text)
    }
}
