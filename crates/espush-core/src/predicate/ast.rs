//! Normalized predicate model.
//!
//! Closed sum type over the three pushable shapes. Downstream wire encoders
//! switch exhaustively over the variants; nothing here executes anything.
//! Predicates are immutable once constructed.

use crate::{expr::CompareOp, schema::ColumnType, value::ExtLiteral};
use serde::{Deserialize, Serialize};

///
/// ExtBinaryPredicate
///
/// `column OP literal`. The operator is whatever the source node carried;
/// translation performs no operand-order normalization.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtBinaryPredicate {
    pub column: String,
    pub ty: ColumnType,
    pub op: CompareOp,
    pub literal: ExtLiteral,
}

///
/// ExtInPredicate
///
/// `column [NOT] IN (values…)`, values in source order.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtInPredicate {
    pub column: String,
    pub ty: ColumnType,
    pub values: Vec<ExtLiteral>,
    pub negated: bool,
}

///
/// ExtColumnDesc
///
/// Column descriptor carried by function predicates. Reserved for
/// multi-column passthrough support; currently always empty.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExtColumnDesc {
    pub column: String,
    pub ty: ColumnType,
}

///
/// ExtFunctionPredicate
///
/// Raw-query delegation: the marker function's evaluated argument is
/// forwarded verbatim to the backend.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtFunctionPredicate {
    pub name: String,
    pub columns: Vec<ExtColumnDesc>,
    pub values: Vec<ExtLiteral>,
}

///
/// ExtPredicate
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ExtPredicate {
    Binary(ExtBinaryPredicate),
    In(ExtInPredicate),
    Function(ExtFunctionPredicate),
}

impl ExtPredicate {
    /// Column name this predicate binds to, where one exists.
    /// Function predicates bind no column until multi-column support lands.
    #[must_use]
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Binary(pred) => Some(&pred.column),
            Self::In(pred) => Some(&pred.column),
            Self::Function(_) => None,
        }
    }
}
