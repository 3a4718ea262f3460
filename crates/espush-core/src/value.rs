//! Opaque literal values carried through translation.
//!
//! The translator never interprets a value; it only pairs it with the
//! originating node's type tag so downstream wire encoders can render it
//! correctly (quoting text, leaving numbers bare).

use crate::schema::ColumnType;
use serde::{Deserialize, Serialize};

///
/// Value
///
/// Evaluated literal payload. Variants exist for encoder routing only;
/// no arithmetic or comparison semantics live here.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(String),
    Text(String),
    Bytes(Vec<u8>),
    Null,
}

impl Value {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stable human-readable value kind label for diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Int(_) => "Int",
            Self::UInt(_) => "UInt",
            Self::Float(_) => "Float",
            Self::Decimal(_) => "Decimal",
            Self::Text(_) => "Text",
            Self::Bytes(_) => "Bytes",
            Self::Null => "Null",
        }
    }
}

///
/// ExtLiteral
///
/// One evaluated value plus the type tag of the node it came from.
/// Immutable once constructed.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtLiteral {
    pub value: Value,
    pub ty: ColumnType,
}

impl ExtLiteral {
    #[must_use]
    pub const fn new(value: Value, ty: ColumnType) -> Self {
        Self { value, ty }
    }
}
