//! Module: schema
//! Responsibility: tuple shapes, slot descriptors, and the semantic column types
//! exposed to predicate translation.
//! Does not own: expression trees or literal evaluation.
//! Boundary: upstream planning owns slot assignment; this layer only resolves.

use crate::expr::SlotRef;
use serde::{Deserialize, Serialize};

///
/// SlotId
///
/// Opaque slot identifier assigned by upstream query planning.
/// Resolution is by exact identifier equality only.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SlotId(pub u32);

///
/// ColumnType
///
/// Semantic type tag of a column or literal node.
///
/// Char, Varchar, and Text form the "string family": distinct tags that are
/// mutually compatible for membership-test validation. Every other tag only
/// matches itself.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ColumnType {
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Decimal,
    Date,
    DateTime,
    Char,
    Varchar,
    Text,
}

impl ColumnType {
    #[must_use]
    pub const fn is_string_family(self) -> bool {
        matches!(self, Self::Char | Self::Varchar | Self::Text)
    }

    /// Stable human-readable type label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::TinyInt => "TinyInt",
            Self::SmallInt => "SmallInt",
            Self::Int => "Int",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Decimal => "Decimal",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::Char => "Char",
            Self::Varchar => "Varchar",
            Self::Text => "Text",
        }
    }
}

///
/// SlotDescriptor
///
/// Maps one slot identifier to its column name and semantic type.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SlotDescriptor {
    pub id: SlotId,
    pub column: String,
    pub ty: ColumnType,
}

impl SlotDescriptor {
    #[must_use]
    pub fn new(id: SlotId, column: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            id,
            column: column.into(),
            ty,
        }
    }
}

///
/// TupleShape
///
/// The set of slot descriptors visible to one translation call.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TupleShape {
    slots: Vec<SlotDescriptor>,
}

impl TupleShape {
    #[must_use]
    pub const fn new(slots: Vec<SlotDescriptor>) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn slots(&self) -> &[SlotDescriptor] {
        &self.slots
    }

    /// Resolve one slot identifier by exact equality; first match wins.
    #[must_use]
    pub fn resolve(&self, id: SlotId) -> Option<&SlotDescriptor> {
        self.slots.iter().find(|slot| slot.id == id)
    }

    /// Resolve a slot reference through its first underlying identifier.
    ///
    /// A reference carrying multiple identifiers is not disambiguated; only
    /// the first is consulted. A reference carrying none resolves to
    /// not-found.
    #[must_use]
    pub fn resolve_ref(&self, slot_ref: &SlotRef) -> Option<&SlotDescriptor> {
        self.resolve(slot_ref.first_id()?)
    }
}

///
/// TESTS
///
