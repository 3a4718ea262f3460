//! Module: expr
//! Responsibility: the read-only source expression tree handed in by upstream
//! query planning, one conjunct at a time.
//! Does not own: slot resolution, constant folding, or representability rules.
//! Boundary: the predicate translator consumes this surface; nothing mutates it.

use crate::{
    schema::{ColumnType, SlotId},
    value::Value,
};
use serde::{Deserialize, Serialize};

///
/// CompareOp
///
/// Comparison operator of a binary predicate node. Translation carries the
/// operator verbatim; no operand-order normalization happens at this layer.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum CompareOp {
    Eq = 0x01,
    Ne = 0x02,
    Lt = 0x03,
    Le = 0x04,
    Gt = 0x05,
    Ge = 0x06,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Stable human-readable operator symbol for diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

///
/// CompoundOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompoundOp {
    And,
    Or,
}

///
/// SlotRef
///
/// Reference to one or more underlying column slots. A reference is expected
/// to carry at least one identifier; resolution only ever consults the first.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SlotRef {
    slot_ids: Vec<SlotId>,
}

impl SlotRef {
    #[must_use]
    pub const fn new(slot_ids: Vec<SlotId>) -> Self {
        Self { slot_ids }
    }

    #[must_use]
    pub fn slot_ids(&self) -> &[SlotId] {
        &self.slot_ids
    }

    #[must_use]
    pub fn first_id(&self) -> Option<SlotId> {
        self.slot_ids.first().copied()
    }
}

///
/// Expr
///
/// One typed node of the source tree. Produced upstream; read-only here.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    SlotRef(SlotRef),
    Literal {
        value: Value,
        ty: ColumnType,
    },
    BinaryPred {
        op: CompareOp,
        children: Vec<Expr>,
    },
    CompoundPred {
        op: CompoundOp,
        children: Vec<Expr>,
    },
    InPred {
        negated: bool,
        children: Vec<Expr>,
    },
    FunctionCall {
        name: String,
        children: Vec<Expr>,
    },
    Cast {
        ty: ColumnType,
        child: Box<Expr>,
    },
}

impl Expr {
    #[must_use]
    pub fn slot(id: SlotId) -> Self {
        Self::SlotRef(SlotRef::new(vec![id]))
    }

    #[must_use]
    pub const fn literal(value: Value, ty: ColumnType) -> Self {
        Self::Literal { value, ty }
    }

    #[must_use]
    pub fn binary(op: CompareOp, left: Self, right: Self) -> Self {
        Self::BinaryPred {
            op,
            children: vec![left, right],
        }
    }

    #[must_use]
    pub fn compound(op: CompoundOp, left: Self, right: Self) -> Self {
        Self::CompoundPred {
            op,
            children: vec![left, right],
        }
    }

    #[must_use]
    pub fn in_pred(negated: bool, probe: Self, values: Vec<Self>) -> Self {
        let mut children = Vec::with_capacity(values.len() + 1);
        children.push(probe);
        children.extend(values);
        Self::InPred { negated, children }
    }

    #[must_use]
    pub fn function(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self::FunctionCall {
            name: name.into(),
            children,
        }
    }

    #[must_use]
    pub fn cast(ty: ColumnType, child: Self) -> Self {
        Self::Cast {
            ty,
            child: Box::new(child),
        }
    }

    /// Ordered child nodes; leaves yield the empty slice.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::SlotRef(_) | Self::Literal { .. } => &[],
            Self::BinaryPred { children, .. }
            | Self::CompoundPred { children, .. }
            | Self::InPred { children, .. }
            | Self::FunctionCall { children, .. } => children,
            Self::Cast { child, .. } => std::slice::from_ref(child),
        }
    }

    #[must_use]
    pub const fn as_slot_ref(&self) -> Option<&SlotRef> {
        match self {
            Self::SlotRef(slot_ref) => Some(slot_ref),
            _ => None,
        }
    }

    /// Strip one leading type-cast wrapper, if present.
    #[must_use]
    pub fn without_cast(&self) -> &Self {
        match self {
            Self::Cast { child, .. } => child,
            other => other,
        }
    }

    /// Declared type tag of this node, for nodes that carry one.
    ///
    /// Only literal and cast nodes declare a type; membership-test
    /// compatibility checks treat an undeclared type as a mismatch.
    #[must_use]
    pub const fn declared_type(&self) -> Option<ColumnType> {
        match self {
            Self::Literal { ty, .. } | Self::Cast { ty, .. } => Some(*ty),
            _ => None,
        }
    }
}
