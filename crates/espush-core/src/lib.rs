//! Core translation layer for espush: source expression trees, tuple shapes,
//! literal evaluation, and the fail-closed conjunct-to-disjunct predicate
//! translator consumed by scan planning.
#![warn(unreachable_pub)]

pub mod eval;
pub mod expr;
pub mod predicate;
pub mod schema;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No evaluation contexts or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        expr::{CompareOp, CompoundOp, Expr, SlotRef},
        predicate::{ExtPredicate, Unrepresentable, translate},
        schema::{ColumnType, SlotDescriptor, SlotId, TupleShape},
        value::{ExtLiteral, Value},
    };
}
