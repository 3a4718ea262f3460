//! Literal evaluation boundary.
//!
//! Translation delegates all literal materialization to an [`EvalContext`];
//! the translator itself never inspects a value. The contract is total for
//! constant/foldable expressions; anything else yields a best-effort null
//! literal rather than an error.

use crate::{
    expr::Expr,
    schema::ColumnType,
    value::{ExtLiteral, Value},
};

///
/// EvalContext
///
/// External evaluation service: `evaluate(expression) -> (value, type tag)`.
///

pub trait EvalContext {
    fn evaluate(&self, expr: &Expr) -> ExtLiteral;
}

///
/// ConstFold
///
/// Default evaluation context for already-folded trees: literal nodes are
/// unwrapped (through casts, which retag the result with the cast's target
/// type) and everything else folds to a null literal.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct ConstFold;

impl EvalContext for ConstFold {
    fn evaluate(&self, expr: &Expr) -> ExtLiteral {
        match expr {
            Expr::Literal { value, ty } => ExtLiteral::new(value.clone(), *ty),
            Expr::Cast { ty, child } => {
                let inner = self.evaluate(child);
                ExtLiteral::new(inner.value, *ty)
            }
            other => {
                // Best-effort contract for non-constant input.
                let ty = other.declared_type().unwrap_or(ColumnType::Text);
                ExtLiteral::new(Value::Null, ty)
            }
        }
    }
}

///
/// TESTS
///
