//! Module: predicate::translate
//! Responsibility: fail-closed translation of one conjunct into an ordered
//! disjunct list of normalized predicates.
//! Does not own: expression construction, constant folding, slot assignment,
//! or the backend's wire syntax.
//! Boundary: scan planning treats `Err` as "not pushable" and evaluates the
//! conjunct locally instead.

use crate::{
    eval::EvalContext,
    expr::{CompoundOp, Expr},
    predicate::ast::{ExtBinaryPredicate, ExtFunctionPredicate, ExtInPredicate, ExtPredicate},
    schema::{ColumnType, TupleShape},
};
use thiserror::Error as ThisError;

/// The one function name whose call nodes delegate a raw backend-native
/// query fragment. No other function is ever representable.
pub const PASSTHROUGH_FN: &str = "esquery";

///
/// Unrepresentable
///
/// The single failure outcome of translation. All causes (unresolved slot,
/// type mismatch, unsupported node shape, wrong child count) collapse here:
/// the caller's only legitimate reaction is local fallback, so finer detail
/// would go unused.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ThisError)]
#[error("conjunct is not representable as a pushable disjunct list")]
pub struct Unrepresentable;

/// Translate one conjunct into its disjunct list.
///
/// On success the returned predicates are jointly equivalent, as an OR-chain,
/// to the conjunct; their order is the left-to-right depth-first appearance
/// of the source nodes. On failure no list is returned at all, so a partially
/// built list can never leak to the caller.
pub fn translate(
    conjunct: &Expr,
    shape: &TupleShape,
    ctx: &impl EvalContext,
) -> Result<Vec<ExtPredicate>, Unrepresentable> {
    let mut disjuncts = Vec::new();
    build_disjuncts(conjunct, shape, ctx, &mut disjuncts)?;

    Ok(disjuncts)
}

/// True iff this node is a call to the passthrough marker function.
#[must_use]
pub fn is_passthrough_fn(expr: &Expr) -> bool {
    matches!(expr, Expr::FunctionCall { name, .. } if name == PASSTHROUGH_FN)
}

// Recursive descent over one conjunct. Appends into `out` and aborts on the
// first violation; partial appends are discarded by `translate` returning Err.
fn build_disjuncts(
    expr: &Expr,
    shape: &TupleShape,
    ctx: &impl EvalContext,
    out: &mut Vec<ExtPredicate>,
) -> Result<(), Unrepresentable> {
    match expr {
        Expr::BinaryPred { op, children } => {
            let [left, right] = children.as_slice() else {
                return Err(Unrepresentable);
            };

            // Exactly one side must be a slot reference.
            let (slot_ref, operand) = match (left.as_slot_ref(), right.as_slot_ref()) {
                (Some(slot_ref), None) => (slot_ref, right),
                (None, Some(slot_ref)) => (slot_ref, left),
                _ => return Err(Unrepresentable),
            };
            let slot = shape.resolve_ref(slot_ref).ok_or(Unrepresentable)?;

            // The operator is carried verbatim: when the slot is the
            // right-hand child it is NOT flipped, even though operand order
            // changed. Downstream encoding compensates (or inherits the gap).
            // The slot/literal types are also not cross-checked here; the
            // membership branch is the only typed one.
            let literal = ctx.evaluate(operand);
            out.push(ExtPredicate::Binary(ExtBinaryPredicate {
                column: slot.column.clone(),
                ty: slot.ty,
                op: *op,
                literal,
            }));

            Ok(())
        }

        Expr::FunctionCall { name, children } if is_passthrough_fn(expr) => {
            // Child 1 carries the raw query fragment. No further argument
            // validation happens for the marker function.
            let arg = children.get(1).ok_or(Unrepresentable)?;
            let literal = ctx.evaluate(arg);

            out.push(ExtPredicate::Function(ExtFunctionPredicate {
                name: name.clone(),
                // Reserved for multi-column passthrough support.
                columns: Vec::new(),
                values: vec![literal],
            }));

            Ok(())
        }

        Expr::InPred { negated, children } => {
            let Some((probe, values)) = children.split_first() else {
                return Err(Unrepresentable);
            };
            let slot_ref = probe
                .without_cast()
                .as_slot_ref()
                .ok_or(Unrepresentable)?;
            let slot = shape.resolve_ref(slot_ref).ok_or(Unrepresentable)?;

            let mut literals = Vec::with_capacity(values.len());
            for value in values {
                // Any single mismatch fails the whole predicate.
                if !value_type_compatible(slot.ty, value) {
                    return Err(Unrepresentable);
                }
                literals.push(ctx.evaluate(value));
            }

            out.push(ExtPredicate::In(ExtInPredicate {
                column: slot.column.clone(),
                ty: slot.ty,
                values: literals,
                negated: *negated,
            }));

            Ok(())
        }

        Expr::CompoundPred { op, children } => {
            if *op != CompoundOp::Or {
                return Err(Unrepresentable);
            }
            let [left, right] = children.as_slice() else {
                return Err(Unrepresentable);
            };

            build_disjuncts(left, shape, ctx, out)?;
            build_disjuncts(right, shape, ctx, out)?;

            Ok(())
        }

        // Slot refs, bare literals, casts, and non-marker calls are not
        // representable on their own.
        _ => Err(Unrepresentable),
    }
}

// String-family slots accept any string-family value; every other slot type
// requires the value's declared tag to match exactly. Undeclared types are
// mismatches.
fn value_type_compatible(slot_ty: ColumnType, value: &Expr) -> bool {
    let Some(value_ty) = value.declared_type() else {
        return false;
    };

    if slot_ty.is_string_family() {
        value_ty.is_string_family()
    } else {
        value_ty == slot_ty
    }
}
