
use crate::{
    expr::Expr,
    schema::{ColumnType, SlotDescriptor, SlotId, TupleShape},
    value::Value,
};

pub(crate) const AGE_SLOT: SlotId = SlotId(1);
pub(crate) const NAME_SLOT: SlotId = SlotId(2);
pub(crate) const NOTE_SLOT: SlotId = SlotId(3);

/// Tuple shape shared by the translation tests:
/// `age: Int`, `name: Varchar`, `note: Text`.
pub(crate) fn test_shape() -> TupleShape {
    TupleShape::new(vec![
        SlotDescriptor::new(AGE_SLOT, "age", ColumnType::Int),
        SlotDescriptor::new(NAME_SLOT, "name", ColumnType::Varchar),
        SlotDescriptor::new(NOTE_SLOT, "note", ColumnType::Text),
    ])
}

pub(crate) fn int_lit(n: i64) -> Expr {
    Expr::literal(Value::Int(n), ColumnType::Int)
}

pub(crate) fn text_lit(s: &str, ty: ColumnType) -> Expr {
    Expr::literal(Value::Text(s.to_string()), ty)
}
