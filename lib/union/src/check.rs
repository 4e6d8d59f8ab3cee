use crate::syntax::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/* --------------------------------- Registry -------------------------------- */

type Predicate = fn(&Value) -> bool;

/// Intrinsic predicates, fixed once at startup. Primitive kinds resolve here
/// before any nominal comparison runs, so a primitive value is never pushed
/// through an identity check.
static PRIM_CHECKS: Lazy<HashMap<PrimKind, Predicate>> = Lazy::new(|| {
    HashMap::from([
        (PrimKind::Text, (|v: &Value| matches!(v, Value::Text(_))) as Predicate),
        (PrimKind::Number, (|v: &Value| matches!(v, Value::Number(_))) as Predicate),
        (PrimKind::Boolean, (|v: &Value| matches!(v, Value::Boolean(_))) as Predicate),
        (PrimKind::Seq, (|v: &Value| matches!(v, Value::Seq(_))) as Predicate),
    ])
});

/* ---------------------------------- Checks --------------------------------- */

/// Decide whether `value` satisfies the field type `ty`. Total; never fails.
pub fn conforms(ty: &FieldTy, value: &Value) -> bool {
    match ty {
        | FieldTy::Any => true,
        | FieldTy::Prim(kind) => PRIM_CHECKS[kind](value),
        | FieldTy::Nominal(tag) => match value {
            | Value::Foreign(foreign) => foreign.type_tag() == *tag,
            | _ => false,
        },
        | FieldTy::Union(union) => match value {
            | Value::Inst(inst) => inst.union().id() == union.id(),
            | _ => false,
        },
    }
}
