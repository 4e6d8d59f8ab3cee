use crate::syntax::*;

/* ------------------------------- Conversions ------------------------------- */

impl From<PrimKind> for FieldTy {
    fn from(kind: PrimKind) -> Self {
        FieldTy::Prim(kind)
    }
}
impl From<TypeTag> for FieldTy {
    fn from(tag: TypeTag) -> Self {
        FieldTy::Nominal(tag)
    }
}
impl From<Union> for FieldTy {
    fn from(union: Union) -> Self {
        FieldTy::Union(union)
    }
}
impl From<&Union> for FieldTy {
    fn from(union: &Union) -> Self {
        FieldTy::Union(union.clone())
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}
impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Value::Number(number as f64)
    }
}
impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Value::Number(number as f64)
    }
}

/* --------------------------------- Equality -------------------------------- */

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            | (Value::Text(a), Value::Text(b)) => a == b,
            | (Value::Number(a), Value::Number(b)) => a == b,
            | (Value::Boolean(a), Value::Boolean(b)) => a == b,
            | (Value::Seq(a), Value::Seq(b)) => a == b,
            | (Value::Foreign(a), Value::Foreign(b)) => a.same(b),
            | (Value::Inst(a), Value::Inst(b)) => a == b,
            | _ => false,
        }
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        self.union.id() == other.union.id()
            && self.tag_idx == other.tag_idx
            && self.fields == other.fields
    }
}
