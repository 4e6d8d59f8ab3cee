use crate::syntax::*;
use std::fmt;

impl fmt::Display for PrimKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            | PrimKind::Text => "Text",
            | PrimKind::Number => "Number",
            | PrimKind::Boolean => "Boolean",
            | PrimKind::Seq => "Seq",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for FieldTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | FieldTy::Any => write!(f, "Any"),
            | FieldTy::Prim(kind) => kind.fmt(f),
            | FieldTy::Nominal(tag) => write!(f, "{}", tag.name()),
            | FieldTy::Union(union) => write!(f, "{}", union.name()),
        }
    }
}

impl fmt::Display for Union {
    /// `Name<tag0|tag1|...>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags = self.tags().collect::<Vec<_>>().join("|");
        write!(f, "{}<{}>", self.name(), tags)
    }
}

impl fmt::Display for Instance {
    /// `Name<tag>(field values, comma-joined)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tag, fields) = self.parts();
        let fields = fields.iter().map(Value::to_string).collect::<Vec<_>>().join(", ");
        write!(f, "{}<{}>({})", self.union().name(), tag, fields)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            | Value::Text(text) => write!(f, "{}", text),
            | Value::Number(number) => write!(f, "{}", number),
            | Value::Boolean(boolean) => write!(f, "{}", boolean),
            | Value::Seq(items) => {
                let items = items.iter().map(Value::to_string).collect::<Vec<_>>().join(", ");
                write!(f, "[{}]", items)
            }
            | Value::Foreign(foreign) => write!(f, "<{}>", foreign.type_tag().name()),
            | Value::Inst(inst) => inst.fmt(f),
        }
    }
}

impl fmt::Debug for Foreign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Foreign(<{}>)", self.type_tag().name())
    }
}

impl Value {
    /// Runtime type name, as diagnostics report it.
    pub fn type_of(&self) -> String {
        match self {
            | Value::Text(_) => "text".to_string(),
            | Value::Number(_) => "number".to_string(),
            | Value::Boolean(_) => "boolean".to_string(),
            | Value::Seq(_) => "seq".to_string(),
            | Value::Foreign(foreign) => foreign.type_tag().name(),
            | Value::Inst(inst) => inst.union().name().to_string(),
        }
    }
}

/* ------------------------------ Message helpers ---------------------------- */

pub(crate) fn expected_list(tys: &[FieldTy]) -> String {
    if tys.is_empty() {
        "an empty parameter list".to_string()
    } else {
        tys.iter().map(FieldTy::to_string).collect::<Vec<_>>().join(", ")
    }
}

pub(crate) fn given_list(args: &[Value]) -> String {
    if args.is_empty() {
        "an empty parameter list".to_string()
    } else {
        args.iter().map(Value::type_of).collect::<Vec<_>>().join(", ")
    }
}
