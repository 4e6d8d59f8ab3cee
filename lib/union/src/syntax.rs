use derive_more::From;
use indexmap::IndexMap;
use std::{
    any::{Any, TypeId},
    rc::Rc,
};
use tagcase_utils::new_id_type;

/* ------------------------------- Identifier ------------------------------- */

new_id_type! {
    /// Identity of one built union. Fresh per build, never reused, so
    /// conformance is by builder and never by shape.
    pub struct UnionId;
}

/// Display name for unions built without an explicit one.
pub const DEFAULT_NAME: &str = "Enumeration";
/// Key a handler map uses for its fall-through arm.
pub const FALLBACK_KEY: &str = "_";
/// Keys a declaration may not shadow: the fallback key, the matcher, and the
/// two serialization names.
pub const RESERVED_KEYS: &[&str] = &[FALLBACK_KEY, "caseOf", "toString", "valueOf"];

/* ------------------------------ Field types -------------------------------- */

/// Intrinsic value shapes a field can require.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimKind {
    Text,
    Number,
    Boolean,
    Seq,
}

/// Nominal identity of a caller-defined type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    pub fn of<T: Any>() -> Self {
        TypeTag { id: TypeId::of::<T>(), name: std::any::type_name::<T>() }
    }
    /// Short name with module paths stripped, for diagnostics:
    /// `a::b::Anything<x::String>` renders as `Anything<String>`.
    pub fn name(&self) -> String {
        let mut out = String::new();
        let mut segment = String::new();
        let flush = |out: &mut String, segment: &mut String| {
            out.push_str(segment.rsplit("::").next().unwrap_or(segment));
            segment.clear();
        };
        for ch in self.name.chars() {
            if ch.is_alphanumeric() || ch == '_' || ch == ':' {
                segment.push(ch);
            } else {
                flush(&mut out, &mut segment);
                out.push(ch);
            }
        }
        flush(&mut out, &mut segment);
        out
    }
}

/// Field-type descriptor: what one constructor argument must satisfy.
#[derive(Clone, Debug)]
pub enum FieldTy {
    /// Wildcard; accepts every value.
    Any,
    Prim(PrimKind),
    Nominal(TypeTag),
    Union(Union),
}

impl FieldTy {
    pub fn nominal<T: Any>() -> Self {
        FieldTy::Nominal(TypeTag::of::<T>())
    }
}

/* ---------------------------------- Value ---------------------------------- */

/// Runtime values a union instance can carry.
#[derive(From, Clone, Debug)]
pub enum Value {
    Text(String),
    Number(f64),
    Boolean(bool),
    Seq(Vec<Value>),
    Foreign(Foreign),
    Inst(Instance),
}

/// A caller-defined value, admitted through a nominal field type.
#[derive(Clone)]
pub struct Foreign {
    tag: TypeTag,
    payload: Rc<dyn Any>,
}

impl Foreign {
    pub fn new<T: Any>(value: T) -> Self {
        Foreign { tag: TypeTag::of::<T>(), payload: Rc::new(value) }
    }
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }
    /// Identity comparison; payloads are opaque, so two foreigns are the same
    /// value only when they share an allocation.
    pub fn same(&self, other: &Foreign) -> bool {
        self.tag == other.tag && Rc::ptr_eq(&self.payload, &other.payload)
    }
}

impl Value {
    pub fn foreign<T: Any>(value: T) -> Self {
        Value::Foreign(Foreign::new(value))
    }
}

/* ---------------------------------- Union ---------------------------------- */

/// A closed, named family of variant constructors built from one declaration.
/// Cheap to clone; the definition is shared and immutable.
#[derive(Clone, Debug)]
pub struct Union {
    pub(crate) def: Rc<UnionDef>,
}

#[derive(Debug)]
pub(crate) struct UnionDef {
    pub(crate) id: UnionId,
    pub(crate) name: String,
    pub(crate) variants: IndexMap<String, Vec<FieldTy>>,
}

impl Union {
    pub fn id(&self) -> UnionId {
        self.def.id
    }
    pub fn name(&self) -> &str {
        &self.def.name
    }
    /// Declared tags, in declaration order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.def.variants.keys().map(String::as_str)
    }
    /// Field types of one tag, or `None` for a tag never declared.
    pub fn fields(&self, tag: &str) -> Option<&[FieldTy]> {
        self.def.variants.get(tag).map(Vec::as_slice)
    }
    /// The full declaration, in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &[FieldTy])> {
        self.def.variants.iter().map(|(tag, tys)| (tag.as_str(), tys.as_slice()))
    }
}

/* --------------------------------- Instance -------------------------------- */

/// An immutable value tagged with exactly one variant of its union.
#[derive(Clone, Debug)]
pub struct Instance {
    pub(crate) union: Union,
    pub(crate) tag_idx: usize,
    pub(crate) fields: Vec<Value>,
}

impl Instance {
    pub fn union(&self) -> &Union {
        &self.union
    }
    pub fn tag(&self) -> &str {
        let (tag, _) = self.parts();
        tag
    }
    pub fn fields(&self) -> &[Value] {
        &self.fields
    }
    /// Deconstruct into the tag and its ordered field values.
    pub fn parts(&self) -> (&str, &[Value]) {
        let (tag, _) = self
            .union
            .def
            .variants
            .get_index(self.tag_idx)
            .expect("instance tag index is in range by construction");
        (tag.as_str(), &self.fields)
    }
    /// Owned deconstruction.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        let (tag, _) = self.parts();
        let tag = tag.to_string();
        (tag, self.fields)
    }
}
