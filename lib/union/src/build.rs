use crate::{check, err::*, fmt, syntax::*};
use indexmap::IndexMap;
use std::rc::Rc;

/* ------------------------------- Declaration ------------------------------- */

/// Ordered record of tag names and the field types each constructor expects.
/// Entries are validated at `build`, not on insertion.
#[derive(Clone, Debug, Default)]
pub struct Declaration {
    pub(crate) variants: Vec<(String, Vec<FieldTy>)>,
}

impl Declaration {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn variant(mut self, tag: impl Into<String>, fields: Vec<FieldTy>) -> Self {
        self.variants.push((tag.into(), fields));
        self
    }
}

/* ---------------------------------- Build ---------------------------------- */

/// Build an anonymously named union from a declaration.
pub fn build(decl: Declaration) -> Result<Union> {
    Union::from_decl(decl, None)
}

/// Build a union carrying a display name.
pub fn build_named(decl: Declaration, name: impl Into<String>) -> Result<Union> {
    Union::from_decl(decl, Some(name.into()))
}

impl Union {
    pub(crate) fn from_decl(decl: Declaration, name: Option<String>) -> Result<Union> {
        let name = name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        let mut variants = IndexMap::new();
        for (tag, fields) in decl.variants {
            if tag.is_empty() {
                return Err(UnionError::EmptyTag);
            }
            if RESERVED_KEYS.contains(&tag.as_str()) {
                return Err(UnionError::ReservedKey { key: tag });
            }
            if variants.insert(tag.clone(), fields).is_some() {
                return Err(UnionError::DuplicateTag { tag });
            }
        }
        let id = UnionId::fresh();
        log::debug!("built union {} ({:?}) with {} variants", name, id, variants.len());
        Ok(Union { def: Rc::new(UnionDef { id, name, variants }) })
    }

    /// Invoke the constructor for `tag`: arity first, then every argument
    /// against its declared field type, in order.
    pub fn make(&self, tag: &str, args: Vec<Value>) -> Result<Instance> {
        let Some((tag_idx, tag, tys)) = self.def.variants.get_full(tag) else {
            return Err(UnionError::UnknownTag {
                union: self.to_string(),
                tag: tag.to_string(),
            });
        };
        if args.len() != tys.len() {
            return Err(UnionError::Arity {
                tag: tag.clone(),
                expected: fmt::expected_list(tys),
                given: fmt::given_list(&args),
            });
        }
        for (index, (ty, arg)) in tys.iter().zip(args.iter()).enumerate() {
            if !check::conforms(ty, arg) {
                return Err(UnionError::TypeMismatch {
                    union: self.name().to_string(),
                    tag: tag.clone(),
                    index,
                    expected: ty.to_string(),
                    found: arg.type_of(),
                });
            }
        }
        Ok(Instance { union: self.clone(), tag_idx, fields: args })
    }
}
