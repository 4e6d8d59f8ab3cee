use crate::{err::*, syntax::*};
use indexmap::IndexMap;

/* -------------------------------- Handler map ------------------------------ */

type Arm<'a, R> = Box<dyn FnOnce(&[Value]) -> R + 'a>;

/// Ephemeral handler map for one `case_of` dispatch. Built per call and
/// consumed by it; nothing is retained across dispatches.
pub struct Cases<'a, R> {
    arms: IndexMap<String, Arm<'a, R>>,
    fallback: Option<Box<dyn FnOnce() -> R + 'a>>,
}

impl<'a, R> Cases<'a, R> {
    pub fn new() -> Self {
        Cases { arms: IndexMap::new(), fallback: None }
    }
    /// Handle one tag; the arm receives the instance fields in declaration
    /// order. The reserved `_` key registers the fall-through instead.
    pub fn on(mut self, tag: impl Into<String>, arm: impl FnOnce(&[Value]) -> R + 'a) -> Self {
        let tag = tag.into();
        if tag == FALLBACK_KEY {
            self.fallback = Some(Box::new(move || arm(&[])));
        } else {
            self.arms.insert(tag, Box::new(arm));
        }
        self
    }
    /// Fall-through arm; receives no payload.
    pub fn fallback(mut self, arm: impl FnOnce() -> R + 'a) -> Self {
        self.fallback = Some(Box::new(arm));
        self
    }
}

impl<'a, R> Default for Cases<'a, R> {
    fn default() -> Self {
        Self::new()
    }
}

/* --------------------------------- Dispatch -------------------------------- */

impl Union {
    /// Exhaustive dispatch of `instance` over a handler map: the instance
    /// must belong to this union, every arm must name a declared tag, and
    /// the arms must cover every tag unless a fallback is present.
    pub fn case_of<'a, R>(&self, cases: Cases<'a, R>, instance: &Instance) -> Result<R> {
        let Cases { mut arms, fallback } = cases;
        if instance.union().id() != self.id() {
            return Err(UnionError::InstanceMismatch {
                instance: instance.to_string(),
                union: self.to_string(),
            });
        }
        let unknown = arms
            .keys()
            .filter(|tag| !self.def.variants.contains_key(tag.as_str()))
            .cloned()
            .collect::<Vec<_>>();
        if !unknown.is_empty() {
            return Err(UnionError::InvalidCase {
                keys: unknown.join(", "),
                union: self.to_string(),
            });
        }
        if arms.len() != self.def.variants.len() && fallback.is_none() {
            return Err(UnionError::IncompleteCase { union: self.to_string() });
        }
        log::trace!("dispatching {} over {}", instance, self);
        let (tag, fields) = instance.parts();
        match arms.shift_remove(tag) {
            | Some(arm) => Ok(arm(fields)),
            | None => {
                let arm = fallback.expect("a fallback exists whenever coverage is partial");
                Ok(arm())
            }
        }
    }
}
