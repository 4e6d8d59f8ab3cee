use crate::{err::*, set::*};
use indexmap::IndexMap;

/* ---------------------------------- Record --------------------------------- */

/// A string-keyed store of closed-set members a guard can interpose on.
pub trait Record {
    fn put(&mut self, key: &str, value: Member) -> Result<()>;
    fn get(&self, key: &str) -> Option<&Member>;
}

impl Record for IndexMap<String, Member> {
    fn put(&mut self, key: &str, value: Member) -> Result<()> {
        self.insert(key.to_string(), value);
        Ok(())
    }
    fn get(&self, key: &str) -> Option<&Member> {
        IndexMap::get(self, key)
    }
}

/* ---------------------------------- Guarded -------------------------------- */

/// A view of a record that rejects writes to one key unless the value is a
/// member of the guarding set. Guards are records themselves, so they stack:
/// each layer watches its own key and forwards everything else.
#[derive(Debug)]
pub struct Guarded<T> {
    target: T,
    set: ClosedSet,
    key: String,
}

/// Wrap `target` so writes to `key` must come from `set`. A default member,
/// when given, is written through the new guard like any other assignment.
pub fn guard<T: Record>(
    target: T, set: &ClosedSet, key: impl Into<String>, default: Option<Member>,
) -> Result<Guarded<T>> {
    let mut guarded = Guarded { target, set: set.clone(), key: key.into() };
    if let Some(member) = default {
        let key = guarded.key.clone();
        guarded.put(&key, member)?;
    }
    Ok(guarded)
}

impl<T: Record> Record for Guarded<T> {
    fn put(&mut self, key: &str, value: Member) -> Result<()> {
        if key == self.key && !self.set.contains(&value) {
            return Err(SetError::Rejected {
                key: key.to_string(),
                set: self.set.to_string(),
            });
        }
        self.target.put(key, value)
    }
    fn get(&self, key: &str) -> Option<&Member> {
        self.target.get(key)
    }
}

impl<T> Guarded<T> {
    pub fn into_inner(self) -> T {
        self.target
    }
}
