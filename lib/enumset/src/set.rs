use crate::err::*;
use indexmap::IndexMap;
use std::{fmt, rc::Rc};
use tagcase_utils::new_id_type;

/* ------------------------------- Identifier ------------------------------- */

new_id_type! {
    /// Identity of one built set; membership is by builder, never by name.
    pub struct SetId;
}

/* --------------------------------- Members --------------------------------- */

/// One opaque member of a closed set. Cheap to clone; equal only to itself
/// (same set, same slot). Members of two sets built from identical names are
/// never equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Member {
    set: SetId,
    slot: usize,
    name: Rc<str>,
}

impl Member {
    pub fn name(&self) -> &str {
        &self.name
    }
    pub(crate) fn set(&self) -> SetId {
        self.set
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/* --------------------------------- ClosedSet ------------------------------- */

/// A frozen set of named opaque members. Built once, never mutated; reading
/// an undeclared name is an error, and there is no write surface at all.
/// Members are always enumerable, in declaration order.
#[derive(Clone, Debug)]
pub struct ClosedSet {
    def: Rc<SetDef>,
}

#[derive(Debug)]
struct SetDef {
    id: SetId,
    members: IndexMap<String, Member>,
}

impl ClosedSet {
    /// Freeze `names` into a set of unique members. Names must be non-empty;
    /// a repeated name collapses onto its first slot.
    pub fn new<I>(names: I) -> Result<ClosedSet>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let names =
            names.into_iter().map(|name| name.as_ref().to_string()).collect::<Vec<_>>();
        if names.iter().any(String::is_empty) {
            return Err(SetError::BadNames { given: format!("[{}]", names.join(", ")) });
        }
        let id = SetId::fresh();
        let mut members = IndexMap::new();
        for name in names {
            let slot = members.get_index_of(&name).unwrap_or(members.len());
            let member = Member { set: id, slot, name: name.as_str().into() };
            members.insert(name, member);
        }
        Ok(ClosedSet { def: Rc::new(SetDef { id, members }) })
    }

    pub fn id(&self) -> SetId {
        self.def.id
    }
    /// Look up a member by name; undeclared names are an access error naming
    /// the valid options.
    pub fn get(&self, name: &str) -> Result<Member> {
        match self.def.members.get(name) {
            | Some(member) => Ok(member.clone()),
            | None => Err(SetError::NotAMember {
                name: name.to_string(),
                options: self.names().collect::<Vec<_>>().join(", "),
            }),
        }
    }
    /// Whether `member` came out of this set.
    pub fn contains(&self, member: &Member) -> bool {
        member.set() == self.def.id
    }
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.def.members.values()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.def.members.keys().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.def.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.def.members.is_empty()
    }
}

impl fmt::Display for ClosedSet {
    /// `ClosedSet { a, b, c }`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "ClosedSet {{}}");
        }
        write!(f, "ClosedSet {{ {} }}", self.names().collect::<Vec<_>>().join(", "))
    }
}
