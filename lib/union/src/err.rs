use thiserror::Error;

/// Failures raised while building a union or dispatching over one. All are
/// synchronous and propagate to the caller; nothing is retried or swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnionError {
    #[error("a declaration expects non-empty tag names, but it was given one that is empty")]
    EmptyTag,
    #[error("a declaration already has a variant named {tag}")]
    DuplicateTag { tag: String },
    #[error("{key} is a reserved enum type")]
    ReservedKey { key: String },
    #[error("{tag} requires {expected}, but it was given {given}")]
    Arity { tag: String, expected: String, given: String },
    #[error("{union}<{tag}> expects argument#{index} to be a {expected}, but it was a {found}")]
    TypeMismatch { union: String, tag: String, index: usize, expected: String, found: String },
    #[error("{instance} is not an instance of {union}")]
    InstanceMismatch { instance: String, union: String },
    #[error("{union} has no variant {tag}")]
    UnknownTag { union: String, tag: String },
    #[error("The key(s) {keys} in your caseOf do not match {union}'s types")]
    InvalidCase { keys: String, union: String },
    #[error(
        "You are missing some keys in your {union}.caseOf call, \
         did you forget to add a key or use _?"
    )]
    IncompleteCase { union: String },
}

pub type Result<T> = std::result::Result<T, UnionError>;
