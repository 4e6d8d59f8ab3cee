pub mod syntax;
pub use syntax::{
    DEFAULT_NAME, FALLBACK_KEY, FieldTy, Foreign, Instance, PrimKind, RESERVED_KEYS, TypeTag,
    Union, UnionId, Value,
};
pub mod err;
pub use err::{Result, UnionError};
pub mod build;
pub use build::{Declaration, build, build_named};
pub mod check;
pub mod case;
pub use case::Cases;
pub mod fmt;
mod impls;
mod macros;
