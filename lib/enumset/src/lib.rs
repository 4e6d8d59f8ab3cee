pub mod set;
pub use set::{ClosedSet, Member, SetId};
pub mod guard;
pub use guard::{Guarded, Record, guard};
pub mod err;
pub use err::{Result, SetError};
