use std::sync::atomic::{AtomicU64, Ordering};

/* -------------------------------- Allocator ------------------------------- */

/// Monotonic id source. Every definition site draws from one of these, so two
/// definitions built from identical inputs still get distinct ids and
/// conformance stays nominal rather than structural.
#[derive(Debug)]
pub struct IdAlloc(AtomicU64);

impl IdAlloc {
    pub const fn new() -> Self {
        IdAlloc(AtomicU64::new(0))
    }
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdAlloc {
    fn default() -> Self {
        Self::new()
    }
}

/* ---------------------------------- Keys ---------------------------------- */

/// Mint a fresh-id newtype backed by its own [`IdAlloc`].
#[macro_export]
macro_rules! new_id_type {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis struct $name(u64);
        impl $name {
            $vis fn fresh() -> Self {
                static ALLOC: $crate::alloc::IdAlloc = $crate::alloc::IdAlloc::new();
                $name(ALLOC.next())
            }
        }
    };
}
