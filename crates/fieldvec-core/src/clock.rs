//! Process-wide modification clock.
//!
//! Every change to pipeline state takes a fresh stamp from a single counter,
//! so comparing two stamps tells which change happened later, even across
//! different objects.

use std::sync::atomic::{AtomicU64, Ordering};

static CLOCK: AtomicU64 = AtomicU64::new(0);

/// A point in modification order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModifiedTime(u64);

impl ModifiedTime {
    /// Takes the next stamp from the global clock.
    pub fn now() -> Self {
        Self(CLOCK.fetch_add(1, Ordering::Relaxed) + 1)
    }
}
