//! Row factories for tests. Each call inserts one row with unique values.

pub mod route_factory;
pub mod student_factory;
pub mod user_factory;

use std::sync::atomic::{AtomicU64, Ordering};

static SEQ: AtomicU64 = AtomicU64::new(1);

pub(crate) fn next_seq() -> u64 {
    SEQ.fetch_add(1, Ordering::Relaxed)
}
