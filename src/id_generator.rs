use std::sync::atomic::{AtomicU64, Ordering};

use crate::util::time;

// Last id handed out (or observed from restored state)
static LAST_FILE_ID: AtomicU64 = AtomicU64::new(0);

/// Returns a creation-time id: the current time in milliseconds, bumped past
/// the previous id when two files are created within the same millisecond.
pub fn generate_id() -> u64 {
    let now = time::timestamp_millis();
    let previous = LAST_FILE_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(now.max(last + 1)))
        .unwrap_or_default();
    now.max(previous + 1)
}

/// Makes sure ids handed out later never collide with `id`.
pub fn observe_id(id: u64) {
    LAST_FILE_ID.fetch_max(id, Ordering::SeqCst);
}
