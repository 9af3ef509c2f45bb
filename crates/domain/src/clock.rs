use std::time::{SystemTime, UNIX_EPOCH};

/// Time source consulted when records are stamped at decode time and when
/// the cache checks freshness. Injected so tests can advance time manually.
pub trait Clock: Send + Sync {
    fn now_unix_secs(&self) -> u64;
}

/// Wall-clock implementation used by the running server.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}
