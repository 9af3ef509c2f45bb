#![allow(dead_code)]
use argent_dns_domain::Clock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Manually advanced clock for deterministic TTL tests.
pub struct MockClock {
    secs: AtomicU64,
}

impl MockClock {
    pub fn at(secs: u64) -> Arc<Self> {
        Arc::new(Self {
            secs: AtomicU64::new(secs),
        })
    }

    pub fn advance(&self, secs: u64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }

    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for MockClock {
    fn now_unix_secs(&self) -> u64 {
        self.secs.load(Ordering::SeqCst)
    }
}
