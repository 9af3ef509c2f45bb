use argent_dns_application::ports::AnswerCache;
use argent_dns_domain::{Clock, Question, ResourceRecord};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory answer cache: at most one record per question, unbounded,
/// reclaimed only lazily when a stale entry is read.
pub struct InMemoryAnswerCache {
    entries: DashMap<Question, ResourceRecord>,
    clock: Arc<dyn Clock>,
}

impl InMemoryAnswerCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AnswerCache for InMemoryAnswerCache {
    fn has_fresh(&self, question: &Question) -> bool {
        let now = self.clock.now_unix_secs();
        let fresh = match self.entries.get(question) {
            Some(entry) => entry.is_fresh(now),
            None => return false,
        };
        if !fresh {
            self.entries.remove(question);
            debug!(question = %question, "expired cache entry removed");
        }
        fresh
    }

    fn get(&self, question: &Question) -> Option<ResourceRecord> {
        self.entries.get(question).map(|entry| entry.value().clone())
    }

    fn put(&self, question: Question, answer: ResourceRecord) {
        self.entries.insert(question, answer);
    }
}
