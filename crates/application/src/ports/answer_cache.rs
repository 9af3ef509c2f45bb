use argent_dns_domain::{Question, ResourceRecord};

/// Port for the TTL-aware answer cache: one answer per question, lazy
/// expiry on read.
pub trait AnswerCache: Send + Sync {
    /// True iff an entry exists for the question and its TTL has not yet
    /// elapsed. An entry that exists but is stale is removed as a side
    /// effect and `false` is returned.
    fn has_fresh(&self, question: &Question) -> bool;

    /// The stored record, if any. No freshness check is performed; callers
    /// gate on `has_fresh` first.
    fn get(&self, question: &Question) -> Option<ResourceRecord>;

    /// Stores the answer, replacing any existing entry for the question.
    fn put(&self, question: Question, answer: ResourceRecord);
}
