use crate::ports::{AnswerCache, UpstreamResolver};
use argent_dns_domain::{DomainError, Message, ResourceRecord, RCODE_NXDOMAIN};
use std::sync::Arc;
use tracing::debug;

/// What the caller should send back to the client.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// Build a response of our own around this single answer.
    Answer {
        record: ResourceRecord,
        cache_hit: bool,
    },
    /// Forward these bytes to the client verbatim (upstream NXDOMAIN).
    PassThrough(Vec<u8>),
}

/// Decides how a decoded client request is answered: from the cache when a
/// fresh entry exists, otherwise by one upstream round-trip whose answer is
/// learned for subsequent queries.
pub struct HandleQueryUseCase {
    cache: Arc<dyn AnswerCache>,
    upstream: Arc<dyn UpstreamResolver>,
}

impl HandleQueryUseCase {
    pub fn new(cache: Arc<dyn AnswerCache>, upstream: Arc<dyn UpstreamResolver>) -> Self {
        Self { cache, upstream }
    }

    /// Only the first question of a request is considered; multi-question
    /// requests are not supported.
    pub async fn execute(&self, request: &Message) -> Result<QueryOutcome, DomainError> {
        let question = request
            .first_question()
            .ok_or_else(|| DomainError::MalformedMessage("empty question section".to_string()))?;

        if self.cache.has_fresh(question) {
            if let Some(record) = self.cache.get(question) {
                debug!(question = %question, "answer served from cache");
                return Ok(QueryOutcome::Answer {
                    record,
                    cache_hit: true,
                });
            }
        }

        debug!(question = %question, "cache miss, forwarding upstream");
        let reply = self.upstream.forward(request).await?;

        // A nonexistent-domain reply carries an authority section we do not
        // synthesize ourselves; hand the upstream's datagram to the client
        // untouched and leave the cache alone.
        if reply.header.rcode == RCODE_NXDOMAIN {
            debug!(question = %question, "upstream returned NXDOMAIN, passing through");
            return Ok(QueryOutcome::PassThrough(reply.wire));
        }

        let answer = reply
            .answers
            .first()
            .cloned()
            .ok_or(DomainError::EmptyAnswer)?;
        self.cache.put(question.clone(), answer.clone());

        Ok(QueryOutcome::Answer {
            record: answer,
            cache_hit: false,
        })
    }
}
