use argent_dns_domain::{DomainError, Message};
use async_trait::async_trait;

/// Port for the upstream recursive resolver.
#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    /// Forwards the request's raw datagram bytes to the upstream server
    /// and returns its reply, decoded with the raw bytes retained.
    async fn forward(&self, request: &Message) -> Result<Message, DomainError>;
}
