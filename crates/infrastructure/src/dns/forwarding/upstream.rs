//! UDP forwarding to the upstream recursive resolver (RFC 1035 §4.2.1)
//!
//! The client's datagram is relayed as-is; no query of our own is built.
//! One ephemeral socket is bound per request and released when the
//! round-trip completes, on every exit path.

use crate::dns::{wire, MAX_DATAGRAM_LEN};
use argent_dns_application::ports::UpstreamResolver;
use argent_dns_domain::{Clock, DomainError, Message};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

pub struct UdpUpstream {
    server_addr: SocketAddr,
    timeout: Duration,
    clock: Arc<dyn Clock>,
}

impl UdpUpstream {
    pub fn new(server_addr: SocketAddr, timeout: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            server_addr,
            timeout,
            clock,
        }
    }
}

#[async_trait]
impl UpstreamResolver for UdpUpstream {
    async fn forward(&self, request: &Message) -> Result<Message, DomainError> {
        // Bind to an ephemeral port (0 = OS assigns).
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("failed to bind upstream socket: {}", e)))?;

        socket.connect(self.server_addr).await.map_err(|e| {
            DomainError::IoError(format!(
                "failed to connect to upstream {}: {}",
                self.server_addr, e
            ))
        })?;

        socket.send(&request.wire).await.map_err(|e| {
            DomainError::IoError(format!(
                "failed to send query to upstream {}: {}",
                self.server_addr, e
            ))
        })?;

        debug!(
            upstream = %self.server_addr,
            bytes_sent = request.wire.len(),
            "query forwarded upstream"
        );

        // A separate reply buffer; the reported length is trusted so stale
        // request bytes can never bleed into a shorter reply.
        let mut reply_buf = [0u8; MAX_DATAGRAM_LEN];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut reply_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| {
                DomainError::IoError(format!(
                    "failed to receive reply from upstream {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(
            upstream = %self.server_addr,
            bytes_received = len,
            "upstream reply received"
        );

        wire::decode_message(&reply_buf[..len], self.clock.now_unix_secs())
    }
}
