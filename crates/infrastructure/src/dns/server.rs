use crate::dns::{wire, MAX_DATAGRAM_LEN};
use argent_dns_application::{HandleQueryUseCase, QueryOutcome};
use argent_dns_domain::{Clock, DomainError};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

/// The resolver loop: one UDP socket, strictly sequential handling.
///
/// Each iteration is `recv → (cache | upstream round-trip) → send`; no new
/// client request is serviced while an upstream round-trip is in flight,
/// so responses leave in the order requests arrived. A failed iteration
/// (malformed datagram, upstream timeout, send error) is logged and the
/// loop continues; only a failure of the listening socket itself ends it.
pub struct DnsServer {
    socket: UdpSocket,
    use_case: Arc<HandleQueryUseCase>,
    clock: Arc<dyn Clock>,
}

impl DnsServer {
    pub async fn bind(
        addr: SocketAddr,
        use_case: Arc<HandleQueryUseCase>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::IoError(format!("failed to bind {}: {}", addr, e)))?;
        Ok(Self {
            socket,
            use_case,
            clock,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(e.to_string()))
    }

    pub async fn run(self) -> Result<(), DomainError> {
        info!(addr = %self.local_addr()?, "DNS server listening");

        let mut recv_buf = [0u8; MAX_DATAGRAM_LEN];
        loop {
            let (len, peer) = self
                .socket
                .recv_from(&mut recv_buf)
                .await
                .map_err(|e| DomainError::IoError(format!("listening socket failed: {}", e)))?;

            self.handle_datagram(&recv_buf[..len], peer).await;
        }
    }

    async fn handle_datagram(&self, datagram: &[u8], peer: SocketAddr) {
        let request = match wire::decode_message(datagram, self.clock.now_unix_secs()) {
            Ok(message) => message,
            Err(e) => {
                debug!(peer = %peer, error = %e, "dropping malformed datagram");
                return;
            }
        };

        info!(peer = %peer, "query received:\n{}", request);

        let response_bytes = match self.use_case.execute(&request).await {
            Ok(QueryOutcome::Answer { record, cache_hit }) => {
                let response =
                    wire::build_response(&request, vec![record], self.clock.now_unix_secs());
                info!(cache_hit, "response:\n{}", response);
                response.wire
            }
            Ok(QueryOutcome::PassThrough(raw)) => {
                info!("forwarding upstream response verbatim");
                raw
            }
            Err(e) => {
                warn!(peer = %peer, error = %e, "dropping query");
                return;
            }
        };

        if let Err(e) = self.socket.send_to(&response_bytes, peer).await {
            warn!(peer = %peer, error = %e, "failed to send response");
        }
    }
}
