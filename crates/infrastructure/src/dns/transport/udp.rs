//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Standard DNS transport. Messages are sent as-is (no framing) and limited to
//! 512 bytes; there is no EDNS(0) and no TCP retry when the TC bit is set.

use async_trait::async_trait;
use ferrous_dig_application::ports::DnsTransport;
use ferrous_dig_domain::wire::MAX_MESSAGE_LEN;
use ferrous_dig_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// DNS over UDP transport
///
/// A fresh ephemeral socket is bound and connected for every exchange, so
/// datagrams from any other peer are dropped by the kernel.
#[derive(Debug, Default)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

fn transport_error(server: SocketAddr, action: &str, e: std::io::Error) -> DomainError {
    DomainError::Transport {
        server: server.to_string(),
        reason: format!("{} failed: {}", action, e),
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(
        &self,
        server: SocketAddr,
        buffer: &mut [u8],
        query_len: usize,
        timeout: Duration,
    ) -> Result<usize, DomainError> {
        if query_len > buffer.len() {
            return Err(DomainError::Transport {
                server: server.to_string(),
                reason: format!(
                    "query length {} exceeds buffer of {} bytes",
                    query_len,
                    buffer.len()
                ),
            });
        }

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| transport_error(server, "bind", e))?;
        socket
            .connect(server)
            .await
            .map_err(|e| transport_error(server, "connect", e))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send(&buffer[..query_len]))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| transport_error(server, "send", e))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        // The response overwrites the query in place.
        let capacity = buffer.len().min(MAX_MESSAGE_LEN);
        let bytes_received = tokio::time::timeout(timeout, socket.recv(&mut buffer[..capacity]))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server.to_string(),
            })?
            .map_err(|e| transport_error(server, "recv", e))?;

        debug!(server = %server, bytes_received, "UDP response received");

        Ok(bytes_received)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
