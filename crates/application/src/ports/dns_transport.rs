use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Sends `buffer[..query_len]` to `server` and overwrites `buffer` in
    /// place with the response. Returns the response length.
    async fn exchange(
        &self,
        server: SocketAddr,
        buffer: &mut [u8],
        query_len: usize,
        timeout: Duration,
    ) -> Result<usize, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
