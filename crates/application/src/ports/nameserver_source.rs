use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use std::net::SocketAddr;

/// Discovers which resolver the query should be sent to.
#[async_trait]
pub trait NameserverSource: Send + Sync {
    async fn discover(&self) -> Result<SocketAddr, DomainError>;
}
