use async_trait::async_trait;
use ferrous_dig_application::ports::NameserverSource;
use ferrous_dig_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use tokio::fs;
use tracing::{debug, warn};

/// Nameserver discovery from a resolv.conf(5) file (usually /etc/resolv.conf)
pub struct ResolvConfReader {
    path: String,
    port: u16,
}

impl ResolvConfReader {
    pub fn new(path: impl Into<String>, port: u16) -> Self {
        Self {
            path: path.into(),
            port,
        }
    }}

/// Returns the first `nameserver` entry that holds a valid IP address.
pub fn first_nameserver(content: &str) -> Option<IpAddr> {
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some("nameserver") {
            continue;
        }

        match fields.next().map(str::parse::<IpAddr>) {
            Some(Ok(ip)) => return Some(ip),
            Some(Err(e)) => warn!(error = %e, line, "Invalid nameserver entry"),
            None => warn!(line, "Nameserver entry without address"),
        }
    }
    None
}

#[async_trait]
impl NameserverSource for ResolvConfReader {
    async fn discover(&self) -> Result<SocketAddr, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::NameserverDiscovery(format!("Cannot read {}: {}", self.path, e))
        })?;

        let ip = first_nameserver(&content)
            .ok_or_else(|| DomainError::NoNameserver(self.path.clone()))?;
        let addr = SocketAddr::new(ip, self.port);

        debug!(path = %self.path, nameserver = %addr, "Nameserver discovered");
        Ok(addr)
    }
}
