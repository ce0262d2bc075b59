use crate::ports::{DnsTransport, NameserverSource};
use ferrous_dig_domain::wire::{self, flags, MessageBuffer, Resource, MAX_MESSAGE_LEN};
use ferrous_dig_domain::{DomainError, RecordClass, RecordType, ResponseCode};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub hostname: String,
    pub record_type: RecordType,
    /// Overrides nameserver discovery when set.
    pub server: Option<SocketAddr>,
}

impl LookupRequest {
    pub fn new(hostname: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            hostname: hostname.into(),
            record_type,
            server: None,
        }
    }

    pub fn with_server(mut self, server: SocketAddr) -> Self {
        self.server = Some(server);
        self
    }
}

/// Interpreted rdata of one answer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    /// Any record that is not an IN-class address of the expected size.
    Opaque { rtype: u16, rdlength: u16 },
}

/// An answer record copied out of the response buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub rtype: u16,
    pub ttl: i32,
    pub data: AnswerData,
}

impl Answer {
    fn from_resource(resource: &Resource<'_>) -> Self {
        let internet = resource.record_class() == Some(RecordClass::IN);
        let address_type = resource
            .record_type()
            .filter(|rt| internet && rt.address_len() == Some(resource.rdata.len()));

        let data = match (address_type, resource.rdata) {
            (Some(RecordType::A), &[a, b, c, d]) => AnswerData::Ipv4(Ipv4Addr::new(a, b, c, d)),
            (Some(RecordType::AAAA), rdata) => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(rdata);
                AnswerData::Ipv6(Ipv6Addr::from(octets))
            }
            _ => AnswerData::Opaque {
                rtype: resource.rtype,
                rdlength: resource.rdlength,
            },
        };

        Self {
            rtype: resource.rtype,
            ttl: resource.ttl,
            data,
        }
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self.data {
            AnswerData::Ipv4(ip) => Some(IpAddr::V4(ip)),
            AnswerData::Ipv6(ip) => Some(IpAddr::V6(ip)),
            AnswerData::Opaque { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LookupResult {
    pub id: u16,
    pub server: SocketAddr,
    pub response_code: ResponseCode,
    pub truncated: bool,
    pub answers: Vec<Answer>,
}

impl LookupResult {
    pub fn addresses(&self) -> Vec<IpAddr> {
        self.answers.iter().filter_map(Answer::address).collect()
    }
}

/// Use case: resolve one hostname with a single UDP query/response exchange
pub struct LookupHostUseCase {
    transport: Arc<dyn DnsTransport>,
    nameservers: Arc<dyn NameserverSource>,
    timeout: Duration,
}

impl LookupHostUseCase {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        nameservers: Arc<dyn NameserverSource>,
        timeout: Duration,
    ) -> Self {
        Self {
            transport,
            nameservers,
            timeout,
        }
    }

    pub async fn execute(&self, request: &LookupRequest) -> Result<LookupResult, DomainError> {
        let server = match request.server {
            Some(server) => server,
            None => self.nameservers.discover().await?,
        };

        let mut buffer: MessageBuffer = [0u8; MAX_MESSAGE_LEN];
        let (id, query_len) =
            wire::build_query(&request.hostname, request.record_type, &mut buffer).map_err(
                |e| DomainError::InvalidDomainName(format!("{}: {}", request.hostname, e)),
            )?;

        debug!(
            hostname = %request.hostname,
            record_type = %request.record_type,
            id,
            query_len,
            server = %server,
            protocol = self.transport.protocol_name(),
            "Sending query"
        );

        let response_len = self
            .transport
            .exchange(server, &mut buffer, query_len, self.timeout)
            .await?;

        // Answers borrow from `buffer`; everything returned is copied out below.
        let message = wire::parse_response(&buffer[..response_len])?;

        if message.header.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "response id {} does not match query id {}",
                message.header.id, id
            )));
        }
        if !flags::is_response(message.header.flags) {
            return Err(DomainError::InvalidDnsResponse(
                "received a query instead of a response".to_string(),
            ));
        }

        let response_code = flags::rcode(message.header.flags);
        let truncated = flags::is_truncated(message.header.flags);
        if truncated {
            warn!(server = %server, "Response truncated, answers may be incomplete");
        }

        let answers: Vec<Answer> = message.answers.iter().map(Answer::from_resource).collect();

        info!(
            hostname = %request.hostname,
            rcode = %response_code,
            answers = answers.len(),
            response_len,
            "Lookup complete"
        );

        Ok(LookupResult {
            id,
            server,
            response_code,
            truncated,
            answers,
        })
    }
}
