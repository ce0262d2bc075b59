#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_dig_application::ports::{DnsTransport, NameserverSource};
use ferrous_dig_domain::DomainError;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Responder = dyn Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync;

/// Transport that answers from a closure instead of the network.
pub struct MockTransport {
    responder: Arc<Responder>,
    last_query: Mutex<Option<Vec<u8>>>,
    last_server: Mutex<Option<SocketAddr>>,
}

impl MockTransport {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, DomainError> + Send + Sync + 'static,
    {
        Self {
            responder: Arc::new(responder),
            last_query: Mutex::new(None),
            last_server: Mutex::new(None),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    pub fn last_query(&self) -> Option<Vec<u8>> {
        self.last_query.lock().unwrap().clone()
    }

    pub fn last_server(&self) -> Option<SocketAddr> {
        *self.last_server.lock().unwrap()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn exchange(
        &self,
        server: SocketAddr,
        buffer: &mut [u8],
        query_len: usize,
        _timeout: Duration,
    ) -> Result<usize, DomainError> {
        let query = buffer[..query_len].to_vec();
        *self.last_query.lock().unwrap() = Some(query.clone());
        *self.last_server.lock().unwrap() = Some(server);

        let response = (self.responder)(&query)?;
        buffer[..response.len()].copy_from_slice(&response);
        Ok(response.len())
    }

    fn protocol_name(&self) -> &'static str {
        "MOCK"
    }
}

pub struct MockNameserverSource {
    result: Result<SocketAddr, DomainError>,
}

impl MockNameserverSource {
    pub fn new(addr: &str) -> Self {
        Self {
            result: Ok(addr.parse().unwrap()),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl NameserverSource for MockNameserverSource {
    async fn discover(&self) -> Result<SocketAddr, DomainError> {
        self.result.clone()
    }
}

/// Echoes the query's id and question and appends the given answer records,
/// each with a pointer to the question name.
pub fn answer_with(query: &[u8], flags: u16, answers: Vec<(u16, Vec<u8>)>) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);
    response.extend_from_slice(&flags.to_be_bytes());
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(answers.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
    response.extend_from_slice(&query[12..]);

    for (rtype, rdata) in &answers {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&rtype.to_be_bytes());
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&300u32.to_be_bytes());
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(rdata);
    }
    response
}
