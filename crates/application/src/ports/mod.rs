mod dns_transport;
mod nameserver_source;

pub use dns_transport::DnsTransport;
pub use nameserver_source::NameserverSource;
