//! ferrous-dig infrastructure: network transport and system nameserver discovery
pub mod dns;
pub mod system;
