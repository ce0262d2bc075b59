//! DNS wire-format codec (RFC 1035 §4).
//!
//! Encoding emits the header and question of a query into a caller-owned
//! buffer. Decoding reads the header, question and answer section of a
//! response; answer rdata is borrowed from the response buffer.

pub mod cursor;
mod error;
pub mod flags;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod resource;

pub use cursor::{WireReader, WireWriter};
pub use error::WireError;
pub use header::{Header, HEADER_LEN};
pub use message::{build_query, parse_response, Message, MessageBuffer, MAX_MESSAGE_LEN};
pub use name::WireName;
pub use question::Question;
pub use resource::Resource;
