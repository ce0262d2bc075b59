//! ferrous-dig domain layer: DNS wire codec, record types and configuration.
pub mod config;
pub mod errors;
pub mod record_type;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use record_type::{RecordClass, RecordType, ResponseCode};
pub use wire::{Message, WireError};
