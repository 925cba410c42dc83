//! Typed primitives for NAT translation-table data.
//!
//! This crate provides the type-safe building blocks shared by the natstat
//! tools:
//!
//! - [`Protocol`]: the translation-type variants a router reports
//! - [`Endpoint`]: an IP address with an optional port
//! - [`NatRecord`]: one fully parsed translation-table entry

mod endpoint;
mod protocol;
mod record;

pub use endpoint::Endpoint;
pub use protocol::Protocol;
pub use record::NatRecord;

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown protocol name: {0}")]
    UnknownProtocol(String),

    #[error("unknown protocol code: {0}")]
    UnknownProtocolCode(char),

    #[error("invalid IP address format: {0}")]
    InvalidIpAddress(String),

    #[error("invalid port number: {0} (must be 0-65535)")]
    InvalidPort(String),
}
