//! Error types for natstat

use std::fmt;
use thiserror::Error;

/// Result type alias for natstat operations.
pub type Result<T> = std::result::Result<T, NatStatError>;

/// The four logical address roles of a translation entry.
///
/// Carried in address/port errors so the operator can see which column of
/// the dump failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    InsideGlobal,
    InsideLocal,
    OutsideLocal,
    OutsideGlobal,
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AddressField::InsideGlobal => "Inside Global",
            AddressField::InsideLocal => "Inside Local",
            AddressField::OutsideLocal => "Outside Local",
            AddressField::OutsideGlobal => "Outside Global",
        };
        write!(f, "{}", s)
    }
}

/// Errors that can occur while tokenizing and parsing a translation dump.
#[derive(Debug, Error)]
pub enum NatStatError {
    /// Input ended without proper record termination.
    #[error("improperly formatted input: it must end with an empty line")]
    MalformedStream,

    /// A record block does not have the expected two-line structure.
    #[error("malformed record block: {0}")]
    MalformedRecord(String),

    /// A protocol code or name does not map to a known variant.
    #[error(transparent)]
    Protocol(#[from] natstat_types::ParseError),

    /// An address field could not be parsed.
    #[error("could not parse {field} address: {value}")]
    AddressParse {
        field: AddressField,
        value: String,
    },

    /// A port segment is not an integer in range.
    #[error("could not parse {field} port: {value}")]
    PortParse {
        field: AddressField,
        value: String,
    },

    /// A create/use timestamp does not match the expected format.
    #[error("could not parse timestamp '{value}': {source}")]
    TimestampParse {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// The timeout field is not a valid duration.
    #[error("could not parse timeout duration: {0}")]
    DurationParse(String),

    /// The input stream is not valid UTF-8.
    #[error("input is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// IO error while reading the input stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
