//! Translation protocol variants with stable text-name mappings.

use crate::ParseError;
use once_cell::sync::Lazy;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The translation type of a NAT table entry.
///
/// Routers report static translations with a `---` placeholder in the
/// protocol column, so the single-character code for [`Protocol::Static`]
/// is `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Protocol {
    Udp,
    Tcp,
    Static,
    Icmp,
}

/// Forward table: variant to canonical lowercase name.
///
/// Single source of truth for both name directions; the reverse map is
/// derived from this table, never maintained by hand.
const NAMES: [(Protocol, &str); 4] = [
    (Protocol::Udp, "udp"),
    (Protocol::Tcp, "tcp"),
    (Protocol::Static, "static"),
    (Protocol::Icmp, "icmp"),
];

/// Single-character source codes as they appear in the protocol column.
const CODES: [(char, Protocol); 4] = [
    ('u', Protocol::Udp),
    ('t', Protocol::Tcp),
    ('-', Protocol::Static),
    ('i', Protocol::Icmp),
];

static REVERSE_NAMES: Lazy<HashMap<&'static str, Protocol>> =
    Lazy::new(|| NAMES.iter().map(|&(proto, name)| (name, proto)).collect());

impl Protocol {
    /// All variants, in the order the report lists them.
    pub const ALL: [Protocol; 4] = [
        Protocol::Udp,
        Protocol::Tcp,
        Protocol::Static,
        Protocol::Icmp,
    ];

    /// Resolves the single-character code from the protocol column.
    pub fn from_code(code: char) -> Result<Self, ParseError> {
        CODES
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, proto)| proto)
            .ok_or(ParseError::UnknownProtocolCode(code))
    }

    /// Returns the canonical lowercase name.
    pub fn name(&self) -> &'static str {
        NAMES
            .iter()
            .find(|&&(proto, _)| proto == *self)
            .map(|&(_, name)| name)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Protocol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REVERSE_NAMES
            .get(s)
            .copied()
            .ok_or_else(|| ParseError::UnknownProtocol(s.to_string()))
    }
}

impl Serialize for Protocol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Protocol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NameVisitor;

        impl Visitor<'_> for NameVisitor {
            type Value = Protocol;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a protocol name (udp, tcp, static, icmp)")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Protocol, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(NameVisitor)
    }
}
