//! Address endpoints as they appear in a translation table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// An IP address with an optional port.
///
/// Static translations carry bare addresses; every other variant carries an
/// `address:port` pair. Modeling the port as `Option` keeps "no port"
/// distinct from port 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    addr: IpAddr,
    port: Option<u16>,
}

impl Endpoint {
    /// Creates an endpoint with a port (dynamic translations).
    pub const fn with_port(addr: IpAddr, port: u16) -> Self {
        Endpoint {
            addr,
            port: Some(port),
        }
    }

    /// Creates a bare-address endpoint (static translations).
    pub const fn bare(addr: IpAddr) -> Self {
        Endpoint { addr, port: None }
    }

    pub const fn addr(&self) -> IpAddr {
        self.addr
    }

    pub const fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.addr, port),
            None => self.addr.fmt(f),
        }
    }
}
