//! NAT translation-table records.

use crate::{Endpoint, Protocol};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One entry of a router's NAT translation table.
///
/// Constructed once per parsed record block and immutable afterwards. The
/// four endpoints follow standard NAT terminology: inside/outside crossed
/// with global/local.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatRecord {
    pub protocol: Protocol,
    pub inside_global: Endpoint,
    pub inside_local: Endpoint,
    pub outside_local: Endpoint,
    pub outside_global: Endpoint,
    /// When the translation was created.
    pub created: NaiveDateTime,
    /// When the translation last carried traffic.
    pub last_used: NaiveDateTime,
    /// Remaining session lifetime.
    pub timeout: Duration,
}

impl NatRecord {
    /// Returns true for static translations (bare addresses, no ports).
    pub fn is_static(&self) -> bool {
        self.protocol == Protocol::Static
    }
}
