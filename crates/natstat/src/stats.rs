//! Per-protocol aggregate statistics over a translation table.

use crate::table::NatTable;
use natstat_types::Protocol;
use serde::Serialize;
use std::time::Duration;

/// Sessions with more remaining lifetime than this are counted as
/// long-lived.
pub const LONG_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Aggregate figures for one protocol partition.
///
/// `long_percentage` and `average_timeout` are `None` for an empty
/// partition: "not applicable" is a defined value here, never a division
/// error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProtocolSummary {
    pub protocol: Protocol,
    pub count: usize,
    /// Records whose timeout exceeds [`LONG_LIFETIME`].
    pub long_count: usize,
    /// Integer percentage of long-lived records, `long_count * 100 / count`.
    pub long_percentage: Option<u64>,
    pub average_timeout: Option<Duration>,
}

impl ProtocolSummary {
    fn from_table(protocol: Protocol, table: &NatTable) -> Self {
        let partition = table.with_protocol(protocol);
        let count = partition.len();
        let long_count = partition.filter(|r| r.timeout > LONG_LIFETIME).len();

        let (long_percentage, average_timeout) = if count == 0 {
            (None, None)
        } else {
            let total: Duration = partition.iter().map(|r| r.timeout).sum();
            (
                Some((long_count * 100 / count) as u64),
                Some(total / count as u32),
            )
        };

        ProtocolSummary {
            protocol,
            count,
            long_count,
            long_percentage,
            average_timeout,
        }
    }
}

/// Per-protocol summaries for the reporting step.
///
/// Static translations have no session lifetime semantics and are excluded
/// from reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NatReport {
    pub udp: ProtocolSummary,
    pub tcp: ProtocolSummary,
    pub icmp: ProtocolSummary,
}

/// Computes the full report from a translation table.
pub fn summarize(table: &NatTable) -> NatReport {
    NatReport {
        udp: ProtocolSummary::from_table(Protocol::Udp, table),
        tcp: ProtocolSummary::from_table(Protocol::Tcp, table),
        icmp: ProtocolSummary::from_table(Protocol::Icmp, table),
    }
}
