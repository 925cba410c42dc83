//! # natstat - NAT Translation Table Statistics
//!
//! This crate turns the textual dump of a router's `show ip nat translations`
//! command into typed records and computes per-protocol session statistics.
//!
//! ## Pipeline
//! Data flows one way: raw bytes -> [`RecordBlocks`] -> record blocks ->
//! [`parse_record`] -> records -> [`NatTable`] -> [`summarize`] ->
//! [`render_text`].
//!
//! ## Input format
//! An optional `Pro ...` column-header line, followed by record blocks
//! separated by blank lines, the final block terminated by a single trailing
//! newline. Each block carries an address/protocol line and a timing line:
//!
//! ```text
//! udp   10.0.0.1:1234     192.168.0.1:1234  203.0.113.1:80    203.0.113.1:80
//!   create: 01/02/23 10:00:00, use: 01/02/23 10:05:00, timeout: 01:30:00
//! ```
//!
//! Static translations use a `---` protocol placeholder and bare addresses
//! without ports.
//!
//! ## Error policy
//! Parse-time errors are fatal: the first malformed block aborts the run,
//! so statistics are never computed from a silently undercounted table.
//! Aggregation over an empty protocol partition is a defined value
//! (`None`, rendered as "no data"/"n/a"), never a division error.

mod error;
mod parser;
mod report;
mod stats;
mod table;
mod tokenizer;

pub use error::{AddressField, NatStatError, Result};
pub use parser::{parse_record, read_table};
pub use report::render_text;
pub use stats::{summarize, NatReport, ProtocolSummary, LONG_LIFETIME};
pub use table::NatTable;
pub use tokenizer::{split_block, RecordBlocks, SplitStep};
