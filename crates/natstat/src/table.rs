//! Ordered store of parsed translation records.

use natstat_types::{NatRecord, Protocol};

/// An ordered collection of [`NatRecord`]s (input order).
///
/// Filtering is pure and order-preserving, so filters can be chained
/// without mutating the source table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NatTable {
    records: Vec<NatRecord>,
}

impl NatTable {
    pub fn new() -> Self {
        NatTable {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: NatRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NatRecord> {
        self.records.iter()
    }

    /// Returns a new table containing exactly the records for which the
    /// predicate holds, in their original relative order.
    pub fn filter<P>(&self, predicate: P) -> NatTable
    where
        P: Fn(&NatRecord) -> bool,
    {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Convenience filter for one protocol partition.
    pub fn with_protocol(&self, protocol: Protocol) -> NatTable {
        self.filter(|record| record.protocol == protocol)
    }
}

impl FromIterator<NatRecord> for NatTable {
    fn from_iter<I: IntoIterator<Item = NatRecord>>(iter: I) -> Self {
        NatTable {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NatTable {
    type Item = &'a NatRecord;
    type IntoIter = std::slice::Iter<'a, NatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
