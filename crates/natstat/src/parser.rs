//! Parses one record block into a [`NatRecord`].
//!
//! A block carries two required lines: the address/protocol line and the
//! timing line. A third segment is tolerated but unused. Parsing is
//! all-or-nothing: any mismatch aborts the record with a descriptive error.

use crate::error::{AddressField, NatStatError, Result};
use crate::table::NatTable;
use crate::tokenizer::RecordBlocks;
use chrono::NaiveDateTime;
use natstat_types::{Endpoint, NatRecord, Protocol};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

/// Timestamp format of the create/use fields: `MM/DD/YY hh:mm:ss`, 24-hour.
const DATE_FORMAT: &str = "%m/%d/%y %H:%M:%S";

/// Address/protocol line: protocol code plus four address fields.
static TRANSLATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-{3}|tcp|udp|icmp)\s+([-:0-9.]+)\s+([-:0-9.]+)\s+([-:0-9.]+)\s+([-:0-9.]+)$")
        .expect("Invalid regex pattern")
});

/// Timing line: three comma-separated create/use/timeout sub-fields.
static TIMING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+create:\s+([^,]+),\s+use:\s+([^,]+),\s+timeout:\s+([^,]+)$")
        .expect("Invalid regex pattern")
});

/// The router's `HH:MM:SS` timeout notation.
static CLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d\d):(\d\d):(\d\d)$").expect("Invalid regex pattern"));

/// Normalized `<H>h<M>m<S>s` duration expression, components optional.
static DURATION_EXPR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?$").expect("Invalid regex pattern"));

/// Parses the inner text of exactly one record block.
pub fn parse_record(block: &str) -> Result<NatRecord> {
    let mut lines = block.splitn(3, '\n');
    let address_line = lines
        .next()
        .ok_or_else(|| NatStatError::MalformedRecord("empty record block".to_string()))?;
    let timing_line = lines
        .next()
        .ok_or_else(|| NatStatError::MalformedRecord("missing timing line".to_string()))?;

    let caps = TRANSLATION_RE.captures(address_line).ok_or_else(|| {
        NatStatError::MalformedRecord(format!("unrecognized translation line: {}", address_line))
    })?;

    let code = caps[1]
        .chars()
        .next()
        .ok_or_else(|| NatStatError::MalformedRecord("empty protocol code".to_string()))?;
    let protocol = Protocol::from_code(code)?;

    let inside_global = parse_endpoint(&caps[2], AddressField::InsideGlobal, protocol)?;
    let inside_local = parse_endpoint(&caps[3], AddressField::InsideLocal, protocol)?;
    let outside_local = parse_endpoint(&caps[4], AddressField::OutsideLocal, protocol)?;
    let outside_global = parse_endpoint(&caps[5], AddressField::OutsideGlobal, protocol)?;

    let times = TIMING_RE.captures(timing_line).ok_or_else(|| {
        NatStatError::MalformedRecord(format!(
            "unrecognized timing line: {}",
            timing_line.trim_start()
        ))
    })?;

    let created = parse_timestamp(&times[1])?;
    let last_used = parse_timestamp(&times[2])?;
    let timeout = parse_timeout(&times[3])?;

    Ok(NatRecord {
        protocol,
        inside_global,
        inside_local,
        outside_local,
        outside_global,
        created,
        last_used,
        timeout,
    })
}

/// Parses one address field.
///
/// Static translations carry bare addresses; every other variant carries
/// `address:port`. Errors name the logical field that failed.
fn parse_endpoint(text: &str, field: AddressField, protocol: Protocol) -> Result<Endpoint> {
    if protocol == Protocol::Static {
        let addr: IpAddr = text.parse().map_err(|_| NatStatError::AddressParse {
            field,
            value: text.to_string(),
        })?;
        return Ok(Endpoint::bare(addr));
    }

    let (host, port) = text.rsplit_once(':').ok_or_else(|| NatStatError::AddressParse {
        field,
        value: text.to_string(),
    })?;
    let addr: IpAddr = host.parse().map_err(|_| NatStatError::AddressParse {
        field,
        value: host.to_string(),
    })?;
    let port: u16 = port.parse().map_err(|_| NatStatError::PortParse {
        field,
        value: port.to_string(),
    })?;
    Ok(Endpoint::with_port(addr, port))
}

fn parse_timestamp(text: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATE_FORMAT).map_err(|source| {
        NatStatError::TimestampParse {
            value: text.to_string(),
            source,
        }
    })
}

/// Parses the timeout field.
///
/// The router reports `HH:MM:SS`; that notation is rewritten into an
/// `<H>h<M>m<S>s` duration expression before parsing, so inputs already in
/// duration notation pass through unchanged.
fn parse_timeout(text: &str) -> Result<Duration> {
    let expr = CLOCK_RE.replace(text, "${1}h${2}m${3}s");
    parse_duration_expr(&expr).ok_or_else(|| NatStatError::DurationParse(text.to_string()))
}

fn parse_duration_expr(expr: &str) -> Option<Duration> {
    let caps = DURATION_EXPR_RE.captures(expr)?;
    if caps.get(1).is_none() && caps.get(2).is_none() && caps.get(3).is_none() {
        return None;
    }
    let component = |i: usize| match caps.get(i) {
        Some(m) => m.as_str().parse::<u64>().ok(),
        None => Some(0),
    };
    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;
    Some(Duration::from_secs(hours * 3600 + minutes * 60 + seconds))
}

/// Reads a whole translation dump into a [`NatTable`].
///
/// Fail-fast: the first tokenizer or parser error in input order aborts the
/// run, so the resulting table is never silently undercounted.
pub fn read_table<R: BufRead>(reader: R) -> Result<NatTable> {
    let mut table = NatTable::new();
    for block in RecordBlocks::new(reader) {
        let record = parse_record(&block?)?;
        debug!(
            "parsed {} translation {} -> {}",
            record.protocol, record.inside_global, record.inside_local
        );
        table.push(record);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::net::Ipv4Addr;

    const UDP_BLOCK: &str = "udp   10.0.0.1:1234     192.168.0.1:1234  203.0.113.1:80    203.0.113.1:80\n  create: 01/02/23 10:00:00, use: 01/02/23 10:05:00, timeout: 01:30:00";

    const STATIC_BLOCK: &str = "---   203.0.113.10      192.168.1.10      203.0.113.20      203.0.113.20\n  create: 03/15/23 08:00:00, use: 03/15/23 08:00:00, timeout: 23:59:59";

    #[test]
    fn test_parse_udp_record() {
        let record = parse_record(UDP_BLOCK).unwrap();
        assert_eq!(record.protocol, Protocol::Udp);
        assert_eq!(
            record.inside_global,
            Endpoint::with_port(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), 1234)
        );
        assert_eq!(record.inside_global.port(), Some(1234));
        assert_eq!(record.timeout, Duration::from_secs(90 * 60));
        assert_eq!(
            record.created,
            NaiveDateTime::parse_from_str("01/02/23 10:00:00", DATE_FORMAT).unwrap()
        );
        assert_eq!(
            record.last_used,
            NaiveDateTime::parse_from_str("01/02/23 10:05:00", DATE_FORMAT).unwrap()
        );
    }

    #[test]
    fn test_parse_static_record_has_no_ports() {
        let record = parse_record(STATIC_BLOCK).unwrap();
        assert_eq!(record.protocol, Protocol::Static);
        assert!(record.is_static());
        for endpoint in [
            record.inside_global,
            record.inside_local,
            record.outside_local,
            record.outside_global,
        ] {
            assert_eq!(endpoint.port(), None);
        }
        assert_eq!(
            record.inside_local.addr(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10))
        );
    }

    #[test]
    fn test_malformed_third_field_names_outside_local() {
        let block = "udp   10.0.0.1:1234     192.168.0.1:1234  203.0.113.1       203.0.113.1:80\n  create: 01/02/23 10:00:00, use: 01/02/23 10:05:00, timeout: 01:30:00";
        let err = parse_record(block).unwrap_err();
        match err {
            NatStatError::AddressParse { field, .. } => {
                assert_eq!(field, AddressField::OutsideLocal);
            }
            other => panic!("expected AddressParse, got {:?}", other),
        }
    }

    #[test]
    fn test_port_out_of_range() {
        let block = "tcp   10.0.0.1:99999    192.168.0.1:1234  203.0.113.1:80    203.0.113.1:80\n  create: 01/02/23 10:00:00, use: 01/02/23 10:05:00, timeout: 01:30:00";
        let err = parse_record(block).unwrap_err();
        match err {
            NatStatError::PortParse { field, value } => {
                assert_eq!(field, AddressField::InsideGlobal);
                assert_eq!(value, "99999");
            }
            other => panic!("expected PortParse, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_timing_line() {
        let err = parse_record("udp 10.0.0.1:1 192.168.0.1:1 203.0.113.1:1 203.0.113.1:1")
            .unwrap_err();
        assert!(matches!(err, NatStatError::MalformedRecord(_)));
    }

    #[test]
    fn test_unrecognized_translation_line() {
        let block = "gre   10.0.0.1:1234     192.168.0.1:1234  203.0.113.1:80    203.0.113.1:80\n  create: 01/02/23 10:00:00, use: 01/02/23 10:05:00, timeout: 01:30:00";
        let err = parse_record(block).unwrap_err();
        assert!(matches!(err, NatStatError::MalformedRecord(_)));
    }

    #[test]
    fn test_bad_timestamp() {
        let block = "udp   10.0.0.1:1234     192.168.0.1:1234  203.0.113.1:80    203.0.113.1:80\n  create: 2023-01-02 10:00:00, use: 01/02/23 10:05:00, timeout: 01:30:00";
        let err = parse_record(block).unwrap_err();
        assert!(matches!(err, NatStatError::TimestampParse { .. }));
    }

    #[test]
    fn test_bad_duration() {
        let block = "udp   10.0.0.1:1234     192.168.0.1:1234  203.0.113.1:80    203.0.113.1:80\n  create: 01/02/23 10:00:00, use: 01/02/23 10:05:00, timeout: forever";
        let err = parse_record(block).unwrap_err();
        assert!(matches!(err, NatStatError::DurationParse(_)));
    }

    #[test]
    fn test_third_segment_tolerated() {
        let block = format!("{}\nsome trailing continuation text", UDP_BLOCK);
        let record = parse_record(&block).unwrap();
        assert_eq!(record.protocol, Protocol::Udp);
    }

    #[test]
    fn test_clock_notation_rewrite() {
        assert_eq!(
            parse_timeout("01:30:00").unwrap(),
            Duration::from_secs(90 * 60)
        );
        assert_eq!(parse_timeout("00:00:07").unwrap(), Duration::from_secs(7));
        // Already-normalized duration expressions pass through.
        assert_eq!(parse_timeout("90m").unwrap(), Duration::from_secs(90 * 60));
        assert_eq!(
            parse_timeout("1h22m30s").unwrap(),
            Duration::from_secs(4950)
        );
    }
}
