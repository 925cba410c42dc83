//! Text rendering of the aggregate report.

use crate::stats::{NatReport, ProtocolSummary};
use std::time::Duration;

/// Renders the report in the tool's human-readable layout.
///
/// Empty partitions render as `no data` (averages) and `n/a` (threshold
/// percentages).
pub fn render_text(report: &NatReport) -> String {
    let mut out = String::new();

    for summary in [&report.udp, &report.tcp] {
        match summary.average_timeout {
            Some(avg) => out.push_str(&format!(
                "average {} timeout: {}\n",
                summary.protocol,
                format_duration(avg)
            )),
            None => out.push_str(&format!("average {} timeout: no data\n", summary.protocol)),
        }
    }

    out.push_str("Counts:\n");
    for summary in [&report.udp, &report.tcp, &report.icmp] {
        out.push_str(&count_line(summary));
    }
    out
}

fn count_line(summary: &ProtocolSummary) -> String {
    match summary.long_percentage {
        Some(pct) => format!(
            "{}: {} | >1h left: {} ({}%)\n",
            summary.protocol, summary.count, summary.long_count, pct
        ),
        None => format!("{}: 0 | >1h left: n/a\n", summary.protocol),
    }
}

fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let hours = secs / 3600;
    let minutes = secs % 3600 / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
