use std::sync::LazyLock;

use regex::Regex;

use crate::units::kb_multiplier;

static WORKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+) requests currently being processed,.*?(\d+) idle workers")
        .expect("worker-count pattern")
});

static THROUGHPUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\d.]+) requests/sec - ([\d.]+) ([A-Za-z]?)B/second - ([\d.]+) ([A-Za-z]?)B/request")
        .expect("throughput pattern")
});

/// Busy/idle worker counts from the "requests currently being processed"
/// line. Zero when the line is missing from the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerCounts {
    pub busy: u64,
    pub idle: u64,
}

/// Throughput summary, normalized to kilobytes. Every field is `None` when
/// the summary line is missing; the byte figures are also `None` when their
/// unit letter is not a known scale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Throughput {
    pub requests_per_sec: Option<f64>,
    pub kb_per_sec: Option<f64>,
    pub kb_per_request: Option<f64>,
}

/// Everything the probe extracts from one server-status body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPage {
    pub workers: WorkerCounts,
    pub throughput: Throughput,
    pub scoreboard: String,
}

pub fn parse_status_page(body: &str) -> StatusPage {
    StatusPage {
        workers: scan_worker_counts(body).unwrap_or_default(),
        throughput: scan_throughput(body).unwrap_or_default(),
        scoreboard: scan_scoreboard(body),
    }
}

/// First line matching "N requests currently being processed, ... M idle
/// workers". Apache puts descriptive text between the two counts, so the
/// pattern only pins the phrases around them.
pub fn scan_worker_counts(body: &str) -> Option<WorkerCounts> {
    body.lines().find_map(|line| {
        let caps = WORKER_RE.captures(line)?;
        Some(WorkerCounts {
            busy: caps[1].parse().ok()?,
            idle: caps[2].parse().ok()?,
        })
    })
}

/// First line matching the "requests/sec - B/second - B/request" summary.
pub fn scan_throughput(body: &str) -> Option<Throughput> {
    body.lines().find_map(|line| {
        let caps = THROUGHPUT_RE.captures(line)?;
        Some(Throughput {
            requests_per_sec: caps[1].parse().ok(),
            kb_per_sec: to_kilobytes(&caps[2], &caps[3]),
            kb_per_request: to_kilobytes(&caps[4], &caps[5]),
        })
    })
}

fn to_kilobytes(value: &str, unit: &str) -> Option<f64> {
    let value: f64 = value.parse().ok()?;
    Some(value * kb_multiplier(unit.chars().next())?)
}

/// Scoreboard text between the first `<pre>` and the next `</pre>`, tags
/// stripped, case-insensitive. Either marker missing yields an empty
/// scoreboard, which downstream tallies as zero of everything.
pub fn scan_scoreboard(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let Some(open) = lines
        .iter()
        .position(|l| l.to_ascii_lowercase().contains("<pre>"))
    else {
        return String::new();
    };
    let Some(close) = lines[open..]
        .iter()
        .position(|l| l.to_ascii_lowercase().contains("</pre>"))
        .map(|i| i + open)
    else {
        return String::new();
    };

    let block = lines[open..=close].concat();
    let lower = block.to_ascii_lowercase();
    let start = lower.find("<pre>").map_or(0, |i| i + "<pre>".len());
    let end = lower[start..].find("</pre>").map_or(block.len(), |i| i + start);
    block[start..end].to_string()
}
