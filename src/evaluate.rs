use std::fmt;
use std::process;

use crate::error::{Error, Result};

/// Threshold value that turns a check off.
pub const DISABLED: i64 = -1;

/// Final severity of one probe run, in the order the monitoring framework
/// defines its exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Verdict {
    pub fn exit_code(self) -> i32 {
        match self {
            Verdict::Ok => 0,
            Verdict::Warning => 1,
            Verdict::Critical => 2,
            Verdict::Unknown => 3,
        }
    }

    /// Terminal step: the report line must already be printed.
    pub fn exit(self) -> ! {
        process::exit(self.exit_code())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Ok => "OK",
            Verdict::Warning => "WARNING",
            Verdict::Critical => "CRITICAL",
            Verdict::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

/// Warning/critical availability floors. Either may be `DISABLED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: i64,
    pub critical: i64,
}

impl Thresholds {
    /// Rejects an inverted pair up front so the evaluator never sees one.
    /// A disabled critical lifts the ordering requirement.
    pub fn new(warning: i64, critical: i64) -> Result<Self> {
        if critical != DISABLED && warning <= critical {
            return Err(Error::Config(format!(
                "warning threshold ({warning}) must exceed critical ({critical})"
            )));
        }
        Ok(Self { warning, critical })
    }
}

/// Capacity headroom: slots nobody occupies plus workers sitting idle.
pub fn availability(open_slots: u64, idle_workers: u64) -> i64 {
    open_slots as i64 + idle_workers as i64
}

/// Classifies availability against the thresholds, critical first, with `<=`
/// triggering. No thresholds means the evaluator is bypassed and a
/// successful fetch is always OK.
pub fn evaluate(availability: i64, thresholds: Option<Thresholds>) -> Verdict {
    let Some(t) = thresholds else {
        return Verdict::Ok;
    };
    if t.critical != DISABLED && availability <= t.critical {
        Verdict::Critical
    } else if t.warning != DISABLED && availability <= t.warning {
        Verdict::Warning
    } else {
        Verdict::Ok
    }
}

/// Verdict when the status page could not be fetched at all. Without
/// thresholds an unreachable page is presumed a hard outage; with them the
/// failure to measure is reported as indeterminate.
pub fn fetch_failure_verdict(thresholds: Option<Thresholds>) -> Verdict {
    if thresholds.is_some() {
        Verdict::Unknown
    } else {
        Verdict::Critical
    }
}
