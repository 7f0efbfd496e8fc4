pub mod error;
pub mod evaluate;
pub mod fetch;
pub mod parse;
pub mod report;
pub mod scoreboard;
pub mod units;

pub use error::{Error, Result};
pub use evaluate::{Thresholds, Verdict};
pub use fetch::{FetchOutcome, StatusClient};
pub use parse::{StatusPage, Throughput, WorkerCounts};
pub use scoreboard::StateTallies;
