use crate::evaluate::Verdict;
use crate::parse::StatusPage;
use crate::scoreboard::StateTallies;

/// Renders the single plugin output line: human-readable summary, then the
/// perfdata segment after `|` in the fixed label order graphing systems key
/// on. Every label is always present; metrics the scans never found render
/// as zero so the line stays structurally complete.
pub fn render(
    verdict: Verdict,
    elapsed_secs: f64,
    page: &StatusPage,
    tallies: &StateTallies,
) -> String {
    let t = &page.throughput;
    format!(
        "{verdict} {elapsed_secs:.6} seconds response time. \
         Idle {idle}, busy {busy}, open slots {open} | \
         'Waiting for Connection'={waiting} 'Starting Up'={starting} \
         'Reading Request'={reading} 'Sending Reply'={sending} \
         'Keepalive (read)'={keepalive} 'DNS Lookup'={dns} \
         'Closing Connection'={closing} 'Logging'={logging} \
         'Gracefully finishing'={graceful} 'Idle cleanup'={idle_cleanup} \
         'Open slot'={open} 'Requests/sec'={rps:.1} \
         'kB per sec'={kbs:.1}KB 'kB per Request'={kbr:.1}KB",
        idle = page.workers.idle,
        busy = page.workers.busy,
        open = tallies.open_slots,
        waiting = tallies.waiting,
        starting = tallies.starting,
        reading = tallies.reading,
        sending = tallies.sending,
        keepalive = tallies.keepalive,
        dns = tallies.dns,
        closing = tallies.closing,
        logging = tallies.logging,
        graceful = tallies.graceful,
        idle_cleanup = tallies.idle_cleanup,
        rps = t.requests_per_sec.unwrap_or(0.0),
        kbs = t.kb_per_sec.unwrap_or(0.0),
        kbr = t.kb_per_request.unwrap_or(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::evaluate::Verdict;
    use crate::parse::{StatusPage, Throughput, WorkerCounts};
    use crate::scoreboard::StateTallies;

    fn sample_page() -> StatusPage {
        StatusPage {
            workers: WorkerCounts { busy: 5, idle: 10 },
            throughput: Throughput {
                requests_per_sec: Some(12.3),
                kb_per_sec: Some(45.6),
                kb_per_request: Some(3.2),
            },
            scoreboard: "..WW.._SS".into(),
        }
    }

    #[test]
    fn full_line_layout() {
        let page = sample_page();
        let tallies = StateTallies::from_scoreboard(&page.scoreboard);
        let line = render(Verdict::Ok, 0.123456, &page, &tallies);
        assert_eq!(
            line,
            "OK 0.123456 seconds response time. Idle 10, busy 5, open slots 4 | \
             'Waiting for Connection'=1 'Starting Up'=2 'Reading Request'=0 \
             'Sending Reply'=2 'Keepalive (read)'=0 'DNS Lookup'=0 \
             'Closing Connection'=0 'Logging'=0 'Gracefully finishing'=0 \
             'Idle cleanup'=0 'Open slot'=4 'Requests/sec'=12.3 \
             'kB per sec'=45.6KB 'kB per Request'=3.2KB"
        );
    }

    #[test]
    fn absent_metrics_render_as_zero() {
        let page = StatusPage::default();
        let tallies = StateTallies::default();
        let line = render(Verdict::Critical, 1.0, &page, &tallies);
        assert!(line.starts_with("CRITICAL 1.000000 seconds response time."));
        assert!(line.contains("Idle 0, busy 0, open slots 0"));
        assert!(line.contains("'Requests/sec'=0.0"));
        assert!(line.contains("'kB per sec'=0.0KB"));
        assert!(line.contains("'kB per Request'=0.0KB"));
    }

    #[test]
    fn perfdata_labels_keep_their_order() {
        let page = sample_page();
        let tallies = StateTallies::from_scoreboard(&page.scoreboard);
        let line = render(Verdict::Warning, 0.5, &page, &tallies);
        let perfdata = line.split(" | ").nth(1).unwrap();
        let labels: Vec<&str> = perfdata
            .split('\'')
            .filter(|s| !s.is_empty() && !s.starts_with('='))
            .collect();
        let expected = [
            "Waiting for Connection",
            "Starting Up",
            "Reading Request",
            "Sending Reply",
            "Keepalive (read)",
            "DNS Lookup",
            "Closing Connection",
            "Logging",
            "Gracefully finishing",
            "Idle cleanup",
            "Open slot",
            "Requests/sec",
            "kB per sec",
            "kB per Request",
        ];
        let found: Vec<&str> = labels
            .into_iter()
            .filter(|l| expected.contains(l))
            .collect();
        assert_eq!(found, expected);
    }
}
