use std::time::Duration;

use clap::Parser;

use check_apache_status::error::{Error, Result};
use check_apache_status::evaluate::{self, Thresholds, Verdict};
use check_apache_status::fetch::StatusClient;
use check_apache_status::parse;
use check_apache_status::report;
use check_apache_status::scoreboard::StateTallies;

#[derive(Parser)]
#[command(name = "check_apache_status")]
#[command(version = "0.1.0")]
#[command(about = "Checks Apache worker availability via the mod_status page", long_about = None)]
struct Cli {
    /// Host serving the mod_status page
    #[arg(short = 'H', long)]
    hostname: String,

    /// TCP port of the status page
    #[arg(short, long, default_value_t = 80)]
    port: u16,

    /// User-Agent header sent with the request
    #[arg(short, long, default_value = "check_apache_status/0.1")]
    useragent: String,

    /// Request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Warn when open slots plus idle workers drop to this many or fewer
    #[arg(short, long)]
    warning: Option<i64>,

    /// Critical floor for the same figure; -1 disables the critical check
    #[arg(short, long)]
    critical: Option<i64>,
}

fn thresholds_from(cli: &Cli) -> Result<Option<Thresholds>> {
    match (cli.warning, cli.critical) {
        (None, None) => Ok(None),
        (Some(w), Some(c)) => Thresholds::new(w, c).map(Some),
        _ => Err(Error::Config(
            "--warning and --critical must be given together".to_string(),
        )),
    }
}

#[tokio::main]
async fn main() {
    if std::env::var("RUST_LOG").is_err() {
        unsafe { std::env::set_var("RUST_LOG", "info"); }
    }
    env_logger::init();

    let cli = Cli::parse();

    let thresholds = match thresholds_from(&cli) {
        Ok(t) => t,
        Err(e) => {
            println!("UNKNOWN {e}");
            eprintln!("Run check_apache_status --help for usage");
            Verdict::Unknown.exit();
        }
    };

    let client = match StatusClient::new(
        &cli.hostname,
        cli.port,
        Duration::from_secs(cli.timeout),
        &cli.useragent,
    ) {
        Ok(client) => client,
        Err(e) => {
            println!("UNKNOWN {e}");
            Verdict::Unknown.exit();
        }
    };

    // Last-resort alarm one second past the client timeout, for the case
    // where the transport itself hangs instead of erroring out.
    let alarm = Duration::from_secs(cli.timeout + 1);
    let outcome = match tokio::time::timeout(alarm, client.fetch()).await {
        Ok(outcome) => outcome,
        Err(_) => {
            println!(
                "CRITICAL no response from {} within {} seconds",
                client.url(),
                cli.timeout
            );
            Verdict::Critical.exit();
        }
    };

    if !outcome.success {
        let verdict = evaluate::fetch_failure_verdict(thresholds);
        println!("{verdict} {}", outcome.status_line);
        verdict.exit();
    }

    let page = parse::parse_status_page(&outcome.body);
    let tallies = StateTallies::from_scoreboard(&page.scoreboard);
    let availability = evaluate::availability(tallies.open_slots, page.workers.idle);
    let verdict = evaluate::evaluate(availability, thresholds);

    println!(
        "{}",
        report::render(verdict, outcome.elapsed.as_secs_f64(), &page, &tallies)
    );
    verdict.exit();
}
