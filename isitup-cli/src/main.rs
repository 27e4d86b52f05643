mod display;

use std::time::Duration;

use clap::Parser;
use isitup_core::output::{get_formatter, OutputFormat};
use isitup_core::{CheckOutcome, CheckReport, CheckerConfig, StatusChecker};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use display::spinner::Spinner;

#[derive(Parser, Debug)]
#[command(name = "isitup")]
#[command(about = "Check if a website is up or down!")]
#[command(version)]
struct Cli {
    /// Host to check (e.g. google.com)
    host: String,

    /// Output format (human or json)
    #[arg(short, long, default_value = "human")]
    format: OutputFormat,

    /// Print every field of the service's answer after the verdict
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Base URL of the status service
    #[arg(long, env = "ISITUP_ENDPOINT", default_value = isitup_core::status::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Overall request timeout in seconds
    #[arg(
        long,
        env = "ISITUP_TIMEOUT",
        default_value_t = isitup_core::status::DEFAULT_REQUEST_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

impl Cli {
    fn checker_config(&self) -> CheckerConfig {
        CheckerConfig::new()
            .with_endpoint(self.endpoint.as_str())
            .with_request_timeout(Duration::from_secs(self.timeout))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the verdict
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = run_check(&cli).await;
    println!("{}", render(&cli, &outcome));

    // A site reported down is still a successful run.
    Ok(())
}

/// Text printed on stdout for a finished check
fn render(cli: &Cli, outcome: &CheckOutcome) -> String {
    let report = CheckReport::new(cli.host.as_str(), outcome);
    get_formatter(cli.format, !cli.no_color).format_report(&report, cli.verbose)
}

async fn run_check(cli: &Cli) -> CheckOutcome {
    let checker = match StatusChecker::with_config(&cli.host, cli.checker_config()) {
        Ok(checker) => checker,
        Err(e) => {
            warn!(host = %cli.host, error = %e, "Could not build status request");
            return CheckOutcome::CheckFailed(e.to_string());
        }
    };

    let spinner = match cli.format {
        OutputFormat::Human => Spinner::new(&format!("Checking {}...", cli.host)),
        OutputFormat::Json => Spinner::hidden(),
    };
    let outcome = checker.outcome().await;
    spinner.finish();

    if let CheckOutcome::CheckFailed(ref reason) = outcome {
        warn!(host = %cli.host, error = %reason, "Status check failed");
    }

    outcome
}
