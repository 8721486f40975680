use clap::Parser;
use log::{error, info};
use std::error::Error;
use std::process::ExitCode;
use std::time::Duration;
use txsummary::config::{DEFAULT_AUTH_HEADER, DEFAULT_ENV_PREFIX};
use txsummary::{Config, LogSink, SummaryError};

#[derive(Debug, Parser)]
#[command(
    name = "txsummary",
    about = "Fetch a transaction summary and log a formatted report"
)]
struct Cli {
    /// Prefix of the <PREFIX>_SERVICEURL and <PREFIX>_APIKEY variables
    #[arg(long, env = "TXSUMMARY_ENV_PREFIX", default_value = DEFAULT_ENV_PREFIX)]
    env_prefix: String,

    /// Header carrying "Bearer <api key>"
    #[arg(long, env = "TXSUMMARY_AUTH_HEADER", default_value = DEFAULT_AUTH_HEADER)]
    auth_header: String,

    /// Request timeout in seconds
    #[arg(long, env = "TXSUMMARY_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    info!("Starting Transaction Summary Logger...");

    match fetch_and_log(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", describe(&err));
            ExitCode::FAILURE
        }
    }
}

async fn fetch_and_log(cli: Cli) -> Result<(), SummaryError> {
    let config = Config::from_env(&cli.env_prefix)?
        .with_auth_header(&cli.auth_header)?
        .with_timeout(Duration::from_secs(cli.timeout_secs))?;
    txsummary::run(config, &mut LogSink).await
}

/// Top-level message plus the causes the variant's own message does not already show.
fn describe(err: &SummaryError) -> String {
    let mut message = err.to_string();
    let mut cause = err.source().and_then(|e| e.source());
    while let Some(inner) = cause {
        message.push_str(&format!(": {inner}"));
        cause = inner.source();
    }
    message
}
