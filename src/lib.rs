//! Fetches a transaction summary document from a REST endpoint and writes
//! a formatted report, grouped by type, status and day, to a log sink.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod report;

pub use client::Client;
pub use config::Config;
pub use error::{ConfigError, SummaryError};
pub use models::TransactionSummary;
pub use report::{LogSink, ReportSink};

/// Fetch the summary once and emit the report. Nothing is emitted unless the
/// whole fetch and decode succeeded.
pub async fn run<S: ReportSink + ?Sized>(config: Config, sink: &mut S) -> Result<(), SummaryError> {
    let client = Client::new(config)?;
    let summary = client.fetch_summary().await?;
    report::write_report(&summary, sink);
    Ok(())
}
