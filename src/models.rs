use crate::error::SummaryError;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Aggregated transaction statistics as served by the summary endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionSummary {
    pub total_transactions: u64,
    pub total_amount: f64,
    #[serde(default)]
    pub by_type: BTreeMap<String, f64>,
    #[serde(default)]
    pub by_status: BTreeMap<String, u64>,
    #[serde(default)]
    pub transactions_per_day: BTreeMap<String, u64>,
}

pub fn parse_summary(data: &str) -> Result<TransactionSummary, SummaryError> {
    let summary: TransactionSummary = serde_json::from_str(data)?;
    debug!(
        "Parsed summary: {} types, {} statuses, {} days",
        summary.by_type.len(),
        summary.by_status.len(),
        summary.transactions_per_day.len()
    );
    Ok(summary)
}
