//! Rendering of a [`TransactionSummary`] into report lines.

use crate::models::TransactionSummary;
use log::info;

/// Destination for rendered report lines.
pub trait ReportSink {
    fn emit(&mut self, line: &str);
}

/// Writes every line through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn emit(&mut self, line: &str) {
        info!("{line}");
    }
}

impl ReportSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Render the report. Breakdown entries follow sorted key order.
pub fn render(summary: &TransactionSummary) -> Vec<String> {
    let mut lines = Vec::with_capacity(
        6 + summary.by_type.len() + summary.by_status.len() + summary.transactions_per_day.len(),
    );

    lines.push("🔔 Transaction Summary Report".to_string());
    lines.push(format!("📊 Total Transactions: {}", summary.total_transactions));
    lines.push(format!("💰 Total Amount: {:.2}", summary.total_amount));

    lines.push("📂 Breakdown by Transaction Type:".to_string());
    for (kind, amount) in &summary.by_type {
        lines.push(format!("  - {kind}: {amount:.2}"));
    }

    lines.push("📁 Breakdown by Status:".to_string());
    for (status, count) in &summary.by_status {
        lines.push(format!("  - {status}: {count}"));
    }

    lines.push("🗓️ Transactions Per Day:".to_string());
    for (day, count) in &summary.transactions_per_day {
        lines.push(format!("  - {day}: {count}"));
    }

    lines
}

pub fn write_report<S: ReportSink + ?Sized>(summary: &TransactionSummary, sink: &mut S) {
    for line in render(summary) {
        sink.emit(&line);
    }
}
