use crate::domain::summary::ReconciliationSummary;
use crate::error::Result;
use std::io::Write;

/// Writes the run summary as pretty-printed JSON.
pub struct SummaryWriter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_summary(&mut self, summary: &ReconciliationSummary) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, summary)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_renders_counts_and_reasons() {
        let mut summary = ReconciliationSummary::new(2);
        summary.created = 1;
        summary.record_skip("Transaction txn_1 of type payout is not handled.".to_owned());

        let mut out = Vec::new();
        SummaryWriter::new(&mut out).write_summary(&summary).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"total_transactions\": 2"));
        assert!(text.contains("\"created\": 1"));
        assert!(text.contains("payout"));
        assert!(text.ends_with('\n'));
    }
}
