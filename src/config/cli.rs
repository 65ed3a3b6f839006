use crate::core::ReportSink;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for StdoutSink {
    fn write_report(&self, report: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(report.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
