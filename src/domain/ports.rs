use crate::domain::model::Projection;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Destination for the finished report.
pub trait ReportSink: Send + Sync {
    fn write_report(&self, report: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;
    fn extract(&self, body: &[u8]) -> Result<Projection>;
    fn present(&self, projection: Projection) -> Result<usize>;
}
