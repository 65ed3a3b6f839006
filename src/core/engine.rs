use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the pipeline once: fetch, extract, present. Returns the number
    /// of distinct agencies written.
    pub async fn run(&self) -> Result<usize> {
        tracing::info!("Fetching programs dataset");
        let body = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} bytes", body.len());

        let projection = self.pipeline.extract(&body)?;
        tracing::info!("Extracted {} agency entries", projection.len());

        let distinct = self.pipeline.present(projection)?;
        tracing::info!("Reported {} distinct agencies", distinct);

        Ok(distinct)
    }
}
