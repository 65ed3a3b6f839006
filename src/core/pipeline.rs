use crate::core::{ConfigProvider, Pipeline, Projection, ReportSink};
use crate::utils::error::{ReportError, Result};
use reqwest::Client;
use serde_json::Value;

pub struct ProgramsPipeline<S: ReportSink, C: ConfigProvider> {
    sink: S,
    config: C,
    client: Client,
}

impl<S: ReportSink, C: ConfigProvider> ProgramsPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self {
            sink,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: ReportSink, C: ConfigProvider> Pipeline for ProgramsPipeline<S, C> {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", self.config.endpoint());
        let response = self
            .client
            .get(self.config.endpoint())
            .timeout(self.config.request_timeout())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            // The body is still returned; an unusable error body fails in
            // extract rather than here.
            tracing::warn!("API returned status {}, parsing body anyway", status);
        }

        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    fn extract(&self, body: &[u8]) -> Result<Projection> {
        let parsed: Value = serde_json::from_slice(body)?;
        let items = match parsed {
            Value::Array(items) => items,
            other => {
                return Err(ReportError::Shape {
                    message: format!(
                        "expected a JSON array of records, got {}",
                        json_kind(&other)
                    ),
                })
            }
        };

        let mut agencies = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let agency = item
                .get("agency")
                .and_then(Value::as_str)
                .ok_or(ReportError::FieldMissing { index })?;
            agencies.push(agency.to_owned());
        }

        Ok(Projection::new(agencies))
    }

    fn present(&self, projection: Projection) -> Result<usize> {
        let distinct = projection.distinct();

        // Whole report is buffered; nothing reaches the sink on failure.
        let mut report = String::new();
        for agency in &distinct {
            report.push_str(agency);
            report.push('\n');
        }

        self.sink.write_report(&report)?;
        Ok(distinct.len())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
