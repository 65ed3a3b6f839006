pub mod engine;
pub mod pipeline;

pub use crate::domain::model::Projection;
pub use crate::domain::ports::{ConfigProvider, Pipeline, ReportSink};
pub use crate::utils::error::Result;
