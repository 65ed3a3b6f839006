pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::StdoutSink, CliConfig, PROGRAMS_ENDPOINT};
pub use core::{engine::ReportEngine, pipeline::ProgramsPipeline};
pub use domain::model::Projection;
pub use domain::ports::{ConfigProvider, Pipeline, ReportSink};
pub use utils::error::{ReportError, Result};
