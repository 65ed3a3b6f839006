pub mod cli;

use crate::core::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// NYC OpenData DYCD after-school programs resource. The dataset and the
/// projected field are fixed; only logging verbosity is configurable.
pub const PROGRAMS_ENDPOINT: &str = "http://data.cityofnewyork.us/resource/uvks-tn5n.json";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "nyc-agencies")]
#[command(about = "List the distinct agencies in the NYC after-school programs dataset")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        PROGRAMS_ENDPOINT
    }

    fn request_timeout(&self) -> Duration {
        REQUEST_TIMEOUT
    }
}
