use clap::Parser;
use nyc_agencies::utils::logger;
use nyc_agencies::{CliConfig, ProgramsPipeline, ReportEngine, StdoutSink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nyc-agencies");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let sink = StdoutSink::new();
    let pipeline = ProgramsPipeline::new(sink, config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(count) => {
            tracing::info!("✅ Done, {} distinct agencies", count);
        }
        Err(e) => {
            tracing::error!("❌ Run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
