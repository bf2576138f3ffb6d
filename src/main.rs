use artifact_miner::app::App;
use artifact_miner::config::DemoConfig;
use artifact_miner::error::user_friendly_message;
use artifact_miner::models::Catalog;
use artifact_miner::{logging, Result};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", user_friendly_message(&e));
            eprintln!("({})", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = DemoConfig::load()?;
    let _log_guard = logging::init(&config)?;
    let catalog = Catalog::embedded()?;

    let mut app = App::new(config, catalog)?;
    app.init()?;
    let result = app.run().await;
    // Restore before any error reaches stderr
    app.restore()?;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Main loop failed");
    }
    result
}
