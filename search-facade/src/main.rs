use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};

use search_facade::{cli, logging, AppError, Cli, Dependencies, Settings};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_from_env();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(error = %e, "search-facade failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run one command and print its output. Returns whether the operation succeeded.
async fn run(cli: Cli) -> Result<bool, AppError> {
    let mut settings = Settings::from_env()?;
    if let Some(url) = cli.opensearch_url {
        settings = settings.with_opensearch_url(url);
    }

    let dependencies = Dependencies::new(settings).await?;

    info!(command = ?cli.command, "Running command");
    let (output, succeeded) = match cli::execute(&dependencies.client, cli.command).await {
        Ok(reply) => (serde_json::to_string_pretty(&reply)?, true),
        Err(e) => (serde_json::to_string_pretty(&e.envelope())?, false),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output)?;

    Ok(succeeded)
}
