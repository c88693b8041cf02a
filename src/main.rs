use clap::Parser;
use product_editor::adapters::http_client::HttpProductService;
use product_editor::cli::Cli;
use product_editor::config::Settings;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing; logs go to stderr so stdout stays for the user
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::new_with_cli(&cli)?;
    info!("Using product backend at {}", settings.api.base_url);

    let service = HttpProductService::from_settings(&settings.api);
    let mut stdout = std::io::stdout().lock();
    let ok = cli.command.execute(&service, &settings, &mut stdout).await?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
