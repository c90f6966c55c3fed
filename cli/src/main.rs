//! CLI entrypoint for gemcat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use gemcat_domain::{Model, Severity};
use gemcat_infrastructure::{API_KEY_ENV, ConfigLoader, GeminiGateway, resolve_api_key};
use gemcat_presentation::{ChatApp, Cli, prompt_api_key};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Log to a file: stdout belongs to the alternate screen while the
    // TUI runs. The guard must live until exit so the writer flushes.
    let _log_guard = init_tracing(cli.verbose)?;

    info!("Starting gemcat");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    // Report config issues before the TUI takes over the screen
    for issue in config.validate() {
        let tag = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        eprintln!("config {}: [{}] {}", tag, issue.field, issue.message);
        warn!("config {}: [{}] {}", tag, issue.field, issue.message);
    }

    // Model: CLI flag wins over config file, then the default
    let (config_model, _) = config.api.parse_model();
    let model = match cli.model.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.parse::<Model>().unwrap(),
        _ => config_model.unwrap_or_default(),
    };

    let (params, _) = config.generation.to_params();

    // API key: environment first, interactive prompt as fallback
    let api_key = match resolve_api_key() {
        Some(key) => key,
        None => match prompt_api_key()? {
            Some(key) => key,
            None => bail!("No API key provided. Set {API_KEY_ENV} or enter one at the prompt."),
        },
    };

    // === Dependency Injection ===
    // Create the infrastructure adapter (Gemini gateway)
    let mut gateway = GeminiGateway::new(api_key)
        .with_model(model.clone())
        .with_params(params);
    if let Some(base_url) = &config.api.base_url {
        gateway = gateway.with_base_url(base_url);
    }

    info!("Model: {}", model);

    let mut app = ChatApp::new(Arc::new(gateway)).with_model_name(model.to_string());
    app.run().await?;

    Ok(())
}

/// Initialize file-based logging under the local data directory.
fn init_tracing(verbose: u8) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gemcat");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("could not create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::never(&log_dir, "gemcat.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(guard)
}
