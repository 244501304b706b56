//! CLI entrypoint for quizgen
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use quizgen_application::{GatewayError, ImageSearchPort, RunPipelineUseCase};
use quizgen_infrastructure::{ConfigLoader, FileConfig, GeminiGateway, PexelsImageSearch};
use quizgen_presentation::{
    AppState, Cli, Command, ConsoleFormatter, GenerateArgs, ServeArgs, router,
};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .map_err(|e| anyhow!("failed to load configuration: {}", e))?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        println!();
        println!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    config.validate().context("invalid configuration")?;

    match cli.effective_command() {
        Command::Serve(args) => serve(&config, args).await,
        Command::Generate(args) => generate(&config, args).await,
    }
}

/// Install the tracing subscriber.
///
/// `-v` count picks the level unless `RUST_LOG` is set. Logs go to stderr
/// (stdout carries `generate` output) and optionally to `log_file`.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .with_context(|| format!("--log-file {} has no file name", path.display()))?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

// === Dependency Injection ===

fn image_search(config: &FileConfig) -> Result<Arc<dyn ImageSearchPort>> {
    let search = PexelsImageSearch::from_config(&config.images)
        .context("failed to create image search client")?;
    if !search.has_credentials() {
        warn!(
            "{} is not set; questions will be returned without images",
            config.images.api_key_env
        );
    }
    Ok(Arc::new(search))
}

fn pipeline(config: &FileConfig, gateway: GeminiGateway) -> Result<RunPipelineUseCase> {
    info!("Generation model: {}", gateway.model());
    Ok(
        RunPipelineUseCase::new(Arc::new(gateway), image_search(config)?)
            .with_retry_policy(config.retry.to_retry_policy()),
    )
}

/// Router state; missing generation credentials leave the server up but
/// refusing quiz requests.
fn app_state(config: &FileConfig) -> Result<AppState> {
    match GeminiGateway::from_config(&config.generation) {
        Ok(gateway) => Ok(AppState::ready(pipeline(config, gateway)?)),
        Err(GatewayError::MissingCredentials(reason)) => {
            error!("Quiz generation disabled: {}", reason);
            Ok(AppState::unconfigured(reason))
        }
        Err(e) => Err(e).context("failed to create generation client"),
    }
}

// === Commands ===

async fn serve(config: &FileConfig, args: ServeArgs) -> Result<()> {
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());
    let state = app_state(config)?;

    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!("Listening on http://{}", listener.local_addr()?);

    let shutdown = CancellationToken::new();
    let signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                signal.cancel();
            }
            Err(e) => warn!("Cannot listen for Ctrl-C: {}", e),
        }
    });

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn generate(config: &FileConfig, args: GenerateArgs) -> Result<()> {
    let gateway = match GeminiGateway::from_config(&config.generation) {
        Ok(gateway) => gateway,
        Err(GatewayError::MissingCredentials(reason)) => bail!("cannot generate: {}", reason),
        Err(e) => return Err(e).context("failed to create generation client"),
    };

    let batch = pipeline(config, gateway)?.execute(args.to_input()).await?;

    println!("{}", ConsoleFormatter::format(&batch, args.output)?);
    Ok(())
}
