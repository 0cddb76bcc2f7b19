use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use vocaledge::{
    create_router, AnalysisReport, AppState, Config, GeminiClient, Phase, SessionController,
};

#[derive(Parser)]
#[command(name = "vocaledge", about = "Sales-call intelligence: capture, analyze, coach")]
struct Cli {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/vocaledge")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve,

    /// Analyze one audio file and print the report
    Analyze {
        /// Audio file to analyze (WAV, MP3, M4A, OGG, WebM, FLAC)
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!("Analysis model: {}", cfg.gemini.model);

    let analyzer = Arc::new(GeminiClient::new(&cfg.gemini.base_url, &cfg.gemini.model));
    let controller = Arc::new(SessionController::new(analyzer));

    match cli.command {
        Command::Serve => serve(&cfg, controller).await,
        Command::Analyze { file } => analyze_file(controller, &file).await,
    }
}

async fn serve(cfg: &Config, controller: Arc<SessionController>) -> Result<()> {
    let router = create_router(AppState::new(controller));
    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);

    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// One-shot pipeline: select the file, wait for the analysis to settle,
/// print the rendered report.
async fn analyze_file(controller: Arc<SessionController>, file: &Path) -> Result<()> {
    controller.select_file(file).await?;
    controller.wait_for_analysis().await;

    let snapshot = controller.snapshot().await;
    match (snapshot.phase, snapshot.analysis, snapshot.error) {
        (Phase::Analyzed, Some(result), _) => {
            print!("{}", AnalysisReport::from_result(&result).to_text());
            Ok(())
        }
        (_, _, Some(error)) => anyhow::bail!(error),
        _ => anyhow::bail!("analysis produced no result"),
    }
}
