use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use infrastructure::ServerConfig;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use report_server::{api, install_dir, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override listening port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,

    /// Override data directory (database and index.html)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,report_server=debug,infrastructure=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    info!("🗂️ Inspection Report Server Starting...");

    // 1. Load Configuration
    let mut config = ServerConfig::load(&args.config_dir)?;

    // Override with CLI args if present
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(dir) = args.data_dir {
        config.data_dir = Some(dir);
    }

    let data_dir = match config.data_dir.clone() {
        Some(dir) => dir,
        None => install_dir()?,
    };
    info!("📂 Data directory: {}", data_dir.display());
    std::fs::create_dir_all(&data_dir)?;

    // 2. Initialize Storage
    let state = setup_app_state(&config, &data_dir).await?;

    // 3. Start API Server
    let app = api::create_router(state);
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Server running at http://localhost:{}/", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("🛑 Shutdown requested");
}
