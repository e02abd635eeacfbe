pub mod api;
pub mod error;
pub mod state;

use domain::{DomainError, ReportRepository};
use infrastructure::{ServerConfig, SqliteReportRepository};
use state::AppState;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

/// Open and initialize the report store under `data_dir`, then build the handler state.
pub async fn setup_app_state(
    config: &ServerConfig,
    data_dir: &Path,
) -> Result<Arc<AppState>, DomainError> {
    let repository = SqliteReportRepository::new(config.database_path(data_dir));
    repository.init().await?;
    info!(path = %repository.path().display(), "✅ Report store initialized");

    Ok(Arc::new(AppState::new(
        Arc::new(repository),
        config.index_path(data_dir),
    )))
}

/// Directory holding the database and `index.html` when none is configured.
///
/// Release builds use the executable's directory. Debug builds use this
/// crate's directory so `cargo run` picks up the bundled page.
pub fn install_dir() -> std::io::Result<PathBuf> {
    if cfg!(debug_assertions) {
        return Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
    }

    let exe = std::env::current_exe()?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
