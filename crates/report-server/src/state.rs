use domain::ReportRepository;
use std::{path::PathBuf, sync::Arc};

/// Shared, immutable per-process state handed to every handler.
pub struct AppState {
    pub reports: Arc<dyn ReportRepository>,
    /// Front-end page served on `/` and `/index.html`
    pub index_file: PathBuf,
}

impl AppState {
    pub fn new(reports: Arc<dyn ReportRepository>, index_file: impl Into<PathBuf>) -> Self {
        Self {
            reports,
            index_file: index_file.into(),
        }
    }
}
