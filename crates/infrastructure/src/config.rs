use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the database and the front-end page.
    /// Resolved to the installation directory by the binary when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_database_file")]
    pub database_file: String,
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_database_file() -> String {
    "inspection.db".to_string()
}
fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_dir: None,
            database_file: default_database_file(),
            index_file: default_index_file(),
        }
    }
}

impl ServerConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run-mode overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. INSPECTION__DATABASE_FILE=reports.db)
            .add_source(Environment::with_prefix("INSPECTION").separator("__"))
            // Plain PORT wins over everything but the CLI
            .set_override_option("port", std::env::var("PORT").ok())?
            .build()?;

        s.try_deserialize()
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }

    pub fn index_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.index_file)
    }
}
