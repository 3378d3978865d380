use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::workflow::WORKFLOW_STEPS_KEY;

/// Name of the optional TOML configuration file
pub const CONFIG_FILE_NAME: &str = "supervisor-workflow.toml";
/// Name of the optional rc file, also TOML
pub const RC_FILE_NAME: &str = ".supervisor-workflow-rc";
/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "SUPERVISOR_WORKFLOW";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SupervisorWorkflowConfig {
    /// Where workflow progress is kept
    pub storage: StorageConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// JSON file backing the durable store
    pub state_file: String,
    /// Key the workflow steps are stored under
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON lines instead of human readable logs
    pub json_logs: bool,
}

impl Default for SupervisorWorkflowConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                state_file: ".supervisor-workflow/local-storage.json".to_string(),
                key: WORKFLOW_STEPS_KEY.to_string(),
            },
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                json_logs: false,
            },
        }
    }
}

impl SupervisorWorkflowConfig {
    /// Load configuration from the current directory.
    ///
    /// Precedence, lowest first:
    /// 1. Default values
    /// 2. Configuration files (supervisor-workflow.toml, .supervisor-workflow-rc)
    /// 3. Environment variables (SUPERVISOR_WORKFLOW_STORAGE__KEY and friends)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration using the files found in `dir`
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Config::builder().add_source(
            Config::try_from(&Self::default()).context("Failed to build default configuration")?,
        );

        let config_file = dir.join(CONFIG_FILE_NAME);
        if config_file.exists() {
            builder = builder.add_source(File::from(config_file));
        }

        let rc_file = dir.join(RC_FILE_NAME);
        if rc_file.exists() {
            builder = builder.add_source(File::new(
                &rc_file.to_string_lossy(),
                FileFormat::Toml,
            ));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().context("Failed to load configuration")?;
        let loaded: SupervisorWorkflowConfig = config
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(loaded)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }

    pub fn state_file(&self) -> PathBuf {
        PathBuf::from(&self.storage.state_file)
    }
}
