//! Configuration loading and root folder resolution
//!
//! Root folder priority order:
//! 1. Command-line argument (handled by the caller, passed to [`RootFolderResolver::with_cli_arg`])
//! 2. `WORKWISE_ROOT_FOLDER`, then `WORKWISE_ROOT` environment variables
//! 3. `root_folder` in the module's TOML config file
//! 4. OS-dependent compiled default
//!
//! A missing or unreadable TOML file is never fatal: it is logged and the
//! next tier is used.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable names checked in order
pub const ROOT_FOLDER_ENV_VARS: [&str; 2] = ["WORKWISE_ROOT_FOLDER", "WORKWISE_ROOT"];

/// Database file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "workwise.db";

/// Defaults compiled into the binary
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
        }
    }
}

fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/workwise
        dirs::data_local_dir()
            .map(|d| d.join("workwise"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/workwise"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("workwise"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/workwise"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("workwise"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\workwise"))
    } else {
        PathBuf::from("./workwise_data")
    }
}

/// Logging section of the TOML config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Contents of `<config_dir>/workwise/<module>.toml`
///
/// Every field is optional so that partial files still parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid TOML in {}: {}", path.display(), e)))
}

/// Resolves the root folder (and exposes the TOML config) for one module
#[derive(Debug, Clone)]
pub struct RootFolderResolver {
    module_name: String,
    cli_arg: Option<PathBuf>,
    config_path: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_arg: None,
            config_path: None,
        }
    }

    /// Highest-priority override from the command line
    pub fn with_cli_arg(mut self, path: Option<PathBuf>) -> Self {
        self.cli_arg = path;
        self
    }

    /// Use an explicit TOML file instead of the platform location
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Platform location of this module's TOML file
    pub fn config_file_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config_path {
            return Some(path.clone());
        }
        dirs::config_dir().map(|d| {
            d.join("workwise")
                .join(format!("{}.toml", self.module_name))
        })
    }

    /// Load the TOML config, if present and valid
    pub fn load_config(&self) -> Option<TomlConfig> {
        let path = self.config_file_path()?;
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return None;
        }
        match load_toml_config(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_arg {
            return path.clone();
        }

        for var in ROOT_FOLDER_ENV_VARS {
            if let Ok(path) = std::env::var(var) {
                if !path.is_empty() {
                    return PathBuf::from(path);
                }
            }
        }

        if let Some(path) = self.load_config().and_then(|c| c.root_folder) {
            return path;
        }

        CompiledDefaults::for_current_platform().root_folder
    }
}

/// Creates the root folder and locates the database inside it
#[derive(Debug, Clone)]
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    pub fn root_folder(&self) -> &Path {
        &self.root_folder
    }

    /// Create the folder (and parents); idempotent
    pub fn ensure_directory_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE_NAME)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}
