//! Configuration loading for the test harness.
//!
//! Configuration is a flat properties file (at least a `HOST` key) read once
//! per process. The file is named by the `REST_HARNESS_CONFIG` environment
//! variable, or found by searching for `config.properties` from a start
//! directory upwards.
//!
//! # Example
//!
//! ```no_run
//! use rest_harness::config::get_config;
//!
//! let config = get_config().unwrap();
//! println!("Testing against {}", config.host().unwrap());
//! ```

pub mod properties;

pub use properties::Properties;

use once_cell::sync::OnceCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Key holding the base URL of the service under test.
pub const HOST_KEY: &str = "HOST";

/// File name searched for when no explicit path is configured.
pub const CONFIG_FILE_NAME: &str = "config.properties";

/// Environment variable naming the configuration file directly.
pub const CONFIG_PATH_ENV: &str = "REST_HARNESS_CONFIG";

/// Maximum number of parent directories to search.
const MAX_PARENT_SEARCH_DEPTH: usize = 3;

/// Process-wide configuration, written at most once.
static CONFIG: OnceCell<Properties> = OnceCell::new();

/// Errors that can occur while loading or reading configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No configuration file in the start directory or its parents.
    FileNotFound,

    /// IO error occurred while reading the file.
    IoError(String),

    /// Malformed line in the properties text.
    ParseError { line: usize, message: String },

    /// A required key is absent.
    MissingKey(String),

    /// A key is present but its value cannot be used.
    InvalidValue { key: String, value: String },

    /// The process-wide configuration was already installed.
    AlreadyInitialized,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileNotFound => write!(
                f,
                "Configuration file not found ({} or ${})",
                CONFIG_FILE_NAME, CONFIG_PATH_ENV
            ),
            ConfigError::IoError(msg) => write!(f, "IO error: {}", msg),
            ConfigError::ParseError { line, message } => {
                write!(f, "Failed to parse configuration at line {}: {}", line, message)
            }
            ConfigError::MissingKey(key) => write!(f, "Missing configuration key: {}", key),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: '{}'", key, value)
            }
            ConfigError::AlreadyInitialized => write!(f, "Configuration already initialized"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err.to_string())
    }
}

/// Reads and parses a properties file.
pub fn load_properties(path: &Path) -> Result<Properties, ConfigError> {
    let content = fs::read_to_string(path)?;
    let properties = Properties::parse(&content)?;
    log::debug!(
        "loaded {} configuration entries from {}",
        properties.len(),
        path.display()
    );
    Ok(properties)
}

/// Finds `config.properties` in `start_dir` or up to 3 parent directories.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current_path = start_dir.to_path_buf();

    for _ in 0..=MAX_PARENT_SEARCH_DEPTH {
        let candidate = current_path.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_path.parent() {
            Some(parent) => current_path = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Locates and loads the configuration.
///
/// `REST_HARNESS_CONFIG`, when set, names the file and skips the search.
pub fn load_config(start_dir: &Path) -> Result<Properties, ConfigError> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
        log::info!("loading configuration from ${}: {}", CONFIG_PATH_ENV, explicit);
        return load_properties(Path::new(&explicit));
    }

    let path = find_config_file(start_dir).ok_or(ConfigError::FileNotFound)?;
    log::info!("loading configuration from {}", path.display());
    load_properties(&path)
}

/// Installs the process-wide configuration.
///
/// Fails with [`ConfigError::AlreadyInitialized`] if it was already set,
/// either by an earlier call or by a [`get_config`] that loaded it.
pub fn init_config(properties: Properties) -> Result<&'static Properties, ConfigError> {
    CONFIG
        .set(properties)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    CONFIG.get().ok_or(ConfigError::AlreadyInitialized)
}

/// Returns the process-wide configuration, loading it from the current
/// directory on first access.
pub fn get_config() -> Result<&'static Properties, ConfigError> {
    CONFIG.get_or_try_init(|| {
        let cwd = std::env::current_dir()?;
        load_config(&cwd)
    })
}
