//! # Configuration
//!
//! Where the catalog and the session cache live, and which pricing basis a
//! fresh session starts with.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--catalog`, `--session`)
//! 2. Environment variables (`CUTLIST_CATALOG`, `CUTLIST_SESSION`, `CUTLIST_BASIS`)
//! 3. Defaults (this file): files under the platform data directory
//!
//! Flags and the two path variables are merged by clap before they reach
//! [`CliConfig::load`]; `CUTLIST_BASIS` is read here.

use std::path::{Path, PathBuf};

use cutlist_core::PricingBasis;
use directories::ProjectDirs;
use tracing::debug;

use crate::error::{CliError, CliResult};

const CATALOG_FILE: &str = "materials.json";
const SESSION_FILE: &str = "session.json";

/// Resolved configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Material catalog (JSON array).
    pub catalog_path: PathBuf,

    /// Session cache (basis + cutlist snapshot).
    pub session_path: PathBuf,

    /// Basis for a session that has no cache file yet.
    /// Default: counter rate (75%)
    pub default_basis: PricingBasis,
}

impl CliConfig {
    /// Builds the configuration with every file under `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        CliConfig {
            catalog_path: data_dir.join(CATALOG_FILE),
            session_path: data_dir.join(SESSION_FILE),
            default_basis: PricingBasis::default(),
        }
    }

    /// Resolves defaults, the environment and explicit paths.
    pub fn load(catalog: Option<PathBuf>, session: Option<PathBuf>) -> CliResult<Self> {
        let mut config = match (&catalog, &session) {
            // Both given: no need for a home directory at all.
            (Some(_), Some(_)) => CliConfig::in_dir(Path::new(".")),
            _ => CliConfig::in_dir(&default_data_dir()?),
        };

        config.apply_basis(std::env::var("CUTLIST_BASIS").ok().as_deref())?;

        if let Some(path) = catalog {
            config.catalog_path = path;
        }
        if let Some(path) = session {
            config.session_path = path;
        }

        debug!(
            catalog = %config.catalog_path.display(),
            session = %config.session_path.display(),
            basis = %config.default_basis,
            "configuration resolved"
        );
        Ok(config)
    }

    /// Applies a `CUTLIST_BASIS` value (preset name or percentage).
    pub fn apply_basis(&mut self, value: Option<&str>) -> CliResult<()> {
        if let Some(value) = value {
            self.default_basis = value
                .parse()
                .map_err(|e| CliError::Config(format!("CUTLIST_BASIS: {e}")))?;
        }
        Ok(())
    }
}

/// Platform data directory.
///
/// - **Linux**: `~/.local/share/cutlist`
/// - **macOS**: `~/Library/Application Support/cutlist`
/// - **Windows**: `%APPDATA%\cutlist\data`
fn default_data_dir() -> CliResult<PathBuf> {
    ProjectDirs::from("", "", "cutlist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CliError::Config("cannot determine a home directory".to_string()))
}
