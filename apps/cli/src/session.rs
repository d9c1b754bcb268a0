//! # Session State
//!
//! The cutlist being edited, cached on disk between invocations.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Invocation                                       │
//! │                                                                         │
//! │  Session::load(path) ──► command mutates ledger ──► session.save(path) │
//! │        │                                                  │             │
//! │        └── no file yet: empty ledger, default basis       │             │
//! │                                                           ▼             │
//! │                     { basis, entries: [...], updatedAt } on disk        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache is the "local cache" snapshot; `entries` uses exactly the
//! ledger snapshot format, so a cache file can be shared as an estimate.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use cutlist_core::{CutlistLedger, PricingBasis};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// The session owned by this invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Basis new entries are priced with.
    pub basis: PricingBasis,

    /// The cutlist.
    pub entries: CutlistLedger,

    /// When the session was last written.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates an empty session.
    pub fn new(basis: PricingBasis) -> Self {
        Session {
            basis,
            entries: CutlistLedger::new(),
            updated_at: Utc::now(),
        }
    }

    /// Loads the cached session, or starts a new one if there is none.
    pub fn load(path: &Path, default_basis: PricingBasis) -> CliResult<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), basis = %default_basis, "starting new session");
                return Ok(Session::new(default_basis));
            }
            Err(e) => return Err(CliError::io(path, e)),
        };

        let session: Session = serde_json::from_str(&raw).map_err(|e| CliError::json(path, e))?;
        debug!(
            path = %path.display(),
            entries = session.entries.len(),
            basis = %session.basis,
            "session loaded"
        );
        Ok(session)
    }

    /// Writes the session, creating parent directories as needed.
    ///
    /// Written to a sibling temp file, then renamed over the target.
    pub fn save(&mut self, path: &Path) -> CliResult<()> {
        self.updated_at = Utc::now();
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CliError::io(parent, e))?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| CliError::io(&tmp, e))?;
        fs::rename(&tmp, path).map_err(|e| CliError::io(path, e))?;

        debug!(path = %path.display(), entries = self.entries.len(), "session saved");
        Ok(())
    }
}
