//! # Commands
//!
//! One module per group of subcommands. Every handler works on an owned
//! [`Session`] and returns a serializable response; [`execute`] takes care
//! of loading, saving and printing.
//!
//! ```text
//! commands/
//! ├── mod.rs     ◄─── dispatch, catalog loading, LedgerResponse
//! ├── entry.rs   ◄─── add, remove, edit, clear
//! ├── basis.rs   ◄─── basis
//! └── report.rs  ◄─── list, tags, export, import
//! ```

pub mod basis;
pub mod entry;
pub mod report;

use std::fs;
use std::io::Write;
use std::path::Path;

use cutlist_core::{CutPiece, CutlistLedger, InMemoryCatalog, LedgerSummary};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::args::Commands;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::session::Session;

/// Cutlist response including entries and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerResponse {
    pub basis: f64,
    pub entries: Vec<CutPiece>,
    pub summary: LedgerSummary,
}

impl From<&Session> for LedgerResponse {
    fn from(session: &Session) -> Self {
        LedgerResponse {
            basis: session.basis.percent(),
            entries: session.entries.snapshot(),
            summary: session.entries.summary(),
        }
    }
}

/// Runs one subcommand and writes its JSON result to `out`.
pub fn execute(command: Commands, config: &CliConfig, out: &mut impl Write) -> CliResult<()> {
    let mut session = Session::load(&config.session_path, config.default_basis)?;

    let (response, dirty) = match command {
        Commands::Add(args) => {
            let catalog = load_catalog(&config.catalog_path)?;
            (to_value(entry::add(&mut session, &catalog, &args)?)?, true)
        }
        Commands::Remove { id } => (to_value(entry::remove(&mut session, &id)?)?, true),
        Commands::Edit { id } => (to_value(entry::edit(&mut session, &id)?)?, true),
        Commands::Clear => (to_value(entry::clear(&mut session))?, true),
        Commands::Basis { value } => (to_value(basis::change(&mut session, value)?)?, true),
        Commands::List => (to_value(report::list(&session))?, false),
        Commands::Tags => (to_value(report::tags(&session))?, false),
        Commands::Export => (to_value(report::export(&session))?, false),
        Commands::Import { file } => (to_value(report::import(&mut session, &file)?)?, true),
    };

    if dirty {
        session.save(&config.session_path)?;
    }

    serde_json::to_writer_pretty(&mut *out, &response)?;
    writeln!(out).map_err(|e| CliError::io("<stdout>", e))?;
    Ok(())
}

/// Reads the material catalog (JSON array).
pub fn load_catalog(path: &Path) -> CliResult<InMemoryCatalog> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let catalog: InMemoryCatalog =
        serde_json::from_str(&raw).map_err(|e| CliError::json(path, e))?;
    debug!(path = %path.display(), materials = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Reads a shared snapshot file (JSON array of entries).
pub fn load_snapshot(path: &Path) -> CliResult<CutlistLedger> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    Ok(CutlistLedger::from_json(&raw)?)
}

fn to_value<T: Serialize>(value: T) -> CliResult<serde_json::Value> {
    Ok(serde_json::to_value(value)?)
}
