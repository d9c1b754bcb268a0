//! # Report Commands
//!
//! Read-only views of the cutlist (`list`, `tags`, `export`) and `import`,
//! which replaces the cutlist with a shared snapshot.

use std::path::Path;

use cutlist_core::{CutPiece, TagLabel};
use tracing::{info, warn};

use super::{load_snapshot, LedgerResponse};
use crate::error::CliResult;
use crate::session::Session;

pub fn list(session: &Session) -> LedgerResponse {
    LedgerResponse::from(session)
}

/// One label per physical piece, largest first.
pub fn tags(session: &Session) -> Vec<TagLabel> {
    let labels = session.entries.tags().into_labels();
    info!(labels = labels.len(), "tag batch built");
    labels
}

pub fn export(session: &Session) -> Vec<CutPiece> {
    session.entries.snapshot()
}

/// Replaces the current cutlist with the snapshot in `file`.
///
/// Entries keep the ids and prices they were shared with; the session basis
/// is left alone.
pub fn import(session: &mut Session, file: &Path) -> CliResult<LedgerResponse> {
    let shared = load_snapshot(file)?;
    if !session.entries.is_empty() {
        warn!(discarded = session.entries.len(), "replacing current cutlist");
    }
    session.entries.replace_with(shared.snapshot())?;
    info!(file = %file.display(), entries = session.entries.len(), "snapshot imported");
    Ok(LedgerResponse::from(&*session))
}
