//! # Entry Commands
//!
//! `add`, `remove`, `edit` and `clear`.
//!
//! ## Edit Workflow
//! ```text
//! cutlist edit <id>          → prints {materialId, quantity, sideA, ...}
//!                              and takes the entry out of the cutlist
//! cutlist add --material ... → the corrected entry, appended at the end
//! ```

use cutlist_core::{EntryInput, MaterialCatalog, Piece};
use tracing::info;

use super::LedgerResponse;
use crate::args::AddArgs;
use crate::error::CliResult;
use crate::session::Session;

/// Prices a piece with the session basis and appends it.
pub fn add<C>(session: &mut Session, catalog: &C, args: &AddArgs) -> CliResult<LedgerResponse>
where
    C: MaterialCatalog + ?Sized,
{
    let input = EntryInput {
        material_id: args.material.clone(),
        piece: Piece::new(args.qty, args.side_a, args.side_b)
            .with_borders(args.border_a, args.border_b),
    };

    session
        .entries
        .add_from_catalog(catalog, &input, session.basis)?;

    if let Some(entry) = session.entries.entries().last() {
        info!(
            id = %entry.id,
            material = %entry.material.id,
            quantity = entry.piece.quantity,
            unit_price = %entry.unit_price,
            "entry added"
        );
    }
    Ok(LedgerResponse::from(&*session))
}

pub fn remove(session: &mut Session, id: &str) -> CliResult<LedgerResponse> {
    let removed = session.entries.remove(id)?;
    info!(id = %removed.id, line_total = %removed.line_total, "entry removed");
    Ok(LedgerResponse::from(&*session))
}

/// Takes an entry out and returns its form values.
pub fn edit(session: &mut Session, id: &str) -> CliResult<EntryInput> {
    let input = session.entries.start_edit(id)?;
    info!(id = %id, material = %input.material_id, "entry taken out for editing");
    Ok(input)
}

pub fn clear(session: &mut Session) -> LedgerResponse {
    let count = session.entries.len();
    session.entries.clear();
    info!(removed = count, "cutlist cleared");
    LedgerResponse::from(&*session)
}
