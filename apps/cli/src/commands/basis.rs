//! # Basis Command
//!
//! Switches the session's pricing basis and re-prices the whole cutlist.

use cutlist_core::PricingBasis;
use tracing::info;

use super::LedgerResponse;
use crate::error::CliResult;
use crate::session::Session;

/// Re-prices every entry, then records the new basis.
///
/// If any entry cannot be priced the session keeps its old basis and prices.
pub fn change(session: &mut Session, basis: PricingBasis) -> CliResult<LedgerResponse> {
    let before = session.entries.total();
    session.entries.change_basis(basis)?;
    let previous = std::mem::replace(&mut session.basis, basis);

    info!(
        from = %previous,
        to = %basis,
        total_before = %before,
        total_after = %session.entries.total(),
        "pricing basis changed"
    );
    Ok(LedgerResponse::from(&*session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::{BasisPreset, Material, Piece};

    #[test]
    fn test_change_updates_basis_and_prices() {
        let board = Material {
            id: "mdf-18".to_string(),
            name: "MDF 18mm".to_string(),
            width: 2750.0,
            height: 1850.0,
            price: 100.0,
        };
        let mut session = Session::new(PricingBasis::default());
        session
            .entries
            .add(&board, Piece::new(2, 600, 400).with_borders(1, 0), session.basis)
            .unwrap();

        let response = change(&mut session, BasisPreset::NoMarkup.into()).unwrap();
        assert_eq!(response.basis, 1.0);
        assert_eq!(response.summary.total.units(), 14);
        assert_eq!(session.basis.preset(), Some(BasisPreset::NoMarkup));
    }

    #[test]
    fn test_new_entries_use_changed_basis() {
        let mut session = Session::new(PricingBasis::default());
        change(&mut session, BasisPreset::CabinetmakerRate.into()).unwrap();
        assert_eq!(session.basis.percent(), 50.0);
        assert!(session.entries.is_empty());
    }
}
