//! # Cutlist Ledger
//!
//! The ordered set of priced entries composing one order or estimate.
//!
//! ## Ledger Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Caller Action            Ledger Method           Entry List Change     │
//! │  ─────────────            ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Submit add-form ────────► add() ───────────────► push(new entry)      │
//! │                                                                         │
//! │  Click Remove ───────────► remove(id) ──────────► entries.remove(i)    │
//! │                                                                         │
//! │  Click Edit ─────────────► start_edit(id) ──────► entries.remove(i)    │
//! │     (form prefilled, re-submitted later through add() → appended)      │
//! │                                                                         │
//! │  Switch markup ──────────► change_basis(b) ─────► re-price in place    │
//! │                                                                         │
//! │  Open shared estimate ───► replace_with(snap) ──► whole list replaced  │
//! │                                                                         │
//! │  Print tags ─────────────► tags() ──────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Entry ids are unique
//! - `line_total == quantity × unit_price` for every entry
//! - A failed operation leaves the entry list untouched
//!
//! ## Ownership
//! One ledger per editing session, owned by that session. There is no
//! global ledger; sharing an estimate means handing over a snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::catalog::MaterialCatalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{quote, Quote};
use crate::tag::TagBatch;
use crate::types::{CutPiece, EntryInput, Material, Piece, PricingBasis};

/// Ordered list of priced cut entries.
///
/// Serializes as the bare entry array (the snapshot format).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutlistLedger {
    #[serde(deserialize_with = "deserialize_unique")]
    entries: Vec<CutPiece>,
}

impl CutlistLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        CutlistLedger::default()
    }

    // -------------------------------------------------------------------------
    // Snapshots
    // -------------------------------------------------------------------------

    /// Rebuilds a ledger from a snapshot, reusing ids verbatim.
    ///
    /// Prices are taken as stored, not recomputed.
    ///
    /// ## Errors
    /// - `DuplicateEntry` if two entries share an id
    /// - `InconsistentEntry` if an entry has zero quantity, a negative unit
    ///   price, or `line_total != quantity × unit_price`
    pub fn from_snapshot(entries: Vec<CutPiece>) -> CoreResult<Self> {
        validate_snapshot(&entries)?;
        Ok(CutlistLedger { entries })
    }

    /// Returns the entries by value, in order.
    pub fn snapshot(&self) -> Vec<CutPiece> {
        self.entries.clone()
    }

    /// Replaces the whole contents with a snapshot. Nothing is merged.
    pub fn replace_with(&mut self, entries: Vec<CutPiece>) -> CoreResult<()> {
        validate_snapshot(&entries)?;
        self.entries = entries;
        Ok(())
    }

    /// Serializes the snapshot as a JSON array.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Parses a JSON array snapshot.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<CutPiece> = serde_json::from_str(json)?;
        CutlistLedger::from_snapshot(entries)
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Prices `piece` against a material snapshot and appends it.
    ///
    /// ## Behavior
    /// - The material is copied into the entry (frozen)
    /// - The entry gets a fresh UUID
    /// - The entry goes to the end of the list
    ///
    /// ## Errors
    /// `InvalidMaterial` if the sheet area is not positive. The ledger is
    /// unchanged in that case.
    pub fn add(
        &mut self,
        material: &Material,
        piece: Piece,
        basis: PricingBasis,
    ) -> CoreResult<&[CutPiece]> {
        let Quote {
            unit_price,
            line_total,
        } = quote(material, &piece, basis)?;

        self.entries.push(CutPiece {
            id: Uuid::new_v4().to_string(),
            material: material.clone(),
            piece,
            unit_price,
            line_total,
        });
        Ok(&self.entries)
    }

    /// Resolves `input.material_id` through `catalog`, then [`add`](Self::add)s.
    pub fn add_from_catalog<C>(
        &mut self,
        catalog: &C,
        input: &EntryInput,
        basis: PricingBasis,
    ) -> CoreResult<&[CutPiece]>
    where
        C: MaterialCatalog + ?Sized,
    {
        let material = catalog.resolve(&input.material_id)?;
        self.add(&material, input.piece, basis)
    }

    /// Removes an entry, keeping the order of the others.
    pub fn remove(&mut self, id: &str) -> CoreResult<CutPiece> {
        let index = self.index_of(id)?;
        Ok(self.entries.remove(index))
    }

    /// Takes an entry out for editing and returns its form values.
    ///
    /// The entry leaves the ledger now. Re-submitting the form through
    /// [`add`](Self::add) appends the edited version at the END, not at its
    /// old position.
    pub fn start_edit(&mut self, id: &str) -> CoreResult<EntryInput> {
        let entry = self.remove(id)?;
        Ok(entry.to_input())
    }

    /// Re-prices every entry under a new basis.
    ///
    /// Ids, order and every other field stay as they are. All prices are
    /// computed before any entry is touched, so a failure changes nothing.
    pub fn change_basis(&mut self, basis: PricingBasis) -> CoreResult<()> {
        let quotes = self
            .entries
            .iter()
            .map(|e| quote(&e.material, &e.piece, basis))
            .collect::<CoreResult<Vec<Quote>>>()?;

        for (entry, q) in self.entries.iter_mut().zip(quotes) {
            entry.unit_price = q.unit_price;
            entry.line_total = q.line_total;
        }
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn entries(&self) -> &[CutPiece] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CutPiece> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Returns the number of entries (lines, not pieces).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Grand total of the order or estimate.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.line_total).sum()
    }

    /// Number of physical pieces (sum of quantities).
    pub fn piece_count(&self) -> u64 {
        self.entries.iter().map(|e| e.piece.quantity as u64).sum()
    }

    /// Total edge-banding length over all pieces, in metres.
    pub fn banding_meters(&self) -> f64 {
        self.entries
            .iter()
            .map(|e| e.piece.edge_length_mm() * e.piece.quantity as f64)
            .sum::<f64>()
            / 1000.0
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from(self)
    }

    /// Builds the print batch: one tag per piece, largest first.
    pub fn tags(&self) -> TagBatch {
        TagBatch::build(&self.entries)
    }

    fn index_of(&self, id: &str) -> CoreResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::EntryNotFound(id.to_string()))
    }
}

/// Ledger totals for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub entry_count: usize,
    #[ts(type = "number")]
    pub piece_count: u64,
    pub banding_meters: f64,
    pub total: Money,
}

impl From<&CutlistLedger> for LedgerSummary {
    fn from(ledger: &CutlistLedger) -> Self {
        LedgerSummary {
            entry_count: ledger.len(),
            piece_count: ledger.piece_count(),
            banding_meters: ledger.banding_meters(),
            total: ledger.total(),
        }
    }
}

/// Checks the invariants a snapshot from outside must already hold.
fn validate_snapshot(entries: &[CutPiece]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id.as_str()) {
            return Err(CoreError::DuplicateEntry(entry.id.clone()));
        }
        let consistent = entry.piece.quantity > 0
            && entry.unit_price >= Money::zero()
            && entry.unit_price.checked_multiply_quantity(entry.piece.quantity)
                == Some(entry.line_total);
        if !consistent {
            return Err(CoreError::InconsistentEntry(entry.id.clone()));
        }
    }
    Ok(())
}

fn deserialize_unique<'de, D>(deserializer: D) -> Result<Vec<CutPiece>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Vec::<CutPiece>::deserialize(deserializer)?;
    validate_snapshot(&entries).map_err(<D::Error as serde::de::Error>::custom)?;
    Ok(entries)
}

// =============================================================================
// Unit Tests
// =============================================================================
