//! # Domain Types
//!
//! Core domain types used throughout the cutlist engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Material     │   │     Piece       │   │    CutPiece     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id, name       │   │  quantity       │   │  id (UUID)      │       │
//! │  │  width, height  │   │  side_a/side_b  │   │  material (snap)│       │
//! │  │  price (sheet)  │   │  border_a/b     │   │  piece          │       │
//! │  └─────────────────┘   └─────────────────┘   │  unit_price     │       │
//! │                                              │  line_total     │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   └─────────────────┘       │
//! │  │  PricingBasis   │   │   EntryInput    │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  percent (f64)  │   │  material_id    │                              │
//! │  │  75 = default   │   │  piece          │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CutPiece` embeds a full copy of its `Material`. Price and sheet size
//! are frozen when the entry is added; catalog changes afterwards never
//! reach entries already in a ledger.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::DEFAULT_BASIS_PERCENT;

// =============================================================================
// Material
// =============================================================================

/// A sheet material offered by the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// Catalog identifier.
    pub id: String,

    /// Display name, printed on every tag.
    pub name: String,

    /// Sheet width in millimetres.
    pub width: f64,

    /// Sheet height in millimetres.
    pub height: f64,

    /// Price of one full sheet.
    pub price: f64,
}

impl Material {
    /// Returns the sheet area (width × height).
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

// =============================================================================
// Piece
// =============================================================================

/// Geometry and quantity of one cut request.
///
/// `border_a` counts the banded edges along `side_a` (0, 1 or 2),
/// `border_b` the ones along `side_b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Piece {
    pub quantity: u32,
    pub side_a: u32,
    pub side_b: u32,
    pub border_a: u8,
    pub border_b: u8,
}

impl Piece {
    /// Creates an unbanded piece.
    pub fn new(quantity: u32, side_a: u32, side_b: u32) -> Self {
        Piece {
            quantity,
            side_a,
            side_b,
            border_a: 0,
            border_b: 0,
        }
    }

    /// Sets the banded edge counts.
    pub fn with_borders(mut self, border_a: u8, border_b: u8) -> Self {
        self.border_a = border_a;
        self.border_b = border_b;
        self
    }

    /// Total banding length of one piece, in millimetres.
    #[inline]
    pub fn edge_length_mm(&self) -> f64 {
        self.side_a as f64 * self.border_a as f64 + self.side_b as f64 * self.border_b as f64
    }
}

// =============================================================================
// Cut Piece (ledger entry)
// =============================================================================

/// A priced line of a cutlist.
///
/// Only `unit_price` and `line_total` ever change after creation, and only
/// through a pricing basis change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CutPiece {
    /// Opaque id, unique within a ledger.
    pub id: String,

    /// Material at time of adding (frozen).
    pub material: Material,

    #[serde(flatten)]
    pub piece: Piece,

    /// Price of one piece.
    pub unit_price: Money,

    /// `quantity × unit_price`.
    pub line_total: Money,
}

impl CutPiece {
    /// Rebuilds the add-form values this entry was created from.
    pub fn to_input(&self) -> EntryInput {
        EntryInput {
            material_id: self.material.id.clone(),
            piece: self.piece,
        }
    }
}

// =============================================================================
// Entry Input
// =============================================================================

/// Raw add-form payload: a material reference plus piece fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EntryInput {
    pub material_id: String,

    #[serde(flatten)]
    pub piece: Piece,
}

// =============================================================================
// Pricing Basis
// =============================================================================

/// Named markup presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum BasisPreset {
    /// Walk-in customers: 75%.
    CounterRate,
    /// Trade customers: 50%.
    CabinetmakerRate,
    /// Internal orders: 1%.
    NoMarkup,
}

impl BasisPreset {
    pub const ALL: [BasisPreset; 3] = [
        BasisPreset::CounterRate,
        BasisPreset::CabinetmakerRate,
        BasisPreset::NoMarkup,
    ];

    /// Markup percentage of the preset.
    pub const fn percent(&self) -> f64 {
        match self {
            BasisPreset::CounterRate => 75.0,
            BasisPreset::CabinetmakerRate => 50.0,
            BasisPreset::NoMarkup => 1.0,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BasisPreset::CounterRate => "counter-rate",
            BasisPreset::CabinetmakerRate => "cabinetmaker-rate",
            BasisPreset::NoMarkup => "no-markup",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "counter" | "counter-rate" => Some(BasisPreset::CounterRate),
            "cabinetmaker" | "cabinetmaker-rate" => Some(BasisPreset::CabinetmakerRate),
            "none" | "no-markup" => Some(BasisPreset::NoMarkup),
            _ => None,
        }
    }
}

/// Markup percentage applied over raw material cost.
///
/// Any positive finite number is accepted; the presets are just names for
/// common values.
///
/// ## Example
/// ```rust
/// use cutlist_core::{BasisPreset, PricingBasis};
///
/// assert_eq!(PricingBasis::default().percent(), 75.0);
/// assert_eq!("cabinetmaker".parse::<PricingBasis>().unwrap().percent(), 50.0);
/// assert_eq!("12.5".parse::<PricingBasis>().unwrap().percent(), 12.5);
/// assert!("-3".parse::<PricingBasis>().is_err());
/// assert_eq!(PricingBasis::from(BasisPreset::NoMarkup).preset(), Some(BasisPreset::NoMarkup));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct PricingBasis(f64);

impl PricingBasis {
    /// Creates a basis from a percentage.
    pub fn new(percent: f64) -> Result<Self, CoreError> {
        if !percent.is_finite() || percent <= 0.0 {
            return Err(CoreError::InvalidBasis(percent.to_string()));
        }
        Ok(PricingBasis(percent))
    }

    /// Returns the markup percentage.
    #[inline]
    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// Multiplier applied over material cost (`1 + percent / 100`).
    #[inline]
    pub fn factor(&self) -> f64 {
        1.0 + self.0 / 100.0
    }

    /// Returns the preset with exactly this percentage, if any.
    pub fn preset(&self) -> Option<BasisPreset> {
        BasisPreset::ALL.into_iter().find(|p| p.percent() == self.0)
    }
}

impl Default for PricingBasis {
    fn default() -> Self {
        PricingBasis(DEFAULT_BASIS_PERCENT)
    }
}

impl From<BasisPreset> for PricingBasis {
    fn from(preset: BasisPreset) -> Self {
        PricingBasis(preset.percent())
    }
}

impl TryFrom<f64> for PricingBasis {
    type Error = CoreError;

    fn try_from(percent: f64) -> Result<Self, Self::Error> {
        PricingBasis::new(percent)
    }
}

impl From<PricingBasis> for f64 {
    fn from(basis: PricingBasis) -> Self {
        basis.0
    }
}

impl FromStr for PricingBasis {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(preset) = BasisPreset::from_name(&s.to_ascii_lowercase()) {
            return Ok(preset.into());
        }
        let percent = s
            .trim_end_matches('%')
            .parse::<f64>()
            .map_err(|_| CoreError::InvalidBasis(s.to_string()))?;
        PricingBasis::new(percent)
    }
}

impl fmt::Display for PricingBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.preset() {
            Some(preset) => write!(f, "{}% ({})", self.0, preset.name()),
            None => write!(f, "{}%", self.0),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn oak() -> Material {
        Material {
            id: "oak-18".to_string(),
            name: "Oak veneer 18mm".to_string(),
            width: 2750.0,
            height: 1850.0,
            price: 100.0,
        }
    }

    #[test]
    fn test_basis_default_is_counter_rate() {
        let basis = PricingBasis::default();
        assert_eq!(basis.percent(), 75.0);
        assert_eq!(basis.preset(), Some(BasisPreset::CounterRate));
    }

    #[test]
    fn test_basis_rejects_non_positive() {
        assert!(PricingBasis::new(0.0).is_err());
        assert!(PricingBasis::new(-10.0).is_err());
        assert!(PricingBasis::new(f64::NAN).is_err());
        assert!(PricingBasis::new(33.3).is_ok());
    }

    #[test]
    fn test_basis_parses_presets_and_numbers() {
        assert_eq!("counter".parse::<PricingBasis>().unwrap().percent(), 75.0);
        assert_eq!("NO-MARKUP".parse::<PricingBasis>().unwrap().percent(), 1.0);
        assert_eq!("40%".parse::<PricingBasis>().unwrap().percent(), 40.0);
        assert!("cheap".parse::<PricingBasis>().is_err());
    }

    #[test]
    fn test_basis_deserialization_is_validated() {
        let basis: PricingBasis = serde_json::from_str("50").unwrap();
        assert_eq!(basis.preset(), Some(BasisPreset::CabinetmakerRate));
        assert!(serde_json::from_str::<PricingBasis>("0").is_err());
    }

    #[test]
    fn test_edge_length() {
        let piece = Piece::new(1, 600, 400).with_borders(1, 2);
        assert_eq!(piece.edge_length_mm(), 1400.0);
    }

    #[test]
    fn test_cut_piece_uses_camel_case_flat_fields() {
        let entry = CutPiece {
            id: "e1".to_string(),
            material: oak(),
            piece: Piece::new(2, 600, 400).with_borders(1, 0),
            unit_price: Money::from_units(11),
            line_total: Money::from_units(22),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["sideA"], 600);
        assert_eq!(value["borderA"], 1);
        assert_eq!(value["unitPrice"], 11);
        assert_eq!(value["lineTotal"], 22);
        assert_eq!(value["material"]["name"], "Oak veneer 18mm");
    }

    #[test]
    fn test_to_input_keeps_material_reference() {
        let entry = CutPiece {
            id: "e1".to_string(),
            material: oak(),
            piece: Piece::new(3, 700, 300),
            unit_price: Money::from_units(7),
            line_total: Money::from_units(21),
        };
        let input = entry.to_input();
        assert_eq!(input.material_id, "oak-18");
        assert_eq!(input.piece, entry.piece);
    }
}
