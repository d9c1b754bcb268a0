//! # cutlist-core: Pricing and Labeling Engine
//!
//! Pure business logic for a custom wood-cutting shop: pricing cut pieces,
//! keeping the cutlist of an order or estimate, and producing the tags
//! printed for every physical piece.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cutlist Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Front end (CLI, web form, print renderer)             │   │
//! │  │   add-form values ──► ledger ──► totals / tags / snapshot       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cutlist-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │    tag    │  │  ledger   │  │  catalog  │  │   │
//! │  │   │  price()  │  │ select_tag│  │  add/edit │  │  lookup   │  │   │
//! │  │   │  quote()  │  │  TagBatch │  │  rebasis  │  │  trait    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Material, Piece, CutPiece, PricingBasis)
//! - [`money`] - Whole-unit money type
//! - [`pricing`] - The price formula
//! - [`tag`] - Piece orientation, avatar keys and tag batches
//! - [`ledger`] - The cutlist aggregate
//! - [`catalog`] - Material lookup
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cutlist_core::{CutlistLedger, Material, Piece, PricingBasis, BasisPreset};
//!
//! let board = Material {
//!     id: "mdf-18".to_string(),
//!     name: "MDF 18mm".to_string(),
//!     width: 2750.0,
//!     height: 1850.0,
//!     price: 100.0,
//! };
//!
//! let mut ledger = CutlistLedger::new();
//! ledger.add(&board, Piece::new(2, 600, 400).with_borders(1, 0), PricingBasis::default()).unwrap();
//! assert_eq!(ledger.total().units(), 22);
//!
//! ledger.change_basis(BasisPreset::NoMarkup.into()).unwrap();
//! assert_eq!(ledger.total().units(), 14);
//!
//! let tags: Vec<_> = ledger.tags().collect();
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[0].avatar_key.as_str(), "G1P0");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod ledger;
pub mod money;
pub mod pricing;
pub mod tag;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{InMemoryCatalog, MaterialCatalog};
pub use error::{CoreError, CoreResult};
pub use ledger::{CutlistLedger, LedgerSummary};
pub use money::Money;
pub use pricing::{price, quote, unit_price, Quote};
pub use tag::{select_tag, AvatarKey, Tag, TagBatch, TagLabel, TagOrientation};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Markup applied when no basis is chosen (counter rate).
pub const DEFAULT_BASIS_PERCENT: f64 = 75.0;

/// Banding price per metre of banded edge.
pub const EDGE_BANDING_RATE_PER_METER: f64 = 3.0;

/// Shortest side the saw accepts, in millimetres.
///
/// Enforced by the form validator, not by the ledger.
pub const MIN_SIDE_MM: u32 = 60;

/// Longest side the saw accepts, in millimetres.
pub const MAX_SIDE_MM: u32 = 2750;

/// Largest number of banded edges per side.
pub const MAX_BORDERS_PER_SIDE: u8 = 2;
