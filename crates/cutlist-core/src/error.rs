//! # Error Types
//!
//! Domain-specific error types for cutlist-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cutlist-core errors (this file)                                       │
//! │  └── CoreError        - Pricing, ledger and snapshot failures          │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the operator sees (with error code)       │
//! │                                                                         │
//! │  Flow: CoreError → CliError → stderr + exit code                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (entry id, material id, etc.)
//! 3. Errors are enum variants, never String
//! 4. A failed operation never leaves the ledger half-mutated

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Material sheet area is not positive, so no price can be derived.
    ///
    /// ## When This Occurs
    /// - A catalog entry was saved with a zero width or height
    /// - A snapshot was edited by hand and carries a broken material
    ///
    /// Fatal to the single `add`/`change_basis` call only.
    #[error("Material {material_id} has invalid sheet size {width} x {height}")]
    InvalidMaterial {
        material_id: String,
        width: f64,
        height: f64,
    },

    /// Material sheet price is negative, not finite, or so large that a
    /// piece price no longer fits in [`Money`](crate::Money).
    #[error("Material {material_id} has invalid price {price}")]
    InvalidMaterialPrice { material_id: String, price: f64 },

    /// Edit or remove referenced an id that is not in the ledger.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// Material id could not be resolved through the catalog.
    #[error("Material not found: {0}")]
    MaterialNotFound(String),

    /// Pricing basis is not a positive finite percentage.
    #[error("Invalid pricing basis: {0}")]
    InvalidBasis(String),

    /// Two entries in a snapshot share the same id.
    #[error("Duplicate entry id in snapshot: {0}")]
    DuplicateEntry(String),

    /// A snapshot entry whose quantity is zero or whose prices disagree
    /// (`line_total != quantity × unit_price`, or a negative unit price).
    #[error("Inconsistent entry in snapshot: {0}")]
    InconsistentEntry(String),

    /// Snapshot JSON could not be read or written.
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidMaterial {
            material_id: "mdf-18".to_string(),
            width: 0.0,
            height: 1850.0,
        };
        assert_eq!(
            err.to_string(),
            "Material mdf-18 has invalid sheet size 0 x 1850"
        );

        let err = CoreError::InvalidMaterialPrice {
            material_id: "mdf-18".to_string(),
            price: -5.0,
        };
        assert_eq!(err.to_string(), "Material mdf-18 has invalid price -5");

        let err = CoreError::EntryNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Entry not found: abc");
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::Snapshot(_)));
    }
}
