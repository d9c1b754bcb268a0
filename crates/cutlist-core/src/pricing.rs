//! # Pricing Module
//!
//! The price formula for one cut request.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  material_cost = side_a × side_b × sheet_price × (1 + basis/100)        │
//! │                  ───────────────────────────────────────────────        │
//! │                              sheet_width × sheet_height                 │
//! │                                                                         │
//! │  edge_cost     = 3 × (side_a × border_a + side_b × border_b) / 1000     │
//! │                                                                         │
//! │  unit_price    = ceil(material_cost + edge_cost)      ◄── only rounding │
//! │  line_total    = quantity × unit_price                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rounding happens once per unit, before quantity scaling, so
//! `price(q = n) == n × price(q = 1)` holds exactly.
//!
//! ## Example
//! ```rust
//! use cutlist_core::pricing::price;
//! use cutlist_core::{Material, Piece, PricingBasis};
//!
//! let board = Material {
//!     id: "mdf-18".to_string(),
//!     name: "MDF 18mm".to_string(),
//!     width: 2750.0,
//!     height: 1850.0,
//!     price: 100.0,
//! };
//! let piece = Piece::new(2, 600, 400).with_borders(1, 0);
//!
//! let total = price(&board, &piece, PricingBasis::default()).unwrap();
//! assert_eq!(total.units(), 22);
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Material, Piece, PricingBasis};
use crate::EDGE_BANDING_RATE_PER_METER;

/// Unit price and line total of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub unit_price: Money,
    pub line_total: Money,
}

/// Prices one unit of `piece`, rounded up to whole currency units.
///
/// ## Errors
/// - `InvalidMaterial` when the sheet area is not positive
/// - `InvalidMaterialPrice` when the sheet price is negative or not finite,
///   or the unit price does not fit in [`Money`]
pub fn unit_price(material: &Material, piece: &Piece, basis: PricingBasis) -> CoreResult<Money> {
    let area_total = material.area();
    if !(area_total.is_finite() && area_total > 0.0) {
        return Err(CoreError::InvalidMaterial {
            material_id: material.id.clone(),
            width: material.width,
            height: material.height,
        });
    }

    if !(material.price.is_finite() && material.price >= 0.0) {
        return Err(invalid_price(material));
    }

    let area_piece = piece.side_a as f64 * piece.side_b as f64;
    let material_cost = area_piece * material.price * basis.factor() / area_total;
    let edge_cost = EDGE_BANDING_RATE_PER_METER * piece.edge_length_mm() / 1000.0;

    let cost = material_cost + edge_cost;
    // i64::MAX as f64 rounds up to 2^63, which no longer fits
    if !(cost.is_finite() && cost < i64::MAX as f64) {
        return Err(invalid_price(material));
    }
    Ok(Money::ceil_from(cost))
}

/// Prices `piece.quantity` units of `piece`.
pub fn price(material: &Material, piece: &Piece, basis: PricingBasis) -> CoreResult<Money> {
    Ok(quote(material, piece, basis)?.line_total)
}

/// Prices `piece` and returns both the unit price and the line total.
pub fn quote(material: &Material, piece: &Piece, basis: PricingBasis) -> CoreResult<Quote> {
    let unit_price = unit_price(material, piece, basis)?;
    let line_total = unit_price
        .checked_multiply_quantity(piece.quantity)
        .ok_or_else(|| invalid_price(material))?;
    Ok(Quote {
        unit_price,
        line_total,
    })
}

fn invalid_price(material: &Material) -> CoreError {
    CoreError::InvalidMaterialPrice {
        material_id: material.id.clone(),
        price: material.price,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
