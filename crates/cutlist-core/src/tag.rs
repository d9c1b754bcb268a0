//! # Tag Module
//!
//! Orientation and tag selection for printed piece labels.
//!
//! ## Orientation Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  side_a = 1000, border_a = 1          gside = 1000, gborder = 1        │
//! │  side_b =  500, border_b = 2   ──►    pside =  500, pborder = 2        │
//! │                                       avatar = G1P2                     │
//! │                                                                         │
//! │  The larger side is always "G" (grande), the other "P" (pequeño).       │
//! │  Equal sides: side A is G.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Avatar Table
//! ```text
//!              pborder 0   pborder 1   pborder 2
//! gborder 0      G0P0        G0P1        G0P2
//! gborder 1      G1P0        G1P1        G1P2
//! gborder 2      G2P0        G2P1        G2P2
//! ```
//! Border counts outside 0..=2 fall back to `G0P0`.

use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CutPiece, Piece};

// =============================================================================
// Avatar Key
// =============================================================================

/// Visual tag identifier for a banding configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AvatarKey {
    G0P0,
    G0P1,
    G0P2,
    G1P0,
    G1P1,
    G1P2,
    G2P0,
    G2P1,
    G2P2,
}

const AVATAR_TABLE: [[AvatarKey; 3]; 3] = [
    [AvatarKey::G0P0, AvatarKey::G0P1, AvatarKey::G0P2],
    [AvatarKey::G1P0, AvatarKey::G1P1, AvatarKey::G1P2],
    [AvatarKey::G2P0, AvatarKey::G2P1, AvatarKey::G2P2],
];

impl AvatarKey {
    /// Looks up the key for a `(gborder, pborder)` pair.
    pub fn from_borders(gborder: u8, pborder: u8) -> Self {
        AVATAR_TABLE
            .get(gborder as usize)
            .and_then(|row| row.get(pborder as usize))
            .copied()
            .unwrap_or(AvatarKey::G0P0)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            AvatarKey::G0P0 => "G0P0",
            AvatarKey::G0P1 => "G0P1",
            AvatarKey::G0P2 => "G0P2",
            AvatarKey::G1P0 => "G1P0",
            AvatarKey::G1P1 => "G1P1",
            AvatarKey::G1P2 => "G1P2",
            AvatarKey::G2P0 => "G2P0",
            AvatarKey::G2P1 => "G2P1",
            AvatarKey::G2P2 => "G2P2",
        }
    }
}

impl fmt::Display for AvatarKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tag Selection
// =============================================================================

/// A piece normalized so the larger side comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TagOrientation {
    pub gside: u32,
    pub pside: u32,
    pub gborder: u8,
    pub pborder: u8,
    pub avatar_key: AvatarKey,
}

/// Orients a piece and picks its tag.
///
/// ## Example
/// ```rust
/// use cutlist_core::tag::{select_tag, AvatarKey};
/// use cutlist_core::Piece;
///
/// let tag = select_tag(&Piece::new(1, 500, 1000).with_borders(2, 1));
/// assert_eq!((tag.gside, tag.pside), (1000, 500));
/// assert_eq!(tag.avatar_key, AvatarKey::G1P2);
/// ```
pub fn select_tag(piece: &Piece) -> TagOrientation {
    let (gside, gborder, pside, pborder) = if piece.side_a >= piece.side_b {
        (piece.side_a, piece.border_a, piece.side_b, piece.border_b)
    } else {
        (piece.side_b, piece.border_b, piece.side_a, piece.border_a)
    };

    TagOrientation {
        gside,
        pside,
        gborder,
        pborder,
        avatar_key: AvatarKey::from_borders(gborder, pborder),
    }
}

// =============================================================================
// Tags
// =============================================================================

/// One physical label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub gside: u32,
    pub pside: u32,
    pub gborder: u8,
    pub pborder: u8,
    pub avatar_key: AvatarKey,
    pub material_name: String,
}

impl Tag {
    /// Builds the tag for one piece of `entry`.
    pub fn for_entry(entry: &CutPiece) -> Self {
        let o = select_tag(&entry.piece);
        Tag {
            gside: o.gside,
            pside: o.pside,
            gborder: o.gborder,
            pborder: o.pborder,
            avatar_key: o.avatar_key,
            material_name: entry.material.name.clone(),
        }
    }
}

/// What the print renderer receives for each label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TagLabel {
    pub gside: u32,
    pub pside: u32,
    pub avatar_key: AvatarKey,
    pub material_name: String,
}

impl From<Tag> for TagLabel {
    fn from(tag: Tag) -> Self {
        TagLabel {
            gside: tag.gside,
            pside: tag.pside,
            avatar_key: tag.avatar_key,
            material_name: tag.material_name,
        }
    }
}

// =============================================================================
// Tag Batch
// =============================================================================

/// Print-ready tags, one per physical piece, largest `gside` first.
///
/// Single pass: once consumed, build a new batch from the ledger.
#[derive(Debug, Clone)]
pub struct TagBatch {
    tags: std::vec::IntoIter<Tag>,
}

impl TagBatch {
    /// Expands every entry by its quantity and sorts by `gside` descending.
    ///
    /// The sort is stable, so pieces with equal `gside` keep ledger order.
    pub fn build(entries: &[CutPiece]) -> Self {
        let mut tags: Vec<Tag> = entries
            .iter()
            .flat_map(|entry| {
                let tag = Tag::for_entry(entry);
                std::iter::repeat(tag).take(entry.piece.quantity as usize)
            })
            .collect();
        tags.sort_by(|a, b| b.gside.cmp(&a.gside));

        TagBatch {
            tags: tags.into_iter(),
        }
    }

    /// Consumes the batch into renderer labels.
    pub fn into_labels(self) -> Vec<TagLabel> {
        self.map(TagLabel::from).collect()
    }
}

impl Iterator for TagBatch {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        self.tags.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tags.size_hint()
    }
}

impl ExactSizeIterator for TagBatch {}

impl FusedIterator for TagBatch {}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Material;

    fn entry(id: &str, material: &str, piece: Piece) -> CutPiece {
        CutPiece {
            id: id.to_string(),
            material: Material {
                id: material.to_lowercase(),
                name: material.to_string(),
                width: 2750.0,
                height: 1850.0,
                price: 100.0,
            },
            piece,
            unit_price: Money::from_units(1),
            line_total: Money::from_units(piece.quantity as i64),
        }
    }

    #[test]
    fn test_select_tag_larger_side_a() {
        let tag = select_tag(&Piece::new(1, 1000, 500).with_borders(1, 2));
        assert_eq!(
            tag,
            TagOrientation {
                gside: 1000,
                pside: 500,
                gborder: 1,
                pborder: 2,
                avatar_key: AvatarKey::G1P2,
            }
        );
    }

    #[test]
    fn test_select_tag_swaps_when_side_b_larger() {
        let tag = select_tag(&Piece::new(1, 300, 900).with_borders(0, 2));
        assert_eq!((tag.gside, tag.gborder), (900, 2));
        assert_eq!((tag.pside, tag.pborder), (300, 0));
        assert_eq!(tag.avatar_key, AvatarKey::G2P0);
    }

    #[test]
    fn test_tie_goes_to_side_a() {
        let tag = select_tag(&Piece::new(1, 500, 500).with_borders(2, 0));
        assert_eq!(tag.gborder, 2);
        assert_eq!(tag.pborder, 0);
        assert_eq!(tag.avatar_key, AvatarKey::G2P0);
    }

    #[test]
    fn test_all_nine_keys_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for g in 0..=2u8 {
            for p in 0..=2u8 {
                let key = AvatarKey::from_borders(g, p);
                assert_eq!(key.to_string(), format!("G{g}P{p}"));
                assert!(seen.insert(key));
            }
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_out_of_range_borders_fall_back() {
        assert_eq!(AvatarKey::from_borders(3, 0), AvatarKey::G0P0);
        assert_eq!(AvatarKey::from_borders(1, 7), AvatarKey::G0P0);
        assert_eq!(AvatarKey::from_borders(u8::MAX, u8::MAX), AvatarKey::G0P0);
    }

    #[test]
    fn test_avatar_key_serializes_as_string() {
        assert_eq!(serde_json::to_string(&AvatarKey::G1P2).unwrap(), "\"G1P2\"");
    }

    #[test]
    fn test_batch_expands_by_quantity_and_sorts() {
        let entries = vec![
            entry("a", "Pine", Piece::new(2, 400, 300)),
            entry("b", "Oak", Piece::new(1, 200, 1200).with_borders(1, 1)),
            entry("c", "Birch", Piece::new(3, 800, 800)),
        ];

        let batch = TagBatch::build(&entries);
        assert_eq!(batch.len(), 6);

        let gsides: Vec<u32> = batch.map(|t| t.gside).collect();
        assert_eq!(gsides, vec![1200, 800, 800, 800, 400, 400]);
    }

    #[test]
    fn test_batch_is_stable_for_equal_gside() {
        let entries = vec![
            entry("a", "Pine", Piece::new(1, 600, 100)),
            entry("b", "Oak", Piece::new(1, 200, 600)),
        ];
        let names: Vec<String> = TagBatch::build(&entries)
            .map(|t| t.material_name)
            .collect();
        assert_eq!(names, vec!["Pine", "Oak"]);
    }

    #[test]
    fn test_batch_is_one_shot() {
        let entries = vec![entry("a", "Pine", Piece::new(2, 400, 300))];
        let mut batch = TagBatch::build(&entries);
        assert!(batch.next().is_some());
        assert!(batch.next().is_some());
        assert!(batch.next().is_none());
        assert!(batch.next().is_none());
    }

    #[test]
    fn test_labels_carry_material_name() {
        let entries = vec![entry("a", "Walnut", Piece::new(1, 700, 350).with_borders(2, 1))];
        let labels = TagBatch::build(&entries).into_labels();
        assert_eq!(
            labels,
            vec![TagLabel {
                gside: 700,
                pside: 350,
                avatar_key: AvatarKey::G2P1,
                material_name: "Walnut".to_string(),
            }]
        );
        let json = serde_json::to_value(&labels[0]).unwrap();
        assert_eq!(json["avatarKey"], "G2P1");
        assert_eq!(json["materialName"], "Walnut");
    }
}
