//! End-to-end flow over the public API: catalog → ledger → basis change →
//! snapshot → tags.

use cutlist_core::{
    AvatarKey, BasisPreset, CoreError, CutlistLedger, EntryInput, InMemoryCatalog, Material,
    MaterialCatalog, Piece, PricingBasis, TagLabel,
};

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        Material {
            id: "mdf-18".to_string(),
            name: "MDF 18mm".to_string(),
            width: 2750.0,
            height: 1850.0,
            price: 100.0,
        },
        Material {
            id: "ply-15".to_string(),
            name: "Birch ply 15mm".to_string(),
            width: 2500.0,
            height: 1250.0,
            price: 180.0,
        },
    ])
}

fn input(material_id: &str, piece: Piece) -> EntryInput {
    EntryInput {
        material_id: material_id.to_string(),
        piece,
    }
}

#[test]
fn order_session_end_to_end() {
    let catalog = catalog();
    let mut basis = PricingBasis::default();
    let mut ledger = CutlistLedger::new();

    ledger
        .add_from_catalog(&catalog, &input("mdf-18", Piece::new(2, 600, 400).with_borders(1, 0)), basis)
        .unwrap();
    ledger
        .add_from_catalog(&catalog, &input("ply-15", Piece::new(1, 500, 1200).with_borders(2, 1)), basis)
        .unwrap();
    ledger
        .add_from_catalog(&catalog, &input("mdf-18", Piece::new(3, 800, 800)), basis)
        .unwrap();
    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.entries()[0].line_total.units(), 22);

    // Trade customer walks in: switch to the cabinetmaker rate.
    let ids_before: Vec<String> = ledger.entries().iter().map(|e| e.id.clone()).collect();
    let total_before = ledger.total();
    basis = BasisPreset::CabinetmakerRate.into();
    ledger.change_basis(basis).unwrap();
    let ids_after: Vec<String> = ledger.entries().iter().map(|e| e.id.clone()).collect();
    assert_eq!(ids_after, ids_before);
    assert!(ledger.total() <= total_before);

    // Fix the plywood quantity through the edit workflow.
    let mut draft = ledger.start_edit(&ids_before[1]).unwrap();
    draft.piece.quantity = 2;
    ledger.add_from_catalog(&catalog, &draft, basis).unwrap();
    let last = ledger.entries().last().unwrap();
    assert_eq!(last.material.id, "ply-15");
    assert_eq!(last.piece.quantity, 2);
    assert_eq!(ledger.entries()[1].id, ids_before[2]);

    // Share the estimate and print tags from the other side.
    let json = ledger.to_json().unwrap();
    let shared = CutlistLedger::from_json(&json).unwrap();
    assert_eq!(shared, ledger);
    assert_eq!(shared.total(), ledger.total());

    let labels: Vec<TagLabel> = shared.tags().into_labels();
    assert_eq!(labels.len() as u64, shared.piece_count());
    assert_eq!(labels.len(), 7);
    assert!(labels.windows(2).all(|w| w[0].gside >= w[1].gside));
    assert_eq!(labels[0].gside, 1200);
    assert_eq!(labels[0].avatar_key, AvatarKey::G1P2);
    assert_eq!(labels[0].material_name, "Birch ply 15mm");
}

#[test]
fn snapshot_keeps_frozen_material_after_catalog_change() {
    let mut catalog = catalog();
    let mut ledger = CutlistLedger::new();
    ledger
        .add_from_catalog(&catalog, &input("mdf-18", Piece::new(1, 1000, 1000)), PricingBasis::default())
        .unwrap();

    let mut pricier = catalog.resolve("mdf-18").unwrap();
    pricier.price = 500.0;
    catalog.insert(pricier);

    // Re-pricing uses the stored snapshot, not the catalog.
    let before = ledger.entries()[0].unit_price;
    ledger.change_basis(PricingBasis::default()).unwrap();
    assert_eq!(ledger.entries()[0].unit_price, before);
    assert_eq!(ledger.entries()[0].material.price, 100.0);
}

#[test]
fn unknown_ids_are_reported() {
    let mut ledger = CutlistLedger::new();
    assert!(matches!(ledger.remove("nope"), Err(CoreError::EntryNotFound(_))));
    assert!(matches!(ledger.start_edit("nope"), Err(CoreError::EntryNotFound(_))));
    assert!(matches!(
        ledger.add_from_catalog(&catalog(), &input("oak", Piece::new(1, 100, 100)), PricingBasis::default()),
        Err(CoreError::MaterialNotFound(_))
    ));
    assert!(ledger.is_empty());
}

#[test]
fn snapshot_wire_format_is_plain_data() {
    let json = r#"[
        {
            "id": "7f1c",
            "material": {"id": "mdf-18", "name": "MDF 18mm", "width": 2750.0, "height": 1850.0, "price": 100.0},
            "quantity": 2,
            "sideA": 600,
            "sideB": 400,
            "borderA": 1,
            "borderB": 0,
            "unitPrice": 11,
            "lineTotal": 22
        }
    ]"#;

    let ledger = CutlistLedger::from_json(json).unwrap();
    assert_eq!(ledger.entries()[0].id, "7f1c");
    assert_eq!(ledger.entries()[0].piece, Piece::new(2, 600, 400).with_borders(1, 0));
    assert_eq!(ledger.total().units(), 22);

    let reparsed: serde_json::Value = serde_json::from_str(&ledger.to_json().unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(reparsed, original);
}
