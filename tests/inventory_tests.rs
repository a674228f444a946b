mod common;

use common::{key, mixed_inventory, ItemBuilder};
use cogforge::config::ScoringWeights;
use cogforge::error::CogForgeError;
use cogforge::geometry::{Position, Zone};
use cogforge::inventory::{BoostRadius, Inventory, SlotState};
use rstest::rstest;

#[test]
fn test_move_and_back_restores_score() {
    let mut inv = mixed_inventory();
    let weights = ScoringWeights::new(1.0, 2.0, 0.5);
    let before = inv.score(&weights);

    let from = key(1, 0);
    let to = key(3, 3);
    assert!(inv.get(to).is_none());

    inv.move_item(from, to).unwrap();
    assert!(inv.get(from).is_none());
    assert_eq!(inv.get(to).unwrap().id, 0);
    inv.move_item(to, from).unwrap();
    assert_eq!(inv.score(&weights), before);
}

#[rstest]
#[case::into_blocked(key(1, 0), key(0, 0))]
#[case::into_flag(key(1, 0), key(4, 6))]
#[case::out_of_fixed(key(7, 0), key(3, 3))]
#[case::onto_fixed(key(1, 0), key(7, 0))]
#[case::from_empty(key(3, 3), key(1, 0))]
fn test_invalid_moves_leave_inventory_untouched(#[case] from: u32, #[case] to: u32) {
    let mut inv = mixed_inventory();
    let before = inv.to_snapshot();

    let err = inv.move_item(from, to).unwrap_err();
    assert!(matches!(err, CogForgeError::InvalidMove { .. }));

    let after = inv.to_snapshot();
    assert_eq!(
        serde_json::to_string(&before).unwrap(),
        serde_json::to_string(&after).unwrap()
    );
}

#[test]
fn test_move_to_storage_drops_item_from_score() {
    let mut inv = Inventory::new();
    inv.place(key(2, 2), ItemBuilder::new(1).build_rate(7.0).build())
        .unwrap();
    assert_eq!(inv.metrics().build_rate, 7.0);

    inv.move_item(key(2, 2), 110).unwrap();
    assert_eq!(inv.metrics().build_rate, 0.0);
    assert_eq!(Position::from_key(110).zone, Zone::Spare);
}

#[test]
fn test_slot_queries() {
    let inv = mixed_inventory();
    assert_eq!(inv.slot_state(key(4, 6)), SlotState::Flag);
    assert_eq!(inv.slot_state(key(0, 0)), SlotState::Blocked);
    assert_eq!(inv.open_board_keys().len(), 93);
    // fixed anchor excluded
    assert_eq!(inv.movable_board_keys().len(), 92);
    assert_eq!(inv.movable_items().len(), 23);
}

#[test]
fn test_blocked_former_flag_collects_nothing() {
    let mut inv = Inventory::new();
    inv.add_flag(key(5, 5)).unwrap();
    inv.place(
        key(5, 4),
        ItemBuilder::new(1)
            .radius(BoostRadius::Adjacent)
            .flag_boost(4.0)
            .build(),
    )
    .unwrap();
    assert_eq!(inv.metrics().flag_boost, 4.0);

    inv.block_slot(key(5, 5)).unwrap();
    assert_eq!(inv.slot_state(key(5, 5)), SlotState::Blocked);
    assert!(inv.flag_positions().is_empty());
    assert_eq!(inv.metrics().flag_boost, 0.0);

    let reloaded = Inventory::from_snapshot(inv.to_snapshot()).unwrap();
    assert_eq!(reloaded.slot_state(key(5, 5)), SlotState::Blocked);
    assert_eq!(reloaded.metrics().flag_boost, 0.0);
}

#[test]
fn test_snapshot_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");

    let inv = mixed_inventory();
    inv.save_to_file(&path).unwrap();
    let loaded = Inventory::load_from_file(&path).unwrap();

    let weights = ScoringWeights::default();
    assert_eq!(loaded.score(&weights), inv.score(&weights));
    assert_eq!(loaded.len(), inv.len());
    assert!(loaded.get(key(7, 0)).unwrap().fixed);
}

#[test]
fn test_malformed_snapshot_is_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ items: [").unwrap();

    assert!(matches!(
        Inventory::load_from_file(&path),
        Err(CogForgeError::Json(_))
    ));
}
