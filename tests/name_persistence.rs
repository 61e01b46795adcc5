mod common;

use common::{names, open_store, temp_slots, write_names_cache};
use spillpay::cache::CACHED_NAMES_SLOT;
use spillpay::storage::SlotStore;

#[test]
fn names_survive_restart_with_fresh_ids_and_zero_orders() {
    let (dir, _) = temp_slots();

    let mut store = open_store(dir.path());
    let first = store.participants()[0].id;
    store.update_name(first, "Alice").unwrap();
    let second = store.add_participant();
    store.update_name(second, "Bob").unwrap();
    store.update_order(first, "12.5").unwrap();
    store.update_order(second, "7").unwrap();
    drop(store);

    let restored = open_store(dir.path());
    assert_eq!(names(&restored), vec!["Alice", "Bob"]);
    for participant in restored.participants() {
        assert_eq!(participant.order.value(), 0.0);
        assert_ne!(participant.id, first);
        assert_ne!(participant.id, second);
    }
}

#[test]
fn first_run_starts_with_one_blank_participant() {
    let (dir, slots) = temp_slots();
    let store = open_store(dir.path());
    assert_eq!(names(&store), vec![""]);
    assert!(slots.read(CACHED_NAMES_SLOT).unwrap().is_none());
}

#[test]
fn adding_a_participant_does_not_touch_the_cache() {
    let (dir, slots) = temp_slots();
    let mut store = open_store(dir.path());
    store.add_participant();
    assert!(slots.read(CACHED_NAMES_SLOT).unwrap().is_none());
}

#[test]
fn removal_is_persisted() {
    let (dir, _) = temp_slots();
    let mut store = open_store(dir.path());
    let first = store.participants()[0].id;
    store.update_name(first, "Alice").unwrap();
    let second = store.add_participant();
    store.update_name(second, "Bob").unwrap();
    store.remove_participant(first).unwrap();

    assert_eq!(names(&open_store(dir.path())), vec!["Bob"]);
}

#[test]
fn cache_file_is_a_json_array_of_name_order_objects() {
    let (dir, slots) = temp_slots();
    let mut store = open_store(dir.path());
    let first = store.participants()[0].id;
    store.update_name(first, "Alice").unwrap();

    let bytes = slots.read(CACHED_NAMES_SLOT).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, serde_json::json!([{ "name": "Alice", "order": 0.0 }]));
}

#[test]
fn malformed_cache_falls_back_to_one_blank_participant() {
    let (dir, _) = temp_slots();
    for bytes in [&b"not json"[..], b"", b"{\"name\":\"x\"}", b"[]", b"[{\"order\":1}]"] {
        write_names_cache(dir.path(), bytes);
        let store = open_store(dir.path());
        assert_eq!(names(&store), vec![""], "cache {:?}", String::from_utf8_lossy(bytes));
    }
}

#[test]
fn unknown_fields_in_cache_are_ignored() {
    let (dir, _) = temp_slots();
    write_names_cache(
        dir.path(),
        br#"[{"name":"Alice","order":0,"colour":"red"},{"name":"Bob"}]"#,
    );
    assert_eq!(names(&open_store(dir.path())), vec!["Alice", "Bob"]);
}
