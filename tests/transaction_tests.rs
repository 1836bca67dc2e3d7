/// Transaction tests
///
/// Tests for nested transaction support (BEGIN, COMMIT, ROLLBACK)
/// Run with: cargo test --test transaction_tests

use memokv::{CommitMode, InMemoryStore, KeyValueStore, StoreConfig};

fn nested_store() -> KeyValueStore<i64> {
    KeyValueStore::with_config(StoreConfig::new().commit_mode(CommitMode::Nested))
}

#[test]
fn test_rollback_of_set_on_new_key() {
    let mut store: KeyValueStore<i64> = KeyValueStore::new();
    let before = store.count(None);

    store.begin();
    store.set("a", 1);
    store.rollback();

    assert_eq!(store.get("a"), None);
    assert_eq!(store.count(None), before);
}

#[test]
fn test_rollback_of_set_on_existing_key() {
    let mut store = KeyValueStore::new();
    store.set("a", 1);
    store.commit();

    store.begin();
    store.set("a", 2);
    store.rollback();

    assert_eq!(store.get("a"), Some(&1));
    assert_eq!(store.count(None), 1);
}

#[test]
fn test_rollback_of_del() {
    let mut store = KeyValueStore::new();
    store.set("a", 1);

    store.begin();
    store.del("a");
    assert_eq!(store.count(None), 0);
    store.rollback();

    assert_eq!(store.get("a"), Some(&1));
    assert_eq!(store.count(None), 1);
}

#[test]
fn test_nested_rollback_unwinds_one_level() {
    let mut store = KeyValueStore::new();

    store.begin();
    store.set("a", 1);
    store.begin();
    store.set("a", 2);

    store.rollback();
    assert_eq!(store.get("a"), Some(&1));
    assert_eq!(store.begin_depth(), 1);

    store.rollback();
    assert_eq!(store.get("a"), None);
    assert_eq!(store.begin_depth(), 0);
}

#[test]
fn test_commit_discards_all_pending_undo_state() {
    let mut store = KeyValueStore::new();

    store.begin();
    store.set("a", 1);
    store.begin();
    store.set("a", 2);
    store.commit();

    store.rollback();
    assert_eq!(store.get("a"), Some(&2));
    assert_eq!(store.pending_undo(), 0);
}

#[test]
fn test_rollback_without_begin_is_noop() {
    let mut store = KeyValueStore::new();
    store.set("a", 1);
    store.set("b", 2);
    store.del("b");

    store.rollback();
    store.rollback();

    assert_eq!(store.get("a"), Some(&1));
    assert_eq!(store.get("b"), None);
    assert_eq!(store.count(None), 1);
}

#[test]
fn test_rollback_multiple_mutations_same_key() {
    let mut store = KeyValueStore::new();
    store.set("k", 10);

    store.begin();
    store.set("k", 11);
    store.del("k");
    store.set("k", 12);
    store.set("other", 1);
    store.rollback();

    assert_eq!(store.get("k"), Some(&10));
    assert_eq!(store.get("other"), None);
    assert_eq!(store.count(None), 1);
}

#[test]
fn test_deep_nesting() {
    let mut store = KeyValueStore::new();

    for depth in 0..50 {
        store.begin();
        store.set("level", depth);
    }
    assert_eq!(store.begin_depth(), 50);

    for expected in (0..49).rev() {
        store.rollback();
        assert_eq!(store.get("level"), Some(&expected));
    }

    store.rollback();
    assert_eq!(store.get("level"), None);
    assert_eq!(store.begin_depth(), 0);
}

#[test]
fn test_empty_scope_rollback() {
    let mut store = KeyValueStore::new();
    store.set("a", 1);

    store.begin();
    store.begin();
    store.rollback();
    assert_eq!(store.begin_depth(), 1);
    assert_eq!(store.get("a"), Some(&1));
}

#[test]
fn test_nested_commit_keeps_outer_scope_open() {
    let mut store = nested_store();

    store.begin();
    store.set("a", 1);
    store.begin();
    store.set("b", 2);
    store.commit();

    assert!(store.in_transaction());
    assert_eq!(store.get("b"), Some(&2));

    store.rollback();
    assert_eq!(store.get("a"), None);
    assert_eq!(store.get("b"), None);
    assert_eq!(store.count(None), 0);
    assert!(!store.in_transaction());
}

#[test]
fn test_nested_commit_then_inner_rollback() {
    let mut store = nested_store();

    store.begin();
    store.set("a", 1);
    store.begin();
    store.set("a", 2);
    store.commit();

    store.begin();
    store.set("a", 3);
    store.rollback();

    assert_eq!(store.get("a"), Some(&2));
    assert_eq!(store.begin_depth(), 1);
}

#[test]
fn test_nested_commit_outside_transaction_drops_log() {
    let mut store = nested_store();
    store.set("a", 1);
    store.set("a", 2);
    assert_eq!(store.pending_undo(), 2);

    store.commit();
    assert_eq!(store.pending_undo(), 0);
    assert_eq!(store.get("a"), Some(&2));
}
