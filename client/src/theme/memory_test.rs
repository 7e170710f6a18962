use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryStore::new().get(), None);
}

#[test]
fn memory_store_set_then_get_round_trips() {
    let store = MemoryStore::new();
    store.set("dark");
    assert_eq!(store.get().as_deref(), Some("dark"));
    store.set("light");
    assert_eq!(store.get().as_deref(), Some("light"));
}

#[test]
fn memory_store_with_value_reads_back_seed() {
    assert_eq!(MemoryStore::with_value("dark").get().as_deref(), Some("dark"));
}

#[test]
fn read_only_store_drops_writes() {
    let store = MemoryStore::read_only();
    store.set("dark");
    assert_eq!(store.get(), None);
}

// =============================================================
// MemoryMarker
// =============================================================

#[test]
fn memory_marker_starts_absent() {
    assert!(!MemoryMarker::new().has());
}

#[test]
fn memory_marker_add_and_remove_track_presence() {
    let marker = MemoryMarker::new();
    marker.add();
    assert!(marker.has());
    marker.remove();
    assert!(!marker.has());
}

#[test]
fn memory_marker_set_present_overrides_state() {
    let marker = MemoryMarker::new();
    marker.set_present(true);
    assert!(marker.has());
    marker.set_present(false);
    assert!(!marker.has());
}
