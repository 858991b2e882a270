use crate::modules::entertainers::adapters::outbound::in_memory::InMemoryEntertainerStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> (AppState, Arc<InMemoryEntertainerStore>) {
    let store = Arc::new(InMemoryEntertainerStore::new());
    (AppState::from_store(store.clone()), store)
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryEntertainerStore::new();
    store.toggle_offline();
    AppState::from_store(Arc::new(store))
}
