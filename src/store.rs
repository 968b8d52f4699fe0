//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list;
use crate::models::{Filter, Item};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// All items, in insertion order
    pub items: Vec<Item>,
    /// Currently selected view filter
    pub filter: Filter,
    /// Monotonic source for item ids
    pub next_id: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each helper takes at most one store write guard at a time.

/// Append a new item to the store. Empty text is a no-op.
pub fn store_add_item(store: &AppStore, text: &str) {
    let mut next_id = store.next_id().get();
    let added = list::add_item(&mut store.items().write(), &mut next_id, text);
    if added.is_some() {
        *store.next_id().write() = next_id;
    }
}

/// Flip the completion flag of the item with the given id
pub fn store_toggle_item(store: &AppStore, id: &str) {
    list::toggle_item(&mut store.items().write(), id);
}

/// Reset every item to incomplete, keeping all rows
pub fn store_clear_completed(store: &AppStore) {
    list::clear_completed(&mut store.items().write());
}

/// Select the view filter
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    *store.filter().write() = filter;
}
