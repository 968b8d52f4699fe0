//! Summary Bar Component
//!
//! Remaining-item counter, filter bar, and the clear button.

use leptos::prelude::*;

use crate::components::FilterBar;
use crate::list::remaining_count;
use crate::store::{store_clear_completed, use_app_store, AppStateStoreFields};

/// Control row shown above the list while the board is non-empty
#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_app_store();

    let remaining = move || remaining_count(&store.items().get());

    view! {
        <div class="summary-bar">
            <p class="items-left">{move || format!("{} items left", remaining())}</p>
            <FilterBar />
            <button
                type="button"
                class="clear-btn"
                on:click=move |_| store_clear_completed(&store)
            >
                "Clear"
            </button>
        </div>
    }
}
