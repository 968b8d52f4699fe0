//! Filter Bar Component
//!
//! Mutually exclusive view filter buttons.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{store_set_filter, use_app_store, AppStateStoreFields};

/// Filter options with their visible labels
const FILTERS: &[(Filter, &str)] = &[
    (Filter::All, "All"),
    (Filter::Active, "Active"),
    (Filter::Completed, "Completed"),
];

/// Filter selector buttons; exactly one is marked active
#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-bar">
            {FILTERS.iter().map(|(value, label)| {
                let value = *value;
                let is_selected = move || store.filter().get() == value;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store_set_filter(&store, value)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
