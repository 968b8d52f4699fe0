//! Todo Row Component
//!
//! Individual item row: checkbox toggle plus labeled text.

use leptos::prelude::*;

use crate::models::Item;
use crate::store::{store_toggle_item, use_app_store};

/// A single item row
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let completed = item.completed;
    let text = item.text.clone();
    let label_for = item.id.clone();
    let toggle_id = item.id.clone();

    view! {
        <div class=move || if completed { "todo-row completed" } else { "todo-row" }>
            <input
                type="checkbox"
                id=item.id.clone()
                checked=completed
                on:change=move |_| store_toggle_item(&store, &toggle_id)
            />
            // The label carries the item's own text, so the toggle is
            // addressable by that text and clicking it flips the checkbox.
            <label
                for=label_for
                class=move || if completed { "todo-text line-through" } else { "todo-text" }
            >
                {text}
            </label>
        </div>
    }
}
