//! Todo List Component
//!
//! Renders the filtered view of the board.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::list::filter_items;
use crate::store::{use_app_store, AppStateStoreFields};

/// List of items visible under the current filter
#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible = move || filter_items(&store.items().get(), store.filter().get());

    view! {
        <div class="todo-list">
            {move || if visible().is_empty() {
                view! { <p class="empty-message">"No items to display"</p> }.into_any()
            } else {
                view! {
                    <For
                        each=visible
                        // Key on the completion flag too, so a toggle re-renders the row
                        key=|item| (item.id.clone(), item.completed)
                        children=move |item| view! { <TodoRow item=item /> }
                    />
                }.into_any()
            }}
        </div>
    }
}
