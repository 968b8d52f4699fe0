//! Todo-Board App
//!
//! Main application component: heading, input form, and the
//! controls-plus-list block shown once the board has items.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewTodoForm, SummaryBar, TodoList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide the store to all children
    provide_context(store);

    // Console trace whenever the list or filter changes
    Effect::new(move |_| {
        let count = store.items().get().len();
        let filter = store.filter().get();
        web_sys::console::log_1(&format!("[BOARD] {} items, filter={:?}", count, filter).into());
    });

    view! {
        <section class="todo-board">
            <h1>"TODOS"</h1>

            <NewTodoForm />

            // Summary, filters, and list only exist once items do;
            // an empty board shows nothing but the input.
            {move || (!store.items().get().is_empty()).then(|| view! {
                <SummaryBar />
                <TodoList />
            })}
        </section>
    }
}
