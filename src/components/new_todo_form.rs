//! New Todo Form Component
//!
//! Input field and submit button for creating items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_add_item, use_app_store};

/// Form for appending a new item to the board
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let (draft, set_draft) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get();
        if text.is_empty() {
            return;
        }
        store_add_item(&store, &text);
        set_draft.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=submit>
            <input
                type="text"
                placeholder="Add todo"
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_draft.set(input.value());
                }
            />
            <button type="submit" disabled=move || draft.get().is_empty()>
                "Submit"
            </button>
        </form>
    }
}
