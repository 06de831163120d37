//! Toaster Component
//!
//! Overlay rendering the toast store. Clicking a toast dismisses it.

use leptos::prelude::*;

use crate::models::Toast;
use crate::store::{store_dismiss_toast, use_toast_store, ToastStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_toast_store();

    view! {
        <div class="toaster">
            <For
                each=move || store.toasts().get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class() on:click=move |_| store_dismiss_toast(&store, id)>
                            <span class="toast-icon">{toast.icon()}</span>
                            <span class="toast-message">{toast.message.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
