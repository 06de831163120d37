//! Response Panel Component
//!
//! Generated task text with a copy button.

use leptos::prelude::*;

#[component]
pub fn ResponsePanel(
    #[prop(into)] response: Signal<String>,
    on_copy: impl Fn() + Copy + 'static,
) -> impl IntoView {
    view! {
        <section class="response-panel">
            <p class="section-title">"Here you go..."</p>
            // white-space: break-spaces keeps the text exactly as received
            <p class="response-text">{move || response.get()}</p>
            <button type="button" class="copy-btn" on:click=move |_| on_copy()>
                <span>"Copy"</span>
                <span class="copy-icon">"⧉"</span>
            </button>
        </section>
    }
}
