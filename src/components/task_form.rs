//! Task Form Component
//!
//! Description input, platform picker, create button and the generated result.
//! All operations go through `FormController`; its render callback mirrors each
//! state snapshot into a signal.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use task_form::{FormConfig, FormController, FormState};
use wasm_bindgen::JsCast;

use crate::commands::{BrowserClipboard, HttpTaskClient};
use crate::components::{PlatformSelector, ResponsePanel};
use crate::store::use_toast_store;
use crate::toast::{ToastNotifier, ToastTimings};

type Controller = FormController<HttpTaskClient, BrowserClipboard, ToastNotifier>;

#[component]
pub fn TaskForm() -> impl IntoView {
    let toasts = use_toast_store();
    let config = FormConfig::default();
    let min_len = config.min_description_len;

    let (form, set_form) = signal(FormState::new());

    let client = HttpTaskClient::new(&config);
    let notifier = ToastNotifier::new(toasts, ToastTimings::default());
    let controller: Controller = FormController::new(config, client, BrowserClipboard, notifier)
        .with_on_change(move |state| set_form.set(state.clone()));
    let controller = StoredValue::new_local(Rc::new(controller));

    let submit = move || {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    let copy = move || {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.copy_response().await;
        });
    };

    view! {
        <div class="task-form">
            <textarea
                class="description-input"
                placeholder="Describe the issue, i'll do the rest..."
                prop:value=move || form.with(|s| s.description.clone())
                on:input=move |ev| {
                    let Some(area) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok())
                    else {
                        return;
                    };
                    controller.with_value(|c| c.update_description(area.value()));
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    // Ctrl/Cmd+Enter submits; submit() applies the same gate as the button
                    if ev.key() == "Enter" && (ev.ctrl_key() || ev.meta_key()) {
                        ev.prevent_default();
                        submit();
                    }
                }
            ></textarea>
            <p class="char-count">{move || format!("{} characters", form.with(|s| s.trimmed_len()))}</p>

            <PlatformSelector
                selected=Signal::derive(move || form.with(|s| s.selected_platform))
                on_change=move |platform| controller.with_value(|c| c.select_platform(platform))
            />

            <button
                type="button"
                class="create-btn"
                disabled=move || form.with(|s| !s.can_submit(min_len))
                on:click=move |_| submit()
            >
                {move || if form.with(|s| s.is_loading) { "Loading..." } else { "Create" }}
            </button>

            <Show when=move || form.with(|s| s.has_response())>
                <ResponsePanel
                    response=Signal::derive(move || form.with(|s| s.response.clone()))
                    on_copy=copy
                />
            </Show>
        </div>
    }
}
