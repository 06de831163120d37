//! TaskGPT Frontend App
//!
//! Page shell: document metadata, toast overlay and the task form.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Link, Meta, Title};
use reactive_stores::Store;

use crate::components::{PageHeader, TaskForm, Toaster};
use crate::store::{ToastState, ToastStore};

const PAGE_TITLE: &str = "TaskGPT - Create better tasks/issue names & descriptions";
const PAGE_DESCRIPTION: &str =
    "Create meaningful task/issue names & descriptions for Jira, ClickUp, Trello, etc, with the power of GPT-3";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts: ToastStore = Store::new(ToastState::default());
    provide_context(toasts);

    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Link rel="icon" href="/favicon.ico" />

        <Toaster />
        <main class="page">
            <div class="page-body">
                <PageHeader />
                <TaskForm />
            </div>
        </main>
    }
}
