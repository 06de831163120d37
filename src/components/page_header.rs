//! Page Header Component
//!
//! Title, Product Hunt badge and tagline.

use leptos::prelude::*;

const PRODUCT_HUNT_URL: &str =
    "https://www.producthunt.com/posts/taskgpt?utm_source=badge-featured&utm_medium=badge&utm_souce=badge-taskgpt";
const PRODUCT_HUNT_BADGE: &str =
    "https://api.producthunt.com/widgets/embed-image/v1/featured.svg?post_id=386484&theme=neutral";

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header>
            <div class="page-title-row">
                <h1>"🔨🤖 TaskGPT"</h1>
                <a href=PRODUCT_HUNT_URL target="_blank" rel="noreferrer">
                    <img
                        class="badge"
                        src=PRODUCT_HUNT_BADGE
                        alt="TaskGPT - Create tasks/issue names & descriptions for Jira, ClickUp... | Product Hunt"
                        width="250"
                        height="54"
                    />
                </a>
            </div>
            <p class="tagline">
                "Apparently you're too lazy to come up with better names & descriptions for issues/tasks on Jira, trello, ClickUp, etc. So i'm gonna do it for you with the power of GPT-3. God, you're so lazy smh"
            </p>
        </header>
    }
}
