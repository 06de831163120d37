//! Platform Selector Component
//!
//! Radio group for the target platform.

use leptos::prelude::*;
use task_form::Platform;

/// One radio per platform; exactly one is checked
#[component]
pub fn PlatformSelector(
    #[prop(into)] selected: Signal<Platform>,
    on_change: impl Fn(Platform) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="platform-picker">
            <p class="section-title">"Pick a platform"</p>
            <div class="platform-options">
                {Platform::ALL.iter().map(|platform| {
                    let platform = *platform;
                    view! {
                        <label class="platform-option">
                            <input
                                type="radio"
                                name="project-management"
                                value=platform.as_str()
                                prop:checked=move || selected.get() == platform
                                on:change=move |_| on_change(platform)
                            />
                            <p>{platform.label()}</p>
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
