//! Bottom taskbar switching between home sections.

use leptos::prelude::*;
use shell::component::Component;

use crate::state::home::{HomeState, Section};

#[component]
pub fn Navigation() -> impl IntoView {
    super::status_on_mount(Component::Navigation);

    let home = expect_context::<RwSignal<HomeState>>();
    let active = move || home.get().section;

    view! {
        <nav class="taskbar">
            <span class="taskbar__start">"\u{25C6}"</span>
            {Section::ALL
                .into_iter()
                .map(|section| {
                    view! {
                        <button
                            class="taskbar__item"
                            class:taskbar__item--active=move || active() == section
                            on:click=move |_| home.update(|h| h.section = section)
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
