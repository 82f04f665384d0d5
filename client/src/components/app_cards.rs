//! App card carousel.

use leptos::prelude::*;
use shell::component::Component;

use crate::state::catalog::APPS;
use crate::state::home::HomeState;

#[component]
pub fn AppCards() -> impl IntoView {
    super::status_on_mount(Component::Apps);

    let home = expect_context::<RwSignal<HomeState>>();
    let focused = move || home.get().apps.index;

    view! {
        <section class="carousel carousel--apps">
            <button class="carousel__nav" title="Previous app" on:click=move |_| home.update(|h| h.apps.prev())>
                "\u{2039}"
            </button>
            <div class="carousel__track">
                {APPS
                    .iter()
                    .enumerate()
                    .map(|(index, app)| {
                        view! {
                            <button
                                class="app-card"
                                class:app-card--focused=move || focused() == index
                                on:click=move |_| home.update(|h| h.apps.select(index))
                            >
                                <span class="app-card__glyph">{app.glyph}</span>
                                <span class="app-card__name">{app.name}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="carousel__nav" title="Next app" on:click=move |_| home.update(|h| h.apps.next())>
                "\u{203A}"
            </button>
        </section>
    }
}
